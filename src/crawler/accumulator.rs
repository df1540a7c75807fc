//! Catalog crawl loop
//!
//! Walks listing pages `1, 2, 3, ...` and accumulates offer identifiers until
//! a page contributes nothing new. The listing never says how many pages it
//! has, so the fixed point (no new identifiers) is the end-of-catalog signal.
//!
//! # State Machine
//!
//! ```text
//! Fetching(1) ──fetch+extract──▶ Evaluating(new_ids)
//!      ▲                              │
//!      └──── new_ids non-empty ───────┤
//!                                     └── empty streak reached ──▶ Done
//! ```
//!
//! Any fetch or extraction failure aborts the crawl. No partial set is
//! returned.

use crate::config::CatalogConfig;
use crate::crawler::fetcher::PageSource;
use crate::crawler::parser::extract_attribute_values;
use crate::Result;
use indexmap::IndexSet;
use url::Url;

/// Deduplicated identifiers in discovery order
pub type IdentifierSet = IndexSet<String>;

/// Knobs for a single crawl run
#[derive(Debug, Clone)]
pub struct CrawlOptions {
    /// Attribute marking product offer elements
    pub offer_attribute: String,

    /// Query parameter carrying the page ordinal
    pub page_param: String,

    /// Consecutive pages without new identifiers before stopping
    pub confirm_empty_pages: u32,

    /// Hard cap on pages examined
    pub max_pages: Option<u32>,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            offer_attribute: "data-offerid".to_string(),
            page_param: "page".to_string(),
            confirm_empty_pages: 1,
            max_pages: None,
        }
    }
}

impl From<&CatalogConfig> for CrawlOptions {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            offer_attribute: config.offer_attribute.clone(),
            page_param: config.page_param.clone(),
            confirm_empty_pages: config.confirm_empty_pages,
            max_pages: config.max_pages,
        }
    }
}

/// Why a crawl stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Reached the fixed point: no new identifiers
    Exhausted,

    /// Hit the configured page cap
    PageLimit,
}

/// Result of a successful crawl run
#[derive(Debug, Clone)]
pub struct CrawlOutcome {
    pub identifiers: IdentifierSet,
    pub pages_examined: u32,
    pub stop_reason: StopReason,
}

#[derive(Debug)]
enum CrawlState {
    Fetching(u32),
    Evaluating { page: u32, new_ids: Vec<String> },
    Done(StopReason),
}

/// Builds the URL for a listing page by appending `<page_param>=<page>`
///
/// Existing query parameters on `base_url` are preserved.
///
/// # Example
///
/// ```
/// use catalog_harvest::crawler::page_url;
///
/// let url = page_url("https://shop.example.com/c/?section_id=166", "page", 3).unwrap();
/// assert_eq!(url.as_str(), "https://shop.example.com/c/?section_id=166&page=3");
/// ```
pub fn page_url(base_url: &str, page_param: &str, page: u32) -> Result<Url> {
    let mut url = Url::parse(base_url)?;
    url.query_pairs_mut()
        .append_pair(page_param, &page.to_string());
    Ok(url)
}

/// Crawls the listing at `base_url` until it stops yielding new identifiers
///
/// Pages are requested strictly one at a time in ordinal order. The returned
/// set only ever grows during the run, and every page before the final
/// window of empty pages contributed at least one new identifier.
pub async fn crawl_catalog<S: PageSource>(
    source: &S,
    base_url: &str,
    options: &CrawlOptions,
) -> Result<CrawlOutcome> {
    let mut seen = IdentifierSet::new();
    let mut empty_streak = 0u32;
    let mut pages_examined = 0u32;
    let mut state = CrawlState::Fetching(1);

    loop {
        state = match state {
            CrawlState::Fetching(page) => {
                if options.max_pages.is_some_and(|max| page > max) {
                    tracing::warn!(
                        "Page limit reached after {} pages, stopping with {} identifiers",
                        pages_examined,
                        seen.len()
                    );
                    CrawlState::Done(StopReason::PageLimit)
                } else {
                    let url = page_url(base_url, &options.page_param, page)?;
                    tracing::debug!("Fetching page {}: {}", page, url);

                    let markup = source.fetch(url.as_str()).await?;
                    pages_examined = page;

                    let extracted = extract_attribute_values(&markup, &options.offer_attribute)?;
                    let new_ids = extracted
                        .into_iter()
                        .filter(|id| !seen.contains(id))
                        .collect();

                    CrawlState::Evaluating { page, new_ids }
                }
            }

            CrawlState::Evaluating { page, new_ids } if new_ids.is_empty() => {
                empty_streak += 1;
                if empty_streak >= options.confirm_empty_pages {
                    tracing::info!(
                        "Page {} added no new identifiers, catalog exhausted",
                        page
                    );
                    CrawlState::Done(StopReason::Exhausted)
                } else {
                    tracing::debug!(
                        "Page {} added no new identifiers ({}/{}), continuing",
                        page,
                        empty_streak,
                        options.confirm_empty_pages
                    );
                    CrawlState::Fetching(page + 1)
                }
            }

            CrawlState::Evaluating { page, new_ids } => {
                empty_streak = 0;
                let found = new_ids.len();
                seen.extend(new_ids);
                tracing::info!(
                    "Found {} new item ids on page {}. Total: {}",
                    found,
                    page,
                    seen.len()
                );
                CrawlState::Fetching(page + 1)
            }

            CrawlState::Done(stop_reason) => {
                return Ok(CrawlOutcome {
                    identifiers: seen,
                    pages_examined,
                    stop_reason,
                });
            }
        };
    }
}
