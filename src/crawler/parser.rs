//! Markup extraction for catalog listing pages
//!
//! Listing pages mark each product offer with an attribute (for example
//! `data-offerid="12345"`). This module pulls those attribute values out of
//! raw markup, independent of which tag carries them.

use crate::{HarvestError, Result};
use indexmap::IndexSet;
use scraper::{Html, Selector};

/// Extracts every value of `attribute` present in `markup`
///
/// Elements of any tag are considered. Values come back deduplicated, in
/// document order. Markup with no matching elements yields an empty set.
///
/// # Errors
///
/// Returns `HarvestError::Parse` if `attribute` cannot form a valid
/// attribute selector (empty, or containing whitespace or selector syntax).
///
/// # Example
///
/// ```
/// use catalog_harvest::crawler::extract_attribute_values;
///
/// let html = r#"<div data-offerid="1"></div><li data-offerid="2"></li>"#;
/// let ids = extract_attribute_values(html, "data-offerid").unwrap();
/// assert_eq!(ids.len(), 2);
/// ```
pub fn extract_attribute_values(markup: &str, attribute: &str) -> Result<IndexSet<String>> {
    let selector = Selector::parse(&format!("[{}]", attribute)).map_err(|e| {
        HarvestError::Parse(format!("invalid attribute name '{}': {:?}", attribute, e))
    })?;

    let document = Html::parse_document(markup);
    if !document.errors.is_empty() {
        // html5ever recovers from these; they never abort extraction
        tracing::trace!("Recovered from {} markup errors", document.errors.len());
    }

    let values = document
        .select(&selector)
        .filter_map(|element| element.value().attr(attribute))
        .map(str::to_string)
        .collect();

    Ok(values)
}
