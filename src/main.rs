//! Catalog-Harvest main entry point
//!
//! Command-line interface for the two batch jobs: catalog discovery and
//! detail lookup.

use catalog_harvest::config::{load_config_with_hash, Config};
use catalog_harvest::{run_details, run_discovery};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Catalog-Harvest: a two-stage product catalog harvester
///
/// `discover` walks the paginated catalog listing and writes every offer
/// identifier it finds. `details` reads that list, looks the identifiers up
/// in the partner API and writes a CSV table.
#[derive(Parser, Debug)]
#[command(name = "catalog-harvest")]
#[command(version)]
#[command(about = "A two-stage product catalog harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    /// Validate config and show what would run without making requests
    #[arg(long, global = true)]
    dry_run: bool,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Crawl the catalog listing and write the identifier file
    Discover,

    /// Read the identifier file and write the detail table
    Details,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config_with_hash(&cli.config) {
        Ok((cfg, hash)) => {
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config, cli.command);
        return Ok(());
    }

    match cli.command {
        Command::Discover => handle_discover(&config).await,
        Command::Details => handle_details(&config).await,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("catalog_harvest=info,warn"),
            1 => EnvFilter::new("catalog_harvest=debug,info"),
            2 => EnvFilter::new("catalog_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles --dry-run: prints the resolved configuration for the chosen job
fn handle_dry_run(config: &Config, command: Command) {
    println!("=== Catalog-Harvest Dry Run ({:?}) ===\n", command);

    match command {
        Command::Discover => {
            println!("Catalog:");
            println!("  Base URL: {}", config.catalog.base_url);
            println!("  Offer attribute: {}", config.catalog.offer_attribute);
            println!("  Page parameter: {}", config.catalog.page_param);
            println!(
                "  Stop after {} page(s) without new identifiers",
                config.catalog.confirm_empty_pages
            );
            match config.catalog.max_pages {
                Some(max) => println!("  Max pages: {}", max),
                None => println!("  Max pages: unlimited"),
            }
            println!("\nOutput:");
            println!("  Identifiers: {}", config.output.identifiers_path);
        }
        Command::Details => {
            println!("Detail API:");
            println!("  Endpoint: {}", config.detail_api.endpoint);
            println!("  Stock only: {}", config.detail_api.stock_only);
            println!("  Format: {}", config.detail_api.format);
            println!("\nInput:");
            println!("  Identifiers: {}", config.output.identifiers_path);
            println!("\nOutput:");
            println!("  Table: {}", config.output.details_path);
        }
    }

    println!("\nHTTP:");
    println!("  User agent: {}", config.http.user_agent);
    println!("  Timeout: {}s", config.http.timeout_secs);

    println!("\n✓ Configuration is valid");
}

async fn handle_discover(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting...");

    match run_discovery(config).await {
        Ok(count) => {
            tracing::info!("Done. {} identifiers discovered", count);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Discovery failed: {}", e);
            Err(e.into())
        }
    }
}

async fn handle_details(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Starting...");

    match run_details(config).await {
        Ok(count) => {
            tracing::info!("Done. {} records written", count);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Detail lookup failed: {}", e);
            Err(e.into())
        }
    }
}
