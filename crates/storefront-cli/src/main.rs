mod fixtures;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use storefront_catalog::{
    build_facets, load_category_listing, load_navigation, CatalogError, ListingConfig,
};
use tracing_subscriber::EnvFilter;

use crate::fixtures::FixtureSource;

#[derive(Debug, Parser)]
#[command(name = "storefront-cli")]
#[command(about = "Storefront catalog: category trees and facet filtering")]
struct Cli {
    /// Directory holding `categories/` and `collections/` JSON fixtures.
    #[arg(long, global = true)]
    fixtures: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the top-level category tree.
    Navigation,
    /// Print a category page: category, navigation, filter options and filtered products.
    Listing {
        handle: String,
        /// Filter selection as a query string, e.g. `Size=10mm&Color=Red`.
        #[arg(long, short, default_value = "")]
        query: String,
    },
    /// Print a category's filter controls with their checked state.
    Options {
        handle: String,
        /// Active filter selection as a query string.
        #[arg(long, short, default_value = "")]
        query: String,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = storefront_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let fixtures_dir = cli.fixtures.unwrap_or_else(|| config.fixtures_dir.clone());
    tracing::debug!(env = %config.env, fixtures = %fixtures_dir.display(), "starting");

    let source = FixtureSource::new(fixtures_dir);
    let listing_config = ListingConfig::from_app_config(&config);

    match cli.command {
        Commands::Navigation => {
            let categories = load_navigation(&source, &listing_config).map_err(report)?;
            print_json(&categories)?;
        }
        Commands::Listing { handle, query } => {
            let listing =
                load_category_listing(&source, &handle, &query, &listing_config).map_err(report)?;
            print_json(&listing)?;
        }
        Commands::Options { handle, query } => {
            let listing =
                load_category_listing(&source, &handle, &query, &listing_config).map_err(report)?;
            let facets = build_facets(&listing.product_options, &listing.selected_filters);
            print_json(&facets)?;
        }
    }

    Ok(())
}

/// Tags catalog failures with the status a storefront page would show.
fn report(error: CatalogError) -> anyhow::Error {
    if error.is_not_found() {
        tracing::warn!(error = %error, "not found");
        anyhow::Error::new(error).context("not found")
    } else {
        tracing::error!(error = %error, "catalog request failed");
        anyhow::Error::new(error)
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests;
