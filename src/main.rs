use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use url::Url;

mod dom;
mod error;
mod extract;
mod fetch;
mod output;
mod types;

/// Where the CSV lands, relative to the working directory. Always overwritten.
pub const OUTPUT_PATH: &str = "./pabat.csv";

#[derive(Parser)]
#[command(name = "pabat-csv")]
#[command(about = "Generate a CSV of submissions from a PABAT! venue page")]
struct Cli {
    /// URL of the venue listing page
    venue_url: String,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{e}");
            return;
        }
        Err(_) => {
            println!("Usage: pabat-csv <pabat venue url>");
            process::exit(1);
        }
    };

    if let Err(e) = run(&cli.venue_url) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(venue_url: &str) -> Result<()> {
    let mut venue = Url::parse(venue_url)
        .with_context(|| format!("Invalid venue URL: {venue_url}"))?;
    fetch::force_http(&mut venue);

    let client = fetch::build_client()?;
    let doc = fetch::fetch_document(&client, &venue)
        .with_context(|| format!("Failed to load venue page: {venue}"))?;

    let (entries, stats) =
        extract::collect_entries(&doc, &venue, |url| fetch::fetch_document(&client, url));

    output::write_csv(&entries, Path::new(OUTPUT_PATH))?;

    println!(
        "Wrote {} entries to {} ({} boxes, {} skipped, {} unresolved)",
        entries.len(),
        OUTPUT_PATH,
        stats.boxes,
        stats.skipped,
        stats.stale
    );
    Ok(())
}
