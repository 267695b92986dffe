//! Offline catalog generator. Writes the compensation catalog the API loads at
//! startup.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use careerpath_api::catalog::generator::{generate_catalog, GeneratorOptions};
use careerpath_api::init_tracing;
use careerpath_api::reference::Vocabulary;

#[derive(Parser, Debug)]
#[command(version, about = "Generate the salary compensation catalog")]
struct Args {
    /// Where to write the catalog JSON
    #[arg(short, long, default_value = "data/salary-catalog.json")]
    output: PathBuf,

    /// RNG seed; omit for a fresh random catalog
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,

    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(env!("CARGO_CRATE_NAME"), &args.log_level);

    let vocabulary = Vocabulary::default();
    info!(
        "Generating {} records ({} careers x {} locations)",
        vocabulary.expected_record_count(),
        vocabulary.careers.len(),
        vocabulary.locations.len()
    );

    let started = Instant::now();
    let catalog = generate_catalog(&vocabulary, &GeneratorOptions { seed: args.seed })
        .context("catalog generation failed")?;

    catalog
        .save(&args.output, args.pretty)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!(
        "Wrote {} records to {} in {:.2?}",
        catalog.len(),
        args.output.display(),
        started.elapsed()
    );
    Ok(())
}
