//! emofp - Emotional fingerprint generator
//!
//! Usage: emofp <input_json> [--config <toml>] [--scores] [--pretty]

use anyhow::Result;
use clap::Parser;
use emofp_cli::input::read_records;
use emofp_cli::output::{print_json_results, TrackResult};
use emofp_core::{FingerprintConfig, FingerprintEngine};
use rayon::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "emofp")]
#[command(about = "Compute emotional fingerprints from audio descriptor JSON", long_about = None)]
struct Args {
    /// Input JSON file with one descriptor record or an array of records
    input: PathBuf,

    /// TOML file overriding the default weights and thresholds
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Include the pre-bucket dimension scores in the output
    #[arg(short, long)]
    scores: bool,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Default: no logs (clean JSON output for parsing)
    // Verbose: show Info level logs for debugging
    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Off)
            .init();
    }

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => FingerprintConfig::load(path)?,
        None => FingerprintConfig::default(),
    };
    config.validate()?;

    let records = read_records(&args.input)?;
    log::info!(
        "Loaded {} descriptor records from {}",
        records.len(),
        args.input.display()
    );

    let start = std::time::Instant::now();
    let engine = FingerprintEngine::new(&config);

    // Tracks are independent, so the batch is data-parallel
    let results: Vec<TrackResult> = records
        .par_iter()
        .map(|record| {
            let (fingerprint, dimension_scores) = engine.compute_with_scores(&record.descriptors);
            log::debug!("{:?} -> {:?}", record.track, fingerprint);
            TrackResult {
                track: record.track.clone(),
                fingerprint,
                scores: args.scores.then_some(dimension_scores),
            }
        })
        .collect();

    log::info!(
        "Computed {} fingerprints in {:.3}s",
        results.len(),
        start.elapsed().as_secs_f64()
    );

    print_json_results(&results, args.pretty);

    Ok(())
}
