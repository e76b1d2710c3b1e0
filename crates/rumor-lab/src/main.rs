//! Rumor Lab
//!
//! Command-line entry point for batch research runs: load a TOML sweep
//! description, execute every run, report the summary.

use clap::Parser;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use rumor_lab::{run_batch, BatchConfig, LabError};

/// Command line arguments for the batch runner
#[derive(Parser, Debug)]
#[command(name = "rumor_lab")]
#[command(about = "Batch parameter sweeps for the rumor lattice simulator")]
struct Args {
    /// Batch description file
    #[arg(long, default_value = "batch.toml")]
    config: PathBuf,

    /// Override the results table path from the config file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), LabError> {
    let mut config = BatchConfig::from_file(&args.config)?;
    if let Some(output) = args.output {
        config.output = output;
    }

    println!("Rumor Lab");
    println!("=========");
    println!("Config: {}", args.config.display());
    println!("Output: {}", config.output.display());
    println!(
        "Sweep: {} L x {} p x {} s1, {} repeats ({} runs)",
        config.sweep.l_values.len(),
        config.sweep.p_values.len(),
        config.sweep.s1_values.len(),
        config.repeats,
        config.total_runs()
    );
    println!();

    let summary = run_batch(&config)?;

    println!();
    println!(
        "Batch complete: {} runs finished, {} failed.",
        summary.completed, summary.failed
    );
    println!("Mean final reach: {:.2}%", summary.mean_final_percent);
    println!("Results appended to {}", config.output.display());

    Ok(())
}
