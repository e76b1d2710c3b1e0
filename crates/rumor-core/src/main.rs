//! Rumor Lattice Simulator
//!
//! Runs a single diffusion simulation from the command line, printing tick
//! progress and writing periodic grid snapshots for external renderers.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use rumor_core::output::{generate_snapshot, write_snapshot_to_dir};
use rumor_core::{SeedStrategy, SimParams, Simulation, TierShares};

/// Command line arguments for a single simulation run
#[derive(Parser, Debug)]
#[command(name = "rumor_sim")]
#[command(about = "A rumor diffusion simulator on a 2-D lattice")]
struct Args {
    /// Lattice side length n
    #[arg(long, default_value_t = 100)]
    size: usize,

    /// Probability that a cell is occupied
    #[arg(long, default_value_t = 0.7)]
    density: f64,

    /// Share of tier 1 (least skeptical)
    #[arg(long, default_value_t = 0.2)]
    s1: f64,

    /// Share of tier 2
    #[arg(long, default_value_t = 0.3)]
    s2: f64,

    /// Share of tier 3
    #[arg(long, default_value_t = 0.3)]
    s3: f64,

    /// Silent ticks after a broadcast (L)
    #[arg(long, default_value_t = 0)]
    cooldown: u32,

    /// Generation limit
    #[arg(long, default_value_t = 100)]
    generations: u64,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Occupancy/seeding strategy
    #[arg(long, value_enum, default_value = "random")]
    strategy: StrategyArg,

    /// TOML scenario file; overrides the individual parameter flags
    #[arg(long)]
    params: Option<PathBuf>,

    /// Interval between grid snapshots in ticks (0 disables)
    #[arg(long, default_value_t = 0)]
    snapshot_interval: u64,

    /// Directory for snapshot files
    #[arg(long, default_value = "output/snapshots")]
    output_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Random,
    Spiral,
}

impl From<StrategyArg> for SeedStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Random => SeedStrategy::Random,
            StrategyArg::Spiral => SeedStrategy::Spiral,
        }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let params = match &args.params {
        Some(path) => SimParams::load(path)?,
        None => SimParams {
            size: args.size,
            density: args.density,
            shares: TierShares::new(args.s1, args.s2, args.s3),
            cooldown: args.cooldown,
            generations: args.generations,
            strategy: args.strategy.into(),
        },
    };

    println!("Rumor Lattice Simulator");
    println!("=======================");
    println!("Size: {}x{}", params.size, params.size);
    println!("Density: {}", params.density);
    println!(
        "Shares: s1={} s2={} s3={} (s4={:.2})",
        params.shares.s1,
        params.shares.s2,
        params.shares.s3,
        params.shares.s4()
    );
    println!("Cooldown: {}", params.cooldown);
    println!("Generations: {}", params.generations);
    println!("Seed: {}", args.seed);
    println!();

    let mut sim = Simulation::new(params, args.seed)?;

    let summary = rumor_core::setup::seed_summary(sim.grid());
    println!("Seeded {} agents", summary.total);
    for (idx, count) in summary.by_tier.iter().enumerate() {
        println!("  tier {}: {}", idx + 1, count);
    }
    println!();

    while !sim.is_done() {
        sim.tick();

        let generation = sim.generation();
        if generation % 10 == 0 || sim.is_done() {
            let outcome = sim.outcome();
            println!(
                "[Gen {:>4}] {:>6.2}% reached",
                generation, outcome.percent_heard
            );
        }

        if args.snapshot_interval > 0 && generation % args.snapshot_interval == 0 {
            let snapshot = generate_snapshot(sim.grid());
            match write_snapshot_to_dir(&snapshot, &args.output_dir) {
                Ok(path) => tracing::debug!("wrote snapshot {}", path.display()),
                Err(e) => eprintln!("Warning: could not write snapshot: {e}"),
            }
        }
    }

    let outcome = sim.outcome();
    println!();
    println!("Simulation complete after {} generations.", sim.generation());
    println!("Final reach: {:.2}%", outcome.percent_heard);
    let fmt = |g: Option<u64>| g.map(|v| v.to_string()).unwrap_or_else(|| "-".into());
    println!(
        "Milestones: 25% at {}, 50% at {}, 75% at {}",
        fmt(outcome.gen25),
        fmt(outcome.gen50),
        fmt(outcome.gen75)
    );

    // Always leave a final snapshot behind for the renderer.
    let snapshot = generate_snapshot(sim.grid());
    let path = write_snapshot_to_dir(&snapshot, &args.output_dir)?;
    println!("Wrote final snapshot to {}", path.display());

    Ok(())
}
