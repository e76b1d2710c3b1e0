//! Batch Execution
//!
//! Expands the sweep into a run queue and drains it with a fixed pool of
//! worker threads. Every run is fully independent - its own lattice, its own
//! random stream - so the only shared state is the queue and the results
//! writer, each behind a mutex.

use std::sync::{Arc, Mutex};
use std::thread;

use tracing::{error, info};

use rumor_core::{SimParams, Simulation};
use rumor_events::ResultRow;

use crate::config::{BatchConfig, LabError};
use crate::results::ResultsWriter;

/// One pending simulation run.
#[derive(Debug, Clone, Copy)]
pub struct RunSpec {
    pub index: usize,
    pub params: SimParams,
    pub seed: u64,
}

/// What happened across the whole batch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BatchSummary {
    pub completed: usize,
    /// Runs whose setup failed (for example an empty tier group under an
    /// extreme share combination). Their rows are absent from the table.
    pub failed: usize,
    /// Mean final reach percentage over the completed runs.
    pub mean_final_percent: f64,
}

/// Expand the sweep into individual runs: every (L, p, s1) combination,
/// `repeats` times each. Seeds are derived from the batch seed plus the run
/// index so the runs are decorrelated but the whole batch replays from one
/// number.
pub fn expand_runs(config: &BatchConfig) -> Vec<RunSpec> {
    let mut specs = Vec::with_capacity(config.total_runs());
    for &cooldown in &config.sweep.l_values {
        for &density in &config.sweep.p_values {
            for &s1 in &config.sweep.s1_values {
                for _ in 0..config.repeats {
                    let index = specs.len();
                    specs.push(RunSpec {
                        index,
                        params: config.sim_params(cooldown, density, s1),
                        seed: config.seed.wrapping_add(index as u64),
                    });
                }
            }
        }
    }
    specs
}

/// Run the whole batch. Individual run failures are logged and counted;
/// they do not stop the remaining runs.
pub fn run_batch(config: &BatchConfig) -> Result<BatchSummary, LabError> {
    config.validate()?;

    let mut queue = expand_runs(config);
    // Workers pop from the back; reverse so runs start in sweep order.
    queue.reverse();
    let total = queue.len();
    info!(total, workers = config.workers, "starting batch");

    let queue = Mutex::new(queue);
    let writer = Arc::new(Mutex::new(ResultsWriter::new(&config.output)));
    let outcomes: Mutex<Vec<f64>> = Mutex::new(Vec::with_capacity(total));
    let failures = Mutex::new(0usize);

    thread::scope(|scope| {
        for _ in 0..config.workers {
            let writer = Arc::clone(&writer);
            let queue = &queue;
            let outcomes = &outcomes;
            let failures = &failures;
            scope.spawn(move || loop {
                let spec = match queue.lock().unwrap().pop() {
                    Some(spec) => spec,
                    None => break,
                };
                match execute_run(&spec, &writer) {
                    Ok(final_percent) => outcomes.lock().unwrap().push(final_percent),
                    Err(e) => {
                        error!(run = spec.index, "run failed: {e}");
                        *failures.lock().unwrap() += 1;
                    }
                }
            });
        }
    });

    let outcomes = outcomes.into_inner().unwrap();
    let failed = failures.into_inner().unwrap();
    let completed = outcomes.len();
    let mean_final_percent = if completed > 0 {
        outcomes.iter().sum::<f64>() / completed as f64
    } else {
        0.0
    };

    info!(completed, failed, mean_final_percent, "batch finished");
    Ok(BatchSummary {
        completed,
        failed,
        mean_final_percent,
    })
}

/// One run end to end: seed, fast-forward to the limit, append the row.
fn execute_run(spec: &RunSpec, writer: &Mutex<ResultsWriter>) -> Result<f64, LabError> {
    let mut sim = Simulation::new(spec.params, spec.seed)?;
    sim.run_to_limit();

    let outcome = sim.outcome();
    let row = ResultRow {
        cooldown: spec.params.cooldown,
        density: spec.params.density,
        s1: spec.params.shares.s1,
        gen25: outcome.gen25,
        gen50: outcome.gen50,
        gen75: outcome.gen75,
        final_percent: outcome.percent_heard,
    };

    writer.lock().unwrap().append(&row)?;
    Ok(outcome.percent_heard)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::{GridSettings, SweepSettings};
    use rumor_core::SeedStrategy;
    use std::path::PathBuf;

    fn tiny_config(output: PathBuf) -> BatchConfig {
        BatchConfig {
            output,
            seed: 5,
            repeats: 2,
            workers: 2,
            grid: GridSettings {
                size: 12,
                s2: 0.25,
                s3: 0.25,
                generations: 15,
                strategy: SeedStrategy::Random,
            },
            sweep: SweepSettings {
                l_values: vec![0, 1],
                p_values: vec![0.9],
                s1_values: vec![0.25],
            },
        }
    }

    #[test]
    fn expand_runs_covers_the_cartesian_product() {
        let config = tiny_config(PathBuf::from("unused.csv"));
        let specs = expand_runs(&config);
        assert_eq!(specs.len(), 4);

        // Distinct derived seeds per run.
        let mut seeds: Vec<u64> = specs.iter().map(|s| s.seed).collect();
        seeds.sort_unstable();
        seeds.dedup();
        assert_eq!(seeds.len(), 4);

        assert_eq!(specs[0].params.cooldown, 0);
        assert_eq!(specs[3].params.cooldown, 1);
    }

    #[test]
    fn batch_appends_one_row_per_run() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("stats.csv");
        let summary = run_batch(&tiny_config(output.clone())).unwrap();

        assert_eq!(summary.completed, 4);
        assert_eq!(summary.failed, 0);
        assert!(summary.mean_final_percent >= 0.0);

        let content = std::fs::read_to_string(&output).unwrap();
        // Header plus one row per run.
        assert_eq!(content.lines().count(), 5);
    }

    #[test]
    fn repeated_batches_share_one_header() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("stats.csv");
        let config = tiny_config(output.clone());

        run_batch(&config).unwrap();
        run_batch(&config).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert_eq!(content.lines().count(), 9);
        assert_eq!(
            content
                .lines()
                .filter(|l| *l == rumor_events::results::CSV_HEADER)
                .count(),
            1
        );
    }
}
