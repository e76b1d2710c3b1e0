//! Batch Configuration
//!
//! TOML-driven description of a parameter sweep: the fixed lattice settings,
//! the swept value lists (L, p, s1), and the execution knobs.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use rumor_core::{ConfigError, SeedStrategy, SimParams, TierShares};

/// A full batch: fixed settings, sweep lists, execution knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Results table path; rows are appended, header written once.
    pub output: PathBuf,
    /// Base seed; each run derives its own stream from this plus its index.
    pub seed: u64,
    /// Runs per parameter combination.
    pub repeats: usize,
    /// Worker threads draining the run queue.
    pub workers: usize,
    pub grid: GridSettings,
    pub sweep: SweepSettings,
}

/// Lattice settings shared by every run in the batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSettings {
    pub size: usize,
    /// Tier-2 and tier-3 shares are fixed across the sweep; s1 is swept and
    /// s4 implied.
    pub s2: f64,
    pub s3: f64,
    pub generations: u64,
    #[serde(default)]
    pub strategy: SeedStrategy,
}

/// The swept parameter lists. Every combination of one value from each list
/// is run `repeats` times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepSettings {
    pub l_values: Vec<u32>,
    pub p_values: Vec<f64>,
    pub s1_values: Vec<f64>,
}

impl BatchConfig {
    /// Load a batch description from a TOML file. A missing or malformed
    /// file is fatal at startup.
    pub fn from_file(path: &Path) -> Result<Self, LabError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self, LabError> {
        let config: BatchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty sweeps and parameter combinations the core would refuse.
    pub fn validate(&self) -> Result<(), LabError> {
        if self.repeats == 0 {
            return Err(LabError::ZeroRepeats);
        }
        if self.workers == 0 {
            return Err(LabError::ZeroWorkers);
        }
        if self.sweep.l_values.is_empty() {
            return Err(LabError::EmptySweep("l_values"));
        }
        if self.sweep.p_values.is_empty() {
            return Err(LabError::EmptySweep("p_values"));
        }
        if self.sweep.s1_values.is_empty() {
            return Err(LabError::EmptySweep("s1_values"));
        }
        for &cooldown in &self.sweep.l_values {
            for &density in &self.sweep.p_values {
                for &s1 in &self.sweep.s1_values {
                    self.sim_params(cooldown, density, s1).validate()?;
                }
            }
        }
        Ok(())
    }

    /// The run parameters for one point of the sweep.
    pub fn sim_params(&self, cooldown: u32, density: f64, s1: f64) -> SimParams {
        SimParams {
            size: self.grid.size,
            density,
            shares: TierShares::new(s1, self.grid.s2, self.grid.s3),
            cooldown,
            generations: self.grid.generations,
            strategy: self.grid.strategy,
        }
    }

    /// Total number of runs the batch will execute.
    pub fn total_runs(&self) -> usize {
        self.sweep.l_values.len()
            * self.sweep.p_values.len()
            * self.sweep.s1_values.len()
            * self.repeats
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("stats.csv"),
            seed: 42,
            repeats: 10,
            workers: 4,
            grid: GridSettings {
                size: 100,
                s2: 0.3,
                s3: 0.3,
                generations: 100,
                strategy: SeedStrategy::Random,
            },
            sweep: SweepSettings {
                l_values: vec![0],
                p_values: vec![0.7],
                s1_values: vec![0.2],
            },
        }
    }
}

/// Batch-level error type. All variants abort the batch or the run that
/// raised them.
#[derive(Debug, Error)]
pub enum LabError {
    #[error("repeats must be positive")]
    ZeroRepeats,
    #[error("workers must be positive")]
    ZeroWorkers,
    #[error("sweep list '{0}' is empty")]
    EmptySweep(&'static str),
    #[error("invalid parameter combination: {0}")]
    Params(#[from] ConfigError),
    #[error("run setup failed: {0}")]
    Run(#[from] rumor_core::SimError),
    #[error("could not read batch config: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse batch config: {0}")]
    Parse(#[from] toml::de::Error),
}
