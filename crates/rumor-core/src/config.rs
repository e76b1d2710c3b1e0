//! Simulation Parameters
//!
//! Validated run parameters, loadable from a TOML scenario file so batches
//! and the CLI share one source of truth.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Shares of the three explicit skepticism tiers. The tier-4 share is
/// implied as `1 - s1 - s2 - s3` and must not be negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierShares {
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
}

impl TierShares {
    pub fn new(s1: f64, s2: f64, s3: f64) -> Self {
        Self { s1, s2, s3 }
    }

    /// Implied share of tier 4.
    pub fn s4(&self) -> f64 {
        1.0 - self.s1 - self.s2 - self.s3
    }
}

/// Which occupancy/seeding algorithm builds the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedStrategy {
    /// Bernoulli(p) occupancy with random tier assignment.
    #[default]
    Random,
    /// Deterministic square-spiral occupancy.
    Spiral,
}

/// Parameters for a single simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    /// Lattice side length n (the lattice is n x n).
    pub size: usize,
    /// Probability that a cell is occupied.
    pub density: f64,
    /// Tier shares; tier 4 is implied.
    pub shares: TierShares,
    /// Silent ticks after a broadcast (L).
    pub cooldown: u32,
    /// Generation limit; the run always proceeds to it.
    pub generations: u64,
    #[serde(default)]
    pub strategy: SeedStrategy,
}

impl SimParams {
    /// Check the fatal preconditions: a malformed configuration aborts the
    /// run before any lattice is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::DensityOutOfRange(self.density));
        }
        let TierShares { s1, s2, s3 } = self.shares;
        if s1 < 0.0 || s2 < 0.0 || s3 < 0.0 {
            return Err(ConfigError::NegativeShare);
        }
        if s1 + s2 + s3 > 1.0 {
            return Err(ConfigError::SharesExceedOne(s1 + s2 + s3));
        }
        Ok(())
    }

    /// Load parameters from a TOML scenario file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let params: SimParams = toml::from_str(&content)?;
        params.validate()?;
        Ok(params)
    }
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            size: 100,
            density: 0.7,
            shares: TierShares::new(0.2, 0.3, 0.3),
            cooldown: 0,
            generations: 100,
            strategy: SeedStrategy::Random,
        }
    }
}

/// Configuration error type. All variants are fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("lattice size must be positive")]
    ZeroSize,
    #[error("occupancy probability {0} is outside [0, 1]")]
    DensityOutOfRange(f64),
    #[error("tier shares must be non-negative")]
    NegativeShare,
    #[error("tier shares sum to {0}, exceeding 1")]
    SharesExceedOne(f64),
    #[error("could not read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse scenario file: {0}")]
    Parse(#[from] toml::de::Error),
}
