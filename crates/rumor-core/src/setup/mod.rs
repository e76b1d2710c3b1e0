//! Lattice Seeding
//!
//! Builds the population grid with one of the occupancy strategies and
//! designates the four initial spreaders, one per skepticism tier.

pub mod random;
pub mod spiral;

use rand::rngs::SmallRng;
use rand::Rng;
use thiserror::Error;

use crate::agent::Tier;
use crate::config::{SeedStrategy, SimParams};
use crate::grid::PopulationGrid;

/// Build a populated grid with the strategy the parameters name. The
/// spiral strategy is fully deterministic and ignores the RNG.
pub fn build_grid(params: &SimParams, rng: &mut SmallRng) -> PopulationGrid {
    match params.strategy {
        SeedStrategy::Random => random::populate(params, rng),
        SeedStrategy::Spiral => spiral::populate(params),
    }
}

/// Pick one agent per tier, uniformly at random, and mark it as an initial
/// spreader. Every tier group must be non-empty; an empty group is a fatal
/// precondition failure.
///
/// Returns the four chosen coordinates in tier order.
pub fn select_seeds(
    grid: &mut PopulationGrid,
    rng: &mut SmallRng,
) -> Result<[(usize, usize); 4], SeedError> {
    let mut chosen = [(0, 0); 4];
    for tier in Tier::ALL {
        let members = grid.tier_members(tier);
        if members.is_empty() {
            return Err(SeedError::EmptyTier(tier.number()));
        }
        chosen[tier.index()] = members[rng.gen_range(0..members.len())];
    }
    for &(row, col) in &chosen {
        grid.agent_mut(row, col)
            .expect("tier member coordinates are occupied")
            .make_spreader();
    }
    Ok(chosen)
}

/// Occupancy counts after seeding, for startup reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub total: usize,
    pub by_tier: [usize; 4],
}

pub fn seed_summary(grid: &PopulationGrid) -> SeedSummary {
    let mut by_tier = [0usize; 4];
    for tier in Tier::ALL {
        by_tier[tier.index()] = grid.tier_members(tier).len();
    }
    SeedSummary {
        total: grid.population(),
        by_tier,
    }
}

/// Fatal seeding failure: no representative spreader can be chosen.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("tier {0} has no members; cannot pick an initial spreader")]
    EmptyTier(u8),
}
