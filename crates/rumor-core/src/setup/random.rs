//! Uniform-Random Seeding
//!
//! Independent Bernoulli occupancy per cell, then a single uniform draw
//! buckets each created agent into a skepticism tier against the cumulative
//! shares.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::agent::{Agent, Tier};
use crate::config::SimParams;
use crate::grid::PopulationGrid;

/// Populate the lattice: each cell is occupied with probability `density`,
/// and each occupant is assigned a tier immediately, so the RNG stream is
/// one occupancy draw plus (for occupied cells) one tier draw, in row-major
/// scan order.
pub fn populate(params: &SimParams, rng: &mut SmallRng) -> PopulationGrid {
    let mut grid = PopulationGrid::empty(params);
    for row in 0..params.size {
        for col in 0..params.size {
            if rng.gen::<f64>() < params.density {
                let tier = assign_tier(params, rng);
                grid.insert(Agent::new(row, col, tier, params.cooldown));
            }
        }
    }
    grid
}

/// Bucket a uniform draw into a tier. Strict less-than against the
/// cumulative shares; everything past s1+s2+s3 is tier 4.
fn assign_tier(params: &SimParams, rng: &mut SmallRng) -> Tier {
    let shares = params.shares;
    let u: f64 = rng.gen();
    if u < shares.s1 {
        Tier::One
    } else if u < shares.s1 + shares.s2 {
        Tier::Two
    } else if u < shares.s1 + shares.s2 + shares.s3 {
        Tier::Three
    } else {
        Tier::Four
    }
}
