//! Generation Stepper
//!
//! One synchronous tick over the whole lattice, double-buffered: every
//! transition reads the grid's current cell buffer and writes into the
//! stepper's scratch buffer, and the two buffers swap at the end of the
//! tick. The scratch allocation is reused across ticks.
//!
//! The tick runs in two phases. Phase one applies each occupied agent's own
//! transition in the fixed occupied-list order (the only phase that consumes
//! randomness). Phase two delivers `receive_rumor` to the neighbors of every
//! agent that broadcast. Deliveries commute with each other, and the phase
//! split keeps them from racing the owners' writes, so the tick result is
//! independent of iteration order; the order fixes only the RNG stream.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::agent::Agent;
use crate::grid::PopulationGrid;

/// Advances a grid one generation at a time, reusing its write buffer.
#[derive(Debug, Clone, Default)]
pub struct GenerationStepper {
    scratch: Vec<Option<Agent>>,
    broadcasters: Vec<(usize, usize)>,
}

impl GenerationStepper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the grid one generation.
    pub fn advance_one(&mut self, grid: &mut PopulationGrid, rng: &mut SmallRng) {
        self.scratch.clear();
        self.scratch.extend_from_slice(grid.cells());
        self.broadcasters.clear();

        for &(row, col) in grid.occupied() {
            let prior = *grid
                .agent(row, col)
                .expect("occupied coordinates hold an agent");
            step_agent(
                &prior,
                grid.index(row, col),
                &mut self.scratch,
                rng,
                &mut self.broadcasters,
            );
        }

        for &(row, col) in &self.broadcasters {
            for (nr, nc) in grid.neighbors(row, col) {
                if let Some(neighbor) = self.scratch[grid.index(nr, nc)].as_mut() {
                    neighbor.receive_rumor();
                }
            }
        }

        grid.swap_buffers(&mut self.scratch);
    }

    /// Advance until the generation counter reaches `limit` (the "skip to
    /// end" operation; no intermediate reporting happens here).
    pub fn run_to_limit(&mut self, grid: &mut PopulationGrid, rng: &mut SmallRng, limit: u64) {
        while grid.generation() < limit {
            self.advance_one(grid, rng);
        }
    }
}

/// One agent's transition, reading its prior-tick state and writing its own
/// cell in the write buffer. A firing broadcast is recorded for phase two
/// rather than applied inline.
fn step_agent(
    prior: &Agent,
    idx: usize,
    next: &mut [Option<Agent>],
    rng: &mut SmallRng,
    broadcasters: &mut Vec<(usize, usize)>,
) {
    let cell = next[idx]
        .as_mut()
        .expect("write buffer mirrors the occupied set");

    if prior.heard && prior.cooldown == 0 {
        if !prior.announced {
            // Activation attempt: broadcast with probability equal to the
            // accumulated belief, then exhale that belief either way.
            if rng.gen::<f64>() < prior.belief {
                broadcasters.push(prior.location());
                cell.announced = true;
                cell.has_broadcast = true;
                cell.cooldown = prior.cooldown_len;
            }
            cell.heard = false;
            cell.belief = 0.0;
        } else {
            cell.announced = false;
            cell.heard = false;
            // The guard pins cooldown at 0 here, so the conviction drains.
            cell.belief = 0.0;
        }
    } else if prior.heard {
        // A rumor arrived while silent: swallow it and count the silence
        // down by one.
        cell.heard = false;
        cell.announced = false;
        cell.cooldown = prior.cooldown - 1;
        if cell.cooldown == 0 {
            cell.belief = 0.0;
        }
    } else {
        // Idle tick; the announced display state lasts a single generation.
        cell.announced = false;
    }
}
