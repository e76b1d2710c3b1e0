//! Deterministic Spiral Seeding
//!
//! Walks an outward square spiral from the origin, turning right/down/left/up
//! with the side length shrinking by 2 after each full side. Every other
//! visited cell is occupied by a tier-4 agent; the alternate cells stay
//! empty. Cells the spiral never touches are filled by cycling tiers 1-2-3
//! in row-major order. No randomness anywhere: the same parameters always
//! produce the same lattice.

use crate::agent::{Agent, Tier};
use crate::config::SimParams;
use crate::grid::PopulationGrid;

#[derive(Debug, Clone, Copy)]
enum Direction {
    Right,
    Down,
    Left,
    Up,
}

/// Populate the lattice with the spiral anchored at the top-left corner.
pub fn populate(params: &SimParams) -> PopulationGrid {
    populate_from(params, (0, 0))
}

/// Populate the lattice with the spiral anchored at `origin`.
pub fn populate_from(params: &SimParams, origin: (usize, usize)) -> PopulationGrid {
    let mut grid = PopulationGrid::empty(params);
    let mut visited = vec![false; params.size * params.size];

    walk_spiral(params, origin, &mut grid, &mut visited);
    fill_remainder(params, &mut grid, &visited);
    grid
}

/// The spiral pass: tier-4 agents on alternating visited cells.
fn walk_spiral(
    params: &SimParams,
    origin: (usize, usize),
    grid: &mut PopulationGrid,
    visited: &mut [bool],
) {
    let size = params.size as i64;
    let (mut row, mut col) = (origin.0 as i64, origin.1 as i64);
    let mut direction = Direction::Right;
    let mut length = size;
    // Toggles on every step of the walk, not only in-bounds ones.
    let mut occupy = true;

    while length > 0 {
        let side = length;
        for step in 0..side {
            if row >= 0 && row < size && col >= 0 && col < size {
                let (r, c) = (row as usize, col as usize);
                visited[r * params.size + c] = true;
                if occupy && grid.agent(r, c).is_none() {
                    grid.insert(Agent::new(r, c, Tier::Four, params.cooldown));
                }
            }
            occupy = !occupy;

            let turning = step == side - 1;
            match direction {
                Direction::Right => {
                    if turning {
                        direction = Direction::Down;
                        row += 1;
                        length -= 2;
                    } else {
                        col += 1;
                    }
                }
                Direction::Down => {
                    if turning {
                        direction = Direction::Left;
                        col -= 1;
                        length -= 2;
                    } else {
                        row += 1;
                    }
                }
                Direction::Left => {
                    if turning {
                        direction = Direction::Up;
                        row -= 1;
                        length -= 2;
                    } else {
                        col -= 1;
                    }
                }
                Direction::Up => {
                    if turning {
                        direction = Direction::Right;
                        col += 1;
                        length -= 2;
                    } else {
                        row -= 1;
                    }
                }
            }
        }
    }
}

/// The fill pass: every cell the spiral never visited gets an agent, tiers
/// cycling 1 -> 2 -> 3 in scan order.
fn fill_remainder(params: &SimParams, grid: &mut PopulationGrid, visited: &[bool]) {
    const CYCLE: [Tier; 3] = [Tier::One, Tier::Two, Tier::Three];
    let mut next = 0usize;
    for row in 0..params.size {
        for col in 0..params.size {
            if visited[row * params.size + col] {
                continue;
            }
            grid.insert(Agent::new(row, col, CYCLE[next], params.cooldown));
            next = (next + 1) % CYCLE.len();
        }
    }
}
