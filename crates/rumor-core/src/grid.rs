//! Population Grid
//!
//! Owns the lattice of occupied cells, the occupied-coordinate list used for
//! sparse iteration, per-tier membership lists, and the generation counter.
//! Agents are created once during seeding and persist for the whole run.

use crate::agent::{Agent, Tier};
use crate::config::{SimParams, TierShares};

/// The lattice and its bookkeeping. Cells are row-major; only occupied
/// cells hold an agent.
#[derive(Debug, Clone)]
pub struct PopulationGrid {
    size: usize,
    density: f64,
    shares: TierShares,
    cells: Vec<Option<Agent>>,
    /// Occupied coordinates in creation order. Ticks iterate this list,
    /// never the full n x n square.
    occupied: Vec<(usize, usize)>,
    tier_members: [Vec<(usize, usize)>; 4],
    generation: u64,
}

impl PopulationGrid {
    /// An empty lattice; seeding strategies fill it in.
    pub(crate) fn empty(params: &SimParams) -> Self {
        Self {
            size: params.size,
            density: params.density,
            shares: params.shares,
            cells: vec![None; params.size * params.size],
            occupied: Vec::new(),
            tier_members: Default::default(),
            generation: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn shares(&self) -> TierShares {
        self.shares
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of occupied cells.
    pub fn population(&self) -> usize {
        self.occupied.len()
    }

    pub fn occupied(&self) -> &[(usize, usize)] {
        &self.occupied
    }

    pub fn tier_members(&self, tier: Tier) -> &[(usize, usize)] {
        &self.tier_members[tier.index()]
    }

    pub fn agent(&self, row: usize, col: usize) -> Option<&Agent> {
        self.cells[self.index(row, col)].as_ref()
    }

    pub fn agent_mut(&mut self, row: usize, col: usize) -> Option<&mut Agent> {
        let idx = self.index(row, col);
        self.cells[idx].as_mut()
    }

    pub(crate) fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    /// Place an agent during seeding. Panics if the cell is already
    /// occupied; strategies visit each cell at most once.
    pub(crate) fn insert(&mut self, agent: Agent) {
        let (row, col) = agent.location();
        let idx = self.index(row, col);
        assert!(self.cells[idx].is_none(), "cell ({row}, {col}) seeded twice");
        self.tier_members[agent.tier.index()].push((row, col));
        self.occupied.push((row, col));
        self.cells[idx] = Some(agent);
    }

    /// The up-to-8 in-bounds neighbor coordinates of a cell.
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size as i64;
        let (row, col) = (row as i64, col as i64);
        [-1i64, 0, 1]
            .into_iter()
            .flat_map(move |dr| [-1i64, 0, 1].into_iter().map(move |dc| (row + dr, col + dc)))
            .filter(move |&(r, c)| (r, c) != (row, col) && r >= 0 && r < size && c >= 0 && c < size)
            .map(|(r, c)| (r as usize, c as usize))
    }

    /// Occupied agents currently counted as reached: holding a pending
    /// rumor, or having broadcast at least once.
    pub fn reached_count(&self) -> usize {
        self.occupied
            .iter()
            .filter_map(|&(r, c)| self.agent(r, c))
            .filter(|a| a.heard || a.has_broadcast)
            .count()
    }

    /// Read buffer for the stepper's double buffering.
    pub(crate) fn cells(&self) -> &[Option<Agent>] {
        &self.cells
    }

    /// Swap the write buffer in as the new current state (the old cells
    /// land in `scratch` for reuse) and bump the generation counter.
    pub(crate) fn swap_buffers(&mut self, scratch: &mut Vec<Option<Agent>>) {
        debug_assert_eq!(scratch.len(), self.cells.len());
        std::mem::swap(&mut self.cells, scratch);
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x3() -> PopulationGrid {
        let params = SimParams {
            size: 3,
            ..SimParams::default()
        };
        PopulationGrid::empty(&params)
    }

    #[test]
    fn insert_tracks_occupancy_and_tier() {
        let mut grid = grid_3x3();
        grid.insert(Agent::new(0, 1, Tier::Two, 0));
        grid.insert(Agent::new(2, 2, Tier::Two, 0));

        assert_eq!(grid.population(), 2);
        assert_eq!(grid.occupied(), &[(0, 1), (2, 2)]);
        assert_eq!(grid.tier_members(Tier::Two).len(), 2);
        assert!(grid.tier_members(Tier::One).is_empty());
        assert!(grid.agent(0, 1).is_some());
        assert!(grid.agent(1, 1).is_none());
    }

    #[test]
    #[should_panic(expected = "seeded twice")]
    fn double_insert_panics() {
        let mut grid = grid_3x3();
        grid.insert(Agent::new(1, 1, Tier::One, 0));
        grid.insert(Agent::new(1, 1, Tier::Four, 0));
    }

    #[test]
    fn corner_has_three_neighbors() {
        let grid = grid_3x3();
        let mut neighbors: Vec<_> = grid.neighbors(0, 0).collect();
        neighbors.sort();
        assert_eq!(neighbors, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn center_has_eight_neighbors() {
        let grid = grid_3x3();
        assert_eq!(grid.neighbors(1, 1).count(), 8);
    }

    #[test]
    fn reached_counts_pending_and_past_broadcasters() {
        let mut grid = grid_3x3();
        grid.insert(Agent::new(0, 0, Tier::One, 0));
        grid.insert(Agent::new(0, 1, Tier::One, 0));
        grid.insert(Agent::new(0, 2, Tier::One, 0));

        grid.agent_mut(0, 0).unwrap().heard = true;
        grid.agent_mut(0, 1).unwrap().has_broadcast = true;

        assert_eq!(grid.reached_count(), 2);
    }
}
