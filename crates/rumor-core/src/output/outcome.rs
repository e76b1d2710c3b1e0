//! Outcome Tracking
//!
//! Samples the grid after every tick and latches the generations at which
//! 25/50/75% of the population has been reached. Performs no I/O; reporting
//! collaborators read the snapshot.

use rumor_events::OutcomeSnapshot;

use crate::grid::PopulationGrid;

/// Latched milestone generations plus the most recent reach percentage.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutcomeTracker {
    generation: u64,
    percent_heard: f64,
    gen25: Option<u64>,
    gen50: Option<u64>,
    gen75: Option<u64>,
}

impl OutcomeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the grid's state after a tick. Milestones are set once and
    /// never overwritten, even if the percentage later drops back below the
    /// threshold.
    pub fn observe(&mut self, grid: &PopulationGrid) {
        self.generation = grid.generation();
        self.percent_heard = percent_heard(grid);

        if self.gen25.is_none() && self.percent_heard >= 25.0 {
            self.gen25 = Some(self.generation);
        }
        if self.gen50.is_none() && self.percent_heard >= 50.0 {
            self.gen50 = Some(self.generation);
        }
        if self.gen75.is_none() && self.percent_heard >= 75.0 {
            self.gen75 = Some(self.generation);
        }
    }

    /// Reach percentage at the last observation (the final value once the
    /// generation limit is hit).
    pub fn percent_heard(&self) -> f64 {
        self.percent_heard
    }

    pub fn gen25(&self) -> Option<u64> {
        self.gen25
    }

    pub fn gen50(&self) -> Option<u64> {
        self.gen50
    }

    pub fn gen75(&self) -> Option<u64> {
        self.gen75
    }

    /// Read-only view for stats panels and result rows.
    pub fn snapshot(&self) -> OutcomeSnapshot {
        OutcomeSnapshot {
            generation: self.generation,
            percent_heard: self.percent_heard,
            gen25: self.gen25,
            gen50: self.gen50,
            gen75: self.gen75,
        }
    }
}

/// Percentage of occupied agents currently reached (pending rumor or past
/// broadcast), rounded to 2 decimal places. An empty lattice counts as 0.
pub fn percent_heard(grid: &PopulationGrid) -> f64 {
    let total = grid.population();
    if total == 0 {
        return 0.0;
    }
    let raw = grid.reached_count() as f64 / total as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}
