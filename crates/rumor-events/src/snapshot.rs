//! Snapshot Types
//!
//! Read-only views of the lattice and the outcome tracker, captured between
//! ticks. Renderers draw from `GridSnapshot`, stats panels from
//! `OutcomeSnapshot`; neither can reach back into live simulation state.

use serde::{Deserialize, Serialize};

/// State of a single occupied cell at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub row: usize,
    pub col: usize,
    /// Skepticism tier, 1 (credulous) through 4 (immune).
    pub tier: u8,
    /// Accumulated belief in [0, 1].
    pub belief: f64,
    /// Holds an unconsumed rumor pending the next tick's decision.
    pub heard: bool,
    /// In the post-broadcast announced state.
    pub announced: bool,
    /// Remaining silent ticks.
    pub cooldown: u32,
    /// Has broadcast at least once during this run.
    pub has_broadcast: bool,
}

/// Full lattice state between two ticks.
///
/// Only occupied cells are listed; everything else in the `size` x `size`
/// square is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub generation: u64,
    pub size: usize,
    /// Number of occupied cells (same as `cells.len()`).
    pub population: usize,
    pub cells: Vec<CellSnapshot>,
}

/// Latched milestone generations and the reach percentage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutcomeSnapshot {
    /// Generation the tracker last observed.
    pub generation: u64,
    /// Percentage of the population currently counted as reached,
    /// rounded to 2 decimal places.
    pub percent_heard: f64,
    /// First generation at which 25% of the population was reached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gen25: Option<u64>,
    /// First generation at which 50% of the population was reached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gen50: Option<u64>,
    /// First generation at which 75% of the population was reached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gen75: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_snapshot_omits_unreached_milestones() {
        let outcome = OutcomeSnapshot {
            generation: 3,
            percent_heard: 12.5,
            gen25: None,
            gen50: None,
            gen75: None,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(!json.contains("gen25"));
        assert!(json.contains("percent_heard"));
    }

    #[test]
    fn grid_snapshot_round_trips() {
        let snapshot = GridSnapshot {
            generation: 7,
            size: 3,
            population: 1,
            cells: vec![CellSnapshot {
                row: 1,
                col: 2,
                tier: 2,
                belief: 2.0 / 3.0,
                heard: true,
                announced: false,
                cooldown: 0,
                has_broadcast: false,
            }],
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GridSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.generation, 7);
        assert_eq!(back.cells, snapshot.cells);
    }
}
