//! Sample data fixtures for testing.
//!
//! Ready-made snapshots and result rows for other crates' tests. Enable the
//! `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // rumor-events = { path = "../rumor-events", features = ["test-fixtures"] }
//!
//! use rumor_events::fixtures;
//!
//! let rows = fixtures::sample_result_rows();
//! let snapshot = fixtures::sample_grid_snapshot();
//! ```

use crate::{CellSnapshot, GridSnapshot, OutcomeSnapshot, ResultRow};

/// Three result rows covering the milestone cases: all reached, partially
/// reached, none reached.
pub fn sample_result_rows() -> Vec<ResultRow> {
    vec![
        ResultRow {
            cooldown: 2,
            density: 0.7,
            s1: 0.2,
            gen25: Some(5),
            gen50: Some(11),
            gen75: Some(19),
            final_percent: 88.42,
        },
        ResultRow {
            cooldown: 5,
            density: 0.4,
            s1: 0.2,
            gen25: Some(22),
            gen50: None,
            gen75: None,
            final_percent: 37.5,
        },
        ResultRow {
            cooldown: 0,
            density: 0.1,
            s1: 0.0,
            gen25: None,
            gen50: None,
            gen75: None,
            final_percent: 1.64,
        },
    ]
}

/// A 2x2 fully-occupied grid snapshot with one announced spreader.
pub fn sample_grid_snapshot() -> GridSnapshot {
    let cells = vec![
        CellSnapshot {
            row: 0,
            col: 0,
            tier: 1,
            belief: 0.0,
            heard: false,
            announced: true,
            cooldown: 2,
            has_broadcast: true,
        },
        CellSnapshot {
            row: 0,
            col: 1,
            tier: 2,
            belief: 2.0 / 3.0,
            heard: true,
            announced: false,
            cooldown: 0,
            has_broadcast: false,
        },
        CellSnapshot {
            row: 1,
            col: 0,
            tier: 3,
            belief: 1.0 / 3.0,
            heard: true,
            announced: false,
            cooldown: 0,
            has_broadcast: false,
        },
        CellSnapshot {
            row: 1,
            col: 1,
            tier: 4,
            belief: 0.0,
            heard: true,
            announced: false,
            cooldown: 0,
            has_broadcast: false,
        },
    ];
    GridSnapshot {
        generation: 1,
        size: 2,
        population: cells.len(),
        cells,
    }
}

/// Outcome matching [`sample_grid_snapshot`]: the whole population reached
/// by generation 1.
pub fn sample_outcome() -> OutcomeSnapshot {
    OutcomeSnapshot {
        generation: 1,
        percent_heard: 100.0,
        gen25: Some(1),
        gen50: Some(1),
        gen75: Some(1),
    }
}
