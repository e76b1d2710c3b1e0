//! Shared serialization types for the rumor lattice simulator.
//!
//! Everything the automaton exposes to external consumers lives here:
//! grid/agent snapshots read by renderers, outcome snapshots read by stats
//! panels, and the results-table row appended by batch runs. The core crate
//! produces these values; consumers never see the mutable simulation state.

pub mod results;
pub mod snapshot;

#[cfg(any(test, feature = "test-fixtures"))]
pub mod fixtures;

pub use results::ResultRow;
pub use snapshot::{CellSnapshot, GridSnapshot, OutcomeSnapshot};
