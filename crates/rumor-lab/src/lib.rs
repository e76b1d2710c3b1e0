//! Batch Research Runner
//!
//! Sweeps the rumor automaton over parameter combinations, running each
//! simulation to its generation limit on independent worker threads and
//! appending one CSV row per run to a shared results table.

pub mod config;
pub mod results;
pub mod runner;

pub use config::{BatchConfig, LabError};
pub use results::ResultsWriter;
pub use runner::{expand_runs, run_batch, BatchSummary, RunSpec};
