//! Results Table Row
//!
//! One row per completed run, appended to a shared CSV table by the batch
//! runner. The column set matches the research protocol: the swept
//! parameters (L, P, S1) plus the latched milestone generations and the
//! final reach percentage.

use serde::{Deserialize, Serialize};

/// CSV header, written once when the results file is created.
pub const CSV_HEADER: &str = "L,P,S1,gen25,gen50,gen75,finalPercent";

/// Outcome of a single simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Cooldown length the run used.
    pub cooldown: u32,
    /// Occupancy probability.
    pub density: f64,
    /// Tier-1 share.
    pub s1: f64,
    pub gen25: Option<u64>,
    pub gen50: Option<u64>,
    pub gen75: Option<u64>,
    /// Reach percentage at the generation limit, rounded to 2 decimals.
    pub final_percent: f64,
}

impl ResultRow {
    /// Format as one CSV line (no trailing newline). Milestones that were
    /// never reached serialize as empty fields.
    pub fn to_csv(&self) -> String {
        fn opt(g: Option<u64>) -> String {
            g.map(|v| v.to_string()).unwrap_or_default()
        }
        format!(
            "{},{},{},{},{},{},{:.2}",
            self.cooldown,
            self.density,
            self.s1,
            opt(self.gen25),
            opt(self.gen50),
            opt(self.gen75),
            self.final_percent,
        )
    }
}
