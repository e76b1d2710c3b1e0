//! Snapshot Generation
//!
//! Builds the read-only `GridSnapshot` view of the lattice for external
//! renderers and writes it to disk between ticks.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rumor_events::{CellSnapshot, GridSnapshot};

use crate::grid::PopulationGrid;

/// Capture the current lattice state. Cells appear in occupied order.
pub fn generate_snapshot(grid: &PopulationGrid) -> GridSnapshot {
    let cells: Vec<CellSnapshot> = grid
        .occupied()
        .iter()
        .filter_map(|&(row, col)| grid.agent(row, col))
        .map(|agent| CellSnapshot {
            row: agent.row,
            col: agent.col,
            tier: agent.tier.number(),
            belief: agent.belief,
            heard: agent.heard,
            announced: agent.announced,
            cooldown: agent.cooldown,
            has_broadcast: agent.has_broadcast,
        })
        .collect();

    GridSnapshot {
        generation: grid.generation(),
        size: grid.size(),
        population: cells.len(),
        cells,
    }
}

/// Write a snapshot as pretty JSON under `dir`, named by generation.
/// Returns the path written.
pub fn write_snapshot_to_dir(snapshot: &GridSnapshot, dir: impl AsRef<Path>) -> io::Result<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("snapshot_gen_{:06}.json", snapshot.generation));
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, json)?;
    Ok(path)
}
