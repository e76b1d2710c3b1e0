//! Rumor Diffusion Lattice Simulator
//!
//! Models how a rumor spreads across a population on a 2-D lattice. Each
//! agent has a fixed skepticism tier governing how readily it re-broadcasts
//! what it hears and goes silent for a cooldown period after broadcasting.
//! The update rule is synchronous: every tick reads the prior generation and
//! writes the next.

pub mod agent;
pub mod config;
pub mod grid;
pub mod output;
pub mod setup;
pub mod simulation;
pub mod systems;

pub use agent::{Agent, Tier};
pub use config::{ConfigError, SeedStrategy, SimParams, TierShares};
pub use grid::PopulationGrid;
pub use output::outcome::OutcomeTracker;
pub use setup::SeedError;
pub use simulation::{SimError, Simulation};
pub use systems::GenerationStepper;
