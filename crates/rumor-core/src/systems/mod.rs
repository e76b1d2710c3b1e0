//! Tick Systems
//!
//! The synchronous update machinery that advances the lattice one
//! generation at a time.

pub mod stepper;

pub use stepper::GenerationStepper;
