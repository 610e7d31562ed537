//! Program loading and the simulator facade.

/// Program-image loader.
pub mod loader;
/// Top-level simulator.
pub mod simulator;

pub use simulator::Simulator;
