//! CPU core.
//!
//! Architectural state (register file), the pipeline (latches, signals,
//! hazard/forwarding units, stage functions, driver), and execution units.

/// Architectural state (general-purpose register file).
pub mod arch;
/// CPU state container.
pub mod cpu;
/// Five-stage pipeline implementation.
pub mod pipeline;
/// Execution units (ALU).
pub mod units;

pub use cpu::Cpu;
