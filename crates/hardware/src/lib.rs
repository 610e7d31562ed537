//! RV32I pipelined processor simulator library.
//!
//! This crate implements a cycle-accurate 5-stage (IF/ID/EX/MEM/WB) pipeline
//! simulator for the RISC-V base integer instruction set, with the following:
//! 1. **ISA:** Structured decoding, opcode tables, and a disassembler for RV32I.
//! 2. **Core:** Register file, pipeline latches, hazard detection, operand
//!    forwarding, the five stage functions, and the clocked pipeline driver.
//! 3. **Memory:** Flat word-addressed instruction memory and byte-addressed
//!    data memory.
//! 4. **Simulation:** Program-image loader, configuration, per-cycle stage
//!    trace recording, and statistics collection.

/// Common types shared across the crate (error definitions).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures).
pub mod config;
/// CPU core (architectural state, pipeline, ALU).
pub mod core;
/// Instruction set (decode, instruction model, disassembler, RV32I tables).
pub mod isa;
/// Instruction and data memory models.
pub mod mem;
/// Program loader and simulator facade.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;
/// Per-instruction pipeline-stage trace recording and serialization.
pub mod trace;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; holds architectural state, pipeline latches, and stats.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new` and drive with `run`.
pub use crate::sim::simulator::Simulator;
