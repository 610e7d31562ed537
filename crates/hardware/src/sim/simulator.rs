//! Top-level simulator.
//!
//! Owns the CPU and drives the pipeline engine for a caller-specified fixed
//! number of cycles. There is no timeout or early-exit concept: the run
//! length is the cycle count, and everything else is observable through the
//! register file, data memory, statistics, and the stage trace.

use crate::config::Config;
use crate::core::Cpu;
use crate::core::pipeline::engine;

/// Top-level simulator: CPU architectural state plus the clocked pipeline.
///
/// # Examples
///
/// ```
/// use rv32pipe_core::{Config, Simulator};
///
/// // addi x1, x0, 5
/// let mut sim = Simulator::new(vec![0x00500093], &Config::default());
/// sim.run(5);
/// assert_eq!(sim.cpu.regs.read(1), 5);
/// assert_eq!(sim.cpu.stats.instructions_retired, 1);
/// ```
#[derive(Debug)]
pub struct Simulator {
    /// CPU state (registers, memories, latches, stats, trace).
    pub cpu: Cpu,
}

impl Simulator {
    /// Creates a new simulator for the given program image and
    /// configuration.
    pub fn new(program: Vec<u32>, config: &Config) -> Self {
        Self {
            cpu: Cpu::new(program, config),
        }
    }

    /// Advances the simulation by one clock cycle.
    pub fn tick(&mut self) {
        engine::clock(&mut self.cpu);
    }

    /// Runs the simulation for a fixed number of cycles.
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            self.tick();
        }
    }

    /// Resets the pipeline, counters, and trace to their start-of-run
    /// state; register-file and data-memory contents are left in place.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }
}
