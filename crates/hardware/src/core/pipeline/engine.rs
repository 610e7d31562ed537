//! Pipeline driver.
//!
//! Clocks the five stages in fixed reverse data-flow order each cycle:
//! Writeback, Memory, Execute, Decode, Fetch. Running the stages backwards
//! lets every stage observe the previous cycle's latch contents while
//! writing the next cycle's, modeling simultaneous synchronous latches with
//! plain sequential execution.
//!
//! The driver is the only component that advances the cycle counter and
//! applies control-flow redirects: a taken branch or jump resolved in
//! decode sets the PC to its target and flushes the wrong-path fetch out of
//! IF/ID.

use tracing::debug;

use crate::core::Cpu;
use crate::core::pipeline::stages::decode::decode_stage;
use crate::core::pipeline::stages::execute::execute_stage;
use crate::core::pipeline::stages::fetch::fetch_stage;
use crate::core::pipeline::stages::memory::mem_stage;
use crate::core::pipeline::stages::writeback::wb_stage;

/// Advances the pipeline by one clock cycle.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
pub fn clock(cpu: &mut Cpu) {
    cpu.stats.cycles += 1;

    wb_stage(cpu);
    mem_stage(cpu);
    execute_stage(cpu);
    let outcome = decode_stage(cpu);
    fetch_stage(cpu, outcome.stall);

    if let Some(target) = outcome.redirect {
        debug!(
            "cycle {}: redirect -> {target:#010x}, IF/ID flushed",
            cpu.stats.cycles
        );
        cpu.pc = target;
        cpu.if_id = None;
        cpu.stats.flushes += 1;
    }
}
