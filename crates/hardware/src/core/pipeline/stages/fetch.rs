//! Instruction Fetch (IF) stage.
//!
//! Fetches the word at the current program counter, decodes it (decoding is
//! pure, so the structured form is snapshotted into the IF/ID latch), and
//! advances the PC. A decode-stage stall freezes fetch entirely: the latch
//! and the PC are held in place.
//!
//! Fetching beyond the end of instruction memory yields the all-zero word,
//! which decodes to an invalid instruction and drains through the pipeline
//! as a no-op.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::IfIdEntry;
use crate::isa::decode::decode;
use crate::trace::Stage;

/// Executes the instruction fetch stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
/// * `stall` - Decode-stage stall verdict for this cycle; when set, fetch
///   does nothing and the PC does not advance.
pub fn fetch_stage(cpu: &mut Cpu, stall: bool) {
    if stall {
        return;
    }

    let pc = cpu.pc;
    let raw = cpu.imem.fetch(pc);
    let inst = decode(raw);

    trace!("IF  pc={pc:#010x} inst={raw:#010x}");
    cpu.trace.record(pc, cpu.cycle_index(), Stage::If);

    // Control-flow instructions need operands a cycle early; the hazard
    // unit is consulted here for the just-fetched instruction. The verdict
    // is diagnostic only: the decode-stage checks subsume its effect.
    if hazards::fetch_stall(&inst, cpu.id_ex.as_ref(), cpu.mem_wb.as_ref(), cpu.forwarding) {
        cpu.stats.fetch_hazards += 1;
    }

    cpu.if_id = Some(IfIdEntry { pc, raw, inst });
    cpu.pc = pc.wrapping_add(4);
}
