//! Writeback (WB) stage.
//!
//! Commits the memory-read data (when `mem_to_reg`) or the ALU result to
//! the destination register (skipped entirely when the destination is
//! register 0 or `reg_write` is unset) and retires the instruction. The
//! retired-instruction counter is the only externally observable completion
//! signal besides register and memory state; invalid (no-op) words are
//! never counted.
//!
//! The consumed entry is kept as `wb_latch`: the forwarding unit reads it
//! this same cycle as the architectural "MEM/WB register as of cycle
//! start", after Memory has already overwritten the live latch.

use tracing::trace;

use crate::core::Cpu;
use crate::isa::instruction::Instruction;
use crate::trace::Stage;

/// Executes the writeback stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
pub fn wb_stage(cpu: &mut Cpu) {
    let Some(wb) = cpu.mem_wb.take() else {
        cpu.wb_latch = None;
        return;
    };

    cpu.trace.record(wb.pc, cpu.cycle_index(), Stage::Wb);

    if let Some(rd) = wb.dest() {
        let val = wb.committed_value();
        trace!("WB  pc={:#010x} x{rd} <= {val:#x}", wb.pc);
        cpu.regs.write(rd, val);
    }

    if !matches!(wb.inst, Instruction::Invalid) {
        cpu.stats.instructions_retired += 1;
        if wb.ctrl.mem_read {
            cpu.stats.inst_load += 1;
        } else if wb.ctrl.mem_write {
            cpu.stats.inst_store += 1;
        } else if wb.ctrl.branch || wb.ctrl.jump {
            cpu.stats.inst_branch += 1;
        } else {
            cpu.stats.inst_alu += 1;
        }
    }

    cpu.wb_latch = Some(wb);
}
