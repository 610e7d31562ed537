//! Data hazard detection and operand forwarding.
//!
//! This module implements the logic for maintaining pipeline consistency
//! when data dependencies exist between in-flight instructions. It provides:
//! 1. **Hazard detection:** Stall predicates for the decode and fetch
//!    stages, under both the forwarding and the no-forwarding policy.
//! 2. **Operand forwarding:** Read-After-Write (RAW) resolution by bypassing
//!    the register file from the EX/MEM and MEM/WB latches.
//!
//! All predicates are stateless: they read latch contents and never mutate
//! them. Register 0 is excluded everywhere: it is neither a hazard nor a
//! forwarding target.
//!
//! Stage ordering matters for which latch snapshot each consumer sees. The
//! driver runs Writeback, Memory, Execute, Decode, Fetch; within one cycle:
//! - Execute sees the EX/MEM latch as left by the *previous* cycle (the
//!   instruction now in Memory) and the MEM/WB entry that Writeback just
//!   consumed (held as `wb_latch`, the architectural "MEM/WB register as
//!   of cycle start").
//! - Decode sees the freshly written EX/MEM and MEM/WB latches, which hold
//!   the results of the instructions one and two ahead of it.

use crate::core::arch::Gpr;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, MemWbEntry};
use crate::isa::instruction::Instruction;

/// Returns the source registers a consumer actually reads, per its format
/// (U/J read neither, I-forms read rs1 only, R/S/B read both), with
/// register 0 filtered out.
fn sources(consumer: &Instruction) -> (Option<usize>, Option<usize>) {
    let non_zero = |r: Option<usize>| r.filter(|&idx| idx != 0);
    (non_zero(consumer.rs1()), non_zero(consumer.rs2()))
}

/// Returns `true` when `dest` matches either used source register.
fn matches_source(dest: Option<usize>, rs1: Option<usize>, rs2: Option<usize>) -> bool {
    dest.is_some() && (dest == rs1 || dest == rs2)
}

/// Checks whether the instruction in IF/ID must stall in the decode stage.
///
/// Under the no-forwarding policy, any still-in-flight producer (ID/EX,
/// EX/MEM, or MEM/WB) with `reg_write` set and a destination matching one of
/// the consumer's used source registers is hazardous.
///
/// Under the forwarding policy only a load in ID/EX is hazardous: its data
/// is not available even via forwarding until it has passed the memory
/// stage. This is the load-use hazard, and it costs exactly one bubble.
///
/// # Arguments
///
/// * `consumer` - The instruction currently latched in IF/ID.
/// * `id_ex` - ID/EX latch contents (the instruction now in Execute).
/// * `ex_mem` - EX/MEM latch contents.
/// * `mem_wb` - MEM/WB latch contents.
/// * `forwarding` - Whether operand forwarding is enabled.
pub fn decode_stall(
    consumer: &Instruction,
    id_ex: Option<&IdExEntry>,
    ex_mem: Option<&ExMemEntry>,
    mem_wb: Option<&MemWbEntry>,
    forwarding: bool,
) -> bool {
    let (rs1, rs2) = sources(consumer);
    if rs1.is_none() && rs2.is_none() {
        return false;
    }

    if forwarding {
        return id_ex
            .is_some_and(|ex| ex.ctrl.mem_read && matches_source(ex.dest(), rs1, rs2));
    }

    id_ex.is_some_and(|ex| matches_source(ex.dest(), rs1, rs2))
        || ex_mem.is_some_and(|m| matches_source(m.dest(), rs1, rs2))
        || mem_wb.is_some_and(|w| matches_source(w.dest(), rs1, rs2))
}

/// Checks whether a control-flow instruction in decode must stall because a
/// register-writing producer still sits in ID/EX.
///
/// Branches and jumps resolve in the decode stage, one cycle earlier than
/// ordinary consumers, so a producer whose result is only being computed
/// this cycle cannot be bypassed to them yet. One bubble later the producer
/// has reached MEM/WB and the decode-side forwarding picks it up. Applies
/// only under the forwarding policy; without forwarding [`decode_stall`]'s
/// stricter rule subsumes it.
pub fn redirect_operand_stall(consumer: &Instruction, id_ex: Option<&IdExEntry>) -> bool {
    if !consumer.is_control_flow() {
        return false;
    }
    let (rs1, rs2) = sources(consumer);
    id_ex.is_some_and(|ex| matches_source(ex.dest(), rs1, rs2))
}

/// Checks whether the instruction just fetched would stall were it decoded
/// now. Evaluated only for control-flow instructions, which need operands a
/// cycle early; under forwarding it checks the in-flight load in ID/EX and
/// a load sitting in MEM/WB.
///
/// The verdict does not gate the pipeline: the decode-stage checks above
/// subsume its effect by the time the instruction reaches decode. It is
/// surfaced as a diagnostic counter only. Under the no-forwarding policy the
/// check is subsumed by the general rule and not separately triggered.
pub fn fetch_stall(
    fetched: &Instruction,
    id_ex: Option<&IdExEntry>,
    mem_wb: Option<&MemWbEntry>,
    forwarding: bool,
) -> bool {
    if !forwarding || !fetched.is_control_flow() {
        return false;
    }

    let (rs1, rs2) = sources(fetched);
    id_ex.is_some_and(|ex| ex.ctrl.mem_read && matches_source(ex.dest(), rs1, rs2))
        || mem_wb.is_some_and(|w| w.ctrl.mem_read && matches_source(w.dest(), rs1, rs2))
}

/// Forwarded value for one Execute-stage source operand.
///
/// Prefers the EX/MEM latch (the producer one ahead, whose ALU result was
/// latched at the end of the previous cycle); then the MEM/WB entry
/// committed this cycle (`wb_latch`), using its memory-read data when
/// `mem_to_reg` is set; otherwise the value latched from the register file
/// at decode time.
fn forward_operand(
    rs: Option<usize>,
    latched: u32,
    ex_mem: Option<&ExMemEntry>,
    wb_latch: Option<&MemWbEntry>,
) -> u32 {
    let Some(rs) = rs.filter(|&idx| idx != 0) else {
        return latched;
    };

    if let Some(m) = ex_mem {
        if m.dest() == Some(rs) {
            return m.alu.value;
        }
    }
    if let Some(w) = wb_latch {
        if w.dest() == Some(rs) {
            return w.committed_value();
        }
    }
    latched
}

/// Resolves both Execute-stage source operands for the instruction entering
/// Execute, applying forwarding independently per operand.
///
/// # Arguments
///
/// * `id` - The ID/EX entry being executed.
/// * `ex_mem` - The EX/MEM latch as left by the previous cycle.
/// * `wb_latch` - The MEM/WB entry consumed by Writeback this cycle.
///
/// # Returns
///
/// `(rs1_value, rs2_value)`. The rs2 value is returned even when the ALU
/// will use the immediate instead; it is the (possibly forwarded) store
/// data for store instructions.
pub fn forward_operands(
    id: &IdExEntry,
    ex_mem: Option<&ExMemEntry>,
    wb_latch: Option<&MemWbEntry>,
) -> (u32, u32) {
    (
        forward_operand(id.inst.rs1(), id.rv1, ex_mem, wb_latch),
        forward_operand(id.inst.rs2(), id.rv2, ex_mem, wb_latch),
    )
}

/// Resolves one decode-stage operand for branch/jump resolution.
///
/// Decode runs after Execute and Memory within the cycle, so the EX/MEM and
/// MEM/WB latches it sees hold the producers one and two ahead of it; a
/// producer three ahead retired through Writeback before decode ran and is
/// read from the register file directly.
pub fn forward_decode_operand(
    rs: Option<usize>,
    regs: &Gpr,
    ex_mem: Option<&ExMemEntry>,
    mem_wb: Option<&MemWbEntry>,
) -> u32 {
    let Some(rs) = rs.filter(|&idx| idx != 0) else {
        return 0;
    };

    if let Some(m) = ex_mem {
        if m.dest() == Some(rs) {
            return m.alu.value;
        }
    }
    if let Some(w) = mem_wb {
        if w.dest() == Some(rs) {
            return w.committed_value();
        }
    }
    regs.read(rs)
}
