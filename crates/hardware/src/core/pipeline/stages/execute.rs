//! Execute (EX) stage.
//!
//! Resolves the ALU operands, consulting the forwarding unit when
//! forwarding is enabled and using the values latched at decode otherwise,
//! and performs the ALU operation. The (possibly forwarded) rs2 value is
//! carried onward as store data.
//!
//! Branches and jumps were already resolved in decode; for them this stage
//! only computes the comparison/link values that flow down the data path.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::ExMemEntry;
use crate::core::units::alu::Alu;
use crate::trace::Stage;

/// Executes the execute stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
pub fn execute_stage(cpu: &mut Cpu) {
    let Some(id) = cpu.id_ex.clone() else {
        cpu.ex_mem = None;
        return;
    };

    cpu.trace.record(id.pc, cpu.cycle_index(), Stage::Ex);

    let (rs1_val, rs2_val) = if cpu.forwarding {
        hazards::forward_operands(&id, cpu.ex_mem.as_ref(), cpu.wb_latch.as_ref())
    } else {
        (id.rv1, id.rv2)
    };

    let op_b = if id.ctrl.alu_src_imm {
        id.imm as u32
    } else {
        rs2_val
    };

    let alu = Alu::execute(id.ctrl.alu, rs1_val, op_b, id.pc);
    trace!(
        "EX  pc={:#010x} a={rs1_val:#x} b={op_b:#x} -> {:#x}",
        id.pc, alu.value
    );

    cpu.ex_mem = Some(ExMemEntry {
        pc: id.pc,
        inst: id.inst,
        alu,
        store_data: rs2_val,
        ctrl: id.ctrl,
    });
}
