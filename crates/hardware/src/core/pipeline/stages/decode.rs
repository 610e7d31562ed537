//! Instruction Decode (ID) stage.
//!
//! This stage does the most per-cycle work of the five:
//! 1. **Hazard check:** Consults the hazard unit and injects a bubble into
//!    ID/EX when the instruction must stall.
//! 2. **Register read:** Latches the source operands from the register file.
//! 3. **Control generation:** Derives the control signals for downstream
//!    stages.
//! 4. **Branch/jump resolution:** Evaluates branch conditions and computes
//!    targets using (optionally forwarded) operand values, reporting any
//!    redirect to the driver for the same cycle. This is the single source
//!    of control-flow redirects; later stages never redirect.

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::hazards;
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry};
use crate::core::pipeline::signals::ControlSignals;
use crate::isa::instruction::{Instruction, Opcode};
use crate::trace::Stage;

/// Per-cycle outcome of the decode stage, reported to the driver.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecodeOutcome {
    /// The instruction in IF/ID stalled; fetch must not advance the PC.
    pub stall: bool,
    /// A taken branch or jump resolved this cycle; the driver must set the
    /// PC to the target and flush IF/ID.
    pub redirect: Option<u32>,
}

/// Executes the instruction decode stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
pub fn decode_stage(cpu: &mut Cpu) -> DecodeOutcome {
    let Some(entry) = cpu.if_id.clone() else {
        cpu.id_ex = None;
        return DecodeOutcome::default();
    };

    let cycle = cpu.cycle_index();
    cpu.trace.record(entry.pc, cycle, Stage::Id);

    if hazards::decode_stall(
        &entry.inst,
        cpu.id_ex.as_ref(),
        cpu.ex_mem.as_ref(),
        cpu.mem_wb.as_ref(),
        cpu.forwarding,
    ) {
        trace!("ID  pc={:#010x} # stall", entry.pc);
        // The fetch frozen behind the stalled instruction still occupies IF.
        cpu.trace.record(cpu.pc, cycle, Stage::If);
        cpu.id_ex = None;
        cpu.stats.stalls_data += 1;
        return DecodeOutcome {
            stall: true,
            redirect: None,
        };
    }

    let mut redirect = None;
    if entry.inst.is_control_flow() {
        if cpu.forwarding
            && hazards::redirect_operand_stall(&entry.inst, cpu.id_ex.as_ref())
        {
            trace!("ID  pc={:#010x} # stall (redirect operand in EX)", entry.pc);
            cpu.id_ex = None;
            cpu.stats.stalls_data += 1;
            return DecodeOutcome {
                stall: true,
                redirect: None,
            };
        }

        let (rs1_val, rs2_val) = redirect_operands(cpu, &entry);
        redirect = resolve_redirect(&entry, rs1_val, rs2_val);
        if let Some(target) = redirect {
            trace!("ID  pc={:#010x} taken -> {target:#010x}", entry.pc);
        }
    }

    trace!("ID  pc={:#010x}", entry.pc);

    let rv1 = entry.inst.rs1().map_or(0, |r| cpu.regs.read(r));
    let rv2 = entry.inst.rs2().map_or(0, |r| cpu.regs.read(r));
    cpu.id_ex = Some(IdExEntry {
        pc: entry.pc,
        inst: entry.inst,
        rv1,
        rv2,
        imm: entry.inst.imm(),
        ctrl: ControlSignals::derive(&entry.inst),
    });

    DecodeOutcome {
        stall: false,
        redirect,
    }
}

/// Reads the operand values used for branch/jump resolution. With
/// forwarding enabled these bypass from the freshly written EX/MEM and
/// MEM/WB latches; otherwise they come straight from the register file.
fn redirect_operands(cpu: &Cpu, entry: &IfIdEntry) -> (u32, u32) {
    if cpu.forwarding {
        (
            hazards::forward_decode_operand(
                entry.inst.rs1(),
                &cpu.regs,
                cpu.ex_mem.as_ref(),
                cpu.mem_wb.as_ref(),
            ),
            hazards::forward_decode_operand(
                entry.inst.rs2(),
                &cpu.regs,
                cpu.ex_mem.as_ref(),
                cpu.mem_wb.as_ref(),
            ),
        )
    } else {
        (
            entry.inst.rs1().map_or(0, |r| cpu.regs.read(r)),
            entry.inst.rs2().map_or(0, |r| cpu.regs.read(r)),
        )
    }
}

/// Evaluates a control-flow instruction: JAL and JALR are always taken;
/// conditional branches compare their operands. Returns the redirect
/// target when taken.
fn resolve_redirect(entry: &IfIdEntry, rs1_val: u32, rs2_val: u32) -> Option<u32> {
    match entry.inst {
        Instruction::J { imm, .. } => Some(entry.pc.wrapping_add(imm as u32)),
        Instruction::I {
            op: Opcode::Jalr,
            imm,
            ..
        } => Some(rs1_val.wrapping_add(imm as u32) & !1),
        Instruction::B { op, imm, .. } => {
            let taken = match op {
                Opcode::Beq => rs1_val == rs2_val,
                Opcode::Bne => rs1_val != rs2_val,
                Opcode::Blt => (rs1_val as i32) < (rs2_val as i32),
                Opcode::Bge => (rs1_val as i32) >= (rs2_val as i32),
                Opcode::Bltu => rs1_val < rs2_val,
                Opcode::Bgeu => rs1_val >= rs2_val,
                _ => false,
            };
            taken.then(|| entry.pc.wrapping_add(imm as u32))
        }
        _ => None,
    }
}
