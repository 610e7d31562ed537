//! Pipeline latch payload types for inter-stage communication.
//!
//! This module defines the entry types carried between the five stages:
//! Fetch → Decode → Execute → Memory → Writeback. Each latch in the CPU is
//! an `Option<entry>`: `None` is the bubble injected by stalls and flushes,
//! so a downstream stage cannot accidentally consume stale contents. Every
//! latch is fully overwritten exactly once per cycle by the stage that owns
//! it.

use crate::core::pipeline::signals::ControlSignals;
use crate::core::units::alu::AluResult;
use crate::isa::instruction::Instruction;

/// Entry in the IF/ID latch (Fetch to Decode).
///
/// Carries the fetched word and its decoded form; decoding is pure, so it
/// is done once at fetch and snapshotted here.
#[derive(Clone, Debug)]
pub struct IfIdEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Decoded instruction.
    pub inst: Instruction,
}

/// Entry in the ID/EX latch (Decode to Execute).
#[derive(Clone, Debug)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// Value read from rs1 at decode time (0 when the format has no rs1).
    pub rv1: u32,
    /// Value read from rs2 at decode time (0 when the format has no rs2).
    pub rv2: u32,
    /// Sign-extended immediate.
    pub imm: i32,
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
}

/// Entry in the EX/MEM latch (Execute to Memory).
#[derive(Clone, Debug)]
pub struct ExMemEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// ALU computation result (the address for memory operations).
    pub alu: AluResult,
    /// Data to be stored, after any forwarding (for store instructions).
    pub store_data: u32,
    /// Control signals for downstream stages.
    pub ctrl: ControlSignals,
}

/// Entry in the MEM/WB latch (Memory to Writeback).
#[derive(Clone, Debug)]
pub struct MemWbEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// ALU computation result (for non-load instructions).
    pub alu: u32,
    /// Data loaded from memory (for load instructions).
    pub load_data: u32,
    /// Control signals for the writeback stage.
    pub ctrl: ControlSignals,
}

impl IdExEntry {
    /// Returns the destination register this entry will write, excluding
    /// register 0, which is never a hazard or forwarding target.
    pub fn dest(&self) -> Option<usize> {
        dest_of(&self.inst, self.ctrl.reg_write)
    }
}

impl ExMemEntry {
    /// Returns the destination register this entry will write, excluding
    /// register 0.
    pub fn dest(&self) -> Option<usize> {
        dest_of(&self.inst, self.ctrl.reg_write)
    }
}

impl MemWbEntry {
    /// Returns the destination register this entry will write, excluding
    /// register 0.
    pub fn dest(&self) -> Option<usize> {
        dest_of(&self.inst, self.ctrl.reg_write)
    }

    /// Returns the value this entry commits at writeback: the memory-read
    /// data when `mem_to_reg` is set, otherwise the ALU result.
    pub const fn committed_value(&self) -> u32 {
        if self.ctrl.mem_to_reg {
            self.load_data
        } else {
            self.alu
        }
    }
}

/// Shared destination computation: a register-writing entry's rd, with
/// register 0 filtered out.
fn dest_of(inst: &Instruction, reg_write: bool) -> Option<usize> {
    if reg_write {
        inst.rd().filter(|&rd| rd != 0)
    } else {
        None
    }
}
