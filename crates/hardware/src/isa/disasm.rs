//! Instruction disassembler for RV32I.
//!
//! Converts a decoded [`Instruction`] into a compact mnemonic string for the
//! pipeline trace table and test diagnostics. Memory operations use the
//! `offset(base)` form; the upper-immediate instructions print their 20-bit
//! immediate in hex; unrecognized encodings render as `"unknown"`.
//!
//! # Usage
//!
//! ```
//! use rv32pipe_core::isa::decode::decode;
//! use rv32pipe_core::isa::disasm::disassemble;
//!
//! let text = disassemble(&decode(0x00500093)); // ADDI x1, x0, 5
//! assert_eq!(text, "addi x1,x0,5");
//! ```

use crate::isa::instruction::{Instruction, Opcode};

/// Disassembles a decoded instruction into a mnemonic string.
///
/// # Arguments
///
/// * `inst` - The decoded instruction.
pub fn disassemble(inst: &Instruction) -> String {
    match *inst {
        Instruction::R { op, rd, rs1, rs2 } => {
            format!("{} x{rd},x{rs1},x{rs2}", op.mnemonic())
        }
        Instruction::I { op, rd, rs1, imm } => {
            if op.is_load() || op == Opcode::Jalr {
                format!("{} x{rd},{imm}(x{rs1})", op.mnemonic())
            } else {
                format!("{} x{rd},x{rs1},{imm}", op.mnemonic())
            }
        }
        Instruction::S { op, rs1, rs2, imm } => {
            format!("{} x{rs2},{imm}(x{rs1})", op.mnemonic())
        }
        Instruction::B { op, rs1, rs2, imm } => {
            format!("{} x{rs1},x{rs2},{imm}", op.mnemonic())
        }
        Instruction::U { op, rd, imm } => {
            format!("{} x{rd},{:#x}", op.mnemonic(), (imm as u32) >> 12)
        }
        Instruction::J { op, rd, imm } => {
            format!("{} x{rd},{imm}", op.mnemonic())
        }
        Instruction::Invalid => "unknown".to_string(),
    }
}
