//! RV32I Instruction Decoder.
//!
//! This module handles the decoding of 32-bit RV32I instruction encodings
//! into the structured [`Instruction`] model. It extracts the opcode field
//! first to select the format, then the format-specific register fields and
//! function codes, and reassembles and sign-extends the split immediate
//! fields. Any opcode/funct combination outside the recognized set decodes
//! to [`Instruction::Invalid`].
//!
//! Decoding is a pure function: re-decoding the same word always yields the
//! same structured instruction.

use crate::isa::instruction::{Instruction, InstructionBits, Opcode};
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Total width of an instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Bit shift for extracting the I-type immediate field (bits 20-31).
///
/// I-type format: `imm[11:0] | rs1 | funct3 | rd | opcode`.
const I_IMM_SHIFT: u32 = 20;

/// Bit shift for the S-type immediate low field (bits 7-11).
///
/// S-type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`.
const S_IMM_LOW_SHIFT: u32 = 7;
/// Bit mask for the S-type immediate low field (5 bits).
const S_IMM_LOW_MASK: u32 = 0x1F;
/// Bit shift for the S-type immediate high field (bits 25-31).
const S_IMM_HIGH_SHIFT: u32 = 25;
/// Bit mask for the S-type immediate high field (7 bits).
const S_IMM_HIGH_MASK: u32 = 0x7F;
/// Bit position of the high field in the reassembled S-type immediate.
const S_IMM_HIGH_POS: u32 = 5;
/// Total number of bits in an S-type immediate.
const S_IMM_BITS: u32 = 12;

/// B-type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`.
///
/// The immediate is an even offset; its LSB is fixed at 0.
const B_IMM_11_SHIFT: u32 = 7;
/// Bit shift for B-type immediate bits 4-1 (bits 8-11 of the instruction).
const B_IMM_4_1_SHIFT: u32 = 8;
/// Bit mask for B-type immediate bits 4-1.
const B_IMM_4_1_MASK: u32 = 0xF;
/// Bit shift for B-type immediate bits 10-5 (bits 25-30 of the instruction).
const B_IMM_10_5_SHIFT: u32 = 25;
/// Bit mask for B-type immediate bits 10-5.
const B_IMM_10_5_MASK: u32 = 0x3F;
/// Bit shift for B-type immediate bit 12 (bit 31 of the instruction).
const B_IMM_12_SHIFT: u32 = 31;
/// Total number of bits in a B-type immediate.
const B_IMM_BITS: u32 = 13;

/// Bit mask for the U-type immediate field (bits 12-31).
///
/// U-type format: `imm[31:12] | rd | opcode`; the immediate stays in the
/// upper bits of the value.
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// J-type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`.
const J_IMM_19_12_SHIFT: u32 = 12;
/// Bit mask for J-type immediate bits 19-12.
const J_IMM_19_12_MASK: u32 = 0xFF;
/// Bit shift for J-type immediate bit 11 (bit 20 of the instruction).
const J_IMM_11_SHIFT: u32 = 20;
/// Bit shift for J-type immediate bits 10-1 (bits 21-30 of the instruction).
const J_IMM_10_1_SHIFT: u32 = 21;
/// Bit mask for J-type immediate bits 10-1.
const J_IMM_10_1_MASK: u32 = 0x3FF;
/// Bit shift for J-type immediate bit 20 (bit 31 of the instruction).
const J_IMM_20_SHIFT: u32 = 31;
/// Total number of bits in a J-type immediate.
const J_IMM_BITS: u32 = 21;

/// Decodes a raw 32-bit word into a structured instruction.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode.
///
/// # Returns
///
/// The decoded [`Instruction`], or [`Instruction::Invalid`] when the opcode
/// or function codes do not match any defined RV32I encoding (the all-zero
/// word in particular decodes to `Invalid`).
pub fn decode(inst: u32) -> Instruction {
    match inst.opcode_bits() {
        opcodes::OP_REG => decode_r_type(inst),
        opcodes::OP_IMM => decode_i_arith(inst),
        opcodes::OP_LOAD => decode_i_load(inst),
        opcodes::OP_JALR => Instruction::I {
            op: Opcode::Jalr,
            rd: inst.rd_bits(),
            rs1: inst.rs1_bits(),
            imm: decode_i_type_imm(inst),
        },
        opcodes::OP_STORE => decode_s_type(inst),
        opcodes::OP_BRANCH => decode_b_type(inst),
        opcodes::OP_LUI => Instruction::U {
            op: Opcode::Lui,
            rd: inst.rd_bits(),
            imm: decode_u_type_imm(inst),
        },
        opcodes::OP_AUIPC => Instruction::U {
            op: Opcode::Auipc,
            rd: inst.rd_bits(),
            imm: decode_u_type_imm(inst),
        },
        opcodes::OP_JAL => Instruction::J {
            op: Opcode::Jal,
            rd: inst.rd_bits(),
            imm: decode_j_type_imm(inst),
        },
        _ => Instruction::Invalid,
    }
}

/// Decodes register-register arithmetic; funct7 selects the base or the
/// alternate (SUB/SRA) operation set.
fn decode_r_type(inst: u32) -> Instruction {
    let op = match (inst.funct7_bits(), inst.funct3_bits()) {
        (funct7::DEFAULT, funct3::ADD_SUB) => Opcode::Add,
        (funct7::DEFAULT, funct3::SLL) => Opcode::Sll,
        (funct7::DEFAULT, funct3::SLT) => Opcode::Slt,
        (funct7::DEFAULT, funct3::SLTU) => Opcode::Sltu,
        (funct7::DEFAULT, funct3::XOR) => Opcode::Xor,
        (funct7::DEFAULT, funct3::SRL_SRA) => Opcode::Srl,
        (funct7::DEFAULT, funct3::OR) => Opcode::Or,
        (funct7::DEFAULT, funct3::AND) => Opcode::And,
        (funct7::ALT, funct3::ADD_SUB) => Opcode::Sub,
        (funct7::ALT, funct3::SRL_SRA) => Opcode::Sra,
        _ => return Instruction::Invalid,
    };
    Instruction::R {
        op,
        rd: inst.rd_bits(),
        rs1: inst.rs1_bits(),
        rs2: inst.rs2_bits(),
    }
}

/// Decodes immediate arithmetic; for right shifts the funct7-equivalent top
/// bits distinguish logical from arithmetic.
fn decode_i_arith(inst: u32) -> Instruction {
    let op = match inst.funct3_bits() {
        funct3::ADD_SUB => Opcode::Addi,
        funct3::SLT => Opcode::Slti,
        funct3::SLTU => Opcode::Sltiu,
        funct3::XOR => Opcode::Xori,
        funct3::OR => Opcode::Ori,
        funct3::AND => Opcode::Andi,
        funct3::SLL => Opcode::Slli,
        funct3::SRL_SRA => match inst.funct7_bits() {
            funct7::DEFAULT => Opcode::Srli,
            funct7::ALT => Opcode::Srai,
            _ => return Instruction::Invalid,
        },
        _ => return Instruction::Invalid,
    };
    Instruction::I {
        op,
        rd: inst.rd_bits(),
        rs1: inst.rs1_bits(),
        imm: decode_i_type_imm(inst),
    }
}

/// Decodes the load group.
fn decode_i_load(inst: u32) -> Instruction {
    let op = match inst.funct3_bits() {
        funct3::LB => Opcode::Lb,
        funct3::LH => Opcode::Lh,
        funct3::LW => Opcode::Lw,
        funct3::LBU => Opcode::Lbu,
        funct3::LHU => Opcode::Lhu,
        _ => return Instruction::Invalid,
    };
    Instruction::I {
        op,
        rd: inst.rd_bits(),
        rs1: inst.rs1_bits(),
        imm: decode_i_type_imm(inst),
    }
}

/// Decodes the store group.
fn decode_s_type(inst: u32) -> Instruction {
    let op = match inst.funct3_bits() {
        funct3::SB => Opcode::Sb,
        funct3::SH => Opcode::Sh,
        funct3::SW => Opcode::Sw,
        _ => return Instruction::Invalid,
    };
    Instruction::S {
        op,
        rs1: inst.rs1_bits(),
        rs2: inst.rs2_bits(),
        imm: decode_s_type_imm(inst),
    }
}

/// Decodes the conditional-branch group.
fn decode_b_type(inst: u32) -> Instruction {
    let op = match inst.funct3_bits() {
        funct3::BEQ => Opcode::Beq,
        funct3::BNE => Opcode::Bne,
        funct3::BLT => Opcode::Blt,
        funct3::BGE => Opcode::Bge,
        funct3::BLTU => Opcode::Bltu,
        funct3::BGEU => Opcode::Bgeu,
        _ => return Instruction::Invalid,
    };
    Instruction::B {
        op,
        rs1: inst.rs1_bits(),
        rs2: inst.rs2_bits(),
        imm: decode_b_type_imm(inst),
    }
}

/// Decodes the immediate value for I-type instructions.
fn decode_i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> I_IMM_SHIFT
}

/// Decodes the immediate value for S-type instructions, reassembled from
/// two split fields and sign-extended.
fn decode_s_type_imm(inst: u32) -> i32 {
    let low = (inst >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (inst >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    sign_extend((high << S_IMM_HIGH_POS) | low, S_IMM_BITS)
}

/// Decodes the immediate value for B-type instructions, reassembled from
/// four split bit groups into an even offset and sign-extended.
fn decode_b_type_imm(inst: u32) -> i32 {
    let bit_11 = (inst >> B_IMM_11_SHIFT) & 1;
    let bits_4_1 = (inst >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
    let bits_10_5 = (inst >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bit_12 = (inst >> B_IMM_12_SHIFT) & 1;

    let combined = (bit_12 << 12) | (bit_11 << 11) | (bits_10_5 << 5) | (bits_4_1 << 1);
    sign_extend(combined, B_IMM_BITS)
}

/// Decodes the immediate value for U-type instructions (upper 20 bits in
/// place, no sign extension needed).
fn decode_u_type_imm(inst: u32) -> i32 {
    (inst & U_IMM_MASK) as i32
}

/// Decodes the immediate value for J-type instructions, reassembled from
/// four split bit groups into an even offset and sign-extended.
fn decode_j_type_imm(inst: u32) -> i32 {
    let bits_19_12 = (inst >> J_IMM_19_12_SHIFT) & J_IMM_19_12_MASK;
    let bit_11 = (inst >> J_IMM_11_SHIFT) & 1;
    let bits_10_1 = (inst >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
    let bit_20 = (inst >> J_IMM_20_SHIFT) & 1;

    let combined = (bit_20 << 20) | (bits_19_12 << 12) | (bit_11 << 11) | (bits_10_1 << 1);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign-extends a value of `bits` width to a 32-bit signed integer.
fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    ((val as i32) << shift) >> shift
}
