//! Pipeline control signals and their derivation (the control unit).
//!
//! This module defines the signals that steer an instruction through the
//! pipeline. It performs:
//! 1. **Operation selection:** Maps each instruction to its ALU operation.
//! 2. **Operand selection:** Chooses between the rs2 value and the immediate.
//! 3. **Memory/writeback control:** Flags loads, stores, and register writes.
//!
//! Signals are derived once, in the decode stage, purely from the decoded
//! instruction; they are never mutated afterwards.

use crate::isa::instruction::{Instruction, Opcode};

/// ALU operation selector.
///
/// Covers the arithmetic/logic operations, the branch-condition comparisons
/// (which produce 0/1), and the special value-producing cases of the jump
/// and upper-immediate instructions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Integer addition (also address generation for loads and stores).
    #[default]
    Add,

    /// Integer subtraction.
    Sub,

    /// Shift left logical.
    Sll,

    /// Set less than (signed).
    Slt,

    /// Set less than (unsigned).
    Sltu,

    /// Bitwise XOR.
    Xor,

    /// Shift right logical.
    Srl,

    /// Shift right arithmetic.
    Sra,

    /// Bitwise OR.
    Or,

    /// Bitwise AND.
    And,

    /// Equality comparison, 0/1 result (BEQ).
    CmpEq,

    /// Inequality comparison, 0/1 result (BNE).
    CmpNe,

    /// Signed less-than comparison, 0/1 result (BLT).
    CmpLt,

    /// Signed greater-or-equal comparison, 0/1 result (BGE).
    CmpGe,

    /// Unsigned less-than comparison, 0/1 result (BLTU).
    CmpLtu,

    /// Unsigned greater-or-equal comparison, 0/1 result (BGEU).
    CmpGeu,

    /// Link-address generation: PC + 4 (JAL/JALR writeback value).
    LinkPc,

    /// Upper-immediate pass-through (LUI).
    CopyImm,

    /// PC + immediate (AUIPC).
    AddPc,
}

/// Control signals for pipeline stage execution.
///
/// Derived deterministically from the decoded instruction by
/// [`ControlSignals::derive`]; an invalid instruction gets the all-false
/// default, making it a no-op in every stage.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlSignals {
    /// Enable write to the destination register.
    pub reg_write: bool,
    /// Enable memory read (load).
    pub mem_read: bool,
    /// Enable memory write (store).
    pub mem_write: bool,
    /// Writeback commits memory-read data instead of the ALU result.
    pub mem_to_reg: bool,
    /// The second ALU operand is the immediate instead of the rs2 value.
    pub alu_src_imm: bool,
    /// Instruction is a conditional branch.
    pub branch: bool,
    /// Instruction is an unconditional jump (JAL/JALR).
    pub jump: bool,
    /// ALU operation to perform.
    pub alu: AluOp,
}

impl ControlSignals {
    /// Derives the control signals for a decoded instruction.
    ///
    /// Pure lookup on (format, opcode); see the per-arm comments for the
    /// signal sets. [`Instruction::Invalid`] yields the all-false default.
    pub fn derive(inst: &Instruction) -> Self {
        let Some(op) = inst.opcode() else {
            return Self::default();
        };

        match op {
            // R-type arithmetic/logic: register write only.
            Opcode::Add => Self::r_type(AluOp::Add),
            Opcode::Sub => Self::r_type(AluOp::Sub),
            Opcode::Sll => Self::r_type(AluOp::Sll),
            Opcode::Slt => Self::r_type(AluOp::Slt),
            Opcode::Sltu => Self::r_type(AluOp::Sltu),
            Opcode::Xor => Self::r_type(AluOp::Xor),
            Opcode::Srl => Self::r_type(AluOp::Srl),
            Opcode::Sra => Self::r_type(AluOp::Sra),
            Opcode::Or => Self::r_type(AluOp::Or),
            Opcode::And => Self::r_type(AluOp::And),

            // I-type arithmetic: register write from the immediate operand.
            Opcode::Addi => Self::i_arith(AluOp::Add),
            Opcode::Slti => Self::i_arith(AluOp::Slt),
            Opcode::Sltiu => Self::i_arith(AluOp::Sltu),
            Opcode::Xori => Self::i_arith(AluOp::Xor),
            Opcode::Ori => Self::i_arith(AluOp::Or),
            Opcode::Andi => Self::i_arith(AluOp::And),
            Opcode::Slli => Self::i_arith(AluOp::Sll),
            Opcode::Srli => Self::i_arith(AluOp::Srl),
            Opcode::Srai => Self::i_arith(AluOp::Sra),

            // Loads: address generation plus memory-to-register writeback.
            Opcode::Lb | Opcode::Lh | Opcode::Lw | Opcode::Lbu | Opcode::Lhu => Self {
                reg_write: true,
                mem_read: true,
                mem_to_reg: true,
                alu_src_imm: true,
                alu: AluOp::Add,
                ..Self::default()
            },

            // Stores: address generation, no writeback.
            Opcode::Sb | Opcode::Sh | Opcode::Sw => Self {
                mem_write: true,
                alu_src_imm: true,
                alu: AluOp::Add,
                ..Self::default()
            },

            // Branches: condition evaluated as a 0/1 ALU result; the
            // authoritative resolution happens in the decode stage.
            Opcode::Beq => Self::b_type(AluOp::CmpEq),
            Opcode::Bne => Self::b_type(AluOp::CmpNe),
            Opcode::Blt => Self::b_type(AluOp::CmpLt),
            Opcode::Bge => Self::b_type(AluOp::CmpGe),
            Opcode::Bltu => Self::b_type(AluOp::CmpLtu),
            Opcode::Bgeu => Self::b_type(AluOp::CmpGeu),

            Opcode::Lui => Self {
                reg_write: true,
                alu_src_imm: true,
                alu: AluOp::CopyImm,
                ..Self::default()
            },
            Opcode::Auipc => Self {
                reg_write: true,
                alu_src_imm: true,
                alu: AluOp::AddPc,
                ..Self::default()
            },

            // Jumps: link address written back; always taken in decode.
            Opcode::Jal | Opcode::Jalr => Self {
                reg_write: true,
                jump: true,
                alu: AluOp::LinkPc,
                ..Self::default()
            },
        }
    }

    /// Signals for register-register arithmetic.
    const fn r_type(alu: AluOp) -> Self {
        Self {
            reg_write: true,
            mem_read: false,
            mem_write: false,
            mem_to_reg: false,
            alu_src_imm: false,
            branch: false,
            jump: false,
            alu,
        }
    }

    /// Signals for immediate arithmetic.
    const fn i_arith(alu: AluOp) -> Self {
        Self {
            reg_write: true,
            mem_read: false,
            mem_write: false,
            mem_to_reg: false,
            alu_src_imm: true,
            branch: false,
            jump: false,
            alu,
        }
    }

    /// Signals for conditional branches.
    const fn b_type(alu: AluOp) -> Self {
        Self {
            reg_write: false,
            mem_read: false,
            mem_write: false,
            mem_to_reg: false,
            alu_src_imm: false,
            branch: true,
            jump: false,
            alu,
        }
    }
}
