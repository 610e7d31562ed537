//! Structured instruction model and bit-field extraction.
//!
//! Provides the [`InstructionBits`] extraction trait for raw 32-bit encodings
//! and the [`Instruction`] enum produced by the decoder. The enum has one
//! variant per instruction format, so which fields exist (rd, rs1, rs2,
//! immediate) is a property of the type rather than a convention: accessors
//! return `Option` where a format lacks the field.

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting a 5-bit register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Bit shift for the destination register field.
const RD_SHIFT: u32 = 7;
/// Bit shift for the first source register field.
const RS1_SHIFT: u32 = 15;
/// Bit shift for the second source register field.
const RS2_SHIFT: u32 = 20;
/// Bit shift for the funct3 field.
const FUNCT3_SHIFT: u32 = 12;
/// Bit shift for the funct7 field.
const FUNCT7_SHIFT: u32 = 25;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Provides methods to extract the standard RISC-V instruction fields
/// from a 32-bit instruction encoding.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode_bits(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd_bits(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1_bits(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2_bits(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3_bits(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7_bits(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode_bits(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd_bits(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1_bits(&self) -> usize {
        ((self >> RS1_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2_bits(&self) -> usize {
        ((self >> RS2_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3_bits(&self) -> u32 {
        (self >> FUNCT3_SHIFT) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7_bits(&self) -> u32 {
        (self >> FUNCT7_SHIFT) & FUNCT7_MASK
    }
}

/// Closed enumeration of the RV32I operations recognized by the decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(missing_docs)] // Mnemonics are the documentation.
pub enum Opcode {
    Add,
    Sub,
    Sll,
    Slt,
    Sltu,
    Xor,
    Srl,
    Sra,
    Or,
    And,
    Addi,
    Slti,
    Sltiu,
    Xori,
    Ori,
    Andi,
    Slli,
    Srli,
    Srai,
    Lb,
    Lh,
    Lw,
    Lbu,
    Lhu,
    Sb,
    Sh,
    Sw,
    Beq,
    Bne,
    Blt,
    Bge,
    Bltu,
    Bgeu,
    Lui,
    Auipc,
    Jal,
    Jalr,
}

impl Opcode {
    /// Returns the lowercase assembly mnemonic for this operation.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Sll => "sll",
            Self::Slt => "slt",
            Self::Sltu => "sltu",
            Self::Xor => "xor",
            Self::Srl => "srl",
            Self::Sra => "sra",
            Self::Or => "or",
            Self::And => "and",
            Self::Addi => "addi",
            Self::Slti => "slti",
            Self::Sltiu => "sltiu",
            Self::Xori => "xori",
            Self::Ori => "ori",
            Self::Andi => "andi",
            Self::Slli => "slli",
            Self::Srli => "srli",
            Self::Srai => "srai",
            Self::Lb => "lb",
            Self::Lh => "lh",
            Self::Lw => "lw",
            Self::Lbu => "lbu",
            Self::Lhu => "lhu",
            Self::Sb => "sb",
            Self::Sh => "sh",
            Self::Sw => "sw",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Blt => "blt",
            Self::Bge => "bge",
            Self::Bltu => "bltu",
            Self::Bgeu => "bgeu",
            Self::Lui => "lui",
            Self::Auipc => "auipc",
            Self::Jal => "jal",
            Self::Jalr => "jalr",
        }
    }

    /// Returns `true` for the five load operations.
    pub const fn is_load(self) -> bool {
        matches!(self, Self::Lb | Self::Lh | Self::Lw | Self::Lbu | Self::Lhu)
    }
}

/// Instruction format tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(missing_docs)] // Single-letter format names are standard.
pub enum Format {
    R,
    I,
    S,
    B,
    U,
    J,
}

/// A decoded RV32I instruction.
///
/// One variant per instruction format; a field appears on a variant exactly
/// when the format encodes it. `Invalid` represents any unrecognized
/// encoding and carries no fields; every pipeline stage treats it as a
/// pure no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Instruction {
    /// Register-register arithmetic/logic.
    R {
        /// Operation selector.
        op: Opcode,
        /// Destination register index.
        rd: usize,
        /// First source register index.
        rs1: usize,
        /// Second source register index.
        rs2: usize,
    },
    /// Immediate arithmetic, loads, and JALR.
    I {
        /// Operation selector.
        op: Opcode,
        /// Destination register index.
        rd: usize,
        /// Source register index.
        rs1: usize,
        /// Sign-extended 12-bit immediate.
        imm: i32,
    },
    /// Stores.
    S {
        /// Operation selector.
        op: Opcode,
        /// Base address register index.
        rs1: usize,
        /// Source data register index.
        rs2: usize,
        /// Sign-extended 12-bit immediate.
        imm: i32,
    },
    /// Conditional branches.
    B {
        /// Operation selector.
        op: Opcode,
        /// First comparison register index.
        rs1: usize,
        /// Second comparison register index.
        rs2: usize,
        /// Sign-extended even branch offset.
        imm: i32,
    },
    /// LUI and AUIPC.
    U {
        /// Operation selector.
        op: Opcode,
        /// Destination register index.
        rd: usize,
        /// Upper 20-bit immediate, already placed in bits 31-12.
        imm: i32,
    },
    /// JAL.
    J {
        /// Operation selector.
        op: Opcode,
        /// Destination register index (link register).
        rd: usize,
        /// Sign-extended even jump offset.
        imm: i32,
    },
    /// Unrecognized encoding; a pure no-op everywhere in the pipeline.
    #[default]
    Invalid,
}

impl Instruction {
    /// Returns the operation selector, or `None` for `Invalid`.
    pub const fn opcode(&self) -> Option<Opcode> {
        match self {
            Self::R { op, .. }
            | Self::I { op, .. }
            | Self::S { op, .. }
            | Self::B { op, .. }
            | Self::U { op, .. }
            | Self::J { op, .. } => Some(*op),
            Self::Invalid => None,
        }
    }

    /// Returns the format tag, or `None` for `Invalid`.
    pub const fn format(&self) -> Option<Format> {
        match self {
            Self::R { .. } => Some(Format::R),
            Self::I { .. } => Some(Format::I),
            Self::S { .. } => Some(Format::S),
            Self::B { .. } => Some(Format::B),
            Self::U { .. } => Some(Format::U),
            Self::J { .. } => Some(Format::J),
            Self::Invalid => None,
        }
    }

    /// Returns the destination register index for formats that encode one.
    pub const fn rd(&self) -> Option<usize> {
        match self {
            Self::R { rd, .. }
            | Self::I { rd, .. }
            | Self::U { rd, .. }
            | Self::J { rd, .. } => Some(*rd),
            Self::S { .. } | Self::B { .. } | Self::Invalid => None,
        }
    }

    /// Returns the first source register index for formats that read one.
    pub const fn rs1(&self) -> Option<usize> {
        match self {
            Self::R { rs1, .. }
            | Self::I { rs1, .. }
            | Self::S { rs1, .. }
            | Self::B { rs1, .. } => Some(*rs1),
            Self::U { .. } | Self::J { .. } | Self::Invalid => None,
        }
    }

    /// Returns the second source register index for formats that read one.
    pub const fn rs2(&self) -> Option<usize> {
        match self {
            Self::R { rs2, .. } | Self::S { rs2, .. } | Self::B { rs2, .. } => Some(*rs2),
            Self::I { .. } | Self::U { .. } | Self::J { .. } | Self::Invalid => None,
        }
    }

    /// Returns the sign-extended immediate, or 0 for formats without one.
    pub const fn imm(&self) -> i32 {
        match self {
            Self::I { imm, .. }
            | Self::S { imm, .. }
            | Self::B { imm, .. }
            | Self::U { imm, .. }
            | Self::J { imm, .. } => *imm,
            Self::R { .. } | Self::Invalid => 0,
        }
    }

    /// Returns `true` for instructions that redirect control flow: branches,
    /// JAL, and JALR. These resolve in the decode stage and therefore need
    /// their operands one cycle earlier than ordinary consumers.
    pub const fn is_control_flow(&self) -> bool {
        matches!(
            self,
            Self::B { .. } | Self::J { .. } | Self::I { op: Opcode::Jalr, .. }
        )
    }
}
