//! RV32I funct7 codes.

/// Default encoding (ADD, SLL, SRL, and all single-encoding operations).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate encoding bit set: SUB (with funct3 `ADD_SUB`) and SRA/SRAI
/// (with funct3 `SRL_SRA`).
pub const ALT: u32 = 0b0100000;
