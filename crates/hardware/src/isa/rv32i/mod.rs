//! RV32I constant tables.
//!
//! Groups the major-opcode and function-code constants used by the decoder
//! and the instruction encodings used in tests.

/// funct3 codes, grouped by major opcode.
pub mod funct3;
/// funct7 codes for R-type and shift-immediate encodings.
pub mod funct7;
/// Major opcodes (bits 6-0).
pub mod opcodes;
