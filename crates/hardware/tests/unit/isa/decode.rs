//! Decoder tests.
//!
//! Verifies per-format field extraction, immediate reassembly and sign
//! extension, rejection of undefined encodings, and (via the encoders in
//! `common::builders`) that decoding recovers exactly the fields any valid
//! instruction was encoded from.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use rv32pipe_core::isa::decode::decode;
use rv32pipe_core::isa::instruction::{Format, Instruction, Opcode};

use crate::common::builders;

// ══════════════════════════════════════════════════════════
// 1. Per-format decoding
// ══════════════════════════════════════════════════════════

#[test]
fn decodes_r_type() {
    assert_eq!(
        decode(builders::add(3, 1, 2)),
        Instruction::R {
            op: Opcode::Add,
            rd: 3,
            rs1: 1,
            rs2: 2
        }
    );
    assert_eq!(
        decode(builders::sub(5, 6, 7)),
        Instruction::R {
            op: Opcode::Sub,
            rd: 5,
            rs1: 6,
            rs2: 7
        }
    );
    assert_eq!(
        decode(builders::sra(1, 2, 3)),
        Instruction::R {
            op: Opcode::Sra,
            rd: 1,
            rs1: 2,
            rs2: 3
        }
    );
}

#[test]
fn decodes_i_arithmetic_with_negative_immediate() {
    assert_eq!(
        decode(builders::addi(1, 0, -1)),
        Instruction::I {
            op: Opcode::Addi,
            rd: 1,
            rs1: 0,
            imm: -1
        }
    );
    assert_eq!(
        decode(builders::andi(4, 5, 0x7FF)),
        Instruction::I {
            op: Opcode::Andi,
            rd: 4,
            rs1: 5,
            imm: 0x7FF
        }
    );
}

#[test]
fn distinguishes_logical_and_arithmetic_shift_immediates() {
    assert_eq!(
        decode(builders::srli(1, 2, 5)),
        Instruction::I {
            op: Opcode::Srli,
            rd: 1,
            rs1: 2,
            imm: 5
        }
    );
    let decoded = decode(builders::srai(1, 2, 5));
    match decoded {
        Instruction::I {
            op: Opcode::Srai,
            rd: 1,
            rs1: 2,
            imm,
        } => {
            // The encoded shift amount sits in the low immediate bits.
            assert_eq!(imm & 0x1F, 5);
        }
        other => panic!("expected SRAI, decoded {other:?}"),
    }
}

#[test]
fn decodes_loads() {
    assert_eq!(
        decode(builders::lw(1, 0, 0)),
        Instruction::I {
            op: Opcode::Lw,
            rd: 1,
            rs1: 0,
            imm: 0
        }
    );
    assert_eq!(
        decode(builders::lbu(2, 3, -4)),
        Instruction::I {
            op: Opcode::Lbu,
            rd: 2,
            rs1: 3,
            imm: -4
        }
    );
}

#[test]
fn decodes_s_type_split_immediate() {
    assert_eq!(
        decode(builders::sw(2, 1, 8)),
        Instruction::S {
            op: Opcode::Sw,
            rs1: 1,
            rs2: 2,
            imm: 8
        }
    );
    assert_eq!(
        decode(builders::sb(7, 6, -33)),
        Instruction::S {
            op: Opcode::Sb,
            rs1: 6,
            rs2: 7,
            imm: -33
        }
    );
}

#[test]
fn decodes_b_type_even_offset() {
    assert_eq!(
        decode(builders::beq(1, 2, -8)),
        Instruction::B {
            op: Opcode::Beq,
            rs1: 1,
            rs2: 2,
            imm: -8
        }
    );
    assert_eq!(
        decode(builders::bgeu(3, 4, 4094)),
        Instruction::B {
            op: Opcode::Bgeu,
            rs1: 3,
            rs2: 4,
            imm: 4094
        }
    );
}

#[test]
fn decodes_u_type_upper_immediate_in_place() {
    assert_eq!(
        decode(builders::lui(5, 0x12345)),
        Instruction::U {
            op: Opcode::Lui,
            rd: 5,
            imm: 0x12345000_u32 as i32
        }
    );
    assert_eq!(
        decode(builders::auipc(6, 0xFFFFF)),
        Instruction::U {
            op: Opcode::Auipc,
            rd: 6,
            imm: 0xFFFFF000_u32 as i32
        }
    );
}

#[test]
fn decodes_jumps() {
    assert_eq!(
        decode(builders::jal(1, -16)),
        Instruction::J {
            op: Opcode::Jal,
            rd: 1,
            imm: -16
        }
    );
    assert_eq!(
        decode(builders::jalr(1, 5, 8)),
        Instruction::I {
            op: Opcode::Jalr,
            rd: 1,
            rs1: 5,
            imm: 8
        }
    );
}

// ══════════════════════════════════════════════════════════
// 2. Undefined encodings
// ══════════════════════════════════════════════════════════

#[test]
fn zero_word_is_invalid() {
    assert_eq!(decode(0), Instruction::Invalid);
}

#[test]
fn unknown_major_opcode_is_invalid() {
    assert_eq!(decode(0x0000_007F), Instruction::Invalid);
    assert_eq!(decode(0xFFFF_FFFF), Instruction::Invalid);
}

#[test]
fn bad_funct_combinations_are_invalid() {
    // R-type with an undefined funct7.
    assert_eq!(
        decode(builders::r_type(0b0110011, 1, 0b000, 2, 3, 0b0000001)),
        Instruction::Invalid
    );
    // R-type ALT funct7 with a funct3 that has no alternate form.
    assert_eq!(
        decode(builders::r_type(0b0110011, 1, 0b110, 2, 3, 0b0100000)),
        Instruction::Invalid
    );
    // Load with an undefined width.
    assert_eq!(
        decode(builders::i_type(0b0000011, 1, 0b011, 2, 0)),
        Instruction::Invalid
    );
    // Store with an undefined width.
    assert_eq!(
        decode(builders::s_type(0b0100011, 0b011, 1, 2, 0)),
        Instruction::Invalid
    );
    // Branch with an undefined condition.
    assert_eq!(
        decode(builders::b_type(0b1100011, 0b010, 1, 2, 0)),
        Instruction::Invalid
    );
}

#[test]
fn invalid_carries_no_fields() {
    let inst = decode(0);
    assert_eq!(inst.opcode(), None);
    assert_eq!(inst.format(), None);
    assert_eq!(inst.rd(), None);
    assert_eq!(inst.rs1(), None);
    assert_eq!(inst.rs2(), None);
    assert_eq!(inst.imm(), 0);
}

// ══════════════════════════════════════════════════════════
// 3. Field-presence by format
// ══════════════════════════════════════════════════════════

#[test]
fn field_presence_follows_format() {
    let r = decode(builders::add(3, 1, 2));
    assert_eq!(r.format(), Some(Format::R));
    assert_eq!((r.rd(), r.rs1(), r.rs2()), (Some(3), Some(1), Some(2)));

    let i = decode(builders::addi(3, 1, 7));
    assert_eq!(i.format(), Some(Format::I));
    assert_eq!((i.rd(), i.rs1(), i.rs2()), (Some(3), Some(1), None));

    let s = decode(builders::sw(2, 1, 0));
    assert_eq!(s.format(), Some(Format::S));
    assert_eq!((s.rd(), s.rs1(), s.rs2()), (None, Some(1), Some(2)));

    let u = decode(builders::lui(3, 1));
    assert_eq!(u.format(), Some(Format::U));
    assert_eq!((u.rd(), u.rs1(), u.rs2()), (Some(3), None, None));

    let j = decode(builders::jal(1, 8));
    assert_eq!(j.format(), Some(Format::J));
    assert_eq!((j.rd(), j.rs1(), j.rs2()), (Some(1), None, None));
}

#[test]
fn control_flow_classification() {
    assert!(decode(builders::beq(1, 2, 8)).is_control_flow());
    assert!(decode(builders::jal(0, 8)).is_control_flow());
    assert!(decode(builders::jalr(0, 1, 0)).is_control_flow());
    assert!(!decode(builders::add(1, 2, 3)).is_control_flow());
    assert!(!decode(builders::lw(1, 2, 0)).is_control_flow());
}

// ══════════════════════════════════════════════════════════
// 4. Round-trip properties
// ══════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn addi_round_trip(rd in 0_u32..32, rs1 in 0_u32..32, imm in -2048_i32..2048) {
        prop_assert_eq!(
            decode(builders::addi(rd, rs1, imm)),
            Instruction::I { op: Opcode::Addi, rd: rd as usize, rs1: rs1 as usize, imm }
        );
    }

    #[test]
    fn store_round_trip(rs1 in 0_u32..32, rs2 in 0_u32..32, imm in -2048_i32..2048) {
        prop_assert_eq!(
            decode(builders::sw(rs2, rs1, imm)),
            Instruction::S { op: Opcode::Sw, rs1: rs1 as usize, rs2: rs2 as usize, imm }
        );
    }

    #[test]
    fn branch_round_trip(rs1 in 0_u32..32, rs2 in 0_u32..32, half in -2048_i32..2048) {
        let imm = half * 2;
        prop_assert_eq!(
            decode(builders::bne(rs1, rs2, imm)),
            Instruction::B { op: Opcode::Bne, rs1: rs1 as usize, rs2: rs2 as usize, imm }
        );
    }

    #[test]
    fn jal_round_trip(rd in 0_u32..32, half in -524_288_i32..524_288) {
        let imm = half * 2;
        prop_assert_eq!(
            decode(builders::jal(rd, imm)),
            Instruction::J { op: Opcode::Jal, rd: rd as usize, imm }
        );
    }

    #[test]
    fn lui_round_trip(rd in 0_u32..32, imm20 in 0_u32..0x10_0000) {
        prop_assert_eq!(
            decode(builders::lui(rd, imm20)),
            Instruction::U { op: Opcode::Lui, rd: rd as usize, imm: (imm20 << 12) as i32 }
        );
    }

    #[test]
    fn decode_is_idempotent(word in any::<u32>()) {
        prop_assert_eq!(decode(word), decode(word));
    }
}
