//! Memory model tests.

use rv32pipe_core::mem::{DataMemory, InstructionMemory};

// ══════════════════════════════════════════════════════════
// Data memory
// ══════════════════════════════════════════════════════════

#[test]
fn little_endian_round_trip() {
    let mut mem = DataMemory::new(64);
    mem.write(0, 0x1234_5678, 4);

    assert_eq!(mem.read(0, 4), 0x1234_5678);
    assert_eq!(mem.read(0, 1), 0x78);
    assert_eq!(mem.read(1, 1), 0x56);
    assert_eq!(mem.read(0, 2), 0x5678);
    assert_eq!(mem.read(2, 2), 0x1234);
}

#[test]
fn narrow_writes_keep_neighbors() {
    let mut mem = DataMemory::new(64);
    mem.write(0, 0xFFFF_FFFF, 4);
    mem.write(1, 0, 1);
    assert_eq!(mem.read(0, 4), 0xFFFF_00FF);
}

#[test]
fn out_of_bounds_read_returns_zero() {
    let mem = DataMemory::new(16);
    assert_eq!(mem.read(16, 1), 0);
    assert_eq!(mem.read(1000, 4), 0);
    assert_eq!(mem.read(u32::MAX, 4), 0, "no wrap-around at the address limit");
}

#[test]
fn straddling_access_is_fully_out_of_bounds() {
    let mut mem = DataMemory::new(16);
    mem.write(12, 0xAABB_CCDD, 4);
    assert_eq!(mem.read(14, 4), 0, "access must lie fully within bounds");
    mem.write(14, 0x1111_1111, 4);
    assert_eq!(mem.read(12, 4), 0xAABB_CCDD, "straddling write dropped");
}

#[test]
fn out_of_bounds_write_has_no_effect() {
    let mut mem = DataMemory::new(16);
    mem.write(64, 0xFF, 1);
    for addr in 0..16 {
        assert_eq!(mem.read(addr, 1), 0);
    }
}

// ══════════════════════════════════════════════════════════
// Instruction memory
// ══════════════════════════════════════════════════════════

#[test]
fn fetch_indexes_by_word() {
    let imem = InstructionMemory::new(vec![0x11, 0x22, 0x33]);
    assert_eq!(imem.fetch(0), 0x11);
    assert_eq!(imem.fetch(4), 0x22);
    assert_eq!(imem.fetch(8), 0x33);
}

#[test]
fn fetch_beyond_end_returns_zero_word() {
    let imem = InstructionMemory::new(vec![0x11]);
    assert_eq!(imem.fetch(4), 0);
    assert_eq!(imem.fetch(0xFFFF_FFF0), 0);
}

#[test]
fn contains_tracks_program_extent() {
    let imem = InstructionMemory::new(vec![0x11, 0x22]);
    assert!(imem.contains(0));
    assert!(imem.contains(4));
    assert!(!imem.contains(8));
}
