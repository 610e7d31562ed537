//! End-to-end program scenarios.
//!
//! Whole-pipeline runs checking architectural results, retirement counts,
//! and stall behavior under both hazard policies.

use pretty_assertions::assert_eq;

use crate::common::builders;
use crate::common::harness::{run_program, run_until_retired, simulator};

// ══════════════════════════════════════════════════════════
// 1. Straight-line arithmetic
// ══════════════════════════════════════════════════════════

#[test]
fn basic_sequence_with_forwarding() {
    // addi x1, x0, 5 ; addi x2, x0, 10 ; add x3, x1, x2
    let program = vec![
        builders::addi(1, 0, 5),
        builders::addi(2, 0, 10),
        builders::add(3, 1, 2),
    ];
    let sim = run_program(&program, 8, true);

    assert_eq!(sim.cpu.regs.read(1), 5);
    assert_eq!(sim.cpu.regs.read(2), 10);
    assert_eq!(sim.cpu.regs.read(3), 15);
    assert_eq!(sim.cpu.stats.instructions_retired, 3);
}

#[test]
fn basic_sequence_without_forwarding() {
    let program = vec![
        builders::addi(1, 0, 5),
        builders::addi(2, 0, 10),
        builders::add(3, 1, 2),
    ];
    let sim = run_program(&program, 12, false);

    assert_eq!(sim.cpu.regs.read(3), 15);
    assert_eq!(sim.cpu.stats.instructions_retired, 3);
    assert!(sim.cpu.stats.stalls_data > 0, "RAW pair must stall without forwarding");
}

#[test]
fn running_past_program_end_retires_nothing_extra() {
    let program = vec![builders::addi(1, 0, 5)];
    let sim = run_program(&program, 20, true);

    // Fetches beyond the image return the zero word, which drains through
    // the pipeline as an invalid no-op and is never retired.
    assert_eq!(sim.cpu.regs.read(1), 5);
    assert_eq!(sim.cpu.stats.instructions_retired, 1);
}

#[test]
fn register_zero_writes_are_dropped() {
    // addi x0, x0, 5 ; add x1, x0, x0
    let program = vec![builders::addi(0, 0, 5), builders::add(1, 0, 0)];
    let sim = run_program(&program, 10, true);

    assert_eq!(sim.cpu.regs.read(0), 0);
    assert_eq!(sim.cpu.regs.read(1), 0);
}

// ══════════════════════════════════════════════════════════
// 2. Load-use hazard
// ══════════════════════════════════════════════════════════

/// lw x1, 0(x0) ; add x2, x1, x1, over memory pre-loaded with 7 at 0.
fn load_use_program() -> Vec<u32> {
    vec![builders::lw(1, 0, 0), builders::add(2, 1, 1)]
}

#[test]
fn load_use_incurs_exactly_one_stall_with_forwarding() {
    let mut sim = simulator(&load_use_program(), true);
    sim.cpu.dmem.write(0, 7, 4);
    let cycles = run_until_retired(&mut sim, 2, 32);

    assert_eq!(sim.cpu.regs.read(2), 14);
    assert_eq!(sim.cpu.stats.stalls_data, 1, "exactly one load-use bubble");
    assert_eq!(cycles, 7);
}

#[test]
fn load_use_stalls_more_without_forwarding() {
    let mut sim = simulator(&load_use_program(), false);
    sim.cpu.dmem.write(0, 7, 4);
    let cycles = run_until_retired(&mut sim, 2, 32);

    assert_eq!(sim.cpu.regs.read(2), 14, "same architectural result");
    assert!(sim.cpu.stats.stalls_data > 1);
    assert!(cycles > 7, "no-forwarding run takes strictly longer");
}

// ══════════════════════════════════════════════════════════
// 3. Memory width and sign semantics
// ══════════════════════════════════════════════════════════

#[test]
fn load_width_and_sign_extension() {
    // lb x1, 0(x0) ; lbu x2, 0(x0) ; lh x3, 4(x0) ; lhu x4, 4(x0)
    let program = vec![
        builders::lb(1, 0, 0),
        builders::lbu(2, 0, 0),
        builders::lh(3, 0, 4),
        builders::lhu(4, 0, 4),
    ];
    let mut sim = simulator(&program, true);
    sim.cpu.dmem.write(0, 0xFF, 1);
    sim.cpu.dmem.write(4, 0xFFFF, 2);
    sim.run(12);

    assert_eq!(sim.cpu.regs.read(1) as i32, -1, "LB sign-extends");
    assert_eq!(sim.cpu.regs.read(2), 255, "LBU zero-extends");
    assert_eq!(sim.cpu.regs.read(3) as i32, -1, "LH sign-extends");
    assert_eq!(sim.cpu.regs.read(4), 0xFFFF, "LHU zero-extends");
}

#[test]
fn store_data_is_forwarded() {
    // addi x1, x0, 42 ; sw x1, 0(x0) ; lw x2, 0(x0)
    let program = vec![
        builders::addi(1, 0, 42),
        builders::sw(1, 0, 0),
        builders::lw(2, 0, 0),
    ];

    for forwarding in [true, false] {
        let sim = run_program(&program, 20, forwarding);
        assert_eq!(sim.cpu.dmem.read(0, 4), 42);
        assert_eq!(sim.cpu.regs.read(2), 42);
    }
}

// ══════════════════════════════════════════════════════════
// 4. Forwarding never changes architectural results
// ══════════════════════════════════════════════════════════

/// A program mixing ALU chains, memory traffic, and a taken branch.
fn mixed_program() -> Vec<u32> {
    vec![
        builders::addi(1, 0, 5),   // x1 = 5
        builders::addi(2, 0, 10),  // x2 = 10
        builders::add(3, 1, 2),    // x3 = 15
        builders::sw(3, 0, 0),     // [0] = 15
        builders::lw(4, 0, 0),     // x4 = 15
        builders::sub(5, 4, 1),    // x5 = 10
        builders::xor(6, 5, 2),    // x6 = 0
        builders::or(7, 6, 1),     // x7 = 5
        builders::and(8, 7, 3),    // x8 = 5
        builders::slt(9, 1, 2),    // x9 = 1
        builders::sltu(10, 2, 1),  // x10 = 0
        builders::srai(11, 1, 1),  // x11 = 2
        builders::beq(6, 0, 8),    // taken: x6 == 0
        builders::addi(12, 0, 99), // skipped
        builders::addi(13, 0, 7),  // x13 = 7
    ]
}

#[test]
fn forwarding_preserves_architectural_state_and_saves_cycles() {
    let retired = 14; // everything except the skipped instruction

    let mut fwd = simulator(&mixed_program(), true);
    let fwd_cycles = run_until_retired(&mut fwd, retired, 128);

    let mut nofwd = simulator(&mixed_program(), false);
    let nofwd_cycles = run_until_retired(&mut nofwd, retired, 128);

    for reg in 0..32 {
        assert_eq!(
            fwd.cpu.regs.read(reg),
            nofwd.cpu.regs.read(reg),
            "x{reg} differs between hazard policies"
        );
    }
    assert_eq!(fwd.cpu.dmem.read(0, 4), nofwd.cpu.dmem.read(0, 4));
    assert_eq!(fwd.cpu.regs.read(12), 0, "branch skipped its wrong path");
    assert_eq!(fwd.cpu.regs.read(13), 7);

    assert!(
        fwd_cycles <= nofwd_cycles,
        "forwarding must not be slower ({fwd_cycles} vs {nofwd_cycles})"
    );
    assert!(
        fwd.cpu.stats.stalls_data < nofwd.cpu.stats.stalls_data,
        "forwarding must stall less"
    );
}
