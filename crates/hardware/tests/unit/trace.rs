//! Trace recorder tests.
//!
//! The recorder is diagnostic-only; these tests pin down the three
//! serializations and the stage labels produced by straight-line and
//! stalled runs.

use pretty_assertions::assert_eq;

use rv32pipe_core::trace::{PipelineTrace, Stage};

use crate::common::builders;
use crate::common::harness::run_program;

#[test]
fn straight_line_run_walks_the_five_stages() {
    let sim = run_program(&[builders::addi(1, 0, 5)], 5, true);
    let csv = sim.cpu.trace.to_csv(5);

    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("PC,Instruction,Cycle 1,Cycle 2,Cycle 3,Cycle 4,Cycle 5")
    );
    assert_eq!(lines.next(), Some("0x0,addi x1,x0,5,IF,ID,EX,MEM,WB"));
    assert_eq!(lines.next(), None);
}

#[test]
fn stalled_instruction_repeats_its_decode_label() {
    // Load-use pair: the dependent add sits in decode for two cycles.
    let program = vec![builders::lw(1, 0, 0), builders::add(2, 1, 1)];
    let sim = run_program(&program, 7, true);
    let csv = sim.cpu.trace.to_csv(7);

    let mut lines = csv.lines().skip(1);
    assert_eq!(
        lines.next(),
        Some("0x0,lw x1,0(x0),IF,ID,EX,MEM,WB,-,-")
    );
    assert_eq!(
        lines.next(),
        Some("0x4,add x2,x1,x1,-,IF,ID,ID,EX,MEM,WB")
    );
}

#[test]
fn semicolon_serialization_has_no_header_or_addresses() {
    let sim = run_program(&[builders::addi(1, 0, 5)], 5, true);
    assert_eq!(
        sim.cpu.trace.to_semicolon(5),
        "addi x1,x0,5;IF;ID;EX;MEM;WB\n"
    );
}

#[test]
fn console_table_renders_every_program_row() {
    let program = vec![builders::addi(1, 0, 5), builders::addi(2, 0, 6)];
    let sim = run_program(&program, 6, true);
    let table = sim.cpu.trace.render_table(6);

    assert!(table.contains("| PC        |   Instruction   |"));
    assert!(table.contains("addi x1,x0,5"));
    assert!(table.contains("addi x2,x0,6"));
    assert!(table.contains(" C 1 |"));
    assert!(table.starts_with("+-----------+-----------------+"));
}

#[test]
fn recording_unknown_addresses_is_ignored() {
    let mut trace = PipelineTrace::new(&[builders::addi(1, 0, 5)]);
    trace.record(0x100, 0, Stage::If);
    assert_eq!(trace.rows().len(), 1);
    assert_eq!(trace.rows()[0].stage_at(0), None);
}

#[test]
fn absent_cycles_render_as_dashes() {
    let mut trace = PipelineTrace::new(&[builders::addi(1, 0, 5)]);
    trace.record(0, 2, Stage::Ex);
    assert_eq!(
        trace.to_csv(4).lines().nth(1),
        Some("0x0,addi x1,x0,5,-,-,EX,-")
    );
}
