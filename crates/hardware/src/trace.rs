//! Per-instruction pipeline-stage trace recording and serialization.
//!
//! Maintains one row per instruction-memory address, each carrying the
//! disassembled mnemonic and an append-only per-cycle label recording which
//! stage held the instruction that cycle. Recording is purely
//! observational: removing it changes no architectural outcome.
//!
//! Three serializations are provided for the diagnostic outputs: a
//! comma-separated table with a header row, a semicolon-separated variant,
//! and a formatted console table.

use std::fmt::Write as _;

use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;

/// Placeholder for a cycle in which an instruction occupied no stage.
const ABSENT: &str = "-";

/// Pipeline stage label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Instruction fetch.
    If,
    /// Instruction decode.
    Id,
    /// Execute.
    Ex,
    /// Memory access.
    Mem,
    /// Writeback.
    Wb,
}

impl Stage {
    /// Returns the label used in trace output.
    pub const fn label(self) -> &'static str {
        match self {
            Self::If => "IF",
            Self::Id => "ID",
            Self::Ex => "EX",
            Self::Mem => "MEM",
            Self::Wb => "WB",
        }
    }
}

/// Trace row for one instruction address.
#[derive(Debug, Clone)]
pub struct TraceRow {
    /// Byte address of the instruction.
    pub address: u32,
    /// Disassembled mnemonic.
    pub disassembly: String,
    /// Stage label per elapsed cycle; `None` where the instruction held no
    /// stage.
    stages: Vec<Option<Stage>>,
}

impl TraceRow {
    /// Returns the stage the instruction held in the given cycle, if any.
    pub fn stage_at(&self, cycle: u64) -> Option<Stage> {
        self.stages.get(cycle as usize).copied().flatten()
    }

    /// Renders the label for one cycle column.
    fn label_at(&self, cycle: u64) -> &'static str {
        self.stage_at(cycle).map_or(ABSENT, Stage::label)
    }
}

/// Pipeline stage trace for a whole program.
///
/// Rows are created up front, one per program word, so the diagnostic table
/// covers every unique instruction address in order.
#[derive(Debug, Clone)]
pub struct PipelineTrace {
    rows: Vec<TraceRow>,
}

impl PipelineTrace {
    /// Creates a trace with one row per word of the program image.
    pub fn new(program: &[u32]) -> Self {
        let rows = program
            .iter()
            .enumerate()
            .map(|(i, &raw)| TraceRow {
                address: (i * 4) as u32,
                disassembly: disassemble(&decode(raw)),
                stages: Vec::new(),
            })
            .collect();
        Self { rows }
    }

    /// Records that the instruction at `address` held `stage` during
    /// `cycle` (zero-based). Addresses outside the program image are
    /// ignored.
    pub fn record(&mut self, address: u32, cycle: u64, stage: Stage) {
        let Some(row) = self.rows.iter_mut().find(|r| r.address == address) else {
            return;
        };
        let idx = cycle as usize;
        if row.stages.len() <= idx {
            row.stages.resize(idx + 1, None);
        }
        row.stages[idx] = Some(stage);
    }

    /// Returns the trace rows in address order.
    pub fn rows(&self) -> &[TraceRow] {
        &self.rows
    }

    /// Renders the comma-separated table: a header row
    /// `PC,Instruction,Cycle 1..N`, then one row per instruction address.
    pub fn to_csv(&self, cycles: u64) -> String {
        let mut out = String::from("PC,Instruction");
        for c in 1..=cycles {
            let _ = write!(out, ",Cycle {c}");
        }
        out.push('\n');

        for row in &self.rows {
            let _ = write!(out, "{:#x},{}", row.address, row.disassembly);
            for c in 0..cycles {
                let _ = write!(out, ",{}", row.label_at(c));
            }
            out.push('\n');
        }
        out
    }

    /// Renders the semicolon-separated variant: one row per instruction,
    /// `disassembly;label;label;...`, no header.
    pub fn to_semicolon(&self, cycles: u64) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(&row.disassembly);
            for c in 0..cycles {
                let _ = write!(out, ";{}", row.label_at(c));
            }
            out.push('\n');
        }
        out
    }

    /// Renders the formatted console table.
    pub fn render_table(&self, cycles: u64) -> String {
        let mut separator = String::from("+-----------+-----------------+");
        for _ in 0..cycles {
            separator.push_str("-----+");
        }

        let mut out = String::new();
        let _ = writeln!(out, "{separator}");
        out.push_str("| PC        |   Instruction   |");
        for c in 1..=cycles {
            let _ = write!(out, " C{c:>2} |");
        }
        out.push('\n');
        let _ = writeln!(out, "{separator}");

        for row in &self.rows {
            let addr = format!("{:#x}", row.address);
            let _ = write!(out, "| {:<9} | {:<15} |", addr, row.disassembly);
            for c in 0..cycles {
                let _ = write!(out, " {:<3} |", row.label_at(c));
            }
            out.push('\n');
        }
        let _ = writeln!(out, "{separator}");
        out
    }
}
