//! CPU state container.
//!
//! Owns the architectural state (PC, register file, memories), the four
//! pipeline latches, the run configuration, and the per-run bookkeeping
//! (statistics, stage trace). The stage functions in
//! [`crate::core::pipeline::stages`] mutate this state; the driver in
//! [`crate::core::pipeline::engine`] sequences them.

use crate::config::Config;
use crate::core::arch::Gpr;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, IfIdEntry, MemWbEntry};
use crate::mem::{DataMemory, InstructionMemory};
use crate::stats::SimStats;
use crate::trace::PipelineTrace;

/// CPU state for the five-stage pipeline simulator.
#[derive(Debug)]
pub struct Cpu {
    /// Program counter of the next instruction to fetch.
    pub pc: u32,
    /// General-purpose register file.
    pub regs: Gpr,
    /// Instruction memory (the loaded program image).
    pub imem: InstructionMemory,
    /// Byte-addressable data memory.
    pub dmem: DataMemory,

    /// IF/ID latch; `None` is a bubble.
    pub if_id: Option<IfIdEntry>,
    /// ID/EX latch; `None` is a bubble.
    pub id_ex: Option<IdExEntry>,
    /// EX/MEM latch; `None` is a bubble.
    pub ex_mem: Option<ExMemEntry>,
    /// MEM/WB latch; `None` is a bubble.
    pub mem_wb: Option<MemWbEntry>,
    /// The MEM/WB entry consumed by Writeback this cycle: the architectural
    /// "MEM/WB register as of cycle start" that Execute-stage forwarding
    /// reads after Memory has already overwritten `mem_wb`.
    pub wb_latch: Option<MemWbEntry>,

    /// Whether operand forwarding is enabled (static run configuration).
    pub forwarding: bool,
    /// Initial program counter, restored by [`Cpu::reset`].
    start_pc: u32,

    /// Per-run statistics counters.
    pub stats: SimStats,
    /// Per-instruction stage occupancy trace.
    pub trace: PipelineTrace,
}

impl Cpu {
    /// Creates a CPU with the given program image and configuration.
    pub fn new(program: Vec<u32>, config: &Config) -> Self {
        let trace = PipelineTrace::new(&program);
        Self {
            pc: config.general.start_pc,
            regs: Gpr::new(),
            imem: InstructionMemory::new(program),
            dmem: DataMemory::new(config.memory.data_bytes),
            if_id: None,
            id_ex: None,
            ex_mem: None,
            mem_wb: None,
            wb_latch: None,
            forwarding: config.pipeline.forwarding,
            start_pc: config.general.start_pc,
            stats: SimStats::default(),
            trace,
        }
    }

    /// Resets the pipeline to its start-of-run state: PC, latches, counters,
    /// and the stage trace. Register-file and data-memory contents are left
    /// in place so pre-loaded data survives.
    pub fn reset(&mut self) {
        self.pc = self.start_pc;
        self.if_id = None;
        self.id_ex = None;
        self.ex_mem = None;
        self.mem_wb = None;
        self.wb_latch = None;
        self.stats = SimStats::default();
        self.trace = PipelineTrace::new(self.imem.words());
    }

    /// Returns the zero-based index of the cycle currently in progress, used
    /// as the trace column. Only meaningful while a cycle is being clocked.
    pub const fn cycle_index(&self) -> u64 {
        self.stats.cycles.saturating_sub(1)
    }
}
