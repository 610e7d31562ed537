//! Simulation statistics collection and reporting.
//!
//! This module tracks the counters of a simulation run. It provides:
//! 1. **Cycle and retirement:** Total cycles and instructions retired, with
//!    derived IPC/CPI.
//! 2. **Instruction mix:** Counts by category (ALU, load, store,
//!    branch/jump).
//! 3. **Hazards:** Data-stall cycles, redirect flushes, and the diagnostic
//!    fetch-hazard count.
//!
//! All counters are explicit fields of the CPU with a reset-at-start
//! lifecycle; nothing here is global state.

/// Statistics counters for one simulation run.
#[derive(Debug, Clone, Default)]
pub struct SimStats {
    /// Total clock cycles elapsed.
    pub cycles: u64,
    /// Instructions retired by the writeback stage. Invalid (no-op) words
    /// are never counted.
    pub instructions_retired: u64,

    /// ALU (non-load/store/control-flow) instructions retired.
    pub inst_alu: u64,
    /// Load instructions retired.
    pub inst_load: u64,
    /// Store instructions retired.
    pub inst_store: u64,
    /// Branch and jump instructions retired.
    pub inst_branch: u64,

    /// Bubbles injected by the decode-stage hazard checks.
    pub stalls_data: u64,
    /// Wrong-path fetches discarded after a taken branch or jump.
    pub flushes: u64,
    /// Diagnostic count of fetch-stage hazard verdicts for just-fetched
    /// control-flow instructions; does not gate the pipeline.
    pub fetch_hazards: u64,
}

impl SimStats {
    /// Prints a statistics summary to stdout.
    pub fn print(&self) {
        let cyc = if self.cycles == 0 { 1 } else { self.cycles };
        let ipc = self.instructions_retired as f64 / cyc as f64;

        println!("==========================================================");
        println!("PIPELINE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("sim_cycles               {}", self.cycles);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_ipc                  {ipc:.4}");
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  op.alu                 {}", self.inst_alu);
        println!("  op.load                {}", self.inst_load);
        println!("  op.store               {}", self.inst_store);
        println!("  op.branch              {}", self.inst_branch);
        println!("----------------------------------------------------------");
        println!("HAZARDS");
        println!("  stalls.data            {}", self.stalls_data);
        println!("  flushes                {}", self.flushes);
        println!("  fetch_hazards          {}", self.fetch_hazards);
        println!("==========================================================");
    }
}
