//! General-Purpose Register File.
//!
//! This module implements the integer register file. It performs the
//! following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`).
//! 2. **Invariant enforcement:** Register `x0` is hardwired to zero; writes
//!    targeting it are silently dropped.
//! 3. **Debugging:** Provides a utility for dumping the register state.

/// General-purpose register file.
///
/// Contains 32 registers used for integer operations. Register `x0` is
/// hardwired to zero and cannot be modified.
#[derive(Debug, Clone)]
pub struct Gpr {
    regs: [u32; 32],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self { regs: [0; 32] }
    }

    /// Reads a register value.
    ///
    /// Register `x0` always reads 0. Indices outside 0-31 also read 0, so
    /// a format without a source register behaves as reading `x0`.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 {
            0
        } else {
            self.regs.get(idx).copied().unwrap_or(0)
        }
    }

    /// Writes a value to a register.
    ///
    /// Writes targeting `x0` or indices outside 0-31 are dropped.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 && idx < self.regs.len() {
            self.regs[idx] = val;
        }
    }

    /// Dumps the contents of all registers to stdout, in pairs.
    pub fn dump(&self) {
        for i in (0..32).step_by(2) {
            println!(
                "x{:<2}={:#010x} x{:<2}={:#010x}",
                i,
                self.regs[i],
                i + 1,
                self.regs[i + 1]
            );
        }
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}
