//! Arithmetic Logic Unit (ALU).
//!
//! Implements the integer operations used in the Execute stage: arithmetic,
//! bitwise logic, shifts (shift amount masked to 5 bits), signed/unsigned
//! comparisons, the branch-condition comparisons (0/1 results), and the
//! special value-producing cases of the jump and upper-immediate
//! instructions.

use crate::core::pipeline::signals::AluOp;

/// Number of low bits of the second operand used as a shift amount.
const SHIFT_AMOUNT_MASK: u32 = 0x1F;

/// Result of an ALU operation, with derived condition flags.
///
/// Transient per-cycle value; it survives only as the copy latched into the
/// EX/MEM pipeline register.
#[derive(Clone, Copy, Debug, Default)]
pub struct AluResult {
    /// The 32-bit computation result.
    pub value: u32,
    /// Result is zero.
    pub zero: bool,
    /// Result is negative when interpreted as signed.
    pub negative: bool,
}

/// Arithmetic Logic Unit for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation to perform.
    /// * `a`  - First operand (the rs1 value, possibly forwarded).
    /// * `b`  - Second operand (the rs2 value or the immediate; also the
    ///   shift amount for shifts).
    /// * `pc` - Program counter of the instruction, used by the link-address
    ///   and PC-relative operations.
    ///
    /// # Examples
    ///
    /// ```
    /// use rv32pipe_core::core::units::alu::Alu;
    /// use rv32pipe_core::core::pipeline::signals::AluOp;
    ///
    /// let r = Alu::execute(AluOp::Add, 42, 8, 0);
    /// assert_eq!(r.value, 50);
    ///
    /// // Signed comparison: -5 < 10.
    /// let r = Alu::execute(AluOp::Slt, -5_i32 as u32, 10, 0);
    /// assert_eq!(r.value, 1);
    ///
    /// // Link address is PC + 4 regardless of operands.
    /// let r = Alu::execute(AluOp::LinkPc, 0, 0, 0x100);
    /// assert_eq!(r.value, 0x104);
    /// ```
    pub fn execute(op: AluOp, a: u32, b: u32, pc: u32) -> AluResult {
        let shamt = b & SHIFT_AMOUNT_MASK;
        let value = match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::Sll => a.wrapping_shl(shamt),
            AluOp::Slt => u32::from((a as i32) < (b as i32)),
            AluOp::Sltu => u32::from(a < b),
            AluOp::Xor => a ^ b,
            AluOp::Srl => a.wrapping_shr(shamt),
            AluOp::Sra => ((a as i32).wrapping_shr(shamt)) as u32,
            AluOp::Or => a | b,
            AluOp::And => a & b,
            AluOp::CmpEq => u32::from(a == b),
            AluOp::CmpNe => u32::from(a != b),
            AluOp::CmpLt => u32::from((a as i32) < (b as i32)),
            AluOp::CmpGe => u32::from((a as i32) >= (b as i32)),
            AluOp::CmpLtu => u32::from(a < b),
            AluOp::CmpGeu => u32::from(a >= b),
            AluOp::LinkPc => pc.wrapping_add(4),
            AluOp::CopyImm => b,
            AluOp::AddPc => pc.wrapping_add(b),
        };

        AluResult {
            value,
            zero: value == 0,
            negative: (value as i32) < 0,
        }
    }
}
