//! Memory access (MEM) stage.
//!
//! Performs loads and stores at the address computed in Execute. Width and
//! signedness follow the opcode: LB/LH sign-extend, LBU/LHU zero-extend,
//! LW is used as-is; stores write the low 1/2/4 bytes of the store data.
//! Out-of-bounds accesses are absorbed by the data memory (reads return 0,
//! writes are dropped).

use tracing::trace;

use crate::core::Cpu;
use crate::core::pipeline::latches::MemWbEntry;
use crate::isa::instruction::Opcode;
use crate::trace::Stage;

/// Executes the memory stage.
///
/// # Arguments
///
/// * `cpu` - Mutable reference to the CPU state.
pub fn mem_stage(cpu: &mut Cpu) {
    let Some(ex) = cpu.ex_mem.clone() else {
        cpu.mem_wb = None;
        return;
    };

    cpu.trace.record(ex.pc, cpu.cycle_index(), Stage::Mem);

    let address = ex.alu.value;
    let mut load_data = 0;

    if ex.ctrl.mem_read {
        load_data = match ex.inst.opcode() {
            Some(Opcode::Lb) => cpu.dmem.read(address, 1) as u8 as i8 as i32 as u32,
            Some(Opcode::Lh) => cpu.dmem.read(address, 2) as u16 as i16 as i32 as u32,
            Some(Opcode::Lw) => cpu.dmem.read(address, 4),
            Some(Opcode::Lbu) => cpu.dmem.read(address, 1),
            Some(Opcode::Lhu) => cpu.dmem.read(address, 2),
            _ => 0,
        };
        trace!("MEM pc={:#010x} load [{address:#x}] -> {load_data:#x}", ex.pc);
    }

    if ex.ctrl.mem_write {
        match ex.inst.opcode() {
            Some(Opcode::Sb) => cpu.dmem.write(address, ex.store_data, 1),
            Some(Opcode::Sh) => cpu.dmem.write(address, ex.store_data, 2),
            Some(Opcode::Sw) => cpu.dmem.write(address, ex.store_data, 4),
            _ => {}
        }
        trace!(
            "MEM pc={:#010x} store [{address:#x}] <- {:#x}",
            ex.pc, ex.store_data
        );
    }

    cpu.mem_wb = Some(MemWbEntry {
        pc: ex.pc,
        inst: ex.inst,
        alu: ex.alu.value,
        load_data,
        ctrl: ex.ctrl,
    });
}
