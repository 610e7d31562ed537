//! Simulation run helpers.

use rv32pipe_core::{Config, Simulator};

/// Returns a default configuration with forwarding set as given.
pub fn config(forwarding: bool) -> Config {
    let mut config = Config::default();
    config.pipeline.forwarding = forwarding;
    config
}

/// Builds a simulator around a word list without running it.
pub fn simulator(words: &[u32], forwarding: bool) -> Simulator {
    Simulator::new(words.to_vec(), &config(forwarding))
}

/// Runs a program for a fixed number of cycles.
pub fn run_program(words: &[u32], cycles: u64, forwarding: bool) -> Simulator {
    let mut sim = simulator(words, forwarding);
    sim.run(cycles);
    sim
}

/// Ticks a simulator until `retired` instructions have completed, up to
/// `max_cycles`. Returns the elapsed cycle count.
pub fn run_until_retired(sim: &mut Simulator, retired: u64, max_cycles: u64) -> u64 {
    let mut cycles = 0;
    while sim.cpu.stats.instructions_retired < retired && cycles < max_cycles {
        sim.tick();
        cycles += 1;
    }
    assert!(
        sim.cpu.stats.instructions_retired >= retired,
        "program did not retire {retired} instructions within {max_cycles} cycles"
    );
    cycles
}
