//! RV32I pipeline simulator CLI.
//!
//! This binary is a thin wrapper around the simulation library. It performs:
//! 1. **Argument parsing:** Program path and cycle count, plus an optional
//!    JSON run-configuration file.
//! 2. **Program loading:** Text image, one hex machine word per line; any
//!    failure exits non-zero before a single cycle executes.
//! 3. **Diagnostics:** After all cycles run, writes the comma- and
//!    semicolon-separated pipeline traces, prints the console trace table,
//!    and prints the statistics summary.

use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rv32pipe_core::sim::loader;
use rv32pipe_core::{Config, Simulator};

/// CSV trace file name for a forwarding-enabled run.
const TRACE_CSV_FORWARDING: &str = "pipeline_trace_forwarding.csv";
/// CSV trace file name for a forwarding-disabled run.
const TRACE_CSV_NO_FORWARDING: &str = "pipeline_trace_no_forwarding.csv";

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    version,
    about = "Cycle-accurate RV32I 5-stage pipeline simulator",
    long_about = "Simulates a program image on a classic 5-stage pipeline for a fixed \
number of clock cycles, then emits per-instruction stage traces.\n\n\
The program image is text: one 32-bit hex machine word per line, optionally \
followed by a mnemonic (ignored). Forwarding and memory size are static run \
configuration, supplied as a JSON file via --config.\n\n\
Examples:\n  sim programs/hazard.txt 20\n  sim programs/hazard.txt 20 --config noforward.json"
)]
struct Cli {
    /// Program image: one 32-bit hex machine word per line.
    program: PathBuf,

    /// Number of clock cycles to simulate.
    cycles: u64,

    /// JSON run configuration overriding the defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = cli.config.map_or_else(Config::default, |path| {
        let text = fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("error: could not read config '{}': {e}", path.display());
            process::exit(1);
        });
        serde_json::from_str(&text).unwrap_or_else(|e| {
            eprintln!("error: invalid config '{}': {e}", path.display());
            process::exit(1);
        })
    });

    let program = loader::load_program(&cli.program).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(1);
    });

    let forwarding = config.pipeline.forwarding;
    println!(
        "Running {} for {} cycles (forwarding {})",
        cli.program.display(),
        cli.cycles,
        if forwarding { "enabled" } else { "disabled" }
    );

    let mut sim = Simulator::new(program, &config);
    sim.run(cli.cycles);

    write_traces(&sim, &cli.program, cli.cycles, forwarding);

    print!("{}", sim.cpu.trace.render_table(cli.cycles));
    sim.cpu.stats.print();
}

/// Writes the comma- and semicolon-separated trace serializations next to
/// the program file.
fn write_traces(sim: &Simulator, program: &Path, cycles: u64, forwarding: bool) {
    let csv_path = if forwarding {
        TRACE_CSV_FORWARDING
    } else {
        TRACE_CSV_NO_FORWARDING
    };
    let txt_path = format!(
        "{}_{}_out.txt",
        program.display(),
        if forwarding { "forward" } else { "noforward" }
    );

    if let Err(e) = fs::write(csv_path, sim.cpu.trace.to_csv(cycles)) {
        eprintln!("error: could not write '{csv_path}': {e}");
        process::exit(1);
    }
    if let Err(e) = fs::write(&txt_path, sim.cpu.trace.to_semicolon(cycles)) {
        eprintln!("error: could not write '{txt_path}': {e}");
        process::exit(1);
    }
}
