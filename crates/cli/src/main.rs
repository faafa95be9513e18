//! Y86-64 simulator CLI.
//!
//! This binary provides the command line entry points. It performs:
//! 1. **Run:** Load a memory image (file or stdin), execute it to completion, and print
//!    the per-cycle JSON trace to stdout.
//! 2. **Disasm:** Print a linear disassembly listing of a memory image.

use std::io::{self, BufWriter, Write};
use std::process;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::EnvFilter;

use y86sim_core::common::SimError;
use y86sim_core::isa::disasm::listing;
use y86sim_core::sim::loader;
use y86sim_core::{Config, Simulator, SparseMemory, Status};

/// Exit code for host-side failures (I/O, configuration, serialization).
const EXIT_HOST_ERROR: i32 = 2;

/// Exit code when the machine stopped on a fault.
const EXIT_MACHINE_FAULT: i32 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "y86sim",
    author,
    version,
    about = "Y86-64 instruction set simulator",
    long_about = "Execute a Y86-64 memory image one instruction per cycle and print the machine state after every cycle as JSON.\n\nExamples:\n  y86sim run prog.yo > trace.json\n  cat prog.yo | y86sim run --stats\n  y86sim disasm prog.yo"
)]
struct Cli {
    /// Log filter used when `RUST_LOG` is not set (e.g. `info`, `y86sim_core=trace`).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a memory image and print the JSON trace.
    Run {
        /// Memory image to execute; omitted or `-` reads standard input.
        image: Option<String>,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<String>,

        /// Stop after this many cycles.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// Print the trace on a single line.
        #[arg(long)]
        compact: bool,

        /// Log every executed instruction (disassembled) at info level.
        #[arg(long)]
        trace: bool,

        /// Print execution statistics to stderr.
        #[arg(long)]
        stats: bool,
    },

    /// Print a disassembly listing of a memory image.
    Disasm {
        /// Memory image to list; omitted or `-` reads standard input.
        image: Option<String>,
    },
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_image(image: Option<&str>) -> Result<SparseMemory, SimError> {
    match image {
        None | Some("-") => loader::load_image_reader(io::stdin().lock(), "-"),
        Some(path) => loader::load_image_file(path),
    }
}

fn main() {
    let cli = Cli::parse();
    let trace_requested = matches!(cli.command, Commands::Run { trace: true, .. });
    init_logging(if trace_requested && std::env::var_os("RUST_LOG").is_none() {
        "info"
    } else {
        cli.log_level.as_str()
    });

    let result = match cli.command {
        Commands::Run {
            image,
            config,
            max_cycles,
            compact,
            trace,
            stats,
        } => cmd_run(image.as_deref(), config.as_deref(), max_cycles, compact, trace, stats),
        Commands::Disasm { image } => cmd_disasm(image.as_deref()).map(|()| 0),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            error!("{e}");
            eprintln!("[!] FATAL: {e}");
            process::exit(EXIT_HOST_ERROR);
        }
    }
}

/// Runs a memory image to completion and prints the trace.
///
/// Returns the process exit code: 0 when the program halted (or hit the cycle
/// limit), 1 when it stopped on a machine fault.
fn cmd_run(
    image: Option<&str>,
    config_path: Option<&str>,
    max_cycles: Option<u64>,
    compact: bool,
    trace: bool,
    stats: bool,
) -> Result<i32, SimError> {
    let mut config = match config_path {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if max_cycles.is_some() {
        config.general.max_cycles = max_cycles;
    }
    if compact {
        config.trace.indent = 0;
    }
    config.general.trace_instructions |= trace;

    let mem = load_image(image)?;
    let mut sim = Simulator::new(mem, &config);
    let summary = sim.run();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    sim.trace.write_json(&mut out, config.trace.indent)?;
    writeln!(out)
        .and_then(|()| out.flush())
        .map_err(|e| SimError::io("-", e))?;

    if stats {
        eprint!("{}", sim.stats.report());
    }

    match summary.status {
        Status::Halted | Status::Running => Ok(0),
        Status::AddressError | Status::InvalidInstruction => {
            if let Some(fault) = summary.fault {
                eprintln!("[!] Machine fault: {fault}");
            }
            sim.cpu.dump_state();
            Ok(EXIT_MACHINE_FAULT)
        }
    }
}

/// Prints a disassembly listing of every loaded instruction.
fn cmd_disasm(image: Option<&str>) -> Result<(), SimError> {
    let mem = load_image(image)?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in listing(&mem) {
        writeln!(out, "{line}").map_err(|e| SimError::io("-", e))?;
    }
    out.flush().map_err(|e| SimError::io("-", e))
}
