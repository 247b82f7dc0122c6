//! Canopy CLI entry point.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use canopy_runtime::{CliCommand, Demo, DemoConfig};
use canopy_store::{RecordStore, StoreConfig};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match &e.context {
                Some(context) => eprintln!("\x1b[31mError {context}: {e}\x1b[0m"),
                None => eprintln!("\x1b[31mError: {e}\x1b[0m"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: impl Iterator<Item = String>) -> canopy_foundation::Result<()> {
    let command =
        CliCommand::parse(args).map_err(|e| e.with_context("while parsing arguments"))?;
    let (config, verbose) = match command {
        CliCommand::Help => {
            print_help();
            return Ok(());
        }
        CliCommand::Version => {
            println!("canopy {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        CliCommand::Run { config, verbose } => (config, verbose),
    };

    init_logging(verbose);

    let store = RecordStore::with_config(&StoreConfig::new().with_initial_capacity(
        canopy_runtime::SPECIES.len(),
    ));
    let demo = Demo::new(config, store.into())?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    demo.run(&mut out)
        .and_then(|_| {
            writeln!(out)?;
            out.flush()?;
            Ok(())
        })
        .map_err(|e| e.with_context("while running the forest demo"))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_help() {
    let defaults = DemoConfig::default();
    println!(
        "\x1b[1mCanopy\x1b[0m - Flyweight forest demo

\x1b[1mUSAGE:\x1b[0m
    canopy [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -n, --trees N      Number of trees to plant (default {trees})
    -s, --seed S       Seed for species and placement (default {seed})
    -w, --width W      Field width; coordinates are 0..W (default {width})
    -q, --quiet        Skip drawing, print statistics only
    -v, --verbose      Log at debug level (RUST_LOG overrides)

\x1b[1mEXAMPLES:\x1b[0m
    canopy                   Plant and draw 1000 trees
    canopy -q -n 100000      Plant 100000 trees, print statistics
    canopy -v -n 10 -s 7     Plant 10 trees with seed 7, logging record creation",
        trees = defaults.tree_count,
        seed = defaults.seed,
        width = defaults.field_width,
    );
}
