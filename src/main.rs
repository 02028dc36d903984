//! rot - Main entry point
//!
//! Thin CLI glue: parse arguments, resolve the shift and streams, hand
//! everything to the line pump. All cipher logic lives in the library.

use anyhow::Context;
use log::{debug, error, info};

use rotate::cli::Cli;
use rotate::engine::Shift;
use rotate::pump::{self, OpenMode, PumpConfig};

/// Initialize the logger with appropriate settings
fn init_logger(verbose: bool) {
    use env_logger::Builder;
    use std::io::Write;

    let default_level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(default_level)
        .parse_default_env() // Allows RUST_LOG env var to override
        .init();
}

/// Main application entry point
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    init_logger(cli.verbose);
    debug!("CLI arguments parsed");

    let shift = Shift::normalize(cli.num);
    info!("resolved shift {} ({})", shift.value(), shift.mode());

    let mut config = PumpConfig::new(shift);
    config.verbose = cli.verbose;
    config.table = cli.list;
    // Named outputs append by default; the rotation table truncates so a
    // rerun replaces the previous table. --truncate forces it either way.
    config.open_mode = if cli.truncate || cli.list {
        OpenMode::Truncate
    } else {
        OpenMode::Append
    };

    if let Err(e) = pump::run(cli.input_path(), cli.output.as_deref(), &config) {
        error!("run failed: {}", e);
        return Err(e).context("rotation run failed");
    }

    Ok(())
}
