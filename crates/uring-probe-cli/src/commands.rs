//! Command-line surface and the single generate action.

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use uring_probe_common::config::ProbeConfig;
use uring_probe_common::constants::BIN_NAME;
use uring_probe_core::Prober;
use uring_probe_core::table::IO_URING_TABLE;

/// Print io_uring syscall and ioctl numbers from the host kernel headers
/// as Rust constants.
///
/// Takes no options. Capture stdout as the generated source file and
/// treat a non-zero exit as a failed generation.
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version)]
pub struct Cli {}

/// Probes the host and writes the generated unit to stdout.
///
/// The unit is rendered in full before anything is written.
///
/// # Errors
///
/// Returns an error if probing fails or stdout cannot be written.
pub fn execute(_cli: &Cli) -> anyhow::Result<()> {
    let unit = Prober::new(ProbeConfig::default())
        .run(IO_URING_TABLE)
        .context("failed to probe host kernel headers")?;
    let text = unit.render();

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write generated constants")?;

    tracing::info!(constants = unit.constants().len(), "wrote generated unit");
    Ok(())
}
