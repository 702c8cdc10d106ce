//! # uring-probe
//!
//! Prints the io_uring syscall numbers and block-device ioctl codes defined
//! by this host's kernel headers as Rust constant declarations.
//!
//! The declarations go to stdout and nothing else does; diagnostics go to
//! stderr. Any failure exits non-zero with stdout left empty.

mod commands;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::execute(&cli)
}
