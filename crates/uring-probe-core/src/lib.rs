//! # uring-probe-core
//!
//! Discovers the numeric values of io_uring syscalls and block-device
//! ioctls from the kernel headers installed on the build host, and renders
//! them as Rust constant declarations.
//!
//! Handles:
//! - **Table**: The fixed, ordered list of entries to resolve.
//! - **Source**: Generation of the C probe for a table.
//! - **Compiler**: Locating the host compiler, building and running the probe.
//! - **Prober**: The end-to-end pipeline and decoding of probe output.
//! - **Render**: Formatting resolved values as declarations.
//! - **Artifact**: Reading a generated unit back.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod artifact;
pub mod compiler;
pub mod prober;
pub mod render;
pub mod source;
pub mod table;

pub use prober::{GeneratedUnit, Prober, generate};
