//! # uring-probe-common
//!
//! Shared types, error definitions, configuration model, and constants
//! used across the uring-probe workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
