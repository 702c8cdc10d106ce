//! Unified error types for the uring-probe workspace.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The host C compiler could not be located.
    #[error("C compiler not found: {name}")]
    CompilerNotFound {
        /// Name or path that was searched for.
        name: String,
    },

    /// An I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path (or program) where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The probe did not compile against the host headers.
    ///
    /// This covers both a table entry with no matching macro and missing
    /// kernel headers. `diagnostics` is the compiler's stderr, unmodified.
    #[error("probe failed to compile with {compiler} ({status}):\n{diagnostics}")]
    Compile {
        /// Compiler that was invoked.
        compiler: PathBuf,
        /// Compiler exit status.
        status: ExitStatus,
        /// Compiler stderr.
        diagnostics: String,
    },

    /// The compiled probe exited unsuccessfully.
    #[error("probe exited with {status}: {stderr}")]
    ProbeFailed {
        /// Probe exit status.
        status: ExitStatus,
        /// Probe stderr.
        stderr: String,
    },

    /// A probe output line is not a decimal integer.
    #[error("malformed probe output on line {line}: {message}")]
    MalformedOutput {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// The probe printed a different number of values than the table holds.
    #[error("incomplete probe output: expected {expected} values, got {actual}")]
    Incomplete {
        /// Number of table entries.
        expected: usize,
        /// Number of lines printed.
        actual: usize,
    },

    /// A table entry cannot be probed.
    #[error("invalid table entry {name:?}: {message}")]
    InvalidEntry {
        /// Offending entry name.
        name: String,
        /// Why the entry was rejected.
        message: String,
    },

    /// Two entries declare the same constant name.
    #[error("duplicate declared name: {name}")]
    DuplicateName {
        /// The colliding declared name.
        name: String,
    },

    /// A generated unit could not be read back.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Description of the problem.
        message: String,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ProbeError>;
