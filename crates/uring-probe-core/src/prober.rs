//! The end-to-end probe pipeline.
//!
//! 1. Validate the table.
//! 2. Locate the host compiler.
//! 3. Write the probe into a scratch directory and compile it.
//! 4. Run it and decode one value per table entry.
//!
//! The scratch directory is removed when the run returns, whatever the
//! outcome.

use uring_probe_common::config::ProbeConfig;
use uring_probe_common::constants::{APP_NAME, PROBE_BINARY_FILE, PROBE_SOURCE_FILE};
use uring_probe_common::error::{ProbeError, Result};
use uring_probe_common::types::{LiteralBase, ProbeEntry, ResolvedConstant};

use crate::compiler::{HostCompiler, run_probe};
use crate::render::render_unit;
use crate::source::render_probe_source;
use crate::table::{IO_URING_TABLE, validate};

/// Constants resolved in one run, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    constants: Vec<ResolvedConstant>,
    literal_base: LiteralBase,
    integer_type: String,
}

impl GeneratedUnit {
    /// Resolved constants, in table order.
    #[must_use]
    pub fn constants(&self) -> &[ResolvedConstant] {
        &self.constants
    }

    /// Looks up a constant by its declared name.
    #[must_use]
    pub fn get(&self, declared_name: &str) -> Option<i64> {
        self.constants
            .iter()
            .find(|c| c.entry.declared_name() == declared_name)
            .map(|c| c.value)
    }

    /// The generated source unit.
    #[must_use]
    pub fn render(&self) -> String {
        render_unit(&self.constants, self.literal_base, &self.integer_type)
    }
}

/// Runs probes against the host headers.
#[derive(Debug, Clone, Default)]
pub struct Prober {
    config: ProbeConfig,
}

impl Prober {
    /// Creates a prober with the given configuration.
    #[must_use]
    pub const fn new(config: ProbeConfig) -> Self {
        Self { config }
    }

    /// Resolves every entry of `table` against the host headers.
    ///
    /// The probe is built in a `uring-probe-*` directory under the system
    /// temporary directory, removed when this returns. A process killed
    /// mid-run (e.g. by the build system) skips that cleanup and leaves the
    /// directory behind.
    ///
    /// # Errors
    ///
    /// Fails if the table is invalid, no compiler is available, the probe
    /// does not compile (an entry has no macro, or headers are missing),
    /// the probe exits unsuccessfully, or its output does not cover the
    /// table exactly.
    pub fn run(&self, table: &[ProbeEntry]) -> Result<GeneratedUnit> {
        tracing::info!(entries = table.len(), "probing host kernel headers");
        validate(table)?;

        let compiler = HostCompiler::locate(&self.config.compiler)?;
        let scratch = tempfile::Builder::new()
            .prefix(&format!("{APP_NAME}-"))
            .tempdir()
            .map_err(|e| ProbeError::Io {
                path: std::env::temp_dir(),
                source: e,
            })?;

        let source_path = scratch.path().join(PROBE_SOURCE_FILE);
        let binary_path = scratch.path().join(PROBE_BINARY_FILE);
        let source = render_probe_source(&self.config.headers, table);
        std::fs::write(&source_path, source).map_err(|e| ProbeError::Io {
            path: source_path.clone(),
            source: e,
        })?;

        compiler.compile(&source_path, &binary_path, &self.config.cflags)?;
        let stdout = run_probe(&binary_path)?;
        let constants = decode_output(&stdout, table)?;

        tracing::info!(entries = constants.len(), "resolved all table entries");
        Ok(GeneratedUnit {
            constants,
            literal_base: self.config.literal_base,
            integer_type: self.config.integer_type.clone(),
        })
    }
}

/// Pairs each line of probe output with its table entry.
///
/// # Errors
///
/// Returns [`ProbeError::Incomplete`] if the number of lines differs from
/// the table length, and [`ProbeError::MalformedOutput`] if a line is not a
/// decimal `i64`.
pub fn decode_output(stdout: &str, table: &[ProbeEntry]) -> Result<Vec<ResolvedConstant>> {
    let lines: Vec<&str> = stdout.lines().collect();
    if lines.len() != table.len() {
        return Err(ProbeError::Incomplete {
            expected: table.len(),
            actual: lines.len(),
        });
    }

    table
        .iter()
        .zip(lines)
        .enumerate()
        .map(|(idx, (entry, line))| -> Result<ResolvedConstant> {
            let value = line
                .trim()
                .parse::<i64>()
                .map_err(|e| ProbeError::MalformedOutput {
                    line: idx + 1,
                    message: format!("{line:?} for {}: {e}", entry.declared_name()),
                })?;
            tracing::debug!(name = %entry.declared_name(), kind = %entry.kind, value, "resolved");
            Ok(ResolvedConstant {
                entry: *entry,
                value,
            })
        })
        .collect()
}

/// Probes [`IO_URING_TABLE`] and returns the rendered unit.
///
/// # Errors
///
/// See [`Prober::run`].
pub fn generate(config: ProbeConfig) -> Result<String> {
    Ok(Prober::new(config).run(IO_URING_TABLE)?.render())
}
