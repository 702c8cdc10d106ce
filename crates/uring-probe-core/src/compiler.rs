//! Host C compiler discovery and probe execution.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use uring_probe_common::error::{ProbeError, Result};

/// A C compiler found on the build host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostCompiler {
    path: PathBuf,
}

impl HostCompiler {
    /// Resolves `name` against `PATH` (or checks it directly if it is a path).
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::CompilerNotFound`] if no executable matches.
    pub fn locate(name: &str) -> Result<Self> {
        let path = which::which(name).map_err(|_| ProbeError::CompilerNotFound {
            name: name.to_owned(),
        })?;
        tracing::debug!(compiler = %path.display(), "located host compiler");
        Ok(Self { path })
    }

    /// Absolute path of the compiler executable.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Compiles `source` into the executable `output`.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Compile`] carrying the compiler's stderr if
    /// compilation fails, or [`ProbeError::Io`] if the compiler cannot be
    /// spawned.
    pub fn compile(&self, source: &Path, output: &Path, cflags: &[String]) -> Result<()> {
        tracing::debug!(
            compiler = %self.path.display(),
            source = %source.display(),
            output = %output.display(),
            ?cflags,
            "compiling probe"
        );

        let result = Command::new(&self.path)
            .args(cflags)
            .arg("-o")
            .arg(output)
            .arg(source)
            .output()
            .map_err(|e| ProbeError::Io {
                path: self.path.clone(),
                source: e,
            })?;

        if !result.status.success() {
            return Err(ProbeError::Compile {
                compiler: self.path.clone(),
                status: result.status,
                diagnostics: String::from_utf8_lossy(&result.stderr).into_owned(),
            });
        }
        if !result.stderr.is_empty() {
            tracing::debug!(
                warnings = %String::from_utf8_lossy(&result.stderr),
                "compiler emitted diagnostics"
            );
        }
        Ok(())
    }
}

/// Runs a compiled probe and returns its complete standard output.
///
/// Output of a probe that exits unsuccessfully (including one killed by a
/// signal) is discarded, never returned.
///
/// # Errors
///
/// Returns [`ProbeError::ProbeFailed`] on a non-zero exit,
/// [`ProbeError::MalformedOutput`] if stdout is not UTF-8, or
/// [`ProbeError::Io`] if the probe cannot be spawned.
pub fn run_probe(binary: &Path) -> Result<String> {
    tracing::debug!(probe = %binary.display(), "running probe");

    let Output {
        status,
        stdout,
        stderr,
    } = Command::new(binary)
        .output()
        .map_err(|e| ProbeError::Io {
            path: binary.to_path_buf(),
            source: e,
        })?;

    if !status.success() {
        return Err(ProbeError::ProbeFailed {
            status,
            stderr: String::from_utf8_lossy(&stderr).into_owned(),
        });
    }

    String::from_utf8(stdout).map_err(|e| ProbeError::MalformedOutput {
        line: 0,
        message: format!("probe output is not UTF-8: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_missing_compiler_fails() {
        let err = HostCompiler::locate("uring-probe-no-such-compiler").unwrap_err();
        assert!(
            matches!(err, ProbeError::CompilerNotFound { ref name } if name == "uring-probe-no-such-compiler")
        );
    }

    #[test]
    fn run_probe_reports_missing_binary_as_io() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = run_probe(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, ProbeError::Io { .. }));
    }

    /// Writes an executable shell script without holding a write handle in
    /// this process, so a concurrent fork cannot make the exec fail with
    /// `ETXTBSY`.
    #[cfg(unix)]
    fn write_script(dir: &Path, body: &str) -> Option<PathBuf> {
        let sh = which::which("sh").ok()?;
        let path = dir.join("probe");
        let status = Command::new(sh)
            .arg("-c")
            .arg(r#"printf '#!/bin/sh\n%s\n' "$1" > "$2" && chmod 755 "$2""#)
            .arg("sh")
            .arg(body)
            .arg(&path)
            .status()
            .ok()?;
        status.success().then_some(path)
    }

    #[cfg(unix)]
    #[test]
    fn run_probe_discards_output_of_failed_process() {
        let dir = tempfile::tempdir().expect("tempdir");
        let Some(probe) = write_script(dir.path(), "echo 425; exit 3") else {
            return;
        };

        let err = run_probe(&probe).unwrap_err();
        assert!(matches!(err, ProbeError::ProbeFailed { status, .. } if status.code() == Some(3)));
    }

    #[cfg(unix)]
    #[test]
    fn run_probe_returns_stdout_on_success() {
        let dir = tempfile::tempdir().expect("tempdir");
        let Some(probe) = write_script(dir.path(), "echo 425; echo 426") else {
            return;
        };

        let out = run_probe(&probe).expect("probe should succeed");
        assert_eq!(out, "425\n426\n");
    }
}
