//! Prober configuration model.

use crate::types::LiteralBase;

/// Settings for one prober run.
///
/// The `uring-probe` binary always uses [`ProbeConfig::default`]; build
/// scripts driving the library may override individual fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Compiler name or path, resolved against `PATH` when relative.
    pub compiler: String,
    /// Headers included by the probe, in order.
    pub headers: Vec<String>,
    /// Extra flags passed to the compiler before the source file.
    pub cflags: Vec<String>,
    /// Base used for every literal in the generated unit.
    pub literal_base: LiteralBase,
    /// Rust type named in every generated declaration.
    pub integer_type: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            compiler: crate::constants::DEFAULT_COMPILER.to_owned(),
            headers: crate::constants::DEFAULT_HEADERS
                .iter()
                .map(|h| (*h).to_owned())
                .collect(),
            cflags: Vec::new(),
            literal_base: LiteralBase::Hex,
            integer_type: crate::constants::DEFAULT_INTEGER_TYPE.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_commits_to_hex() {
        assert_eq!(ProbeConfig::default().literal_base, LiteralBase::Hex);
    }

    #[test]
    fn default_headers_cover_syscalls_and_block_ioctls() {
        let config = ProbeConfig::default();
        assert!(config.headers.iter().any(|h| h == "sys/syscall.h"));
        assert!(config.headers.iter().any(|h| h == "linux/fs.h"));
        assert_eq!(config.compiler, "cc");
        assert!(config.cflags.is_empty());
    }
}
