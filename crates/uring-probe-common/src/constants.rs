//! Naming prefixes, default headers, and file names.

/// Prefix of every declared syscall constant.
pub const SYSCALL_PREFIX: &str = "SYS_";

/// Prefix of every declared ioctl constant.
pub const IOCTL_PREFIX: &str = "IOC_";

/// Prefix the kernel headers use for syscall number macros.
pub const SYSCALL_MACRO_PREFIX: &str = "__NR_";

/// Host C compiler looked up on `PATH`.
pub const DEFAULT_COMPILER: &str = "cc";

/// Headers included by the probe, in include order.
///
/// `sys/syscall.h` pulls in the `__NR_*` numbers; `linux/fs.h` defines the
/// block-device ioctls and needs `sys/ioctl.h` for the `_IO*` encoders.
pub const DEFAULT_HEADERS: &[&str] = &["stdio.h", "sys/syscall.h", "sys/ioctl.h", "linux/fs.h"];

/// Rust type written into every generated declaration.
pub const DEFAULT_INTEGER_TYPE: &str = "libc::c_long";

/// File name of the generated C probe inside the scratch directory.
pub const PROBE_SOURCE_FILE: &str = "probe.c";

/// File name of the compiled probe inside the scratch directory.
pub const PROBE_BINARY_FILE: &str = "probe";

/// Application name used in diagnostics.
pub const APP_NAME: &str = "uring-probe";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "uring-probe";
