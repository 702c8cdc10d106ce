//! Domain primitive types used across the uring-probe workspace.

use std::fmt;

use crate::constants::{IOCTL_PREFIX, SYSCALL_MACRO_PREFIX, SYSCALL_PREFIX};

/// Numeric space a table entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A syscall number (`__NR_<name>`).
    Syscall,
    /// An ioctl request code, already encoded by the header macro.
    Ioctl,
}

impl EntryKind {
    /// Prefix carried by every declared name of this kind.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Syscall => SYSCALL_PREFIX,
            Self::Ioctl => IOCTL_PREFIX,
        }
    }

    /// C expression the probe evaluates for an entry called `name`.
    #[must_use]
    pub fn c_expression(self, name: &str) -> String {
        match self {
            Self::Syscall => format!("{SYSCALL_MACRO_PREFIX}{name}"),
            Self::Ioctl => name.to_owned(),
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syscall => write!(f, "syscall"),
            Self::Ioctl => write!(f, "ioctl"),
        }
    }
}

/// One row of the probe table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProbeEntry {
    /// Numeric space of the entry.
    pub kind: EntryKind,
    /// Name as spelled in the kernel headers, without `__NR_`.
    pub name: &'static str,
}

impl ProbeEntry {
    /// A syscall entry, resolved through `__NR_<name>`.
    #[must_use]
    pub const fn syscall(name: &'static str) -> Self {
        Self {
            kind: EntryKind::Syscall,
            name,
        }
    }

    /// An ioctl entry, resolved through the macro `<name>`.
    #[must_use]
    pub const fn ioctl(name: &'static str) -> Self {
        Self {
            kind: EntryKind::Ioctl,
            name,
        }
    }

    /// Name of the generated constant, e.g. `SYS_IO_URING_SETUP`.
    #[must_use]
    pub fn declared_name(&self) -> String {
        format!("{}{}", self.kind.prefix(), self.name.to_ascii_uppercase())
    }
}

/// A table entry bound to the value the host headers define for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedConstant {
    /// The table row.
    pub entry: ProbeEntry,
    /// Value of the macro, as the platform `long`.
    pub value: i64,
}

/// Textual base of generated integer literals.
///
/// Purely presentational: readers treat both forms as the same integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LiteralBase {
    /// `425`
    Decimal,
    /// `0x1a9`
    #[default]
    Hex,
}

impl LiteralBase {
    /// Formats `value` as a Rust integer literal in this base.
    #[must_use]
    pub fn format(self, value: i64) -> String {
        match self {
            Self::Decimal => value.to_string(),
            Self::Hex if value < 0 => format!("-{:#x}", value.unsigned_abs()),
            Self::Hex => format!("{value:#x}"),
        }
    }
}

/// A constant declaration read back from a generated unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Declared constant name.
    pub name: String,
    /// Type as written in the declaration.
    pub integer_type: String,
    /// Literal value, independent of the base it was written in.
    pub value: i64,
}
