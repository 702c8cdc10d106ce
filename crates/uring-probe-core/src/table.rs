//! The fixed probe table and its validation.

use std::collections::HashSet;

use uring_probe_common::error::{ProbeError, Result};
use uring_probe_common::types::ProbeEntry;

/// Every constant the io_uring binding layer needs, in output order.
///
/// Adding a constant means appending a row here.
pub const IO_URING_TABLE: &[ProbeEntry] = &[
    ProbeEntry::syscall("epoll_create"),
    ProbeEntry::syscall("io_uring_register"),
    ProbeEntry::syscall("io_uring_enter"),
    ProbeEntry::syscall("io_uring_setup"),
    ProbeEntry::ioctl("BLKGETSIZE64"),
];

const fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

const fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_ident_start) && chars.all(is_ident_continue)
}

/// Checks that a table can be spliced into a probe and rendered safely.
///
/// # Errors
///
/// Returns [`ProbeError::InvalidEntry`] if a name is not a C identifier and
/// [`ProbeError::DuplicateName`] if two entries declare the same constant.
pub fn validate(table: &[ProbeEntry]) -> Result<()> {
    let mut seen = HashSet::with_capacity(table.len());
    for entry in table {
        if !is_c_identifier(entry.name) {
            return Err(ProbeError::InvalidEntry {
                name: entry.name.to_owned(),
                message: "not a C identifier".into(),
            });
        }
        let declared = entry.declared_name();
        if !seen.insert(declared.clone()) {
            return Err(ProbeError::DuplicateName { name: declared });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use uring_probe_common::types::EntryKind;

    use super::*;

    #[test]
    fn fixed_table_is_valid() {
        validate(IO_URING_TABLE).expect("fixed table should validate");
    }

    #[test]
    fn fixed_table_order_is_stable() {
        let names: Vec<String> = IO_URING_TABLE.iter().map(ProbeEntry::declared_name).collect();
        assert_eq!(
            names,
            vec![
                "SYS_EPOLL_CREATE",
                "SYS_IO_URING_REGISTER",
                "SYS_IO_URING_ENTER",
                "SYS_IO_URING_SETUP",
                "IOC_BLKGETSIZE64",
            ]
        );
    }

    #[test]
    fn fixed_table_prefixes_match_kind() {
        for entry in IO_URING_TABLE {
            let declared = entry.declared_name();
            match entry.kind {
                EntryKind::Syscall => assert!(declared.starts_with("SYS_")),
                EntryKind::Ioctl => assert!(declared.starts_with("IOC_")),
            }
        }
    }

    #[test]
    fn rejects_names_that_are_not_identifiers() {
        let table = [ProbeEntry::syscall("io_uring_setup); system(\"x\"")];
        let err = validate(&table).unwrap_err();
        assert!(matches!(err, ProbeError::InvalidEntry { .. }));
    }

    #[test]
    fn rejects_empty_and_digit_leading_names() {
        assert!(validate(&[ProbeEntry::ioctl("")]).is_err());
        assert!(validate(&[ProbeEntry::ioctl("9LIVES")]).is_err());
    }

    #[test]
    fn rejects_names_colliding_after_uppercasing() {
        let table = [
            ProbeEntry::syscall("io_uring_setup"),
            ProbeEntry::syscall("IO_URING_SETUP"),
        ];
        let err = validate(&table).unwrap_err();
        assert!(matches!(err, ProbeError::DuplicateName { name } if name == "SYS_IO_URING_SETUP"));
    }

    #[test]
    fn same_name_in_both_spaces_does_not_collide() {
        let table = [ProbeEntry::syscall("FIONREAD"), ProbeEntry::ioctl("FIONREAD")];
        validate(&table).expect("prefixes keep the spaces apart");
    }

    #[test]
    fn empty_table_is_valid() {
        validate(&[]).expect("empty table");
    }
}
