//! Exit-status and stdout contract of the `uring-probe` binary.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::print_stderr)]

use std::path::Path;
use std::process::Command;

use uring_probe_core::artifact::{check_namespaces, parse_unit};
use uring_probe_core::table::IO_URING_TABLE;

const BIN: &str = env!("CARGO_BIN_EXE_uring-probe");

fn host_ready() -> bool {
    let ready = cfg!(target_os = "linux")
        && which::which(uring_probe_common::constants::DEFAULT_COMPILER).is_ok()
        && Path::new("/usr/include/linux/fs.h").exists();
    if !ready {
        eprintln!("skipping: no C compiler or kernel headers on this host");
    }
    ready
}

#[test]
fn failure_exits_non_zero_with_empty_stdout() {
    let output = Command::new(BIN)
        .env("PATH", "")
        .output()
        .expect("spawn uring-probe");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("failed to probe host kernel headers"));
}

#[test]
fn unknown_argument_exits_non_zero_with_empty_stdout() {
    let output = Command::new(BIN)
        .arg("--decimal")
        .output()
        .expect("spawn uring-probe");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[cfg(target_arch = "x86_64")]
#[test]
fn success_prints_the_complete_table() {
    if !host_ready() {
        return;
    }
    let output = Command::new(BIN).output().expect("spawn uring-probe");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let text = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let decls = parse_unit(&text).expect("stdout parses");
    assert_eq!(decls.len(), IO_URING_TABLE.len());
    check_namespaces(&decls).expect("namespaces are separate");
    assert!(text.contains("pub const SYS_IO_URING_SETUP: libc::c_long = 0x1a9;\n"));
}

#[cfg(target_arch = "x86_64")]
#[test]
fn repeated_invocations_print_identical_bytes() {
    if !host_ready() {
        return;
    }
    let first = Command::new(BIN).output().expect("first run");
    let second = Command::new(BIN).output().expect("second run");
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}
