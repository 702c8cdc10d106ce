//! Generation of the C probe program.
//!
//! Every entry is guarded by `#ifndef`/`#error`, so a name the host headers
//! do not define as a macro fails compilation with a diagnostic naming it.
//! Functions and globals in scope are rejected the same way; their
//! addresses would otherwise print as values.
//!
//! Values are cast to the platform `long` (the width the syscall wrapper
//! takes) and printed in decimal, one per line, in table order.

use std::fmt::Write;

use uring_probe_common::types::ProbeEntry;

/// Renders the probe translation unit for `table`.
///
/// The output depends only on its arguments.
#[must_use]
pub fn render_probe_source<S: AsRef<str>>(headers: &[S], table: &[ProbeEntry]) -> String {
    let mut src = String::from("#define _GNU_SOURCE\n\n");
    for header in headers {
        let _ = writeln!(src, "#include <{}>", header.as_ref());
    }
    src.push('\n');
    for entry in table {
        let expr = entry.kind.c_expression(entry.name);
        let _ = writeln!(
            src,
            "#ifndef {expr}\n#error \"{expr} is not defined by the host headers\"\n#endif"
        );
    }
    src.push_str("\nint main(void)\n{\n");
    for entry in table {
        let _ = writeln!(
            src,
            "    printf(\"%lld\\n\", (long long)(long)({}));",
            entry.kind.c_expression(entry.name)
        );
    }
    src.push_str("    return fflush(stdout) == 0 ? 0 : 1;\n}\n");
    src
}
