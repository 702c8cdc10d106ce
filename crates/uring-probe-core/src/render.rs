//! Formatting of resolved constants as Rust declarations.

use uring_probe_common::types::{LiteralBase, ResolvedConstant};

/// Renders one `pub const` declaration, without a trailing newline.
#[must_use]
pub fn render_declaration(
    constant: &ResolvedConstant,
    base: LiteralBase,
    integer_type: &str,
) -> String {
    format!(
        "pub const {}: {integer_type} = {};",
        constant.entry.declared_name(),
        base.format(constant.value)
    )
}

/// Renders a complete unit: one declaration per line, in slice order.
#[must_use]
pub fn render_unit(constants: &[ResolvedConstant], base: LiteralBase, integer_type: &str) -> String {
    constants
        .iter()
        .map(|c| render_declaration(c, base, integer_type) + "\n")
        .collect()
}
