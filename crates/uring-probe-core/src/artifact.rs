//! Reader for generated units, built on `nom`.
//!
//! Accepts what [`crate::render`] emits in either literal base, so a
//! regenerated unit can be compared with a previous one by value rather
//! than by text. Blank lines and `//` line comments are skipped.

use std::collections::HashSet;

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, digit1, hex_digit1, space0, space1},
    combinator::{all_consuming, map_res, opt, recognize},
    multi::many0,
    sequence::preceded,
};
use uring_probe_common::constants::{IOCTL_PREFIX, SYSCALL_PREFIX};
use uring_probe_common::error::{ProbeError, Result};
use uring_probe_common::types::Declaration;

const fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

const fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize((take_while1(is_ident_start), take_while(is_ident_continue))).parse(input)
}

/// A possibly qualified type such as `libc::c_long`.
fn type_path(input: &str) -> IResult<&str, &str> {
    recognize((identifier, many0((tag("::"), identifier)))).parse(input)
}

fn magnitude(input: &str) -> IResult<&str, u64> {
    alt((
        map_res(preceded(alt((tag("0x"), tag("0X"))), hex_digit1), |d: &str| {
            u64::from_str_radix(d, 16)
        }),
        map_res(digit1, str::parse::<u64>),
    ))
    .parse(input)
}

/// A decimal or hexadecimal literal with an optional leading `-`.
fn literal(input: &str) -> IResult<&str, i64> {
    let (rest, sign) = opt(char('-')).parse(input)?;
    let (rest, magnitude) = magnitude(rest)?;
    let value = if sign.is_some() {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    };
    value.map(|v| (rest, v)).ok_or_else(|| {
        nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::TooLarge,
        ))
    })
}

/// `[pub] const NAME: TYPE = LITERAL;`
fn declaration(input: &str) -> IResult<&str, Declaration> {
    let (input, _) = opt((tag("pub"), space1)).parse(input)?;
    let (input, _) = (tag("const"), space1).parse(input)?;
    let (input, name) = identifier(input)?;
    let (input, _) = (space0, char(':'), space0).parse(input)?;
    let (input, integer_type) = type_path(input)?;
    let (input, _) = (space0, char('='), space0).parse(input)?;
    let (input, value) = literal(input)?;
    let (input, _) = (space0, char(';'), space0).parse(input)?;
    Ok((
        input,
        Declaration {
            name: name.to_owned(),
            integer_type: integer_type.to_owned(),
            value,
        },
    ))
}

/// Parses a generated unit into its declarations, in file order.
///
/// # Errors
///
/// Returns [`ProbeError::Parse`] with the 1-based line number of the first
/// line that is neither blank, a comment, nor a declaration.
pub fn parse_unit(text: &str) -> Result<Vec<Declaration>> {
    let mut decls = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        let (_, decl) = all_consuming(declaration)
            .parse(line)
            .map_err(|e| ProbeError::Parse {
                line: idx + 1,
                message: format!("{e} in \"{line}\""),
            })?;
        decls.push(decl);
    }
    Ok(decls)
}

/// Checks that every name is in the syscall or ioctl space and that no
/// two names collide.
///
/// # Errors
///
/// Returns [`ProbeError::InvalidEntry`] for an unprefixed name and
/// [`ProbeError::DuplicateName`] for a repeated one.
pub fn check_namespaces(decls: &[Declaration]) -> Result<()> {
    let mut seen = HashSet::with_capacity(decls.len());
    for decl in decls {
        if !decl.name.starts_with(SYSCALL_PREFIX) && !decl.name.starts_with(IOCTL_PREFIX) {
            return Err(ProbeError::InvalidEntry {
                name: decl.name.clone(),
                message: format!("expected a {SYSCALL_PREFIX} or {IOCTL_PREFIX} prefix"),
            });
        }
        if !seen.insert(decl.name.as_str()) {
            return Err(ProbeError::DuplicateName {
                name: decl.name.clone(),
            });
        }
    }
    Ok(())
}
