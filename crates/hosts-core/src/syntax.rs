//! Syntax check for hostgroup bodies.
//!
//! Each line is judged on its own by how many `Text` tokens it has:
//! - none: always valid (blank, whitespace or comment only)
//! - exactly one: always invalid, whether it is an address or a name
//! - two or more: valid iff the first one parses as an IPv4 or IPv6 address
//!
//! Host names after the address are not checked.

use std::net::IpAddr;

use crate::error::{Error, Result};
use crate::token::{Line, ParseResult, parse};

/// Check a single tokenized line.
pub fn is_valid_line(line: &Line) -> bool {
    let mut texts = line.texts();
    match (texts.next(), texts.next()) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(address), Some(_)) => address.parse::<IpAddr>().is_ok(),
    }
}

/// Check every line, stopping at the first invalid one.
pub fn is_valid_body(lines: &[Line]) -> bool {
    lines.iter().all(is_valid_line)
}

impl ParseResult {
    /// Whether every line passes the syntax check.
    pub fn check_syntax(&self) -> bool {
        is_valid_body(&self.lines)
    }

    /// Like [`ParseResult::check_syntax`], reporting the first failing line.
    pub fn validate(&self) -> Result<()> {
        match self.lines.iter().position(|l| !is_valid_line(l)) {
            Some(idx) => Err(Error::syntax(idx + 1, self.lines[idx].source())),
            None => Ok(()),
        }
    }
}

/// Parse and check a raw body in one call.
pub fn check_body(body: &str) -> Result<()> {
    let result = parse(body);
    tracing::debug!(lines = result.lines.len(), "Checking hostgroup body syntax");
    result.validate()
}
