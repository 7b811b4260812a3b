//! Parser for the checker's duplicate-definition diagnostics.
//!
//! The checker reports a duplicated entry as two lines on stderr:
//!
//! ```text
//! <path>:<N>: duplicate message definition
//! <path>:<M>: ...this is the location of the first definition
//! ```
//!
//! This module turns that raw text into a structured match, or `None` for any
//! other diagnostic shape. Keeping the wording here isolates the rest of the
//! repair logic from the external tool's message format.

use regex::Regex;
use std::path::Path;

/// A duplicated entry located by the checker, as 1-based line numbers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DuplicateDefinition {
    /// First line of the duplicate (second) occurrence.
    pub duplicate_line: usize,
    /// First line of the original definition.
    pub first_line: usize,
}

/// Matches `stderr` against the duplicate-definition diagnostic for `path`.
///
/// Both diagnostic lines must be present and reference `path` verbatim;
/// anything else is unrecognized.
pub fn parse(path: &Path, stderr: &str) -> Option<DuplicateDefinition> {
    let mut lines = stderr.lines();
    let first = lines.next()?;
    let second = lines.next().unwrap_or("");

    let escaped = regex::escape(&path.display().to_string());

    let pattern_dup = Regex::new(&format!(
        r"^{escaped}:(\d+): duplicate message definition"
    ))
    .ok()?;
    let duplicate_line = pattern_dup.captures(first)?[1].parse().ok()?;

    let pattern_init = Regex::new(&format!(
        r"^{escaped}:(\d+): \.\.\.this is the location of the first definition"
    ))
    .ok()?;
    let first_line = pattern_init.captures(second)?[1].parse().ok()?;

    Some(DuplicateDefinition {
        duplicate_line,
        first_line,
    })
}
