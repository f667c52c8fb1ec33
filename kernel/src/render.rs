//! History rendering: the derived human-readable view.
//!
//! `render_history()` is a pure, deterministic function over the entry log.
//! The log is authoritative; this text is a projection of it and carries no
//! information the entries do not.
//!
//! # Line format
//!
//! ```text
//! <seq> <operator> <operand-text>
//! ```
//!
//! One line per entry, oldest first, newline-joined, no trailing newline.
//! An empty history renders as the empty string.

use std::fmt::Write;

use crate::record::recorder::TraceEntryV1;

/// Render entries as `"{seq} {op} {operand}"` lines.
#[must_use]
pub fn render_history(entries: &[TraceEntryV1]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = write!(out, "{} {} {}", entry.seq, entry.op, entry.operand);
    }
    out
}
