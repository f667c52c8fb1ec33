//! History fingerprinting: content digest of a recorded history.
//!
//! `history_digest()` lets tests and tooling assert that two recorders
//! recorded identical histories without comparing rendered strings. The
//! digest is over canonical JSON of the entry list, so it is deterministic
//! and independent of which sequencer *instance* issued the numbers (equal
//! numbers, equal digest).
//!
//! The JSON encoding is an internal hash preimage, not an exchange surface:
//! the human-readable join in [`crate::render`] stays the log's only
//! exposed rendering. Operand values enter the preimage as kind + display
//! text strings, never as JSON floats (see [`crate::digest::canon`]).

use serde_json::json;

use crate::digest::canon::{canonical_json_bytes, CanonError};
use crate::digest::hash::{canonical_hash, ContentHash, DOMAIN_HISTORY};
use crate::record::recorder::TraceEntryV1;

/// Error during history digest computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryDigestError {
    /// Canonical JSON serialization failed.
    Canon(CanonError),
}

impl From<CanonError> for HistoryDigestError {
    fn from(e: CanonError) -> Self {
        Self::Canon(e)
    }
}

impl std::fmt::Display for HistoryDigestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Canon(e) => write!(f, "history canonicalization failed: {e}"),
        }
    }
}

impl std::error::Error for HistoryDigestError {}

/// Compute the content digest of a history.
///
/// Formula: `sha256(DOMAIN_HISTORY || canonical_json(entries))`.
///
/// # Errors
///
/// Returns [`HistoryDigestError::Canon`] if canonicalization fails. The
/// encoding below emits only strings and unsigned integers, so this is
/// unreachable in practice; the error is propagated rather than swallowed
/// so the canonicalizer keeps a single contract.
pub fn history_digest(entries: &[TraceEntryV1]) -> Result<ContentHash, HistoryDigestError> {
    let bytes = canonical_json_bytes(&history_json(entries))?;
    Ok(canonical_hash(DOMAIN_HISTORY, &bytes))
}

/// The digest preimage as a JSON value. Crate-internal.
pub(crate) fn history_json(entries: &[TraceEntryV1]) -> serde_json::Value {
    let entries_json: Vec<serde_json::Value> = entries.iter().map(entry_json).collect();
    json!({
        "entries": entries_json,
        "entry_count": entries.len(),
        "schema_version": "math_trace.v1",
    })
}

fn entry_json(entry: &TraceEntryV1) -> serde_json::Value {
    json!({
        "op": entry.op.as_str(),
        "operand": entry.operand.to_string(),
        "operand_kind": entry.operand.kind(),
        "seq": entry.seq,
    })
}
