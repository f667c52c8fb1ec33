//! Digest module: canonicalization and content hashing.
//!
//! Depends on `record`. Does not import from `render`.

pub mod canon;
pub mod hash;
pub mod history;
