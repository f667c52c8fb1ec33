//! Mathtrace Kernel: record arithmetic instead of computing it.
//!
//! A [`record::recorder::RecorderV1`] intercepts the arithmetic operators
//! applied to it and appends each application to an ordered log, drawing
//! sequence numbers from a caller-owned
//! [`record::sequencer::SequencerV1`] handle. It never produces a numeric
//! result.
//!
//! # API Surface
//!
//! - [`record::recorder::RecorderV1`] -- the recorder: `record()`, `pow()`,
//!   and `std::ops` sugar in forward and reflected operand positions
//! - [`record::sequencer::SequencerV1`] -- shared ordering handle
//!   (`next()` / `reset()`)
//! - [`render::render_history`] -- the derived human-readable view
//! - [`digest::history::history_digest`] -- content fingerprint of a history
//!
//! # Module Layout
//!
//! `record` holds the data model; `render` and `digest` are derived views
//! over its entry type. `RecorderV1::show_history` is convenience sugar
//! over [`render::render_history`] — the entry log stays authoritative.
//!
//! # Concurrency
//!
//! None, deliberately: the sequencer handle is `Rc`-based and not
//! `Send`/`Sync`, so the single-threaded contract is enforced by the
//! compiler rather than disclaimed in prose.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod digest;
pub mod record;
pub mod render;
