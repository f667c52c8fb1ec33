//! `SequencerV1`: the shared ordering handle for trace entries.
//!
//! A sequencer issues the sequence numbers that order recorded operations.
//! It is caller-owned: recorders receive a handle at construction instead of
//! reaching for process-wide state. Cloning is cheap and clones share one
//! counter, so several recorders fed from clones of the same sequencer
//! interleave into a single strictly increasing sequence.
//!
//! The handle is `Rc`-based and therefore neither `Send` nor `Sync`:
//! cross-thread use does not compile. Ordering is cooperative and
//! single-threaded.

use std::cell::Cell;
use std::rc::Rc;

/// Shared handle to a monotonically increasing sequence counter.
///
/// Stores the *next* value to issue, starting at 0. Each [`next()`] returns
/// a value exactly one greater than the previous call since the last
/// [`reset()`], across every clone of the handle.
///
/// [`next()`]: SequencerV1::next
/// [`reset()`]: SequencerV1::reset
#[derive(Debug, Clone)]
pub struct SequencerV1 {
    counter: Rc<Cell<u64>>,
}

impl SequencerV1 {
    /// Create a fresh sequencer whose first issued value is 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counter: Rc::new(Cell::new(0)),
        }
    }

    /// Issue the next sequence number and advance the shared counter.
    pub fn next(&self) -> u64 {
        let seq = self.counter.get();
        self.counter.set(seq + 1);
        seq
    }

    /// Restore the counter to its initial state.
    ///
    /// The next [`next()`](SequencerV1::next) call on *any* clone of this
    /// handle returns 0 again, exactly as on a fresh sequencer.
    pub fn reset(&self) {
        self.counter.set(0);
    }

    /// Number of values issued since the last reset.
    ///
    /// Also the value the next [`next()`](SequencerV1::next) call will return.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.counter.get()
    }
}

impl Default for SequencerV1 {
    fn default() -> Self {
        Self::new()
    }
}
