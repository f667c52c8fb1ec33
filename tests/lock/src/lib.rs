//! Shared helpers for the contract lock tests.

use mathtrace_kernel::record::recorder::RecorderV1;
use mathtrace_kernel::record::sequencer::SequencerV1;

/// A fresh sequencer and a recorder drawing from a clone of it.
///
/// The returned sequencer handle observes (and can reset) everything the
/// recorder does.
#[must_use]
pub fn fresh_pair() -> (SequencerV1, RecorderV1) {
    let sequencer = SequencerV1::new();
    let recorder = RecorderV1::new(sequencer.clone());
    (sequencer, recorder)
}

/// A fresh recorder over its own private sequencer.
#[must_use]
pub fn fresh_recorder() -> RecorderV1 {
    RecorderV1::new(SequencerV1::new())
}
