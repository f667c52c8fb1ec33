//! Shared helpers for mathtrace benchmark suites.

use mathtrace_kernel::record::op::OpKind;
use mathtrace_kernel::record::recorder::RecorderV1;
use mathtrace_kernel::record::sequencer::SequencerV1;

/// Build a recorder with `n` entries, cycling through the operator catalog
/// with integer operands (so every `record` call is total).
///
/// # Panics
///
/// Never in practice: integer operands satisfy the exponent contract.
#[must_use]
pub fn recorder_with_entries(n: usize) -> RecorderV1 {
    let mut recorder = RecorderV1::new(SequencerV1::new());
    for i in 0..n {
        let op = OpKind::ALL[i % OpKind::ALL.len()];
        let operand = i64::try_from(i).unwrap_or(0);
        recorder.record(op, operand).unwrap();
    }
    recorder
}
