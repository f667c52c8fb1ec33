//! Digest locks: history fingerprints are stable and content-addressed.
//!
//! The golden values below pin the canonical preimage encoding and the
//! domain prefix. If one of these changes, every previously recorded
//! fingerprint silently diverges — so a change here is a deliberate
//! schema version bump, not a refactor.

use lock_tests::fresh_recorder;
use mathtrace_kernel::digest::history::history_digest;
use mathtrace_kernel::record::recorder::RecorderV1;
use mathtrace_kernel::record::sequencer::SequencerV1;

#[test]
fn golden_digest_for_chained_add_sub() {
    let recorder = fresh_recorder() + 1 - 2;
    let digest = history_digest(recorder.history()).unwrap();
    assert_eq!(
        digest.as_str(),
        "sha256:cc5038a9c7d7ef6ec4cd984bb185ea59c9aa0994b681e85c091e28de51e98b8f"
    );
}

#[test]
fn golden_digest_for_empty_history() {
    let recorder = fresh_recorder();
    let digest = history_digest(recorder.history()).unwrap();
    assert_eq!(
        digest.as_str(),
        "sha256:19f94596d6ffd00ebfc1d7bbae0e19ca88964cd667ae2984be9d41476034388f"
    );
}

#[test]
fn golden_digest_for_reflected_add() {
    let recorder = 1i32 + fresh_recorder();
    let digest = history_digest(recorder.history()).unwrap();
    assert_eq!(
        digest.as_str(),
        "sha256:cb81a76be9fbaedd42bba356df968884a04485e7c4acfa1c769598e499453489"
    );
}

#[test]
fn equal_histories_agree_across_recorder_and_sequencer_instances() {
    let a = fresh_recorder() + 1 - 2;
    let b = fresh_recorder() + 1 - 2;
    assert_eq!(
        history_digest(a.history()).unwrap(),
        history_digest(b.history()).unwrap()
    );
}

#[test]
fn digest_distinguishes_operation_order() {
    let ab = (fresh_recorder() + 1) - 2;
    let ba = (fresh_recorder() - 2) + 1;
    assert_ne!(
        history_digest(ab.history()).unwrap(),
        history_digest(ba.history()).unwrap()
    );
}

#[test]
fn digest_reflects_the_sequencer_epoch() {
    // Same operations, but the second recorder starts mid-epoch: the
    // sequence numbers differ, so the fingerprint differs.
    let fresh = fresh_recorder() + 1;
    let shared = SequencerV1::new();
    shared.next();
    let offset = RecorderV1::new(shared) + 1;
    assert_ne!(
        history_digest(fresh.history()).unwrap(),
        history_digest(offset.history()).unwrap()
    );
}
