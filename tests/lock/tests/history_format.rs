//! Text format locks: the exact `show_history()` output.
//!
//! Format: one `"{seq} {op} {operand}"` line per entry, oldest first,
//! newline-joined, no trailing newline; empty history renders as `""`.

use lock_tests::fresh_recorder;
use mathtrace_kernel::record::op::OpKind;
use mathtrace_kernel::render::render_history;

#[test]
fn empty_history_is_the_empty_string() {
    assert_eq!(fresh_recorder().show_history(), "");
}

#[test]
fn chained_add_sub_golden() {
    let recorder = fresh_recorder() + 1 - 2;
    assert_eq!(recorder.show_history(), "0 add 1\n1 sub 2");
}

#[test]
fn reflected_add_golden() {
    let recorder = 1i32 + fresh_recorder();
    assert_eq!(recorder.show_history(), "0 radd 1");
}

#[test]
fn every_operator_renders_its_canonical_name() {
    let mut recorder = fresh_recorder();
    for op in OpKind::ALL {
        recorder.record(op, 1).unwrap();
    }
    let text = recorder.show_history();
    assert_eq!(
        text,
        "0 add 1\n1 radd 1\n2 sub 1\n3 rsub 1\n4 mul 1\n5 rmul 1\n\
         6 div 1\n7 rdiv 1\n8 pow 1"
    );
}

#[test]
fn line_count_equals_operation_count() {
    let mut recorder = fresh_recorder();
    for i in 0..25i32 {
        recorder.record(OpKind::Mul, i).unwrap();
    }
    assert_eq!(recorder.show_history().lines().count(), 25);
    assert!(!recorder.show_history().ends_with('\n'));
}

#[test]
fn operand_kinds_render_with_default_representations() {
    let recorder = ((fresh_recorder() + 1) - 2.5) * "w";
    assert_eq!(recorder.show_history(), "0 add 1\n1 sub 2.5\n2 mul w");
}

#[test]
fn float_operands_use_f64_display() {
    // 2.0 renders as "2": the operand's default representation in this
    // language, per the operand model.
    let recorder = fresh_recorder() + 2.0;
    assert_eq!(recorder.show_history(), "0 add 2");
}

#[test]
fn show_history_matches_render_history() {
    let recorder = (fresh_recorder() + 1).pow(2).unwrap();
    assert_eq!(recorder.show_history(), render_history(recorder.history()));
}
