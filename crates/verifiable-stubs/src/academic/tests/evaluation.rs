use super::common::*;
use crate::academic::domain::StudentId;
use crate::academic::evaluation::{best_marks, evaluate_eligibility, merit_score};

#[test]
fn eligibility_threshold_is_inclusive_of_best_marks() {
    let rule = eligibility_rule("MBBS", 60.0);

    let below = evaluate_eligibility(&[record("12th", 55.0, "a")], &rule);
    assert!(!below.eligible);
    assert_eq!(below.message, "Student does not meet minimum marks");

    let above = evaluate_eligibility(
        &[record("10th", 52.0, "b"), record("12th", 65.0, "c")],
        &rule,
    );
    assert!(above.eligible);
    assert_eq!(above.student_marks, 65.0);
    assert_eq!(above.required_marks, 60.0);
    assert_eq!(above.message, "Student is eligible");

    let exact = evaluate_eligibility(&[record("12th", 60.0, "d")], &rule);
    assert!(exact.eligible);
}

#[test]
fn no_records_means_zero_marks() {
    assert_eq!(best_marks(&[]), 0.0);
    let outcome = evaluate_eligibility(&[], &eligibility_rule("BDS", 0.5));
    assert!(!outcome.eligible);
    assert_eq!(outcome.student_marks, 0.0);
}

#[test]
fn merit_matches_levels_case_insensitively() {
    let rule = merit_rule("ENG", &[("10th", 0.3), ("graduation", 0.7)]);
    let records = vec![
        record("10TH Board", 90.0, "a"),
        record("Graduation (Hons)", 70.0, "b"),
    ];

    let score = merit_score(&records, &rule);
    assert!((score - (90.0 * 0.3 + 70.0 * 0.7)).abs() < 1e-9);
}

#[test]
fn merit_uses_first_matching_record_and_skips_missing_levels() {
    let rule = merit_rule("LAW", &[("12th", 1.0), ("diploma", 5.0)]);
    let records = vec![record("12th", 60.0, "a"), record("12th retake", 80.0, "b")];

    assert!((merit_score(&records, &rule) - 60.0).abs() < 1e-9);
}

#[test]
fn merit_outcome_has_no_rank() {
    let rule = merit_rule("LAW", &[("12th", 1.0)]);
    let outcome = crate::academic::evaluation::evaluate_merit(
        StudentId("STU-9".to_string()),
        &[record("12th", 72.0, "a")],
        &rule,
    );
    assert_eq!(outcome.rank, None);
    assert_eq!(outcome.program, "LAW");
}
