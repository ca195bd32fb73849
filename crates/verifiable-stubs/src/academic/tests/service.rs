use super::common::*;
use crate::academic::domain::StudentId;
use crate::academic::AdmissionServiceError;
use crate::store::RepositoryError;

#[test]
fn enroll_skips_existing_students() {
    let service = seeded_service();

    let summary = service
        .enroll(vec![
            student("STU-1", vec![record("10th", 90.0, "9Z")]),
            student("STU-4", vec![record("10th", 71.0, "4A")]),
        ])
        .expect("batch");

    assert_eq!(summary.message, "Batch processed. 1 students added.");
    assert_eq!(summary.student_ids, vec![StudentId("STU-4".to_string())]);
}

#[test]
fn enroll_rejects_certificate_held_elsewhere() {
    let service = seeded_service();

    let result = service.enroll(vec![student("STU-5", vec![record("10th", 90.0, "1A")])]);
    assert!(matches!(
        result,
        Err(AdmissionServiceError::Repository(RepositoryError::Conflict(_)))
    ));
}

#[test]
fn duplicate_rules_are_rejected() {
    let service = seeded_service();

    assert!(matches!(
        service.add_eligibility_rule(eligibility_rule("MBBS", 40.0)),
        Err(AdmissionServiceError::DuplicateRule)
    ));
    assert!(matches!(
        service.add_merit_rule(merit_rule("MBBS", &[("10th", 1.0)])),
        Err(AdmissionServiceError::DuplicateRule)
    ));
    let ack = service
        .add_merit_rule(merit_rule("BDS", &[("12th", 1.0)]))
        .expect("new program");
    assert_eq!(ack.message, "Merit rule added");
}

#[test]
fn verify_lookups_resolve_owner() {
    let service = seeded_service();

    let roll = service.verify_roll_number("ROLL-1B").expect("roll found");
    assert_eq!(roll.student_id, StudentId("STU-1".to_string()));
    assert_eq!(roll.marks, 76.5);
    assert!(roll.verified);

    let certificate = service
        .verify_certificate("CERT-2A")
        .expect("certificate found");
    assert_eq!(certificate.level, "12th");

    assert!(matches!(
        service.verify_roll_number("ROLL-404"),
        Err(AdmissionServiceError::RollNumberNotFound)
    ));
}

#[test]
fn eligibility_and_merit_use_stored_rules() {
    let service = seeded_service();
    let student = StudentId("STU-1".to_string());

    let outcome = service
        .check_eligibility(&student, "MBBS")
        .expect("eligibility");
    assert!(outcome.eligible);
    assert_eq!(outcome.student_marks, 88.0);

    let not_eligible = service
        .check_eligibility(&StudentId("STU-2".to_string()), "MBBS")
        .expect("eligibility");
    assert!(!not_eligible.eligible);

    let merit = service.calculate_merit(&student, "MBBS").expect("merit");
    assert!((merit.merit_score - (88.0 * 0.4 + 76.5 * 0.6)).abs() < 1e-9);
}

#[test]
fn missing_student_or_rule_is_reported() {
    let service = seeded_service();

    assert!(matches!(
        service.check_eligibility(&StudentId("STU-X".to_string()), "MBBS"),
        Err(AdmissionServiceError::StudentNotFound)
    ));
    assert!(matches!(
        service.check_eligibility(&StudentId("STU-1".to_string()), "PhD"),
        Err(AdmissionServiceError::ProgramNotFound)
    ));
    assert!(matches!(
        service.calculate_merit(&StudentId("STU-1".to_string()), "PhD"),
        Err(AdmissionServiceError::MeritRuleNotFound)
    ));
}
