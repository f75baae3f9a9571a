use super::*;

#[test]
fn test_outcome_failed_constructor() {
    let outcome = Outcome::failed("apply rejected");
    assert_eq!(
        outcome,
        Outcome::Failed {
            reason: "apply rejected".to_string()
        }
    );
    assert!(!outcome.is_success());
}

#[test]
fn test_empty_report() {
    let report = BatchReport::new();

    assert!(report.is_empty());
    assert_eq!(report.len(), 0);
    assert_eq!(report.succeeded(), 0);
    assert_eq!(report.failed(), 0);
    assert!(report.is_success());
}

#[test]
fn test_report_counts_mixed_outcomes() {
    let mut report = BatchReport::new();
    report.record("r1", Outcome::Succeeded);
    report.record("r2", Outcome::failed("boom"));
    report.record("r3", Outcome::Succeeded);

    assert_eq!(report.len(), 3);
    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.failed(), 1);
    assert!(!report.is_success());
}

#[test]
fn test_report_preserves_processing_order() {
    let mut report = BatchReport::new();
    report.record("first", Outcome::Succeeded);
    report.record("second", Outcome::failed("x"));
    report.record("third", Outcome::Succeeded);

    let names: Vec<&str> = report
        .outcomes()
        .iter()
        .map(|entry| entry.resource.as_str())
        .collect();

    assert_eq!(names, vec!["first", "second", "third"]);
}
