use super::*;

#[test]
fn test_summary_line_counts_outcomes() {
    let mut report = BatchReport::new();
    report.record("r1", Outcome::Succeeded);
    report.record("r2", Outcome::failed("denied"));
    report.record("r3", Outcome::Succeeded);

    assert_eq!(
        summary_line(&report),
        "Processed 3 resources: 2 succeeded, 1 failed"
    );
}

#[test]
fn test_summary_line_for_an_empty_batch() {
    let report = BatchReport::new();
    assert_eq!(summary_line(&report), "Nothing to do: no resources matched");
}
