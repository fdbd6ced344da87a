use loadgate::prelude::*;
use loadgate_tests::{Aggregate, ReportsDir};

#[tracing_test::traced_test]
#[test]
fn failures_are_logged_per_category() {
    let reports = ReportsDir::new().unwrap();
    reports
        .write_stats("auth", Aggregate::new(100, 50, 900., 1.))
        .unwrap();
    reports
        .write_raw("organization", "Type,Name,Request Count\nGET,/api/organization/tree,4\n")
        .unwrap();

    let report = BaselineChecker::new(reports.path()).run_all();
    assert!(!report.passed());

    assert!(logs_contain("Baseline not met"));
    assert!(logs_contain("organization: No aggregated row found"));
    assert!(logs_contain("datafile: Stats file not found"));
    assert!(logs_contain("0 of 4 categories passed"));
}

#[tracing_test::traced_test]
#[test]
fn bad_fields_are_logged_not_raised() {
    let reports = ReportsDir::new().unwrap();
    reports
        .write_raw(
            "datafile",
            "Type,Name,Request Count,Failure Count,Average Response Time,Requests/s\n\
             ,Aggregated,250,12,N/A,4.2\n",
        )
        .unwrap();

    let stats = BaselineChecker::new(reports.path()).load("datafile").unwrap();
    assert_eq!(stats.avg_response_time_ms, 0.);
    assert_eq!(stats.requests_per_second, 4.2);
    assert!(logs_contain("Unparseable value in `Average Response Time`"));
}
