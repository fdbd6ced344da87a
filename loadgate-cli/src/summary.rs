//! Machine-readable rendering of check results
use loadgate::{BaselineReport, CategoryOutcome};
use serde_json::{json, Value};

pub(crate) fn report(report: &BaselineReport) -> Value {
    json!({
        "passed": report.passed(),
        "categories": report.outcomes().iter().map(outcome).collect::<Vec<_>>(),
    })
}

pub(crate) fn outcome(outcome: &CategoryOutcome) -> Value {
    match &outcome.result {
        Ok(result) => {
            let stats = result.stats();
            json!({
                "category": outcome.category,
                "status": if result.passed() { "passed" } else { "failed" },
                "stats": {
                    "request_count": stats.request_count,
                    "failure_count": stats.failure_count,
                    "success_rate": stats.success_rate(),
                    "avg_response_time_ms": stats.avg_response_time_ms,
                    "requests_per_second": stats.requests_per_second,
                },
                "checks": result.checks(),
            })
        }
        Err(err) => json!({
            "category": outcome.category,
            "status": if err.is_recoverable() { "missing" } else { "error" },
            "error": err.to_string(),
        }),
    }
}
