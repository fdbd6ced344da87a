use serde::Serialize;
use tracing::warn;

/// Aggregate statistics for a single load test run.
///
/// Built from the aggregate row of a run artifact. Construction normalizes the raw values so the
/// rest of the pipeline never sees a negative number or more failures than requests. A response
/// time which is NaN or infinite is kept as infinite so it can never meet a ceiling.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunStatistics {
    pub request_count: u64,
    pub failure_count: u64,
    pub avg_response_time_ms: f64,
    pub requests_per_second: f64,
}

impl RunStatistics {
    pub fn new(
        request_count: u64,
        failure_count: u64,
        avg_response_time_ms: f64,
        requests_per_second: f64,
    ) -> Self {
        let failure_count = if failure_count > request_count {
            warn!(
                "Failure count {failure_count} exceeds request count {request_count}; clamping."
            );
            request_count
        } else {
            failure_count
        };

        Self {
            request_count,
            failure_count,
            avg_response_time_ms: latency(avg_response_time_ms),
            requests_per_second: non_negative(requests_per_second),
        }
    }

    /// Fraction of requests which did not fail. Zero when no requests were recorded.
    pub fn success_rate(&self) -> f64 {
        let succeeded = self.request_count.saturating_sub(self.failure_count);
        succeeded as f64 / self.request_count.max(1) as f64
    }
}

fn latency(val: f64) -> f64 {
    if val.is_nan() || val == f64::INFINITY {
        f64::INFINITY
    } else {
        val.max(0.)
    }
}

fn non_negative(val: f64) -> f64 {
    if val.is_finite() && val > 0. {
        val
    } else {
        0.
    }
}
