//! Fixtures for writing load generator artifacts into throwaway report directories.
use loadgate::artifact::artifact_path;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Header written by current load generator versions.
pub const STATS_HEADER: &str = "Type,Name,Request Count,Failure Count,Median Response Time,Average Response Time,Min Response Time,Max Response Time,Average Content Size,Requests/s,Failures/s,50%,66%,75%,80%,90%,95%,98%,99%,99.9%,99.99%,100%";

/// Header written by older versions which used snake_case names.
pub const SNAKE_CASE_HEADER: &str =
    "Type,Name,request_count,failure_count,avg_response_time,requests_per_second";

/// Aggregate numbers for a single run.
#[derive(Debug, Clone, Copy)]
pub struct Aggregate {
    pub requests: u64,
    pub failures: u64,
    pub avg_response_time_ms: f64,
    pub rps: f64,
}

impl Aggregate {
    pub fn new(requests: u64, failures: u64, avg_response_time_ms: f64, rps: f64) -> Self {
        Self {
            requests,
            failures,
            avg_response_time_ms,
            rps,
        }
    }

    /// A full-width row matching [`STATS_HEADER`].
    pub fn stats_row(&self, kind: &str, name: &str) -> String {
        let failures_per_sec = if self.requests == 0 {
            0.
        } else {
            self.rps * self.failures as f64 / self.requests as f64
        };
        format!(
            "{kind},{name},{},{},{},{},3,1200,512,{},{failures_per_sec:.3},{}",
            self.requests,
            self.failures,
            self.avg_response_time_ms.round(),
            self.avg_response_time_ms,
            self.rps,
            percentiles(self.avg_response_time_ms),
        )
    }

    /// A row matching [`SNAKE_CASE_HEADER`].
    pub fn snake_case_row(&self, kind: &str, name: &str) -> String {
        format!(
            "{kind},{name},{},{},{},{}",
            self.requests, self.failures, self.avg_response_time_ms, self.rps
        )
    }
}

fn percentiles(avg: f64) -> String {
    [0.9, 1., 1.1, 1.2, 1.5, 1.8, 2., 2.5, 4., 6., 8.]
        .iter()
        .map(|f| format!("{}", (avg * f).round()))
        .collect::<Vec<_>>()
        .join(",")
}

/// A temporary reports directory, removed on drop.
pub struct ReportsDir {
    dir: TempDir,
}

impl ReportsDir {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            dir: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write an artifact in the current format: a couple of per-endpoint rows followed by the
    /// aggregate row.
    pub fn write_stats(&self, category: &str, aggregate: Aggregate) -> anyhow::Result<PathBuf> {
        let endpoint = Aggregate::new(
            aggregate.requests / 2,
            aggregate.failures / 2,
            aggregate.avg_response_time_ms,
            aggregate.rps / 2.,
        );
        let rows = [
            endpoint.stats_row("POST", &format!("/api/{category}/create")),
            endpoint.stats_row("GET", &format!("/api/{category}/list")),
            aggregate.stats_row("", "Aggregated"),
        ];
        self.write_raw(category, &format!("{STATS_HEADER}\n{}\n", rows.join("\n")))
    }

    /// Write an artifact in the older snake_case format.
    pub fn write_snake_case_stats(
        &self,
        category: &str,
        aggregate: Aggregate,
    ) -> anyhow::Result<PathBuf> {
        let rows = [
            aggregate.snake_case_row("GET", &format!("/api/{category}")),
            aggregate.snake_case_row("", "Aggregated"),
        ];
        self.write_raw(
            category,
            &format!("{SNAKE_CASE_HEADER}\n{}\n", rows.join("\n")),
        )
    }

    pub fn write_raw(&self, category: &str, contents: &str) -> anyhow::Result<PathBuf> {
        let path = artifact_path(self.path(), category);
        fs::write(&path, contents)?;
        Ok(path)
    }
}
