//! Reading run artifacts emitted by the load generator
//!
//! The stats artifact is a CSV file with one row per named request group plus one synthetic
//! "Aggregated" row summarizing the whole run. Only the aggregate row is of interest here.
use crate::error::CheckError;
use csv::{ReaderBuilder, StringRecord, Trim};
use loadgate_core::{RunStatistics, ARTIFACT_SUFFIX};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

const TYPE_COLUMN: &str = "Type";
const NAME_COLUMN: &str = "Name";
const AGGREGATED: &str = "Aggregated";

// Column spellings have changed across load generator versions. First listed wins.
const REQUEST_COUNT: &[&str] = &["Request Count", "request_count"];
const FAILURE_COUNT: &[&str] = &["Failure Count", "failure_count"];
const AVG_RESPONSE_TIME: &[&str] = &["Average Response Time", "avg_response_time"];
const REQUESTS_PER_SECOND: &[&str] = &["Requests/s", "requests_per_second"];

/// Location of the stats artifact for `category` inside `reports_dir`.
pub fn artifact_path(reports_dir: &Path, category: &str) -> PathBuf {
    reports_dir.join(format!("{category}{ARTIFACT_SUFFIX}"))
}

/// Parse the aggregate row of the artifact at `path` into [`RunStatistics`].
pub fn read_run_statistics(path: &Path) -> Result<RunStatistics, CheckError> {
    if !path.exists() {
        return Err(CheckError::ArtifactMissing(path.to_path_buf()));
    }

    let unreadable = |source| CheckError::ArtifactUnreadable {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_path(path)
        .map_err(unreadable)?;
    let headers = reader.headers().map_err(unreadable)?.clone();

    // A row tagged `Type == "Aggregated"` is only used when no row matches the stricter
    // empty-Type/`Name == "Aggregated"` convention.
    let mut fallback = None;
    for record in reader.records() {
        let record = record.map_err(unreadable)?;
        let row = Row::new(&headers, &record);

        match row.aggregate_kind() {
            Some(AggregateKind::Exact) => return Ok(row.statistics()),
            Some(AggregateKind::Fallback) if fallback.is_none() => fallback = Some(record),
            _ => {}
        }
    }

    match fallback {
        Some(record) => {
            debug!("Using `Type` column to locate aggregate row in {}", path.display());
            Ok(Row::new(&headers, &record).statistics())
        }
        None => Err(CheckError::AggregateRowMissing(path.to_path_buf())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AggregateKind {
    Exact,
    Fallback,
}

/// Header-keyed view over a single CSV record.
struct Row<'a> {
    headers: &'a StringRecord,
    record: &'a StringRecord,
}

impl<'a> Row<'a> {
    fn new(headers: &'a StringRecord, record: &'a StringRecord) -> Self {
        Self { headers, record }
    }

    /// `None` when the column is absent from the header or the record is too short.
    fn get(&self, column: &str) -> Option<&'a str> {
        let idx = self.headers.iter().position(|h| h == column)?;
        self.record.get(idx)
    }

    /// First candidate column holding a non-blank value, with surrounding whitespace removed.
    fn first_of<'c>(&self, candidates: &[&'c str]) -> Option<(&'c str, &'a str)> {
        candidates.iter().find_map(|&column| {
            self.get(column)
                .map(str::trim)
                .filter(|val| !val.is_empty())
                .map(|val| (column, val))
        })
    }

    fn aggregate_kind(&self) -> Option<AggregateKind> {
        let kind = self.get(TYPE_COLUMN).unwrap_or("");
        let name = self.get(NAME_COLUMN).unwrap_or("");

        if kind.is_empty() && name == AGGREGATED {
            Some(AggregateKind::Exact)
        } else if kind == AGGREGATED {
            Some(AggregateKind::Fallback)
        } else {
            None
        }
    }

    fn statistics(&self) -> RunStatistics {
        trace!("Aggregate row: {:?}", self.record);
        RunStatistics::new(
            self.count(REQUEST_COUNT),
            self.count(FAILURE_COUNT),
            self.latency(AVG_RESPONSE_TIME),
            self.float(REQUESTS_PER_SECOND),
        )
    }

    fn count(&self, candidates: &[&str]) -> u64 {
        let Some((column, raw)) = self.first_of(candidates) else {
            return 0;
        };

        raw.parse::<u64>()
            .ok()
            .or_else(|| parse_non_negative(raw).map(|val| val as u64))
            .unwrap_or_else(|| {
                debug!("Unparseable count in `{column}`: {raw:?}; using 0");
                0
            })
    }

    fn float(&self, candidates: &[&str]) -> f64 {
        let Some((column, raw)) = self.first_of(candidates) else {
            return 0.;
        };

        parse_non_negative(raw).unwrap_or_else(|| {
            debug!("Unparseable value in `{column}`: {raw:?}; using 0");
            0.
        })
    }

    /// Like [`Row::float`], but a parseable infinite or NaN value is passed through for
    /// [`RunStatistics`] to treat as unbounded.
    fn latency(&self, candidates: &[&str]) -> f64 {
        let Some((column, raw)) = self.first_of(candidates) else {
            return 0.;
        };

        raw.parse::<f64>().unwrap_or_else(|_| {
            debug!("Unparseable value in `{column}`: {raw:?}; using 0");
            0.
        })
    }
}

fn parse_non_negative(raw: &str) -> Option<f64> {
    raw.parse::<f64>()
        .ok()
        .filter(|val| val.is_finite() && *val >= 0.)
}
