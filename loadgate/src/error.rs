use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Stats file not found: {}", .0.display())]
    ArtifactMissing(PathBuf),

    #[error("No aggregated row found in {}", .0.display())]
    AggregateRowMissing(PathBuf),

    #[error("Unknown test type: {0}")]
    UnknownCategory(String),

    #[error("Error reading {}: {source}", path.display())]
    ArtifactUnreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl CheckError {
    /// Whether this is a "no results" condition for the category (nothing ran, or the run never
    /// finished writing), as opposed to a bad request or an I/O problem.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CheckError::ArtifactMissing(_) | CheckError::AggregateRowMissing(_)
        )
    }
}
