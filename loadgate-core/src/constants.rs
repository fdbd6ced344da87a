/// Directory searched for run artifacts when none is given.
pub const DEFAULT_REPORTS_DIR: &str = "reports";

/// Suffix the load generator appends to `{category}` for the aggregate stats file.
pub const ARTIFACT_SUFFIX: &str = "_performance_stats_stats.csv";

pub const AUTH: &str = "auth";
pub const ORGANIZATION: &str = "organization";
pub const DATAFILE: &str = "datafile";
pub const COMPREHENSIVE: &str = "comprehensive";

/// Categories covered by the default baselines, in declaration order.
pub const DEFAULT_CATEGORIES: [&str; 4] = [AUTH, ORGANIZATION, DATAFILE, COMPREHENSIVE];
