//! Configuration types shared across the orchestrator and dataset sources.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::method::Method;

/// Timestamp column names in priority order; the first present column wins.
pub const DEFAULT_TIMESTAMP_COLUMNS: [&str; 3] = ["event-time", "init-time", "timestamp"];

/// Layout and selection rules for an on-disk dataset catalog.
///
/// The catalog is `root/<instrument>/<category>/<file>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog root directory.
    pub root: PathBuf,
    /// Accepted data file extensions (lowercase, without the dot).
    pub extensions: Vec<String>,
    /// Fail the snapshot build if a category directory holds more than one data file.
    ///
    /// When `false`, the lexicographically first data file is used.
    pub strict_single_file: bool,
    /// Timestamp column names in priority order.
    pub timestamp_columns: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("data"),
            extensions: vec!["parquet".to_string()],
            strict_single_file: false,
            timestamp_columns: DEFAULT_TIMESTAMP_COLUMNS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

/// Global configuration for the `Sigcorr` orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SigcorrConfig {
    /// Minimum number of aligned finite pairs before any statistic is computed.
    pub min_pairs: usize,
    /// Two-sided confidence level for Theil–Sen slope bounds, in (0, 1).
    pub theil_sen_confidence: f64,
    /// Methods used when a request names none. Empty by default, so a request
    /// without methods computes nothing.
    #[serde(default)]
    pub default_methods: Vec<Method>,
}

impl Default for SigcorrConfig {
    fn default() -> Self {
        Self {
            min_pairs: 2,
            theil_sen_confidence: 0.95,
            default_methods: Vec::new(),
        }
    }
}
