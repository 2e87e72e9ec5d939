use std::path::PathBuf;

use sigcorr_core::{CatalogConfig, SigcorrError};

use crate::ParquetSource;

/// Builder for [`ParquetSource`].
#[derive(Debug, Clone, Default)]
pub struct ParquetSourceBuilder {
    config: CatalogConfig,
}

impl ParquetSourceBuilder {
    /// Start from the default catalog configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole catalog configuration.
    #[must_use]
    pub fn config(mut self, config: CatalogConfig) -> Self {
        self.config = config;
        self
    }

    /// Catalog root directory.
    #[must_use]
    pub fn root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.root = root.into();
        self
    }

    /// Accepted data file extensions.
    #[must_use]
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Fail instead of picking one file when a category holds several.
    #[must_use]
    pub const fn strict_single_file(mut self, strict: bool) -> Self {
        self.config.strict_single_file = strict;
        self
    }

    /// Timestamp column names in priority order.
    #[must_use]
    pub fn timestamp_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.timestamp_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Scan the catalog root and build the source.
    ///
    /// This performs blocking filesystem I/O.
    ///
    /// # Errors
    /// Returns `InvalidArg` when no extension or timestamp column is configured,
    /// and `Catalog` when the root cannot be read or a category violates
    /// `strict_single_file`.
    pub fn build(self) -> Result<ParquetSource, SigcorrError> {
        if self.config.extensions.is_empty() {
            return Err(SigcorrError::invalid_arg(
                "at least one data file extension is required",
            ));
        }
        if self.config.timestamp_columns.is_empty() {
            return Err(SigcorrError::invalid_arg(
                "at least one timestamp column name is required",
            ));
        }
        ParquetSource::open(self.config)
    }
}
