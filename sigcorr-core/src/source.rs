use async_trait::async_trait;

use sigcorr_types::{ColumnRef, DatasetRef, SigcorrError};

use crate::series::Series;

/// A read-only catalog of timestamped datasets organised by instrument and category.
///
/// Lookups use the fuzzy policy of [`crate::catalog::resolve_name`]. A query
/// that matches nothing yields [`SigcorrError::NotFound`], which callers treat
/// as an expected outcome rather than a failure.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// A stable identifier used in logs and `Source` errors (e.g. "sigcorr-parquet").
    fn name(&self) -> &'static str;

    /// All instrument names, sorted.
    async fn instruments(&self) -> Result<Vec<String>, SigcorrError>;

    /// Category names under the instrument matching `instrument`, sorted.
    async fn categories(&self, instrument: &str) -> Result<Vec<String>, SigcorrError>;

    /// Column names of the resolved dataset.
    async fn columns(&self, dataset: &DatasetRef) -> Result<Vec<String>, SigcorrError>;

    /// Load one numeric column as a [`Series`].
    ///
    /// Values that cannot be coerced to a finite number are dropped; only a
    /// missing dataset, column or timestamp column is reported as `NotFound`.
    async fn series(&self, column: &ColumnRef) -> Result<Series, SigcorrError>;

    /// Earliest and latest timestamp of the resolved dataset.
    async fn timestamp_bounds(&self, dataset: &DatasetRef) -> Result<(i64, i64), SigcorrError>;

    /// Rebuild the catalog snapshot from the backing store.
    ///
    /// Default: no-op for sources whose contents never change.
    async fn refresh(&self) -> Result<(), SigcorrError> {
        Ok(())
    }
}
