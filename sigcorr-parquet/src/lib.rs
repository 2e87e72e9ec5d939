//! sigcorr-parquet
//!
//! Dataset source over a directory tree of Parquet files laid out as
//! `root/<instrument>/<category>/<file>.parquet`. The tree is scanned once
//! into an immutable snapshot; [`DatasetSource::refresh`] rescans and swaps
//! the snapshot atomically so in-flight requests keep a consistent view.
//!
//! File reads run on Tokio's blocking pool.
#![warn(missing_docs)]

mod builder;
mod frame;
mod scan;

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use sigcorr_core::{
    Catalog, CatalogConfig, ColumnRef, DatasetRef, DatasetSource, Series, SigcorrError,
};

pub use builder::ParquetSourceBuilder;
pub use scan::scan_catalog;

pub(crate) const SOURCE_NAME: &str = "sigcorr-parquet";

/// Parquet-backed [`DatasetSource`].
pub struct ParquetSource {
    config: CatalogConfig,
    snapshot: RwLock<Arc<Catalog<PathBuf>>>,
}

impl ParquetSource {
    /// Returns a builder with the default catalog configuration.
    #[must_use]
    pub fn builder() -> ParquetSourceBuilder {
        ParquetSourceBuilder::new()
    }

    /// Scan `config.root` and build a source. Blocking.
    ///
    /// # Errors
    /// Propagates scan failures as `Catalog` errors.
    pub fn open(config: CatalogConfig) -> Result<Self, SigcorrError> {
        let catalog = scan_catalog(&config)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(root = %config.root.display(), datasets = catalog.len(), "catalog scanned");
        Ok(Self {
            config,
            snapshot: RwLock::new(Arc::new(catalog)),
        })
    }

    /// Configuration the source was built with.
    #[must_use]
    pub const fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Current catalog snapshot.
    ///
    /// # Errors
    /// Fails only if a previous refresh panicked while holding the lock.
    pub fn snapshot(&self) -> Result<Arc<Catalog<PathBuf>>, SigcorrError> {
        self.snapshot
            .read()
            .map(|guard| Arc::clone(&guard))
            .map_err(|_| SigcorrError::source_failure(SOURCE_NAME, "catalog lock poisoned"))
    }

    fn dataset_path(&self, dataset: &DatasetRef) -> Result<(String, PathBuf), SigcorrError> {
        let snapshot = self.snapshot()?;
        let (inst, cat, path) = snapshot
            .resolve(dataset)
            .ok_or_else(|| SigcorrError::not_found(format!("dataset {dataset}")))?;
        Ok((format!("{inst}/{cat}"), path.clone()))
    }

    async fn blocking<T, F>(f: F) -> Result<T, SigcorrError>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T, SigcorrError> + Send + 'static,
    {
        tokio::task::spawn_blocking(f)
            .await
            .map_err(|e| SigcorrError::source_failure(SOURCE_NAME, e.to_string()))?
    }
}

#[async_trait]
impl DatasetSource for ParquetSource {
    fn name(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn instruments(&self) -> Result<Vec<String>, SigcorrError> {
        Ok(self.snapshot()?.instruments())
    }

    async fn categories(&self, instrument: &str) -> Result<Vec<String>, SigcorrError> {
        self.snapshot()?
            .categories(instrument)
            .ok_or_else(|| SigcorrError::not_found(format!("instrument {instrument}")))
    }

    async fn columns(&self, dataset: &DatasetRef) -> Result<Vec<String>, SigcorrError> {
        let (_, path) = self.dataset_path(dataset)?;
        Self::blocking(move || Ok(frame::column_names(&frame::read_frame(&path)?))).await
    }

    async fn series(&self, column: &ColumnRef) -> Result<Series, SigcorrError> {
        let (label, path) = self.dataset_path(&column.dataset())?;
        let ts_priority = self.config.timestamp_columns.clone();
        let value_column = column.column.clone();
        let (series, failures) = Self::blocking(move || {
            let df = frame::read_frame(&path)?;
            let ts_column = frame::pick_timestamp_column(&df, &ts_priority)
                .ok_or_else(|| SigcorrError::not_found(format!("timestamp column in {label}")))?;
            if df.column(&value_column).is_err() {
                return Err(SigcorrError::not_found(format!(
                    "column {value_column} in {label}"
                )));
            }
            frame::load_series(&df, ts_column, &value_column)
        })
        .await?;
        #[cfg(feature = "tracing")]
        if failures > 0 {
            tracing::debug!(column = %column, failures, "dropped values that failed to decode");
        }
        #[cfg(not(feature = "tracing"))]
        let _ = failures;
        Ok(series)
    }

    async fn timestamp_bounds(&self, dataset: &DatasetRef) -> Result<(i64, i64), SigcorrError> {
        let (label, path) = self.dataset_path(dataset)?;
        let ts_priority = self.config.timestamp_columns.clone();
        Self::blocking(move || {
            let df = frame::read_frame(&path)?;
            let ts_column = frame::pick_timestamp_column(&df, &ts_priority)
                .ok_or_else(|| SigcorrError::not_found(format!("timestamp column in {label}")))?;
            let ts = frame::timestamps_ns(&df, ts_column)?;
            let mut it = ts.into_iter().flatten();
            let first = it
                .next()
                .ok_or_else(|| SigcorrError::not_found(format!("timestamps in {label}")))?;
            Ok(it.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
        })
        .await
    }

    async fn refresh(&self) -> Result<(), SigcorrError> {
        let config = self.config.clone();
        let fresh = Self::blocking(move || scan_catalog(&config)).await?;
        let mut guard = self
            .snapshot
            .write()
            .map_err(|_| SigcorrError::source_failure(SOURCE_NAME, "catalog lock poisoned"))?;
        *guard = Arc::new(fresh);
        Ok(())
    }
}
