//! sigcorr-mock
//!
//! In-memory [`DatasetSource`] for CI-safe tests and demos. Datasets are
//! registered through [`MockSourceBuilder`]; [`MockSource::standard`] ships a
//! deterministic fixture catalog.
//!
//! Two instrument names are reserved to exercise failure paths:
//! `FAIL` makes every lookup return a `Source` error and `PANIC` panics
//! inside `series`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use sigcorr_core::{Catalog, ColumnRef, DatasetRef, DatasetSource, Series, SigcorrError};

/// Deterministic fixture datasets.
pub mod fixtures;

const NAME: &str = "sigcorr-mock";

/// One in-memory dataset: column name → raw `(timestamp, value)` rows.
///
/// Rows may be unsorted, repeat timestamps or hold non-finite values; the
/// usual [`Series`] construction rules apply when a column is loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockDataset {
    columns: BTreeMap<String, Vec<(i64, f64)>>,
}

impl MockDataset {
    /// A dataset without columns (and therefore without timestamps).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a column.
    #[must_use]
    pub fn column(mut self, name: impl Into<String>, rows: Vec<(i64, f64)>) -> Self {
        self.columns.insert(name.into(), rows);
        self
    }

    fn bounds(&self) -> Option<(i64, i64)> {
        let mut ts = self.columns.values().flatten().map(|(t, _)| *t);
        let first = ts.next()?;
        Some(ts.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
    }
}

/// Builder for [`MockSource`].
#[derive(Debug, Clone, Default)]
pub struct MockSourceBuilder {
    catalog: Catalog<MockDataset>,
}

impl MockSourceBuilder {
    /// An empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `instrument/category`.
    #[must_use]
    pub fn dataset(
        mut self,
        instrument: impl Into<String>,
        category: impl Into<String>,
        dataset: MockDataset,
    ) -> Self {
        self.catalog.insert(instrument, category, dataset);
        self
    }

    /// Register an instrument with no categories.
    #[must_use]
    pub fn instrument(mut self, instrument: impl Into<String>) -> Self {
        self.catalog.add_instrument(instrument);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> MockSource {
        MockSource {
            catalog: self.catalog,
        }
    }
}

/// Mock dataset source backed by an in-memory catalog.
#[derive(Debug, Clone)]
pub struct MockSource {
    catalog: Catalog<MockDataset>,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::standard()
    }
}

impl MockSource {
    /// Start an empty builder.
    #[must_use]
    pub fn builder() -> MockSourceBuilder {
        MockSourceBuilder::new()
    }

    /// The standard fixture catalog (see [`fixtures`]).
    #[must_use]
    pub fn standard() -> Self {
        fixtures::standard().build()
    }

    fn check_sentinel(instrument: &str) -> Result<(), SigcorrError> {
        if instrument.eq_ignore_ascii_case("FAIL") {
            return Err(SigcorrError::source_failure(NAME, "forced failure"));
        }
        Ok(())
    }

    fn dataset(&self, dataset: &DatasetRef) -> Result<&MockDataset, SigcorrError> {
        Self::check_sentinel(&dataset.instrument)?;
        self.catalog
            .resolve(dataset)
            .map(|(_, _, d)| d)
            .ok_or_else(|| SigcorrError::not_found(format!("dataset {dataset}")))
    }
}

#[async_trait]
impl DatasetSource for MockSource {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn instruments(&self) -> Result<Vec<String>, SigcorrError> {
        Ok(self.catalog.instruments())
    }

    async fn categories(&self, instrument: &str) -> Result<Vec<String>, SigcorrError> {
        Self::check_sentinel(instrument)?;
        self.catalog
            .categories(instrument)
            .ok_or_else(|| SigcorrError::not_found(format!("instrument {instrument}")))
    }

    async fn columns(&self, dataset: &DatasetRef) -> Result<Vec<String>, SigcorrError> {
        Ok(self.dataset(dataset)?.columns.keys().cloned().collect())
    }

    async fn series(&self, column: &ColumnRef) -> Result<Series, SigcorrError> {
        assert!(
            !column.instrument.eq_ignore_ascii_case("PANIC"),
            "forced panic while loading {column}"
        );
        let dataset = self.dataset(&column.dataset())?;
        let rows = dataset
            .columns
            .get(&column.column)
            .ok_or_else(|| SigcorrError::not_found(format!("column {column}")))?;
        Ok(Series::from_pairs(rows.iter().copied()))
    }

    async fn timestamp_bounds(&self, dataset: &DatasetRef) -> Result<(i64, i64), SigcorrError> {
        self.dataset(dataset)?
            .bounds()
            .ok_or_else(|| SigcorrError::not_found(format!("timestamps in {dataset}")))
    }
}
