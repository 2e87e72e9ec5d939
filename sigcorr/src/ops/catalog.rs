use std::collections::BTreeSet;

use sigcorr_core::{ColumnRef, DatasetRef, Method, SigcorrError, TimestampRange};

use crate::Sigcorr;
use crate::ops::util::absorb_not_found;

impl Sigcorr {
    /// Names of every supported analysis method, in wire form.
    #[must_use]
    pub fn analysis_methods() -> Vec<&'static str> {
        Method::ALL.iter().map(|m| m.as_str()).collect()
    }

    /// All instrument names in the catalog, sorted.
    ///
    /// # Errors
    /// Propagates source failures.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "sigcorr::list_instruments", skip(self))
    )]
    pub async fn list_instruments(&self) -> Result<Vec<String>, SigcorrError> {
        self.source.instruments().await
    }

    /// Category names under the instrument matching `instrument`, sorted.
    ///
    /// An instrument that does not resolve yields an empty list.
    ///
    /// # Errors
    /// Propagates source failures other than not-found.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "sigcorr::list_categories", skip(self))
    )]
    pub async fn list_categories(&self, instrument: &str) -> Result<Vec<String>, SigcorrError> {
        Ok(absorb_not_found(self.source.categories(instrument).await)?.unwrap_or_default())
    }

    /// Columns present in every (instrument, category) combination, sorted.
    ///
    /// The result is empty when either list is empty or when any combination
    /// fails to resolve.
    ///
    /// # Errors
    /// Propagates source failures other than not-found.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "sigcorr::intersect_columns",
            skip(self),
            fields(combinations = instruments.len() * categories.len()),
        )
    )]
    pub async fn intersect_columns(
        &self,
        instruments: &[String],
        categories: &[String],
    ) -> Result<Vec<String>, SigcorrError> {
        let datasets: Vec<DatasetRef> = instruments
            .iter()
            .flat_map(|i| categories.iter().map(move |c| DatasetRef::new(i, c)))
            .collect();
        let tasks = datasets.iter().map(|d| self.source.columns(d));
        let mut acc: Option<BTreeSet<String>> = None;
        for result in futures::future::join_all(tasks).await {
            let Some(cols) = absorb_not_found(result)? else {
                return Ok(Vec::new());
            };
            let cols: BTreeSet<String> = cols.into_iter().collect();
            acc = Some(match acc {
                None => cols,
                Some(prev) => prev.intersection(&cols).cloned().collect(),
            });
        }
        Ok(acc.map(|s| s.into_iter().collect()).unwrap_or_default())
    }

    /// Earliest and latest timestamp of a dataset with local-time renderings.
    ///
    /// `None` when the dataset or its timestamp column does not exist.
    ///
    /// # Errors
    /// Propagates source failures other than not-found.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "sigcorr::timestamp_range", skip(self))
    )]
    pub async fn timestamp_range(
        &self,
        instrument: &str,
        category: &str,
    ) -> Result<Option<TimestampRange>, SigcorrError> {
        let dataset = DatasetRef::new(instrument, category);
        let bounds = absorb_not_found(self.source.timestamp_bounds(&dataset).await)?;
        Ok(bounds.map(|(min, max)| TimestampRange::from_bounds(min, max)))
    }

    /// Expand instrument × category × column lists into explicit comparisons.
    ///
    /// Combinations are visited in input order; a column is kept only where
    /// the resolved dataset actually has it, and datasets that do not resolve
    /// are skipped.
    ///
    /// # Errors
    /// Propagates source failures other than not-found.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "sigcorr::comparisons_from_product", skip(self))
    )]
    pub async fn comparisons_from_product(
        &self,
        instruments: &[String],
        categories: &[String],
        columns: &[String],
    ) -> Result<Vec<ColumnRef>, SigcorrError> {
        let mut out = Vec::new();
        for instrument in instruments {
            for category in categories {
                let dataset = DatasetRef::new(instrument, category);
                let Some(present) = absorb_not_found(self.source.columns(&dataset).await)? else {
                    continue;
                };
                out.extend(
                    columns
                        .iter()
                        .filter(|c| present.contains(c))
                        .map(|c| dataset.column(c)),
                );
            }
        }
        Ok(out)
    }
}
