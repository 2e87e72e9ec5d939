//! Immutable instrument → category snapshot with fuzzy name resolution.
//!
//! Names are matched case-insensitively by substring. When several names
//! contain the query, the shortest wins and ties fall back to lexicographic
//! order, so resolution never depends on directory listing order.

use std::collections::BTreeMap;

use sigcorr_types::DatasetRef;

/// Pick the name matching `query` under the fuzzy policy.
///
/// Returns `None` when no name contains the query (case-insensitive).
///
/// ```
/// use sigcorr_core::catalog::resolve_name;
///
/// let names = ["ETHUSDT", "BTCUSDT", "BTC"];
/// assert_eq!(resolve_name("btc", names), Some("BTC"));
/// assert_eq!(resolve_name("usdt", names), Some("BTCUSDT"));
/// assert_eq!(resolve_name("sol", names), None);
/// ```
pub fn resolve_name<'a, I>(query: &str, names: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = query.to_lowercase();
    let hits: Vec<&'a str> = names
        .into_iter()
        .filter(|n| n.to_lowercase().contains(&needle))
        .collect();
    let best = hits
        .iter()
        .copied()
        .min_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)))?;
    #[cfg(feature = "tracing")]
    if hits.len() > 1 {
        tracing::debug!(query, chosen = best, candidates = hits.len(), "ambiguous catalog match");
    }
    Some(best)
}

/// Snapshot of the catalog: instrument name → category name → entry.
///
/// `E` is whatever a source needs to load the dataset (a file path for the
/// Parquet source, an in-memory table for the mock).
#[derive(Debug, Clone)]
pub struct Catalog<E> {
    instruments: BTreeMap<String, BTreeMap<String, E>>,
}

impl<E> Default for Catalog<E> {
    fn default() -> Self {
        Self {
            instruments: BTreeMap::new(),
        }
    }
}

impl<E> Catalog<E> {
    /// An empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an instrument with no categories yet.
    pub fn add_instrument(&mut self, instrument: impl Into<String>) {
        self.instruments.entry(instrument.into()).or_default();
    }

    /// Register (or replace) the entry for `instrument/category`.
    pub fn insert(&mut self, instrument: impl Into<String>, category: impl Into<String>, entry: E) {
        self.instruments
            .entry(instrument.into())
            .or_default()
            .insert(category.into(), entry);
    }

    /// Every instrument name, sorted.
    #[must_use]
    pub fn instruments(&self) -> Vec<String> {
        self.instruments.keys().cloned().collect()
    }

    /// Resolve an instrument query to its canonical name.
    #[must_use]
    pub fn resolve_instrument(&self, query: &str) -> Option<&str> {
        resolve_name(query, self.instruments.keys().map(String::as_str))
    }

    /// Category names under the instrument matching `query`, sorted.
    ///
    /// `None` when the instrument does not resolve.
    #[must_use]
    pub fn categories(&self, query: &str) -> Option<Vec<String>> {
        let name = self.resolve_instrument(query)?;
        self.instruments.get(name).map(|c| c.keys().cloned().collect())
    }

    /// Resolve a dataset reference to `(instrument, category, entry)`.
    #[must_use]
    pub fn resolve(&self, dataset: &DatasetRef) -> Option<(&str, &str, &E)> {
        let (inst, cats) = self.lookup(&dataset.instrument)?;
        let cat = resolve_name(&dataset.category, cats.keys().map(String::as_str))?;
        let (cat, entry) = cats.get_key_value(cat)?;
        Some((inst, cat.as_str(), entry))
    }

    /// Number of (instrument, category) datasets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instruments.values().map(BTreeMap::len).sum()
    }

    /// True when the catalog holds no datasets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, query: &str) -> Option<(&str, &BTreeMap<String, E>)> {
        let name = self.resolve_instrument(query)?;
        self.instruments
            .get_key_value(name)
            .map(|(k, v)| (k.as_str(), v))
    }
}
