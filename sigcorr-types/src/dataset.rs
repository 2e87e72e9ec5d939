//! Logical references into the dataset catalog.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A (instrument, category) pair naming one backing dataset.
///
/// Both names are matched case-insensitively by substring against catalog
/// directory names, so `"btc"` selects a `BTCUSDT` instrument directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetRef {
    /// Instrument query (e.g. "BTC").
    pub instrument: String,
    /// Data category query (e.g. "trades", "funding").
    pub category: String,
}

impl DatasetRef {
    /// Build a dataset reference from instrument and category queries.
    pub fn new(instrument: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            instrument: instrument.into(),
            category: category.into(),
        }
    }

    /// Attach a column name to form a full [`ColumnRef`].
    #[must_use]
    pub fn column(&self, column: impl Into<String>) -> ColumnRef {
        ColumnRef {
            instrument: self.instrument.clone(),
            category: self.category.clone(),
            column: column.into(),
        }
    }
}

impl fmt::Display for DatasetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.instrument, self.category)
    }
}

/// A (instrument, category, column) triple naming one numeric signal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnRef {
    /// Instrument query.
    pub instrument: String,
    /// Data category query.
    pub category: String,
    /// Exact column name inside the resolved dataset.
    pub column: String,
}

impl ColumnRef {
    /// Build a column reference.
    pub fn new(
        instrument: impl Into<String>,
        category: impl Into<String>,
        column: impl Into<String>,
    ) -> Self {
        Self {
            instrument: instrument.into(),
            category: category.into(),
            column: column.into(),
        }
    }

    /// The dataset part of this reference.
    #[must_use]
    pub fn dataset(&self) -> DatasetRef {
        DatasetRef::new(self.instrument.clone(), self.category.clone())
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}:{}", self.instrument, self.category, self.column)
    }
}
