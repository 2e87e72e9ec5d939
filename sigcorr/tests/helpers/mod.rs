// Re-export helpers so tests can `use crate::helpers::*;`
#![allow(dead_code)]

use std::sync::Arc;

pub use sigcorr_mock::fixtures::{HOUR_NS, JAN_2024_NS, TRADE_ROWS};
use sigcorr_mock::{MockDataset, MockSource};

use sigcorr::{ColumnRef, Sigcorr};

/// Orchestrator over the standard fixture catalog.
pub fn standard() -> Sigcorr {
    Sigcorr::builder()
        .with_source(Arc::new(MockSource::standard()))
        .build()
        .unwrap()
}

/// Orchestrator over a custom mock source.
pub fn with_source(source: MockSource) -> Sigcorr {
    Sigcorr::builder()
        .with_source(Arc::new(source))
        .build()
        .unwrap()
}

/// Single-column dataset helper.
pub fn one_column(name: &str, rows: &[(i64, f64)]) -> MockDataset {
    MockDataset::new().column(name, rows.to_vec())
}

pub fn col(instrument: &str, category: &str, column: &str) -> ColumnRef {
    ColumnRef::new(instrument, category, column)
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

pub fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}
