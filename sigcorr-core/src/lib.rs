//! sigcorr-core
//!
//! Core types, algorithms, and the source trait shared across the sigcorr workspace.
//!
//! - `series`: timestamp-indexed sequences and aligned pairs.
//! - `timeseries`: temporal alignment and calendar windowing.
//! - `stats`: correlation and regression statistics.
//! - `analysis`: method dispatch with insufficient-data handling.
//! - `codec`: wire records and non-finite sanitization.
//! - `catalog`: immutable catalog snapshot with deterministic fuzzy lookup.
//! - `source`: the `DatasetSource` trait implemented by concrete backends.
#![warn(missing_docs)]

/// Method dispatch over aligned pairs.
pub mod analysis;
/// Catalog snapshot and name resolution.
pub mod catalog;
/// Transport-safe conversions.
pub mod codec;
/// Series and aligned pair types.
pub mod series;
mod source;
/// Statistics over equal-length finite samples.
pub mod stats;
/// Time-series alignment and windowing.
pub mod timeseries;
pub mod types;

pub use analysis::{analyze, analyze_all};
pub use catalog::{Catalog, resolve_name};
pub use codec::{sanitize_number, sanitize_result, to_records};
pub use series::{AlignedPair, Point, Series};
pub use source::DatasetSource;
pub use timeseries::align::align;
pub use timeseries::window::apply_window;
pub use types::*;
