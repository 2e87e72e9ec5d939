//! Sigcorr measures how two timestamped signals move together, optionally
//! shifted against each other by a number of observations.
//!
//! Overview
//! - Resolves (instrument, category, column) references against a dataset
//!   catalog with case-insensitive substring matching.
//! - Loads each signal as a [`Series`] of finite values.
//! - Aligns every comparison against the target either on shared timestamps
//!   (offset 0) or by a lead/lag offset counted in observations.
//! - Computes Pearson, Spearman, Kendall tau-b, ordinary least squares and
//!   Theil–Sen statistics, replacing undefined values with `None`.
//!
//! Key behaviors and trade-offs
//! - Offsets count observations, not wall-clock time; irregular sampling is
//!   tolerated but a fixed offset may span different durations.
//! - Missing data is an outcome, not a failure: an unknown target yields
//!   [`AnalysisResponse::NoData`], an unknown comparison yields empty results
//!   for that comparison only.
//! - There is no cache; every request re-reads its datasets.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use sigcorr::{AnalysisRequest, ColumnRef, Method, Sigcorr};
//! use sigcorr_parquet::ParquetSource;
//!
//! let source = Arc::new(ParquetSource::builder().root("data").build()?);
//! let sigcorr = Sigcorr::builder().with_source(source).build()?;
//!
//! let req = AnalysisRequest::new(ColumnRef::new("btc", "trades", "price"))
//!     .comparison(ColumnRef::new("eth", "trades", "price"))
//!     .methods(&[Method::Pearson, Method::TheilSen])
//!     .offset(1);
//! let report = sigcorr.analyze(&req).await?;
//! ```
//!
//! See the `demos` crate for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod ops;

pub use core::{Sigcorr, SigcorrBuilder};

// Re-export core types for convenience
pub use sigcorr_core::{
    AlignedPair, AnalysisReport, AnalysisRequest, AnalysisResponse, AnalysisWindow, ColumnRef,
    CorrelationResult, DatasetRef, DatasetSource, LinRegressResult, Method, MethodResult,
    NO_DATA_MESSAGE, Point, Series, SigcorrConfig, SigcorrError, TheilSenResult,
    TimeseriesRecord, TimestampRange, parse_methods,
};
