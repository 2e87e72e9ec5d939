//! Sigcorr-specific data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod dataset;
mod records;
mod reports;
mod window;

/// Unified error type.
pub mod error;
/// Closed enumeration of analysis methods.
pub mod method;

pub use config::{CatalogConfig, DEFAULT_TIMESTAMP_COLUMNS, SigcorrConfig};
pub use dataset::{ColumnRef, DatasetRef};
pub use error::SigcorrError;
pub use method::{Method, parse_methods};
pub use records::{
    CorrelationResult, LinRegressResult, MethodResult, TheilSenResult, TimeseriesRecord,
};
pub use reports::{
    AnalysisReport, AnalysisRequest, AnalysisResponse, NO_DATA_MESSAGE, TimestampRange,
    nanos_to_local_iso,
};
pub use window::AnalysisWindow;
