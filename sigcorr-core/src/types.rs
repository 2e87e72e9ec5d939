//! Re-export of foundational types from `sigcorr-types`.
// Consolidated re-exports so downstream crates can depend on `sigcorr-core` only

pub use sigcorr_types::{
    AnalysisReport, AnalysisRequest, AnalysisResponse, AnalysisWindow, CatalogConfig, ColumnRef,
    CorrelationResult, DEFAULT_TIMESTAMP_COLUMNS, DatasetRef, LinRegressResult, Method,
    MethodResult, NO_DATA_MESSAGE, SigcorrConfig, SigcorrError, TheilSenResult,
    TimeseriesRecord, TimestampRange, nanos_to_local_iso, parse_methods,
};
