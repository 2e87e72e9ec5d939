use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the sigcorr workspace.
///
/// Not-found conditions are expected outcomes (a fuzzy lookup matched nothing)
/// and are absorbed by the orchestrator into "no data" responses. Everything
/// else surfaces at the request boundary as a generic failure.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SigcorrError {
    /// No dataset, column, or timestamp range matched the query.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "column price in btc/trades".
        what: String,
    },

    /// Invalid input argument (malformed window, unknown method name, ...).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with the loaded data (unsupported column type, corrupt values, ...).
    #[error("data issue: {0}")]
    Data(String),

    /// A dataset source failed while serving a request.
    #[error("{source_name} failed: {msg}")]
    Source {
        /// Source name that failed.
        source_name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The dataset catalog could not be built or violates its invariants.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl SigcorrError {
    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source_failure(source_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            source_name: source_name.into(),
            msg: msg.into(),
        }
    }

    /// Returns true for the benign not-found condition.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if this error should be surfaced to operators as actionable.
    ///
    /// Not-found outcomes are part of normal fuzzy lookup and are not actionable.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !self.is_not_found()
    }
}
