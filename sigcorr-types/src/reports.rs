//! Request and response envelopes for the analysis operations.

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};

use crate::dataset::ColumnRef;
use crate::error::SigcorrError;
use crate::method::Method;
use crate::records::{
    CorrelationResult, LinRegressResult, MethodResult, TheilSenResult, TimeseriesRecord,
};
use crate::window::AnalysisWindow;

/// A correlation analysis request: one target signal against many comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    /// Signal every comparison is measured against.
    pub target: ColumnRef,
    /// Comparison signals; results are reported in this order.
    pub comparisons: Vec<ColumnRef>,
    /// Methods to compute. Empty computes none unless defaults were opted into.
    #[serde(default)]
    pub methods: Vec<Method>,
    /// Calendar window applied to all series. `None` keeps the whole history.
    #[serde(default)]
    pub window: Option<AnalysisWindow>,
    /// Lead/lag offset in observations (0 = simultaneous timestamps only).
    #[serde(default)]
    pub offset: i64,
}

impl AnalysisRequest {
    /// Start a request for `target` with no comparisons and default settings.
    #[must_use]
    pub const fn new(target: ColumnRef) -> Self {
        Self {
            target,
            comparisons: Vec::new(),
            methods: Vec::new(),
            window: None,
            offset: 0,
        }
    }

    /// Append a comparison signal.
    #[must_use]
    pub fn comparison(mut self, c: ColumnRef) -> Self {
        self.comparisons.push(c);
        self
    }

    /// Append several comparison signals.
    #[must_use]
    pub fn comparisons<I>(mut self, cs: I) -> Self
    where
        I: IntoIterator<Item = ColumnRef>,
    {
        self.comparisons.extend(cs);
        self
    }

    /// Replace the requested methods.
    #[must_use]
    pub fn methods(mut self, methods: &[Method]) -> Self {
        self.methods = methods.to_vec();
        self
    }

    /// Restrict the analysis to a calendar window.
    #[must_use]
    pub const fn window(mut self, window: AnalysisWindow) -> Self {
        self.window = Some(window);
        self
    }

    /// Set the lead/lag offset.
    #[must_use]
    pub const fn offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }
}

/// Input series and per-method results of a completed analysis.
///
/// Each `*_results` field is present only when its method was requested and
/// holds one tuple per comparison, in request order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Target series after windowing.
    pub target_series: Vec<TimeseriesRecord>,
    /// Comparison series after windowing, in request order.
    pub comparison_series: Vec<Vec<TimeseriesRecord>>,
    /// Pearson tuples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pearson_results: Option<Vec<CorrelationResult>>,
    /// Spearman tuples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spearman_results: Option<Vec<CorrelationResult>>,
    /// Kendall tuples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kendalltau_results: Option<Vec<CorrelationResult>>,
    /// Linear regression tuples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linregress_results: Option<Vec<LinRegressResult>>,
    /// Theil–Sen tuples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theilslopes_results: Option<Vec<TheilSenResult>>,
    /// Non-fatal issues (e.g. comparisons that did not resolve).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<SigcorrError>,
}

impl AnalysisReport {
    /// Create an empty results array for each requested method.
    #[must_use]
    pub fn with_methods(methods: &[Method]) -> Self {
        let mut r = Self::default();
        for m in methods {
            match m {
                Method::Pearson => r.pearson_results = Some(Vec::new()),
                Method::Spearman => r.spearman_results = Some(Vec::new()),
                Method::KendallTau => r.kendalltau_results = Some(Vec::new()),
                Method::LinRegress => r.linregress_results = Some(Vec::new()),
                Method::TheilSen => r.theilslopes_results = Some(Vec::new()),
            }
        }
        r
    }

    /// Append one result to the array of its method.
    ///
    /// Results whose shape does not match `method` are ignored.
    pub fn push(&mut self, method: Method, result: MethodResult) {
        match (method, result) {
            (Method::Pearson, MethodResult::Correlation(c)) => {
                self.pearson_results.get_or_insert_with(Vec::new).push(c);
            }
            (Method::Spearman, MethodResult::Correlation(c)) => {
                self.spearman_results.get_or_insert_with(Vec::new).push(c);
            }
            (Method::KendallTau, MethodResult::Correlation(c)) => {
                self.kendalltau_results.get_or_insert_with(Vec::new).push(c);
            }
            (Method::LinRegress, MethodResult::LinRegress(l)) => {
                self.linregress_results.get_or_insert_with(Vec::new).push(l);
            }
            (Method::TheilSen, MethodResult::TheilSen(t)) => {
                self.theilslopes_results.get_or_insert_with(Vec::new).push(t);
            }
            _ => {}
        }
    }

    /// Results of `method` as generic tuples, if the method was requested.
    #[must_use]
    pub fn results(&self, method: Method) -> Option<Vec<MethodResult>> {
        match method {
            Method::Pearson => self
                .pearson_results
                .as_ref()
                .map(|v| v.iter().copied().map(MethodResult::Correlation).collect()),
            Method::Spearman => self
                .spearman_results
                .as_ref()
                .map(|v| v.iter().copied().map(MethodResult::Correlation).collect()),
            Method::KendallTau => self
                .kendalltau_results
                .as_ref()
                .map(|v| v.iter().copied().map(MethodResult::Correlation).collect()),
            Method::LinRegress => self
                .linregress_results
                .as_ref()
                .map(|v| v.iter().copied().map(MethodResult::LinRegress).collect()),
            Method::TheilSen => self
                .theilslopes_results
                .as_ref()
                .map(|v| v.iter().copied().map(MethodResult::TheilSen).collect()),
        }
    }
}

/// Message carried by [`AnalysisResponse::NoData`].
pub const NO_DATA_MESSAGE: &str = "No data found for the selected instruments/columns";

/// Transport-level outcome of an analysis request.
///
/// `NoData` and `Failed` both serialize as `{"error": "..."}`. On the way back
/// an error payload equal to [`NO_DATA_MESSAGE`] reads as `NoData` and any
/// other message as `Failed`, so build `NoData` with [`Self::no_data`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    /// Analysis completed.
    Report(AnalysisReport),
    /// Target or every comparison failed to resolve.
    NoData {
        /// Human-readable explanation.
        error: String,
    },
    /// Unexpected failure; no partial results are returned.
    Failed {
        /// Generic error message.
        error: String,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ResponseWire {
    Error { error: String },
    Report(AnalysisReport),
}

impl<'de> Deserialize<'de> for AnalysisResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match ResponseWire::deserialize(deserializer)? {
            ResponseWire::Report(r) => Self::Report(r),
            ResponseWire::Error { error } if error == NO_DATA_MESSAGE => Self::NoData { error },
            ResponseWire::Error { error } => Self::Failed { error },
        })
    }
}

impl AnalysisResponse {
    /// The not-found outcome with its fixed message.
    #[must_use]
    pub fn no_data() -> Self {
        Self::NoData {
            error: NO_DATA_MESSAGE.to_string(),
        }
    }

    /// A generic failure.
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    /// The report, if the analysis completed.
    #[must_use]
    pub const fn report(&self) -> Option<&AnalysisReport> {
        match self {
            Self::Report(r) => Some(r),
            _ => None,
        }
    }
}

/// Earliest and latest timestamp of a dataset, with local-time renderings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimestampRange {
    /// Earliest timestamp, nanoseconds since the epoch.
    pub min: i64,
    /// Latest timestamp, nanoseconds since the epoch.
    pub max: i64,
    /// `min` as local ISO-8601 calendar time.
    pub min_iso: String,
    /// `max` as local ISO-8601 calendar time.
    pub max_iso: String,
}

impl TimestampRange {
    /// Build a range from nanosecond bounds, rendering both in local time.
    #[must_use]
    pub fn from_bounds(min: i64, max: i64) -> Self {
        Self {
            min,
            max,
            min_iso: nanos_to_local_iso(min),
            max_iso: nanos_to_local_iso(max),
        }
    }
}

/// Render nanoseconds since the epoch as local ISO-8601 time without offset.
///
/// Fractional seconds are printed only when non-zero.
#[must_use]
pub fn nanos_to_local_iso(ns: i64) -> String {
    let dt: DateTime<Local> = DateTime::from_timestamp_nanos(ns).with_timezone(&Local);
    dt.naive_local().format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}
