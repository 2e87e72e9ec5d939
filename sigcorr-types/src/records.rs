//! Wire records and per-method result tuples.
//!
//! Result tuples serialize as fixed-arity JSON arrays whose slots are `null`
//! when the statistic is undefined for the input.

use serde::{Deserialize, Serialize};

use crate::method::Method;

/// One (timestamp, value) entry of a series in its wire form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeseriesRecord {
    /// Nanoseconds since the Unix epoch.
    pub timestamp: i64,
    /// Finite observation value.
    pub value: f64,
}

/// `(statistic, p-value)` for Pearson, Spearman and Kendall.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CorrelationResult(pub Option<f64>, pub Option<f64>);

impl CorrelationResult {
    /// Correlation coefficient.
    #[must_use]
    pub const fn statistic(&self) -> Option<f64> {
        self.0
    }
    /// Two-sided p-value.
    #[must_use]
    pub const fn pvalue(&self) -> Option<f64> {
        self.1
    }
}

/// `(slope, intercept, r-value, p-value, stderr)` of an ordinary least-squares fit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LinRegressResult(
    pub Option<f64>,
    pub Option<f64>,
    pub Option<f64>,
    pub Option<f64>,
    pub Option<f64>,
);

impl LinRegressResult {
    /// Fitted slope.
    #[must_use]
    pub const fn slope(&self) -> Option<f64> {
        self.0
    }
    /// Fitted intercept.
    #[must_use]
    pub const fn intercept(&self) -> Option<f64> {
        self.1
    }
    /// Pearson r of the fit.
    #[must_use]
    pub const fn rvalue(&self) -> Option<f64> {
        self.2
    }
    /// Two-sided p-value for a zero slope.
    #[must_use]
    pub const fn pvalue(&self) -> Option<f64> {
        self.3
    }
    /// Standard error of the slope.
    #[must_use]
    pub const fn stderr(&self) -> Option<f64> {
        self.4
    }
}

/// `(slope, intercept, low-slope, high-slope)` of a Theil–Sen fit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TheilSenResult(
    pub Option<f64>,
    pub Option<f64>,
    pub Option<f64>,
    pub Option<f64>,
);

impl TheilSenResult {
    /// Median pairwise slope.
    #[must_use]
    pub const fn slope(&self) -> Option<f64> {
        self.0
    }
    /// Intercept through the medians.
    #[must_use]
    pub const fn intercept(&self) -> Option<f64> {
        self.1
    }
    /// Lower confidence bound of the slope.
    #[must_use]
    pub const fn low_slope(&self) -> Option<f64> {
        self.2
    }
    /// Upper confidence bound of the slope.
    #[must_use]
    pub const fn high_slope(&self) -> Option<f64> {
        self.3
    }
}

/// Result of one method over one aligned pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MethodResult {
    /// Pearson, Spearman or Kendall output.
    Correlation(CorrelationResult),
    /// Linear regression output.
    LinRegress(LinRegressResult),
    /// Theil–Sen output.
    TheilSen(TheilSenResult),
}

impl MethodResult {
    /// The all-`None` tuple of the correct arity for `method`.
    #[must_use]
    pub fn empty(method: Method) -> Self {
        match method {
            Method::Pearson | Method::Spearman | Method::KendallTau => {
                Self::Correlation(CorrelationResult::default())
            }
            Method::LinRegress => Self::LinRegress(LinRegressResult::default()),
            Method::TheilSen => Self::TheilSen(TheilSenResult::default()),
        }
    }

    /// Tuple slots in order.
    #[must_use]
    pub fn values(&self) -> Vec<Option<f64>> {
        match *self {
            Self::Correlation(CorrelationResult(a, b)) => vec![a, b],
            Self::LinRegress(LinRegressResult(a, b, c, d, e)) => vec![a, b, c, d, e],
            Self::TheilSen(TheilSenResult(a, b, c, d)) => vec![a, b, c, d],
        }
    }

    /// True when every slot is `None`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values().iter().all(Option::is_none)
    }

    /// Apply `f` to every slot, preserving the tuple shape.
    #[must_use]
    pub fn map_values<F>(self, mut f: F) -> Self
    where
        F: FnMut(Option<f64>) -> Option<f64>,
    {
        match self {
            Self::Correlation(CorrelationResult(a, b)) => {
                Self::Correlation(CorrelationResult(f(a), f(b)))
            }
            Self::LinRegress(LinRegressResult(a, b, c, d, e)) => {
                Self::LinRegress(LinRegressResult(f(a), f(b), f(c), f(d), f(e)))
            }
            Self::TheilSen(TheilSenResult(a, b, c, d)) => {
                Self::TheilSen(TheilSenResult(f(a), f(b), f(c), f(d)))
            }
        }
    }
}
