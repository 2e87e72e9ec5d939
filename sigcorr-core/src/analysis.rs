//! Method dispatch over an aligned pair.

use sigcorr_types::{
    CorrelationResult, LinRegressResult, Method, MethodResult, SigcorrConfig, TheilSenResult,
};

use crate::codec::sanitize_result;
use crate::series::AlignedPair;
use crate::stats;

/// Compute `method` over an aligned pair (target as `x`, comparison as `y`).
///
/// Pairs with a non-finite side are discarded first. When fewer than
/// `config.min_pairs` (and never fewer than 2) pairs remain, the all-`None`
/// tuple of the method's arity is returned without running the statistic.
/// Every returned slot is finite or `None`.
#[must_use]
pub fn analyze(method: Method, pair: &AlignedPair, config: &SigcorrConfig) -> MethodResult {
    let (x, y) = pair.finite_values();
    if x.len() < config.min_pairs.max(2) {
        return MethodResult::empty(method);
    }
    let raw = match method {
        Method::Pearson => {
            let (r, p) = stats::pearson(&x, &y);
            MethodResult::Correlation(CorrelationResult(r, p))
        }
        Method::Spearman => {
            let (r, p) = stats::spearman(&x, &y);
            MethodResult::Correlation(CorrelationResult(r, p))
        }
        Method::KendallTau => {
            let (t, p) = stats::kendall_tau(&x, &y);
            MethodResult::Correlation(CorrelationResult(t, p))
        }
        Method::LinRegress => {
            let (slope, intercept, r, p, se) = stats::linregress(&x, &y);
            MethodResult::LinRegress(LinRegressResult(slope, intercept, r, p, se))
        }
        Method::TheilSen => {
            let (slope, intercept, lo, hi) =
                stats::theil_sen(&x, &y, config.theil_sen_confidence);
            MethodResult::TheilSen(TheilSenResult(slope, intercept, lo, hi))
        }
    };
    sanitize_result(raw)
}

/// Compute every method in `methods` over the same pair, preserving order.
#[must_use]
pub fn analyze_all(
    methods: &[Method],
    pair: &AlignedPair,
    config: &SigcorrConfig,
) -> Vec<(Method, MethodResult)> {
    methods
        .iter()
        .map(|&m| (m, analyze(m, pair, config)))
        .collect()
}
