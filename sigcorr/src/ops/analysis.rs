use sigcorr_core::{
    AnalysisReport, AnalysisRequest, AnalysisResponse, ColumnRef, MethodResult, Series,
    SigcorrError, align, analyze_all, apply_window, to_records,
};

use crate::Sigcorr;
use crate::ops::util::{absorb_not_found, effective_methods};

impl Sigcorr {
    /// Run a correlation analysis.
    ///
    /// Steps: validate the window, load the target and every comparison
    /// concurrently, restrict all series to the window, align each comparison
    /// against the target at the request offset and compute every requested
    /// method. A request naming no methods falls back to the opt-in
    /// `default_methods`, which are empty unless configured.
    ///
    /// Comparisons that do not resolve contribute an empty series and
    /// all-`None` tuples, plus a warning, so outputs stay positionally aligned
    /// with the request.
    ///
    /// # Errors
    /// - `NotFound` when the target, or every comparison, does not resolve.
    /// - `InvalidArg` for a malformed window.
    /// - Any non-not-found source failure.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "sigcorr::analyze",
            skip(self, req),
            fields(
                target = %req.target,
                comparisons = req.comparisons.len(),
                offset = req.offset,
            ),
        )
    )]
    pub async fn analyze(&self, req: &AnalysisRequest) -> Result<AnalysisReport, SigcorrError> {
        if let Some(w) = &req.window {
            w.bounds_ns()?;
        }
        let methods = effective_methods(&req.methods, &self.cfg.default_methods);

        let target = self.source.series(&req.target).await?;
        let loads = req.comparisons.iter().map(|c| self.source.series(c));
        let mut comparisons: Vec<Option<Series>> = Vec::with_capacity(req.comparisons.len());
        for result in futures::future::join_all(loads).await {
            comparisons.push(absorb_not_found(result)?);
        }
        if comparisons.iter().all(Option::is_none) {
            return Err(SigcorrError::not_found(format!(
                "no comparison resolved for target {}",
                req.target
            )));
        }

        let window = req.window.as_ref();
        let target = apply_window(target, window)?;
        let mut report = AnalysisReport::with_methods(&methods);
        report.target_series = to_records(&target);

        for (comparison, loaded) in req.comparisons.iter().zip(comparisons) {
            let Some(series) = loaded else {
                report.warnings.push(unresolved(comparison));
                report.comparison_series.push(Vec::new());
                for &m in &methods {
                    report.push(m, MethodResult::empty(m));
                }
                continue;
            };
            let series = apply_window(series, window)?;
            let pair = align(&target, &series, req.offset);
            #[cfg(feature = "tracing")]
            tracing::debug!(comparison = %comparison, aligned = pair.len(), "aligned comparison");
            report.comparison_series.push(to_records(&series));
            for (m, result) in analyze_all(&methods, &pair, &self.cfg) {
                report.push(m, result);
            }
        }
        Ok(report)
    }

    /// Run an analysis at the request boundary.
    ///
    /// The analysis runs on its own Tokio task so a panic is contained and
    /// reported like any other unexpected failure:
    /// - success → [`AnalysisResponse::Report`];
    /// - not-found → [`AnalysisResponse::NoData`];
    /// - anything else → [`AnalysisResponse::Failed`], logged at error level
    ///   together with the panic payload when the task panicked.
    ///
    /// Must be called from within a Tokio runtime.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "sigcorr::respond", skip(self, req))
    )]
    pub async fn respond(&self, req: AnalysisRequest) -> AnalysisResponse {
        let this = self.clone();
        let task = tokio::spawn(async move { this.analyze(&req).await });
        match task.await {
            Ok(Ok(report)) => AnalysisResponse::Report(report),
            Ok(Err(e)) if e.is_not_found() => {
                #[cfg(feature = "tracing")]
                tracing::info!(reason = %e, "analysis found no data");
                AnalysisResponse::no_data()
            }
            Ok(Err(e)) => {
                #[cfg(feature = "tracing")]
                tracing::error!(error = %e, details = ?e, "analysis failed");
                AnalysisResponse::failed(format!("analysis failed: {e}"))
            }
            Err(join) => {
                #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
                let detail = join_failure_detail(join);
                #[cfg(feature = "tracing")]
                tracing::error!(panic = %detail, "analysis task aborted");
                AnalysisResponse::failed("analysis failed: internal error")
            }
        }
    }
}

fn unresolved(comparison: &ColumnRef) -> SigcorrError {
    #[cfg(feature = "tracing")]
    tracing::warn!(comparison = %comparison, "comparison did not resolve; reporting empty results");
    SigcorrError::not_found(format!("comparison {comparison}"))
}

/// Panic payload of an aborted analysis task, or the join error itself.
fn join_failure_detail(join: tokio::task::JoinError) -> String {
    if !join.is_panic() {
        return join.to_string();
    }
    let payload = join.into_panic();
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}
