use crate::helpers::*;
use sigcorr::{AnalysisRequest, CorrelationResult, LinRegressResult, Method, SigcorrError};

#[tokio::test]
async fn unresolved_comparison_keeps_positions_and_warns() {
    let sc = standard();
    let req = AnalysisRequest::new(col("TOY", "example", "a"))
        .comparison(col("NOPE", "example", "b"))
        .comparison(col("TOY", "example", "b"))
        .comparison(col("TOY", "example", "missing-column"))
        .methods(&[Method::Pearson, Method::LinRegress]);
    let report = sc.analyze(&req).await.unwrap();

    assert_eq!(report.comparison_series.len(), 3);
    assert!(report.comparison_series[0].is_empty());
    assert_eq!(report.comparison_series[1].len(), 3);
    assert!(report.comparison_series[2].is_empty());

    let pearson = report.pearson_results.as_ref().unwrap();
    assert_eq!(pearson[0], CorrelationResult(None, None));
    assert!(close(pearson[1].statistic().unwrap(), 1.0, 1e-12));
    assert_eq!(pearson[2], CorrelationResult(None, None));

    let lin = report.linregress_results.as_ref().unwrap();
    assert_eq!(lin[0], LinRegressResult::default());
    assert_eq!(lin[2], LinRegressResult::default());

    assert_eq!(report.warnings.len(), 2);
    assert!(report.warnings.iter().all(SigcorrError::is_not_found));
}

#[tokio::test]
async fn missing_target_is_not_found() {
    let sc = standard();
    let req = AnalysisRequest::new(col("NOPE", "trades", "price"))
        .comparison(col("BTCUSDT", "trades", "price"));
    let err = sc.analyze(&req).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn every_comparison_missing_is_not_found() {
    let sc = standard();
    let req = AnalysisRequest::new(col("BTCUSDT", "trades", "price"))
        .comparison(col("NOPE", "trades", "price"))
        .comparison(col("BTCUSDT", "trades", "nothing"));
    let err = sc.analyze(&req).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn no_comparisons_is_not_found() {
    let sc = standard();
    let req = AnalysisRequest::new(col("BTCUSDT", "trades", "price"));
    assert!(sc.analyze(&req).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn source_failure_propagates() {
    let sc = standard();
    let req = AnalysisRequest::new(col("BTCUSDT", "trades", "price"))
        .comparison(col("FAIL", "trades", "price"));
    let err = sc.analyze(&req).await.unwrap_err();
    assert!(matches!(err, SigcorrError::Source { .. }), "got {err:?}");
}
