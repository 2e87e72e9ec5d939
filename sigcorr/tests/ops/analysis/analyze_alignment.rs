use crate::helpers::*;
use sigcorr::{AnalysisRequest, Method};

#[tokio::test]
async fn simultaneous_offset_pairs_shared_timestamps() {
    let sc = standard();
    let req = AnalysisRequest::new(col("TOY", "example", "a"))
        .comparison(col("TOY", "example", "b"))
        .methods(&[Method::Pearson, Method::LinRegress]);
    let report = sc.analyze(&req).await.unwrap();

    let pearson = report.pearson_results.as_ref().unwrap();
    assert_eq!(pearson.len(), 1);
    assert!(close(pearson[0].statistic().unwrap(), 1.0, 1e-12));
    assert!(close(pearson[0].pvalue().unwrap(), 0.0, 1e-6));

    let lin = report.linregress_results.as_ref().unwrap();
    assert!(close(lin[0].slope().unwrap(), 10.0, 1e-9));
    assert!(close(lin[0].intercept().unwrap(), 0.0, 1e-9));

    assert!(report.spearman_results.is_none());
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn positive_offset_leads_comparison_by_observations() {
    let sc = standard();
    let req = AnalysisRequest::new(col("TOY", "example", "a"))
        .comparison(col("TOY", "example", "b"))
        .methods(&[Method::Pearson, Method::LinRegress])
        .offset(1);
    let report = sc.analyze(&req).await.unwrap();

    // pairs (1, 20) and (2, 30): two points always fit exactly
    let pearson = report.pearson_results.as_ref().unwrap();
    assert!(close(pearson[0].statistic().unwrap(), 1.0, 1e-12));
    assert_eq!(pearson[0].pvalue(), Some(1.0));

    let lin = report.linregress_results.as_ref().unwrap();
    assert!(close(lin[0].slope().unwrap(), 10.0, 1e-9));
    assert!(close(lin[0].intercept().unwrap(), 10.0, 1e-9));
}

#[tokio::test]
async fn offset_beyond_series_length_yields_empty_tuples() {
    let sc = standard();
    let req = AnalysisRequest::new(col("TOY", "example", "a"))
        .comparison(col("TOY", "example", "b"))
        .methods(&[Method::Pearson, Method::TheilSen])
        .offset(5);
    let report = sc.analyze(&req).await.unwrap();
    assert_eq!(
        report.pearson_results.as_deref(),
        Some(&[sigcorr::CorrelationResult(None, None)][..])
    );
    assert_eq!(
        report.theilslopes_results.as_deref(),
        Some(&[sigcorr::TheilSenResult(None, None, None, None)][..])
    );
}

#[tokio::test]
async fn eth_tracks_btc_one_hour_later() {
    let sc = standard();
    let req = AnalysisRequest::new(col("btc", "trades", "price"))
        .comparison(col("eth", "trades", "price"))
        .methods(&[Method::Pearson])
        .offset(1);
    let report = sc.analyze(&req).await.unwrap();
    let r = report.pearson_results.as_ref().unwrap()[0].statistic().unwrap();
    assert!(close(r, 1.0, 1e-9), "lagged correlation was {r}");

    let simultaneous = AnalysisRequest::new(col("btc", "trades", "price"))
        .comparison(col("eth", "trades", "price"))
        .methods(&[Method::Pearson]);
    let report = sc.analyze(&simultaneous).await.unwrap();
    let r0 = report.pearson_results.as_ref().unwrap()[0].statistic().unwrap();
    assert!(r0 < r, "simultaneous {r0} should be weaker than lagged {r}");
}

#[tokio::test]
async fn series_are_echoed_after_loading() {
    let sc = standard();
    let req = AnalysisRequest::new(col("TOY", "example", "a"))
        .comparison(col("TOY", "example", "b"))
        .comparison(col("BTCUSDT", "trades", "volume"))
        .methods(&[Method::Pearson]);
    let report = sc.analyze(&req).await.unwrap();

    let target: Vec<(i64, f64)> = report
        .target_series
        .iter()
        .map(|r| (r.timestamp, r.value))
        .collect();
    assert_eq!(target, vec![(100, 1.0), (200, 2.0), (300, 3.0)]);
    assert_eq!(report.comparison_series.len(), 2);
    assert_eq!(report.comparison_series[0].len(), 3);
    assert_eq!(report.comparison_series[1].len(), TRADE_ROWS as usize);

    // no shared timestamps with the toy target
    let pearson = report.pearson_results.as_ref().unwrap();
    assert_eq!(pearson.len(), 2);
    assert_eq!(pearson[1], sigcorr::CorrelationResult(None, None));
}

#[tokio::test]
async fn non_finite_comparison_is_analysed_as_empty() {
    let sc = standard();
    let req = AnalysisRequest::new(col("BTCUSDT", "trades", "price"))
        .comparison(col("SOLUSDT", "trades", "price"))
        .methods(&[Method::Spearman]);
    let report = sc.analyze(&req).await.unwrap();
    assert!(report.comparison_series[0].is_empty());
    assert_eq!(
        report.spearman_results.as_deref(),
        Some(&[sigcorr::CorrelationResult(None, None)][..])
    );
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn repeated_requests_give_identical_reports() {
    let sc = standard();
    let req = AnalysisRequest::new(col("BTCUSDT", "trades", "price"))
        .comparison(col("ETHUSDT", "trades", "volume"))
        .comparison(col("ETHUSDT", "trades", "price"))
        .methods(&sigcorr::Method::ALL)
        .offset(-2);
    let first = sc.analyze(&req).await.unwrap();
    let second = sc.analyze(&req).await.unwrap();
    assert_eq!(first, second);
}
