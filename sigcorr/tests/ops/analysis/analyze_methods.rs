use crate::helpers::*;
use sigcorr::{AnalysisRequest, Method, MethodResult, Sigcorr};

#[tokio::test]
async fn empty_method_list_computes_nothing() {
    let sc = standard();
    let req = AnalysisRequest::new(col("TOY", "example", "a")).comparison(col("TOY", "example", "b"));
    let report = sc.analyze(&req).await.unwrap();
    for m in Method::ALL {
        assert!(report.results(m).is_none(), "{m} was not requested");
    }
    // series are still echoed
    assert_eq!(report.target_series.len(), 3);
    assert_eq!(report.comparison_series.len(), 1);

    let json = serde_json::to_value(&report).unwrap();
    let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    assert!(keys.iter().all(|k| !k.ends_with("Results")), "{keys:?}");
}

#[tokio::test]
async fn only_requested_methods_are_reported() {
    let sc = standard();
    let req = AnalysisRequest::new(col("TOY", "example", "a"))
        .comparison(col("TOY", "example", "b"))
        .methods(&[Method::KendallTau]);
    let report = sc.analyze(&req).await.unwrap();
    assert!(report.kendalltau_results.is_some());
    assert!(report.pearson_results.is_none());
    assert!(report.spearman_results.is_none());
    assert!(report.linregress_results.is_none());
    assert!(report.theilslopes_results.is_none());
}

#[tokio::test]
async fn opt_in_defaults_apply_when_request_names_none() {
    let sc = Sigcorr::builder()
        .with_source(std::sync::Arc::new(sigcorr_mock::MockSource::standard()))
        .default_methods(&[Method::TheilSen])
        .build()
        .unwrap();
    let req = AnalysisRequest::new(col("TOY", "example", "a")).comparison(col("TOY", "example", "b"));
    let report = sc.analyze(&req).await.unwrap();
    assert!(report.pearson_results.is_none());
    let ts = report.theilslopes_results.as_ref().unwrap();
    assert!(close(ts[0].slope().unwrap(), 10.0, 1e-12));
    assert!(close(ts[0].intercept().unwrap(), 0.0, 1e-12));
}

#[tokio::test]
async fn every_method_produces_one_tuple_per_comparison() {
    let sc = standard();
    let req = AnalysisRequest::new(col("BTCUSDT", "trades", "price"))
        .comparisons([
            col("ETHUSDT", "trades", "price"),
            col("ETHUSDT", "trades", "volume"),
            col("BTCUSDT", "funding-rate", "rate"),
        ])
        .methods(&Method::ALL);
    let report = sc.analyze(&req).await.unwrap();

    for m in Method::ALL {
        let results = report.results(m).unwrap();
        assert_eq!(results.len(), 3, "{m}");
        for r in &results {
            assert_eq!(r.values().len(), MethodResult::empty(m).values().len());
            assert!(r.values().iter().flatten().all(|v| v.is_finite()));
        }
    }
}

#[tokio::test]
async fn sparse_comparison_still_aligns_on_shared_timestamps() {
    let sc = standard();
    let req = AnalysisRequest::new(col("BTCUSDT", "trades", "volume"))
        .comparison(col("BTCUSDT", "funding-rate", "rate"))
        .methods(&[Method::KendallTau]);
    let report = sc.analyze(&req).await.unwrap();
    // six funding rows, every one on an hourly trade timestamp
    assert_eq!(report.comparison_series[0].len(), 6);
    let tau = report.kendalltau_results.as_ref().unwrap()[0];
    let stat = tau.statistic().unwrap();
    assert!((-1.0..=1.0).contains(&stat));
    assert!((0.0..=1.0).contains(&tau.pvalue().unwrap()));
}

#[tokio::test]
async fn higher_min_pairs_suppresses_small_samples() {
    let sc = Sigcorr::builder()
        .with_source(std::sync::Arc::new(sigcorr_mock::MockSource::standard()))
        .min_pairs(4)
        .build()
        .unwrap();
    let req = AnalysisRequest::new(col("TOY", "example", "a"))
        .comparison(col("TOY", "example", "b"))
        .methods(&[Method::Pearson]);
    let report = sc.analyze(&req).await.unwrap();
    assert!(report.pearson_results.as_ref().unwrap()[0] == sigcorr::CorrelationResult(None, None));
}

#[test]
fn method_catalog_lists_wire_names() {
    assert_eq!(
        Sigcorr::analysis_methods(),
        vec!["pearson", "spearman", "kendalltau", "linregress", "theilslopes"]
    );
}
