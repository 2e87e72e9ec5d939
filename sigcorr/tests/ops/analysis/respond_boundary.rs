use crate::helpers::*;
use sigcorr::{AnalysisRequest, AnalysisResponse, AnalysisWindow, Method, NO_DATA_MESSAGE};

#[tokio::test]
async fn completed_analysis_is_a_report() {
    let sc = standard();
    let req = AnalysisRequest::new(col("TOY", "example", "a"))
        .comparison(col("TOY", "example", "b"))
        .methods(&[Method::Pearson]);
    let resp = sc.respond(req).await;
    let report = resp.report().expect("report");
    assert_eq!(report.pearson_results.as_ref().map(Vec::len), Some(1));
}

#[tokio::test]
async fn missing_target_is_no_data() {
    let sc = standard();
    let req = AnalysisRequest::new(col("NOPE", "x", "y")).comparison(col("TOY", "example", "b"));
    assert_eq!(
        sc.respond(req).await,
        AnalysisResponse::NoData {
            error: NO_DATA_MESSAGE.to_string()
        }
    );
}

#[tokio::test]
async fn invalid_window_is_failed() {
    let sc = standard();
    let req = AnalysisRequest::new(col("TOY", "example", "a"))
        .comparison(col("TOY", "example", "b"))
        .window(AnalysisWindow::new(13, 2024, 1, 2025));
    match sc.respond(req).await {
        AnalysisResponse::Failed { error } => assert!(error.starts_with("analysis failed"), "{error}"),
        other => panic!("expected failure, got {other:?}"),
    }
}

#[tokio::test]
async fn source_error_is_failed() {
    let sc = standard();
    let req = AnalysisRequest::new(col("FAIL", "trades", "price")).comparison(col("TOY", "example", "b"));
    assert!(matches!(
        sc.respond(req).await,
        AnalysisResponse::Failed { .. }
    ));
}

#[tokio::test]
async fn panic_inside_analysis_is_contained() {
    let sc = standard();
    let req = AnalysisRequest::new(col("PANIC", "trades", "price")).comparison(col("TOY", "example", "b"));
    assert_eq!(
        sc.respond(req).await,
        AnalysisResponse::Failed {
            error: "analysis failed: internal error".to_string()
        }
    );

    // the orchestrator stays usable afterwards
    let ok = AnalysisRequest::new(col("TOY", "example", "a")).comparison(col("TOY", "example", "b"));
    assert!(sc.respond(ok).await.report().is_some());
}

#[tokio::test]
async fn responses_serialize_to_the_wire_shape() {
    let sc = standard();
    let req = AnalysisRequest::new(col("TOY", "example", "a"))
        .comparison(col("TOY", "example", "b"))
        .methods(&[Method::Pearson, Method::TheilSen])
        .offset(5);
    let json = serde_json::to_value(sc.respond(req).await).unwrap();

    assert_eq!(json["targetSeries"][0]["timestamp"], 100);
    assert_eq!(json["targetSeries"][0]["value"], 1.0);
    assert_eq!(json["pearsonResults"], serde_json::json!([[null, null]]));
    assert_eq!(
        json["theilslopesResults"],
        serde_json::json!([[null, null, null, null]])
    );
    assert!(json.get("spearmanResults").is_none());
    assert!(json.get("warnings").is_none());

    let missing = AnalysisRequest::new(col("NOPE", "x", "y")).comparison(col("TOY", "example", "b"));
    let json = serde_json::to_value(sc.respond(missing).await).unwrap();
    assert_eq!(json, serde_json::json!({ "error": NO_DATA_MESSAGE }));
}

#[test]
fn respond_on_a_current_thread_runtime() {
    let sc = standard();
    let req = AnalysisRequest::new(col("TOY", "example", "a")).comparison(col("TOY", "example", "b"));
    let resp = tokio_test::block_on(sc.respond(req));
    assert!(resp.report().is_some());
}
