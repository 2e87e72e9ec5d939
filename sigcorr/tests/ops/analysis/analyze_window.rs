use crate::helpers::*;
use sigcorr::{AnalysisRequest, AnalysisWindow, CorrelationResult, Method, SigcorrError};
use sigcorr_mock::{MockDataset, MockSource};

const DAY_NS: i64 = 86_400 * 1_000_000_000;

// 2023-12-31, 2024-01-15, 2024-02-10, 2024-03-01
fn monthly_source() -> MockSource {
    let ts = [
        JAN_2024_NS - DAY_NS,
        JAN_2024_NS + 14 * DAY_NS,
        JAN_2024_NS + 40 * DAY_NS,
        JAN_2024_NS + 60 * DAY_NS,
    ];
    let rows = |vals: [f64; 4]| ts.iter().copied().zip(vals).collect::<Vec<_>>();
    MockSource::builder()
        .dataset(
            "X",
            "daily",
            MockDataset::new()
                .column("up", rows([1.0, 2.0, 3.0, 4.0]))
                .column("down", rows([8.0, 6.0, 4.0, 2.0])),
        )
        .build()
}

#[tokio::test]
async fn window_keeps_whole_months_half_open() {
    let sc = with_source(monthly_source());
    let req = AnalysisRequest::new(col("X", "daily", "up"))
        .comparison(col("X", "daily", "down"))
        .methods(&[Method::Pearson])
        .window(AnalysisWindow::new(1, 2024, 2, 2024));
    let report = sc.analyze(&req).await.unwrap();

    let kept: Vec<i64> = report.target_series.iter().map(|r| r.timestamp).collect();
    assert_eq!(kept, vec![JAN_2024_NS + 14 * DAY_NS, JAN_2024_NS + 40 * DAY_NS]);
    assert_eq!(report.comparison_series[0].len(), 2);
    let r = report.pearson_results.as_ref().unwrap()[0].statistic().unwrap();
    assert!(close(r, -1.0, 1e-12));
}

#[tokio::test]
async fn window_spanning_years() {
    let sc = with_source(monthly_source());
    let req = AnalysisRequest::new(col("X", "daily", "up"))
        .comparison(col("X", "daily", "down"))
        .methods(&[Method::Spearman])
        .window(AnalysisWindow::new(12, 2023, 3, 2024));
    let report = sc.analyze(&req).await.unwrap();
    assert_eq!(report.target_series.len(), 4);
    let rs = report.spearman_results.as_ref().unwrap()[0].statistic().unwrap();
    assert!(close(rs, -1.0, 1e-12));
}

#[tokio::test]
async fn window_without_data_yields_empty_tuples() {
    let sc = standard();
    let req = AnalysisRequest::new(col("BTCUSDT", "trades", "price"))
        .comparison(col("ETHUSDT", "trades", "price"))
        .methods(&[Method::Pearson])
        .window(AnalysisWindow::new(6, 2024, 7, 2024));
    let report = sc.analyze(&req).await.unwrap();
    assert!(report.target_series.is_empty());
    assert!(report.comparison_series[0].is_empty());
    assert_eq!(
        report.pearson_results.as_deref(),
        Some(&[CorrelationResult(None, None)][..])
    );
}

#[tokio::test]
async fn inverted_window_is_rejected_before_loading() {
    let sc = standard();
    // the target does not exist; window validation must win
    let req = AnalysisRequest::new(col("NOPE", "trades", "price"))
        .comparison(col("BTCUSDT", "trades", "price"))
        .window(AnalysisWindow::new(5, 2024, 3, 2024));
    let err = sc.analyze(&req).await.unwrap_err();
    assert!(matches!(err, SigcorrError::InvalidArg(_)), "got {err:?}");
}
