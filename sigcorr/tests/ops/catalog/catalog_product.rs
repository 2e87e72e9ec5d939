use crate::helpers::*;

#[tokio::test]
async fn product_follows_input_order_and_skips_gaps() {
    let sc = standard();
    let refs = sc
        .comparisons_from_product(
            &strings(&["ETHUSDT", "BTCUSDT", "doge"]),
            &strings(&["trades", "funding-rate"]),
            &strings(&["volume", "price", "rate"]),
        )
        .await
        .unwrap();
    let flat: Vec<String> = refs.iter().map(ToString::to_string).collect();
    let expected: Vec<String> = [
        col("ETHUSDT", "trades", "volume"),
        col("ETHUSDT", "trades", "price"),
        col("BTCUSDT", "trades", "volume"),
        col("BTCUSDT", "trades", "price"),
        col("BTCUSDT", "funding-rate", "rate"),
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    assert_eq!(flat, expected);
}

#[tokio::test]
async fn product_feeds_straight_into_analysis() {
    let sc = standard();
    let comparisons = sc
        .comparisons_from_product(
            &strings(&["ETHUSDT"]),
            &strings(&["trades"]),
            &strings(&["price", "volume"]),
        )
        .await
        .unwrap();
    let req = sigcorr::AnalysisRequest::new(col("BTCUSDT", "trades", "price"))
        .comparisons(comparisons)
        .methods(&[sigcorr::Method::Pearson]);
    let report = sc.analyze(&req).await.unwrap();
    assert_eq!(report.pearson_results.as_ref().map(Vec::len), Some(2));
    assert!(report.warnings.is_empty());
}
