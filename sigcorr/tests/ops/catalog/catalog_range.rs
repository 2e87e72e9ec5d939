use crate::helpers::*;
use sigcorr_core::nanos_to_local_iso;

#[tokio::test]
async fn range_spans_every_column() {
    let sc = standard();
    let range = sc.timestamp_range("btc", "trades").await.unwrap().unwrap();
    assert_eq!(range.min, JAN_2024_NS);
    assert_eq!(range.max, JAN_2024_NS + (TRADE_ROWS - 1) * HOUR_NS);
    assert_eq!(range.min_iso, nanos_to_local_iso(range.min));
    assert_eq!(range.max_iso, nanos_to_local_iso(range.max));
}

#[tokio::test]
async fn range_of_toy_dataset_is_sub_second() {
    let sc = standard();
    let range = sc.timestamp_range("TOY", "example").await.unwrap().unwrap();
    assert_eq!((range.min, range.max), (100, 300));
    assert!(range.min_iso.contains('.'), "{}", range.min_iso);
}

#[tokio::test]
async fn unknown_dataset_has_no_range() {
    let sc = standard();
    assert!(sc.timestamp_range("doge", "trades").await.unwrap().is_none());
    assert!(sc.timestamp_range("BTCUSDT", "liquidations").await.unwrap().is_none());
}
