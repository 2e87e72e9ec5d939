use crate::helpers::*;
use sigcorr::SigcorrError;

#[tokio::test]
async fn instruments_are_sorted() {
    let sc = standard();
    assert_eq!(
        sc.list_instruments().await.unwrap(),
        strings(&["BTCUSDT", "EMPTY", "ETHUSDT", "SOLUSDT", "TOY"])
    );
}

#[tokio::test]
async fn categories_resolve_fuzzily() {
    let sc = standard();
    assert_eq!(
        sc.list_categories("btc").await.unwrap(),
        strings(&["funding-rate", "trades"])
    );
    assert_eq!(sc.list_categories("ETH").await.unwrap(), strings(&["trades"]));
}

#[tokio::test]
async fn unknown_or_empty_instrument_has_no_categories() {
    let sc = standard();
    assert!(sc.list_categories("doge").await.unwrap().is_empty());
    assert!(sc.list_categories("EMPTY").await.unwrap().is_empty());
}

#[tokio::test]
async fn failing_source_surfaces_errors() {
    let sc = standard();
    let err = sc.list_categories("FAIL").await.unwrap_err();
    assert!(matches!(err, SigcorrError::Source { .. }));
}

#[tokio::test]
async fn columns_common_to_every_combination() {
    let sc = standard();
    let cols = sc
        .intersect_columns(&strings(&["BTCUSDT", "ETHUSDT"]), &strings(&["trades"]))
        .await
        .unwrap();
    assert_eq!(cols, strings(&["price", "volume"]));

    let cols = sc
        .intersect_columns(&strings(&["BTCUSDT", "SOLUSDT"]), &strings(&["trades"]))
        .await
        .unwrap();
    assert_eq!(cols, strings(&["price"]));
}

#[tokio::test]
async fn any_unresolved_combination_empties_the_intersection() {
    let sc = standard();
    // ETHUSDT has no funding-rate category
    let cols = sc
        .intersect_columns(
            &strings(&["BTCUSDT", "ETHUSDT"]),
            &strings(&["trades", "funding-rate"]),
        )
        .await
        .unwrap();
    assert!(cols.is_empty());
}

#[tokio::test]
async fn empty_inputs_give_empty_intersection() {
    let sc = standard();
    assert!(sc.intersect_columns(&[], &strings(&["trades"])).await.unwrap().is_empty());
    assert!(sc.intersect_columns(&strings(&["BTCUSDT"]), &[]).await.unwrap().is_empty());
}

#[tokio::test]
async fn refresh_is_a_no_op_for_static_sources() {
    let sc = standard();
    sc.refresh().await.unwrap();
    assert_eq!(sc.list_instruments().await.unwrap().len(), 5);
}
