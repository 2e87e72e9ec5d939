use sigcorr::{AnalysisRequest, ColumnRef, Method, Sigcorr};
use sigcorr_demos::common::{fmt_stat, get_source};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sigcorr = Sigcorr::builder()
        .with_source(get_source()?)
        .theil_sen_confidence(0.9)
        .build()?;

    // Every ETH trade column plus the BTC funding rate
    let comparisons = sigcorr
        .comparisons_from_product(
            &["ETHUSDT".to_string(), "BTCUSDT".to_string()],
            &["trades".to_string(), "funding-rate".to_string()],
            &["price".to_string(), "volume".to_string(), "rate".to_string()],
        )
        .await?;
    let comparisons: Vec<ColumnRef> = comparisons
        .into_iter()
        .filter(|c| !c.instrument.starts_with("BTC") || c.column == "rate")
        .collect();

    let target = ColumnRef::new("BTCUSDT", "trades", "price");
    let req = AnalysisRequest::new(target.clone())
        .comparisons(comparisons.clone())
        .methods(&Method::ALL);
    let report = sigcorr.analyze(&req).await?;

    println!("## {target} against {} comparisons", comparisons.len());
    for m in Method::ALL {
        println!("\n### {m}");
        for (c, r) in comparisons.iter().zip(report.results(m).unwrap_or_default()) {
            let values: Vec<String> = r.values().into_iter().map(fmt_stat).collect();
            println!("{:<28} [{}]", c.to_string(), values.join(", "));
        }
    }

    // Wire form of the boundary response
    let resp = sigcorr
        .respond(
            AnalysisRequest::new(target)
                .comparison(ColumnRef::new("ETHUSDT", "trades", "price"))
                .methods(&[Method::TheilSen])
                .offset(1),
        )
        .await;
    let mut json = serde_json::to_value(&resp)?;
    if let Some(obj) = json.as_object_mut() {
        obj.remove("targetSeries");
        obj.remove("comparisonSeries");
    }
    println!("\n{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
