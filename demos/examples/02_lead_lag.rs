use sigcorr::{AnalysisRequest, ColumnRef, Method, Sigcorr};
use sigcorr_demos::common::{fmt_stat, get_source};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sigcorr = Sigcorr::builder().with_source(get_source()?).build()?;
    let target = ColumnRef::new("btc", "trades", "price");
    let comparison = ColumnRef::new("eth", "trades", "price");

    println!("## Lead/lag scan: {target} vs {comparison}");
    println!("{:>6} | {:>10} | {:>10}", "offset", "pearson", "p-value");
    println!("{:-<7}|{:-<12}|{:-<11}", "", "", "");

    let mut best: Option<(i64, f64)> = None;
    for offset in -3..=3 {
        let req = AnalysisRequest::new(target.clone())
            .comparison(comparison.clone())
            .methods(&[Method::Pearson])
            .offset(offset);
        let report = sigcorr.analyze(&req).await?;
        let Some(result) = report.pearson_results.and_then(|v| v.first().copied()) else {
            continue;
        };
        println!(
            "{offset:>6} | {:>10} | {:>10}",
            fmt_stat(result.statistic()),
            fmt_stat(result.pvalue())
        );
        if let Some(r) = result.statistic() {
            if best.is_none_or(|(_, b)| r.abs() > b.abs()) {
                best = Some((offset, r));
            }
        }
    }

    match best {
        Some((offset, r)) => println!("\nStrongest relationship at offset {offset} (r = {r:.4})"),
        None => println!("\nNo offset produced a defined correlation"),
    }
    Ok(())
}
