use sigcorr::{AnalysisRequest, ColumnRef, Method, Sigcorr};
use sigcorr_demos::common::get_source;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,sigcorr=debug,sigcorr_parquet=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // Mock source unless SIGCORR_DATA_ROOT points at a Parquet catalog
    let sigcorr = Sigcorr::builder().with_source(get_source()?).build()?;

    // Catalog walk
    let instruments = sigcorr.list_instruments().await?;
    tracing::info!(instruments = instruments.len(), "catalog loaded");
    if let Some(first) = instruments.first() {
        let _ = sigcorr.list_categories(first).await?;
    }

    // One analysis, one deliberately unresolved comparison
    let req = AnalysisRequest::new(ColumnRef::new("btc", "trades", "price"))
        .comparison(ColumnRef::new("eth", "trades", "price"))
        .comparison(ColumnRef::new("doge", "trades", "price"))
        .methods(&[Method::Pearson])
        .offset(1);
    let _ = sigcorr.respond(req).await;

    Ok(())
}
