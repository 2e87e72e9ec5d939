use sigcorr::Sigcorr;
use sigcorr_demos::common::get_source;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sigcorr = Sigcorr::builder().with_source(get_source()?).build()?;

    println!("## Catalog");
    let instruments = sigcorr.list_instruments().await?;
    for inst in &instruments {
        let categories = sigcorr.list_categories(inst).await?;
        println!("{inst:<10} {}", categories.join(", "));
        for cat in &categories {
            if let Some(range) = sigcorr.timestamp_range(inst, cat).await? {
                println!("  {cat:<14} {} .. {}", range.min_iso, range.max_iso);
            }
        }
    }

    // Columns every selected trades dataset shares
    let selected: Vec<String> = instruments
        .iter()
        .filter(|i| i.contains("USDT"))
        .cloned()
        .collect();
    let shared = sigcorr
        .intersect_columns(&selected, &["trades".to_string()])
        .await?;
    println!("\nShared trade columns across {}: {shared:?}", selected.join(", "));

    println!("\nMethods: {}", Sigcorr::analysis_methods().join(", "));
    Ok(())
}
