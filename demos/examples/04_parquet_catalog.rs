use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use polars::prelude::*;
use sigcorr::{AnalysisRequest, AnalysisResponse, ColumnRef, Method, Sigcorr};
use sigcorr_demos::common::fmt_stat;
use sigcorr_parquet::ParquetSource;

const JAN_2024_MS: i64 = 1_704_067_200_000;
const HOUR_MS: i64 = 3_600_000;

fn write_dataset(root: &Path, instrument: &str, category: &str, df: &mut DataFrame) -> PolarsResult<()> {
    let dir = root.join(instrument).join(category);
    fs::create_dir_all(&dir)?;
    let out = File::create(dir.join("part-0.parquet"))?;
    ParquetWriter::new(out).finish(df)?;
    Ok(())
}

fn hourly_frame(ts_name: &str, values: &[(&str, Vec<f64>)]) -> PolarsResult<DataFrame> {
    let rows = values.first().map_or(0, |(_, v)| v.len());
    let ms: Vec<i64> = (0..rows as i64).map(|i| JAN_2024_MS + i * HOUR_MS).collect();
    let mut cols = vec![
        Series::new(ts_name.into(), ms)
            .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?
            .into_column(),
    ];
    for (name, v) in values {
        cols.push(Series::new((*name).into(), v.as_slice()).into_column());
    }
    DataFrame::new(cols)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    let root = tmp.path();

    // Oil leads the airline index by two hours, inverted
    let oil: Vec<f64> = (0..24).map(|i| 80.0 + f64::from(i % 7) - 0.2 * f64::from(i)).collect();
    let airline: Vec<f64> = (0..24)
        .map(|i: usize| if i < 2 { 50.0 } else { 100.0 - oil[i - 2] })
        .collect();
    write_dataset(
        root,
        "BRENT",
        "futures",
        &mut hourly_frame("event-time", &[("close", oil)])?,
    )?;
    write_dataset(
        root,
        "AIRLINES",
        "index",
        &mut hourly_frame("timestamp", &[("level", airline)])?,
    )?;

    let source = Arc::new(ParquetSource::builder().root(root).build()?);
    let sigcorr = Sigcorr::builder().with_source(source).build()?;
    println!("Instruments on disk: {:?}", sigcorr.list_instruments().await?);

    for offset in [0, 2] {
        let req = AnalysisRequest::new(ColumnRef::new("brent", "fut", "close"))
            .comparison(ColumnRef::new("air", "index", "level"))
            .methods(&[Method::Pearson, Method::LinRegress])
            .offset(offset);
        match sigcorr.respond(req).await {
            AnalysisResponse::Report(report) => {
                let p = report.pearson_results.unwrap_or_default();
                let l = report.linregress_results.unwrap_or_default();
                println!(
                    "offset {offset}: pearson r = {}, slope = {}",
                    fmt_stat(p.first().and_then(|r| r.statistic())),
                    fmt_stat(l.first().and_then(|r| r.slope())),
                );
            }
            AnalysisResponse::NoData { error } | AnalysisResponse::Failed { error } => {
                println!("offset {offset}: {error}");
            }
        }
    }

    Ok(())
}
