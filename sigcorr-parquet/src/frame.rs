//! Parquet reading and column coercion with polars.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use sigcorr_core::{Series, SigcorrError};

use crate::SOURCE_NAME;

const NANOS_PER_DAY: i64 = 86_400 * 1_000_000_000;

pub(crate) fn polars_err(e: &PolarsError) -> SigcorrError {
    SigcorrError::source_failure(SOURCE_NAME, e.to_string())
}

/// Read a whole Parquet file.
pub(crate) fn read_frame(path: &Path) -> Result<DataFrame, SigcorrError> {
    let file = File::open(path).map_err(|e| {
        SigcorrError::source_failure(SOURCE_NAME, format!("{}: {e}", path.display()))
    })?;
    ParquetReader::new(file).finish().map_err(|e| polars_err(&e))
}

/// Column names in file order.
pub(crate) fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(ToString::to_string)
        .collect()
}

/// First column of `priority` present in the frame.
pub(crate) fn pick_timestamp_column<'a>(df: &DataFrame, priority: &'a [String]) -> Option<&'a str> {
    priority
        .iter()
        .map(String::as_str)
        .find(|name| df.column(name).is_ok())
}

/// Timestamp column as nanoseconds since the epoch.
///
/// Datetime columns are scaled from their unit; dates map to midnight UTC;
/// plain integers are taken to already be nanoseconds.
pub(crate) fn timestamps_ns(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>, SigcorrError> {
    let col = df.column(name).map_err(|e| polars_err(&e))?;
    let series = col.as_materialized_series();
    let scale = match series.dtype() {
        DataType::Datetime(unit, _) => match unit {
            TimeUnit::Nanoseconds => 1,
            TimeUnit::Microseconds => 1_000,
            TimeUnit::Milliseconds => 1_000_000,
        },
        DataType::Date => NANOS_PER_DAY,
        dt if dt.is_integer() => 1,
        other => {
            return Err(SigcorrError::Data(format!(
                "timestamp column {name} has unsupported type {other}"
            )));
        }
    };
    let physical = series
        .cast(&DataType::Int64)
        .map_err(|e| polars_err(&e))?;
    let ca = physical.i64().map_err(|e| polars_err(&e))?;
    Ok(ca
        .into_iter()
        .map(|v| v.and_then(|v| v.checked_mul(scale)))
        .collect())
}

/// Value column coerced to `f64`, one entry per row.
///
/// Binary cells of exactly eight bytes are read as a little-endian `i64`;
/// other binary and text cells are parsed as decimal numbers. Cells that fail
/// to decode become `None`. The second element counts such failures.
pub(crate) fn values_f64(
    df: &DataFrame,
    name: &str,
) -> Result<(Vec<Option<f64>>, usize), SigcorrError> {
    let col = df.column(name).map_err(|e| polars_err(&e))?;
    let series = col.as_materialized_series();
    let mut failures = 0usize;
    let mut tally = |decoded: Option<f64>| {
        if decoded.is_none() {
            failures += 1;
        }
        decoded
    };
    let values = match series.dtype() {
        DataType::Binary => series
            .binary()
            .map_err(|e| polars_err(&e))?
            .into_iter()
            .map(|cell| cell.and_then(|bytes| tally(decode_bytes(bytes))))
            .collect(),
        DataType::String => series
            .str()
            .map_err(|e| polars_err(&e))?
            .into_iter()
            .map(|cell| cell.and_then(|s| tally(parse_text(s))))
            .collect(),
        dt if dt.is_numeric() || dt.is_bool() => series
            .cast(&DataType::Float64)
            .map_err(|e| polars_err(&e))?
            .f64()
            .map_err(|e| polars_err(&e))?
            .into_iter()
            .collect(),
        other => {
            return Err(SigcorrError::Data(format!(
                "column {name} has non-numeric type {other}"
            )));
        }
    };
    Ok((values, failures))
}

fn decode_bytes(bytes: &[u8]) -> Option<f64> {
    if let Ok(raw) = <[u8; 8]>::try_from(bytes) {
        #[allow(clippy::cast_precision_loss)]
        return Some(i64::from_le_bytes(raw) as f64);
    }
    std::str::from_utf8(bytes).ok().and_then(parse_text)
}

fn parse_text(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

/// Load `(timestamp column, value column)` into a [`Series`].
pub(crate) fn load_series(
    df: &DataFrame,
    ts_column: &str,
    value_column: &str,
) -> Result<(Series, usize), SigcorrError> {
    let ts = timestamps_ns(df, ts_column)?;
    let (values, failures) = values_f64(df, value_column)?;
    let series = Series::from_optional(
        ts.into_iter()
            .zip(values)
            .filter_map(|(t, v)| t.map(|t| (t, v))),
    );
    Ok((series, failures))
}
