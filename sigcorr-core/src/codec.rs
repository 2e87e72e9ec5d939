//! Conversion of series and statistics into their transport-safe wire form.

use sigcorr_types::{MethodResult, TimeseriesRecord};

use crate::series::Series;

/// `None` for NaN, ±Inf or missing; otherwise the value unchanged.
#[must_use]
pub fn sanitize_number(x: Option<f64>) -> Option<f64> {
    x.filter(|v| v.is_finite())
}

/// Apply [`sanitize_number`] to every slot of a result tuple.
#[must_use]
pub fn sanitize_result(result: MethodResult) -> MethodResult {
    result.map_values(sanitize_number)
}

/// Wire records for a series, in timestamp order.
///
/// Entries with a non-finite value are dropped even though a [`Series`]
/// should never hold one.
#[must_use]
pub fn to_records(series: &Series) -> Vec<TimeseriesRecord> {
    series
        .points()
        .iter()
        .filter(|p| p.value.is_finite())
        .map(|p| TimeseriesRecord {
            timestamp: p.ts,
            value: p.value,
        })
        .collect()
}
