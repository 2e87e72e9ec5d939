use chrono::{NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SigcorrError;

/// Calendar-month analysis window.
///
/// The window starts at 00:00 UTC on the first day of `start_month/start_year`
/// and ends (exclusive) at 00:00 UTC on the first day of the month after
/// `end_month/end_year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisWindow {
    /// First month included (1..=12).
    pub start_month: u32,
    /// Year of the first month included.
    pub start_year: i32,
    /// Last month included (1..=12).
    pub end_month: u32,
    /// Year of the last month included.
    pub end_year: i32,
}

impl AnalysisWindow {
    /// Build a window from its calendar bounds; validated by [`Self::bounds_ns`].
    #[must_use]
    pub const fn new(start_month: u32, start_year: i32, end_month: u32, end_year: i32) -> Self {
        Self {
            start_month,
            start_year,
            end_month,
            end_year,
        }
    }

    /// Convert to a half-open `[start, end)` interval in nanoseconds since the epoch.
    ///
    /// # Errors
    /// Returns `InvalidArg` if a month is outside 1..=12, the dates cannot be
    /// represented, or the window ends before it starts.
    pub fn bounds_ns(&self) -> Result<(i64, i64), SigcorrError> {
        let start = month_start_ns(self.start_year, self.start_month)?;
        if !(1..=12).contains(&self.end_month) {
            return Err(SigcorrError::invalid_arg(format!(
                "end month out of range: {}",
                self.end_month
            )));
        }
        let (ny, nm) = if self.end_month == 12 {
            (self.end_year.checked_add(1), 1)
        } else {
            (Some(self.end_year), self.end_month + 1)
        };
        let ny = ny.ok_or_else(|| SigcorrError::invalid_arg("end year overflow"))?;
        let end = month_start_ns(ny, nm)?;
        if end <= start {
            return Err(SigcorrError::invalid_arg(format!(
                "window ends before it starts: {}/{} .. {}/{}",
                self.start_month, self.start_year, self.end_month, self.end_year
            )));
        }
        Ok((start, end))
    }
}

fn month_start_ns(year: i32, month: u32) -> Result<i64, SigcorrError> {
    if !(1..=12).contains(&month) {
        return Err(SigcorrError::invalid_arg(format!(
            "month out of range: {month}"
        )));
    }
    let date = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| SigcorrError::invalid_arg(format!("invalid date {year}-{month:02}-01")))?;
    let naive = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| SigcorrError::invalid_arg("invalid midnight"))?;
    Utc.from_utc_datetime(&naive)
        .timestamp_nanos_opt()
        .ok_or_else(|| SigcorrError::invalid_arg(format!("{year}-{month:02} outside nanosecond range")))
}
