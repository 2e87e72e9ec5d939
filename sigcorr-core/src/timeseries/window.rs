use sigcorr_types::{AnalysisWindow, SigcorrError};

use crate::series::Series;

/// Restrict a series to an optional calendar window.
///
/// `None` returns the series unchanged.
///
/// # Errors
/// Returns `InvalidArg` if the window bounds are malformed.
pub fn apply_window(series: Series, window: Option<&AnalysisWindow>) -> Result<Series, SigcorrError> {
    match window {
        None => Ok(series),
        Some(w) => {
            let (start, end) = w.bounds_ns()?;
            Ok(series.within(start, end))
        }
    }
}
