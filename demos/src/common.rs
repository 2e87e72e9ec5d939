use std::sync::Arc;

use sigcorr::{DatasetSource, SigcorrError};
use sigcorr_parquet::ParquetSource;

/// Environment variable naming a Parquet catalog root.
pub const DATA_ROOT_ENV: &str = "SIGCORR_DATA_ROOT";

/// Return a dataset source for demos.
///
/// Uses the Parquet catalog under `$SIGCORR_DATA_ROOT` when it is set and
/// `SIGCORR_DEMOS_USE_MOCK` is not; otherwise the in-memory fixture catalog.
///
/// # Errors
/// Returns the scan error if the Parquet root cannot be read.
pub fn get_source() -> Result<Arc<dyn DatasetSource>, SigcorrError> {
    match std::env::var(DATA_ROOT_ENV) {
        Ok(root) if std::env::var("SIGCORR_DEMOS_USE_MOCK").is_err() => {
            Ok(Arc::new(ParquetSource::builder().root(root).build()?))
        }
        _ => {
            println!("--- (Using mock dataset source) ---");
            Ok(Arc::new(sigcorr_mock::MockSource::standard()))
        }
    }
}

/// Print an optional statistic with fixed precision.
#[must_use]
pub fn fmt_stat(v: Option<f64>) -> String {
    v.map_or_else(|| "null".to_string(), |x| format!("{x:.4}"))
}
