use sigcorr_core::SigcorrError;

/// Turn a not-found outcome into `Ok(None)`; other errors pass through.
pub fn absorb_not_found<T>(result: Result<T, SigcorrError>) -> Result<Option<T>, SigcorrError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

/// Sorted, de-duplicated method list; falls back to `defaults` (possibly
/// empty) when nothing was requested.
pub fn effective_methods(
    requested: &[sigcorr_core::Method],
    defaults: &[sigcorr_core::Method],
) -> Vec<sigcorr_core::Method> {
    let mut methods = if requested.is_empty() {
        defaults.to_vec()
    } else {
        requested.to_vec()
    };
    methods.sort_unstable();
    methods.dedup();
    methods
}
