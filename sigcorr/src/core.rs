use std::sync::Arc;

use sigcorr_core::{DatasetSource, Method, SigcorrConfig, SigcorrError};

/// Orchestrator that resolves, loads, aligns and analyses signals from one dataset source.
///
/// Cloning is cheap: the source is shared behind an `Arc`.
#[derive(Clone)]
pub struct Sigcorr {
    pub(crate) source: Arc<dyn DatasetSource>,
    pub(crate) cfg: SigcorrConfig,
}

/// Builder for constructing a `Sigcorr` orchestrator with custom configuration.
pub struct SigcorrBuilder {
    source: Option<Arc<dyn DatasetSource>>,
    cfg: SigcorrConfig,
}

impl Default for SigcorrBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SigcorrBuilder {
    /// Create a new builder with default configuration and no source.
    ///
    /// A source must be registered with [`with_source`](Self::with_source)
    /// before calling [`build`](Self::build).
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: SigcorrConfig::default(),
        }
    }

    /// Register the dataset source. A later call replaces an earlier one.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn DatasetSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: SigcorrConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Minimum aligned finite pairs before statistics are computed (at least 2).
    #[must_use]
    pub const fn min_pairs(mut self, n: usize) -> Self {
        self.cfg.min_pairs = n;
        self
    }

    /// Two-sided confidence level for Theil–Sen slope bounds.
    #[must_use]
    pub const fn theil_sen_confidence(mut self, confidence: f64) -> Self {
        self.cfg.theil_sen_confidence = confidence;
        self
    }

    /// Opt in to methods computed when a request names none.
    ///
    /// Without this, a request with an empty method list yields a report with
    /// no result arrays.
    #[must_use]
    pub fn default_methods(mut self, methods: &[Method]) -> Self {
        self.cfg.default_methods = methods.to_vec();
        self
    }

    /// Build the orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no source was registered, `min_pairs < 2`, or the
    /// Theil–Sen confidence is not strictly between 0 and 1.
    pub fn build(self) -> Result<Sigcorr, SigcorrError> {
        let source = self
            .source
            .ok_or_else(|| SigcorrError::invalid_arg("a dataset source is required"))?;
        if self.cfg.min_pairs < 2 {
            return Err(SigcorrError::invalid_arg(format!(
                "min_pairs must be at least 2, got {}",
                self.cfg.min_pairs
            )));
        }
        let c = self.cfg.theil_sen_confidence;
        if !(c > 0.0 && c < 1.0) {
            return Err(SigcorrError::invalid_arg(format!(
                "theil_sen_confidence must be in (0, 1), got {c}"
            )));
        }
        Ok(Sigcorr {
            source,
            cfg: self.cfg,
        })
    }
}

impl Sigcorr {
    /// Start building a new `Sigcorr` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use sigcorr::Sigcorr;
    /// use sigcorr_parquet::ParquetSource;
    ///
    /// let source = Arc::new(ParquetSource::builder().root("data").build()?);
    /// let sigcorr = Sigcorr::builder()
    ///     .with_source(source)
    ///     .theil_sen_confidence(0.9)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> SigcorrBuilder {
        SigcorrBuilder::new()
    }

    /// The configuration this orchestrator was built with.
    #[must_use]
    pub const fn config(&self) -> &SigcorrConfig {
        &self.cfg
    }

    /// The registered dataset source.
    #[must_use]
    pub fn source(&self) -> &Arc<dyn DatasetSource> {
        &self.source
    }

    /// Rebuild the source's catalog snapshot.
    ///
    /// # Errors
    /// Propagates the source's refresh failure.
    pub async fn refresh(&self) -> Result<(), SigcorrError> {
        self.source.refresh().await
    }
}
