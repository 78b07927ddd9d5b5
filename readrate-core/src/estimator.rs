//! Reading time estimation

use crate::config::{BlankTextPolicy, EstimatorConfig};
use crate::error::Result;
use crate::resolve::{resolve_rate, RateSpec, ResolvedRate};
use crate::words::{count_words, is_blank};
use serde::{Deserialize, Serialize};

/// Outcome of a single estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Words per minute actually used
    pub rate: f64,
    /// Number of whitespace-delimited words
    pub words: usize,
    /// Reading time in whole minutes, rounded up
    ///
    /// Saturates at `u64::MAX` when a tiny override rate makes the quotient
    /// too large (or infinite) to represent.
    pub time: u64,
}

impl Estimate {
    /// Estimate for `words` words read at `rate` words per minute
    ///
    /// `rate` is expected to be positive and finite. `time` saturates at
    /// `u64::MAX` rather than overflowing.
    pub fn new(words: usize, rate: f64) -> Self {
        let time = if words == 0 {
            0
        } else {
            (words as f64 / rate).ceil() as u64
        };

        Self { rate, words, time }
    }

    /// Estimate for empty text
    pub fn empty(rate: f64) -> Self {
        Self {
            rate,
            words: 0,
            time: 0,
        }
    }
}

/// Estimates reading time from per-language reading rates
///
/// Cloning is cheap; the rate table is shared.
///
/// ```
/// use readrate_core::ReadingRateEstimator;
///
/// let estimator = ReadingRateEstimator::new();
/// let estimate = estimator.estimate("hello world", "en");
///
/// assert_eq!(estimate.words, 2);
/// assert_eq!(estimate.rate, 236.0);
/// assert_eq!(estimate.time, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReadingRateEstimator {
    config: EstimatorConfig,
}

impl ReadingRateEstimator {
    /// Create an estimator backed by the built-in rate table
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an estimator with custom configuration
    pub fn with_config(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// Create an estimator whose default language is `code`
    pub fn with_language(code: impl Into<String>) -> Result<Self> {
        let config = EstimatorConfig::builder().language(code).build()?;
        Ok(Self::with_config(config))
    }

    /// Get the current configuration
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Whether `code` is a non-empty key of the rate table
    pub fn is_language_known(&self, code: &str) -> bool {
        !code.is_empty() && self.config.table.contains(code)
    }

    /// Resolve the rate `spec` stands for without counting anything
    pub fn resolve_rate(&self, spec: impl Into<RateSpec>) -> ResolvedRate {
        resolve_rate(&spec.into(), &self.config.table)
    }

    /// Estimate the reading time of `text`
    ///
    /// `spec` is a language code or a words-per-minute rate. Numeric values
    /// above zero (including numeric strings) are used as the rate, known
    /// codes are looked up, and anything else falls back to the default rate.
    pub fn estimate(&self, text: &str, spec: impl Into<RateSpec>) -> Estimate {
        let ResolvedRate { rate, .. } = self.resolve_rate(spec);

        if text.is_empty() {
            return Estimate::empty(rate);
        }

        if self.config.blank_text == BlankTextPolicy::Empty && is_blank(text) {
            return Estimate::empty(rate);
        }

        Estimate::new(count_words(text), rate)
    }

    /// Estimate using the configured default language
    pub fn estimate_text(&self, text: &str) -> Estimate {
        let language = RateSpec::Language(self.config.language.clone());
        self.estimate(text, language)
    }
}
