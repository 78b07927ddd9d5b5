//! Reading time estimation from average per-language reading rates
//!
//! Rates come from Marc Brysbaert's meta-analysis of silent reading speed
//! ("How many words do we read per minute?", Ghent University). A text is
//! split on whitespace, and the word count is divided by the rate of the
//! requested language, rounding up to whole minutes.
//!
//! # Example
//!
//! ```rust
//! use readrate_core::{estimate, is_language_known, ReadingRateEstimator};
//!
//! assert!(is_language_known("fr"));
//! assert!(!is_language_known("tlh"));
//!
//! // Look up the rate by language code
//! let result = estimate("Bonjour tout le monde", "fr");
//! assert_eq!(result.words, 4);
//! assert_eq!(result.rate, 214.0);
//! assert_eq!(result.time, 1);
//!
//! // Or pass a words-per-minute rate directly
//! let estimator = ReadingRateEstimator::new();
//! let result = estimator.estimate("one two three four five six seven eight", 2_u32);
//! assert_eq!(result.time, 4);
//! ```

pub mod config;
pub mod error;
pub mod estimator;
pub mod rates;
pub mod resolve;
pub mod words;

pub use config::{BlankTextPolicy, EstimatorConfig, EstimatorConfigBuilder};
pub use error::{Error, Result};
pub use estimator::{Estimate, ReadingRateEstimator};
pub use rates::{LanguageRate, RateTable};
pub use resolve::{RateSource, RateSpec, ResolvedRate};

// Convenience functions

/// Whether `code` is a language of the built-in rate table
pub fn is_language_known(code: &str) -> bool {
    ReadingRateEstimator::new().is_language_known(code)
}

/// Estimate reading time with the built-in rate table
pub fn estimate(text: &str, spec: impl Into<RateSpec>) -> Estimate {
    ReadingRateEstimator::new().estimate(text, spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convenience_functions() {
        assert!(is_language_known("zh"));
        assert!(!is_language_known(""));

        let result = estimate("hello world", RateSpec::default());
        assert_eq!(result.rate, 236.0);
        assert_eq!(result.words, 2);
    }

    #[test]
    fn test_reexports() {
        let _config: EstimatorConfig = EstimatorConfig::builder().build().unwrap();
        let _source = RateSource::Table;
        let _table: std::sync::Arc<RateTable> = RateTable::global();
    }
}
