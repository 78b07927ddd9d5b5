//! Error types for rate tables and estimator configuration
//!
//! Estimation itself never fails. These errors only surface when building a
//! custom [`RateTable`](crate::RateTable) or an
//! [`EstimatorConfig`](crate::EstimatorConfig).

use thiserror::Error;

/// Error type for table loading and configuration
#[derive(Debug, Error)]
pub enum Error {
    /// The rate table document is not valid TOML or does not match the schema
    #[error("Failed to parse rate table: {0}")]
    Parse(#[from] toml::de::Error),

    /// A language was given a rate of zero words per minute
    #[error("Invalid rate for {code}: {rate} words per minute")]
    InvalidRate {
        /// Language code the rate belongs to
        code: String,
        /// The rejected rate
        rate: u32,
    },

    /// A language code is empty or collides with the reserved `default` key
    #[error("Invalid language code: {0:?}")]
    InvalidLanguageCode(String),

    /// The same language code appears more than once
    #[error("Duplicate language code: {0}")]
    DuplicateLanguage(String),

    /// Invalid builder input
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for table and configuration operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidRate {
            code: "en".to_string(),
            rate: 0,
        };
        assert_eq!(err.to_string(), "Invalid rate for en: 0 words per minute");

        let err = Error::InvalidLanguageCode(String::new());
        assert_eq!(err.to_string(), "Invalid language code: \"\"");

        let err = Error::DuplicateLanguage("fr".to_string());
        assert_eq!(err.to_string(), "Duplicate language code: fr");
    }

    #[test]
    fn test_parse_error_conversion() {
        let toml_err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse rate table"));
    }
}
