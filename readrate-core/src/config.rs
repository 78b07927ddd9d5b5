//! Estimator configuration

use crate::error::{Error, Result};
use crate::rates::RateTable;
use std::sync::Arc;

/// Default configuration constants
pub mod defaults {
    /// Language used when the caller gives none
    pub const LANGUAGE: &str = "en";

    /// Words per minute used if a table somehow lacks its sentinel entry
    pub const FALLBACK_RATE: u32 = 200;
}

/// How to count text that holds nothing but whitespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankTextPolicy {
    /// Count it as a single empty word (one minute of reading)
    #[default]
    SingleToken,
    /// Treat it like empty text: no words, no time
    Empty,
}

/// Estimator configuration
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    pub(crate) language: String,
    pub(crate) blank_text: BlankTextPolicy,
    pub(crate) table: Arc<RateTable>,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            language: defaults::LANGUAGE.to_string(),
            blank_text: BlankTextPolicy::default(),
            table: RateTable::global(),
        }
    }
}

impl EstimatorConfig {
    /// Create a configuration builder
    pub fn builder() -> EstimatorConfigBuilder {
        EstimatorConfigBuilder::default()
    }

    /// Language used by [`estimate_text`](crate::ReadingRateEstimator::estimate_text)
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Policy for whitespace-only text
    pub fn blank_text(&self) -> BlankTextPolicy {
        self.blank_text
    }

    /// Rate table in use
    pub fn table(&self) -> &Arc<RateTable> {
        &self.table
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.language.is_empty() {
            return Err(Error::Configuration(
                "default language must not be empty".into(),
            ));
        }

        if !self.table.contains(&self.language) {
            log::warn!(
                "Default language {:?} is not in the rate table, estimates will use the default rate",
                self.language
            );
        }

        Ok(())
    }
}

/// Fluent builder for [`EstimatorConfig`]
#[derive(Debug, Default)]
pub struct EstimatorConfigBuilder {
    language: Option<String>,
    blank_text: Option<BlankTextPolicy>,
    table: Option<Arc<RateTable>>,
}

impl EstimatorConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default language by code
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Set the policy for whitespace-only text
    pub fn blank_text(mut self, policy: BlankTextPolicy) -> Self {
        self.blank_text = Some(policy);
        self
    }

    /// Use a custom rate table
    pub fn table(mut self, table: impl Into<Arc<RateTable>>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Parse a custom rate table from TOML and use it
    pub fn table_from_toml(self, content: &str) -> Result<Self> {
        let table = RateTable::from_toml_str(content)?;
        Ok(self.table(table))
    }

    /// Build the configuration
    pub fn build(self) -> Result<EstimatorConfig> {
        let mut config = EstimatorConfig::default();

        if let Some(language) = self.language {
            config.language = language;
        }

        if let Some(policy) = self.blank_text {
            config.blank_text = policy;
        }

        if let Some(table) = self.table {
            config.table = table;
        }

        config.validate()?;
        Ok(config)
    }
}
