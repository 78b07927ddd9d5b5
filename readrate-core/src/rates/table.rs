//! Immutable language code to reading rate mapping

use super::types::RateTableConfig;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key of the sentinel entry holding the fallback rate
pub const DEFAULT_KEY: &str = "default";

/// Reading rate for a single language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRate {
    /// Short language code, e.g. `"en"`
    pub code: String,
    /// Human-readable language name
    pub name: String,
    /// Average words read per minute
    pub rate: u32,
}

/// Mapping from language code to words-per-minute rate
///
/// The table always carries the `"default"` sentinel entry. It has no mutation
/// API; share it through [`std::sync::Arc`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    name: String,
    entries: BTreeMap<String, LanguageRate>,
}

impl RateTable {
    /// Parse and validate a table from a TOML document
    ///
    /// ```
    /// use readrate_core::RateTable;
    ///
    /// let table = RateTable::from_toml_str(
    ///     r#"
    ///     [default]
    ///     rate = 180
    ///
    ///     [[languages]]
    ///     code = "pt"
    ///     name = "Portuguese"
    ///     rate = 240
    ///     "#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(table.rate("pt"), Some(240));
    /// assert_eq!(table.default_rate(), 180);
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RateTableConfig = toml::from_str(content)?;
        Self::from_config(config)
    }

    pub(crate) fn from_config(config: RateTableConfig) -> Result<Self> {
        if config.default.rate == 0 {
            return Err(Error::InvalidRate {
                code: DEFAULT_KEY.to_string(),
                rate: 0,
            });
        }

        let mut entries = BTreeMap::new();
        entries.insert(
            DEFAULT_KEY.to_string(),
            LanguageRate {
                code: DEFAULT_KEY.to_string(),
                name: "Default".to_string(),
                rate: config.default.rate,
            },
        );

        for language in config.languages {
            if language.code.is_empty() || language.code == DEFAULT_KEY {
                return Err(Error::InvalidLanguageCode(language.code));
            }
            if language.rate == 0 {
                return Err(Error::InvalidRate {
                    code: language.code,
                    rate: 0,
                });
            }
            if entries.contains_key(&language.code) {
                return Err(Error::DuplicateLanguage(language.code));
            }

            let name = if language.name.is_empty() {
                language.code.clone()
            } else {
                language.name
            };
            entries.insert(
                language.code.clone(),
                LanguageRate {
                    code: language.code,
                    name,
                    rate: language.rate,
                },
            );
        }

        log::debug!(
            "Loaded rate table {:?} with {} languages",
            config.metadata.name,
            entries.len() - 1
        );

        Ok(Self {
            name: config.metadata.name,
            entries,
        })
    }

    /// Name given in the table metadata (may be empty)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rate for `code`, including the `"default"` sentinel
    pub fn rate(&self, code: &str) -> Option<u32> {
        self.entries.get(code).map(|entry| entry.rate)
    }

    /// Full entry for `code`
    pub fn get(&self, code: &str) -> Option<&LanguageRate> {
        self.entries.get(code)
    }

    /// Whether `code` is a key of the table
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// The fallback rate stored under `"default"`
    pub fn default_rate(&self) -> u32 {
        // from_config always inserts the sentinel
        self.entries
            .get(DEFAULT_KEY)
            .map(|entry| entry.rate)
            .unwrap_or(crate::config::defaults::FALLBACK_RATE)
    }

    /// Language entries sorted by code, without the sentinel
    pub fn languages(&self) -> impl Iterator<Item = &LanguageRate> {
        self.entries
            .values()
            .filter(|entry| entry.code != DEFAULT_KEY)
    }

    /// Number of keys, counting the sentinel
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the sentinel is present in every table
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
