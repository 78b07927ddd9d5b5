use serde::{Deserialize, Serialize};

/// On-disk schema of a rate table document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTableConfig {
    #[serde(default)]
    pub metadata: MetadataConfig,
    pub default: DefaultRateConfig,
    #[serde(default)]
    pub languages: Vec<LanguageRateConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetadataConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultRateConfig {
    pub rate: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageRateConfig {
    pub code: String,
    #[serde(default)]
    pub name: String,
    pub rate: u32,
}
