use super::table::RateTable;
use crate::error::Result;
use std::sync::{Arc, OnceLock};

static BUILTIN_TABLE: OnceLock<Arc<RateTable>> = OnceLock::new();

const BUILTIN_RATES: &str = include_str!("../../configs/rates.toml");

fn load_builtin_table() -> Result<RateTable> {
    RateTable::from_toml_str(BUILTIN_RATES)
}

/// Shared handle to the built-in table, parsed on first use
pub fn builtin_table() -> Arc<RateTable> {
    BUILTIN_TABLE
        .get_or_init(|| {
            Arc::new(load_builtin_table().expect("Failed to load embedded rate table"))
        })
        .clone()
}

impl RateTable {
    /// The built-in table shared by every default estimator
    pub fn global() -> Arc<RateTable> {
        builtin_table()
    }
}

/// Codes of the built-in languages, sorted, without the sentinel
pub fn list_available_languages() -> Vec<String> {
    builtin_table()
        .languages()
        .map(|language| language.code.clone())
        .collect()
}
