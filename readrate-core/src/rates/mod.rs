//! Reading rate tables
//!
//! The built-in table is stored as TOML under `configs/rates.toml`, embedded
//! at compile time and parsed once per process.

mod loader;
mod table;
mod types;

pub use loader::{builtin_table, list_available_languages};
pub use table::{LanguageRate, RateTable, DEFAULT_KEY};
