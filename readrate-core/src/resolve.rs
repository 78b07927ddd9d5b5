//! Rate resolution
//!
//! A caller hands in either a language code or a numeric rate. The rate is
//! resolved by an ordered cascade: numeric override, then table lookup, then
//! the table's default rate. The first resolver that yields a value wins.

use crate::rates::RateTable;
use crate::words::is_separator;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Language code or explicit words-per-minute rate
#[derive(Debug, Clone, PartialEq)]
pub enum RateSpec {
    /// A language code such as `"en"`; numeric strings act as rates
    Language(String),
    /// An explicit rate in words per minute
    Rate(f64),
}

impl Default for RateSpec {
    fn default() -> Self {
        RateSpec::Language(crate::config::defaults::LANGUAGE.to_string())
    }
}

impl From<&str> for RateSpec {
    fn from(code: &str) -> Self {
        RateSpec::Language(code.to_string())
    }
}

impl From<String> for RateSpec {
    fn from(code: String) -> Self {
        RateSpec::Language(code)
    }
}

impl From<&String> for RateSpec {
    fn from(code: &String) -> Self {
        RateSpec::Language(code.clone())
    }
}

impl From<f64> for RateSpec {
    fn from(rate: f64) -> Self {
        RateSpec::Rate(rate)
    }
}

impl From<f32> for RateSpec {
    fn from(rate: f32) -> Self {
        RateSpec::Rate(f64::from(rate))
    }
}

impl From<u32> for RateSpec {
    fn from(rate: u32) -> Self {
        RateSpec::Rate(f64::from(rate))
    }
}

impl From<i32> for RateSpec {
    fn from(rate: i32) -> Self {
        RateSpec::Rate(f64::from(rate))
    }
}

impl From<u64> for RateSpec {
    fn from(rate: u64) -> Self {
        RateSpec::Rate(rate as f64)
    }
}

impl From<i64> for RateSpec {
    fn from(rate: i64) -> Self {
        RateSpec::Rate(rate as f64)
    }
}

impl<T: Into<RateSpec>> From<Option<T>> for RateSpec {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl fmt::Display for RateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateSpec::Language(code) => write!(f, "{code}"),
            RateSpec::Rate(rate) => write!(f, "{rate} wpm"),
        }
    }
}

impl RateSpec {
    /// Numeric value of the spec, if it has one
    ///
    /// Strings are trimmed and read as decimal floats or `0x`/`0o`/`0b`
    /// integers. The empty string reads as zero. Anything else, including
    /// language codes, has no numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RateSpec::Rate(rate) => Some(*rate),
            RateSpec::Language(code) => parse_number(code),
        }
    }
}

/// Which resolver produced a rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// Caller-supplied numeric rate
    Override,
    /// Rate looked up by language code
    Table,
    /// The table's `"default"` rate
    Default,
}

/// A rate together with the resolver that produced it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRate {
    /// Words per minute, always positive and finite
    pub rate: f64,
    /// Resolver that matched
    pub source: RateSource,
}

type Resolver = fn(&RateSpec, &RateTable) -> Option<f64>;

/// Resolvers in priority order
const CASCADE: [(RateSource, Resolver); 3] = [
    (RateSource::Override, numeric_override),
    (RateSource::Table, table_lookup),
    (RateSource::Default, table_default),
];

/// Resolve `spec` against `table`
///
/// Total over its inputs: when nothing else matches, the table's default
/// rate is used.
pub fn resolve_rate(spec: &RateSpec, table: &RateTable) -> ResolvedRate {
    for (source, resolver) in CASCADE {
        if let Some(rate) = resolver(spec, table) {
            log::trace!("Resolved {spec} to {rate} wpm via {source:?}");
            if source == RateSource::Default {
                log::debug!("Unknown language or rate {spec:?}, using default rate {rate}");
            }
            return ResolvedRate { rate, source };
        }
    }

    // The default resolver always matches
    ResolvedRate {
        rate: f64::from(table.default_rate()),
        source: RateSource::Default,
    }
}

/// A positive, finite numeric value used directly as the rate
pub fn numeric_override(spec: &RateSpec, _table: &RateTable) -> Option<f64> {
    spec.as_number().filter(|rate| rate.is_finite() && *rate > 0.0)
}

/// The table rate of a known, non-empty language code
pub fn table_lookup(spec: &RateSpec, table: &RateTable) -> Option<f64> {
    match spec {
        RateSpec::Language(code) if !code.is_empty() => table.rate(code).map(f64::from),
        _ => None,
    }
}

/// The table's fallback rate; always matches
pub fn table_default(_spec: &RateSpec, table: &RateTable) -> Option<f64> {
    Some(f64::from(table.default_rate()))
}

fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim_matches(is_separator);
    if trimmed.is_empty() {
        return Some(0.0);
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_digits(&trimmed[2..], radix);
    }

    // Rust accepts "inf" and "NaN" spellings that are not numbers here
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
    {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Unsigned digits in `radix`, accumulated as a float so long literals do not
/// overflow
fn parse_radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }

    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}
