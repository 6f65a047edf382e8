//! Display configuration.
//!
//! Controls how amounts and dates are rendered. Every field has a default
//! matching US dollar formatting, so a config file only needs the keys it
//! changes:
//!
//! ```toml
//! date_format = "%d/%m/%Y"
//!
//! [currency]
//! symbol = "€"
//! thousands_separator = "."
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

pub mod error;

pub use error::ConfigError;

/// How currency amounts are written.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// Prefix placed before the number, e.g. `$`
    pub symbol: String,
    /// Digits after the decimal point
    pub decimal_places: usize,
    /// Separator between groups of three integer digits
    pub thousands_separator: char,
    /// Decimal point character
    pub decimal_separator: char,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            decimal_places: 2,
            thousands_separator: ',',
            decimal_separator: '.',
        }
    }
}

/// Rendering settings for amounts and dates.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency: CurrencyConfig,
    /// `chrono` strftime pattern used for payment dates
    pub date_format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyConfig::default(),
            date_format: "%b %-d, %Y".to_string(),
        }
    }
}

impl DisplayConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

/// Load display configuration from a TOML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DisplayConfig, ConfigError> {
    let path = path.as_ref();
    debug!("Loading display configuration from: {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    DisplayConfig::from_toml_str(&contents)
}
