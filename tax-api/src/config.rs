//! Service configuration.
//!
//! Read from an optional TOML file; every key has a default, so an empty
//! file or no file at all is valid:
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [tax]
//! regime = "rent-relief"
//!
//! [logging]
//! level = "info"
//! file = "tax-api.log"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tax_core::{RegimeRegistry, TaxCalculator, TaxRegime, TaxRegimeError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub tax: TaxConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxConfig {
    /// Name looked up in [`RegimeRegistry::builtin`].
    pub regime: String,
}

impl Default for TaxConfig {
    fn default() -> Self {
        Self {
            regime: TaxRegime::RENT_RELIEF.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Any `EnvFilter` directive. `RUST_LOG` wins when set.
    pub level: String,
    /// Log file to append to, in addition to stdout.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl AppConfig {
    /// # Errors
    /// * [`ConfigError::Parse`] on malformed TOML or a mistyped key.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// # Errors
    /// * [`ConfigError::Read`] if the file cannot be read.
    /// * [`ConfigError::Parse`] on malformed TOML or a mistyped key.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Build the calculator for the configured regime.
    ///
    /// # Errors
    /// * [`TaxRegimeError::UnknownRegime`] if no built-in regime has that name.
    pub fn calculator(&self) -> Result<TaxCalculator, TaxRegimeError> {
        let registry = RegimeRegistry::builtin();
        let regime = registry.get(&self.tax.regime)?;
        TaxCalculator::new(regime.clone())
    }
}
