//! Application configuration loaded from TOML.
//!
//! Every section is optional; missing keys fall back to the defaults of the
//! corresponding type.
//!
//! ```toml
//! [assets]
//! backend = "fs"
//! root = "cards"
//!
//! [brackets]
//! minimum_income = "2000"
//! high_income_floor = "5000"
//! high_bracket = "5000+"
//!
//! [logging]
//! level = "info"
//! file = "income-calculator.log"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use income_core::BracketMapping;
use income_core::assets::StoreConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "income-calculator.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// A bare level or any `EnvFilter` directive.
    pub level: String,
    /// Appended to when set; the directory must exist.
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

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub assets: StoreConfig,
    pub brackets: BracketMapping,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn from_toml_str(
        text: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text, path)?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Loads `explicit` when given (it must exist), otherwise
    /// [`DEFAULT_CONFIG_FILE`] from `dir` if present, otherwise defaults.
    pub fn discover(
        explicit: Option<&Path>,
        dir: &Path,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::load(&fallback)
        } else {
            debug!("no configuration file, using defaults");
            Ok(Self::default())
        }
    }
}
