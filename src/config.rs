//! Configuration management
//!
//! Settings are layered, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. A TOML file: `--config <path>`, else `./regimed.toml`, else
//!    `~/.config/regimed/config.toml` (first one found wins)
//! 3. `REGIMED_*` environment variables
//! 4. Command-line flags (applied by the CLI)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::{FileRuleSource, JsonRegulationStore};
use crate::core::services::DEFAULT_THRESHOLD;
use crate::paths;

/// Overrides the rules file location
pub const ENV_RULES_FILE: &str = "REGIMED_RULES_FILE";
/// Overrides the regulation snapshot location
pub const ENV_REGULATIONS_FILE: &str = "REGIMED_REGULATIONS_FILE";
/// Overrides the similarity threshold
pub const ENV_THRESHOLD: &str = "REGIMED_THRESHOLD";
/// Overrides the server bind address
pub const ENV_BIND: &str = "REGIMED_BIND";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Config file could not be read
    #[error("could not read config file {}: {source}", path.display())]
    Read {
        /// Config file location
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`Config`]
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        /// Config file location
        path: PathBuf,
        /// Underlying parse failure
        #[source]
        source: toml::de::Error,
    },

    /// An environment variable holds an unusable value
    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv {
        /// Variable name
        name: &'static str,
        /// Offending value
        value: String,
    },
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rules file, one rule per line
    pub rules_file: PathBuf,
    /// Regulation snapshot (JSON array)
    pub regulations_file: PathBuf,
    /// Similarity threshold for the fallback match
    pub threshold: f64,
    /// Address the HTTP server binds to
    pub bind: String,
    /// Regulation scraper settings
    pub scraper: ScraperConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules_file: PathBuf::from(paths::RULES_FILE),
            regulations_file: PathBuf::from(paths::REGULATIONS_FILE),
            threshold: DEFAULT_THRESHOLD,
            bind: "127.0.0.1:8000".to_string(),
            scraper: ScraperConfig::default(),
        }
    }
}

/// Regulation scraper settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Pages to download
    pub urls: Vec<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            urls: vec![
                "https://www.hhs.gov/hipaa/for-professionals/privacy/index.html".to_string(),
                "https://www.hhs.gov/hipaa/for-professionals/security/guidance/index.html"
                    .to_string(),
            ],
            timeout_secs: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string(),
        }
    }
}

impl Config {
    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the layered configuration (defaults, file, environment)
    ///
    /// `explicit` must exist when given; otherwise the project and global
    /// config files are tried and skipped when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Self::from_file(path)?,
            None => {
                let found = [paths::project_config(), paths::global_config()]
                    .into_iter()
                    .find(|p| p.is_file());
                match found {
                    Some(path) => {
                        log::debug!("using config file {}", path.display());
                        Self::from_file(&path)?
                    },
                    None => Self::default(),
                }
            },
        };

        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Apply `REGIMED_*` overrides using the given variable lookup
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_RULES_FILE) {
            self.rules_file = PathBuf::from(value);
        }
        if let Some(value) = lookup(ENV_REGULATIONS_FILE) {
            self.regulations_file = PathBuf::from(value);
        }
        if let Some(value) = lookup(ENV_THRESHOLD) {
            self.threshold = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: ENV_THRESHOLD,
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(ENV_BIND) {
            self.bind = value;
        }
        Ok(())
    }

    /// Rule source for the configured rules file
    #[must_use]
    pub fn rule_source(&self) -> FileRuleSource {
        FileRuleSource::new(&self.rules_file)
    }

    /// Regulation store for the configured snapshot file
    #[must_use]
    pub fn regulation_store(&self) -> JsonRegulationStore {
        JsonRegulationStore::new(&self.regulations_file)
    }
}
