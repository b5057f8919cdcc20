//! Centralized path definitions for regimed
//!
//! ## Layout
//!
//! ```text
//! ./                                # Working directory
//! ├── regimed.toml                  # Project config (optional)
//! ├── rules.txt                     # One compliance rule per line
//! └── regulations.json              # Scraped regulation snapshot
//!
//! ~/.config/regimed/
//! └── config.toml                   # User-level config (optional)
//! ```

use std::path::PathBuf;

/// Default rules file
pub const RULES_FILE: &str = "rules.txt";

/// Default regulation snapshot file
pub const REGULATIONS_FILE: &str = "regulations.json";

/// Project configuration filename
pub const PROJECT_CONFIG: &str = "regimed.toml";

const GLOBAL_DIR: &str = ".config/regimed";
const GLOBAL_CONFIG: &str = "config.toml";

/// Project config in the current directory
#[must_use]
pub fn project_config() -> PathBuf {
    PathBuf::from(PROJECT_CONFIG)
}

/// Global config directory (`~/.config/regimed`)
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Global config file (`~/.config/regimed/config.toml`)
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG)
}
