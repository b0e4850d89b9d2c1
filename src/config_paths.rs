//! Where brewbook looks for its files
//!
//! Project config sits next to the content: `./brewbook.yaml`.
//! Per-user files sit in one directory:
//!
//! ```text
//! ~/.config/brewbook/          (%APPDATA%\brewbook on Windows)
//! ├── config.yaml             fallback site config
//! ├── themes/<id>.yaml        user themes, shadowing built-ins
//! └── logs/brewbook.log.*     daily log files
//! ```

use std::path::{Path, PathBuf};

const APP_DIR: &str = "brewbook";

/// Name of the project-level config file
pub const PROJECT_CONFIG_FILE: &str = "brewbook.yaml";

/// Per-user brewbook directory
///
/// `$XDG_CONFIG_HOME/brewbook` when set, else `~/.config/brewbook`; on
/// Windows the roaming app data directory.
pub fn config_dir() -> Option<PathBuf> {
    let base = if cfg!(target_os = "windows") {
        dirs::config_dir()
    } else {
        std::env::var_os("XDG_CONFIG_HOME")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
    };
    base.map(|dir| dir.join(APP_DIR))
}

fn user_path(name: &str) -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(name))
}

pub fn themes_dir() -> Option<PathBuf> {
    user_path("themes")
}

/// User-level fallback for the site config
pub fn config_file() -> Option<PathBuf> {
    user_path("config.yaml")
}

pub fn project_config_file(root: &Path) -> PathBuf {
    root.join(PROJECT_CONFIG_FILE)
}

pub fn logs_dir() -> Option<PathBuf> {
    user_path("logs")
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No home or config directory found".to_string())?;
    std::fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create {}: {}", logs.display(), e))?;
    Ok(logs)
}
