//! Configuration loading
//!
//! Reads `~/.config/cozyyu/config.toml` (or an explicit path) into [`Config`].

mod types;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::SearchError;

pub use types::{Config, Endpoints, SearchConfig, TabConfig};
pub use types::{DEFAULT_BASE_URL, DEFAULT_DEBOUNCE_MS};

const CONFIG_DIR: &str = "cozyyu";
const CONFIG_FILE: &str = "config.toml";

/// Default config location, if a home directory is known
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration
///
/// An explicit `path` must exist. When no path is given the default location
/// is tried and a missing file yields the default configuration.
pub fn load_config(path: Option<&Path>) -> Result<Config, SearchError> {
    match path {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Some(default_path) => match read_config(&default_path) {
                Err(SearchError::ConfigRead { source, .. })
                    if source.kind() == io::ErrorKind::NotFound =>
                {
                    log::debug!("No config at {}, using defaults", default_path.display());
                    Ok(Config::default())
                }
                other => other,
            },
            None => Ok(Config::default()),
        },
    }
}

fn read_config(path: &Path) -> Result<Config, SearchError> {
    let contents = fs::read_to_string(path).map_err(|source| SearchError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config: Config = toml::from_str(&contents).map_err(|e| SearchError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}
