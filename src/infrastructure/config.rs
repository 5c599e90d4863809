//! Configuration management

use crate::error::{PassbookError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is named
pub const DEFAULT_CONFIG_FILE: &str = "passbook.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file holding the entries
    pub data_file: PathBuf,
    /// Default destination for text exports
    pub export_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from("passwords.json"),
            export_file: PathBuf::from("passwords_export.txt"),
        }
    }
}

impl Config {
    /// Load config from a TOML file that must exist
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PassbookError::Config(format!("Config file not found: {}", path.display()))
            } else {
                PassbookError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            PassbookError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save config as TOML, overwriting the file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| PassbookError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, contents)?;

        Ok(())
    }

    /// Resolve which config file applies.
    /// An explicit path wins, then PASSBOOK_CONFIG, then the default file name.
    pub fn locate(explicit: Option<&Path>) -> ConfigLocation {
        if let Some(path) = explicit {
            return ConfigLocation::Explicit(path.to_path_buf());
        }

        if let Ok(path) = std::env::var("PASSBOOK_CONFIG") {
            return ConfigLocation::Explicit(PathBuf::from(path));
        }

        ConfigLocation::Default(PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load the config at `location`.
    /// A missing default file yields default values; a missing explicit file is an error.
    pub fn load(location: &ConfigLocation) -> Result<Self> {
        match location {
            ConfigLocation::Explicit(path) => Self::load_from_file(path),
            ConfigLocation::Default(path) => {
                if path.exists() {
                    Self::load_from_file(path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    /// Data file after applying an override flag and PASSBOOK_FILE
    pub fn data_file_with_override(&self, flag: Option<&Path>) -> PathBuf {
        if let Some(path) = flag {
            return path.to_path_buf();
        }

        std::env::var("PASSBOOK_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| self.data_file.clone())
    }
}

/// Where the config file lives and whether it was asked for explicitly
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    Explicit(PathBuf),
    Default(PathBuf),
}

impl ConfigLocation {
    pub fn path(&self) -> &Path {
        match self {
            ConfigLocation::Explicit(path) | ConfigLocation::Default(path) => path,
        }
    }
}
