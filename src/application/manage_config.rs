//! Config management use case

use crate::error::{PassbookError, Result};
use crate::infrastructure::{Config, ConfigLocation};
use std::path::PathBuf;

/// Service for reading and editing the config file
pub struct ConfigService {
    location: ConfigLocation,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(location: ConfigLocation) -> Self {
        ConfigService { location }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load(&self.location)?;

        match key {
            "data_file" => Ok(config.data_file.display().to_string()),
            "export_file" => Ok(config.export_file.display().to_string()),
            _ => Err(Self::unknown_key(key)),
        }
    }

    /// Set a config value, creating the config file if needed.
    /// A missing file starts from defaults, whether it was named explicitly or not.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = if self.location.path().exists() {
            Config::load_from_file(self.location.path())?
        } else {
            Config::default()
        };

        if value.trim().is_empty() {
            return Err(PassbookError::Config(format!(
                "Value for '{}' must not be empty",
                key
            )));
        }

        match key {
            "data_file" => config.data_file = PathBuf::from(value),
            "export_file" => config.export_file = PathBuf::from(value),
            _ => return Err(Self::unknown_key(key)),
        }

        config.save_to_file(self.location.path())?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load(&self.location)
    }

    fn unknown_key(key: &str) -> PassbookError {
        PassbookError::Config(format!(
            "Unknown config key: '{}'. Valid keys are: data_file, export_file",
            key
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service_in(temp: &TempDir) -> ConfigService {
        ConfigService::new(ConfigLocation::Default(temp.path().join("passbook.toml")))
    }

    #[test]
    fn test_get_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        assert_eq!(service.get("data_file").unwrap(), "passwords.json");
        assert_eq!(service.get("export_file").unwrap(), "passwords_export.txt");
    }

    #[test]
    fn test_set_creates_file() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        service.set("data_file", "vault.json").unwrap();

        assert!(temp.path().join("passbook.toml").exists());
        assert_eq!(service.get("data_file").unwrap(), "vault.json");
        assert_eq!(service.list().unwrap().export_file, PathBuf::from("passwords_export.txt"));
    }

    #[test]
    fn test_set_creates_missing_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("mine.toml");
        let service = ConfigService::new(ConfigLocation::Explicit(path.clone()));

        assert!(service.get("data_file").is_err());
        service.set("export_file", "dump.txt").unwrap();

        assert!(path.exists());
        assert_eq!(service.get("export_file").unwrap(), "dump.txt");
        assert_eq!(service.get("data_file").unwrap(), "passwords.json");
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        assert!(matches!(
            service.get("colour"),
            Err(PassbookError::Config(msg)) if msg.contains("Unknown config key")
        ));
        assert!(service.set("colour", "blue").is_err());
        assert!(!temp.path().join("passbook.toml").exists());
    }

    #[test]
    fn test_empty_value_rejected() {
        let temp = TempDir::new().unwrap();
        let service = service_in(&temp);

        assert!(service.set("data_file", "  ").is_err());
    }
}
