//! Application configuration.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Session token of the signed-in user.
    #[serde(default)]
    pub access_token: String,

    /// Public project key sent with every backend request.
    #[serde(default)]
    pub api_key: String,

    /// Show profile lookup failures on the dashboard instead of only logging them.
    #[serde(default)]
    pub surface_errors: bool,
}

impl Config {
    /// Create Config with the given session credentials.
    pub fn new(access_token: String, api_key: String) -> Self {
        Config {
            access_token,
            api_key,
            surface_errors: false,
        }
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Removes the configuration file, if any. Missing files are not an error.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// The session token, if one has been stored.
    pub fn session_token(&self) -> Option<&str> {
        let token = self.access_token.trim();
        (!token.is_empty()).then_some(token)
    }
}

fn get_app_dir() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home.join(".agent-dashboard"))
}

/// Location of the configuration file: `~/.agent-dashboard/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    Ok(get_app_dir()?.join("config.json"))
}

/// Location of the log file: `~/.agent-dashboard/dashboard.log`.
pub fn get_log_path() -> Result<PathBuf, std::io::Error> {
    Ok(get_app_dir()?.join("dashboard.log"))
}
