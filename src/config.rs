use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

use crate::error::{BumperError, Result};

/// Environment variable holding the tracker API token
pub const TRACKER_KEY_VAR: &str = "TRACKER_KEY";
/// Environment variable holding the numeric tracker project id
pub const PROJECT_ID_VAR: &str = "PROJECT_ID";

/// Represents the complete configuration for bumper.
///
/// Holds the default commit range and the tracker connection settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_commit_range")]
    pub commit_range: String,

    #[serde(default)]
    pub tracker: TrackerConfig,
}

/// Returns the default commit range, old branch to new branch.
fn default_commit_range() -> String {
    "master..release-elect".to_string()
}

/// Returns the Pivotal Tracker v5 API root.
fn default_base_url() -> String {
    "https://www.pivotaltracker.com/services/v5".to_string()
}

/// Tracker connection settings as read from the config file.
///
/// The key and project id are optional here because the environment may
/// supply them; see [Config::tracker_settings].
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TrackerConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default)]
    pub project_id: Option<u64>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            base_url: default_base_url(),
            api_key: None,
            project_id: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            commit_range: default_commit_range(),
            tracker: TrackerConfig::default(),
        }
    }
}

/// Fully specified tracker settings, ready for a client.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerSettings {
    pub base_url: String,
    pub api_key: String,
    pub project_id: u64,
}

impl Config {
    /// Apply `TRACKER_KEY` and `PROJECT_ID` overrides.
    ///
    /// `lookup` resolves variable names; pass `|name| std::env::var(name).ok()`
    /// for the process environment. An empty key is ignored, a project id that
    /// is not a number is an error.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(TRACKER_KEY_VAR).filter(|key| !key.is_empty()) {
            self.tracker.api_key = Some(key);
        }

        if let Some(raw) = lookup(PROJECT_ID_VAR) {
            let project_id = raw.trim().parse::<u64>().map_err(|e| {
                BumperError::config(format!("Invalid Project ID '{}': {}", raw, e))
            })?;
            self.tracker.project_id = Some(project_id);
        }

        Ok(())
    }

    /// Validate that the tracker key and project id are present.
    pub fn tracker_settings(&self) -> Result<TrackerSettings> {
        let api_key = self
            .tracker
            .api_key
            .clone()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                BumperError::config(format!(
                    "Invalid Tracker Key: set {} or tracker.api_key",
                    TRACKER_KEY_VAR
                ))
            })?;

        let project_id = self.tracker.project_id.ok_or_else(|| {
            BumperError::config(format!(
                "Invalid Project ID: set {} or tracker.project_id",
                PROJECT_ID_VAR
            ))
        })?;

        Ok(TrackerSettings {
            base_url: self.tracker.base_url.clone(),
            api_key,
            project_id,
        })
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `bumper.toml` in current directory
/// 3. `.bumper.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./bumper.toml").exists() {
        fs::read_to_string("./bumper.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".bumper.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str).map_err(|e| BumperError::config(e.to_string()))
}

/// Load the config file and layer the process environment on top.
pub fn load_with_env(config_path: Option<&str>) -> Result<Config> {
    let mut config = load_config(config_path)?;
    config.apply_env_overrides(|name| env::var(name).ok())?;
    Ok(config)
}
