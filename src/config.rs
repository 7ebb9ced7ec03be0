use std::env;
use std::path::PathBuf;

use log::info;
use thiserror::Error;

use crate::models::Configuration;

const DEFAULT_OUTPUT: &str = "dashboard.html";
const DEFAULT_TITLE: &str = "Monitor de Calidad del Aire";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} is set but empty")]
    Empty { key: &'static str },
}

/// Optional replacements for the sample monitoring settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub sample_interval_seconds: Option<u32>,
    pub display_window_hours: Option<u32>,
    pub critical_threshold: Option<u32>,
}

impl ConfigOverrides {
    pub fn apply(&self, base: Configuration) -> Configuration {
        Configuration {
            sample_interval_seconds: self
                .sample_interval_seconds
                .unwrap_or(base.sample_interval_seconds),
            display_window_hours: self
                .display_window_hours
                .unwrap_or(base.display_window_hours),
            critical_threshold: self.critical_threshold.unwrap_or(base.critical_threshold),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub output_path: PathBuf,
    pub title: String,
    pub overrides: ConfigOverrides,
}

impl DashboardConfig {
    pub fn new() -> Result<Self, ConfigError> {
        // Load environment variables
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup (the process environment in `new`)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output_path = match lookup("DASHBOARD_OUTPUT") {
            Some(path) if path.trim().is_empty() => {
                return Err(ConfigError::Empty {
                    key: "DASHBOARD_OUTPUT",
                })
            }
            Some(path) => PathBuf::from(path.trim()),
            None => PathBuf::from(DEFAULT_OUTPUT),
        };

        let title = lookup("DASHBOARD_TITLE")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let overrides = ConfigOverrides {
            sample_interval_seconds: parse_number(&lookup, "SAMPLE_INTERVAL_SECONDS")?,
            display_window_hours: parse_number(&lookup, "DISPLAY_WINDOW_HOURS")?,
            critical_threshold: parse_number(&lookup, "CRITICAL_THRESHOLD")?,
        };

        info!("Output: {}", output_path.display());
        if overrides != ConfigOverrides::default() {
            info!("Settings overridden from environment: {:?}", overrides);
        }

        Ok(DashboardConfig {
            output_path,
            title,
            overrides,
        })
    }
}

fn parse_number<F>(lookup: &F, key: &'static str) -> Result<Option<u32>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => match value.trim().parse::<u32>() {
            Ok(number) => Ok(Some(number)),
            Err(_) => Err(ConfigError::InvalidNumber { key, value }),
        },
        None => Ok(None),
    }
}
