//! Core runtime configuration.
//!
//! # Responsibility
//! - Describe storage, logging and geofence settings for one process.
//! - Load settings from an optional JSON file with per-field defaults.
//!
//! # Invariants
//! - A config returned by `load` has passed `validate()`.

use crate::geofence::DEFAULT_GEOFENCE_RADIUS_METERS;
use crate::logging::{default_log_level, normalize_level};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DEFAULT_DB_FILE_NAME: &str = "georemind.sqlite3";

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse config `{}`: {source}", path.display())
            }
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// SQLite file path; `None` keeps reminders in memory only.
    #[serde(default = "default_db_path")]
    pub db_path: Option<PathBuf>,
    #[serde(default = "default_level")]
    pub log_level: String,
    /// Absolute directory for rolling log files; `None` disables file logging.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
    #[serde(default = "default_radius")]
    pub geofence_radius_meters: f64,
}

fn default_db_path() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_DB_FILE_NAME))
}

fn default_level() -> String {
    default_log_level().to_string()
}

fn default_radius() -> f64 {
    DEFAULT_GEOFENCE_RADIUS_METERS
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            log_level: default_level(),
            log_dir: None,
            geofence_radius_meters: default_radius(),
        }
    }
}

impl CoreConfig {
    /// Loads config from `path`, or returns defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                serde_json::from_str::<CoreConfig>(&content).map_err(|source| {
                    ConfigError::Parse {
                        path: path.to_path_buf(),
                        source,
                    }
                })?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.log_level).map_err(ConfigError::Invalid)?;
        if !self.geofence_radius_meters.is_finite() || self.geofence_radius_meters <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "geofence_radius_meters must be positive, got {}",
                self.geofence_radius_meters
            )));
        }
        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::Invalid(format!(
                    "log_dir must be an absolute path, got `{}`",
                    dir.display()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CoreConfig};
    use std::io::Write;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: CoreConfig = serde_json::from_str(r#"{"log_level":"warn"}"#).unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.geofence_radius_meters, 100.0);
        assert_eq!(config.db_path, CoreConfig::default().db_path);
    }

    #[test]
    fn load_rejects_non_positive_radius() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"geofence_radius_meters": 0}}"#).unwrap();

        let err = CoreConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn fractional_radius_survives_a_serde_round_trip() {
        let config: CoreConfig =
            serde_json::from_str(r#"{"geofence_radius_meters": 75.3}"#).unwrap();
        assert_eq!(config.geofence_radius_meters, 75.3);

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["geofence_radius_meters"], serde_json::json!(75.3));
    }

    #[test]
    fn load_without_path_uses_defaults() {
        assert_eq!(CoreConfig::load(None).unwrap(), CoreConfig::default());
    }
}
