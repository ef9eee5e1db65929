//! apptbook configuration.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{AppointmentError, AppointmentResult};
use crate::store::AppointmentStore;

static DEFAULT_CLINIC_NAME: &str = "Clinic";
static DEFAULT_LOG_LEVEL: &str = "warn";

fn default_clinic_name() -> String {
    DEFAULT_CLINIC_NAME.to_string()
}

fn default_seed_demo_data() -> bool {
    true
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// Configuration at ~/.config/apptbook/config.toml, overridable with
/// `APPTBOOK_*` environment variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Shown in headers and used as the exported calendar name
    #[serde(default = "default_clinic_name")]
    pub clinic_name: String,

    /// Start every store with the demo appointments
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,

    /// Pin "today" for stats and day views instead of the local date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,

    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            clinic_name: default_clinic_name(),
            seed_demo_data: default_seed_demo_data(),
            today: None,
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    pub fn config_path() -> AppointmentResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AppointmentError::Config("Could not determine config directory".into()))?
            .join("apptbook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, writing a commented template there first
    /// if no file exists yet.
    pub fn load() -> AppointmentResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from `path` (which may be absent) plus environment overrides.
    pub fn load_from(path: &Path) -> AppointmentResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("APPTBOOK").try_parsing(true))
            .build()
            .map_err(|e| AppointmentError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AppointmentError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> AppointmentResult<()> {
        let contents = format!(
            "\
# apptbook configuration

# Name shown in listings and exported calendars:
# clinic_name = \"{}\"

# Start with the demo appointments loaded:
# seed_demo_data = true

# Treat this date as today (YYYY-MM-DD):
# today = \"2026-01-30\"

# Log filter used when RUST_LOG is not set:
# log_level = \"{}\"
",
            DEFAULT_CLINIC_NAME, DEFAULT_LOG_LEVEL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppointmentError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| AppointmentError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// The effective configuration as TOML.
    pub fn to_toml(&self) -> AppointmentResult<String> {
        toml::to_string_pretty(self).map_err(|e| AppointmentError::Config(e.to_string()))
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// A fresh store as configured.
    pub fn store(&self) -> AppointmentStore {
        if self.seed_demo_data {
            AppointmentStore::seeded()
        } else {
            AppointmentStore::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.clinic_name, "Clinic");
        assert!(config.seed_demo_data);
        assert_eq!(config.today, None);
        assert_eq!(config.store().len(), 12);
    }

    #[test]
    fn test_default_template_loads_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        AppConfig::create_default_config(&path).unwrap();
        let config = AppConfig::load_from(&path).unwrap();

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "clinic_name = \"Riverside Clinic\"\nseed_demo_data = false\ntoday = \"2026-01-30\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();

        assert_eq!(config.clinic_name, "Riverside Clinic");
        assert!(config.store().is_empty());
        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2026, 1, 30).unwrap());
    }

    #[test]
    fn test_bad_value_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "today = \"next tuesday\"\n").unwrap();

        assert!(matches!(
            AppConfig::load_from(&path),
            Err(AppointmentError::Config(_))
        ));
    }

    #[test]
    fn test_to_toml_skips_unset_today() {
        let toml = AppConfig::default().to_toml().unwrap();
        assert!(toml.contains("clinic_name = \"Clinic\""));
        assert!(!toml.contains("today"));
    }
}
