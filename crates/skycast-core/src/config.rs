use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Configuration validation errors
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of config validation
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationResult {
    /// Returns true if there are no errors (warnings are OK)
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Get a user-friendly message summarizing all errors
    pub fn error_summary(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }
        self.errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Temperature unit preference.
///
/// The numeric values returned by the forecast API are already in the
/// requested unit, so this only selects the unit string sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// The wire/storage value, matching Open-Meteo's `temperature_unit` parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        }
    }
}

impl std::str::FromStr for TemperatureUnit {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "celsius" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            other => Err(ConfigError::InvalidSetting(format!(
                "unknown temperature unit '{other}'"
            ))),
        }
    }
}

/// What a settings update actually changed.
///
/// Only a unit change affects forecast data; a theme change is display-only
/// and must never drive a refetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsChange {
    pub unit_changed: bool,
    pub theme_changed: bool,
}

impl SettingsChange {
    pub fn any(self) -> bool {
        self.unit_changed || self.theme_changed
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application configuration directory
    pub config_dir: PathBuf,

    /// Weather settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Temperature unit preference
    pub temperature_unit: TemperatureUnit,

    /// How often the location collaborator re-announces a coordinate, in minutes
    pub refresh_minutes: u32,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            temperature_unit: TemperatureUnit::Celsius,
            refresh_minutes: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme name. Opaque to the weather pipeline; stored and passed through.
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "auto".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("skycast");

        Self {
            config_dir,
            weather: WeatherConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, creating default if it doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            let config = Self::default();
            config.save_to(config_path)?;
            return Ok(config);
        }

        let contents = std::fs::read_to_string(config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Returns a ValidationResult containing any errors or warnings.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::default();

        if self.weather.refresh_minutes == 0 {
            result.add_warning(
                "weather.refresh_minutes",
                "Location refresh disabled (0 minutes)",
            );
        } else if self.weather.refresh_minutes > 1440 {
            result.add_warning(
                "weather.refresh_minutes",
                "Location refresh interval is more than 24 hours",
            );
        }

        if self.ui.theme.is_empty() {
            result.add_error("ui.theme", "Theme must not be empty");
        }

        result
    }

    /// Apply new preference values, reporting what actually changed.
    ///
    /// The caller persists with [`Config::save`] when anything changed and
    /// pushes the unit to the weather session only when `unit_changed` is
    /// set; theme updates stop here.
    pub fn apply_settings(&mut self, unit: TemperatureUnit, theme: &str) -> SettingsChange {
        let mut change = SettingsChange::default();

        if unit != self.weather.temperature_unit {
            self.weather.temperature_unit = unit;
            change.unit_changed = true;
        }
        if theme != self.ui.theme {
            self.ui.theme = theme.to_string();
            change.theme_changed = true;
        }

        change
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(config_path, contents)?;

        Ok(())
    }

    /// Get the path to the configuration file
    fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("skycast");

        Ok(config_dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_default_config() {
        let config = Config::default();
        let result = config.validate();
        assert!(
            result.is_valid(),
            "Default config should be valid: {:?}",
            result.errors
        );
    }

    #[test]
    fn test_default_unit_is_celsius() {
        let config = Config::default();
        assert_eq!(config.weather.temperature_unit, TemperatureUnit::Celsius);
        assert_eq!(config.ui.theme, "auto");
    }

    #[test]
    fn test_unit_round_trips_through_str() {
        for unit in [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit] {
            let parsed: TemperatureUnit = unit.as_str().parse().unwrap();
            assert_eq!(parsed, unit);
        }
        assert!("kelvin".parse::<TemperatureUnit>().is_err());
    }

    #[test]
    fn test_zero_refresh_is_warning() {
        let mut config = Config::default();
        config.weather.refresh_minutes = 0;
        let result = config.validate();
        assert!(result.is_valid());
        assert!(result
            .warnings
            .iter()
            .any(|w| w.field == "weather.refresh_minutes"));
    }

    #[test]
    fn test_empty_theme_is_error() {
        let mut config = Config::default();
        config.ui.theme = String::new();
        let result = config.validate();
        assert!(!result.is_valid());
        assert!(result.errors.iter().any(|e| e.field == "ui.theme"));
    }

    #[test]
    fn test_validation_result_error_summary() {
        let mut result = ValidationResult::default();
        result.add_error("field1", "error1");
        result.add_error("field2", "error2");
        let summary = result.error_summary();
        assert!(summary.contains("field1"));
        assert!(summary.contains("field2"));
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.weather.temperature_unit = TemperatureUnit::Fahrenheit;
        config.ui.theme = "dark".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(
            loaded.weather.temperature_unit,
            TemperatureUnit::Fahrenheit
        );
        assert_eq!(loaded.ui.theme, "dark");
    }

    #[test]
    fn test_theme_only_change_persists_without_unit_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        let change = config.apply_settings(config.weather.temperature_unit, "dark");
        assert!(change.theme_changed);
        assert!(!change.unit_changed, "theme update must not touch the unit");
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.ui.theme, "dark");
        assert_eq!(loaded.weather.temperature_unit, TemperatureUnit::Celsius);
    }

    #[test]
    fn test_unchanged_settings_report_no_change() {
        let mut config = Config::default();
        let change = config.apply_settings(TemperatureUnit::Celsius, "auto");
        assert!(!change.any());
    }

    #[test]
    fn test_unit_change_is_reported() {
        let mut config = Config::default();
        let change = config.apply_settings(TemperatureUnit::Fahrenheit, "auto");
        assert!(change.unit_changed);
        assert!(!change.theme_changed);
        assert_eq!(config.weather.temperature_unit, TemperatureUnit::Fahrenheit);
    }

    #[test]
    fn test_load_creates_default_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.weather.temperature_unit, TemperatureUnit::Celsius);
        assert!(path.exists());
    }
}
