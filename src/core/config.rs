//! Birthday configuration: who is celebrated, when, and with what message.
//!
//! Values come from three layers, highest priority first: command-line flags,
//! the saved `~/.panda-party/config.json`, and `BIRTHDAY_*` environment
//! variables. The core state machines only ever see a resolved
//! [`BirthdayConfig`].

use crate::utils::persistence;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const MAX_NAME_CHARS: usize = 32;

pub const ENV_NAME: &str = "BIRTHDAY_NAME";
pub const ENV_DATE: &str = "BIRTHDAY_DATE";
pub const ENV_MESSAGE: &str = "BIRTHDAY_MESSAGE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not access config file: {0}")]
    Io(#[from] io::Error),
    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("a name is required")]
    MissingName,
    #[error("name must be at most {} characters", MAX_NAME_CHARS)]
    NameTooLong,
    #[error("a birthday date is required")]
    MissingDate,
}

/// Fully resolved configuration handed to the party page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayConfig {
    pub name: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl BirthdayConfig {
    pub fn new(name: &str, date: &str, message: Option<&str>) -> Result<Self, ConfigError> {
        validate_name(name)?;
        Ok(Self {
            name: name.trim().to_string(),
            date: parse_birthday_date(date)?,
            message: normalize_message(message),
        })
    }
}

/// One partially-filled source of configuration values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLayer {
    pub name: Option<String>,
    pub date: Option<String>,
    pub message: Option<String>,
}

impl ConfigLayer {
    /// Read the `BIRTHDAY_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a layer from any key lookup; empty values count as unset.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            name: get(ENV_NAME),
            date: get(ENV_DATE),
            message: get(ENV_MESSAGE),
        }
    }

    pub fn from_saved(config: &BirthdayConfig) -> Self {
        Self {
            name: Some(config.name.clone()),
            date: Some(config.date.to_rfc3339()),
            message: config.message.clone(),
        }
    }

    /// Fill every unset field of `self` from `lower`.
    pub fn or(self, lower: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            name: self.name.or(lower.name),
            date: self.date.or(lower.date),
            message: self.message.or(lower.message),
        }
    }

    pub fn resolve(&self) -> Result<BirthdayConfig, ConfigError> {
        let name = self.name.as_deref().ok_or(ConfigError::MissingName)?;
        let date = self.date.as_deref().ok_or(ConfigError::MissingDate)?;
        BirthdayConfig::new(name, date, self.message.as_deref())
    }
}

pub fn validate_name(name: &str) -> Result<(), ConfigError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::MissingName);
    }
    if trimmed.chars().count() > MAX_NAME_CHARS {
        return Err(ConfigError::NameTooLong);
    }
    Ok(())
}

/// Parse a birthday date.
///
/// A bare `YYYY-MM-DD` is midnight UTC of that day; full RFC 3339 timestamps
/// are taken as given.
pub fn parse_birthday_date(input: &str) -> Result<DateTime<Utc>, ConfigError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::MissingDate);
    }
    if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(midnight) = day.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| ConfigError::InvalidDate(trimmed.to_string()))
}

fn normalize_message(message: Option<&str>) -> Option<String> {
    message
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// Reads and writes the saved configuration file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Store at `~/.panda-party/config.json`.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            path: persistence::app_dir()?.join(CONFIG_FILE_NAME),
        })
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Option<BirthdayConfig>, ConfigError> {
        Ok(persistence::load_json(&self.path)?)
    }

    pub fn save(&self, config: &BirthdayConfig) -> Result<(), ConfigError> {
        persistence::save_json(&self.path, config)?;
        tracing::info!(path = %self.path.display(), "saved birthday config");
        Ok(())
    }

    pub fn clear(&self) -> Result<(), ConfigError> {
        persistence::remove_file_if_exists(&self.path)?;
        Ok(())
    }
}

/// Saved configuration, if there is a store and it holds a readable file.
///
/// A missing store or an unreadable file is logged and treated as nothing
/// saved, so CLI and environment values can still start the party.
pub fn load_saved(store: Option<&ConfigStore>) -> Option<BirthdayConfig> {
    let store = store?;
    match store.load() {
        Ok(saved) => saved,
        Err(e) => {
            tracing::warn!(
                path = %store.path().display(),
                error = %e,
                "ignoring unreadable saved config"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_plain_date_is_utc_midnight() {
        let date = parse_birthday_date("2025-03-14").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2025, 3, 14, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rfc3339_date() {
        let date = parse_birthday_date("2025-03-14T18:30:00+02:00").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(2025, 3, 14, 16, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_invalid_date() {
        assert!(matches!(
            parse_birthday_date("next tuesday"),
            Err(ConfigError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_birthday_date("2025-02-30"),
            Err(ConfigError::InvalidDate(_))
        ));
        assert!(matches!(
            parse_birthday_date("   "),
            Err(ConfigError::MissingDate)
        ));
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Trish").is_ok());
        assert!(matches!(validate_name("  "), Err(ConfigError::MissingName)));
        let long = "x".repeat(MAX_NAME_CHARS + 1);
        assert!(matches!(validate_name(&long), Err(ConfigError::NameTooLong)));
    }

    #[test]
    fn test_empty_message_becomes_none() {
        let config = BirthdayConfig::new("Trish", "2025-03-14", Some("   ")).unwrap();
        assert_eq!(config.message, None);
        let config = BirthdayConfig::new(" Trish ", "2025-03-14", Some(" hi ")).unwrap();
        assert_eq!(config.name, "Trish");
        assert_eq!(config.message.as_deref(), Some("hi"));
    }

    #[test]
    fn test_layers_prefer_higher_priority() {
        let cli = ConfigLayer {
            name: Some("Cli".into()),
            ..Default::default()
        };
        let env = ConfigLayer {
            name: Some("Env".into()),
            date: Some("2025-01-01".into()),
            message: Some("from env".into()),
        };
        let merged = cli.or(env);
        let config = merged.resolve().unwrap();
        assert_eq!(config.name, "Cli");
        assert_eq!(config.message.as_deref(), Some("from env"));
    }

    #[test]
    fn test_resolve_reports_missing_fields() {
        let only_name = ConfigLayer {
            name: Some("Trish".into()),
            ..Default::default()
        };
        assert!(matches!(only_name.resolve(), Err(ConfigError::MissingDate)));
        assert!(matches!(
            ConfigLayer::default().resolve(),
            Err(ConfigError::MissingName)
        ));
    }

    #[test]
    fn test_from_lookup_ignores_blank_values() {
        let layer = ConfigLayer::from_lookup(|key| match key {
            ENV_NAME => Some("Trish".to_string()),
            ENV_DATE => Some("".to_string()),
            _ => None,
        });
        assert_eq!(layer.name.as_deref(), Some("Trish"));
        assert_eq!(layer.date, None);
    }

    #[test]
    fn test_saved_layer_round_trips_through_resolve() {
        let config = BirthdayConfig::new("Trish", "2025-03-14", Some("Love you")).unwrap();
        let resolved = ConfigLayer::from_saved(&config).resolve().unwrap();
        assert_eq!(resolved, config);
    }

    #[test]
    fn test_store_save_load_clear() {
        let path = std::env::temp_dir()
            .join(format!("panda-party-config-{}", std::process::id()))
            .join(CONFIG_FILE_NAME);
        let store = ConfigStore::at(&path);
        assert!(store.load().unwrap().is_none());

        let config = BirthdayConfig::new("Trish", "2025-03-14", None).unwrap();
        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap(), Some(config));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_load_saved_without_store_still_resolves_cli() {
        assert_eq!(load_saved(None), None);
        let cli = ConfigLayer {
            name: Some("Trish".into()),
            date: Some("2025-03-14".into()),
            message: None,
        };
        let saved = load_saved(None).as_ref().map(ConfigLayer::from_saved);
        let config = cli.or(saved.unwrap_or_default()).resolve().unwrap();
        assert_eq!(config.name, "Trish");
    }

    #[test]
    fn test_load_saved_ignores_corrupt_file() {
        let dir =
            std::env::temp_dir().join(format!("panda-party-corrupt-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();
        let store = ConfigStore::at(&path);
        assert!(store.load().is_err());
        assert_eq!(load_saved(Some(&store)), None);
        store.clear().unwrap();
    }
}
