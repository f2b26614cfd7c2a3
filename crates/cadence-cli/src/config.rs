use cadence_core::date::{DateFormat, LocalDate};
use cadence_core::error::CoreError;
use chrono::Locale;
use chrono_tz::Tz;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown locale '{0}'. Use names like 'de_DE' or 'en_US'")]
    InvalidLocale(String),

    #[error("Unknown date format '{0}'. Use iso, short, medium or long")]
    InvalidDateFormat(String),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Path of the SQLite database file
    pub database_path: String,
    /// IANA timezone used to decide what "today" is
    pub timezone: String,
    /// Locale for the short/medium/long date formats
    pub locale: String,
    /// One of iso, short, medium, long
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: "cadence.db".to_string(),
            timezone: detect_system_timezone(),
            locale: "de_DE".to_string(),
            date_format: DateFormat::default().to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("cadence.toml"))
            .merge(Env::prefixed("CADENCE_"))
            .extract()
    }

    pub fn locale(&self) -> Result<Locale, ConfigError> {
        Locale::try_from(self.locale.as_str())
            .map_err(|_| ConfigError::InvalidLocale(self.locale.clone()))
    }

    pub fn date_format(&self) -> Result<DateFormat, ConfigError> {
        DateFormat::from_str(&self.date_format)
            .map_err(|_| ConfigError::InvalidDateFormat(self.date_format.clone()))
    }

    /// Today's date in the configured timezone.
    pub fn today(&self) -> Result<LocalDate, CoreError> {
        LocalDate::now(&self.timezone)
    }
}

/// Validates that a timezone string is a valid IANA timezone name
pub fn validate_timezone(timezone: &str) -> Result<Tz, String> {
    Tz::from_str(timezone).map_err(|_| {
        format!(
            "Invalid timezone: '{}'. Use IANA timezone names like 'Europe/Berlin'",
            timezone
        )
    })
}

/// Detects the system timezone, falling back to UTC if detection fails
pub fn detect_system_timezone() -> String {
    // Method 1: Check TZ environment variable
    if let Ok(tz) = std::env::var("TZ") {
        if validate_timezone(&tz).is_ok() {
            return tz;
        }
    }

    // Method 2: Try to read from /etc/timezone (Linux)
    #[cfg(target_os = "linux")]
    {
        if let Ok(tz) = std::fs::read_to_string("/etc/timezone") {
            let tz = tz.trim();
            if validate_timezone(tz).is_ok() {
                return tz.to_string();
            }
        }
    }

    // Method 3: Ask the platform
    if let Ok(local_tz) = iana_time_zone::get_timezone() {
        if validate_timezone(&local_tz).is_ok() {
            return local_tz;
        }
    }

    "UTC".to_string()
}
