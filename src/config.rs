//! Configuration module
//!
//! Loaded from a TOML file (default `~/.config/room-reservations/config.toml`).
//! Every section is optional; missing values fall back to defaults.
//!
//! ```toml
//! [logging]
//! level = "debug"
//! format = "json"
//!
//! [booking]
//! reject_past_dates = true
//!
//! [[rooms]]
//! id = "A1"
//! name = "Sala Azul"
//! capacity = 12
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Room, ValidationError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid room #{index} in config: {source}")]
    InvalidRoom {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub booking: BookingConfig,
    /// Rooms registered when the service is built from this config
    pub rooms: Vec<RoomConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `room_reservations=debug`
    pub level: String,
    /// `text` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

/// Booking policy applied by the reservation service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Reject reservations starting on a day before today (UTC)
    pub reject_past_dates: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            reject_past_dates: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub capacity: Option<u32>,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Build the configured rooms, failing on the first invalid entry.
    pub fn build_rooms(&self) -> Result<Vec<Room>, ConfigError> {
        self.rooms
            .iter()
            .enumerate()
            .map(|(index, cfg)| {
                Room::new(cfg.id.as_str(), cfg.name.as_str(), cfg.capacity)
                    .map_err(|source| ConfigError::InvalidRoom { index, source })
            })
            .collect()
    }
}

/// `<platform config dir>/room-reservations/config.toml`, or a relative
/// `config.toml` when the platform has no config directory.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .map(|dir| dir.join("room-reservations").join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg = AppConfig::parse("").unwrap();
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.format, "text");
        assert!(cfg.booking.reject_past_dates);
        assert!(cfg.rooms.is_empty());
    }

    #[test]
    fn full_file_parses() {
        let cfg = AppConfig::parse(
            r#"
            [logging]
            level = "debug"
            format = "json"

            [booking]
            reject_past_dates = false

            [[rooms]]
            id = "A1"
            name = "Sala Azul"
            capacity = 12

            [[rooms]]
            id = "B1"
            name = "Sala Vermelha"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.logging.format, "json");
        assert!(!cfg.booking.reject_past_dates);

        let rooms = cfg.build_rooms().unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].capacity(), Some(12));
        assert_eq!(rooms[1].name(), "Sala Vermelha");
        assert_eq!(rooms[1].capacity(), None);
    }

    #[test]
    fn partial_logging_section_keeps_other_default() {
        let cfg = AppConfig::parse("[logging]\nformat = \"json\"\n").unwrap();
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.format, "json");
    }

    #[test]
    fn invalid_room_reports_index() {
        let cfg = AppConfig::parse(
            r#"
            [[rooms]]
            id = "A1"
            name = "Sala Azul"

            [[rooms]]
            id = "B1"
            name = "  "
            "#,
        )
        .unwrap();

        match cfg.build_rooms() {
            Err(ConfigError::InvalidRoom { index, source }) => {
                assert_eq!(index, 1);
                assert_eq!(source, ValidationError::EmptyName);
            }
            other => panic!("expected InvalidRoom, got {other:?}"),
        }
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        assert!(matches!(
            AppConfig::parse("[booking\nreject_past_dates = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AppConfig::load(Path::new("/nonexistent/room-reservations.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn default_path_ends_with_app_dir() {
        let path = default_config_path();
        assert!(path.ends_with("config.toml"));
    }
}
