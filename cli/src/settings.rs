//! Config loading with fallback to defaults

use std::path::Path;

use room_reservations::config::ConfigError;
use room_reservations::AppConfig;

/// Load the config at `path`, falling back to defaults when it cannot be used.
///
/// A missing file at the default location is not an error. A file given
/// explicitly must exist; any read, parse or room error is returned alongside
/// the defaults so the caller can log it.
pub fn load_or_default(path: &Path, explicit: bool) -> (AppConfig, Option<ConfigError>) {
    if !explicit && !path.exists() {
        return (AppConfig::default(), None);
    }

    match AppConfig::load(path).and_then(|cfg| cfg.build_rooms().map(|_| cfg)) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}
