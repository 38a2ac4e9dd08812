//! Match settings and their persistence
//!
//! Saves and loads [`MatchSettings`] to/from a JSON file.
//!
//! # File Location
//!
//! By default settings live in `settings.json` inside the platform config
//! directory (e.g. `~/.config/chessmatch/settings.json` on Linux). A path
//! given on the command line replaces it.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings and are logged
//! - Save failures are returned to the caller

use std::fs;
use std::path::{Path, PathBuf};

use chess_engine::constants::DEFAULT_MAX_PLIES;
use chess_engine::SearchConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::agents::MonteCarloConfig;
use crate::error::{MatchError, MatchResult};
use crate::trials::ResultsFormat;

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Trials per run when none is configured
pub const DEFAULT_TRIALS: u32 = 10;

/// Everything a match or a batch of trials needs besides the agents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    /// Decisions after which a match is called a draw
    pub max_plies: u32,
    /// Settings handed to every minimax agent
    pub search: SearchConfig,
    /// Settings handed to every Monte Carlo agent
    pub monte_carlo: MonteCarloConfig,
    /// Matches per trial run
    pub trials: u32,
    /// Worker threads for trial runs; 0 uses one per core, 1 runs in order
    pub threads: usize,
    /// Encoding of trial records
    pub results_format: ResultsFormat,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            max_plies: DEFAULT_MAX_PLIES,
            search: SearchConfig::default(),
            monte_carlo: MonteCarloConfig::default(),
            trials: DEFAULT_TRIALS,
            threads: 0,
            results_format: ResultsFormat::Json,
        }
    }
}

/// Path to `settings.json` in the user's configuration directory
///
/// Falls back to a local `settings.json` if the system config dir cannot be
/// found.
pub fn default_settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "chessmatch", "chessmatch") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Load settings from `path`, using defaults if it is missing or invalid
pub fn load_settings(path: &Path) -> MatchSettings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return MatchSettings::default();
    }

    match read_settings(path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, e
            );
            MatchSettings::default()
        }
    }
}

fn read_settings(path: &Path) -> MatchResult<MatchSettings> {
    let contents = fs::read_to_string(path).map_err(MatchError::SettingsIo)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write `settings` to `path` as pretty-printed JSON, creating parent dirs
pub fn save_settings(settings: &MatchSettings, path: &Path) -> MatchResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(MatchError::SettingsIo)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json).map_err(MatchError::SettingsIo)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let settings: MatchSettings = serde_json::from_str(r#"{"max_plies": 40}"#).unwrap();
        assert_eq!(settings.max_plies, 40);
        assert_eq!(settings.search, SearchConfig::default());
        assert_eq!(settings.trials, DEFAULT_TRIALS);
    }

    #[test]
    fn test_nested_search_settings() {
        let settings: MatchSettings =
            serde_json::from_str(r#"{"search": {"depth": 1, "seed": 7}}"#).unwrap();
        assert_eq!(settings.search.depth, 1);
        assert_eq!(settings.search.seed, Some(7));
        assert_eq!(settings.search.sample_width, SearchConfig::default().sample_width);
    }

    #[test]
    fn test_monte_carlo_and_threads_settings() {
        let settings: MatchSettings = serde_json::from_str(
            r#"{"monte_carlo": {"root_moves": 8}, "threads": 2, "trials": 3}"#,
        )
        .unwrap();
        assert_eq!(settings.monte_carlo.root_moves, 8);
        assert_eq!(settings.monte_carlo.playouts, MonteCarloConfig::default().playouts);
        assert_eq!(settings.threads, 2);
        assert_eq!(settings.trials, 3);
    }
}
