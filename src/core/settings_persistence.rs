//! Settings persistence
//!
//! Saves and loads [`EngineSettings`] to/from a JSON file.
//!
//! # File Location
//!
//! `settings.json` in the user's configuration directory, e.g.
//! `~/.config/tri_chess/settings.json` on Linux. Falls back to a local
//! `settings.json` if the system config dir cannot be found.
//!
//! # Error Handling
//!
//! - [`load_settings`] never fails: a missing, unreadable or invalid file falls
//!   back to defaults with a warning
//! - [`save_settings`] reports errors to the caller

use super::error::CoreResult;
use super::settings::EngineSettings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the default settings file path
pub fn settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "tri_chess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and validate settings from `path`
pub fn load_settings_from(path: &Path) -> CoreResult<EngineSettings> {
    let contents = fs::read_to_string(path)?;
    let settings: EngineSettings = serde_json::from_str(&contents)?;
    settings.validate()?;
    Ok(settings)
}

/// Load settings from `path` (or the default location), falling back to
/// defaults on any problem
pub fn load_settings(path: Option<&Path>) -> EngineSettings {
    let file = path.map_or_else(settings_path, Path::to_path_buf);

    if !file.exists() {
        info!(
            "[SETTINGS] No settings file found at {:?}. Using defaults.",
            file
        );
        return EngineSettings::default();
    }

    match load_settings_from(&file) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", file);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                file, e
            );
            EngineSettings::default()
        }
    }
}

/// Write settings as pretty JSON, creating the directory if needed
pub fn save_settings(settings: &EngineSettings, path: &Path) -> CoreResult<()> {
    settings.validate()?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Difficulty;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir()
            .join("tri_chess_tests")
            .join(format!("{}-{}-{}", name, std::process::id(), nanos))
    }

    #[test]
    fn test_save_then_load() {
        let path = unique_temp_dir("save_then_load").join(SETTINGS_FILENAME);
        let settings = EngineSettings {
            difficulty: Difficulty::Expert,
            seed: Some(42),
            ..Default::default()
        };
        save_settings(&settings, &path).unwrap();
        assert_eq!(load_settings_from(&path).unwrap(), settings);
        assert_eq!(load_settings(Some(&path)), settings);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_or_corrupt_file_falls_back() {
        let dir = unique_temp_dir("corrupt");
        let missing = dir.join("absent.json");
        assert_eq!(load_settings(Some(&missing)), EngineSettings::default());

        fs::create_dir_all(&dir).unwrap();
        let corrupt = dir.join(SETTINGS_FILENAME);
        fs::write(&corrupt, "{ definitely not json").unwrap();
        assert!(load_settings_from(&corrupt).is_err());
        assert_eq!(load_settings(Some(&corrupt)), EngineSettings::default());
        let _ = fs::remove_dir_all(&dir);
    }
}
