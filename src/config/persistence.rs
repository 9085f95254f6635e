// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Preference persistence (save/load).
//!
//! Each concern writes its own file under the per-user config directory:
//! `config.toml` for settings, JSON files for the notes, per-sound volumes
//! and saved mixes, and a `backgrounds/` directory for imported images.
//! Missing or malformed data always loads as the default value; corruption
//! is logged, never surfaced.

use crate::config::AppConfig;
use crate::mixer::SoundMix;
use crate::notepad::Note;
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    NoConfigDir,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Manages preference file persistence.
pub struct ConfigManager {
    config_dir: PathBuf,
    backgrounds_dir: PathBuf,
}

impl ConfigManager {
    /// Create a config manager rooted at the per-user config directory.
    pub fn new() -> Result<Self, ConfigError> {
        let project_dirs = ProjectDirs::from("", "", "hearth").ok_or(ConfigError::NoConfigDir)?;
        Self::at(project_dirs.config_dir().to_path_buf())
    }

    /// Create a config manager rooted at an explicit directory.
    pub fn at(config_dir: PathBuf) -> Result<Self, ConfigError> {
        let backgrounds_dir = config_dir.join("backgrounds");
        fs::create_dir_all(&config_dir)?;
        fs::create_dir_all(&backgrounds_dir)?;
        Ok(Self {
            config_dir,
            backgrounds_dir,
        })
    }

    /// Path to the main config file.
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Load the application config; absent or malformed files yield the
    /// defaults.
    pub fn load_config(&self) -> Result<AppConfig, ConfigError> {
        let path = self.config_path();
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(AppConfig::from_toml(&content).unwrap_or_else(|e| {
            warn!("Malformed config, using defaults: {}", e);
            AppConfig::default()
        }))
    }

    /// Save the application config.
    pub fn save_config(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let content = config.to_toml()?;
        fs::write(self.config_path(), content)?;
        Ok(())
    }

    /// Load the notes list.
    pub fn load_notes(&self) -> Vec<Note> {
        self.load_json("notes.json")
    }

    /// Persist the notes list.
    pub fn save_notes(&self, notes: &[Note]) -> Result<(), ConfigError> {
        self.save_json("notes.json", &notes)
    }

    /// Load the per-sound volume map.
    pub fn load_sound_volumes(&self) -> HashMap<String, u8> {
        self.load_json("sound_volumes.json")
    }

    /// Persist the per-sound volume map.
    pub fn save_sound_volumes(&self, volumes: &HashMap<String, u8>) -> Result<(), ConfigError> {
        self.save_json("sound_volumes.json", volumes)
    }

    /// Load the saved mixes list.
    pub fn load_mixes(&self) -> Vec<SoundMix> {
        self.load_json("mixes.json")
    }

    /// Persist the saved mixes list.
    pub fn save_mixes(&self, mixes: &[SoundMix]) -> Result<(), ConfigError> {
        self.save_json("mixes.json", &mixes)
    }

    /// Copy a user-picked image into the backgrounds directory, returning
    /// the stored path.
    pub fn import_background(&self, source: &Path) -> Result<PathBuf, ConfigError> {
        let extension = source
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("png");
        let destination = self.backgrounds_dir.join(format!("custom.{}", extension));
        fs::copy(source, &destination)?;
        Ok(destination)
    }

    fn load_json<T: DeserializeOwned + Default>(&self, file: &str) -> T {
        let path = self.config_dir.join(file);
        if !path.exists() {
            return T::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!("Malformed {}, using defaults: {}", file, e);
                T::default()
            }),
            Err(e) => {
                warn!("Failed to read {}: {}", file, e);
                T::default()
            }
        }
    }

    fn save_json<T: Serialize>(&self, file: &str, value: &T) -> Result<(), ConfigError> {
        let content = serde_json::to_string(value)?;
        fs::write(self.config_dir.join(file), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn manager() -> (tempfile::TempDir, ConfigManager) {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::at(dir.path().join("hearth")).unwrap();
        (dir, manager)
    }

    #[test]
    fn test_config_round_trip() {
        let (_dir, manager) = manager();
        assert_eq!(
            manager.load_config().unwrap().appearance.font,
            AppConfig::default().appearance.font
        );

        let mut config = AppConfig::default();
        config.appearance.select_preset("bg4.webp");
        config.timer.volume = 75;
        manager.save_config(&config).unwrap();

        let loaded = manager.load_config().unwrap();
        assert_eq!(loaded.appearance.background.as_deref(), Some("bg4.webp"));
        assert_eq!(loaded.timer.volume, 75);
    }

    #[test]
    fn test_malformed_config_loads_defaults() {
        let (_dir, manager) = manager();
        fs::write(manager.config_path(), "not [valid toml").unwrap();
        let config = manager.load_config().unwrap();
        assert_eq!(config.timer.pomodoro, 1500);
    }

    #[test]
    fn test_notes_round_trip_reparses_dates() {
        let (_dir, manager) = manager();
        let created = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let notes = vec![Note {
            id: "1700000000000".into(),
            title: "Plan".into(),
            content: "write".into(),
            created_at: created,
            updated_at: created,
        }];
        manager.save_notes(&notes).unwrap();

        let loaded = manager.load_notes();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Plan");
        assert_eq!(loaded[0].created_at, created);
    }

    #[test]
    fn test_malformed_notes_load_empty() {
        let (_dir, manager) = manager();
        fs::write(manager.config_dir.join("notes.json"), "{broken").unwrap();
        assert!(manager.load_notes().is_empty());
    }

    #[test]
    fn test_sound_volumes_round_trip() {
        let (_dir, manager) = manager();
        let mut volumes = HashMap::new();
        volumes.insert("rain-thunder".to_string(), 80u8);
        volumes.insert("noise-white-noise".to_string(), 5u8);
        manager.save_sound_volumes(&volumes).unwrap();
        assert_eq!(manager.load_sound_volumes(), volumes);
    }

    #[test]
    fn test_mixes_round_trip() {
        let (_dir, manager) = manager();
        let mixes = vec![SoundMix {
            id: Uuid::new_v4(),
            name: "Storm".into(),
            sounds: vec![crate::mixer::MixEntry {
                id: "rain-thunder".into(),
                volume: 90,
                playing: true,
            }],
            created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        }];
        manager.save_mixes(&mixes).unwrap();

        let loaded = manager.load_mixes();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, mixes[0].id);
        assert_eq!(loaded[0].sounds[0].volume, 90);
        assert_eq!(loaded[0].created_at, mixes[0].created_at);
    }

    #[test]
    fn test_import_background_copies_file() {
        let (dir, manager) = manager();
        let source = dir.path().join("pic.jpg");
        fs::write(&source, b"jpeg bytes").unwrap();

        let stored = manager.import_background(&source).unwrap();
        assert_eq!(stored.file_name().unwrap(), "custom.jpg");
        assert_eq!(fs::read(stored).unwrap(), b"jpeg bytes");
    }
}
