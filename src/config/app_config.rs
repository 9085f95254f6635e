// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Application configuration (appearance, timer settings, master volume).

use crate::mixer::DEFAULT_VOLUME;
use crate::timer::TimerMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Preset background image filenames under `assets/backgrounds/`.
pub const BACKGROUNDS: [&str; 6] = ["bg.webp", "bg1.webp", "bg2.webp", "bg3.webp", "bg4.webp", "bg5.webp"];

/// Selectable fonts for the workspace.
pub const FONTS: [&str; 11] = [
    "Inter",
    "Roboto",
    "Poppins",
    "Lato",
    "Montserrat",
    "Raleway",
    "Open Sans",
    "Playfair Display",
    "Abril Fatface",
    "Merriweather",
    "Nunito",
];

/// Light or dark workspace theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Appearance settings. A preset background and an imported custom
/// background are mutually exclusive; selecting one clears the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Preset background filename; None while a custom background is active.
    pub background: Option<String>,
    /// Imported background image; None while a preset is active.
    pub custom_background: Option<PathBuf>,
    /// Selected font name, one of [`FONTS`].
    pub font: String,
    pub theme: ThemeMode,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            background: Some(BACKGROUNDS[0].to_string()),
            custom_background: None,
            font: FONTS[0].to_string(),
            theme: ThemeMode::default(),
        }
    }
}

impl AppearanceConfig {
    /// Activate a preset background, dropping any custom one.
    pub fn select_preset(&mut self, name: &str) {
        self.background = Some(name.to_string());
        self.custom_background = None;
    }

    /// Activate an imported background, dropping any preset selection.
    pub fn set_custom_background(&mut self, path: PathBuf) {
        self.custom_background = Some(path);
        self.background = None;
    }

    /// Resolve the image file to display.
    pub fn background_path(&self, assets_dir: &Path) -> PathBuf {
        match &self.custom_background {
            Some(custom) => custom.clone(),
            None => assets_dir
                .join("backgrounds")
                .join(self.background.as_deref().unwrap_or(BACKGROUNDS[0])),
        }
    }
}

fn default_pomodoro() -> u64 {
    25 * 60
}

fn default_short_break() -> u64 {
    5 * 60
}

fn default_long_break() -> u64 {
    15 * 60
}

fn default_volume() -> u8 {
    DEFAULT_VOLUME
}

/// Persisted timer settings. Durations are seconds; only the alarm volume
/// is editable from the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default = "default_pomodoro")]
    pub pomodoro: u64,
    #[serde(default = "default_short_break")]
    pub short_break: u64,
    #[serde(default = "default_long_break")]
    pub long_break: u64,
    #[serde(default = "default_volume")]
    pub volume: u8,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            pomodoro: default_pomodoro(),
            short_break: default_short_break(),
            long_break: default_long_break(),
            volume: default_volume(),
        }
    }
}

impl TimerConfig {
    /// Configured duration for a mode, in seconds.
    pub fn duration(&self, mode: TimerMode) -> u64 {
        match mode {
            TimerMode::Pomodoro => self.pomodoro,
            TimerMode::ShortBreak => self.short_break,
            TimerMode::LongBreak => self.long_break,
        }
    }
}

/// Persisted mixer settings (per-sound volumes live in their own file).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixerConfig {
    #[serde(default = "default_volume")]
    pub master_volume: u8,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            master_volume: default_volume(),
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub timer: TimerConfig,
    #[serde(default)]
    pub mixer: MixerConfig,
}

impl AppConfig {
    /// Load config from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_and_custom_background_are_exclusive() {
        let mut appearance = AppearanceConfig::default();

        appearance.set_custom_background(PathBuf::from("/tmp/custom.png"));
        assert!(appearance.background.is_none());
        assert_eq!(
            appearance.custom_background.as_deref(),
            Some(Path::new("/tmp/custom.png"))
        );

        appearance.select_preset("bg3.webp");
        assert_eq!(appearance.background.as_deref(), Some("bg3.webp"));
        assert!(appearance.custom_background.is_none());

        // And back again, in the other order.
        appearance.set_custom_background(PathBuf::from("/tmp/other.png"));
        assert!(appearance.background.is_none());
        assert!(appearance.custom_background.is_some());
    }

    #[test]
    fn test_background_path_prefers_custom() {
        let assets = Path::new("assets");
        let mut appearance = AppearanceConfig::default();
        assert_eq!(
            appearance.background_path(assets),
            PathBuf::from("assets/backgrounds/bg.webp")
        );

        appearance.set_custom_background(PathBuf::from("/home/me/pic.jpg"));
        assert_eq!(
            appearance.background_path(assets),
            PathBuf::from("/home/me/pic.jpg")
        );
    }

    #[test]
    fn test_timer_durations_by_mode() {
        let config = TimerConfig::default();
        assert_eq!(config.duration(TimerMode::Pomodoro), 1500);
        assert_eq!(config.duration(TimerMode::ShortBreak), 300);
        assert_eq!(config.duration(TimerMode::LongBreak), 900);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.appearance.select_preset("bg2.webp");
        config.appearance.theme = ThemeMode::Dark;
        config.timer.volume = 80;
        config.mixer.master_volume = 30;

        let toml = config.to_toml().unwrap();
        let loaded = AppConfig::from_toml(&toml).unwrap();
        assert_eq!(loaded.appearance.background.as_deref(), Some("bg2.webp"));
        assert_eq!(loaded.appearance.theme, ThemeMode::Dark);
        assert_eq!(loaded.timer.volume, 80);
        assert_eq!(loaded.mixer.master_volume, 30);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.appearance.font, "Inter");
        assert_eq!(config.timer.pomodoro, 1500);
        assert_eq!(config.mixer.master_volume, DEFAULT_VOLUME);

        let partial = AppConfig::from_toml("[timer]\nvolume = 10\n").unwrap();
        assert_eq!(partial.timer.volume, 10);
        assert_eq!(partial.timer.pomodoro, 1500);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }
}
