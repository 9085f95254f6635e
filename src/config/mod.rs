// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Configuration management for Hearth.

pub mod app_config;
pub mod persistence;

pub use app_config::{
    AppConfig, AppearanceConfig, MixerConfig, ThemeMode, TimerConfig, BACKGROUNDS, FONTS,
};
pub use persistence::{ConfigError, ConfigManager};

use std::path::PathBuf;

/// Directory holding the bundled background images and sound files.
pub fn assets_dir() -> PathBuf {
    PathBuf::from("assets")
}
