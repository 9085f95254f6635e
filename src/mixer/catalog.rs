// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Static ambient sound catalog.
//!
//! The taxonomy is fixed: categories, sound slugs, and the container format
//! per category together determine every asset path on disk. The catalog is
//! never persisted; it is rebuilt at startup and saved volumes are layered
//! on top.

use std::path::{Path, PathBuf};

/// Sound category. Binaural and noise assets ship as WAV, everything else
/// as MP3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Animals,
    Binaural,
    Nature,
    Noise,
    Places,
    Rain,
    Things,
    Transport,
    Urban,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::Animals,
        Category::Binaural,
        Category::Nature,
        Category::Noise,
        Category::Places,
        Category::Rain,
        Category::Things,
        Category::Transport,
        Category::Urban,
    ];

    /// Directory name under `assets/sounds/`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Animals => "animals",
            Category::Binaural => "binaural",
            Category::Nature => "nature",
            Category::Noise => "noise",
            Category::Places => "places",
            Category::Rain => "rain",
            Category::Things => "things",
            Category::Transport => "transport",
            Category::Urban => "urban",
        }
    }

    /// Capitalized label for category filter chips.
    pub fn label(&self) -> String {
        display_name(self.as_str())
    }

    /// Audio container format for this category's assets.
    pub fn extension(&self) -> &'static str {
        match self {
            Category::Binaural | Category::Noise => "wav",
            _ => "mp3",
        }
    }
}

/// The full taxonomy: every sound slug, grouped by category.
pub const CATALOG: &[(Category, &[&str])] = &[
    (
        Category::Animals,
        &[
            "beehive", "birds", "cat-purring", "chickens", "cows", "crickets", "crows",
            "dog-barking", "frog", "horse-galopp", "owl", "seagulls", "sheep", "whale",
            "wolf", "woodpecker",
        ],
    ),
    (
        Category::Binaural,
        &[
            "binaural-alpha", "binaural-beta", "binaural-delta", "binaural-gamma",
            "binaural-theta",
        ],
    ),
    (
        Category::Nature,
        &[
            "campfire", "droplets", "howling-wind", "jungle", "river", "walk-in-snow",
            "walk-on-gravel", "walk-on-leaves", "waterfall", "waves", "wind-in-trees",
            "wind",
        ],
    ),
    (Category::Noise, &["brown-noise", "pink-noise", "white-noise"]),
    (
        Category::Places,
        &[
            "airport", "cafe", "carousel", "church", "construction-site", "crowded-bar",
            "laboratory", "laundry-room", "library", "night-village", "office",
            "restaurant", "subway-station", "supermarket", "temple", "underwater",
        ],
    ),
    (
        Category::Rain,
        &[
            "heavy-rain", "light-rain", "rain-on-car-roof", "rain-on-leaves",
            "rain-on-tent", "rain-on-umbrella", "rain-on-window", "thunder",
        ],
    ),
    (
        Category::Things,
        &[
            "boiling-water", "bubbles", "ceiling-fan", "clock", "dryer", "keyboard",
            "morse-code", "paper", "singing-bowl", "slide-projector", "tuning-radio",
            "typewriter", "vinyl-effect", "washing-machine", "wind-chimes",
            "windshield-wipers",
        ],
    ),
    (
        Category::Transport,
        &[
            "airplane", "inside-a-train", "rowing-boat", "sailboat", "submarine", "train",
        ],
    ),
    (
        Category::Urban,
        &[
            "ambulance-siren", "busy-street", "crowd", "fireworks", "highway", "road",
            "traffic",
        ],
    ),
];

/// Stable identity of a catalog sound.
pub fn sound_id(category: Category, slug: &str) -> String {
    format!("{}-{}", category.as_str(), slug)
}

/// Human-readable name derived from a slug: separators become spaces and
/// each word's first letter is capitalized ("cat-purring" -> "Cat Purring").
pub fn display_name(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve a sound's asset file under the assets directory.
pub fn asset_path(assets_dir: &Path, category: Category, slug: &str) -> PathBuf {
    assets_dir
        .join("sounds")
        .join(category.as_str())
        .join(format!("{}.{}", slug, category.extension()))
}

/// Path of the alarm sample played on timer completion.
pub fn alarm_path(assets_dir: &Path) -> PathBuf {
    assets_dir.join("sounds").join("alarm.mp3")
}
