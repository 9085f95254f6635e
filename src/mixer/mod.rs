// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Ambient sound mixer state.
//!
//! All mutations here are pure state transitions that hand back
//! [`AudioCommand`]s for the playback engine to execute, so the mixing
//! semantics stay testable without an audio device.

pub mod catalog;

use catalog::Category;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Default volume for every catalog sound and the master fader.
pub const DEFAULT_VOLUME: u8 = 50;

/// UI volume range upper bound.
pub const MAX_VOLUME: u8 = 100;

/// How long a per-sound slider must rest before its value is committed.
pub const VOLUME_DEBOUNCE: Duration = Duration::from_millis(100);

/// Map the 0-100 UI range to linear 0.0-1.0, clamped.
pub fn normalize(volume: u8) -> f32 {
    f32::from(volume.min(MAX_VOLUME)) / f32::from(MAX_VOLUME)
}

/// Output volume for a playing sound under the master fader.
pub fn effective_volume(volume: u8, master: u8) -> f32 {
    normalize(volume) * normalize(master)
}

/// One catalog sound's live state.
#[derive(Debug, Clone)]
pub struct SoundState {
    /// Stable identity, `"{category}-{slug}"`.
    pub id: String,
    pub slug: &'static str,
    /// Display name derived from the slug.
    pub name: String,
    pub category: Category,
    pub volume: u8,
    pub playing: bool,
}

impl SoundState {
    pub fn asset_path(&self, assets_dir: &Path) -> PathBuf {
        catalog::asset_path(assets_dir, self.category, self.slug)
    }
}

/// Snapshot of one sound inside a saved mix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixEntry {
    pub id: String,
    pub volume: u8,
    pub playing: bool,
}

/// A named snapshot of the whole mixer, replayable later.
///
/// Every sound is recorded, not just the playing ones, so loading restores
/// exact silence and volume for the rest of the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundMix {
    pub id: Uuid,
    pub name: String,
    pub sounds: Vec<MixEntry>,
    pub created_at: DateTime<Utc>,
}

/// Instruction for the playback engine.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioCommand {
    /// Start (or resume) a looping sound at the given output volume.
    Play {
        id: String,
        path: PathBuf,
        volume: f32,
    },
    /// Stop a sound, rewinding it; its sink stays cached.
    Stop { id: String },
    /// Adjust a live sound's output volume.
    SetVolume { id: String, volume: f32 },
    /// Stop every cached sound.
    StopAll,
}

/// A slider value waiting out its debounce window.
#[derive(Debug, Clone)]
struct PendingVolume {
    value: u8,
    deadline: Instant,
}

/// Mixer state: the live catalog, master fader, saved mixes, and the UI
/// inputs that drive them.
#[derive(Debug)]
pub struct MixerState {
    pub sounds: Vec<SoundState>,
    pub master_volume: u8,
    pub mixes: Vec<SoundMix>,
    /// Mix currently marked active, if any.
    pub active_mix: Option<Uuid>,
    pub new_mix_name: String,
    pub category_filter: Option<Category>,
    pub search: String,
    assets_dir: PathBuf,
    pending: HashMap<String, PendingVolume>,
}

impl MixerState {
    /// Rebuild the catalog, layering saved volumes over the defaults.
    pub fn new(
        assets_dir: PathBuf,
        saved_volumes: &HashMap<String, u8>,
        master_volume: u8,
        mixes: Vec<SoundMix>,
    ) -> Self {
        let mut sounds = Vec::new();
        for (category, slugs) in catalog::CATALOG {
            for slug in *slugs {
                let id = catalog::sound_id(*category, slug);
                let volume = saved_volumes.get(&id).copied().unwrap_or(DEFAULT_VOLUME);
                sounds.push(SoundState {
                    name: catalog::display_name(slug),
                    id,
                    slug,
                    category: *category,
                    volume,
                    playing: false,
                });
            }
        }

        Self {
            sounds,
            master_volume,
            mixes,
            active_mix: None,
            new_mix_name: String::new(),
            category_filter: None,
            search: String::new(),
            assets_dir,
            pending: HashMap::new(),
        }
    }

    pub fn sound(&self, id: &str) -> Option<&SoundState> {
        self.sounds.iter().find(|s| s.id == id)
    }

    fn sound_mut(&mut self, id: &str) -> Option<&mut SoundState> {
        self.sounds.iter_mut().find(|s| s.id == id)
    }

    pub fn playing_count(&self) -> usize {
        self.sounds.iter().filter(|s| s.playing).count()
    }

    /// The slider value to show: a pending (debounced) value wins over the
    /// committed one.
    pub fn display_volume(&self, id: &str) -> u8 {
        self.pending
            .get(id)
            .map(|p| p.value)
            .or_else(|| self.sound(id).map(|s| s.volume))
            .unwrap_or(DEFAULT_VOLUME)
    }

    /// Visible sounds under the category filter and search query.
    pub fn filtered_sounds(&self) -> Vec<&SoundState> {
        let query = self.search.to_lowercase();
        self.sounds
            .iter()
            .filter(|s| {
                self.category_filter
                    .map(|c| s.category == c)
                    .unwrap_or(true)
                    && s.name.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Mixes sorted for display, most recently created first.
    pub fn sorted_mixes(&self) -> Vec<&SoundMix> {
        let mut mixes: Vec<&SoundMix> = self.mixes.iter().collect();
        mixes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        mixes
    }

    /// Committed per-sound volumes, for persistence.
    pub fn volume_map(&self) -> HashMap<String, u8> {
        self.sounds
            .iter()
            .map(|s| (s.id.clone(), s.volume))
            .collect()
    }

    /// Flip a sound between stopped and playing. Touching a sound by hand
    /// detaches the active mix marker.
    pub fn toggle_sound(&mut self, id: &str) -> Option<AudioCommand> {
        self.active_mix = None;
        let assets_dir = self.assets_dir.clone();
        let master = self.master_volume;
        let sound = self.sound_mut(id)?;
        sound.playing = !sound.playing;

        if sound.playing {
            Some(AudioCommand::Play {
                id: sound.id.clone(),
                path: sound.asset_path(&assets_dir),
                volume: effective_volume(sound.volume, master),
            })
        } else {
            Some(AudioCommand::Stop {
                id: sound.id.clone(),
            })
        }
    }

    /// Roll a sound back to stopped after a failed playback start.
    pub fn mark_stopped(&mut self, id: &str) {
        if let Some(sound) = self.sound_mut(id) {
            sound.playing = false;
        }
    }

    /// A per-sound slider moved: the live sink volume changes immediately,
    /// while the committed value waits out the debounce window
    /// (cancel-and-replace per sound).
    pub fn set_sound_volume(&mut self, id: &str, volume: u8, now: Instant) -> Option<AudioCommand> {
        self.active_mix = None;
        let playing = self.sound(id)?.playing;
        self.pending.insert(
            id.to_string(),
            PendingVolume {
                value: volume,
                deadline: now + VOLUME_DEBOUNCE,
            },
        );

        playing.then(|| AudioCommand::SetVolume {
            id: id.to_string(),
            volume: effective_volume(volume, self.master_volume),
        })
    }

    /// Commit debounced slider values whose window has elapsed. Returns
    /// whether anything was committed (and should be persisted).
    pub fn flush_pending(&mut self, now: Instant) -> bool {
        let expired: Vec<String> = self
            .pending
            .iter()
            .filter(|(_, p)| now >= p.deadline)
            .map(|(id, _)| id.clone())
            .collect();

        for id in &expired {
            if let Some(pending) = self.pending.remove(id) {
                if let Some(sound) = self.sound_mut(id) {
                    sound.volume = pending.value;
                }
            }
        }
        !expired.is_empty()
    }

    /// The master fader moved: re-apply effective volume to every playing
    /// sound immediately, no debounce.
    pub fn set_master_volume(&mut self, volume: u8) -> Vec<AudioCommand> {
        self.master_volume = volume;
        let mut commands = Vec::new();
        for sound in &self.sounds {
            if sound.playing {
                commands.push(AudioCommand::SetVolume {
                    id: sound.id.clone(),
                    volume: effective_volume(self.display_volume(&sound.id), volume),
                });
            }
        }
        commands
    }

    /// Stop everything and clear the playing flags and active-mix marker.
    /// Per-sound volumes are untouched.
    pub fn stop_all(&mut self) -> Vec<AudioCommand> {
        for sound in &mut self.sounds {
            sound.playing = false;
        }
        self.active_mix = None;
        vec![AudioCommand::StopAll]
    }

    /// Snapshot every sound's `(id, volume, playing)` under the entered
    /// name. Requires a non-empty trimmed name and at least one playing
    /// sound; returns whether a mix was saved.
    pub fn save_mix(&mut self, now: DateTime<Utc>) -> bool {
        let name = self.new_mix_name.trim().to_string();
        if name.is_empty() || self.playing_count() == 0 {
            return false;
        }

        let mix = SoundMix {
            id: Uuid::new_v4(),
            name,
            sounds: self
                .sounds
                .iter()
                .map(|s| MixEntry {
                    id: s.id.clone(),
                    volume: s.volume,
                    playing: s.playing,
                })
                .collect(),
            created_at: now,
        };
        self.active_mix = Some(mix.id);
        self.mixes.insert(0, mix);
        self.new_mix_name.clear();
        true
    }

    /// Load a mix, or stop everything if it is already the active one.
    ///
    /// Loading silently stops whatever plays now, then restores every
    /// sound's recorded playing/volume; sounds missing from the snapshot
    /// are forced stopped.
    pub fn load_mix(&mut self, id: Uuid) -> Vec<AudioCommand> {
        if self.active_mix == Some(id) {
            return self.stop_all();
        }
        let Some(mix) = self.mixes.iter().find(|m| m.id == id) else {
            return Vec::new();
        };
        let entries: HashMap<String, MixEntry> = mix
            .sounds
            .iter()
            .map(|e| (e.id.clone(), e.clone()))
            .collect();

        let mut commands = vec![AudioCommand::StopAll];
        let master = self.master_volume;
        let assets_dir = self.assets_dir.clone();

        for sound in &mut self.sounds {
            match entries.get(&sound.id) {
                Some(entry) => {
                    sound.volume = entry.volume;
                    sound.playing = entry.playing;
                    if entry.playing {
                        commands.push(AudioCommand::Play {
                            id: sound.id.clone(),
                            path: catalog::asset_path(&assets_dir, sound.category, sound.slug),
                            volume: effective_volume(entry.volume, master),
                        });
                    }
                }
                None => sound.playing = false,
            }
        }

        self.active_mix = Some(id);
        commands
    }

    /// Delete a mix. Deleting the active one clears the marker but leaves
    /// playback running.
    pub fn delete_mix(&mut self, id: Uuid) {
        if self.active_mix == Some(id) {
            self.active_mix = None;
        }
        self.mixes.retain(|m| m.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn mixer() -> MixerState {
        MixerState::new(
            PathBuf::from("assets"),
            &HashMap::new(),
            DEFAULT_VOLUME,
            Vec::new(),
        )
    }

    fn stamp(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(seconds, 0).unwrap()
    }

    #[test]
    fn test_effective_volume_is_product_of_normalized() {
        for volume in (0..=100).step_by(10) {
            for master in (0..=100).step_by(10) {
                let expected = (volume as f32 / 100.0) * (master as f32 / 100.0);
                assert!((effective_volume(volume, master) - expected).abs() < f32::EPSILON);
            }
        }
        // Out-of-range values clamp.
        assert_eq!(normalize(200), 1.0);
    }

    #[test]
    fn test_toggle_starts_and_stops() {
        let mut mixer = mixer();

        let command = mixer.toggle_sound("rain-thunder").unwrap();
        match command {
            AudioCommand::Play { id, path, volume } => {
                assert_eq!(id, "rain-thunder");
                assert_eq!(path, PathBuf::from("assets/sounds/rain/thunder.mp3"));
                assert!((volume - 0.25).abs() < f32::EPSILON);
            }
            other => panic!("expected Play, got {:?}", other),
        }
        assert!(mixer.sound("rain-thunder").unwrap().playing);

        let command = mixer.toggle_sound("rain-thunder").unwrap();
        assert_eq!(
            command,
            AudioCommand::Stop {
                id: "rain-thunder".into()
            }
        );
        assert!(!mixer.sound("rain-thunder").unwrap().playing);
    }

    #[test]
    fn test_volume_commit_waits_out_debounce() {
        let mut mixer = mixer();
        mixer.toggle_sound("nature-waves");
        let t0 = Instant::now();

        let command = mixer.set_sound_volume("nature-waves", 80, t0).unwrap();
        assert_eq!(
            command,
            AudioCommand::SetVolume {
                id: "nature-waves".into(),
                volume: effective_volume(80, DEFAULT_VOLUME),
            }
        );
        // Live volume changed, committed value not yet.
        assert_eq!(mixer.sound("nature-waves").unwrap().volume, DEFAULT_VOLUME);
        assert_eq!(mixer.display_volume("nature-waves"), 80);

        assert!(!mixer.flush_pending(t0 + Duration::from_millis(50)));
        assert!(mixer.flush_pending(t0 + VOLUME_DEBOUNCE));
        assert_eq!(mixer.sound("nature-waves").unwrap().volume, 80);
    }

    #[test]
    fn test_volume_change_replaces_pending() {
        let mut mixer = mixer();
        let t0 = Instant::now();

        mixer.set_sound_volume("nature-waves", 80, t0);
        mixer.set_sound_volume("nature-waves", 30, t0 + Duration::from_millis(90));

        // The first deadline passed, but it was replaced by the second.
        assert!(!mixer.flush_pending(t0 + Duration::from_millis(100)));
        assert_eq!(mixer.sound("nature-waves").unwrap().volume, DEFAULT_VOLUME);

        assert!(mixer.flush_pending(t0 + Duration::from_millis(190)));
        assert_eq!(mixer.sound("nature-waves").unwrap().volume, 30);
    }

    #[test]
    fn test_stopped_sound_volume_has_no_live_command() {
        let mut mixer = mixer();
        assert!(mixer
            .set_sound_volume("nature-waves", 70, Instant::now())
            .is_none());
    }

    #[test]
    fn test_master_volume_reapplies_to_playing_sounds() {
        let mut mixer = mixer();
        mixer.toggle_sound("rain-thunder");
        mixer.toggle_sound("nature-waves");

        let commands = mixer.set_master_volume(100);
        assert_eq!(commands.len(), 2);
        for command in commands {
            match command {
                AudioCommand::SetVolume { volume, .. } => {
                    assert!((volume - normalize(DEFAULT_VOLUME)).abs() < f32::EPSILON);
                }
                other => panic!("expected SetVolume, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_save_mix_requires_name_and_playing_sound() {
        let mut mixer = mixer();
        mixer.new_mix_name = "  ".into();
        mixer.toggle_sound("rain-thunder");
        assert!(!mixer.save_mix(stamp(0)));

        mixer.new_mix_name = "Storm".into();
        assert!(mixer.save_mix(stamp(0)));
        assert_eq!(mixer.mixes.len(), 1);
        assert_eq!(mixer.mixes[0].name, "Storm");
        assert_eq!(mixer.active_mix, Some(mixer.mixes[0].id));
        assert!(mixer.new_mix_name.is_empty());

        // Nothing playing: refused.
        mixer.stop_all();
        mixer.new_mix_name = "Silence".into();
        assert!(!mixer.save_mix(stamp(1)));
    }

    #[test]
    fn test_mix_snapshots_every_sound() {
        let mut mixer = mixer();
        mixer.toggle_sound("rain-thunder");
        mixer.new_mix_name = "Storm".into();
        assert!(mixer.save_mix(stamp(0)));

        let mix = &mixer.mixes[0];
        assert_eq!(mix.sounds.len(), mixer.sounds.len());
        assert!(mix.sounds.iter().any(|e| e.id == "rain-thunder" && e.playing));
        assert!(mix
            .sounds
            .iter()
            .any(|e| e.id == "nature-waves" && !e.playing));
    }

    #[test]
    fn test_load_mix_restores_snapshot_exactly() {
        let mut mixer = mixer();
        mixer.toggle_sound("rain-thunder");
        let t0 = Instant::now();
        mixer.set_sound_volume("rain-thunder", 90, t0);
        mixer.flush_pending(t0 + VOLUME_DEBOUNCE);
        mixer.new_mix_name = "Storm".into();
        assert!(mixer.save_mix(stamp(0)));
        let storm = mixer.mixes[0].id;

        // Change the live state, then save a second mix.
        mixer.toggle_sound("rain-thunder");
        mixer.toggle_sound("nature-waves");
        mixer.new_mix_name = "Shore".into();
        assert!(mixer.save_mix(stamp(1)));

        let commands = mixer.load_mix(storm);
        assert_eq!(commands[0], AudioCommand::StopAll);
        assert!(matches!(
            &commands[1],
            AudioCommand::Play { id, volume, .. }
                if id == "rain-thunder" && (*volume - effective_volume(90, 50)).abs() < f32::EPSILON
        ));
        assert_eq!(commands.len(), 2);

        assert!(mixer.sound("rain-thunder").unwrap().playing);
        assert_eq!(mixer.sound("rain-thunder").unwrap().volume, 90);
        assert!(!mixer.sound("nature-waves").unwrap().playing);
        assert_eq!(mixer.active_mix, Some(storm));
    }

    #[test]
    fn test_loading_active_mix_stops_everything() {
        let mut mixer = mixer();
        mixer.toggle_sound("rain-thunder");
        mixer.new_mix_name = "Storm".into();
        assert!(mixer.save_mix(stamp(0)));
        let storm = mixer.mixes[0].id;
        assert_eq!(mixer.active_mix, Some(storm));

        let commands = mixer.load_mix(storm);
        assert_eq!(commands, vec![AudioCommand::StopAll]);
        assert_eq!(mixer.playing_count(), 0);
        assert_eq!(mixer.active_mix, None);
    }

    #[test]
    fn test_manual_changes_detach_active_mix() {
        let mut mixer = mixer();
        mixer.toggle_sound("rain-thunder");
        mixer.new_mix_name = "Storm".into();
        assert!(mixer.save_mix(stamp(0)));
        assert!(mixer.active_mix.is_some());

        mixer.toggle_sound("nature-waves");
        assert_eq!(mixer.active_mix, None);
    }

    #[test]
    fn test_delete_active_mix_keeps_playback() {
        let mut mixer = mixer();
        mixer.toggle_sound("rain-thunder");
        mixer.new_mix_name = "Storm".into();
        assert!(mixer.save_mix(stamp(0)));
        let storm = mixer.mixes[0].id;

        mixer.delete_mix(storm);
        assert!(mixer.mixes.is_empty());
        assert_eq!(mixer.active_mix, None);
        assert_eq!(mixer.playing_count(), 1);
    }

    #[test]
    fn test_stop_all_keeps_volumes() {
        let mut mixer = mixer();
        mixer.toggle_sound("rain-thunder");
        let t0 = Instant::now();
        mixer.set_sound_volume("rain-thunder", 75, t0);
        mixer.flush_pending(t0 + VOLUME_DEBOUNCE);

        let commands = mixer.stop_all();
        assert_eq!(commands, vec![AudioCommand::StopAll]);
        assert_eq!(mixer.playing_count(), 0);
        assert_eq!(mixer.sound("rain-thunder").unwrap().volume, 75);
    }

    #[test]
    fn test_sorted_mixes_newest_first() {
        let mut mixer = mixer();
        mixer.toggle_sound("rain-thunder");
        mixer.new_mix_name = "First".into();
        assert!(mixer.save_mix(stamp(10)));
        mixer.toggle_sound("nature-waves");
        mixer.new_mix_name = "Second".into();
        assert!(mixer.save_mix(stamp(20)));

        let names: Vec<&str> = mixer.sorted_mixes().iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[test]
    fn test_filter_by_category_and_search() {
        let mut mixer = mixer();

        mixer.category_filter = Some(Category::Rain);
        assert!(mixer
            .filtered_sounds()
            .iter()
            .all(|s| s.category == Category::Rain));

        mixer.search = "RAIN ON".into();
        let names: Vec<&str> = mixer
            .filtered_sounds()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Rain On Car Roof",
                "Rain On Leaves",
                "Rain On Tent",
                "Rain On Umbrella",
                "Rain On Window",
            ]
        );

        mixer.category_filter = None;
        mixer.search = "wind".into();
        assert!(mixer
            .filtered_sounds()
            .iter()
            .all(|s| s.name.to_lowercase().contains("wind")));
    }

    #[test]
    fn test_saved_volumes_layer_over_defaults() {
        let mut volumes = HashMap::new();
        volumes.insert("rain-thunder".to_string(), 15u8);
        let mixer = MixerState::new(PathBuf::from("assets"), &volumes, 60, Vec::new());

        assert_eq!(mixer.sound("rain-thunder").unwrap().volume, 15);
        assert_eq!(mixer.sound("nature-waves").unwrap().volume, DEFAULT_VOLUME);
        assert_eq!(mixer.master_volume, 60);
        assert!(mixer.sounds.iter().all(|s| !s.playing));
    }
}
