// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Application state management.

use crate::config::AppConfig;
use crate::mixer::{MixerState, SoundMix};
use crate::notepad::{Note, NotesState};
use crate::timer::TimerState;
use crate::window::{WindowSet, WindowStack};
use iced::widget::text_editor;
use iced::Point;
use rand::Rng;
use std::collections::HashMap;
use std::path::PathBuf;

/// Quotes rotated on the workspace background, one picked per session.
pub const QUOTES: [&str; 10] = [
    "The secret of getting ahead is getting started.",
    "Focus on being productive instead of busy.",
    "Your limitation\u{2014}it's only your imagination.",
    "Great things never come from comfort zones.",
    "Don't stop when you're tired. Stop when you're done.",
    "The harder you work for something, the greater you'll feel when you achieve it.",
    "Dream it. Wish it. Do it.",
    "Success doesn't just find you. You have to go out and get it.",
    "The key is to keep company only with people who uplift you.",
    "Start where you are. Use what you have. Do what you can.",
];

/// Pick the session's quote.
pub fn random_quote() -> &'static str {
    QUOTES[rand::thread_rng().gen_range(0..QUOTES.len())]
}

/// Main application state.
pub struct AppState {
    /// Persisted settings (appearance, timer, master volume).
    pub config: AppConfig,
    /// Per-widget floating window state.
    pub windows: WindowSet,
    /// Shared z-order across the floating widgets.
    pub stack: WindowStack,
    pub timer: TimerState,
    pub notes: NotesState,
    /// Editor buffer for the active note's content.
    pub note_editor: text_editor::Content,
    pub mixer: MixerState,
    /// This session's motivational quote.
    pub quote: &'static str,
    pub is_fullscreen: bool,
    /// Last observed pointer position, used to anchor window drags.
    pub cursor: Point,
    /// Root of the bundled image and sound assets.
    pub assets_dir: PathBuf,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        notes: Vec<Note>,
        sound_volumes: &HashMap<String, u8>,
        mixes: Vec<SoundMix>,
        assets_dir: PathBuf,
    ) -> Self {
        let timer = TimerState::new(&config.timer);
        let mixer = MixerState::new(
            assets_dir.clone(),
            sound_volumes,
            config.mixer.master_volume,
            mixes,
        );

        Self {
            config,
            windows: WindowSet::default(),
            stack: WindowStack::new(),
            timer,
            notes: NotesState::new(notes),
            note_editor: text_editor::Content::new(),
            mixer,
            quote: random_quote(),
            is_fullscreen: false,
            cursor: Point::ORIGIN,
            assets_dir,
        }
    }
}
