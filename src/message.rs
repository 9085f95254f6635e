// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Message types for UI actions and global events.

use crate::mixer::catalog::Category;
use crate::timer::TimerMode;
use crate::window::WidgetId;
use iced::widget::text_editor;
use iced::Point;
use std::path::PathBuf;
use uuid::Uuid;

/// All messages in the application.
#[derive(Debug, Clone)]
pub enum Message {
    // ==================== Window Management ====================
    /// Widget opened from the toolbar (also raises it).
    WindowOpened(WidgetId),
    /// Widget closed from its title bar.
    WindowClosed(WidgetId),
    /// Widget body clicked; raise it in the z-order.
    WindowFocused(WidgetId),
    /// Title bar grabbed; start following the pointer.
    WindowDragStarted(WidgetId),
    /// Minimize toggled from the title bar.
    WindowMinimizeToggled(WidgetId),
    /// Maximize toggled (notepad only).
    WindowMaximizeToggled(WidgetId),
    /// Pointer moved anywhere over the workspace.
    CursorMoved(Point),
    /// Primary button released; end any active drag.
    DragEnded,

    // ==================== Timer ====================
    TimerStarted,
    TimerPaused,
    TimerStopped,
    TimerReset,
    TimerModeSelected(TimerMode),
    /// Alarm volume slider moved.
    TimerVolumeChanged(u8),
    /// Alarm volume slider released (commit to disk).
    TimerVolumeReleased,

    // ==================== Notepad ====================
    NoteCreated,
    NoteSelected(String),
    NoteDeleted(String),
    NoteTitleChanged(String),
    NoteContentEdited(text_editor::Action),

    // ==================== Ambient Sound Mixer ====================
    /// Play/pause toggled for a sound.
    SoundToggled(String),
    /// Per-sound volume slider moved (sound_id, volume).
    SoundVolumeChanged(String, u8),
    MasterVolumeChanged(u8),
    /// Master slider released (commit to disk).
    MasterVolumeReleased,
    StopAllSounds,
    /// Category filter chip selected; None shows every category.
    CategorySelected(Option<Category>),
    SearchChanged(String),
    MixNameChanged(String),
    MixSaved,
    /// Load a mix, or stop everything if it is already active.
    MixLoaded(Uuid),
    MixDeleted(Uuid),

    // ==================== Settings ====================
    BackgroundSelected(String),
    /// Open the native file dialog for a custom background.
    CustomBackgroundRequested,
    /// File dialog finished (None when cancelled).
    CustomBackgroundPicked(Option<PathBuf>),
    FontSelected(&'static str),
    ThemeToggled,

    // ==================== Shell ====================
    FullscreenToggled,
    /// Periodic tick driving the timer countdown and debounce commits.
    Tick,
}
