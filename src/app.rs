// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Iced Application implementation for Hearth.

use crate::audio::AudioEngine;
use crate::config::{assets_dir, AppConfig, ConfigManager};
use crate::message::Message;
use crate::mixer::{normalize, AudioCommand};
use crate::state::AppState;
use crate::ui::mixer_panel::mixer_panel;
use crate::ui::notepad_panel::notepad_panel;
use crate::ui::settings_panel::settings_panel;
use crate::ui::theme::{self, UiTheme, MAXIMIZED_INSET, TOOLBAR_BACKGROUND, TOOLBAR_BUTTON_SIZE};
use crate::ui::timer_panel::timer_panel;
use crate::window::{FloatingWindow, WidgetId};
use chrono::Utc;
use iced::widget::{button, container, image, row, stack, text, text_editor};
use iced::{
    mouse, Alignment, Background, Border, Color, ContentFit, Element, Fill, Length, Padding,
    Subscription, Task, Theme,
};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Main application.
pub struct Hearth {
    /// Application state.
    state: AppState,
    /// Preference store; None if the config directory is unavailable.
    store: Option<ConfigManager>,
    /// Playback engine; None if no audio output could be opened.
    audio: Option<AudioEngine>,
}

impl Hearth {
    /// Create a new application instance, loading persisted preferences.
    pub fn new() -> (Self, Task<Message>) {
        let assets = assets_dir();

        let store = match ConfigManager::new() {
            Ok(store) => Some(store),
            Err(e) => {
                error!("Failed to open preference store: {}", e);
                None
            }
        };

        let (config, notes, volumes, mixes) = match &store {
            Some(store) => {
                let config = store.load_config().unwrap_or_else(|e| {
                    error!("Failed to load config: {}", e);
                    AppConfig::default()
                });
                (
                    config,
                    store.load_notes(),
                    store.load_sound_volumes(),
                    store.load_mixes(),
                )
            }
            None => (AppConfig::default(), Vec::new(), HashMap::new(), Vec::new()),
        };

        let audio = match AudioEngine::new(assets.clone()) {
            Ok(engine) => Some(engine),
            Err(e) => {
                error!("Failed to open audio output: {}", e);
                None
            }
        };

        info!(
            "Loaded {} notes, {} mixes",
            notes.len(),
            mixes.len()
        );

        let state = AppState::new(config, notes, &volumes, mixes, assets);
        (Self { state, store, audio }, Task::none())
    }

    /// Handle messages.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // ==================== Window Management ====================
            Message::WindowOpened(id) => {
                self.state.windows.get_mut(id).open = true;
                self.state.stack.bring_to_front(id);
            }
            Message::WindowClosed(id) => {
                let window = self.state.windows.get_mut(id);
                window.open = false;
                window.end_drag();
                match id {
                    // An unmounted mixer must not keep side effects running.
                    WidgetId::Mixer => {
                        let commands = self.state.mixer.stop_all();
                        self.run_audio(commands);
                    }
                    // Closing the timer cancels its tick; time is retained.
                    WidgetId::Timer => self.state.timer.pause(),
                    _ => {}
                }
            }
            Message::WindowFocused(id) => {
                self.state.stack.bring_to_front(id);
            }
            Message::WindowDragStarted(id) => {
                self.state.stack.bring_to_front(id);
                let cursor = self.state.cursor;
                self.state.windows.get_mut(id).begin_drag(cursor);
            }
            Message::WindowMinimizeToggled(id) => {
                self.state.windows.get_mut(id).toggle_minimized();
            }
            Message::WindowMaximizeToggled(id) => {
                self.state.windows.get_mut(id).toggle_maximized();
            }
            Message::CursorMoved(position) => {
                self.state.cursor = position;
                self.state.windows.drag_to(position);
            }
            Message::DragEnded => {
                self.state.windows.end_drags();
            }

            // ==================== Timer ====================
            Message::TimerStarted => {
                self.state.timer.start(Instant::now());
            }
            Message::TimerPaused => {
                self.state.timer.pause();
            }
            Message::TimerStopped => {
                self.state.timer.reset(&self.state.config.timer);
            }
            Message::TimerReset => {
                self.state.timer.reset(&self.state.config.timer);
            }
            Message::TimerModeSelected(mode) => {
                self.state.timer.switch_mode(mode, &self.state.config.timer);
            }
            Message::TimerVolumeChanged(volume) => {
                self.state.config.timer.volume = volume;
                if let Some(engine) = &mut self.audio {
                    engine.set_alarm_volume(normalize(volume));
                }
            }
            Message::TimerVolumeReleased => {
                self.persist_config();
            }

            // ==================== Notepad ====================
            Message::NoteCreated => {
                self.state.notes.create(Utc::now());
                self.reload_note_editor();
                self.persist_notes();
            }
            Message::NoteSelected(id) => {
                self.state.notes.select(&id);
                self.reload_note_editor();
            }
            Message::NoteDeleted(id) => {
                let was_active = self.state.notes.active.as_deref() == Some(id.as_str());
                self.state.notes.delete(&id);
                if was_active {
                    self.state.note_editor = text_editor::Content::new();
                }
                self.persist_notes();
            }
            Message::NoteTitleChanged(title) => {
                self.state.notes.edit_title(title, Utc::now());
                self.persist_notes();
            }
            Message::NoteContentEdited(action) => {
                self.state.note_editor.perform(action);
                let content = self.state.note_editor.text();
                self.state.notes.edit_content(content, Utc::now());
                self.persist_notes();
            }

            // ==================== Ambient Sound Mixer ====================
            Message::SoundToggled(id) => {
                let command = self.state.mixer.toggle_sound(&id);
                self.run_audio(command.into_iter().collect());
            }
            Message::SoundVolumeChanged(id, volume) => {
                let command = self
                    .state
                    .mixer
                    .set_sound_volume(&id, volume, Instant::now());
                self.run_audio(command.into_iter().collect());
            }
            Message::MasterVolumeChanged(volume) => {
                self.state.config.mixer.master_volume = volume;
                let commands = self.state.mixer.set_master_volume(volume);
                self.run_audio(commands);
            }
            Message::MasterVolumeReleased => {
                self.persist_config();
            }
            Message::StopAllSounds => {
                let commands = self.state.mixer.stop_all();
                self.run_audio(commands);
            }
            Message::CategorySelected(category) => {
                self.state.mixer.category_filter = category;
            }
            Message::SearchChanged(query) => {
                self.state.mixer.search = query;
            }
            Message::MixNameChanged(name) => {
                self.state.mixer.new_mix_name = name;
            }
            Message::MixSaved => {
                if self.state.mixer.save_mix(Utc::now()) {
                    self.persist_mixes();
                }
            }
            Message::MixLoaded(id) => {
                let commands = self.state.mixer.load_mix(id);
                self.run_audio(commands);
            }
            Message::MixDeleted(id) => {
                self.state.mixer.delete_mix(id);
                self.persist_mixes();
            }

            // ==================== Settings ====================
            Message::BackgroundSelected(name) => {
                self.state.config.appearance.select_preset(&name);
                self.persist_config();
            }
            Message::CustomBackgroundRequested => {
                return Task::perform(pick_background_file(), Message::CustomBackgroundPicked);
            }
            Message::CustomBackgroundPicked(Some(source)) => {
                // Copy the image into the preference store so it survives
                // the source file moving.
                let stored = match &self.store {
                    Some(store) => match store.import_background(&source) {
                        Ok(stored) => Some(stored),
                        Err(e) => {
                            error!("Failed to import background: {}", e);
                            None
                        }
                    },
                    None => Some(source),
                };
                if let Some(path) = stored {
                    self.state.config.appearance.set_custom_background(path);
                    self.persist_config();
                }
            }
            Message::CustomBackgroundPicked(None) => {}
            Message::FontSelected(font) => {
                self.state.config.appearance.font = font.to_string();
                self.persist_config();
            }
            Message::ThemeToggled => {
                let theme = self.state.config.appearance.theme;
                self.state.config.appearance.theme = theme.toggled();
                self.persist_config();
            }

            // ==================== Shell ====================
            Message::FullscreenToggled => {
                self.state.is_fullscreen = !self.state.is_fullscreen;
                let mode = if self.state.is_fullscreen {
                    iced::window::Mode::Fullscreen
                } else {
                    iced::window::Mode::Windowed
                };
                return iced::window::latest()
                    .and_then(move |id| iced::window::set_mode(id, mode));
            }
            Message::Tick => {
                let now = Instant::now();
                if self.state.timer.tick(now, &self.state.config.timer) {
                    self.sound_alarm();
                }
                if self.state.mixer.flush_pending(now) {
                    self.persist_sound_volumes();
                }
            }
        }

        Task::none()
    }

    /// Render the workspace: background, quote, toolbar, then the floating
    /// windows in stacking order.
    pub fn view(&self) -> Element<Message> {
        let ui = theme::palette(self.state.config.appearance.theme);

        let mut layers: Vec<Element<Message>> = vec![
            self.view_canvas(ui),
            self.view_quote(),
            self.view_toolbar(),
        ];

        let order = self
            .state
            .stack
            .render_order(|id| self.state.windows.get(id).open);
        for id in order {
            let panel = match id {
                WidgetId::Timer => timer_panel(&self.state, ui),
                WidgetId::Notepad => notepad_panel(&self.state, ui),
                WidgetId::Mixer => mixer_panel(&self.state, ui),
                WidgetId::Settings => settings_panel(&self.state, ui),
            };
            layers.push(positioned(self.state.windows.get(id), panel));
        }

        stack(layers).width(Fill).height(Fill).into()
    }

    /// Background image over a solid canvas color.
    fn view_canvas(&self, ui: &'static UiTheme) -> Element<Message> {
        let path = self
            .state
            .config
            .appearance
            .background_path(&self.state.assets_dir);

        let backdrop = container(
            image(image::Handle::from_path(path))
                .content_fit(ContentFit::Cover)
                .width(Fill)
                .height(Fill),
        )
        .width(Fill)
        .height(Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(ui.canvas)),
            ..container::Style::default()
        });

        backdrop.into()
    }

    /// The session's motivational quote, centered over the background.
    fn view_quote(&self) -> Element<Message> {
        let quote = text(format!("\u{201C}{}\u{201D}", self.state.quote))
            .size(40)
            .color(Color::WHITE)
            .font(theme::font_by_name(&self.state.config.appearance.font))
            .width(Length::Fixed(820.0))
            .align_x(Alignment::Center);

        container(quote)
            .width(Fill)
            .height(Fill)
            .center_x(Fill)
            .center_y(Fill)
            .padding(40)
            .into()
    }

    /// Toolbar buttons: mixer bottom-left; timer, notepad, settings and
    /// fullscreen bottom-right.
    fn view_toolbar(&self) -> Element<Message> {
        let left = container(toolbar_button(
            "\u{266B}",
            Message::WindowOpened(WidgetId::Mixer),
        ))
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::Start)
        .align_y(Alignment::End)
        .padding(24);

        let right = container(
            row![
                toolbar_button("\u{23F1}", Message::WindowOpened(WidgetId::Timer)),
                toolbar_button("\u{1F5CE}", Message::WindowOpened(WidgetId::Notepad)),
                toolbar_button("\u{2699}", Message::WindowOpened(WidgetId::Settings)),
                toolbar_button("\u{26F6}", Message::FullscreenToggled),
            ]
            .spacing(10),
        )
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::End)
        .align_y(Alignment::End)
        .padding(24);

        stack([left.into(), right.into()]).into()
    }

    /// Get the application theme.
    pub fn theme(&self) -> Theme {
        theme::app_theme(self.state.config.appearance.theme)
    }

    /// Subscriptions: the periodic tick plus global pointer events for
    /// window drags.
    pub fn subscription(&self) -> Subscription<Message> {
        let tick = iced::time::every(Duration::from_millis(50)).map(|_| Message::Tick);

        let pointer = iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(Message::CursorMoved(position))
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(Message::DragEnded)
            }
            _ => None,
        });

        Subscription::batch([tick, pointer])
    }

    /// Execute mixer commands against the playback engine, rolling back the
    /// `playing` flag of anything that failed to start.
    fn run_audio(&mut self, commands: Vec<AudioCommand>) {
        for command in commands {
            match &mut self.audio {
                Some(engine) => {
                    if let Some(failed) = engine.execute(command) {
                        self.state.mixer.mark_stopped(&failed);
                    }
                }
                None => {
                    if let AudioCommand::Play { id, .. } = command {
                        warn!("No audio output; cannot play '{}'", id);
                        self.state.mixer.mark_stopped(&id);
                    }
                }
            }
        }
    }

    /// Play the timer alarm at the configured volume.
    fn sound_alarm(&mut self) {
        let volume = normalize(self.state.config.timer.volume);
        if let Some(engine) = &mut self.audio {
            if let Err(e) = engine.play_alarm(volume) {
                warn!("Failed to play alarm: {}", e);
            }
        }
    }

    /// Swap the editor buffer to the active note's content.
    fn reload_note_editor(&mut self) {
        let content = self
            .state
            .notes
            .active_note()
            .map(|note| note.content.clone())
            .unwrap_or_default();
        self.state.note_editor = text_editor::Content::with_text(&content);
    }

    fn persist_config(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save_config(&self.state.config) {
                error!("Failed to save config: {}", e);
            }
        }
    }

    fn persist_notes(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save_notes(&self.state.notes.notes) {
                error!("Failed to save notes: {}", e);
            }
        }
    }

    fn persist_mixes(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save_mixes(&self.state.mixer.mixes) {
                error!("Failed to save mixes: {}", e);
            }
        }
    }

    fn persist_sound_volumes(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save_sound_volumes(&self.state.mixer.volume_map()) {
                error!("Failed to save sound volumes: {}", e);
            }
        }
    }
}

/// Place a floating window on the canvas by padding a full-size container.
fn positioned<'a>(
    window: &FloatingWindow,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let padding = if window.maximized {
        Padding {
            top: MAXIMIZED_INSET,
            right: MAXIMIZED_INSET,
            bottom: MAXIMIZED_INSET,
            left: MAXIMIZED_INSET,
        }
    } else {
        Padding {
            top: window.position.y,
            right: 0.0,
            bottom: 0.0,
            left: window.position.x,
        }
    };

    container(content)
        .width(Fill)
        .height(Fill)
        .padding(padding)
        .into()
}

/// A round translucent toolbar button over the workspace image.
fn toolbar_button(glyph: &'static str, message: Message) -> Element<'static, Message> {
    button(
        container(text(glyph).size(18).color(Color::WHITE))
            .center_x(Length::Fixed(TOOLBAR_BUTTON_SIZE))
            .center_y(Length::Fixed(TOOLBAR_BUTTON_SIZE)),
    )
    .padding(0)
    .style(|_theme: &Theme, status| {
        let is_hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        button::Style {
            background: Some(Background::Color(Color {
                a: if is_hovered { 0.4 } else { TOOLBAR_BACKGROUND.a },
                ..TOOLBAR_BACKGROUND
            })),
            text_color: Color::WHITE,
            border: Border::default().rounded(TOOLBAR_BUTTON_SIZE / 2.0),
            ..button::Style::default()
        }
    })
    .on_press(message)
    .into()
}

/// Open the native image picker for a custom background.
async fn pick_background_file() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Choose a background image")
        .add_filter("Images", &["png", "jpg", "jpeg", "webp", "bmp"])
        .pick_file()
        .await
        .map(|file| file.path().to_path_buf())
}
