// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Ambient sound mixer window.

use crate::message::Message;
use crate::mixer::catalog::Category;
use crate::mixer::SoundState;
use crate::state::AppState;
use crate::ui::theme::*;
use crate::ui::window_frame::window_frame;
use crate::window::WidgetId;
use iced::widget::{
    button, column, container, row, scrollable, slider, text, text_input, Space,
};
use iced::{Alignment, Background, Border, Color, Element, Fill, Theme};

/// Build the ambient sounds window.
pub fn mixer_panel<'a>(state: &'a AppState, ui: &'static UiTheme) -> Element<'a, Message> {
    let mixer = &state.mixer;
    let playing = mixer.playing_count();

    // "N playing" badge next to the title.
    let badge: Option<Element<Message>> = (playing > 0).then(|| {
        container(
            text(format!("{} playing", playing))
                .size(10)
                .color(ui.on_primary),
        )
        .padding([2, 8])
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(ui.primary)),
            border: Border::default().rounded(BORDER_RADIUS_LARGE),
            ..container::Style::default()
        })
        .into()
    });

    // Master volume card + stop-all.
    let master = card(
        ui,
        column![
            row![
                text("Master Volume").size(13).color(ui.text),
                Space::new().width(Fill),
                text(format!("{}%", mixer.master_volume))
                    .size(11)
                    .color(ui.text_dim),
            ]
            .align_y(Alignment::Center),
            Space::new().height(SPACING_SMALL),
            slider(0..=100u8, mixer.master_volume, Message::MasterVolumeChanged)
                .on_release(Message::MasterVolumeReleased),
        ]
        .into(),
    );

    let stop_all = button(text("Stop All").size(12))
        .padding([8, 14])
        .style(move |_theme: &Theme, status| {
            let is_hovered = matches!(status, button::Status::Hovered);
            button::Style {
                background: Some(Background::Color(if is_hovered {
                    ui.danger
                } else {
                    ui.surface
                })),
                text_color: if is_hovered { ui.background } else { ui.danger },
                border: Border::default().rounded(BORDER_RADIUS).color(ui.danger).width(1.0),
                ..button::Style::default()
            }
        })
        .on_press_maybe((playing > 0).then_some(Message::StopAllSounds));

    let master_row = row![master, Space::new().width(SPACING), stop_all]
        .align_y(Alignment::Center);

    // Save-mix card.
    let can_save = !mixer.new_mix_name.trim().is_empty() && playing > 0;
    let save_mix = card(
        ui,
        column![
            text("Save Current Mix").size(13).color(ui.text),
            Space::new().height(SPACING_SMALL),
            row![
                input(ui, "My custom mix", &mixer.new_mix_name, Message::MixNameChanged),
                Space::new().width(SPACING_SMALL),
                button(text("Save").size(12))
                    .padding([8, 14])
                    .style(move |_theme: &Theme, _status| button::Style {
                        background: Some(Background::Color(if can_save {
                            ui.primary
                        } else {
                            ui.surface
                        })),
                        text_color: if can_save { ui.on_primary } else { ui.text_dim },
                        border: Border::default().rounded(BORDER_RADIUS),
                        ..button::Style::default()
                    })
                    .on_press_maybe(can_save.then_some(Message::MixSaved)),
            ]
            .align_y(Alignment::Center),
        ]
        .into(),
    );

    // Saved mixes list, newest first.
    let mut mixes_list = column![].spacing(SPACING_SMALL);
    if mixer.mixes.is_empty() {
        mixes_list = mixes_list.push(text("No mixes saved yet.").size(11).color(ui.text_dim));
    }
    for mix in mixer.sorted_mixes() {
        let active = mixer.active_mix == Some(mix.id);
        let load_label = if active { "Stop" } else { "Load" };
        let id = mix.id;

        let load = button(text(load_label).size(11))
            .padding([5, 10])
            .style(move |_theme: &Theme, status| {
                let is_hovered = matches!(status, button::Status::Hovered);
                let (background, text_color) = if active {
                    (if is_hovered { ui.danger } else { ui.surface }, ui.danger)
                } else {
                    (if is_hovered { ui.surface_light } else { ui.surface }, ui.primary)
                };
                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: if active && is_hovered { ui.background } else { text_color },
                    border: Border::default().rounded(BORDER_RADIUS_SMALL),
                    ..button::Style::default()
                }
            })
            .on_press(Message::MixLoaded(id));

        let delete = button(text("\u{00D7}").size(12))
            .padding([5, 8])
            .style(move |_theme: &Theme, status| {
                let is_hovered = matches!(status, button::Status::Hovered);
                button::Style {
                    background: Some(Background::Color(if is_hovered {
                        ui.danger
                    } else {
                        Color::TRANSPARENT
                    })),
                    text_color: if is_hovered { ui.background } else { ui.text_dim },
                    border: Border::default().rounded(BORDER_RADIUS_SMALL),
                    ..button::Style::default()
                }
            })
            .on_press(Message::MixDeleted(id));

        let info = column![
            text(mix.name.clone()).size(12).color(ui.text),
            text(mix.created_at.format("%b %e, %Y %H:%M").to_string())
                .size(10)
                .color(ui.text_dim),
        ]
        .spacing(2);

        mixes_list = mixes_list.push(
            container(
                row![info, Space::new().width(Fill), load, delete]
                    .spacing(SPACING_SMALL)
                    .align_y(Alignment::Center),
            )
            .width(Fill)
            .padding([6, 10])
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(ui.surface)),
                border: Border::default()
                    .rounded(BORDER_RADIUS)
                    .color(if active { ui.primary } else { ui.border })
                    .width(1.0),
                ..container::Style::default()
            }),
        );
    }

    let mixes_section = column![
        text("Saved Mixes").size(13).color(ui.text),
        Space::new().height(SPACING_SMALL),
        mixes_list,
    ];

    // Search + category filter chips.
    let search = input(ui, "Search sounds...", &mixer.search, Message::SearchChanged);

    let mut chips = row![category_chip(
        ui,
        "All".to_string(),
        mixer.category_filter.is_none(),
        None
    )]
    .spacing(SPACING_SMALL);
    for category in Category::ALL {
        chips = chips.push(category_chip(
            ui,
            category.label(),
            mixer.category_filter == Some(category),
            Some(category),
        ));
    }
    let chips = scrollable(chips)
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::default().width(2).scroller_width(2),
        ))
        .width(Fill);

    // Sound grid, two cards per row.
    let filtered = mixer.filtered_sounds();
    let mut grid = column![].spacing(SPACING_SMALL);
    for pair in filtered.chunks(2) {
        let mut cards = row![].spacing(SPACING_SMALL);
        for &sound in pair {
            cards = cards.push(sound_card(ui, sound, mixer.display_volume(&sound.id)));
        }
        if pair.len() == 1 {
            cards = cards.push(Space::new().width(Fill));
        }
        grid = grid.push(cards);
    }

    let body = scrollable(
        column![
            master_row,
            Space::new().height(SPACING),
            save_mix,
            Space::new().height(SPACING),
            mixes_section,
            Space::new().height(SPACING),
            search,
            Space::new().height(SPACING_SMALL),
            chips,
            Space::new().height(SPACING_SMALL),
            grid,
        ]
        .padding(PADDING),
    );

    window_frame(
        ui,
        WidgetId::Mixer,
        &state.windows.mixer,
        "\u{266B}",
        badge,
        Vec::new(),
        body.into(),
        MIXER_WIDTH,
        MIXER_HEIGHT,
    )
}

/// One sound: name, play/pause toggle, volume slider.
fn sound_card<'a>(
    ui: &'static UiTheme,
    sound: &'a SoundState,
    volume: u8,
) -> Element<'a, Message> {
    let playing = sound.playing;
    let toggle_id = sound.id.clone();
    let slider_id = sound.id.clone();

    let toggle = button(text(if playing { "\u{23F8}" } else { "\u{25B6}" }).size(12))
        .padding([5, 10])
        .style(move |_theme: &Theme, status| {
            let is_hovered = matches!(status, button::Status::Hovered);
            let (background, text_color) = if playing {
                (ui.primary, ui.on_primary)
            } else if is_hovered {
                (ui.surface_light, ui.text)
            } else {
                (ui.surface, ui.text)
            };
            button::Style {
                background: Some(Background::Color(background)),
                text_color,
                border: Border::default().rounded(BORDER_RADIUS),
                ..button::Style::default()
            }
        })
        .on_press(Message::SoundToggled(toggle_id));

    container(
        column![
            row![
                text(sound.name.clone()).size(12).color(ui.text),
                Space::new().width(Fill),
                toggle,
            ]
            .align_y(Alignment::Center),
            Space::new().height(SPACING_SMALL),
            row![
                slider(0..=100u8, volume, move |v| {
                    Message::SoundVolumeChanged(slider_id.clone(), v)
                })
                .width(Fill),
                Space::new().width(SPACING_SMALL),
                text(format!("{}%", volume)).size(10).color(ui.text_dim),
            ]
            .align_y(Alignment::Center),
        ],
    )
    .width(Fill)
    .padding(SPACING)
    .style(move |_theme: &Theme| container::Style {
        background: Some(Background::Color(ui.surface)),
        border: Border::default()
            .rounded(BORDER_RADIUS)
            .color(if playing { ui.primary } else { ui.border })
            .width(1.0),
        ..container::Style::default()
    })
    .into()
}

fn category_chip<'a>(
    ui: &'static UiTheme,
    label: String,
    selected: bool,
    category: Option<Category>,
) -> Element<'a, Message> {
    button(text(label).size(11))
        .padding([4, 10])
        .style(move |_theme: &Theme, status| {
            let is_hovered = matches!(status, button::Status::Hovered);
            let (background, text_color) = if selected {
                (ui.primary, ui.on_primary)
            } else if is_hovered {
                (ui.surface_light, ui.text)
            } else {
                (ui.surface, ui.text)
            };
            button::Style {
                background: Some(Background::Color(background)),
                text_color,
                border: Border::default().rounded(BORDER_RADIUS),
                ..button::Style::default()
            }
        })
        .on_press(Message::CategorySelected(category))
        .into()
}

fn card<'a>(ui: &'static UiTheme, content: Element<'a, Message>) -> Element<'a, Message> {
    container(content)
        .width(Fill)
        .padding(SPACING)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(ui.surface)),
            border: standard_border(ui),
            ..container::Style::default()
        })
        .into()
}

fn input<'a>(
    ui: &'static UiTheme,
    placeholder: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    text_input(placeholder, value)
        .on_input(on_input)
        .size(12)
        .padding([6, 10])
        .style(move |_theme: &Theme, _status| text_input::Style {
            background: Background::Color(ui.surface_light),
            border: Border::default()
                .rounded(BORDER_RADIUS_SMALL)
                .color(ui.border)
                .width(1.0),
            icon: ui.text,
            placeholder: ui.text_dim,
            value: ui.text,
            selection: ui.primary,
        })
        .into()
}
