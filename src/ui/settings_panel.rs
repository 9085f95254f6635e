// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Settings window: background, font, and theme selection.

use crate::config::{ThemeMode, BACKGROUNDS, FONTS};
use crate::message::Message;
use crate::state::AppState;
use crate::ui::theme::*;
use crate::ui::window_frame::{chrome_button, window_frame};
use crate::window::WidgetId;
use iced::widget::{button, column, container, pick_list, row, text, Space};
use iced::{Background, Border, Element, Fill, Theme};

/// Build the settings window.
pub fn settings_panel<'a>(state: &'a AppState, ui: &'static UiTheme) -> Element<'a, Message> {
    let appearance = &state.config.appearance;

    // Background preset chips; a custom background deselects them all.
    let mut presets = row![].spacing(SPACING_SMALL);
    for name in BACKGROUNDS {
        let selected = appearance.background.as_deref() == Some(name);
        let label = name.trim_end_matches(".webp").to_uppercase();
        presets = presets.push(
            button(text(label).size(11))
                .padding([6, 10])
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
                .on_press(Message::BackgroundSelected(name.to_string())),
        );
    }

    let background_section = column![
        text("Background").size(13).color(ui.text),
        Space::new().height(SPACING_SMALL),
        presets,
    ];

    // Font picker.
    let selected_font = FONTS
        .iter()
        .find(|f| **f == appearance.font)
        .copied()
        .unwrap_or(FONTS[0]);
    let font_section = column![
        text("Font").size(13).color(ui.text),
        Space::new().height(SPACING_SMALL),
        pick_list(&FONTS[..], Some(selected_font), Message::FontSelected)
            .text_size(12)
            .padding([6, 10])
            .width(Fill),
    ];

    // Custom background import.
    let import_hint: Element<Message> = match &appearance.custom_background {
        Some(path) => text(format!(
            "Using {}",
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        ))
        .size(11)
        .color(ui.success)
        .into(),
        None => text("Replaces the preset backgrounds above.")
            .size(11)
            .color(ui.text_dim)
            .into(),
    };

    let import_section = column![
        text("Import Custom Background").size(13).color(ui.text),
        Space::new().height(SPACING_SMALL),
        row![
            button(text("Choose image...").size(12))
                .padding([8, 14])
                .style(move |_theme: &Theme, status| {
                    let is_hovered = matches!(status, button::Status::Hovered);
                    button::Style {
                        background: Some(Background::Color(if is_hovered {
                            ui.surface_light
                        } else {
                            ui.surface
                        })),
                        text_color: ui.text,
                        border: standard_border(ui),
                        ..button::Style::default()
                    }
                })
                .on_press(Message::CustomBackgroundRequested),
            Space::new().width(SPACING),
            import_hint,
        ]
        .align_y(iced::Alignment::Center),
    ];

    let body = container(
        column![
            background_section,
            Space::new().height(SPACING_LARGE),
            font_section,
            Space::new().height(SPACING_LARGE),
            import_section,
        ]
        .padding(PADDING),
    )
    .width(Fill)
    .height(Fill);

    // Theme toggle lives in the title bar, next to minimize.
    let theme_glyph = match appearance.theme {
        ThemeMode::Light => "\u{2600}",
        ThemeMode::Dark => "\u{263E}",
    };
    let controls = vec![chrome_button(ui, theme_glyph, false, Message::ThemeToggled)];

    window_frame(
        ui,
        WidgetId::Settings,
        &state.windows.settings,
        "\u{2699}",
        None,
        controls,
        body.into(),
        SETTINGS_WIDTH,
        SETTINGS_HEIGHT,
    )
}
