// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Notepad window: note list sidebar plus the editor.

use crate::message::Message;
use crate::state::AppState;
use crate::ui::theme::*;
use crate::ui::window_frame::{chrome_button, window_frame};
use crate::window::WidgetId;
use iced::widget::{
    button, column, container, row, scrollable, text, text_editor, text_input, Space,
};
use iced::{Alignment, Background, Border, Color, Element, Fill, Length, Theme};

/// Build the notepad window.
pub fn notepad_panel<'a>(state: &'a AppState, ui: &'static UiTheme) -> Element<'a, Message> {
    let notes = &state.notes;

    // Sidebar: one row per note, newest first.
    let mut list = column![].spacing(SPACING_SMALL);
    for note in &notes.notes {
        let selected = notes.active.as_deref() == Some(note.id.as_str());
        let label = column![
            text(note.title.clone()).size(12).color(if selected {
                ui.on_primary
            } else {
                ui.text
            }),
            text(note.updated_at.format("%b %e, %Y").to_string())
                .size(10)
                .color(if selected { ui.on_primary } else { ui.text_dim }),
        ]
        .spacing(2);

        let select = button(label)
            .width(Fill)
            .padding([6, 8])
            .style(move |_theme: &Theme, status| {
                let is_hovered = matches!(status, button::Status::Hovered);
                let background = if selected {
                    ui.primary
                } else if is_hovered {
                    ui.surface_light
                } else {
                    Color::TRANSPARENT
                };
                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: if selected { ui.on_primary } else { ui.text },
                    border: Border::default().rounded(BORDER_RADIUS_SMALL),
                    ..button::Style::default()
                }
            })
            .on_press(Message::NoteSelected(note.id.clone()));

        let delete = chrome_button(ui, "\u{00D7}", true, Message::NoteDeleted(note.id.clone()));

        list = list.push(row![select, delete].spacing(2).align_y(Alignment::Center));
    }

    let sidebar_content: Element<Message> = if notes.notes.is_empty() {
        container(text("No notes yet").size(11).color(ui.text_dim))
            .width(Fill)
            .padding(SPACING_LARGE)
            .center_x(Fill)
            .into()
    } else {
        scrollable(list).height(Fill).into()
    };

    let sidebar = container(sidebar_content)
        .width(Length::Fixed(200.0))
        .height(Fill)
        .padding(SPACING_SMALL)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(ui.surface)),
            ..container::Style::default()
        });

    // Editor pane for the active note.
    let editor: Element<Message> = if notes.active.is_some() {
        column![
            text_input("Note title...", &notes.title_input)
                .on_input(Message::NoteTitleChanged)
                .size(15)
                .padding(SPACING)
                .style(move |_theme: &Theme, _status| text_input::Style {
                    background: Background::Color(ui.background),
                    border: Border::default(),
                    icon: ui.text,
                    placeholder: ui.text_dim,
                    value: ui.text,
                    selection: ui.primary,
                }),
            text_editor(&state.note_editor)
                .placeholder("Start writing your note...")
                .on_action(Message::NoteContentEdited)
                .height(Fill)
                .padding(SPACING)
                .style(move |_theme: &Theme, _status| text_editor::Style {
                    background: Background::Color(ui.background),
                    border: Border::default(),
                    placeholder: ui.text_dim,
                    value: ui.text,
                    selection: ui.primary,
                }),
        ]
        .into()
    } else {
        container(
            column![
                text("\u{1F4DD}").size(40),
                Space::new().height(SPACING),
                text("Select a note or create a new one")
                    .size(13)
                    .color(ui.text_dim),
            ]
            .align_x(Alignment::Center),
        )
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .into()
    };

    let body = row![sidebar, container(editor).width(Fill).height(Fill)];

    let controls = vec![
        chrome_button(ui, "+", false, Message::NoteCreated),
        chrome_button(
            ui,
            "\u{2922}",
            false,
            Message::WindowMaximizeToggled(WidgetId::Notepad),
        ),
    ];

    window_frame(
        ui,
        WidgetId::Notepad,
        &state.windows.notepad,
        "\u{1F5CE}",
        None,
        controls,
        body.into(),
        NOTEPAD_WIDTH,
        NOTEPAD_HEIGHT,
    )
}
