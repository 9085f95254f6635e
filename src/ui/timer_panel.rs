// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pomodoro timer window.

use crate::message::Message;
use crate::state::AppState;
use crate::timer::{format_clock, TimerMode};
use crate::ui::theme::*;
use crate::ui::window_frame::window_frame;
use crate::window::WidgetId;
use iced::widget::{button, column, container, progress_bar, row, slider, text, Space};
use iced::{Alignment, Background, Border, Element, Fill, Length, Theme};

/// Build the timer window.
pub fn timer_panel<'a>(state: &'a AppState, ui: &'static UiTheme) -> Element<'a, Message> {
    let timer = &state.timer;
    let config = &state.config.timer;

    // Mode selector chips
    let mut modes = row![].spacing(SPACING_SMALL);
    for mode in TimerMode::ALL {
        let selected = timer.mode == mode;
        modes = modes.push(
            button(text(mode.label()).size(13))
                .padding([6, 12])
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
                .on_press(Message::TimerModeSelected(mode)),
        );
    }

    // Clock readout with progress underneath
    let clock = text(format_clock(timer.time_left)).size(56).color(ui.text);

    let progress = progress_bar(0.0..=1.0, timer.progress(config))
        .girth(Length::Fixed(8.0))
        .style(move |_theme: &Theme| progress_bar::Style {
            background: Background::Color(ui.surface),
            bar: Background::Color(ui.primary),
            border: Border::default().rounded(4.0),
        });

    // Transport controls
    let start_pause = if timer.is_running {
        action_button(ui, "Pause", false, Message::TimerPaused)
    } else {
        action_button(ui, "Start", true, Message::TimerStarted)
    };
    let controls = row![
        start_pause,
        action_button(ui, "Stop", false, Message::TimerStopped),
        action_button(ui, "Reset", false, Message::TimerReset),
    ]
    .spacing(SPACING_SMALL);

    // Alarm volume
    let volume = row![
        text("Volume").size(12).color(ui.text_dim),
        Space::new().width(SPACING),
        slider(0..=100u8, config.volume, Message::TimerVolumeChanged)
            .on_release(Message::TimerVolumeReleased)
            .width(Fill),
        Space::new().width(SPACING),
        text(format!("{}%", config.volume))
            .size(12)
            .color(ui.text_dim),
    ]
    .align_y(Alignment::Center)
    .width(Length::Fixed(240.0));

    let completed = text(format!(
        "Completed Pomodoros: {}",
        timer.completed_pomodoros
    ))
    .size(13)
    .color(ui.text_dim);

    let body = container(
        column![
            modes,
            Space::new().height(SPACING_LARGE),
            clock,
            Space::new().height(SPACING),
            container(progress).width(Length::Fixed(220.0)),
            Space::new().height(SPACING_LARGE),
            controls,
            Space::new().height(SPACING_LARGE),
            volume,
            Space::new().height(SPACING),
            completed,
        ]
        .align_x(Alignment::Center),
    )
    .width(Fill)
    .height(Fill)
    .center_x(Fill)
    .padding(PADDING);

    window_frame(
        ui,
        WidgetId::Timer,
        &state.windows.timer,
        "\u{23F1}",
        None,
        Vec::new(),
        body.into(),
        TIMER_WIDTH,
        TIMER_HEIGHT,
    )
}

fn action_button<'a>(
    ui: &'static UiTheme,
    label: &'a str,
    primary: bool,
    message: Message,
) -> Element<'a, Message> {
    button(
        container(text(label).size(13))
            .width(Length::Fixed(64.0))
            .center_x(Length::Fixed(64.0)),
    )
    .padding([8, 6])
    .style(move |_theme: &Theme, status| {
        let is_hovered = matches!(status, button::Status::Hovered);
        let (background, text_color) = if primary {
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
    .on_press(message)
    .into()
}
