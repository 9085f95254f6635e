// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Shared chrome for floating widget windows.
//!
//! Every widget gets the same frame: a draggable title bar with minimize
//! and close controls (plus widget-specific extras), and a body that
//! collapses away while minimized.

use crate::message::Message;
use crate::ui::theme::*;
use crate::window::{FloatingWindow, WidgetId};
use iced::widget::{button, column, container, mouse_area, row, text, Space};
use iced::{Alignment, Background, Border, Color, Element, Fill, Length, Shadow, Theme, Vector};

/// A small square control button for the title bar.
pub fn chrome_button<'a>(
    ui: &'static UiTheme,
    glyph: &'a str,
    danger: bool,
    message: Message,
) -> Element<'a, Message> {
    button(text(glyph).size(13))
        .padding([2, 8])
        .style(move |_theme: &Theme, status| {
            let is_hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
            let (background, text_color) = if is_hovered && danger {
                (ui.danger, ui.background)
            } else if is_hovered {
                (ui.surface_light, ui.text)
            } else {
                (Color::TRANSPARENT, ui.text_dim)
            };
            button::Style {
                background: Some(Background::Color(background)),
                text_color,
                border: Border::default().rounded(BORDER_RADIUS_SMALL),
                ..button::Style::default()
            }
        })
        .on_press(message)
        .into()
}

/// Assemble a floating window: draggable title bar plus body.
///
/// `extra_controls` are placed left of the minimize button. The body is
/// dropped entirely while minimized, leaving the title-bar strip.
pub fn window_frame<'a>(
    ui: &'static UiTheme,
    id: WidgetId,
    window: &FloatingWindow,
    glyph: &'a str,
    badge: Option<Element<'a, Message>>,
    extra_controls: Vec<Element<'a, Message>>,
    body: Element<'a, Message>,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    let mut title_row = row![
        text(glyph).size(13).color(ui.text_dim),
        Space::new().width(SPACING_SMALL),
        text(id.title()).size(14).color(ui.text),
    ]
    .align_y(Alignment::Center);

    if let Some(badge) = badge {
        title_row = title_row.push(Space::new().width(SPACING_SMALL)).push(badge);
    }

    title_row = title_row.push(Space::new().width(Fill));
    for control in extra_controls {
        title_row = title_row.push(control);
    }
    title_row = title_row
        .push(chrome_button(
            ui,
            "\u{2013}",
            false,
            Message::WindowMinimizeToggled(id),
        ))
        .push(chrome_button(ui, "\u{00D7}", true, Message::WindowClosed(id)));

    let title_bar = mouse_area(
        container(title_row)
            .width(Fill)
            .height(Length::Fixed(TITLE_BAR_HEIGHT))
            .align_y(Alignment::Center)
            .padding([0.0, SPACING])
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(ui.titlebar)),
                ..container::Style::default()
            }),
    )
    .on_press(Message::WindowDragStarted(id));

    let mut content = column![title_bar];
    if !window.minimized {
        content = content.push(container(body).width(Fill).height(Fill));
    }

    let (frame_width, frame_height) = if window.maximized {
        (Length::Fill, Length::Fill)
    } else if window.minimized {
        (Length::Fixed(width), Length::Shrink)
    } else {
        (Length::Fixed(width), Length::Fixed(height))
    };

    let dragging = window.is_dragging();
    let frame = container(content)
        .width(frame_width)
        .height(frame_height)
        .clip(true)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(ui.background)),
            border: Border::default()
                .rounded(BORDER_RADIUS_LARGE)
                .color(if dragging { ui.primary } else { ui.border })
                .width(1.0),
            shadow: Shadow {
                color: Color { a: 0.4, ..Color::BLACK },
                offset: Vector::new(0.0, 8.0),
                blur_radius: 24.0,
            },
            ..container::Style::default()
        });

    mouse_area(frame)
        .on_press(Message::WindowFocused(id))
        .into()
}
