// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Theme constants and styling for Hearth.

use crate::config::{ThemeMode, FONTS};
use iced::theme::Palette;
use iced::{Border, Color, Font, Theme};

/// Palette for one theme mode. All panel styling reads from this so the
/// light/dark toggle swaps the whole workspace at once.
#[derive(Debug, Clone, Copy)]
pub struct UiTheme {
    /// Fallback canvas color behind the background image.
    pub canvas: Color,
    /// Window body background.
    pub background: Color,
    /// Cards and list rows.
    pub surface: Color,
    /// Hovered rows and input fields.
    pub surface_light: Color,
    /// Title bar strip.
    pub titlebar: Color,
    /// Primary accent.
    pub primary: Color,
    /// Text on top of the primary accent.
    pub on_primary: Color,
    /// Main text color.
    pub text: Color,
    /// Dimmed text color.
    pub text_dim: Color,
    /// Destructive actions.
    pub danger: Color,
    /// Active/positive indicator.
    pub success: Color,
    /// Warning indicator.
    pub warning: Color,
    /// Panel and input borders.
    pub border: Color,
}

/// Dark workspace palette.
pub const DARK: UiTheme = UiTheme {
    canvas: Color::from_rgb(0.08, 0.08, 0.10),
    background: Color::from_rgb(0.12, 0.12, 0.14),
    surface: Color::from_rgb(0.18, 0.18, 0.20),
    surface_light: Color::from_rgb(0.24, 0.24, 0.26),
    titlebar: Color::from_rgb(0.16, 0.16, 0.19),
    primary: Color::from_rgb(0.40, 0.65, 0.95),
    on_primary: Color::from_rgb(0.08, 0.08, 0.10),
    text: Color::from_rgb(0.90, 0.90, 0.92),
    text_dim: Color::from_rgb(0.60, 0.60, 0.65),
    danger: Color::from_rgb(0.85, 0.30, 0.30),
    success: Color::from_rgb(0.40, 0.75, 0.40),
    warning: Color::from_rgb(0.90, 0.75, 0.20),
    border: Color::from_rgb(0.30, 0.30, 0.32),
};

/// Light workspace palette.
pub const LIGHT: UiTheme = UiTheme {
    canvas: Color::from_rgb(0.88, 0.88, 0.90),
    background: Color::from_rgb(0.98, 0.98, 0.99),
    surface: Color::from_rgb(0.93, 0.93, 0.95),
    surface_light: Color::from_rgb(0.88, 0.88, 0.91),
    titlebar: Color::from_rgb(0.90, 0.90, 0.93),
    primary: Color::from_rgb(0.25, 0.45, 0.85),
    on_primary: Color::from_rgb(0.98, 0.98, 0.99),
    text: Color::from_rgb(0.12, 0.12, 0.15),
    text_dim: Color::from_rgb(0.45, 0.45, 0.50),
    danger: Color::from_rgb(0.80, 0.25, 0.25),
    success: Color::from_rgb(0.25, 0.60, 0.30),
    warning: Color::from_rgb(0.75, 0.55, 0.10),
    border: Color::from_rgb(0.80, 0.80, 0.83),
};

/// Palette for the current theme mode.
pub fn palette(mode: ThemeMode) -> &'static UiTheme {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}

/// Build the iced theme for the current mode.
pub fn app_theme(mode: ThemeMode) -> Theme {
    let ui = palette(mode);
    let palette = Palette {
        background: ui.background,
        text: ui.text,
        primary: ui.primary,
        success: ui.success,
        danger: ui.danger,
        warning: ui.warning,
    };
    match mode {
        ThemeMode::Light => Theme::custom("Hearth Light".to_string(), palette),
        ThemeMode::Dark => Theme::custom("Hearth Dark".to_string(), palette),
    }
}

/// Resolve a configured font name against the known list.
pub fn font_by_name(name: &str) -> Font {
    Font::with_name(FONTS.iter().find(|f| **f == name).copied().unwrap_or(FONTS[0]))
}

// ============================================================================
// Layout Constants
// ============================================================================

/// Standard border radius for UI elements.
pub const BORDER_RADIUS: f32 = 6.0;

/// Small border radius.
pub const BORDER_RADIUS_SMALL: f32 = 4.0;

/// Large border radius (window chrome).
pub const BORDER_RADIUS_LARGE: f32 = 10.0;

/// Standard spacing between elements.
pub const SPACING: f32 = 10.0;

/// Small spacing.
pub const SPACING_SMALL: f32 = 5.0;

/// Large spacing.
pub const SPACING_LARGE: f32 = 20.0;

/// Standard padding.
pub const PADDING: f32 = 15.0;

/// Title bar height for floating windows.
pub const TITLE_BAR_HEIGHT: f32 = 36.0;

/// Floating window dimensions.
pub const TIMER_WIDTH: f32 = 400.0;
pub const TIMER_HEIGHT: f32 = 500.0;
pub const NOTEPAD_WIDTH: f32 = 800.0;
pub const NOTEPAD_HEIGHT: f32 = 600.0;
pub const MIXER_WIDTH: f32 = 900.0;
pub const MIXER_HEIGHT: f32 = 650.0;
pub const SETTINGS_WIDTH: f32 = 450.0;
pub const SETTINGS_HEIGHT: f32 = 430.0;

/// Margin around a maximized window.
pub const MAXIMIZED_INSET: f32 = 16.0;

/// Toolbar button diameter.
pub const TOOLBAR_BUTTON_SIZE: f32 = 48.0;

/// Translucent toolbar button background over the workspace image.
pub const TOOLBAR_BACKGROUND: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.25,
};

/// Create a standard border.
pub fn standard_border(ui: &UiTheme) -> Border {
    Border::default()
        .rounded(BORDER_RADIUS)
        .color(ui.border)
        .width(1.0)
}
