// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Hearth - a desktop focus companion.
//!
//! A Pomodoro timer, notepad, and ambient sound mixer, each a draggable
//! floating window over a full-screen background with a motivational quote.

mod app;
mod audio;
mod config;
mod message;
mod mixer;
mod notepad;
mod state;
mod timer;
mod ui;
mod window;

use app::Hearth;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("hearth=debug".parse().unwrap()))
        .init();

    info!("Starting Hearth");

    iced::application(Hearth::new, Hearth::update, Hearth::view)
        .title("Hearth")
        .subscription(Hearth::subscription)
        .theme(Hearth::theme)
        .window_size((1280.0, 800.0))
        .run()
}
