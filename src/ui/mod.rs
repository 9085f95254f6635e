// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! UI components for Hearth.

pub mod mixer_panel;
pub mod notepad_panel;
pub mod settings_panel;
pub mod theme;
pub mod timer_panel;
pub mod window_frame;
