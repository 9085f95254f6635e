// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Floating window management.
//!
//! Every widget panel shares the same capability: a draggable, minimizable
//! window positioned over the workspace canvas, plus a shared z-order stack
//! that decides which panel draws on top.

use iced::{Point, Vector};

/// Identity of a floating widget panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetId {
    Timer,
    Notepad,
    Mixer,
    Settings,
}

impl WidgetId {
    /// All widgets, in base rendering order.
    pub const ALL: [WidgetId; 4] = [
        WidgetId::Mixer,
        WidgetId::Notepad,
        WidgetId::Timer,
        WidgetId::Settings,
    ];

    /// Title shown in the window's title bar.
    pub fn title(&self) -> &'static str {
        match self {
            WidgetId::Timer => "Pomodoro Timer",
            WidgetId::Notepad => "Notepad",
            WidgetId::Mixer => "Ambient Sounds",
            WidgetId::Settings => "Settings",
        }
    }
}

/// Transient window state for a single floating widget.
#[derive(Debug, Clone)]
pub struct FloatingWindow {
    /// Whether the widget is rendered at all.
    pub open: bool,
    /// Whether the body is collapsed to a title-bar-only strip.
    pub minimized: bool,
    /// Whether the window fills the workspace (notepad only).
    pub maximized: bool,
    /// Top-left corner of the window on the canvas.
    pub position: Point,
    /// Pointer offset captured at drag start; Some while a drag is active.
    drag_offset: Option<Vector>,
}

impl FloatingWindow {
    /// Create a closed window at the given default position.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            open: false,
            minimized: false,
            maximized: false,
            position: Point::new(x, y),
            drag_offset: None,
        }
    }

    /// Begin a title-bar drag, capturing the offset between the pointer and
    /// the window origin. Suppressed while maximized.
    pub fn begin_drag(&mut self, cursor: Point) {
        if self.maximized {
            return;
        }
        self.drag_offset = Some(Vector::new(
            cursor.x - self.position.x,
            cursor.y - self.position.y,
        ));
    }

    /// Follow the pointer while a drag is active. Positions clamp at the
    /// canvas origin; there is no layout slot for negative coordinates.
    pub fn drag_to(&mut self, cursor: Point) {
        if self.maximized {
            return;
        }
        if let Some(offset) = self.drag_offset {
            self.position = Point::new(
                (cursor.x - offset.x).max(0.0),
                (cursor.y - offset.y).max(0.0),
            );
        }
    }

    /// End an active drag, if any.
    pub fn end_drag(&mut self) {
        self.drag_offset = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_offset.is_some()
    }

    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
    }

    pub fn toggle_maximized(&mut self) {
        self.maximized = !self.maximized;
        // A maximized window has no drag to continue.
        self.drag_offset = None;
    }
}

/// Number of distinguishable stacking levels.
///
/// Widgets beyond the 7th most-recently-focused collapse onto the lowest
/// level; with four widgets the cap is never reached, but the contract is
/// part of the window-manager behavior and is kept.
pub const STACK_LEVELS: usize = 7;

/// Shared z-order list for all floating widgets.
///
/// A widget's stacking level is its index in this list; absence means the
/// lowest level. Each id appears at most once.
#[derive(Debug, Clone, Default)]
pub struct WindowStack {
    order: Vec<WidgetId>,
}

impl WindowStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move a widget to the top of the stack, removing any prior occurrence.
    pub fn bring_to_front(&mut self, id: WidgetId) {
        self.order.retain(|w| *w != id);
        self.order.push(id);
    }

    /// Discrete stacking level for a widget, in `0..STACK_LEVELS`.
    pub fn level(&self, id: WidgetId) -> usize {
        match self.order.iter().position(|w| *w == id) {
            Some(index) if index < STACK_LEVELS => index,
            // Past the cap (or never focused): lowest level.
            _ => 0,
        }
    }

    /// Open widgets sorted back-to-front for rendering.
    pub fn render_order(&self, open: impl Fn(WidgetId) -> bool) -> Vec<WidgetId> {
        let mut ids: Vec<WidgetId> = WidgetId::ALL.into_iter().filter(|id| open(*id)).collect();
        ids.sort_by_key(|id| self.level(*id));
        ids
    }
}

/// The set of floating windows, one per widget.
#[derive(Debug, Clone)]
pub struct WindowSet {
    pub timer: FloatingWindow,
    pub notepad: FloatingWindow,
    pub mixer: FloatingWindow,
    pub settings: FloatingWindow,
}

impl Default for WindowSet {
    fn default() -> Self {
        let mut timer = FloatingWindow::at(100.0, 100.0);
        // The timer greets the user on startup.
        timer.open = true;

        Self {
            timer,
            notepad: FloatingWindow::at(100.0, 100.0),
            mixer: FloatingWindow::at(150.0, 50.0),
            settings: FloatingWindow::at(160.0, 160.0),
        }
    }
}

impl WindowSet {
    pub fn get(&self, id: WidgetId) -> &FloatingWindow {
        match id {
            WidgetId::Timer => &self.timer,
            WidgetId::Notepad => &self.notepad,
            WidgetId::Mixer => &self.mixer,
            WidgetId::Settings => &self.settings,
        }
    }

    pub fn get_mut(&mut self, id: WidgetId) -> &mut FloatingWindow {
        match id {
            WidgetId::Timer => &mut self.timer,
            WidgetId::Notepad => &mut self.notepad,
            WidgetId::Mixer => &mut self.mixer,
            WidgetId::Settings => &mut self.settings,
        }
    }

    /// Forward a pointer move to whichever window is mid-drag.
    pub fn drag_to(&mut self, cursor: Point) {
        for id in WidgetId::ALL {
            let window = self.get_mut(id);
            if window.is_dragging() {
                window.drag_to(cursor);
            }
        }
    }

    /// End every active drag (pointer-up is global).
    pub fn end_drags(&mut self) {
        for id in WidgetId::ALL {
            self.get_mut(id).end_drag();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bring_to_front_appends_and_dedupes() {
        let mut stack = WindowStack::new();
        stack.bring_to_front(WidgetId::Timer);
        stack.bring_to_front(WidgetId::Notepad);
        stack.bring_to_front(WidgetId::Timer);

        assert_eq!(stack.order, vec![WidgetId::Notepad, WidgetId::Timer]);
        assert_eq!(stack.level(WidgetId::Timer), 1);
        assert_eq!(stack.level(WidgetId::Notepad), 0);
    }

    #[test]
    fn test_each_id_appears_at_most_once() {
        let mut stack = WindowStack::new();
        let sequence = [
            WidgetId::Timer,
            WidgetId::Mixer,
            WidgetId::Timer,
            WidgetId::Settings,
            WidgetId::Mixer,
            WidgetId::Timer,
        ];
        for id in sequence {
            stack.bring_to_front(id);
        }

        for id in WidgetId::ALL {
            let count = stack.order.iter().filter(|w| **w == id).count();
            assert!(count <= 1, "{:?} appears {} times", id, count);
        }
        // Most recently raised id is always last.
        assert_eq!(stack.order.last(), Some(&WidgetId::Timer));
    }

    #[test]
    fn test_unfocused_widgets_share_lowest_level() {
        let stack = WindowStack::new();
        for id in WidgetId::ALL {
            assert_eq!(stack.level(id), 0);
        }
    }

    #[test]
    fn test_render_order_puts_most_recent_on_top() {
        let mut stack = WindowStack::new();
        stack.bring_to_front(WidgetId::Settings);
        stack.bring_to_front(WidgetId::Timer);

        let order = stack.render_order(|_| true);
        assert_eq!(order.last(), Some(&WidgetId::Timer));
        assert_eq!(order.len(), 4);

        let only_timer = stack.render_order(|id| id == WidgetId::Timer);
        assert_eq!(only_timer, vec![WidgetId::Timer]);
    }

    #[test]
    fn test_drag_follows_pointer_with_captured_offset() {
        let mut window = FloatingWindow::at(100.0, 100.0);
        window.begin_drag(Point::new(110.0, 105.0));
        assert!(window.is_dragging());

        window.drag_to(Point::new(210.0, 155.0));
        assert_eq!(window.position, Point::new(200.0, 150.0));

        window.end_drag();
        assert!(!window.is_dragging());

        // Moves after release are ignored.
        window.drag_to(Point::new(500.0, 500.0));
        assert_eq!(window.position, Point::new(200.0, 150.0));
    }

    #[test]
    fn test_drag_clamps_at_canvas_origin() {
        let mut window = FloatingWindow::at(50.0, 50.0);
        window.begin_drag(Point::new(60.0, 60.0));
        window.drag_to(Point::new(0.0, 0.0));
        assert_eq!(window.position, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_drag_suspended_while_maximized() {
        let mut window = FloatingWindow::at(100.0, 100.0);
        window.toggle_maximized();
        window.begin_drag(Point::new(110.0, 110.0));
        assert!(!window.is_dragging());
        window.drag_to(Point::new(300.0, 300.0));
        assert_eq!(window.position, Point::new(100.0, 100.0));
    }

    #[test]
    fn test_minimize_keeps_position() {
        let mut window = FloatingWindow::at(40.0, 60.0);
        window.toggle_minimized();
        assert!(window.minimized);
        assert_eq!(window.position, Point::new(40.0, 60.0));
        window.toggle_minimized();
        assert!(!window.minimized);
    }
}
