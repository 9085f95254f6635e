// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pomodoro timer state machine.

use crate::config::TimerConfig;
use std::time::{Duration, Instant};

/// Countdown mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerMode {
    #[default]
    Pomodoro,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    pub const ALL: [TimerMode; 3] = [TimerMode::Pomodoro, TimerMode::ShortBreak, TimerMode::LongBreak];

    pub fn label(&self) -> &'static str {
        match self {
            TimerMode::Pomodoro => "Pomodoro",
            TimerMode::ShortBreak => "Short Break",
            TimerMode::LongBreak => "Long Break",
        }
    }
}

/// Transient countdown state. Durations and alarm volume live in
/// [`TimerConfig`]; this struct is never persisted.
#[derive(Debug, Clone)]
pub struct TimerState {
    pub mode: TimerMode,
    /// Remaining seconds in the current mode.
    pub time_left: u64,
    pub is_running: bool,
    pub completed_pomodoros: u32,
    /// Reference point for the last accepted whole-second tick.
    last_update: Option<Instant>,
}

impl TimerState {
    pub fn new(config: &TimerConfig) -> Self {
        Self {
            mode: TimerMode::Pomodoro,
            time_left: config.duration(TimerMode::Pomodoro),
            is_running: false,
            completed_pomodoros: 0,
            last_update: None,
        }
    }

    /// Start or resume the countdown.
    pub fn start(&mut self, now: Instant) {
        if !self.is_running {
            self.is_running = true;
            self.last_update = Some(now);
        }
    }

    /// Halt the countdown, retaining the remaining time.
    pub fn pause(&mut self) {
        self.is_running = false;
        self.last_update = None;
    }

    /// Halt and restore the current mode's full duration.
    ///
    /// Services both the Stop and Reset controls; the two are deliberately
    /// identical.
    pub fn reset(&mut self, config: &TimerConfig) {
        self.is_running = false;
        self.last_update = None;
        self.time_left = config.duration(self.mode);
    }

    /// Switch mode manually, discarding progress in the previous mode.
    pub fn switch_mode(&mut self, mode: TimerMode, config: &TimerConfig) {
        self.mode = mode;
        self.reset(config);
    }

    /// Advance the countdown against wall-clock time.
    ///
    /// Only whole elapsed seconds are consumed; the reference point is
    /// re-based by the consumed amount so fractional remainders carry over
    /// to the next tick. Delayed ticks catch up by subtracting every whole
    /// second that passed. Returns `true` when the countdown just completed,
    /// in which case the mode has auto-advanced (without starting) and the
    /// alarm should sound.
    pub fn tick(&mut self, now: Instant, config: &TimerConfig) -> bool {
        if !self.is_running {
            return false;
        }
        let last = match self.last_update {
            Some(last) => last,
            None => {
                self.last_update = Some(now);
                return false;
            }
        };

        let elapsed = now.saturating_duration_since(last);
        if elapsed.as_millis() < 1000 {
            return false;
        }

        let seconds = elapsed.as_secs();
        self.last_update = Some(last + Duration::from_secs(seconds));

        if self.time_left > seconds {
            self.time_left -= seconds;
            return false;
        }

        self.time_left = 0;
        self.complete(config);
        true
    }

    /// Auto-advance after a completed countdown. Every 4th completed
    /// pomodoro earns a long break; breaks always return to a pomodoro.
    fn complete(&mut self, config: &TimerConfig) {
        self.is_running = false;
        self.last_update = None;

        match self.mode {
            TimerMode::Pomodoro => {
                let next = if self.completed_pomodoros % 4 == 3 {
                    TimerMode::LongBreak
                } else {
                    TimerMode::ShortBreak
                };
                self.completed_pomodoros += 1;
                self.mode = next;
            }
            TimerMode::ShortBreak | TimerMode::LongBreak => {
                self.mode = TimerMode::Pomodoro;
            }
        }
        self.time_left = config.duration(self.mode);
    }

    /// Completed fraction of the current mode, for presentation.
    pub fn progress(&self, config: &TimerConfig) -> f32 {
        let total = config.duration(self.mode);
        if total == 0 {
            return 0.0;
        }
        (total - self.time_left.min(total)) as f32 / total as f32
    }
}

/// Format seconds as `mm:ss`.
pub fn format_clock(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_config() -> TimerConfig {
        TimerConfig {
            pomodoro: 5,
            short_break: 3,
            long_break: 8,
            volume: 50,
        }
    }

    #[test]
    fn test_first_completion_routes_to_short_break() {
        let config = short_config();
        let mut timer = TimerState::new(&config);
        let t0 = Instant::now();

        timer.start(t0);
        let completed = timer.tick(t0 + Duration::from_secs(5), &config);

        assert!(completed);
        assert_eq!(timer.completed_pomodoros, 1);
        assert_eq!(timer.mode, TimerMode::ShortBreak);
        assert_eq!(timer.time_left, config.short_break);
        assert!(!timer.is_running, "next mode must not auto-start");
    }

    #[test]
    fn test_fourth_completion_routes_to_long_break() {
        let config = short_config();
        let mut timer = TimerState::new(&config);
        let mut now = Instant::now();

        for expected in 1..=4u32 {
            timer.switch_mode(TimerMode::Pomodoro, &config);
            timer.start(now);
            now += Duration::from_secs(config.pomodoro);
            assert!(timer.tick(now, &config));
            assert_eq!(timer.completed_pomodoros, expected);
        }

        assert_eq!(timer.mode, TimerMode::LongBreak);
        assert_eq!(timer.time_left, config.long_break);
    }

    #[test]
    fn test_break_completion_returns_to_pomodoro() {
        let config = short_config();
        let mut timer = TimerState::new(&config);
        timer.switch_mode(TimerMode::LongBreak, &config);

        let t0 = Instant::now();
        timer.start(t0);
        assert!(timer.tick(t0 + Duration::from_secs(config.long_break), &config));

        assert_eq!(timer.mode, TimerMode::Pomodoro);
        assert_eq!(timer.time_left, config.pomodoro);
        assert_eq!(timer.completed_pomodoros, 0);
    }

    #[test]
    fn test_tick_consumes_whole_seconds_and_keeps_remainder() {
        let config = TimerConfig {
            pomodoro: 100,
            ..short_config()
        };
        let mut timer = TimerState::new(&config);
        let t0 = Instant::now();
        timer.start(t0);

        // Below the one-second threshold: nothing consumed.
        assert!(!timer.tick(t0 + Duration::from_millis(900), &config));
        assert_eq!(timer.time_left, 100);

        // 2.5s elapsed: two whole seconds consumed, 500ms remainder kept.
        assert!(!timer.tick(t0 + Duration::from_millis(2500), &config));
        assert_eq!(timer.time_left, 98);

        // 600ms later the remainder adds up to another whole second.
        assert!(!timer.tick(t0 + Duration::from_millis(3100), &config));
        assert_eq!(timer.time_left, 97);
    }

    #[test]
    fn test_delayed_tick_catches_up() {
        let config = TimerConfig {
            pomodoro: 60,
            ..short_config()
        };
        let mut timer = TimerState::new(&config);
        let t0 = Instant::now();
        timer.start(t0);

        assert!(!timer.tick(t0 + Duration::from_secs(10), &config));
        assert_eq!(timer.time_left, 50);
    }

    #[test]
    fn test_overshoot_completes_once() {
        let config = short_config();
        let mut timer = TimerState::new(&config);
        let t0 = Instant::now();
        timer.start(t0);

        // Far more time passed than was left.
        assert!(timer.tick(t0 + Duration::from_secs(60), &config));
        assert_eq!(timer.time_left, config.short_break);
        assert_eq!(timer.completed_pomodoros, 1);
    }

    #[test]
    fn test_stop_and_reset_are_identical() {
        let config = short_config();

        for paused in [false, true] {
            let mut timer = TimerState::new(&config);
            let t0 = Instant::now();
            timer.start(t0);
            timer.tick(t0 + Duration::from_secs(2), &config);
            if paused {
                timer.pause();
            }

            timer.reset(&config);
            assert!(!timer.is_running);
            assert_eq!(timer.time_left, config.duration(timer.mode));
        }
    }

    #[test]
    fn test_pause_retains_time_left() {
        let config = short_config();
        let mut timer = TimerState::new(&config);
        let t0 = Instant::now();
        timer.start(t0);
        timer.tick(t0 + Duration::from_secs(2), &config);
        timer.pause();

        assert_eq!(timer.time_left, 3);
        assert!(!timer.is_running);

        // Ticks while paused do nothing.
        assert!(!timer.tick(t0 + Duration::from_secs(30), &config));
        assert_eq!(timer.time_left, 3);
    }

    #[test]
    fn test_switch_mode_discards_progress() {
        let config = short_config();
        let mut timer = TimerState::new(&config);
        let t0 = Instant::now();
        timer.start(t0);
        timer.tick(t0 + Duration::from_secs(2), &config);

        timer.switch_mode(TimerMode::ShortBreak, &config);
        assert!(!timer.is_running);
        assert_eq!(timer.mode, TimerMode::ShortBreak);
        assert_eq!(timer.time_left, config.short_break);
    }

    #[test]
    fn test_progress_fraction() {
        let config = short_config();
        let mut timer = TimerState::new(&config);
        assert_eq!(timer.progress(&config), 0.0);

        let t0 = Instant::now();
        timer.start(t0);
        timer.tick(t0 + Duration::from_secs(2), &config);
        let expected = 2.0 / config.pomodoro as f32;
        assert!((timer.progress(&config) - expected).abs() < f32::EPSILON);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(1500), "25:00");
    }
}
