// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Text caret blinking and rendering

use std::time::Duration;

use kurbo::{Affine, Line, Stroke};
use masonry::vello::Scene;
use masonry::vello::peniko::Brush;

use crate::settings;
use crate::theme;

/// Caret blink state.
///
/// The blink only advances while running. Stopping it hides the caret, and
/// ticks received while stopped are ignored.
#[derive(Debug, Clone)]
pub struct TextCursor {
    /// Time since the last toggle
    blink_timer: Duration,
    /// Is the caret currently visible?
    visible: bool,
    /// Is the blink timer running?
    running: bool,
}

impl Default for TextCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextCursor {
    /// Create a stopped, hidden caret
    pub fn new() -> Self {
        TextCursor {
            blink_timer: Duration::ZERO,
            visible: false,
            running: false,
        }
    }

    /// Start blinking, beginning with the caret shown
    pub fn start(&mut self) {
        self.running = true;
        self.reset();
    }

    /// Stop blinking and hide the caret
    pub fn stop(&mut self) {
        self.running = false;
        self.visible = false;
        self.blink_timer = Duration::ZERO;
    }

    /// Advance the blink animation by `elapsed`.
    ///
    /// Returns true if visibility changed.
    pub fn update(&mut self, elapsed: Duration) -> bool {
        if !self.running {
            return false;
        }

        let before = self.visible;
        self.blink_timer += elapsed;
        while self.blink_timer >= settings::caret::BLINK_INTERVAL {
            self.visible = !self.visible;
            self.blink_timer -= settings::caret::BLINK_INTERVAL;
        }
        before != self.visible
    }

    /// Show the caret and restart the interval (called when the caret moves)
    pub fn reset(&mut self) {
        if self.running {
            self.blink_timer = Duration::ZERO;
            self.visible = true;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the caret as a vertical line
    pub fn render(&self, scene: &mut Scene, line: Line, transform: Affine) {
        if !self.visible {
            return;
        }

        scene.stroke(
            &Stroke::new(theme::size::CARET_WIDTH),
            transform,
            &Brush::Solid(theme::item::CARET),
            None,
            &line,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF: Duration = Duration::from_millis(250);

    #[test]
    fn test_cursor_initial_state() {
        let cursor = TextCursor::new();
        assert!(!cursor.is_visible());
        assert!(!cursor.is_running());
    }

    #[test]
    fn test_start_shows_caret() {
        let mut cursor = TextCursor::new();
        cursor.start();
        assert!(cursor.is_visible());
        assert!(cursor.is_running());
    }

    #[test]
    fn test_cursor_blink() {
        let mut cursor = TextCursor::new();
        cursor.start();

        assert!(!cursor.update(HALF));
        assert!(cursor.is_visible());

        assert!(cursor.update(HALF));
        assert!(!cursor.is_visible());

        assert!(cursor.update(settings::caret::BLINK_INTERVAL));
        assert!(cursor.is_visible());
    }

    #[test]
    fn test_long_tick_toggles_per_interval() {
        let mut cursor = TextCursor::new();
        cursor.start();
        // two full intervals: hidden then shown again
        assert!(!cursor.update(settings::caret::BLINK_INTERVAL * 2));
        assert!(cursor.is_visible());
    }

    #[test]
    fn test_stopped_ignores_ticks() {
        let mut cursor = TextCursor::new();
        cursor.start();
        cursor.stop();
        assert!(!cursor.is_visible());

        assert!(!cursor.update(settings::caret::BLINK_INTERVAL * 3));
        assert!(!cursor.is_visible());
    }

    #[test]
    fn test_cursor_reset() {
        let mut cursor = TextCursor::new();
        cursor.start();
        cursor.update(settings::caret::BLINK_INTERVAL);
        assert!(!cursor.is_visible());

        cursor.reset();
        assert!(cursor.is_visible());
        assert_eq!(cursor.blink_timer, Duration::ZERO);
    }

    #[test]
    fn test_reset_while_stopped_stays_hidden() {
        let mut cursor = TextCursor::new();
        cursor.reset();
        assert!(!cursor.is_visible());
    }
}
