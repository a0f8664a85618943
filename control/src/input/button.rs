//! Manage footswitch state.

use crate::config::LONGPRESS_MS;
use crate::Timestamp;

/// Use this to hold footswitch state over time.
///
/// Detects clicking and holding.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button {
    pub pressed: bool,
    pub clicked: bool,
    pressed_since: Timestamp,
}

impl Button {
    pub fn update(&mut self, now: Timestamp, down: bool) {
        let was_pressed = self.pressed;
        self.pressed = down;
        self.clicked = !was_pressed && self.pressed;
        if self.clicked {
            self.pressed_since = now;
        }
    }

    /// Time the button has been kept down, zero if it is released.
    #[must_use]
    pub fn held(&self, now: Timestamp) -> u32 {
        if self.pressed {
            now.wrapping_sub(self.pressed_since)
        } else {
            0
        }
    }

    #[must_use]
    pub fn long_pressed(&self, now: Timestamp) -> bool {
        self.held(now) >= LONGPRESS_MS
    }
}
