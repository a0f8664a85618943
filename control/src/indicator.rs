//! Beat LED blinking along with the current tempo.

use crate::config::TAP_LED_DURATION_MS;
use crate::mapping::BeatLength;
use crate::Timestamp;

/// Abstraction of the beat LED.
///
/// The LED lights up for a short moment at the start of every beat. A new
/// beat starts either when `reset` is called, or once the current beat
/// length has passed since the previous one, so it keeps blinking between
/// taps.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BeatIndicator {
    last_reset: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorState {
    Off,
    On,
}

impl IndicatorState {
    #[must_use]
    pub fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl BeatIndicator {
    pub fn reset(&mut self, now: Timestamp) {
        self.last_reset = now;
    }

    pub fn update(&mut self, now: Timestamp, beat_length: BeatLength) -> IndicatorState {
        let beat_length = beat_length.as_millis();
        let elapsed = now.wrapping_sub(self.last_reset);
        if elapsed >= beat_length {
            // Skip whole beats to stay in phase in case the loop was late.
            let missed = elapsed - elapsed % beat_length;
            self.last_reset = self.last_reset.wrapping_add(missed);
        }

        if now.wrapping_sub(self.last_reset) < TAP_LED_DURATION_MS {
            IndicatorState::On
        } else {
            IndicatorState::Off
        }
    }
}
