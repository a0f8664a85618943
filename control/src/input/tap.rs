//! Evaluate whether footswitch taps are forming a tempo.

use super::button::Button;
use crate::config::DEFAULT_BEAT_LENGTH_MS;
use crate::mapping::BeatLength;
use crate::Timestamp;

/// Identify tempo being tapped in by the user.
///
/// Call `update` every cycle with the debounced footswitch state. Each
/// press is measured against the previous one. An interval that fits the
/// supported beat range becomes the new beat length, any other interval
/// only starts a new measurement.
///
/// The detected value is held until the next accepted tap.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapEstimator {
    pub button: Button,
    last_tap: Option<Timestamp>,
    beat_length: BeatLength,
    just_detected: bool,
}

impl Default for TapEstimator {
    fn default() -> Self {
        Self {
            button: Button::default(),
            last_tap: None,
            beat_length: BeatLength::new(DEFAULT_BEAT_LENGTH_MS),
            just_detected: false,
        }
    }
}

impl TapEstimator {
    pub fn update(&mut self, now: Timestamp, pressed: bool) {
        self.just_detected = false;
        self.button.update(now, pressed);
        if self.button.clicked {
            self.trigger(now);
        }
    }

    fn trigger(&mut self, now: Timestamp) {
        if let Some(last_tap) = self.last_tap {
            if let Some(beat_length) = BeatLength::try_from_interval(now.wrapping_sub(last_tap)) {
                self.beat_length = beat_length;
                self.just_detected = true;
            }
        }
        self.last_tap = Some(now);
    }

    /// Forget the pending measurement. The last beat length is kept.
    pub fn reset(&mut self) {
        self.last_tap = None;
        self.just_detected = false;
    }

    /// True only during the cycle in which a tap was accepted.
    #[must_use]
    pub fn on_beat(&self) -> bool {
        self.just_detected
    }

    #[must_use]
    pub fn beat_length(&self) -> BeatLength {
        self.beat_length
    }
}
