//! Knob abstraction filtering jitter of its reading.

use crate::config::{DEAD_BAND, KNOB_MAX};
use crate::mapping::{beat_length_from_knob, BeatLength};

/// Abstraction of the delay knob.
///
/// Raw readings of the ADC keep wobbling by a couple of units. Only moves
/// wider than the dead band are accepted, so the digipot is not rewritten
/// on every cycle.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KnobReader {
    pub last_accepted: u16,
    pub changed: bool,
}

impl KnobReader {
    /// Seed the reader with the position found on startup.
    pub fn warm_up(&mut self, raw: u16) {
        self.last_accepted = raw.min(KNOB_MAX);
        self.changed = false;
    }

    pub fn update(&mut self, raw: u16) {
        let raw = raw.min(KNOB_MAX);
        self.changed = raw.abs_diff(self.last_accepted) > DEAD_BAND;
        if self.changed {
            self.last_accepted = raw;
        }
    }

    #[must_use]
    pub fn value(&self) -> u16 {
        self.last_accepted
    }

    #[must_use]
    pub fn beat_length(&self) -> BeatLength {
        beat_length_from_knob(self.last_accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn when_moved_past_dead_band_it_reports_change() {
        let mut knob = KnobReader::default();
        knob.warm_up(512);
        knob.update(515);
        assert!(knob.changed);
        assert_eq!(knob.value(), 515);
        assert_eq!(knob.beat_length().as_millis(), 513);
    }

    #[test]
    fn when_change_is_reported_it_lasts_a_single_cycle() {
        let mut knob = KnobReader::default();
        knob.warm_up(512);
        knob.update(600);
        assert!(knob.changed);
        knob.update(600);
        assert!(!knob.changed);
    }

    #[test]
    fn when_jitters_within_dead_band_it_stays_put() {
        let mut knob = KnobReader::default();
        knob.warm_up(512);
        for raw in [510, 514, 512, 511, 513, 510] {
            knob.update(raw);
            assert!(!knob.changed);
            assert_eq!(knob.value(), 512);
        }
    }

    #[test]
    fn when_warmed_up_it_does_not_report_change() {
        let mut knob = KnobReader::default();
        knob.warm_up(800);
        assert!(!knob.changed);
        assert_eq!(knob.value(), 800);
    }

    #[test]
    fn when_reading_is_out_of_range_it_is_clamped() {
        let mut knob = KnobReader::default();
        knob.warm_up(1000);
        knob.update(u16::MAX);
        assert!(knob.changed);
        assert_eq!(knob.value(), KNOB_MAX);
    }

    proptest! {
        #[test]
        fn pair_within_dead_band_changes_at_most_once(
            start in 0u16..=1023,
            first in 0u16..=1023,
            delta in 0u16..=DEAD_BAND,
            up in any::<bool>(),
        ) {
            let second = if up {
                first.saturating_add(delta).min(KNOB_MAX)
            } else {
                first.saturating_sub(delta)
            };
            let mut knob = KnobReader::default();
            knob.warm_up(start);
            knob.update(first);
            let first_changed = knob.changed;
            knob.update(second);
            let second_changed = knob.changed;
            prop_assert!(!(first_changed && second_changed));
        }
    }
}
