//! Translation of beat length and knob position to digipot codes.
//!
//! The delay time of PT2399 follows its external resistance:
//!
//! ```text
//! delay [ms] = 11.46 * R [kΩ] + 29.70
//! ```
//!
//! The digipot is wired as a rheostat with [`DIGIPOT_OHMS`] spread over 256
//! steps.

use crate::config::{DIGIPOT_OHMS, KNOB_MAX, MAX_VALUE_MS, MIN_VALUE_MS};

const DELAY_OFFSET_MS: f32 = 29.70;
const DELAY_MS_PER_KILO_OHM: f32 = 11.46;
const CODE_MAX: f32 = u8::MAX as f32;

/// Beat length in milliseconds, always kept within the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BeatLength(u32);

impl BeatLength {
    /// Shortest supported beat.
    pub const MIN: Self = Self(MIN_VALUE_MS);

    /// Longest supported beat.
    pub const MAX: Self = Self(MAX_VALUE_MS);

    /// Build beat length, clamping the value into the supported range.
    #[must_use]
    pub fn new(ms: u32) -> Self {
        Self(ms.clamp(MIN_VALUE_MS, MAX_VALUE_MS))
    }

    /// Accept a measured interval only if it fits the supported range.
    #[must_use]
    pub fn try_from_interval(ms: u32) -> Option<Self> {
        if (MIN_VALUE_MS..=MAX_VALUE_MS).contains(&ms) {
            Some(Self(ms))
        } else {
            None
        }
    }

    #[must_use]
    pub fn as_millis(self) -> u32 {
        self.0
    }
}

/// Position of the digipot wiper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResistanceCode(pub u8);

#[must_use]
pub fn resistance_code_from_beat_length(beat_length: BeatLength) -> ResistanceCode {
    resistance_code_from_ms(beat_length.as_millis() as f32)
}

/// Translate delay time to the code, clamping to the digipot range.
///
/// Delays shorter than the chip's minimum of ~29.7 ms would need negative
/// resistance, these map to 0.
#[must_use]
pub fn resistance_code_from_ms(ms: f32) -> ResistanceCode {
    let ohms = (ms - DELAY_OFFSET_MS) / DELAY_MS_PER_KILO_OHM * 1000.0;
    let ohms = ohms.clamp(0.0, DIGIPOT_OHMS as f32);
    let code = libm::roundf(ohms / DIGIPOT_OHMS as f32 * CODE_MAX);
    ResistanceCode(code as u8)
}

/// Map raw knob reading straight to the code, skipping the time domain.
#[must_use]
pub fn resistance_code_from_knob(raw: u16) -> ResistanceCode {
    let raw = raw.min(KNOB_MAX);
    let code = libm::roundf(raw as f32 / KNOB_MAX as f32 * CODE_MAX);
    ResistanceCode(code as u8)
}

/// Linear map of the knob range onto the supported beat lengths.
#[must_use]
pub fn beat_length_from_knob(raw: u16) -> BeatLength {
    let raw = raw.min(KNOB_MAX);
    let span = (MAX_VALUE_MS - MIN_VALUE_MS) as f32;
    let offset = libm::roundf(raw as f32 / KNOB_MAX as f32 * span);
    BeatLength::new(MIN_VALUE_MS + offset as u32)
}

/// Delay time the chip produces with the given resistance.
#[must_use]
pub fn ms_from_ohms(ohms: f32) -> f32 {
    DELAY_OFFSET_MS + DELAY_MS_PER_KILO_OHM * (ohms / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    #[test]
    fn when_beat_length_is_built_out_of_range_it_gets_clamped() {
        assert_eq!(BeatLength::new(0), BeatLength::MIN);
        assert_eq!(BeatLength::new(5000), BeatLength::MAX);
        assert_eq!(BeatLength::new(300).as_millis(), 300);
    }

    #[test]
    fn when_interval_is_out_of_range_it_is_rejected() {
        assert!(BeatLength::try_from_interval(19).is_none());
        assert!(BeatLength::try_from_interval(1001).is_none());
        assert_eq!(
            BeatLength::try_from_interval(20),
            Some(BeatLength::new(20))
        );
        assert_eq!(
            BeatLength::try_from_interval(1000),
            Some(BeatLength::new(1000))
        );
    }

    #[test]
    fn when_beat_is_below_chip_minimum_it_maps_to_zero() {
        assert_eq!(
            resistance_code_from_beat_length(BeatLength::new(29)),
            ResistanceCode(0)
        );
        assert_eq!(
            resistance_code_from_beat_length(BeatLength::MIN),
            ResistanceCode(0)
        );
    }

    #[test]
    fn when_beat_is_at_maximum_it_maps_below_full_scale() {
        // (1000 - 29.7) / 11.46 = 84.67 kΩ
        assert_eq!(
            resistance_code_from_beat_length(BeatLength::MAX),
            ResistanceCode(216)
        );
    }

    #[test]
    fn when_delay_exceeds_digipot_range_it_maps_to_full_scale() {
        assert_eq!(resistance_code_from_ms(2000.0), ResistanceCode(255));
    }

    #[test]
    fn when_knob_spans_its_range_code_spans_full_scale() {
        assert_eq!(resistance_code_from_knob(0), ResistanceCode(0));
        assert_eq!(resistance_code_from_knob(512), ResistanceCode(128));
        assert_eq!(resistance_code_from_knob(1023), ResistanceCode(255));
    }

    #[test]
    fn when_knob_reading_is_out_of_range_it_is_clamped() {
        assert_eq!(resistance_code_from_knob(4095), ResistanceCode(255));
        assert_eq!(beat_length_from_knob(4095), BeatLength::MAX);
    }

    #[test]
    fn when_knob_spans_its_range_beat_spans_supported_range() {
        assert_eq!(beat_length_from_knob(0), BeatLength::MIN);
        assert_eq!(beat_length_from_knob(1023), BeatLength::MAX);
        // 20 + 515 / 1023 * 980 = 513.35
        assert_eq!(beat_length_from_knob(515).as_millis(), 513);
    }

    #[test]
    fn chip_transfer_function_matches_datasheet_points() {
        assert_relative_eq!(ms_from_ohms(0.0), 29.7);
        assert_relative_eq!(ms_from_ohms(10_000.0), 144.3, epsilon = 0.001);
    }

    proptest! {
        #[test]
        fn code_does_not_decrease_with_longer_beats(a in 20u32..=1000, b in 20u32..=1000) {
            let (shorter, longer) = if a < b { (a, b) } else { (b, a) };
            prop_assert!(
                resistance_code_from_beat_length(BeatLength::new(shorter))
                    <= resistance_code_from_beat_length(BeatLength::new(longer))
            );
        }

        #[test]
        fn resistance_survives_round_trip_through_beat_length(ohms in 0u32..=100_000) {
            let expected = libm::roundf(ohms as f32 / DIGIPOT_OHMS as f32 * CODE_MAX) as i32;
            let ms = libm::roundf(ms_from_ohms(ohms as f32)) as u32;
            let code = resistance_code_from_beat_length(BeatLength::new(ms)).0 as i32;
            // Delays above the supported range are clamped, compare the clamped ones only.
            if ms <= MAX_VALUE_MS {
                prop_assert!((code - expected).abs() <= 1, "{} vs {}", code, expected);
            }
        }
    }
}
