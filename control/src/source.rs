//! Input currently in charge of the delay time.

use crate::mapping::{
    resistance_code_from_beat_length, resistance_code_from_knob, BeatLength, ResistanceCode,
};

/// The authoritative source of the delay time.
///
/// Both the footswitch and the knob may take over at any time. Whichever
/// changed last wins, there is no locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Source {
    Tap(BeatLength),
    Knob { raw: u16, beat_length: BeatLength },
}

impl Source {
    #[must_use]
    pub fn beat_length(&self) -> BeatLength {
        match self {
            Self::Tap(beat_length) | Self::Knob { beat_length, .. } => *beat_length,
        }
    }

    /// Code for the digipot, always recomputed from the source.
    ///
    /// Knob is mapped straight from its raw reading, tapped tempo goes
    /// through the delay chip's transfer function.
    #[must_use]
    pub fn resistance_code(&self) -> ResistanceCode {
        match self {
            Self::Tap(beat_length) => resistance_code_from_beat_length(*beat_length),
            Self::Knob { raw, .. } => resistance_code_from_knob(*raw),
        }
    }

    #[must_use]
    pub fn is_tap(&self) -> bool {
        matches!(self, Self::Tap(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::mapping::beat_length_from_knob;

    #[test]
    fn when_tapped_code_follows_chip_transfer_function() {
        let source = Source::Tap(BeatLength::new(500));
        assert_eq!(source.beat_length().as_millis(), 500);
        // (500 - 29.7) / 11.46 = 41.04 kΩ
        assert_eq!(source.resistance_code(), ResistanceCode(105));
    }

    #[test]
    fn when_knob_code_follows_raw_reading() {
        let source = Source::Knob {
            raw: 1023,
            beat_length: beat_length_from_knob(1023),
        };
        assert_eq!(source.beat_length(), BeatLength::MAX);
        assert_eq!(source.resistance_code(), ResistanceCode(255));
        assert!(!source.is_tap());
    }
}
