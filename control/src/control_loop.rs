//! The root of the pedal's control, run once per polling cycle.

use crate::indicator::BeatIndicator;
use crate::input::knob::KnobReader;
use crate::input::snapshot::Snapshot as InputSnapshot;
use crate::input::tap::TapEstimator;
use crate::log;
use crate::mapping::BeatLength;
use crate::output::{DesiredOutput, DigipotCommand};
use crate::source::Source;
use crate::Timestamp;

/// The main store of input abstractions and the delay time.
///
/// This struct is the central piece of the control package. It takes
/// `InputSnapshot` on its input, passes it to the tap estimator and the
/// knob reader, decides which of them is in charge of the delay time and
/// returns the desired state of the digipot and the beat LED.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlLoop {
    tap: TapEstimator,
    knob: KnobReader,
    indicator: BeatIndicator,
    source: Source,
}

#[allow(clippy::new_without_default)]
impl ControlLoop {
    #[must_use]
    pub fn new() -> Self {
        let knob = KnobReader::default();
        let source = knob_source(&knob);
        Self {
            tap: TapEstimator::default(),
            knob,
            indicator: BeatIndicator::default(),
            source,
        }
    }

    /// Adopt the knob position found on startup and write it to the digipot.
    ///
    /// Footswitch held during startup is not counted as a tap.
    pub fn warm_up(&mut self, snapshot: InputSnapshot) -> DesiredOutput {
        self.tap.update(snapshot.now, snapshot.tap);
        self.tap.reset();
        self.knob.warm_up(snapshot.knob);
        let command = self.take_over(knob_source(&self.knob), snapshot.now);
        log::info!("Warmed up with knob={:?}", self.knob.value());
        self.desired_output(snapshot.now, Some(command))
    }

    pub fn apply_input_snapshot(&mut self, snapshot: InputSnapshot) -> DesiredOutput {
        let now = snapshot.now;
        let mut digipot = None;

        self.tap.update(now, snapshot.tap);
        if self.tap.on_beat() {
            let beat_length = self.tap.beat_length();
            log::info!("Tapped beat_length={:?}", beat_length.as_millis());
            digipot = Some(self.take_over(Source::Tap(beat_length), now));
        }

        // Knob is evaluated after the footswitch, so it wins when both
        // change within the same cycle.
        self.knob.update(snapshot.knob);
        if self.knob.changed {
            log::info!(
                "Turned knob={:?} beat_length={:?}",
                self.knob.value(),
                self.knob.beat_length().as_millis()
            );
            digipot = Some(self.take_over(knob_source(&self.knob), now));
        }

        self.desired_output(now, digipot)
    }

    #[must_use]
    pub fn source(&self) -> Source {
        self.source
    }

    #[must_use]
    pub fn beat_length(&self) -> BeatLength {
        self.source.beat_length()
    }

    fn take_over(&mut self, source: Source, now: Timestamp) -> DigipotCommand {
        self.source = source;
        self.indicator.reset(now);
        let command = DigipotCommand {
            code: source.resistance_code(),
        };
        log::debug!("Writing digipot code={:?}", command.code.0);
        command
    }

    fn desired_output(&mut self, now: Timestamp, digipot: Option<DigipotCommand>) -> DesiredOutput {
        let beat_led = self
            .indicator
            .update(now, self.source.beat_length())
            .is_on();
        DesiredOutput {
            beat_led,
            digipot,
            long_press: self.tap.button.long_pressed(now),
        }
    }
}

fn knob_source(knob: &KnobReader) -> Source {
    Source::Knob {
        raw: knob.value(),
        beat_length: knob.beat_length(),
    }
}
