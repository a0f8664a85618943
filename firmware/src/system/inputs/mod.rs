//! Abstraction of the footswitch and the knob.
//!
//! Both are sampled on the same pace by the control loop, the snapshot
//! is then passed to `ozvena_control`.

mod debounced;
mod knob;
mod tap;

use ozvena_control::{InputSnapshot, Timestamp};

use crate::system::hal::adc::{Adc, Enabled};
use crate::system::hal::pac::ADC1;

use knob::{Knob, Pin as KnobPin};
use tap::{Pin as TapPin, Tap};

pub struct Inputs {
    pub tap: Tap,
    pub knob: Knob,
    adc: Adc<ADC1, Enabled>,
}

pub struct Config {
    pub tap: TapPin,
    pub knob: KnobPin,
    pub adc: Adc<ADC1, Enabled>,
}

impl Inputs {
    pub fn new(config: Config) -> Self {
        Self {
            tap: Tap::new(config.tap),
            knob: Knob::new(config.knob),
            adc: config.adc,
        }
    }

    pub fn sample(&mut self) {
        self.tap.sample();
        self.knob.sample(&mut self.adc);
    }

    #[must_use]
    pub fn snapshot(&self, now: Timestamp) -> InputSnapshot {
        InputSnapshot {
            now,
            tap: self.tap.active,
            knob: self.knob.value,
        }
    }
}
