use nb::block;

use ozvena_control::config::KNOB_MAX;

use crate::system::hal::adc::{Adc, Enabled};
use crate::system::hal::gpio;
use crate::system::hal::pac::ADC1;

/// Delay time knob, its last reading scaled to 10 bits.
#[derive(defmt::Format)]
pub struct Knob {
    pin: Pin,
    pub value: u16,
}

pub type Pin = gpio::gpioa::PA7<gpio::Analog>;

impl Knob {
    pub fn new(pin: Pin) -> Self {
        Self { pin, value: 0 }
    }

    pub fn sample(&mut self, adc: &mut Adc<ADC1, Enabled>) {
        adc.start_conversion(&mut self.pin);
        let sample: u32 = block!(adc.read_sample()).unwrap_or_default();
        self.value = transpose_adc(sample, adc.slope());
    }
}

#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
fn transpose_adc(sample: u32, slope: u32) -> u16 {
    let float = (slope as f32 - sample as f32) / slope as f32;
    // NOTE: Pots are connected to -5 to +5 V ADC while they span only
    // from 0 to +5 V.
    let half_range = (float * 2.0 - 1.0).clamp(0.0, 1.0);
    (half_range * KNOB_MAX as f32 + 0.5) as u16
}
