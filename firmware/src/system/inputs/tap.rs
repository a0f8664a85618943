use super::debounced::Debounced;
use crate::system::hal::gpio;

/// Tap tempo footswitch, pulled up and shorted to ground when pressed.
#[derive(defmt::Format)]
pub struct Tap {
    pin: Pin,
    debounced: Debounced<4>,
    pub active: bool,
}

pub type Pin = gpio::gpiog::PG14<gpio::Input>;

impl Tap {
    pub fn new(pin: Pin) -> Self {
        Self {
            pin,
            debounced: Debounced::new(),
            active: false,
        }
    }

    pub fn sample(&mut self) {
        self.active = self.debounced.update(self.pin.is_low());
    }
}
