use crate::system::hal::gpio;

pub struct Led {
    pin: Pin,
}

pub type Pin = gpio::gpioc::PC11<gpio::Output>;

impl Led {
    #[must_use]
    pub fn new(pin: Pin) -> Self {
        Self { pin }
    }

    pub fn set(&mut self, on: bool) {
        self.pin.set_state(on.into());
    }
}
