mod digipot;
mod led;

use ozvena_control::DesiredOutput;

pub use self::digipot::{Config as DigipotConfig, Digipot};
use self::digipot::{SelectPin as DigipotSelectPin, Spi as DigipotSpi};
use self::led::{Led, Pin as LedPin};

pub struct Outputs {
    pub beat_led: Led,
    pub digipot: Digipot,
}

pub struct Config {
    pub beat_led: LedPin,
    pub digipot_select: DigipotSelectPin,
    pub spi: DigipotSpi,
}

impl Outputs {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            beat_led: Led::new(config.beat_led),
            digipot: Digipot::new(DigipotConfig {
                select: config.digipot_select,
                spi: config.spi,
            }),
        }
    }

    pub fn set(&mut self, desired: &DesiredOutput) {
        self.beat_led.set(desired.beat_led);
        if let Some(command) = desired.digipot {
            self.digipot.write(command);
        }
    }
}
