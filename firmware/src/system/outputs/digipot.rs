use ozvena_control::DigipotCommand;

use crate::system::hal::gpio;
use crate::system::hal::pac::SPI2;
use crate::system::hal::prelude::*;
use crate::system::hal::spi;

/// Single channel MCP41xxx digital potentiometer on SPI.
pub struct Digipot {
    select: SelectPin,
    spi: Spi,
}

pub struct Config {
    pub select: SelectPin,
    pub spi: Spi,
}

pub type SelectPin = gpio::gpiob::PB4<gpio::Output>;
pub type Spi = spi::Spi<SPI2, spi::Enabled, u8>;

impl Digipot {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let mut select = config.select;
        select.set_high();
        Self {
            select,
            spi: config.spi,
        }
    }

    pub fn write(&mut self, command: DigipotCommand) {
        self.select.set_low();
        let result = self.spi.write(&command.bytes());
        // NOTE: The command is executed on the rising edge of chip select.
        self.select.set_high();
        if result.is_err() {
            defmt::warn!("Failed writing digipot code={:?}", command.code.0);
        }
    }
}
