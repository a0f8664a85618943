//! Hardware binding of the pedal control for Daisy Patch SM.
//!
//! Everything with decision logic lives in `ozvena-control`, this crate
//! only samples the footswitch and the knob, writes the digipot over SPI
//! and drives LEDs.

#![no_main]
#![no_std]

use defmt_rtt as _; // Global logger.
use panic_probe as _;
use stm32h7xx_hal as _; // Interrupt vectors.

pub mod system;
pub mod testlib;

// Prevents the panic message being printed twice when `defmt::panic` is invoked.
#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}
