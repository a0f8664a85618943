pub mod inputs;
pub mod outputs;

pub use daisy::hal;

use daisy::led::LedUser;
use hal::adc::{AdcSampleTime, Resolution};
use hal::delay::DelayFromCountDownTimer;
use hal::pac::CorePeripherals;
use hal::pac::Peripherals as DevicePeripherals;
use hal::prelude::*;
use hal::spi;
use systick_monotonic::Systick;

use inputs::{Config as InputsConfig, Inputs};
use outputs::{Config as OutputsConfig, Outputs};

pub struct System {
    pub mono: Systick<1000>,
    pub status_led: LedUser,
    pub inputs: Inputs,
    pub outputs: Outputs,
}

impl System {
    /// Initialize system abstraction
    ///
    /// # Panics
    ///
    /// The system can be initialized only once. It panics otherwise.
    #[must_use]
    pub fn init(mut cp: CorePeripherals, dp: DevicePeripherals) -> Self {
        enable_cache(&mut cp);

        let board = daisy::Board::take().unwrap();
        let ccdr = daisy::board_freeze_clocks!(board, dp);
        let pins = daisy::board_split_gpios!(board, ccdr, dp);

        let mut delay = DelayFromCountDownTimer::new(dp.TIM2.timer(
            100.Hz(),
            ccdr.peripheral.TIM2,
            &ccdr.clocks,
        ));

        let adc = {
            let mut adc = hal::adc::Adc::adc1(
                dp.ADC1,
                &mut delay,
                ccdr.peripheral.ADC12,
                &ccdr.clocks,
            );
            adc.set_resolution(Resolution::SIXTEENBIT);
            adc.set_sample_time(AdcSampleTime::T_16);
            adc.enable()
        };

        // MCP41xxx latches data on rising edge of the clock, up to 10 MHz.
        let spi = dp.SPI2.spi(
            (
                pins.GPIO.PIN_D10.into_alternate::<5>(),
                spi::NoMiso,
                pins.GPIO.PIN_D9.into_alternate::<5>(),
            ),
            spi::MODE_0,
            1.MHz(),
            ccdr.peripheral.SPI2,
            &ccdr.clocks,
        );

        let mono = Systick::new(cp.SYST, 480_000_000);
        let status_led = daisy::board_split_leds!(pins).USER;
        let inputs = Inputs::new(InputsConfig {
            tap: pins.GPIO.PIN_B10.into_pull_up_input(),
            knob: pins.GPIO.PIN_C4.into_analog(),
            adc,
        });
        let outputs = Outputs::new(OutputsConfig {
            beat_led: pins.GPIO.PIN_D2.into_push_pull_output(),
            digipot_select: pins.GPIO.PIN_D1.into_push_pull_output(),
            spi,
        });

        Self {
            mono,
            status_led,
            inputs,
            outputs,
        }
    }
}

/// AN5212: Improve application performance when fetching instruction and
/// data, from both internal andexternal memories.
fn enable_cache(cp: &mut CorePeripherals) {
    cp.SCB.enable_icache();
    // NOTE: This requires cache management around all use of DMA.
    cp.SCB.enable_dcache(&mut cp.CPUID);
}
