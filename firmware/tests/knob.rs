#![no_std]
#![no_main]

use ozvena_firmware as _; // Panic handler

#[defmt_test::tests]
mod tests {
    use ozvena_control::config::KNOB_MAX;
    use ozvena_firmware::system::inputs::Inputs;
    use ozvena_firmware::system::System;
    use ozvena_firmware::testlib::sample_until_tap_is_clicked;

    #[init]
    fn init() -> Inputs {
        let cp = cortex_m::Peripherals::take().unwrap();
        let dp = daisy::pac::Peripherals::take().unwrap();
        System::init(cp, dp).inputs
    }

    #[test]
    fn knob_moves_in_expected_range(inputs: &mut Inputs) {
        defmt::info!("Turn the knob to its minimum, then press the footswitch");
        sample_until_tap_is_clicked(inputs);
        defmt::assert!(
            inputs.knob.value <= 1,
            "Assert failed, actual value: {:?}",
            inputs.knob.value
        );
        defmt::info!("OK");

        cortex_m::asm::delay(480_000_000 / 2); // Protection against accidental double-clicks

        defmt::info!("Turn the knob to its maximum, then press the footswitch");
        sample_until_tap_is_clicked(inputs);
        defmt::assert!(
            inputs.knob.value >= KNOB_MAX - 1,
            "Assert failed, actual value: {:?}",
            inputs.knob.value
        );
        defmt::info!("OK");
    }
}
