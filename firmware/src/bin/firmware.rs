#![no_main]
#![no_std]

use ozvena_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32h7xx_hal::pac, peripherals = true, dispatchers = [EXTI0, EXTI1])]
mod app {
    use daisy::led::{Led, LedUser};
    use fugit::ExtU64;
    use systick_monotonic::Systick;

    use ozvena_control::{ControlLoop, Timestamp};
    use ozvena_firmware::system::inputs::Inputs;
    use ozvena_firmware::system::outputs::Outputs;
    use ozvena_firmware::system::System;

    const BLINKS: u8 = 1;

    #[monotonic(binds = SysTick, default = true)]
    type Mono = Systick<1000>; // 1 kHz / 1 ms granularity

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        status_led: LedUser,
        inputs: Inputs,
        outputs: Outputs,
        control_loop: ControlLoop,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.core, cx.device);
        let mono = system.mono;
        let status_led = system.status_led;
        let mut inputs = system.inputs;
        let mut outputs = system.outputs;

        let mut control_loop = ControlLoop::new();
        inputs.sample();
        let desired = control_loop.warm_up(inputs.snapshot(0));
        outputs.set(&desired);

        control::spawn().unwrap();
        blink::spawn(true, BLINKS).unwrap();

        (
            Shared {},
            Local {
                status_led,
                inputs,
                outputs,
                control_loop,
            },
            init::Monotonics(mono),
        )
    }

    #[task(local = [inputs, outputs, control_loop], priority = 2)]
    fn control(cx: control::Context) {
        control::spawn_after(1.millis()).unwrap();

        let inputs = cx.local.inputs;
        let outputs = cx.local.outputs;
        let control_loop = cx.local.control_loop;

        // The counter wraps around after ~49 days, the control handles it.
        #[allow(clippy::cast_possible_truncation)]
        let now = monotonics::now().ticks() as Timestamp;

        inputs.sample();
        let desired = control_loop.apply_input_snapshot(inputs.snapshot(now));
        outputs.set(&desired);
    }

    #[task(local = [status_led])]
    fn blink(cx: blink::Context, on: bool, blinks: u8) {
        let time_on = 200.millis();
        let time_off_short = 200.millis();
        let time_off_long = 2.secs();

        if on {
            cx.local.status_led.on();
            blink::spawn_after(time_on, false, blinks).unwrap();
        } else {
            cx.local.status_led.off();
            if blinks > 1 {
                blink::spawn_after(time_off_short, true, blinks - 1).unwrap();
            } else {
                blink::spawn_after(time_off_long, true, BLINKS).unwrap();
            }
        }
    }
}
