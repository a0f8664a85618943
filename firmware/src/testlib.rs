use crate::system::inputs::Inputs;

/// Keep sampling inputs until the footswitch gets pressed.
pub fn sample_until_tap_is_clicked(inputs: &mut Inputs) {
    loop {
        let was_down = inputs.tap.active;
        inputs.sample();
        let is_down = inputs.tap.active;
        if !was_down && is_down {
            break;
        }
        cortex_m::asm::delay(480_000_000 / 1000);
    }
}
