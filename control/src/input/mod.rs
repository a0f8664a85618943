//! Abstraction of the footswitch and knob inputs.

pub mod button;
pub mod knob;
pub mod snapshot;
pub mod tap;
