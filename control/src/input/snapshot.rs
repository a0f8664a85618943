//! Structures used to pass the current state of hardware peripherals.

use crate::Timestamp;

/// The current state of all inputs.
///
/// `Snapshot` is meant to be passed from the hardware binding to the
/// control package. It should pass pretty raw data, with one exception:
/// debouncing of the footswitch is done by the caller.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    /// Milliseconds since the start of the system.
    pub now: Timestamp,
    /// Whether the tap footswitch is currently held down.
    pub tap: bool,
    /// Raw reading of the delay knob, 0 to 1023.
    pub knob: u16,
}
