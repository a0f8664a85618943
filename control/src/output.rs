//! Desired state of output peripherals.

use crate::config::DIGIPOT_WRITE_COMMAND;
use crate::mapping::ResistanceCode;

/// Desired state of output peripherals.
///
/// This structure transfers request to the hardware binding, asking to
/// lit the beat LED or to rewrite the digipot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DesiredOutput {
    pub beat_led: bool,
    pub digipot: Option<DigipotCommand>,
    /// Footswitch is being held for a long time. Informative only.
    pub long_press: bool,
}

/// Single write to the digital potentiometer.
///
/// The caller is expected to pull chip select low, transfer `bytes` and
/// pull chip select back high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigipotCommand {
    pub code: ResistanceCode,
}

impl DigipotCommand {
    #[must_use]
    pub fn bytes(&self) -> [u8; 2] {
        [DIGIPOT_WRITE_COMMAND, self.code.0]
    }
}
