//! Control of a tap-tempo delay pedal, translating user input to the delay time.
//!
//! The delay time is set by a digital potentiometer in the feedback of an
//! analog delay chip. It is controlled either by a knob or by tapping a
//! footswitch. A LED blinks along with the current tempo.
//!
//! It is meant to run in a firmware, polled in a tight loop. All of the
//! state is owned by [`ControlLoop`], it takes an [`InputSnapshot`] on every
//! cycle and returns [`DesiredOutput`] to be applied on the hardware:
//!
//! ```text
//!   [Footswitch]   [Knob]
//!         |           |
//!         V           V
//!  [TapEstimator] [KnobReader]
//!         |           |
//!         +---> [ControlLoop {Source}] ---> [BeatIndicator] ---> [LED]
//!                     |
//!                     V
//!               [mapping] ---> (DigipotCommand) ---> [Digipot]
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod config;
mod control_loop;
pub mod indicator;
pub mod input;
mod log;
pub mod mapping;
mod output;
pub mod source;

pub use control_loop::ControlLoop;
pub use input::snapshot::Snapshot as InputSnapshot;
pub use output::{DesiredOutput, DigipotCommand};

/// Milliseconds since the start of the system. Wraps around.
pub type Timestamp = u32;
