//! Diagnostics, printed over defmt when the feature is enabled.
//!
//! Without the feature the macros expand to nothing, so logging has no
//! effect on the behavior nor on timing of the control loop.

macro_rules! info {
    ( $($arg:tt)+ ) => (
        #[cfg(feature = "defmt")]
        defmt::info!($($arg)+);
    );
}

macro_rules! debug {
    ( $($arg:tt)+ ) => (
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)+);
    );
}

pub(crate) use debug;
pub(crate) use info;
