//! Compile-time configuration of the pedal.

/// Shortest beat length accepted from either of the inputs.
pub const MIN_VALUE_MS: u32 = 20;

/// Longest beat length accepted from either of the inputs.
pub const MAX_VALUE_MS: u32 = 1000;

/// Beat length reported by the tap estimator before the first tap interval.
pub const DEFAULT_BEAT_LENGTH_MS: u32 = 500;

/// How long the beat LED stays lit after the start of each beat.
pub const TAP_LED_DURATION_MS: u32 = 20;

/// Holding the footswitch this long is reported as a long press.
///
/// There is no behavior attached to it yet.
pub const LONGPRESS_MS: u32 = 1000;

/// Full-scale resistance of the digital potentiometer.
pub const DIGIPOT_OHMS: u32 = 100_000;

/// MCP41xxx command byte: write data to potentiometer 0.
pub const DIGIPOT_WRITE_COMMAND: u8 = 0x11;

/// Highest value reported by the 10-bit knob ADC.
pub const KNOB_MAX: u16 = 1023;

/// Knob jitter in raw ADC units that is ignored.
pub const DEAD_BAND: u16 = 2;
