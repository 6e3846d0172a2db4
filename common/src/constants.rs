/// Number of axis in a rotation-rate sample
pub const N_XYZ_COORDINATES: usize = 3;

/// Default OSC receiver
pub const DEFAULT_OSC_HOST: &str = "192.168.10.176";
pub const DEFAULT_OSC_PORT: u16 = 12345;

/// Sampling interval bounds, in seconds
pub const DEFAULT_INTERVAL_SECS: f64 = 0.5;
pub const MIN_INTERVAL_SECS: f64 = 0.1;
pub const MAX_INTERVAL_SECS: f64 = 1.5;
pub const INTERVAL_STEP_SECS: f64 = 0.05;
