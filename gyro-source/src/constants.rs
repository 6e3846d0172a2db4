/// Default address of the phyphox REST API on the local network
pub const DEFAULT_PHYPHOX_URL: &str = "http://192.168.1.34";

/// Phyphox buffer names of the gyroscope experiment
pub(crate) const GYRO_VARIABLES: [&str; 3] = ["gyroX", "gyroY", "gyroZ"];
