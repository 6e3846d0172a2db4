use std::fmt;

use crate::constants::N_XYZ_COORDINATES;
use crate::types::untimed::XYZ;
use crate::types::Clock;

/// A gyroscope reading: rotation rate about each axis and the time it was taken.
///
/// # Examples
///
/// ```
/// use common::types::timed::Sample3D;
/// use common::types::untimed::XYZ;
///
/// let timestamp = 1627846267.0;
/// let measurement = [1.0, 2.0, 3.0];
/// let sample = Sample3D::new(timestamp, measurement);
///
/// assert_eq!(sample.get_timestamp(), timestamp);
/// assert_eq!(sample.get_measurement(), XYZ::new(measurement));
/// assert_eq!(sample.to_string(), "1,2,3");
/// ```

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sample3D {
    timestamp: f64,
    measurement: XYZ,
}

impl Sample3D {
    ///  Creates a new `Sample3D` instance from a timestamp and a measurement array.
    pub fn new(timestamp: f64, measurement: [f64; N_XYZ_COORDINATES]) -> Self {
        Self {
            timestamp,
            measurement: XYZ::new(measurement),
        }
    }

    /// Creates a new `Sample3D` instance from a timestamp and an `XYZ` measurement.
    pub fn from_measurement(timestamp: f64, measurement: XYZ) -> Self {
        Self {
            timestamp,
            measurement,
        }
    }

    /// Creates a sample stamped with the current wall clock time.
    pub fn now(measurement: XYZ) -> Self {
        Self::from_measurement(Clock::now().as_secs(), measurement)
    }

    pub fn get_measurement(&self) -> XYZ {
        self.measurement
    }

    pub fn get_timestamp(&self) -> f64 {
        self.timestamp
    }
}

/// Comma joined rotation rate, as shown on the display
impl fmt::Display for Sample3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.measurement.inner();
        write!(f, "{},{},{}", x, y, z)
    }
}
