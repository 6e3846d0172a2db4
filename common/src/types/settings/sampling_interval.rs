use std::fmt;
use std::time::Duration;

use crate::constants::{
    DEFAULT_INTERVAL_SECS, INTERVAL_STEP_SECS, MAX_INTERVAL_SECS, MIN_INTERVAL_SECS,
};

/// Sensor polling period, in seconds.
///
/// Behaves like the interval slider: values are snapped to the nearest
/// `INTERVAL_STEP_SECS` step and clamped to `[MIN_INTERVAL_SECS, MAX_INTERVAL_SECS]`.
///
/// ```
/// use common::SamplingInterval;
///
/// assert_eq!(SamplingInterval::try_from(0.33).unwrap().as_secs(), 0.35);
/// assert_eq!(SamplingInterval::try_from(3.0).unwrap().as_secs(), 1.5);
/// assert!(SamplingInterval::try_from(f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct SamplingInterval(f64);

impl SamplingInterval {
    pub fn as_secs(&self) -> f64 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs_f64(self.0)
    }

    fn snap(secs: f64) -> f64 {
        let steps = ((secs - MIN_INTERVAL_SECS) / INTERVAL_STEP_SECS).round();
        let snapped = (MIN_INTERVAL_SECS + steps * INTERVAL_STEP_SECS)
            .clamp(MIN_INTERVAL_SECS, MAX_INTERVAL_SECS);
        // keep two decimals so 0.1 + 5 * 0.05 reads 0.35
        (snapped * 100.0).round() / 100.0
    }
}

impl Default for SamplingInterval {
    fn default() -> Self {
        Self(DEFAULT_INTERVAL_SECS)
    }
}

impl TryFrom<f64> for SamplingInterval {
    type Error = String;

    fn try_from(secs: f64) -> Result<Self, Self::Error> {
        if !secs.is_finite() {
            return Err(format!("Invalid sampling interval {}", secs));
        }
        Ok(Self(Self::snap(secs)))
    }
}

impl fmt::Display for SamplingInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}s", self.0)
    }
}
