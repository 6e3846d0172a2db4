use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Wall clock time in seconds since the Unix epoch
pub struct Clock(f64);

impl Clock {
    pub fn now() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or(Duration::ZERO);
        let timestamp = now.as_secs() as f64 + now.subsec_micros() as f64 * 1e-6;
        Self(timestamp)
    }

    pub fn as_secs(&self) -> f64 {
        self.0
    }
}
