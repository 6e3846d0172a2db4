use std::sync::{Arc, PoisonError, RwLock};

use common::Sample3D;
use publisher::Listener;

/// Latest gyroscope sample, as shown to the user
#[derive(Debug, Default)]
pub struct DisplaySink {
    latest: RwLock<String>,
}

impl DisplaySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&self, sample: &Sample3D) {
        *self.latest.write().unwrap_or_else(PoisonError::into_inner) = sample.to_string();
    }

    /// Comma joined x, y, z of the latest sample; empty until the first one arrives.
    pub fn text(&self) -> String {
        self.latest
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Listener that keeps this sink up to date
    pub fn listener(self: &Arc<Self>) -> Listener<Sample3D> {
        let display = Arc::downgrade(self);
        Listener::new(move |_id, sample: Arc<Sample3D>| {
            let display = display.clone();
            async move {
                if let Some(display) = display.upgrade() {
                    display.update(&sample);
                }
            }
        })
    }
}
