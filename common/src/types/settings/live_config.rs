use std::sync::{PoisonError, RwLock};

use log::info;

use crate::types::settings::{Endpoint, SamplingInterval};

/// The one live endpoint and the one live sampling interval.
///
/// Shared by `Arc` between the sensor poller (reads the interval), the OSC
/// client (reads the endpoint) and the settings surface, which is the single
/// writer. Readers get a copy, so a send that already took the endpoint is not
/// affected by a later reconfiguration.
#[derive(Debug, Default)]
pub struct LiveConfig {
    endpoint: RwLock<Endpoint>,
    interval: RwLock<SamplingInterval>,
}

impl LiveConfig {
    pub fn new(endpoint: Endpoint, interval: SamplingInterval) -> Self {
        Self {
            endpoint: RwLock::new(endpoint),
            interval: RwLock::new(interval),
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_endpoint(&self, endpoint: Endpoint) {
        info!("OSC endpoint set to {}", endpoint);
        *self
            .endpoint
            .write()
            .unwrap_or_else(PoisonError::into_inner) = endpoint;
    }

    pub fn interval(&self) -> SamplingInterval {
        *self
            .interval
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_interval(&self, interval: SamplingInterval) {
        info!("Sampling interval set to {}", interval);
        *self
            .interval
            .write()
            .unwrap_or_else(PoisonError::into_inner) = interval;
    }
}
