use log::{debug, error, info};
use std::sync::{Arc, Weak};
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;

use common::{Endpoint, LiveConfig, Sample3D};

use crate::encoder;
use crate::errors::OscClientError;

const BIND_ADDRESS: &str = "0.0.0.0:0";

/// Sends gyroscope samples to the endpoint held in the shared `LiveConfig`.
pub struct OscClient {
    socket: Arc<UdpSocket>,
    config: Arc<LiveConfig>,
}

impl OscClient {
    /// Binds an ephemeral local UDP socket.
    pub async fn bind(config: Arc<LiveConfig>) -> Result<Self, OscClientError> {
        let socket = UdpSocket::bind(BIND_ADDRESS)
            .await
            .map_err(OscClientError::Bind)?;
        info!("OSC client sending to {}", config.endpoint());
        Ok(Self {
            socket: Arc::new(socket),
            config,
        })
    }

    /// Points the client at a new endpoint. Sends already dispatched keep their endpoint.
    pub fn configure(&self, endpoint: Endpoint) {
        self.config.set_endpoint(endpoint);
    }

    pub fn endpoint(&self) -> Endpoint {
        self.config.endpoint()
    }

    /// Encodes `sample` and sends it in the background to the current endpoint.
    ///
    /// Returns the handle of the send task, which resolves to the number of bytes sent.
    /// Callers are free to drop it. The task only holds a weak reference to the socket, so
    /// a dropped client cancels sends that haven't started.
    pub fn send(&self, sample: &Sample3D) -> JoinHandle<Result<usize, OscClientError>> {
        let endpoint = self.config.endpoint();
        let payload = encoder::encode_sample(sample);
        let socket = Arc::downgrade(&self.socket);
        let sample = *sample;

        tokio::spawn(async move {
            let result = send_to(socket, payload, &endpoint).await;
            match &result {
                Ok(_) => debug!("Sent OSC message /gyro {} to {}", sample, endpoint),
                Err(e) => error!("Failed to send OSC message to {}: {}", endpoint, e),
            }
            result
        })
    }
}

async fn send_to(
    socket: Weak<UdpSocket>,
    payload: Result<Vec<u8>, OscClientError>,
    endpoint: &Endpoint,
) -> Result<usize, OscClientError> {
    let payload = payload?;
    let socket = socket.upgrade().ok_or(OscClientError::ClientDropped)?;
    socket
        .send_to(&payload, (endpoint.host(), endpoint.port()))
        .await
        .map_err(|e| OscClientError::Send(e.to_string()))
}
