//! # Crate osc_client
//!
//! Encodes gyroscope samples as OSC 1.0 messages and sends them over UDP.
//!
//! Every sample becomes one `/gyro` message with three `float32` arguments in x, y, z order.
//! Sends are fire and forget: each one runs in its own task, there is no ordering between
//! them, no retry and no timeout. Failures are logged.

pub mod client;
pub mod encoder;
pub mod errors;

pub use client::OscClient;
pub use encoder::{encode_sample, gyro_message, GYRO_ADDRESS};
pub use errors::OscClientError;
