//! # Crate gyro_source
//!
//! ## gyro_source
//!
//! The `gyro_source` crate polls a phone gyroscope at a configurable interval and hands
//! every rotation-rate sample to the registered listeners.
//!
//! Two sources are available:
//! - [`Phyphox`](https://phyphox.org/), a mobile phone app that exposes the phone sensors
//!   through a REST API. The gyroscope is read with one request per tick.
//! - A mock source producing synthetic rotation, used for tests and offline runs.
//!
//! Features include:
//! - Polling period taken from the shared `LiveConfig` each time a wait is scheduled, so
//!   the interval can be changed while the service runs.
//! - Optional moving average smoothing of the rotation rate.
//! - Failed reads are logged and the tick is dropped. An unavailable gyroscope leaves the
//!   service idle.

pub(crate) mod adapters;
pub(crate) mod constants;
mod helpers;
pub(crate) mod models;
pub mod ports;
pub mod services;

pub use adapters::mock::{GyroMock, MockReading};
pub use constants::DEFAULT_PHYPHOX_URL;
pub use adapters::production::Phyphox;
pub use models::errors::GyroError;
pub use ports::GyroPort;
pub use services::{run_mock_service, run_service, GyroService};
