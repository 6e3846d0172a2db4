//! # gyro-osc
//!
//! Reads the gyroscope of a phone and forwards every sample as an OSC `/gyro` message over UDP.
//! A small settings surface, driven from the terminal, changes the destination and the sampling
//! interval while the forwarder runs.

pub mod app;
pub mod commands;
pub mod config;
pub mod display;
pub mod settings;

pub use app::{forwarding_listener, run, AppError};
pub use config::{AppConfig, Args, ConfigError, Source};
pub use display::DisplaySink;
pub use settings::{SettingsError, SettingsForm, SettingsSurface};
