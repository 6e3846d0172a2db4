//! Module errors

use std::fmt;

/// Represents the different types of errors that can occur while reading the gyroscope.
#[derive(Debug, Clone, PartialEq)]
pub enum GyroError {
    /// Error indicating that there was an issue building the client.
    ClientBuild(String),

    /// Error indicating that there was an issue fetching data.
    FetchData(String),

    /// Error indicating that the received data format is incorrect.
    IncorrectDataFormat(String),

    /// The phone is not recording.
    NotMeasuring,

    /// A single read failed.
    ReadFailed(String),

    Other(String),
}

impl fmt::Display for GyroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GyroError::ClientBuild(msg) => write!(f, "Can't build client: {}", msg),
            GyroError::FetchData(msg) => write!(f, "Can't fetch data: {}", msg),
            GyroError::IncorrectDataFormat(msg) => write!(f, "Incorrect data format: {}", msg),
            GyroError::NotMeasuring => write!(f, "Sensor is not measuring"),
            GyroError::ReadFailed(msg) => write!(f, "Read failed: {}", msg),
            GyroError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for GyroError {}
