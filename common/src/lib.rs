//! General functionality for `gyro-osc` workspace
//!
//! Holds the data model shared by the sensor source, the OSC client and the
//! settings surface: rotation-rate samples, the OSC endpoint, the sampling
//! interval and the live configuration both sides read from.

pub mod constants;

#[doc(hidden)]
pub mod traits;
#[doc(hidden)]
pub mod types;

// Re-export traits
#[doc(inline)]
pub use traits::{Notifiable, SampleFilter};

// Re-export types
#[doc(inline)]
pub use types::{
    buffers, filters, Callback, Clock, Endpoint, EndpointError, LiveConfig, Sample3D,
    SamplingInterval, XYZ,
};
