pub mod endpoint;
pub mod live_config;
pub mod sampling_interval;

pub use crate::types::settings::endpoint::{Endpoint, EndpointError};
pub use crate::types::settings::live_config::LiveConfig;
pub use crate::types::settings::sampling_interval::SamplingInterval;
