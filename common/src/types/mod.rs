pub mod buffers;
pub mod callback;
pub mod clock;
pub mod filters;
pub mod settings;
pub mod timed;
pub mod untimed;

pub use callback::Callback;
pub use clock::Clock;
pub use settings::{Endpoint, EndpointError, LiveConfig, SamplingInterval};
pub use timed::Sample3D;
pub use untimed::XYZ;
