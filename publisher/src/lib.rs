//! # Crate publisher
//!
//! ## publisher
//!
//! The `publisher` crate provides a mechanism for registering and notifying listeners
//! of new events of type `T`. In `gyro-osc` it fans every gyroscope sample out to the
//! display sink and to the OSC sender.
//!
//! ### Example
//!
//! ```ignore
//! let publisher = Publisher::<Sample3D>::new();
//!
//! // Register a listener
//! let mut listener = Listener::new(|_id, sample: Arc<Sample3D>| async move {
//!     println!("Listener received: {}", sample);
//! });
//! let listener_id = publisher.register_listener(&mut listener);
//!
//! // Notify all listeners
//! publisher.notify_listeners(Arc::new(sample)).await;
//!
//! // Unregister the listener
//! publisher.unregister_listener(listener_id).expect("Failed to unregister listener");
//! assert!(publisher.is_empty());
//! ```

pub mod listener;
pub mod macros;
pub mod publisher;

pub use listener::Listener;
pub use publisher::{Publishable, Publisher, PublisherError};
