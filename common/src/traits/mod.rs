pub mod filter;
pub mod publisher;

pub use crate::traits::filter::SampleFilter;
pub use crate::traits::publisher::Notifiable;
