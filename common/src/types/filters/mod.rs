pub mod moving_average;

pub use crate::types::filters::moving_average::MovingAverage;
