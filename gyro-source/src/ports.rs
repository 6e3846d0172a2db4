use async_trait::async_trait;

use common::Sample3D;

use crate::models::errors::GyroError;

/// A gyroscope that can be polled for its current rotation rate.
#[async_trait]
pub trait GyroPort: Send + Sync {
    fn get_tag(&self) -> &str;

    /// Returns true if the device has a gyroscope that can be read.
    async fn is_available(&self) -> bool;

    /// Called once before the first read.
    async fn prepare(&self) -> Result<(), GyroError> {
        Ok(())
    }

    /// Returns the current rotation rate.
    async fn read(&self) -> Result<Sample3D, GyroError>;

    /// Called once after the last read.
    async fn release(&self) -> Result<(), GyroError> {
        Ok(())
    }
}
