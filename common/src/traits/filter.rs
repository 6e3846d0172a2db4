use crate::types::Sample3D;

/// Filtering for rotation-rate samples.
pub trait SampleFilter: Send + Sync {
    /// Returns the filtered sample. Timestamp is preserved.
    fn filter(&mut self, sample: Sample3D) -> Sample3D;
}
