use crate::traits::SampleFilter;
use crate::types::buffers::CircularBuffer;
use crate::types::{Sample3D, XYZ};

/// Moving average over the last `window_size` rotation-rate readings.
///
/// Readings are stored in a circular buffer; when one is pushed the oldest is
/// popped and subtracted from the running aggregate. Until the window fills up
/// the average is taken over the readings seen so far.
///
/// ## Example
///
/// ```rust
/// use common::filters::MovingAverage;
/// use common::{Sample3D, SampleFilter};
///
/// let mut ma = MovingAverage::new(2);
/// ma.filter(Sample3D::new(0.0, [1.0, 1.0, 1.0]));
/// let smoothed = ma.filter(Sample3D::new(0.1, [3.0, 3.0, 3.0]));
/// assert_eq!(smoothed.get_measurement().inner(), [2.0, 2.0, 2.0]);
/// ```
#[derive(Clone, Debug)]
pub struct MovingAverage {
    window_size: usize,
    n_pushed: usize,
    buffer: CircularBuffer<XYZ>,
    aggregate: XYZ,
}

impl MovingAverage {
    /// Initializes new `MovingAverage` filter with `window_size` elements. A window of 0 is treated as 1.
    pub fn new(window_size: usize) -> Self {
        let window_size = window_size.max(1);
        Self {
            window_size,
            n_pushed: 0,
            buffer: CircularBuffer::new(window_size),
            aggregate: XYZ::default(),
        }
    }
}

impl SampleFilter for MovingAverage {
    fn filter(&mut self, sample: Sample3D) -> Sample3D {
        let measurement = sample.get_measurement();
        let out = self.buffer.push(measurement);
        self.aggregate -= out;
        self.aggregate += measurement;
        self.n_pushed = (self.n_pushed + 1).min(self.window_size);

        Sample3D::from_measurement(
            sample.get_timestamp(),
            self.aggregate / self.n_pushed as f64,
        )
    }
}
