use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::models::errors::GyroError;

/// Functionality to add some Gaussian noise.
#[derive(Clone)]
pub(super) struct GaussianNoise {
    normal: Normal<f64>,
}

impl GaussianNoise {
    /// Creates new distribution from mean and stdev. The stdev must be a non negative number.
    pub(super) fn new(mean: f64, stdev: f64) -> Result<Self, GyroError> {
        if stdev.is_nan() || stdev < 0.0 {
            return Err(GyroError::Other(format!("Invalid noise stdev {}", stdev)));
        }
        let normal = Normal::new(mean, stdev).map_err(|e| GyroError::Other(e.to_string()))?;
        Ok(Self { normal })
    }

    /// Sample from distribution
    pub(super) fn draw_sample(&self, rng: &mut StdRng) -> f64 {
        self.normal.sample(rng)
    }

    // Adds noise to every axis
    pub(super) fn add_noise(&self, rng: &mut StdRng, data: [f64; 3]) -> [f64; 3] {
        data.map(|d| d + self.draw_sample(rng))
    }
}
