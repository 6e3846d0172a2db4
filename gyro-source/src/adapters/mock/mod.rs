// Emulates a phone gyroscope

mod gaussian;

use async_trait::async_trait;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::VecDeque;
use tokio::sync::Mutex;
use tokio::time::Instant;

use common::{Sample3D, XYZ};

use self::gaussian::GaussianNoise;
use crate::models::errors::GyroError;
use crate::ports::GyroPort;

const GAUSSIAN_SENSOR_MEAN: f64 = 0f64;
const GAUSSIAN_SENSOR_STDEV: f64 = 0.02;
/// Peak synthetic rotation rate, rad/s
const MOTION_AMPLITUDE: f64 = 1.5;
/// Phase advance per read
const MOTION_STEP: f64 = 0.3;

/// Scripted outcome of one read
#[derive(Clone, Debug, PartialEq)]
pub enum MockReading {
    Sample([f64; 3]),
    Failure(String),
}

/// Mock gyroscope. Serves scripted readings first and synthetic rotation afterwards.
pub struct GyroMock {
    tag: String,
    available: bool,
    script: Mutex<VecDeque<MockReading>>,
    reads: Mutex<Vec<Instant>>,
    n_reads: Mutex<u64>,
    sensor_noise: Option<GaussianNoise>,
    rng: Mutex<StdRng>,
}

impl GyroMock {
    pub fn new(tag: &str, available: bool, add_sensor_noise: bool) -> Result<Self, GyroError> {
        let sensor_noise = if add_sensor_noise {
            Some(GaussianNoise::new(GAUSSIAN_SENSOR_MEAN, GAUSSIAN_SENSOR_STDEV)?)
        } else {
            None
        };
        Ok(Self {
            tag: tag.to_string(),
            available,
            script: Mutex::new(VecDeque::new()),
            reads: Mutex::new(Vec::new()),
            n_reads: Mutex::new(0),
            sensor_noise,
            rng: Mutex::new(StdRng::from_entropy()),
        })
    }

    /// Queues readings to be returned, in order, by the next reads.
    pub fn with_script(self, readings: Vec<MockReading>) -> Self {
        Self {
            script: Mutex::new(readings.into()),
            ..self
        }
    }

    /// Instant of every read so far
    pub async fn read_instants(&self) -> Vec<Instant> {
        self.reads.lock().await.clone()
    }

    async fn synthetic_motion(&self, n_read: u64) -> [f64; 3] {
        let phase = n_read as f64 * MOTION_STEP;
        let rotation = [
            MOTION_AMPLITUDE * phase.sin(),
            MOTION_AMPLITUDE * phase.cos(),
            0.5 * MOTION_AMPLITUDE * (phase / 3.0).sin(),
        ];
        match self.sensor_noise.as_ref() {
            Some(noise) => {
                let mut rng = self.rng.lock().await;
                noise.add_noise(&mut rng, rotation)
            }
            None => rotation,
        }
    }
}

#[async_trait]
impl GyroPort for GyroMock {
    fn get_tag(&self) -> &str {
        self.tag.as_str()
    }

    async fn is_available(&self) -> bool {
        self.available
    }

    async fn read(&self) -> Result<Sample3D, GyroError> {
        self.reads.lock().await.push(Instant::now());
        let n_read = {
            let mut n_reads = self.n_reads.lock().await;
            *n_reads += 1;
            *n_reads
        };

        let scripted = self.script.lock().await.pop_front();
        let rotation = match scripted {
            Some(MockReading::Sample(rotation)) => rotation,
            Some(MockReading::Failure(reason)) => return Err(GyroError::ReadFailed(reason)),
            None => self.synthetic_motion(n_read).await,
        };
        Ok(Sample3D::now(XYZ::new(rotation)))
    }
}
