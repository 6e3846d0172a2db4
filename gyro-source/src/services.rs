use log::{debug, error, info, warn};
use std::sync::Arc;
use tokio::sync::{Mutex, Notify};
use uuid::Uuid;

use common::filters::MovingAverage;
use common::{LiveConfig, Notifiable, Sample3D, SampleFilter, SamplingInterval};
use publisher::{Publishable, Publisher, PublisherError};

use crate::adapters::{mock::GyroMock, production::Phyphox};
use crate::models::errors::GyroError;
use crate::models::shutdown;
use crate::ports::GyroPort;

/// Polls a gyroscope and publishes every sample it reads
pub struct GyroService<C>
where
    C: GyroPort,
{
    client: C,
    config: Arc<LiveConfig>,
    publisher: Publisher<Sample3D>,
    smoothing: Option<Mutex<MovingAverage>>,
    abort_signal: Arc<Notify>,
}

impl<C> GyroService<C>
where
    C: GyroPort,
{
    /// Creates a new service reading from `client`. The polling interval is read from `config`.
    /// `window_size` enables moving average smoothing over that many samples.
    pub fn new(client: C, config: Arc<LiveConfig>, window_size: Option<usize>) -> Self {
        GyroService {
            client,
            config,
            publisher: Publisher::new(),
            smoothing: window_size.map(|w_size| Mutex::new(MovingAverage::new(w_size))),
            abort_signal: Arc::new(Notify::new()),
        }
    }

    /// Starts polling. The process is stopped with a SIGINT signal, after `run_for_millis`
    /// if given, or by calling `stop`.
    ///
    /// An unavailable gyroscope is not an error: nothing is polled and `Ok` is returned.
    /// Returns the error from `prepare` if the sensor can't be started.
    pub async fn start(&self, run_for_millis: Option<u64>) -> Result<(), GyroError> {
        if !self.client.is_available().await {
            warn!("Gyroscope {} is not available", self.client.get_tag());
            return Ok(());
        }

        self.client.prepare().await?;
        let shutdown_handle =
            shutdown::listen_for_shutdown(self.abort_signal.clone(), run_for_millis);

        info!(
            "Polling gyroscope {} every {}",
            self.client.get_tag(),
            self.config.interval()
        );
        loop {
            // interval changes apply from the next wait on
            let period = self.config.interval().as_duration();
            tokio::select! {
                _ = self.abort_signal.notified() => {
                    break;
                }
                _ = tokio::time::sleep(period) => {
                    self.tick().await;
                }
            }
        }

        shutdown_handle.abort();
        info!("Gyroscope {} stopped", self.client.get_tag());
        self.client.release().await
    }

    /// Stops a running service after its current tick.
    pub fn stop(&self) {
        self.abort_signal.notify_one();
    }

    async fn tick(&self) {
        let sample = match self.client.read().await {
            Ok(sample) => sample,
            Err(e) => {
                warn!("Dropping gyroscope tick: {}", e);
                return;
            }
        };

        let sample = match self.smoothing.as_ref() {
            Some(filter) => filter.lock().await.filter(sample),
            None => sample,
        };
        debug!("Gyroscope sample {}", sample);
        self.publisher.notify_listeners(Arc::new(sample)).await;
    }

    /// Changes the polling period. A wait already in progress keeps its period.
    pub fn set_interval(&self, interval: SamplingInterval) {
        self.config.set_interval(interval);
    }

    pub fn get_interval(&self) -> SamplingInterval {
        self.config.interval()
    }

    pub fn get_tag(&self) -> &str {
        self.client.get_tag()
    }

    pub fn get_client(&self) -> &C {
        &self.client
    }

    pub fn register_listener(&self, listener: &mut dyn Notifiable<Sample3D>) -> Uuid {
        self.publisher.register_listener(listener)
    }

    pub fn unregister_listener(&self, id: Uuid) -> Result<(), PublisherError> {
        self.publisher.unregister_listener(id)
    }
}

/// Starts the phyphox service asynchronously.
///
/// The service runs in a background task until Ctrl-C.
///
/// An error ClientBuild is returned if http client connecting with phyphox app REST API cannot be created.
///
/// # Returns
///
/// Returns a tuple containing:
/// * A `tokio::task::JoinHandle<()>` representing the spawned asynchronous task.
/// * An `Arc<GyroService<Phyphox>>` instance, allowing further interaction with the sensor.
pub fn run_service(
    base_url: &str,
    config: Arc<LiveConfig>,
    window_size: Option<usize>,
) -> Result<(tokio::task::JoinHandle<()>, Arc<GyroService<Phyphox>>), GyroError> {
    let phyphox = Phyphox::new(base_url, "phyphox")?;
    let service = Arc::new(GyroService::new(phyphox, config, window_size));
    let handle = spawn_service(service.clone(), None);
    Ok((handle, service))
}

/// Starts a mock gyroscope service asynchronously. Runs for `run_for_millis`, or until Ctrl-C.
pub fn run_mock_service(
    tag: &str,
    config: Arc<LiveConfig>,
    add_sensor_noise: bool,
    run_for_millis: Option<u64>,
) -> Result<(tokio::task::JoinHandle<()>, Arc<GyroService<GyroMock>>), GyroError> {
    let gyro_mock = GyroMock::new(tag, true, add_sensor_noise)?;
    let service = Arc::new(GyroService::new(gyro_mock, config, None));
    let handle = spawn_service(service.clone(), run_for_millis);
    Ok((handle, service))
}

fn spawn_service<C>(
    service: Arc<GyroService<C>>,
    run_for_millis: Option<u64>,
) -> tokio::task::JoinHandle<()>
where
    C: GyroPort + 'static,
{
    tokio::spawn(async move {
        if let Err(e) = service.start(run_for_millis).await {
            error!("Error in gyroscope loop: {}", e);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockReading;
    use publisher::Listener;
    use std::time::Duration;

    fn collecting_listener(received: Arc<Mutex<Vec<Sample3D>>>) -> Listener<Sample3D> {
        Listener::new(move |_id, sample: Arc<Sample3D>| {
            let received = received.clone();
            async move {
                received.lock().await.push(*sample);
            }
        })
    }

    #[tokio::test]
    async fn test_phyphox_service_new() {
        let client =
            Phyphox::new("http://localhost", "Test").expect("Error creating Phyphox instance");
        let service = GyroService::new(client, Arc::new(LiveConfig::default()), None);
        assert_eq!(service.get_tag(), "Test");
        assert_eq!(service.get_interval(), SamplingInterval::default());
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_service_publishes_samples() {
        let config = Arc::new(LiveConfig::default());
        let client = GyroMock::new("Test", true, false).unwrap();
        let service = GyroService::new(client, config, None);
        let received = Arc::new(Mutex::new(Vec::new()));
        service.register_listener(&mut collecting_listener(received.clone()));

        service.start(Some(2_250)).await.unwrap();

        // 0.5s interval over 2.25s
        assert_eq!(received.lock().await.len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unavailable_sensor_never_polls() {
        let client = GyroMock::new("Test", false, false).unwrap();
        let service = GyroService::new(client, Arc::new(LiveConfig::default()), None);
        let received = Arc::new(Mutex::new(Vec::new()));
        service.register_listener(&mut collecting_listener(received.clone()));

        assert!(service.start(Some(2_000)).await.is_ok());

        assert!(received.lock().await.is_empty());
        assert!(service.get_client().read_instants().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_tick_is_dropped() {
        let client = GyroMock::new("Test", true, false)
            .unwrap()
            .with_script(vec![
                MockReading::Sample([1.0, 1.0, 1.0]),
                MockReading::Failure("glitch".to_string()),
                MockReading::Sample([3.0, 3.0, 3.0]),
            ]);
        let service = GyroService::new(client, Arc::new(LiveConfig::default()), None);
        let received = Arc::new(Mutex::new(Vec::new()));
        service.register_listener(&mut collecting_listener(received.clone()));

        service.start(Some(1_600)).await.unwrap();

        let received = received.lock().await;
        assert_eq!(service.get_client().read_instants().await.len(), 3);
        assert_eq!(received.len(), 2);
        assert_eq!(received[0].get_measurement().inner(), [1.0, 1.0, 1.0]);
        assert_eq!(received[1].get_measurement().inner(), [3.0, 3.0, 3.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unregistered_listener_is_not_notified() {
        let client = GyroMock::new("Test", true, false).unwrap();
        let service = GyroService::new(client, Arc::new(LiveConfig::default()), None);
        let kept = Arc::new(Mutex::new(Vec::new()));
        let removed = Arc::new(Mutex::new(Vec::new()));
        service.register_listener(&mut collecting_listener(kept.clone()));
        let id = service.register_listener(&mut collecting_listener(removed.clone()));

        assert_eq!(service.unregister_listener(id), Ok(()));
        assert!(service.unregister_listener(id).is_err());

        service.start(Some(1_100)).await.unwrap();

        assert_eq!(kept.lock().await.len(), 2);
        assert!(removed.lock().await.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_smoothing() {
        let client = GyroMock::new("Test", true, false)
            .unwrap()
            .with_script(vec![
                MockReading::Sample([1.0, 1.0, 1.0]),
                MockReading::Sample([3.0, 3.0, 3.0]),
            ]);
        let service = GyroService::new(client, Arc::new(LiveConfig::default()), Some(2));
        let received = Arc::new(Mutex::new(Vec::new()));
        service.register_listener(&mut collecting_listener(received.clone()));

        service.start(Some(1_100)).await.unwrap();

        let received = received.lock().await;
        assert_eq!(received.len(), 2);
        assert_eq!(received[1].get_measurement().inner(), [2.0, 2.0, 2.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop() {
        let client = GyroMock::new("Test", true, false).unwrap();
        let service = Arc::new(GyroService::new(client, Arc::new(LiveConfig::default()), None));

        let handle = spawn_service(service.clone(), Some(60_000));
        tokio::time::sleep(Duration::from_millis(1_200)).await;
        service.stop();
        handle.await.unwrap();

        assert_eq!(service.get_client().read_instants().await.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_mock_service() {
        let (handle, service) =
            run_mock_service("Test", Arc::new(LiveConfig::default()), true, Some(1_100)).unwrap();

        handle.await.unwrap();
        assert_eq!(service.get_client().read_instants().await.len(), 2);
    }
}
