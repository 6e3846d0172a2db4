use log::{error, info};
use std::fmt;
use std::sync::Arc;
use tokio::io::{stdin, stdout, AsyncWriteExt, BufReader};

use common::{LiveConfig, Sample3D};
use gyro_source::{GyroError, GyroMock, GyroPort, GyroService, Phyphox};
use osc_client::{OscClient, OscClientError};
use publisher::Listener;

use crate::commands::{self, LoopEnd};
use crate::config::{AppConfig, ConfigError, Source};
use crate::display::DisplaySink;
use crate::settings::SettingsSurface;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Sensor(GyroError),
    Osc(OscClientError),
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "{}", e),
            AppError::Sensor(e) => write!(f, "{}", e),
            AppError::Osc(e) => write!(f, "{}", e),
            AppError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<GyroError> for AppError {
    fn from(value: GyroError) -> Self {
        AppError::Sensor(value)
    }
}

impl From<OscClientError> for AppError {
    fn from(value: OscClientError) -> Self {
        AppError::Osc(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

/// Listener that sends every sample to the OSC client without waiting for the result.
pub fn forwarding_listener(client: &Arc<OscClient>) -> Listener<Sample3D> {
    let client = Arc::downgrade(client);
    Listener::new(move |_id, sample: Arc<Sample3D>| {
        let client = client.clone();
        async move {
            if let Some(client) = client.upgrade() {
                // outcome is logged by the send task
                drop(client.send(&sample));
            }
        }
    })
}

/// Runs the forwarder until `quit` or Ctrl+C.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let live_config = Arc::new(LiveConfig::new(config.endpoint.clone(), config.interval));
    let client = Arc::new(OscClient::bind(live_config.clone()).await?);

    match &config.source {
        Source::Mock => {
            info!("Using mock gyroscope");
            let gyro = GyroMock::new("mock", true, true)?;
            forward(gyro, live_config, client, config.smoothing_window).await
        }
        Source::Phyphox(url) => {
            info!("Reading gyroscope from phyphox at {}", url);
            let gyro = Phyphox::new(url, "phyphox")?;
            forward(gyro, live_config, client, config.smoothing_window).await
        }
    }
}

async fn forward<C>(
    gyro: C,
    live_config: Arc<LiveConfig>,
    client: Arc<OscClient>,
    smoothing_window: Option<usize>,
) -> Result<(), AppError>
where
    C: GyroPort + 'static,
{
    let service = Arc::new(GyroService::new(gyro, live_config, smoothing_window));
    let display = Arc::new(DisplaySink::new());
    service.register_listener(&mut display.listener());
    service.register_listener(&mut forwarding_listener(&client));

    let poller = tokio::spawn({
        let service = service.clone();
        async move {
            if let Err(e) = service.start(None).await {
                error!("Error in gyroscope loop: {}", e);
            }
        }
    });

    let mut surface = SettingsSurface::new(client, service.clone(), display);
    let mut out = stdout();
    out.write_all(format!("{}\n", commands::HELP).as_bytes()).await?;
    out.flush().await?;

    tokio::select! {
        end = commands::command_loop(&mut surface, BufReader::new(stdin()), out) => {
            if end? == LoopEnd::Eof {
                info!("Input closed, forwarding until Ctrl+C");
                tokio::signal::ctrl_c().await?;
            }
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Ctrl+C received");
        }
    }

    service.stop();
    if let Err(e) = poller.await {
        error!("Gyroscope task failed: {}", e);
    }
    Ok(())
}
