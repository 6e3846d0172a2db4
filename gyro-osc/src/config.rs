// Startup configuration: defaults, then the optional TOML file, then command line flags.

use clap::Parser;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use common::{Endpoint, SamplingInterval};
use gyro_source::DEFAULT_PHYPHOX_URL;

#[derive(Parser, Debug, Default)]
#[command(
    name = "gyro-osc",
    about = "Forward phone gyroscope readings as OSC /gyro messages over UDP"
)]
pub struct Args {
    /// OSC receiver host
    #[arg(long)]
    pub host: Option<String>,

    /// OSC receiver port
    #[arg(long)]
    pub port: Option<u16>,

    /// Sampling interval in seconds, 0.1 to 1.5
    #[arg(long)]
    pub interval: Option<f64>,

    /// Address of the phyphox REST API on the phone
    #[arg(long)]
    pub phyphox_url: Option<String>,

    /// Use a synthetic gyroscope instead of phyphox
    #[arg(long)]
    pub mock: bool,

    /// Smooth the rotation rate over this many samples
    #[arg(long)]
    pub smoothing: Option<usize>,

    /// TOML configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub osc: OscConfig,
    pub sensor: SensorConfig,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OscConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SensorConfig {
    pub interval_secs: Option<f64>,
    pub phyphox_url: Option<String>,
    pub mock: Option<bool>,
    pub smoothing_window: Option<usize>,
}

#[derive(Debug)]
pub enum ConfigError {
    Read(String),
    Parse(String),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read(msg) => write!(f, "Can't read config: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Can't parse config: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl FileConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }
}

/// Where gyroscope samples come from
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Phyphox(String),
    Mock,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub endpoint: Endpoint,
    pub interval: SamplingInterval,
    pub source: Source,
    pub smoothing_window: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: Endpoint::default(),
            interval: SamplingInterval::default(),
            source: Source::Phyphox(DEFAULT_PHYPHOX_URL.to_string()),
            smoothing_window: None,
        }
    }
}

impl AppConfig {
    /// Reads the file named by `--config`, if any, and merges it with the flags.
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let file = match args.config.as_deref() {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::resolve(args, file)
    }

    /// Flags win over the file, the file wins over the defaults.
    pub fn resolve(args: &Args, file: FileConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = args
            .host
            .clone()
            .or(file.osc.host)
            .unwrap_or_else(|| defaults.endpoint.host().to_string());
        let port = args
            .port
            .or(file.osc.port)
            .unwrap_or(defaults.endpoint.port());
        let endpoint = Endpoint::parse(&host, &port.to_string())
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        let interval = match args.interval.or(file.sensor.interval_secs) {
            Some(secs) => SamplingInterval::try_from(secs).map_err(ConfigError::Invalid)?,
            None => defaults.interval,
        };

        let mock = args.mock || file.sensor.mock.unwrap_or(false);
        let source = if mock {
            Source::Mock
        } else {
            args.phyphox_url
                .clone()
                .or(file.sensor.phyphox_url)
                .map(Source::Phyphox)
                .unwrap_or(defaults.source)
        };

        Ok(Self {
            endpoint,
            interval,
            source,
            smoothing_window: args.smoothing.or(file.sensor.smoothing_window),
        })
    }
}
