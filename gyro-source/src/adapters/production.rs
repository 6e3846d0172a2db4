// Gyroscope acquisition from the phyphox phone app via its HTTP API.

use async_trait::async_trait;
use serde_json::Value;

use common::Sample3D;

use crate::constants::GYRO_VARIABLES;
use crate::helpers;
use crate::models::errors::GyroError;
use crate::models::http_client::HttpClient;
use crate::ports::GyroPort;

/// Constants for HTTP endpoints
const GET_CMD: &str = "/get?";
const CONTROL_CMD: &str = "/control?cmd=";
const START_CMD: &str = "start";
const STOP_CMD: &str = "stop";
const CLEAR_CMD: &str = "clear";
const CONFIG_CMD: &str = "/config?";

/// Reads the gyroscope of a phone running phyphox
pub struct Phyphox {
    client: HttpClient,
    tag: String,
}

impl Phyphox {
    /// Creates a new `Phyphox` instance pointing at `base_url`.
    /// Returns a ClientBuild error if Http client to connect to Phyphox API cannot be created
    pub fn new(base_url: &str, tag: &str) -> Result<Self, GyroError> {
        let client = HttpClient::new(base_url.to_string())?;

        Ok(Self {
            client,
            tag: tag.to_string(),
        })
    }

    /// Returns JSON data from the specified path or FetchData error if it couldnt retrieve data from REST API
    async fn fetch_json(&self, path: &str) -> Result<Value, GyroError> {
        self.client.fetch_json(path).await
    }

    /// Sends a control command to the Phyphox server. Returns FetchData error if it can't connect with
    /// the REST API
    async fn control(&self, command: &str) -> Result<(), GyroError> {
        self.fetch_json(&format!("{CONTROL_CMD}{}", command)).await?;
        Ok(())
    }

    // Clears previous measurements from the phone
    async fn clear_cmd(&self) -> Result<(), GyroError> {
        log::info!("Clearing data...");
        self.control(CLEAR_CMD).await
    }

    // Starts measurement capture on the phone
    async fn start_cmd(&self) -> Result<(), GyroError> {
        log::info!("Starting recording...");
        self.control(START_CMD).await
    }

    // Stops measurement capture on the phone
    async fn stop_cmd(&self) -> Result<(), GyroError> {
        log::info!("Stopping recording...");
        self.control(STOP_CMD).await
    }
}

#[async_trait]
impl GyroPort for Phyphox {
    fn get_tag(&self) -> &str {
        self.tag.as_str()
    }

    async fn is_available(&self) -> bool {
        match self.fetch_json(CONFIG_CMD).await {
            Ok(config) => helpers::has_gyroscope(&config, &GYRO_VARIABLES),
            Err(e) => {
                log::warn!("Can't retrieve phyphox configuration: {}", e);
                false
            }
        }
    }

    async fn prepare(&self) -> Result<(), GyroError> {
        self.clear_cmd().await?;
        self.start_cmd().await
    }

    /// # Errors
    /// - FetchData if there is an error connecting to REST API
    /// - NotMeasuring if the experiment is paused on the phone
    /// - IncorrectDataFormat if the data retrieved from the API has an unexpected format
    async fn read(&self) -> Result<Sample3D, GyroError> {
        let query = helpers::build_query(&GYRO_VARIABLES);
        let data = self.fetch_json(&format!("{GET_CMD}{}", query)).await?;
        if !helpers::get_status_from_json(&data)? {
            return Err(GyroError::NotMeasuring);
        }
        let rotation_rate = helpers::parse_latest(&data, &GYRO_VARIABLES)?;
        Ok(Sample3D::now(rotation_rate))
    }

    async fn release(&self) -> Result<(), GyroError> {
        self.stop_cmd().await
    }
}
