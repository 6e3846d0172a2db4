use reqwest::Client as ReqwestClient;
use serde_json::Value;
use std::time::Duration;

use crate::models::errors::GyroError;

const CLIENT_TIMEOUT_DEFAULT: u64 = 5;

pub(crate) struct HttpClient {
    client: ReqwestClient,
    base_url: String,
}

impl HttpClient {
    pub(crate) fn new(base_url: String) -> Result<Self, GyroError> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(CLIENT_TIMEOUT_DEFAULT))
            .build()
            .map_err(|e| GyroError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) async fn fetch_json(&self, path: &str) -> Result<Value, GyroError> {
        // Example of data returned by Phyphox for /get?gyroX&gyroY&gyroZ
        // {"buffer":{"gyroX":{"buffer":[0.0123],"size":0,"updateMode":"single"},
        //            "gyroY":{"buffer":[-0.0412],"size":0,"updateMode":"single"},
        //            "gyroZ":{"buffer":[0.0031],"size":0,"updateMode":"single"}},
        // "status":{"countDown":0,"measuring":true,"session":"11114880","timedRun":false}}
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| GyroError::FetchData(e.to_string()))?;

        let json: Value = response
            .json()
            .await
            .map_err(|e| GyroError::FetchData(e.to_string()))?;
        Ok(json)
    }
}
