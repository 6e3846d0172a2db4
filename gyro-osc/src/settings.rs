use log::warn;
use std::fmt;
use std::sync::Arc;

use common::{Endpoint, EndpointError, SamplingInterval};
use gyro_source::{GyroPort, GyroService};
use osc_client::OscClient;

use crate::display::DisplaySink;

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// Host or port text can't be turned into an endpoint
    InvalidEndpoint(EndpointError),
    /// Interval is not a number
    InvalidInterval(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::InvalidEndpoint(e) => write!(f, "{}", e),
            SettingsError::InvalidInterval(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<EndpointError> for SettingsError {
    fn from(value: EndpointError) -> Self {
        SettingsError::InvalidEndpoint(value)
    }
}

/// Host and port text as typed by the user. Nothing here is live until applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsForm {
    pub host_text: String,
    pub port_text: String,
}

impl SettingsForm {
    pub fn from_endpoint(endpoint: &Endpoint) -> Self {
        Self {
            host_text: endpoint.host().to_string(),
            port_text: endpoint.port().to_string(),
        }
    }

    pub fn to_endpoint(&self) -> Result<Endpoint, EndpointError> {
        Endpoint::parse(&self.host_text, &self.port_text)
    }
}

/// Settings and display surface.
///
/// Host and port are edited in a form and only take effect on `apply_settings`.
/// The interval takes effect as soon as it is set.
pub struct SettingsSurface<C: GyroPort> {
    form: SettingsForm,
    client: Arc<OscClient>,
    service: Arc<GyroService<C>>,
    display: Arc<DisplaySink>,
}

impl<C: GyroPort> SettingsSurface<C> {
    pub fn new(
        client: Arc<OscClient>,
        service: Arc<GyroService<C>>,
        display: Arc<DisplaySink>,
    ) -> Self {
        Self {
            form: SettingsForm::from_endpoint(&client.endpoint()),
            client,
            service,
            display,
        }
    }

    pub fn form(&self) -> &SettingsForm {
        &self.form
    }

    pub fn set_host_text(&mut self, host_text: &str) {
        self.form.host_text = host_text.to_string();
    }

    pub fn set_port_text(&mut self, port_text: &str) {
        self.form.port_text = port_text.to_string();
    }

    /// Makes the form endpoint the live one. On invalid input the live endpoint is left
    /// untouched and the error is returned.
    /// An empty host is refused the same way as a malformed port.
    pub fn apply_settings(&self) -> Result<Endpoint, SettingsError> {
        match self.form.to_endpoint() {
            Ok(endpoint) => {
                self.client.configure(endpoint.clone());
                Ok(endpoint)
            }
            Err(e) => {
                warn!("Settings not applied: {}", e);
                Err(e.into())
            }
        }
    }

    /// Reconfigures the sensor polling period right away. Out of range values are clamped.
    pub fn set_interval(&self, secs: f64) -> Result<SamplingInterval, SettingsError> {
        let interval = SamplingInterval::try_from(secs).map_err(SettingsError::InvalidInterval)?;
        self.service.set_interval(interval);
        Ok(interval)
    }

    pub fn interval(&self) -> SamplingInterval {
        self.service.get_interval()
    }

    pub fn endpoint(&self) -> Endpoint {
        self.client.endpoint()
    }

    pub fn latest_sample_text(&self) -> String {
        self.display.text()
    }
}
