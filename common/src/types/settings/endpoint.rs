use std::fmt;

use crate::constants::{DEFAULT_OSC_HOST, DEFAULT_OSC_PORT};

/// Destination of the outbound OSC datagrams.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Endpoint {
    host: String,
    port: u16,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EndpointError {
    /// Host text is empty
    EmptyHost,
    /// Port text is not an integer in 0..=65535
    InvalidPort(String),
}

impl fmt::Display for EndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointError::EmptyHost => write!(f, "Host can't be empty"),
            EndpointError::InvalidPort(port) => write!(f, "Invalid port {:?}", port),
        }
    }
}

impl std::error::Error for EndpointError {}

impl Endpoint {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.to_string(),
            port,
        }
    }

    /// Builds an endpoint from raw form text. The port must parse as an integer.
    ///
    /// ```
    /// use common::Endpoint;
    ///
    /// let endpoint = Endpoint::parse("10.0.0.5", "12345").unwrap();
    /// assert_eq!(endpoint.to_string(), "10.0.0.5:12345");
    /// assert!(Endpoint::parse("10.0.0.5", "abc").is_err());
    /// ```
    pub fn parse(host_text: &str, port_text: &str) -> Result<Self, EndpointError> {
        let host = host_text.trim();
        if host.is_empty() {
            return Err(EndpointError::EmptyHost);
        }
        let port = port_text
            .trim()
            .parse::<u16>()
            .map_err(|_| EndpointError::InvalidPort(port_text.to_string()))?;
        Ok(Self::new(host, port))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_OSC_HOST, DEFAULT_OSC_PORT)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let endpoint = Endpoint::default();
        assert_eq!(endpoint.host(), "192.168.10.176");
        assert_eq!(endpoint.port(), 12345);
    }

    #[test]
    fn test_parse() {
        let endpoint = Endpoint::parse("10.0.0.5", "12345").unwrap();
        assert_eq!(endpoint, Endpoint::new("10.0.0.5", 12345));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let endpoint = Endpoint::parse(" localhost ", " 9000\n").unwrap();
        assert_eq!(endpoint, Endpoint::new("localhost", 9000));
    }

    #[test]
    fn test_parse_rejects_bad_port() {
        assert_eq!(
            Endpoint::parse("10.0.0.5", "abc"),
            Err(EndpointError::InvalidPort("abc".to_string()))
        );
        assert!(Endpoint::parse("10.0.0.5", "").is_err());
        assert!(Endpoint::parse("10.0.0.5", "65536").is_err());
        assert!(Endpoint::parse("10.0.0.5", "-1").is_err());
        assert!(Endpoint::parse("10.0.0.5", "12.5").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_host() {
        assert_eq!(Endpoint::parse("  ", "9000"), Err(EndpointError::EmptyHost));
    }
}
