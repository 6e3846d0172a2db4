use std::fmt;

#[derive(Debug)]
pub enum OscClientError {
    /// Local UDP socket can't be bound
    Bind(std::io::Error),

    /// Message can't be encoded
    Encode(String),

    /// Datagram couldn't be sent to the endpoint
    Send(String),

    /// Client was dropped before the send ran
    ClientDropped,
}

impl fmt::Display for OscClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OscClientError::Bind(e) => write!(f, "Can't bind UDP socket: {}", e),
            OscClientError::Encode(msg) => write!(f, "Can't encode OSC message: {}", msg),
            OscClientError::Send(msg) => write!(f, "Can't send OSC message: {}", msg),
            OscClientError::ClientDropped => write!(f, "OSC client dropped"),
        }
    }
}

impl std::error::Error for OscClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OscClientError::Bind(e) => Some(e),
            _ => None,
        }
    }
}
