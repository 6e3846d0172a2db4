use rosc::{encoder, OscMessage, OscPacket, OscType};

use common::Sample3D;

use crate::errors::OscClientError;

/// Address pattern of every outbound message
pub const GYRO_ADDRESS: &str = "/gyro";

/// Builds the `/gyro` message for a sample: `[x, y, z]` as 32 bit floats.
pub fn gyro_message(sample: &Sample3D) -> OscMessage {
    let args = sample
        .get_measurement()
        .inner()
        .iter()
        .map(|v| OscType::Float(*v as f32))
        .collect();
    OscMessage {
        addr: GYRO_ADDRESS.to_string(),
        args,
    }
}

/// Encodes a sample into an OSC datagram.
pub fn encode_sample(sample: &Sample3D) -> Result<Vec<u8>, OscClientError> {
    let packet = OscPacket::Message(gyro_message(sample));
    encoder::encode(&packet).map_err(|e| OscClientError::Encode(format!("{:?}", e)))
}
