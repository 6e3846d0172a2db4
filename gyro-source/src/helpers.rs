use serde_json::Value;

use common::XYZ;

use crate::models::errors::GyroError;

const STATUS: &str = "status";
const MEASURING: &str = "measuring";
const BUFFER: &str = "buffer";
const EXPORT: &str = "export";
const SET: &str = "set";
const SOURCES: &str = "sources";
const GYRO_SET_PREFIX: &str = "gyr";

pub(crate) fn get_status_from_json(data: &Value) -> Result<bool, GyroError> {
    let status = data[STATUS][MEASURING]
        .as_bool()
        .ok_or(GyroError::IncorrectDataFormat(
            "Missing status.measuring".to_string(),
        ))?;
    Ok(status)
}

/// Returns the last value of each requested buffer, as a rotation rate.
/// Every buffer must be present and hold at least one number.
pub(crate) fn parse_latest(data: &Value, variables: &[&str]) -> Result<XYZ, GyroError> {
    let buffers = data.get(BUFFER).ok_or(GyroError::IncorrectDataFormat(
        "Missing buffer".to_string(),
    ))?;
    let mut latest: Vec<f64> = Vec::with_capacity(variables.len());
    for var in variables {
        let value = buffers
            .get(var)
            .and_then(|v| v.get(BUFFER))
            .and_then(|b| b.as_array())
            .ok_or(GyroError::IncorrectDataFormat(format!(
                "Missing buffer for {}",
                var
            )))?
            .iter()
            .rev()
            .find_map(|v| v.as_f64())
            .ok_or(GyroError::IncorrectDataFormat(format!(
                "Empty buffer for {}",
                var
            )))?;
        latest.push(value);
    }
    XYZ::try_from(latest).map_err(|e| GyroError::IncorrectDataFormat(e.to_string()))
}

/// Checks the `/config?` answer for an export set that carries the gyroscope buffers.
pub(crate) fn has_gyroscope(config: &Value, variables: &[&str]) -> bool {
    let Some(exports) = config.get(EXPORT).and_then(|e| e.as_array()) else {
        return false;
    };
    exports.iter().any(|entry| {
        let by_name = entry
            .get(SET)
            .and_then(|s| s.as_str())
            .map(|s| s.to_lowercase().starts_with(GYRO_SET_PREFIX))
            .unwrap_or(false);
        let by_buffer = entry
            .get(SOURCES)
            .and_then(|s| s.as_array())
            .map(|sources| {
                sources.iter().any(|source| {
                    source
                        .get(BUFFER)
                        .and_then(|b| b.as_str())
                        .map(|b| variables.contains(&b))
                        .unwrap_or(false)
                })
            })
            .unwrap_or(false);
        by_name || by_buffer
    })
}

pub(crate) fn build_query(variables: &[&str]) -> String {
    variables.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const VARS: [&str; 3] = ["gyroX", "gyroY", "gyroZ"];

    #[test]
    fn test_build_query() {
        assert_eq!(build_query(&VARS), "gyroX&gyroY&gyroZ");
    }

    #[test]
    fn test_status() {
        let data = json!({"status": {"measuring": true}});
        assert_eq!(get_status_from_json(&data), Ok(true));
        assert!(get_status_from_json(&json!({})).is_err());
    }

    #[test]
    fn test_parse_latest_takes_last_value() {
        let data = json!({
            "buffer": {
                "gyroX": {"buffer": [0.1, 0.2]},
                "gyroY": {"buffer": [0.3, 0.4]},
                "gyroZ": {"buffer": [0.5, 0.6]}
            }
        });
        let xyz = parse_latest(&data, &VARS).unwrap();
        assert_eq!(xyz.inner(), [0.2, 0.4, 0.6]);
    }

    #[test]
    fn test_parse_latest_skips_nulls() {
        let data = json!({
            "buffer": {
                "gyroX": {"buffer": [0.1, null]},
                "gyroY": {"buffer": [0.3]},
                "gyroZ": {"buffer": [0.5]}
            }
        });
        let xyz = parse_latest(&data, &VARS).unwrap();
        assert_eq!(xyz.inner(), [0.1, 0.3, 0.5]);
    }

    #[test]
    fn test_parse_latest_rejects_incomplete() {
        let missing = json!({
            "buffer": {
                "gyroX": {"buffer": [0.1]},
                "gyroY": {"buffer": [0.3]}
            }
        });
        assert!(parse_latest(&missing, &VARS).is_err());

        let empty = json!({
            "buffer": {
                "gyroX": {"buffer": [0.1]},
                "gyroY": {"buffer": []},
                "gyroZ": {"buffer": [0.5]}
            }
        });
        assert!(parse_latest(&empty, &VARS).is_err());
        assert!(parse_latest(&json!({}), &VARS).is_err());
    }

    #[test]
    fn test_has_gyroscope() {
        let by_name = json!({"export": [{"set": "Accelerometer"}, {"set": "Gyroscope"}]});
        assert!(has_gyroscope(&by_name, &VARS));

        let by_buffer = json!({"export": [{"set": "Raw data", "sources": [{"label": "x", "buffer": "gyroX"}]}]});
        assert!(has_gyroscope(&by_buffer, &VARS));

        let none = json!({"export": [{"set": "Accelerometer", "sources": [{"buffer": "accX"}]}]});
        assert!(!has_gyroscope(&none, &VARS));
        assert!(!has_gyroscope(&json!({}), &VARS));
    }
}
