use crate::api::Error;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

lazy_static! {
    /* "name": "<json string literal>", the literal is captured with its quotes */
    static ref NAME_PATTERN: Regex = Regex::new(r#""name"\s*:\s*("(?:[^"\\]|\\.)*")"#).unwrap();
}

#[derive(Deserialize)]
pub struct Data {
    pub name: String,
}

#[derive(Deserialize)]
pub struct NearbyAddress {
    pub data: Data,
}

impl NearbyAddress {
    /// Extract the street address from a nearby address response.
    ///
    /// JSON bodies must carry `data.name`. Bodies which are not JSON at all are searched for
    /// a `"name": "..."` fragment instead, and the fragment is decoded as a JSON string.
    pub fn extract(body: &str) -> Result<String, Error> {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => serde_json::from_value::<NearbyAddress>(value)
                .map(|response| response.data.name)
                .map_err(|e| {
                    Error::ExtractionError(format!("No data.name in address response: {}", e))
                }),
            Err(_) => Self::extract_by_pattern(body),
        }
    }

    fn extract_by_pattern(body: &str) -> Result<String, Error> {
        let literal = NAME_PATTERN
            .captures(body)
            .and_then(|captures| captures.get(1))
            .ok_or_else(|| {
                log::trace!("address response without name: {}", body);
                Error::ExtractionError(format!(
                    "No name found in address response of {} bytes",
                    body.len()
                ))
            })?;

        serde_json::from_str::<String>(literal.as_str()).map_err(|e| {
            Error::ExtractionError(format!("Malformed name {}: {}", literal.as_str(), e))
        })
    }
}
