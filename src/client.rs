use crate::config::ApiConfig;
use crate::types::{Astronaut, AstronautRoster, GroundLocation, PassPrediction, StationFix};

pub const ASTROS_ENDPOINT: &str = "/astros.json";
pub const POSITION_ENDPOINT: &str = "/iss-now.json";
pub const PASS_ENDPOINT: &str = "/iss-pass.json";

/// Blocking wrapper around `reqwest` preconfigured with the Open Notify
/// base URL. Every call is a fresh round trip; nothing is cached.
#[derive(Debug)]
pub struct OpenNotifyClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl OpenNotifyClient {
    pub fn new(config: &ApiConfig) -> Result<OpenNotifyClient, ClientError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|source| ClientError::Build { source })?;
        Ok(OpenNotifyClient {
            client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn astronauts(&self) -> Result<AstronautRoster, ClientError> {
        let response: AstrosResponse = self
            .get(ASTROS_ENDPOINT)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(|response| response.json())
            .map_err(|source| ClientError::Http {
                endpoint: ASTROS_ENDPOINT,
                source,
            })?;
        Ok(response.into_roster())
    }

    pub fn current_position(&self) -> Result<StationFix, ClientError> {
        let response: IssNowResponse = self
            .get(POSITION_ENDPOINT)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(|response| response.json())
            .map_err(|source| ClientError::Http {
                endpoint: POSITION_ENDPOINT,
                source,
            })?;
        response.into_fix()
    }

    pub fn next_pass(&self, observer: GroundLocation) -> Result<PassPrediction, ClientError> {
        let response: IssPassResponse = self
            .get(PASS_ENDPOINT)
            .query(&[
                ("lat", observer.latitude()),
                ("lon", observer.longitude()),
            ])
            .query(&[("n", 1)])
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(|response| response.json())
            .map_err(|source| ClientError::Http {
                endpoint: PASS_ENDPOINT,
                source,
            })?;
        response.into_prediction()
    }

    fn get(&self, endpoint: &str) -> reqwest::blocking::RequestBuilder {
        self.client.get(format!("{0}{1}", self.base_url, endpoint))
    }
}

#[derive(Debug, serde::Deserialize)]
struct AstrosResponse {
    number: u32,
    people: Vec<PersonRecord>,
}

#[derive(Debug, serde::Deserialize)]
struct PersonRecord {
    name: String,
    craft: String,
}

impl AstrosResponse {
    fn into_roster(self) -> AstronautRoster {
        AstronautRoster {
            number: self.number,
            people: self
                .people
                .into_iter()
                .map(|person| Astronaut {
                    name: person.name,
                    craft: person.craft,
                })
                .collect(),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct IssNowResponse {
    iss_position: WireCoordinates,
    timestamp: i64,
}

// The API serializes both coordinates as strings.
#[derive(Debug, serde::Deserialize)]
struct WireCoordinates {
    longitude: String,
    latitude: String,
}

impl IssNowResponse {
    fn into_fix(self) -> Result<StationFix, ClientError> {
        let longitude = parse_coordinate("longitude", &self.iss_position.longitude)?;
        let latitude = parse_coordinate("latitude", &self.iss_position.latitude)?;
        let timestamp = chrono::DateTime::from_timestamp(self.timestamp, 0)
            .ok_or(ClientError::InvalidTimestamp(self.timestamp))?;
        Ok(StationFix {
            longitude,
            latitude,
            timestamp,
        })
    }
}

fn parse_coordinate(field: &'static str, raw: &str) -> Result<f64, ClientError> {
    raw.parse::<f64>().map_err(|_| ClientError::InvalidCoordinate {
        field,
        value: raw.to_string(),
    })
}

#[derive(Debug, serde::Deserialize)]
struct IssPassResponse {
    response: Vec<WirePass>,
}

#[derive(Debug, serde::Deserialize)]
struct WirePass {
    risetime: i64,
    #[allow(dead_code)]
    #[serde(default)]
    duration: i64,
}

impl IssPassResponse {
    fn into_prediction(self) -> Result<PassPrediction, ClientError> {
        let first = self.response.first().ok_or(ClientError::NoPassPrediction)?;
        let risetime = chrono::DateTime::from_timestamp(first.risetime, 0)
            .ok_or(ClientError::InvalidTimestamp(first.risetime))?;
        Ok(PassPrediction { risetime })
    }
}

#[derive(Debug)]
pub enum ClientError {
    Build {
        source: reqwest::Error,
    },
    Http {
        endpoint: &'static str,
        source: reqwest::Error,
    },
    InvalidCoordinate {
        field: &'static str,
        value: String,
    },
    InvalidTimestamp(i64),
    NoPassPrediction,
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Build { source } => {
                write!(f, "Failed to build the HTTP client: {source}")
            }
            ClientError::Http {
                endpoint,
                source,
            } => {
                write!(f, "Request to '{endpoint}' failed: {source}")
            }
            ClientError::InvalidCoordinate {
                field,
                value,
            } => {
                write!(f, "Response {field} '{value}' is not a decimal number")
            }
            ClientError::InvalidTimestamp(value) => {
                write!(f, "Response timestamp {value} is not a valid epoch time")
            }
            ClientError::NoPassPrediction => {
                write!(f, "Pass prediction response contained no entries")
            }
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Build { source } | ClientError::Http { source, .. } => Some(source),
            ClientError::InvalidCoordinate { .. }
            | ClientError::InvalidTimestamp(_)
            | ClientError::NoPassPrediction => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AstrosResponse, ClientError, IssNowResponse, IssPassResponse};

    #[test]
    fn when_decoding_astros_response_then_roster_matches_payload() {
        let payload = r#"{
            "message": "success",
            "number": 3,
            "people": [
                {"name": "Chris Cassidy", "craft": "ISS"},
                {"name": "Anatoly Ivanishin", "craft": "ISS"},
                {"name": "Ivan Vagner", "craft": "ISS"}
            ]
        }"#;
        let response: AstrosResponse = serde_json::from_str(payload).expect("Test should pass");
        let roster = response.into_roster();
        assert_eq!(roster.number, 3);
        assert_eq!(roster.people.len(), 3);
        assert_eq!(roster.people[0].name, "Chris Cassidy");
        assert_eq!(roster.people[2].craft, "ISS");
    }

    #[test]
    fn when_decoding_position_response_then_values_round_trip() {
        let payload = r#"{
            "iss_position": {"longitude": "-86.1480", "latitude": "39.7910"},
            "message": "success",
            "timestamp": 1600000000
        }"#;
        let response: IssNowResponse = serde_json::from_str(payload).expect("Test should pass");
        let fix = response.into_fix().expect("Test should pass");
        assert_eq!(fix.longitude, -86.148);
        assert_eq!(fix.latitude, 39.791);
        assert_eq!(
            fix.timestamp,
            chrono::DateTime::from_timestamp(1_600_000_000, 0).unwrap()
        );
    }

    #[test]
    fn when_position_longitude_is_not_numeric_then_error_is_returned() {
        let payload = r#"{
            "iss_position": {"longitude": "east-ish", "latitude": "39.7910"},
            "timestamp": 1600000000
        }"#;
        let response: IssNowResponse = serde_json::from_str(payload).expect("Test should pass");
        let result = response.into_fix();
        assert!(matches!(
            result,
            Err(ClientError::InvalidCoordinate {
                field: "longitude",
                ..
            })
        ));
    }

    #[test]
    fn when_pass_response_has_predictions_then_first_risetime_is_returned() {
        let payload = r#"{
            "message": "success",
            "response": [
                {"risetime": 1600001000, "duration": 540},
                {"risetime": 1600007000, "duration": 620}
            ]
        }"#;
        let response: IssPassResponse = serde_json::from_str(payload).expect("Test should pass");
        let prediction = response.into_prediction().expect("Test should pass");
        assert_eq!(
            prediction.risetime,
            chrono::DateTime::from_timestamp(1_600_001_000, 0).unwrap()
        );
    }

    #[test]
    fn when_pass_response_is_empty_then_no_pass_prediction_error_is_returned() {
        let payload = r#"{"message": "success", "response": []}"#;
        let response: IssPassResponse = serde_json::from_str(payload).expect("Test should pass");
        let result = response.into_prediction();
        assert!(matches!(result, Err(ClientError::NoPassPrediction)));
    }

    #[test]
    fn when_timestamp_is_outside_epoch_range_then_error_is_returned() {
        let payload = r#"{
            "iss_position": {"longitude": "0.0", "latitude": "0.0"},
            "timestamp": 9223372036854775807
        }"#;
        let response: IssNowResponse = serde_json::from_str(payload).expect("Test should pass");
        assert!(matches!(
            response.into_fix(),
            Err(ClientError::InvalidTimestamp(_))
        ));
    }
}
