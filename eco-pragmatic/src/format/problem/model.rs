use crate::format::{FormatError, MultiFormatError};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};

/// A delivery request.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// An origin location id.
    pub origin: String,
    /// A destination location id.
    pub destination: String,
    /// Cargo weight in tonnes.
    pub cargo_tonnes: f64,
    /// Cargo type: `general`, `refrigerated`, `hazardous`, `bulk` or `fragile`.
    pub cargo_type: String,
    /// Priority: 1 is normal, 2 is urgent, 3 is very urgent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    /// True when the vehicle may come back empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_trip: Option<bool>,
}

/// A location known to the planner.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// A unique location id.
    pub id: String,
    /// A zone: `north`, `high_plateau` or `south`.
    pub zone: String,
    /// True if location has a rail terminal.
    pub rail_access: bool,
    /// Latitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// Longitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    /// A regional hub id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hub: Option<String>,
    /// A relative demand weight used by request generator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demand: Option<f64>,
}

/// An explicit distance between two locations, applied in both directions.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Distance {
    /// A first location id.
    pub from: String,
    /// A second location id.
    pub to: String,
    /// Distance in kilometers.
    pub km: f64,
}

/// Vehicle capacities in tonnes per transport mode.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capacities {
    /// A wagon capacity.
    pub train: f64,
    /// A light truck capacity.
    pub truck_small: f64,
    /// A medium truck capacity.
    pub truck_medium: f64,
    /// A heavy truck capacity.
    pub truck_large: f64,
    /// A last kilometers truck capacity of multimodal transport.
    pub multimodal: f64,
}

/// Specifies how request contexts are resolved.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Routes deliveries through the origin's regional hub.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_hubs: Option<bool>,
    /// A ratio between road and great-circle distance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub road_factor: Option<f64>,
    /// Vehicle capacities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacities: Option<Capacities>,
}

/// A planning problem.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Problem {
    /// Delivery requests.
    pub requests: Vec<Request>,
    /// Known locations.
    pub locations: Vec<Location>,
    /// Explicit distances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distances: Option<Vec<Distance>>,
    /// Context resolution options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
}

/// Deserializes problem in json format from `BufReader`.
pub fn deserialize_problem<R: Read>(reader: BufReader<R>) -> Result<Problem, MultiFormatError> {
    serde_json::from_reader(reader).map_err(|err| {
        FormatError::new(
            "E0000".to_string(),
            "cannot deserialize problem".to_string(),
            format!("check input json: '{err}'"),
        )
        .into()
    })
}

/// Serializes problem in json format into a string.
pub fn serialize_problem(problem: &Problem) -> Result<String, String> {
    serde_json::to_string_pretty(problem).map_err(|err| err.to_string())
}
