#[cfg(test)]
#[path = "../../tests/unit/format/location_test.rs"]
mod location_test;

use eco_core::models::{DistanceLookup, HubAssignment, RailAccessLookup, Zone, ZoneLookup};
use eco_core::utils::GenericError;
use rustc_hash::FxHashMap;

/// A ratio between road and great-circle distance used when no explicit distance is known.
pub const DEFAULT_ROAD_FACTOR: f64 = 1.3;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.;

/// Describes a known location.
#[derive(Clone, Debug, PartialEq)]
pub struct LocationInfo {
    /// A zone of the location.
    pub zone: Zone,
    /// True if location has a rail terminal.
    pub rail_access: bool,
    /// Latitude and longitude, if known.
    pub coordinate: Option<(f64, f64)>,
    /// A regional hub of the location, if any.
    pub hub: Option<String>,
}

/// A precomputed lookup table which resolves everything the search needs to know about locations.
/// Explicit distances take precedence over the great-circle estimate.
#[derive(Clone, Debug)]
pub struct LocationTable {
    locations: FxHashMap<String, LocationInfo>,
    distances: FxHashMap<(String, String), f64>,
    road_factor: f64,
}

impl LocationTable {
    /// Creates an empty table with given road factor.
    pub fn new(road_factor: f64) -> Self {
        Self { locations: FxHashMap::default(), distances: FxHashMap::default(), road_factor }
    }

    /// Adds or replaces a location.
    pub fn add_location(&mut self, id: &str, info: LocationInfo) {
        self.locations.insert(id.to_string(), info);
    }

    /// Adds a distance in both directions.
    pub fn add_distance(&mut self, from: &str, to: &str, km: f64) {
        self.distances.insert((from.to_string(), to.to_string()), km);
        self.distances.insert((to.to_string(), from.to_string()), km);
    }

    /// Returns location info.
    pub fn get(&self, id: &str) -> Option<&LocationInfo> {
        self.locations.get(id)
    }

    /// Returns ids of all known locations sorted alphabetically.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids = self.locations.keys().map(|id| id.as_str()).collect::<Vec<_>>();
        ids.sort_unstable();

        ids
    }

    /// Returns amount of known locations.
    pub fn size(&self) -> usize {
        self.locations.len()
    }

    fn get_info(&self, id: &str) -> Result<&LocationInfo, GenericError> {
        self.locations.get(id).ok_or_else(|| format!("unknown location: '{id}'").into())
    }
}

impl Default for LocationTable {
    fn default() -> Self {
        Self::new(DEFAULT_ROAD_FACTOR)
    }
}

impl RailAccessLookup for LocationTable {
    fn has_rail_access(&self, location: &str) -> Result<bool, GenericError> {
        self.get_info(location).map(|info| info.rail_access)
    }
}

impl ZoneLookup for LocationTable {
    fn zone(&self, location: &str) -> Result<Zone, GenericError> {
        self.get_info(location).map(|info| info.zone)
    }
}

impl DistanceLookup for LocationTable {
    fn distance_km(&self, origin: &str, destination: &str) -> Result<f64, GenericError> {
        let from = self.get_info(origin)?;
        let to = self.get_info(destination)?;

        if origin == destination {
            return Ok(0.);
        }

        if let Some(km) = self.distances.get(&(origin.to_string(), destination.to_string())) {
            return Ok(*km);
        }

        match (from.coordinate, to.coordinate) {
            (Some(from), Some(to)) => Ok(haversine_km(from, to) * self.road_factor),
            _ => Err(format!("no distance between '{origin}' and '{destination}' and no coordinates to estimate it")
                .into()),
        }
    }
}

impl HubAssignment for LocationTable {
    fn hub(&self, location: &str) -> Result<Option<String>, GenericError> {
        self.get_info(location).map(|info| info.hub.clone())
    }
}

/// Calculates great-circle distance in kilometers between two (lat, lng) points.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (delta_lng / 2.).sin().powi(2);

    EARTH_RADIUS_KM * 2. * a.sqrt().asin()
}
