use crate::models::{TransportMode, Zone};
use crate::utils::GenericError;

/// Vehicle capacity in tonnes per transport mode.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleCapacities {
    /// A wagon capacity.
    pub train: f64,
    /// A light truck capacity.
    pub truck_small: f64,
    /// A medium truck capacity.
    pub truck_medium: f64,
    /// A heavy truck capacity.
    pub truck_large: f64,
    /// A truck capacity used on the last kilometers of multimodal transport.
    pub multimodal: f64,
}

impl VehicleCapacities {
    /// Returns capacity of given mode.
    pub fn get(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Train => self.train,
            TransportMode::TruckSmall => self.truck_small,
            TransportMode::TruckMedium => self.truck_medium,
            TransportMode::TruckLarge => self.truck_large,
            TransportMode::Multimodal => self.multimodal,
        }
    }
}

impl Default for VehicleCapacities {
    fn default() -> Self {
        Self { train: 1000., truck_small: 2.5, truck_medium: 8., truck_large: 25., multimodal: 25. }
    }
}

/// A per request context resolved once before the search starts.
#[derive(Clone, Debug, PartialEq)]
pub struct Context {
    /// A road (or rail) distance between origin and destination.
    pub distance_km: f64,
    /// A zone of origin.
    pub origin_zone: Zone,
    /// A zone of destination.
    pub destination_zone: Zone,
    /// True if origin has rail access.
    pub rail_access_origin: bool,
    /// True if destination has rail access.
    pub rail_access_destination: bool,
    /// Vehicle capacities per candidate mode.
    pub capacities: VehicleCapacities,
    /// A regional hub the delivery is routed through.
    pub hub: Option<String>,
}

impl Context {
    /// Returns true if both endpoints have rail access.
    pub fn has_rail_access(&self) -> bool {
        self.rail_access_origin && self.rail_access_destination
    }

    /// Returns vehicle capacity for given mode.
    pub fn capacity(&self, mode: TransportMode) -> f64 {
        self.capacities.get(mode)
    }

    /// Returns true if the delivery crosses zones.
    pub fn is_zone_crossing(&self) -> bool {
        self.origin_zone != self.destination_zone
    }

    /// Returns true if mode can be used in this context.
    pub fn is_feasible(&self, mode: TransportMode) -> bool {
        (!mode.requires_rail() || self.has_rail_access()) && self.capacity(mode) > 0.
    }

    /// Returns modes which can be used in this context, in a fixed order.
    pub fn feasible_modes(&self) -> Vec<TransportMode> {
        TransportMode::ALL.iter().copied().filter(|mode| self.is_feasible(*mode)).collect()
    }
}

/// Resolves whether a location has rail access.
pub trait RailAccessLookup {
    /// Returns true if location has rail access.
    fn has_rail_access(&self, location: &str) -> Result<bool, GenericError>;
}

/// Resolves a zone of a location.
pub trait ZoneLookup {
    /// Returns zone of the location.
    fn zone(&self, location: &str) -> Result<Zone, GenericError>;
}

/// Resolves a distance between two locations. Usually backed by a routing service or a
/// precomputed table.
pub trait DistanceLookup {
    /// Returns distance in kilometers.
    fn distance_km(&self, origin: &str, destination: &str) -> Result<f64, GenericError>;
}

/// Assigns a location to a regional hub.
pub trait HubAssignment {
    /// Returns hub identifier of the location, if any.
    fn hub(&self, location: &str) -> Result<Option<String>, GenericError>;
}

/// Combines all lookups needed to resolve a request context.
pub trait ContextLookup: RailAccessLookup + ZoneLookup + DistanceLookup {}

impl<T> ContextLookup for T where T: RailAccessLookup + ZoneLookup + DistanceLookup {}
