//! Constant tables of the cost model.

use crate::models::{CargoType, TransportMode, Zone};

/// Load factor below which a moderate penalty applies.
pub const MODERATE_LOAD_THRESHOLD: f64 = 0.5;
/// Moderate partial load penalty.
pub const MODERATE_LOAD_PENALTY: f64 = 1.6;
/// Load factor below which a severe penalty applies on top of the moderate one.
pub const SEVERE_LOAD_THRESHOLD: f64 = 0.25;
/// Severe partial load penalty, composed with the moderate one it gives 2.5.
pub const SEVERE_LOAD_PENALTY: f64 = 1.5625;

/// Load factor below which a return trip is considered as run empty.
pub const EMPTY_RETURN_LOAD_THRESHOLD: f64 = 0.1;
/// A share of the base factor added for an empty return leg.
pub const EMPTY_RETURN_SHARE: f64 = 0.7;

/// Distance above which rail gets long haul bonus.
pub const LONG_HAUL_DISTANCE_KM: f64 = 300.;
/// Long haul rail bonus.
pub const LONG_HAUL_RAIL_BONUS: f64 = 0.85;

/// Distance above which a southern destination is considered extreme.
pub const EXTREME_SOUTH_DISTANCE_KM: f64 = 1200.;
/// Extreme south penalty.
pub const EXTREME_SOUTH_PENALTY: f64 = 1.25;

/// Cost surcharge for urgent deliveries on rail.
pub const URGENT_RAIL_SURCHARGE: f64 = 1.2;

/// Returns base emission factor in kg CO2 per tonne-km.
pub fn emission_factor(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Train => 0.020,
        TransportMode::TruckSmall => 0.180,
        TransportMode::TruckMedium => 0.100,
        TransportMode::TruckLarge => 0.062,
        TransportMode::Multimodal => 0.040,
    }
}

/// Returns base cost factor in DZD per tonne-km.
pub fn cost_factor(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Train => 2.0,
        TransportMode::TruckSmall => 18.0,
        TransportMode::TruckMedium => 4.4,
        TransportMode::TruckLarge => 2.8,
        TransportMode::Multimodal => 2.2,
    }
}

/// Returns fixed handling overhead of a shipment in DZD.
pub fn handling_cost(mode: TransportMode) -> f64 {
    match mode {
        TransportMode::Train => 50_000.,
        TransportMode::TruckSmall => 5_000.,
        TransportMode::TruckMedium => 8_000.,
        TransportMode::TruckLarge => 12_000.,
        TransportMode::Multimodal => 15_000.,
    }
}

/// Returns zone multiplier.
pub fn zone_multiplier(zone: Zone) -> f64 {
    match zone {
        Zone::North => 1.0,
        Zone::HighPlateau => 1.15,
        Zone::South => 1.40,
    }
}

/// Returns cargo type multiplier.
pub fn cargo_multiplier(cargo_type: CargoType) -> f64 {
    match cargo_type {
        CargoType::General => 1.0,
        CargoType::Refrigerated => 1.35,
        CargoType::Hazardous => 1.10,
        CargoType::Bulk => 0.90,
        CargoType::Fragile => 1.05,
    }
}
