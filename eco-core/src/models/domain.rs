#[cfg(test)]
#[path = "../../tests/unit/models/domain_test.rs"]
mod domain_test;

use crate::utils::{GenericError, SearchError};
use std::fmt;
use std::str::FromStr;

/// A transport mode which can be assigned to a delivery request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TransportMode {
    /// A freight train.
    Train,
    /// A light truck, below 3.5 tonnes.
    TruckSmall,
    /// A medium truck, 3.5 to 12 tonnes.
    TruckMedium,
    /// A heavy truck, above 12 tonnes.
    TruckLarge,
    /// A rail haul with a truck on the last kilometers.
    Multimodal,
}

impl TransportMode {
    /// All transport modes in a fixed order.
    pub const ALL: [TransportMode; 5] = [
        TransportMode::Train,
        TransportMode::TruckSmall,
        TransportMode::TruckMedium,
        TransportMode::TruckLarge,
        TransportMode::Multimodal,
    ];

    /// Returns true if mode needs rail access at both endpoints.
    pub fn requires_rail(&self) -> bool {
        matches!(self, TransportMode::Train | TransportMode::Multimodal)
    }

    /// Returns mode name as used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Train => "train",
            TransportMode::TruckSmall => "truck_small",
            TransportMode::TruckMedium => "truck_medium",
            TransportMode::TruckLarge => "truck_large",
            TransportMode::Multimodal => "multimodal",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        TransportMode::ALL
            .iter()
            .find(|mode| mode.as_str() == value)
            .copied()
            .ok_or_else(|| format!("unknown transport mode: '{value}'").into())
    }
}

/// A coarse geographic and climatic band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Coastal north with normal driving conditions.
    North,
    /// High plateaus: altitude and winding roads.
    HighPlateau,
    /// Desert south: heat, sand and vehicle wear.
    South,
}

impl Zone {
    /// Returns zone name as used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::North => "north",
            Zone::HighPlateau => "high_plateau",
            Zone::South => "south",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Zone {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "north" | "nord" => Ok(Zone::North),
            "high_plateau" | "hauts_plateaux" => Ok(Zone::HighPlateau),
            "south" | "sud" => Ok(Zone::South),
            _ => Err(format!("unknown zone: '{value}'").into()),
        }
    }
}

/// A type of transported goods.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CargoType {
    /// General goods.
    General,
    /// Fresh goods which need cooling.
    Refrigerated,
    /// Dangerous goods: reduced speed and detours.
    Hazardous,
    /// Bulk goods like grain.
    Bulk,
    /// Fragile goods which need careful driving.
    Fragile,
}

impl CargoType {
    /// All cargo types in a fixed order.
    pub const ALL: [CargoType; 5] =
        [CargoType::General, CargoType::Refrigerated, CargoType::Hazardous, CargoType::Bulk, CargoType::Fragile];

    /// Returns cargo type name as used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            CargoType::General => "general",
            CargoType::Refrigerated => "refrigerated",
            CargoType::Hazardous => "hazardous",
            CargoType::Bulk => "bulk",
            CargoType::Fragile => "fragile",
        }
    }
}

impl fmt::Display for CargoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CargoType {
    type Err = SearchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        CargoType::ALL
            .iter()
            .find(|cargo_type| cargo_type.as_str() == value)
            .copied()
            .ok_or_else(|| SearchError::InvalidInput(format!("unknown cargo type: '{value}'")))
    }
}

/// A delivery request. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct DeliveryRequest {
    /// An origin location identifier.
    pub origin: String,
    /// A destination location identifier.
    pub destination: String,
    /// Cargo weight in tonnes, must be positive.
    pub cargo_tonnes: f64,
    /// Cargo type.
    pub cargo_type: CargoType,
    /// Priority: 1 is normal, 2 is urgent, 3 is very urgent.
    pub priority: Option<u8>,
    /// True when the vehicle may have to come back empty.
    pub return_trip: bool,
}

impl DeliveryRequest {
    /// Creates a new request with normal priority and no return trip.
    pub fn new(origin: &str, destination: &str, cargo_tonnes: f64, cargo_type: CargoType) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            cargo_tonnes,
            cargo_type,
            priority: None,
            return_trip: false,
        }
    }

    /// Sets priority.
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Marks request as a return trip.
    pub fn with_return_trip(mut self, return_trip: bool) -> Self {
        self.return_trip = return_trip;
        self
    }

    /// Returns true if request has priority higher than normal.
    pub fn is_urgent(&self) -> bool {
        self.priority.is_some_and(|priority| priority > 1)
    }
}
