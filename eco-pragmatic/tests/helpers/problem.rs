use crate::format::config::Config;
use crate::format::problem::*;

pub fn create_location(id: &str, zone: &str, rail_access: bool) -> Location {
    Location {
        id: id.to_string(),
        zone: zone.to_string(),
        rail_access,
        lat: None,
        lng: None,
        hub: None,
        demand: None,
    }
}

pub fn create_location_with_coordinate(id: &str, zone: &str, rail_access: bool, coordinate: (f64, f64)) -> Location {
    Location { lat: Some(coordinate.0), lng: Some(coordinate.1), ..create_location(id, zone, rail_access) }
}

pub fn create_request(origin: &str, destination: &str, cargo_tonnes: f64, cargo_type: &str) -> Request {
    Request {
        origin: origin.to_string(),
        destination: destination.to_string(),
        cargo_tonnes,
        cargo_type: cargo_type.to_string(),
        priority: None,
        return_trip: None,
    }
}

pub fn create_distance(from: &str, to: &str, km: f64) -> Distance {
    Distance { from: from.to_string(), to: to.to_string(), km }
}

pub fn create_empty_problem() -> Problem {
    Problem { requests: vec![], locations: vec![], distances: None, options: None }
}

pub fn create_test_locations() -> Vec<Location> {
    vec![
        create_location_with_coordinate("Alger", "north", true, (36.7538, 3.0588)),
        create_location_with_coordinate("Oran", "north", true, (35.6971, -0.6308)),
        create_location_with_coordinate("Constantine", "north", true, (36.365, 6.6147)),
        create_location_with_coordinate("Setif", "high_plateau", true, (36.19, 5.41)),
        create_location_with_coordinate("Djelfa", "high_plateau", false, (34.6704, 3.263)),
        create_location_with_coordinate("Bechar", "south", true, (31.6238, -2.2162)),
        create_location_with_coordinate("Ghardaia", "south", false, (32.4909, 3.6735)),
        create_location_with_coordinate("Tamanrasset", "south", false, (22.785, 5.5228)),
    ]
}

pub fn create_test_problem() -> Problem {
    Problem {
        requests: vec![
            create_request("Alger", "Oran", 20., "general"),
            create_request("Oran", "Bechar", 45., "bulk"),
            create_request("Alger", "Ghardaia", 6., "refrigerated"),
            create_request("Constantine", "Setif", 12., "hazardous"),
            create_request("Djelfa", "Tamanrasset", 3., "fragile"),
            create_request("Setif", "Alger", 30., "general"),
        ],
        locations: create_test_locations(),
        distances: Some(vec![
            create_distance("Alger", "Oran", 432.),
            create_distance("Alger", "Ghardaia", 600.),
            create_distance("Constantine", "Setif", 130.),
        ]),
        options: None,
    }
}

pub fn create_test_config() -> Config {
    Config { population_size: Some(20), generations: Some(10), seed: Some(42), ..Config::default() }
}
