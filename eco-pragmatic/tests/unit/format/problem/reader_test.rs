use super::*;
use crate::format::haversine_km;
use crate::helpers::*;
use eco_core::models::{CargoType, TransportMode, Zone};

fn get_codes(result: Result<CoreProblem, MultiFormatError>) -> Vec<String> {
    result.err().map_or(vec![], |errors| errors.codes().iter().map(|code| code.to_string()).collect())
}

#[test]
fn can_read_problem_from_json() {
    let json = r#"{
      "requests": [
        { "origin": "Alger", "destination": "Oran", "cargoTonnes": 20, "cargoType": "general" },
        { "origin": "Oran", "destination": "Alger", "cargoTonnes": 1.5, "cargoType": "refrigerated",
          "priority": 2, "returnTrip": true }
      ],
      "locations": [
        { "id": "Alger", "zone": "north", "railAccess": true },
        { "id": "Oran", "zone": "north", "railAccess": false }
      ],
      "distances": [ { "from": "Alger", "to": "Oran", "km": 432 } ]
    }"#;

    let problem = json.to_string().read_pragmatic().expect("cannot read problem");

    assert_eq!(problem.size(), 2);
    assert_eq!(problem.request(1).cargo_type, CargoType::Refrigerated);
    assert_eq!(problem.request(1).priority, Some(2));
    assert!(problem.request(1).return_trip);
    assert!(!problem.request(0).return_trip);
    assert_eq!(problem.context(1).distance_km, 432.);
    assert_eq!(problem.context(0).origin_zone, Zone::North);
    assert!(!problem.feasible_modes(0).contains(&TransportMode::Train));
}

#[test]
fn can_report_malformed_json() {
    let result = BufReader::new("{ \"requests\": 1 }".as_bytes()).read_pragmatic();

    assert_eq!(get_codes(result), vec!["E0000"]);
}

#[test]
fn can_report_validation_errors() {
    let problem = Problem {
        requests: vec![create_request("Alger", "Nowhere", -1., "liquid")],
        locations: vec![create_location("Alger", "north", true), create_location("Alger", "north", true)],
        ..create_empty_problem()
    };

    let result = problem.read_pragmatic();

    assert_eq!(get_codes(result), vec!["E1001", "E1002", "E1003", "E1004"]);
}

#[test]
fn can_report_unresolved_distance_with_request_index() {
    let problem = Problem {
        requests: vec![create_request("Alger", "Oran", 10., "general"), create_request("Alger", "Setif", 10., "general")],
        locations: vec![
            create_location("Alger", "north", true),
            create_location("Oran", "north", true),
            create_location("Setif", "high_plateau", true),
        ],
        distances: Some(vec![create_distance("Alger", "Oran", 432.)]),
        options: None,
    };

    let errors = map_to_problem(&problem).err().expect("should fail");

    assert_eq!(errors.codes(), vec!["E2002"]);
    assert!(errors.errors[0].action.contains("'1'"));
    assert!(errors.errors[0].details.as_ref().is_some_and(|details| details.contains("Setif")));
}

#[test]
fn can_estimate_distance_with_road_factor_option() {
    let mut problem = Problem {
        requests: vec![create_request("Alger", "Oran", 10., "general")],
        locations: create_test_locations(),
        ..create_empty_problem()
    };
    let expected = haversine_km((36.7538, 3.0588), (35.6971, -0.6308));

    let default_distance = map_to_problem(&problem).expect("cannot map problem").context(0).distance_km;
    problem.options = Some(Options { road_factor: Some(1.), ..Options::default() });
    let custom_distance = map_to_problem(&problem).expect("cannot map problem").context(0).distance_km;

    assert_float_eq!(custom_distance, expected);
    assert_float_eq!(default_distance, expected * 1.3);
}

parameterized_test! {can_route_through_hub, (use_hubs, expected), {
    can_route_through_hub_impl(use_hubs, expected);
}}

can_route_through_hub! {
    case01: (None, 100.),
    case02: (Some(false), 100.),
    case03: (Some(true), 120.),
}

fn can_route_through_hub_impl(use_hubs: Option<bool>, expected: f64) {
    let problem = Problem {
        requests: vec![create_request("a", "b", 10., "general")],
        locations: vec![
            Location { hub: Some("h".to_string()), ..create_location("a", "north", false) },
            create_location("b", "north", false),
            create_location("h", "north", false),
        ],
        distances: Some(vec![create_distance("a", "b", 100.), create_distance("a", "h", 30.), create_distance("h", "b", 90.)]),
        options: Some(Options { use_hubs, ..Options::default() }),
    };

    let problem = map_to_problem(&problem).expect("cannot map problem");

    assert_eq!(problem.context(0).distance_km, expected);
}

#[test]
fn can_disable_mode_with_zero_capacity() {
    let problem = Problem {
        requests: vec![create_request("Alger", "Oran", 2., "general")],
        options: Some(Options {
            capacities: Some(Capacities {
                train: 1000.,
                truck_small: 0.,
                truck_medium: 8.,
                truck_large: 25.,
                multimodal: 25.,
            }),
            ..Options::default()
        }),
        ..create_test_problem()
    };

    let problem = map_to_problem(&problem).expect("cannot map problem");

    assert_eq!(
        problem.feasible_modes(0),
        &[TransportMode::Train, TransportMode::TruckMedium, TransportMode::TruckLarge, TransportMode::Multimodal]
    );
}

#[test]
fn can_serialize_problem_back() {
    let problem = create_test_problem();

    let json = serialize_problem(&problem).expect("cannot serialize problem");
    let problem = deserialize_problem(BufReader::new(json.as_bytes())).expect("cannot deserialize problem");

    assert_eq!(problem.requests.len(), 6);
    assert!(json.contains("cargoTonnes"));
    assert!(json.contains("railAccess"));
    assert!(!json.contains("returnTrip"));
}
