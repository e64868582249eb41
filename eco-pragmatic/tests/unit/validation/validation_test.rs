use super::*;
use crate::helpers::*;

#[test]
fn can_collect_errors_from_all_rules() {
    let problem = Problem {
        requests: vec![create_request("Alger", "Oran", 0., "general")],
        locations: vec![create_location("Alger", "north", true), create_location("Oran", "sahara", true)],
        distances: Some(vec![create_distance("Alger", "Oran", -432.)]),
        options: None,
    };

    let errors = ValidationContext::new(&problem).validate().err().expect("should fail");

    assert_eq!(errors.codes(), vec!["E1001", "E1005", "E1006"]);
}

#[test]
fn can_accept_valid_problem() {
    let problem = create_test_problem();

    assert_eq!(ValidationContext::new(&problem).validate(), Ok(()));
}

#[test]
fn can_format_errors() {
    let problem = create_empty_problem();

    let errors = ValidationContext::new(&problem).validate().err().expect("should fail");

    assert_eq!(errors.to_string(), "E1000, cause: 'empty request list', action: 'specify at least one delivery request'.");
    assert!(errors.to_json().contains("\"code\": \"E1000\""));
}
