use crate::format::config::Config;
use crate::format::problem::Problem;
use crate::helpers::*;
use crate::*;
use std::io::BufReader;

fn get_codes(problem: &Problem, config: &Config) -> Vec<String> {
    solve_pragmatic(problem, config)
        .err()
        .map_or(vec![], |errors| errors.codes().iter().map(|code| code.to_string()).collect())
}

parameterized_test! {can_report_configuration_errors, config, {
    assert_eq!(get_codes(&create_test_problem(), &config), vec!["E2000"]);
}}

can_report_configuration_errors! {
    case01_negative_generations: Config { generations: Some(-1), ..create_test_config() },
    case02_alpha_above_one: Config { alpha: Some(1.5), ..create_test_config() },
    case03_alpha_below_zero: Config { alpha: Some(-0.1), ..create_test_config() },
    case04_zero_population: Config { population_size: Some(0), ..create_test_config() },
}

#[test]
fn can_check_configuration_before_problem() {
    let config = Config { generations: Some(-1), ..create_test_config() };

    assert_eq!(get_codes(&create_empty_problem(), &config), vec!["E2000"]);
}

#[test]
fn can_report_invalid_problem() {
    assert_eq!(get_codes(&create_empty_problem(), &create_test_config()), vec!["E1000"]);
}

#[test]
fn can_report_request_without_feasible_mode() {
    let mut problem = create_test_problem();
    problem.options = Some(crate::format::problem::Options {
        capacities: Some(crate::format::problem::Capacities {
            train: 1000.,
            truck_small: 0.,
            truck_medium: 0.,
            truck_large: 0.,
            multimodal: 25.,
        }),
        ..Default::default()
    });

    // Djelfa has no rail terminal, so trucks are the only option there
    assert_eq!(get_codes(&problem, &create_test_config()), vec!["E2001"]);
}

#[test]
fn can_return_errors_as_json() {
    let result = get_solution_serialized(
        BufReader::new("{ \"requests\": [] }".as_bytes()),
        BufReader::new("{}".as_bytes()),
    );

    let errors = result.err().expect("should fail");
    assert!(errors.contains("\"code\": \"E0000\""));
}
