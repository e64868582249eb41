use crate::format::config::Config;
use crate::format::solution::Solution;
use crate::helpers::*;
use crate::*;

fn solve_test_problem(config: Config) -> Solution {
    solve_pragmatic(&create_test_problem(), &config).expect("cannot solve problem")
}

#[test]
fn can_solve_problem_end_to_end() {
    let solution = solve_test_problem(create_test_config());

    assert!(!solution.pareto_front.is_empty());
    assert_eq!(solution.logbook.len(), 10);
    assert_eq!(solution.statistics.generations, 10);
    assert_eq!(solution.statistics.population_size, 20);
    assert_eq!(solution.statistics.front_size, solution.pareto_front.len());
    solution.pareto_front.iter().for_each(|point| {
        assert_eq!(point.decisions.len(), 6);
        assert_eq!(
            point.decisions.iter().map(|decision| decision.request_index).collect::<Vec<_>>(),
            (0..6).collect::<Vec<_>>()
        );
    });
    solution.pareto_front.windows(2).for_each(|pair| assert!(pair[0].total_cost_dzd <= pair[1].total_cost_dzd));
}

#[test]
fn can_never_assign_rail_to_location_without_terminal() {
    let solution = solve_test_problem(create_test_config());

    // requests 2 and 4 end or start at locations without rail terminal
    solution
        .pareto_front
        .iter()
        .flat_map(|point| point.decisions.iter())
        .filter(|decision| decision.request_index == 2 || decision.request_index == 4)
        .for_each(|decision| assert!(decision.mode != "train" && decision.mode != "multimodal"));
}

#[test]
fn can_reproduce_solution_with_same_seed() {
    let first = solve_test_problem(create_test_config());
    let second = solve_test_problem(create_test_config());

    assert_eq!(first, second);
}

#[test]
fn can_select_extremes_with_alpha() {
    let by_cost = solve_test_problem(Config { alpha: Some(1.), ..create_test_config() });
    let by_co2 = solve_test_problem(Config { alpha: Some(0.), ..create_test_config() });

    let min_cost = by_cost.pareto_front.iter().map(|point| point.total_cost_dzd).fold(f64::INFINITY, f64::min);
    let min_co2 = by_co2.pareto_front.iter().map(|point| point.total_co2_kg).fold(f64::INFINITY, f64::min);

    assert_eq!(by_cost.recommended_solution.total_cost_dzd, min_cost);
    assert_eq!(by_co2.recommended_solution.total_co2_kg, min_co2);
}

#[test]
fn can_solve_serialized_problem() {
    let problem = serde_json::to_string(&create_test_problem()).expect("cannot serialize problem");
    let config = r#"{ "populationSize": 10, "generations": 3, "seed": 1, "crossover": "single-point" }"#;

    let solution = get_solution_serialized(
        std::io::BufReader::new(problem.as_bytes()),
        std::io::BufReader::new(config.as_bytes()),
    )
    .expect("cannot solve problem");

    assert!(solution.contains("\"paretoFront\""));
    assert!(solution.contains("\"recommendedSolution\""));
    assert!(solution.contains("\"logbook\""));
}
