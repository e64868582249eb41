use super::*;
use crate::helpers::models::*;
use crate::solver::Decision;

fn create_solution(modes: &[TransportMode]) -> ParetoSolution {
    ParetoSolution {
        index: 0,
        cost: 0.,
        co2: 0.,
        decisions: modes.iter().enumerate().map(|(request_index, &mode)| Decision { request_index, mode }).collect(),
    }
}

#[test]
fn can_group_decisions_by_mode() {
    let problem = create_test_problem(vec![
        create_test_request(ALGER, ORAN, 20.),
        create_test_request(ALGER, GHARDAIA, 5.),
        create_test_request(ORAN, CONSTANTINE, 10.),
    ]);
    let solution = create_solution(&[TransportMode::Train, TransportMode::TruckLarge, TransportMode::Train]);

    let usage = get_mode_usage(&problem, &solution);

    assert_eq!(usage.len(), 2);
    assert_eq!((usage[0].mode, usage[0].requests, usage[0].tonnes), (TransportMode::Train, 2, 30.));
    assert_eq!((usage[1].mode, usage[1].requests, usage[1].tonnes), (TransportMode::TruckLarge, 1, 5.));
    assert_eq!(usage[1].co2, problem.evaluate_decision(1, TransportMode::TruckLarge).co2);
}

#[test]
fn can_get_mean_efficiency_in_range() {
    let problem = create_test_problem(create_test_requests());
    let modes = (0..problem.size()).map(|idx| problem.feasible_modes(idx)[0]).collect::<Vec<_>>();

    let efficiency = get_mean_efficiency(&problem, &create_solution(&modes));

    assert!((0. ..=100.).contains(&efficiency));
}
