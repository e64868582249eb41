use super::*;
use crate::algorithms::nsga2::dominates;
use crate::helpers::models::*;
use crate::helpers::utils::create_test_environment_with_seed;
use crate::utils::Parallelism;

fn create_engine(config: SearchConfig, seed: u64) -> Nsga2Engine {
    let problem = Arc::new(create_test_problem(create_test_requests()));

    Nsga2Engine::new(problem, config, create_test_environment_with_seed(seed)).expect("cannot create engine")
}

fn create_config(population_size: usize, generations: usize) -> SearchConfig {
    SearchConfigBuilder::default()
        .with_population_size(population_size)
        .with_generations(generations)
        .build()
        .expect("cannot build config")
}

#[test]
fn can_produce_same_outcome_with_same_seed() {
    let first = create_engine(create_config(30, 15), 42).run();
    let second = create_engine(create_config(30, 15), 42).run();

    assert_eq!(first.pareto_front, second.pareto_front);
    assert_eq!(first.logbook, second.logbook);
    assert_eq!(first.statistics, second.statistics);
}

#[test]
fn can_produce_same_outcome_with_parallel_evaluation() {
    let problem = Arc::new(create_test_problem(create_test_requests()));
    let run = |is_parallel: bool| {
        let config = SearchConfig { is_parallel, ..create_config(40, 10) };
        let environment = Environment { parallelism: Parallelism::new(4), ..create_test_environment_with_seed(7) };

        Nsga2Engine::new(problem.clone(), config, environment).expect("cannot create engine").run()
    };

    let sequential = run(false);
    let parallel = run(true);

    assert_eq!(sequential.pareto_front, parallel.pareto_front);
    assert_eq!(sequential.logbook, parallel.logbook);
}

#[test]
fn can_return_mutually_non_dominated_sorted_front() {
    let outcome = create_engine(create_config(50, 30), 42).run();
    let front = &outcome.pareto_front;

    assert!(!front.is_empty());
    assert!(front.len() <= 50);
    assert!(front
        .iter()
        .all(|a| front.iter().all(|b| !(a.cost <= b.cost && a.co2 <= b.co2 && (a.cost < b.cost || a.co2 < b.co2)))));
    assert!(front.windows(2).all(|pair| pair[0].cost <= pair[1].cost));
    assert!(front.iter().all(|solution| solution.decisions.len() == 10));
    assert!(front
        .iter()
        .all(|solution| solution.decisions.iter().enumerate().all(|(idx, decision)| decision.request_index == idx)));
}

#[test]
fn can_keep_logbook_and_statistics() {
    let outcome = create_engine(create_config(50, 30), 42).run();
    let logbook = &outcome.logbook;
    let statistics = &outcome.statistics;

    assert_eq!(logbook.len(), 30);
    assert_eq!(logbook.iter().map(|entry| entry.generation).collect::<Vec<_>>(), (0..30).collect::<Vec<_>>());
    // the best individuals of each objective are never lost
    assert!(logbook.windows(2).all(|pair| pair[1].min_cost <= pair[0].min_cost && pair[1].min_co2 <= pair[0].min_co2));

    assert_eq!(statistics.generations, 30);
    assert_eq!(statistics.population_size, 50);
    assert!(statistics.evaluations >= 50 && statistics.evaluations <= 50 * 31);
    assert_eq!(logbook.last().map(|entry| (entry.min_cost, entry.min_co2)), Some((statistics.final_min_cost, statistics.final_min_co2)));

    let front_min_cost = outcome.pareto_front.iter().map(|solution| solution.cost).fold(f64::INFINITY, f64::min);
    let front_min_co2 = outcome.pareto_front.iter().map(|solution| solution.co2).fold(f64::INFINITY, f64::min);
    assert_eq!(front_min_cost, statistics.final_min_cost);
    assert_eq!(front_min_co2, statistics.final_min_co2);
}

#[test]
fn can_move_through_states() {
    let mut engine = create_engine(create_config(10, 2), 1);

    assert_eq!(engine.state(), EngineState::Initialized);

    assert!(engine.step());
    assert_eq!(engine.state(), EngineState::Running { generation: 0 });

    assert!(engine.step());
    assert_eq!(engine.state(), EngineState::Running { generation: 1 });

    assert!(!engine.step());
    assert_eq!(engine.state(), EngineState::Completed);
    assert!(!engine.step());

    assert_eq!(engine.into_outcome().statistics.generations, 2);
}

#[test]
fn can_return_initial_front_with_zero_generations() {
    let outcome = create_engine(create_config(20, 0), 5).run();

    assert!(outcome.logbook.is_empty());
    assert!(!outcome.pareto_front.is_empty());
    assert_eq!(outcome.statistics.generations, 0);
    assert_eq!(outcome.statistics.evaluations, 20);
}

#[test]
fn can_stop_on_interruption_between_generations() {
    let flag = Arc::new(AtomicBool::new(false));
    let mut engine = create_engine(create_config(20, 100), 5).with_interruption(flag.clone());

    (0..3).for_each(|_| {
        assert!(engine.step());
    });
    flag.store(true, std::sync::atomic::Ordering::Relaxed);

    assert!(!engine.step());

    let outcome = engine.into_outcome();
    assert_eq!(outcome.statistics.generations, 3);
    assert_eq!(outcome.logbook.len(), 3);
    assert!(!outcome.pareto_front.is_empty());
}

#[test]
fn can_stop_when_time_budget_is_spent() {
    let config = SearchConfig { max_time: Some(1E-6), ..create_config(20, 1_000_000) };

    let outcome = create_engine(config, 5).run();

    assert!(outcome.statistics.generations < 1_000_000);
    assert_eq!(outcome.logbook.len(), outcome.statistics.generations);
}

parameterized_test! {can_keep_population_size, population_size, {
    let mut engine = create_engine(create_config(population_size, 5), 3);

    assert_eq!(engine.population().len(), population_size);
    assert_eq!(engine.rankings().len(), population_size);
    while engine.step() {
        assert_eq!(engine.population().len(), population_size);
        assert!(engine.population().iter().all(|individual| individual.fitness().is_some()));
    }
}}

can_keep_population_size! {
    case01_single: 1,
    case02_odd: 7,
    case03_even: 20,
}

#[test]
fn can_evaluate_only_changed_individuals() {
    let config = SearchConfig { crossover_rate: 0., mutation_rate: 0., ..create_config(16, 5) };

    let outcome = create_engine(config, 9).run();

    assert_eq!(outcome.statistics.evaluations, 16);
}

#[test]
fn can_rank_population_after_each_generation() {
    let mut engine = create_engine(create_config(30, 3), 13);

    while engine.step() {}

    let population = engine.population();
    let rankings = engine.rankings();
    population.iter().zip(rankings.iter()).for_each(|(individual, ranking)| {
        if ranking.rank == 0 {
            assert!(!population.iter().any(|other| dominates(other, individual, &CostEmissionObjective)));
        }
    });
    assert!(rankings.windows(2).all(|pair| pair[0].rank <= pair[1].rank));
}
