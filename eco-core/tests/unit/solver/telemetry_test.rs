use super::*;
use crate::models::TransportMode;
use std::sync::{Arc, Mutex};

fn create_individual(cost: f64, co2: f64) -> Individual {
    let mut individual = Individual::new(vec![TransportMode::Train]);
    individual.set_fitness(crate::solver::Fitness { cost, co2 });

    individual
}

fn create_logging_telemetry(log_every: usize) -> (Telemetry, Arc<Mutex<Vec<String>>>) {
    let messages = Arc::new(Mutex::new(Vec::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };

    (Telemetry::new(TelemetryMode::OnlyLogging { logger, log_every }), messages)
}

#[test]
fn can_get_population_minimums_from_different_individuals() {
    let population = vec![create_individual(10., 5.), create_individual(20., 1.), Individual::new(vec![])];

    assert_eq!(get_population_minimums(&population), (10., 1.));
}

#[test]
fn can_record_logbook_without_logging() {
    let mut telemetry = Telemetry::new(TelemetryMode::None);

    telemetry.on_generation(0, &[create_individual(10., 5.)], 0.5, Timer::start());
    telemetry.on_generation(1, &[create_individual(8., 6.), create_individual(9., 4.)], 1., Timer::start());

    assert_eq!(
        telemetry.take_logbook(),
        vec![
            LogbookEntry { generation: 0, min_cost: 10., min_co2: 5. },
            LogbookEntry { generation: 1, min_cost: 8., min_co2: 4. },
        ]
    );
}

#[test]
fn can_log_with_given_frequency() {
    let (mut telemetry, messages) = create_logging_telemetry(2);
    let population = vec![create_individual(10., 5.)];

    telemetry.on_initial(&population, Timer::start());
    (0..5).for_each(|generation| telemetry.on_generation(generation, &population, 0., Timer::start()));
    telemetry.on_result(5, 1, 30);

    let messages = messages.lock().unwrap();
    assert_eq!(messages.iter().filter(|msg| msg.contains("generation ")).count(), 3);
    assert!(messages[0].contains("created initial population of 1"));
    assert!(messages.iter().any(|msg| msg.contains("total generations: 5")));
    assert_eq!(telemetry.logbook().len(), 5);
}
