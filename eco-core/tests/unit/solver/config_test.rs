use super::*;

#[test]
fn can_build_config_with_defaults() {
    let config = SearchConfigBuilder::default().build().expect("cannot build default config");

    assert_eq!(config, SearchConfig::default());
    assert_eq!(config.population_size, 100);
    assert_eq!(config.crossover, CrossoverStrategy::Uniform);
}

#[test]
fn can_override_parameters() {
    let config = SearchConfigBuilder::default()
        .with_population_size(51)
        .with_generations(7)
        .with_crossover_rate(1.)
        .with_mutation_rate(0.)
        .with_crossover(CrossoverStrategy::SinglePoint)
        .with_max_time(Some(10.))
        .with_log_every(Some(5))
        .with_parallel(true)
        .build()
        .expect("cannot build config");

    assert_eq!(config.population_size, 51);
    assert_eq!(config.generations, 7);
    assert_eq!(config.crossover_rate, 1.);
    assert_eq!(config.mutation_rate, 0.);
    assert_eq!(config.crossover, CrossoverStrategy::SinglePoint);
    assert_eq!(config.max_time, Some(10.));
    assert_eq!(config.log_every, Some(5));
    assert!(config.is_parallel);
}

parameterized_test! {can_reject_invalid_config, builder, {
    assert_eq!(builder.build().map_err(|err| err.kind()), Err("configuration"));
}}

can_reject_invalid_config! {
    case01_zero_population: SearchConfigBuilder::default().with_population_size(0),
    case02_negative_crossover_rate: SearchConfigBuilder::default().with_crossover_rate(-0.1),
    case03_too_large_mutation_rate: SearchConfigBuilder::default().with_mutation_rate(1.5),
    case04_nan_rate: SearchConfigBuilder::default().with_mutation_rate(f64::NAN),
    case05_zero_time: SearchConfigBuilder::default().with_max_time(Some(0.)),
    case06_zero_log_frequency: SearchConfigBuilder::default().with_log_every(Some(0)),
}

parameterized_test! {can_validate_alpha, (alpha, is_valid), {
    assert_eq!(validate_alpha(alpha).is_ok(), is_valid);
}}

can_validate_alpha! {
    case01_zero: (0., true),
    case02_half: (0.5, true),
    case03_one: (1., true),
    case04_negative: (-0.01, false),
    case05_above_one: (1.01, false),
    case06_nan: (f64::NAN, false),
}

#[test]
fn can_accept_zero_generations_and_odd_population() {
    let config = SearchConfigBuilder::default().with_population_size(7).with_generations(0).build();

    assert!(config.is_ok());
}
