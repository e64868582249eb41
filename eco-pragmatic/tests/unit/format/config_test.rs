use super::*;

fn read_config_from_str(json: &str) -> Result<Config, MultiFormatError> {
    read_config(BufReader::new(json.as_bytes()))
}

#[test]
fn can_use_defaults_for_empty_config() {
    let config = read_config_from_str("{}").expect("cannot read config");

    let params = create_search_params(&config).expect("cannot create params");

    assert_eq!(params.alpha, DEFAULT_ALPHA);
    assert_eq!(params.seed, DEFAULT_SEED as u64);
    assert_eq!(params.config, SearchConfig::default());
}

#[test]
fn can_read_full_config() {
    let config = read_config_from_str(
        r#"{
          "alpha": 0.3,
          "populationSize": 40,
          "generations": 25,
          "crossoverRate": 0.9,
          "mutationRate": 0.05,
          "seed": 7,
          "crossover": "single-point",
          "maxTimeSecs": 30,
          "parallel": true,
          "telemetry": { "logging": { "enabled": true, "logEvery": 5 } }
        }"#,
    )
    .expect("cannot read config");

    let params = create_search_params(&config).expect("cannot create params");

    assert_eq!(params.alpha, 0.3);
    assert_eq!(params.seed, 7);
    assert_eq!(params.config.population_size, 40);
    assert_eq!(params.config.generations, 25);
    assert_eq!(params.config.crossover_rate, 0.9);
    assert_eq!(params.config.mutation_rate, 0.05);
    assert_eq!(params.config.crossover, CrossoverStrategy::SinglePoint);
    assert_eq!(params.config.max_time, Some(30.));
    assert_eq!(params.config.log_every, Some(5));
    assert!(params.config.is_parallel);
}

parameterized_test! {can_use_logging_settings, (logging, expected), {
    can_use_logging_settings_impl(logging, expected);
}}

can_use_logging_settings! {
    case01: (None, None),
    case02: (Some(LoggingConfig { enabled: false, log_every: Some(3) }), None),
    case03: (Some(LoggingConfig { enabled: true, log_every: Some(3) }), Some(3)),
    case04: (Some(LoggingConfig { enabled: true, log_every: None }), Some(DEFAULT_LOG_EVERY as usize)),
}

fn can_use_logging_settings_impl(logging: Option<LoggingConfig>, expected: Option<usize>) {
    let config = Config { telemetry: Some(TelemetryConfig { logging }), ..Config::default() };

    let params = create_search_params(&config).expect("cannot create params");

    assert_eq!(params.config.log_every, expected);
}

parameterized_test! {can_reject_invalid_values, config, {
    can_reject_invalid_values_impl(config);
}}

can_reject_invalid_values! {
    case01_negative_population: Config { population_size: Some(-1), ..Config::default() },
    case02_zero_population: Config { population_size: Some(0), ..Config::default() },
    case03_negative_generations: Config { generations: Some(-1), ..Config::default() },
    case04_negative_seed: Config { seed: Some(-5), ..Config::default() },
    case05_crossover_rate: Config { crossover_rate: Some(1.5), ..Config::default() },
    case06_mutation_rate: Config { mutation_rate: Some(-0.1), ..Config::default() },
    case07_crossover: Config { crossover: Some("two-point".to_string()), ..Config::default() },
    case08_max_time: Config { max_time_secs: Some(0.), ..Config::default() },
    case09_log_every: Config {
        telemetry: Some(TelemetryConfig { logging: Some(LoggingConfig { enabled: true, log_every: Some(-1) }) }),
        ..Config::default()
    },
}

fn can_reject_invalid_values_impl(config: Config) {
    let result = create_search_params(&config);

    assert_eq!(result.map_err(|err| err.kind()).err(), Some("configuration"));
}

#[test]
fn can_read_negative_integers_without_parse_error() {
    let config = read_config_from_str(r#"{ "generations": -1 }"#).expect("cannot read config");

    assert_eq!(config.generations, Some(-1));
}

#[test]
fn can_report_malformed_config() {
    let result = read_config_from_str(r#"{ "generations": "many" }"#);

    let errors = result.err().expect("should fail");
    assert_eq!(errors.codes(), vec!["E0002"]);
}
