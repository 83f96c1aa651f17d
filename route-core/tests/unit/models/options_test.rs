use super::*;
use std::fs::File;

#[test]
fn can_read_full_options() {
    let file = File::open("tests/data/options.full.json").expect("cannot read options from file");

    let options = read_options(BufReader::new(file)).unwrap();

    assert_eq!(options.distance_model, Some(DistanceModel::Planar { km_per_unit: 110.5 }));
    assert_eq!(options.average_speed, Some(25.));
    assert_eq!(options.service_time, Some(3.5));
    assert_eq!(options.fuel_consumption_rate, Some(0.35));
    assert_eq!(options.fuel_price, Some(1.8));
    assert_eq!(options.two_opt, Some(TwoOptConfig { max_passes: Some(50) }));
    assert_eq!(
        options.genetic,
        Some(GeneticConfig {
            population_size: Some(60),
            generations: Some(200),
            mutation_rate: Some(0.15),
            elite_fraction: Some(0.1),
            tournament_size: Some(4),
        })
    );
    assert_eq!(
        options.ant_colony,
        Some(AntColonyConfig {
            ants: Some(30),
            iterations: Some(100),
            alpha: Some(1.),
            beta: Some(3.),
            evaporation: Some(0.2),
            deposit: Some(2.),
        })
    );
    assert_eq!(
        options.annealing,
        Some(AnnealingConfig {
            initial_temperature: Some(500.),
            cooling_rate: Some(0.99),
            min_temperature: Some(0.5)
        })
    );
    assert_eq!(options.seed, Some(2024));
    assert_eq!(options.time_limit, Some(10.));
}

#[test]
fn can_apply_defaults_for_empty_options() {
    let options = read_options(BufReader::new("{}".as_bytes())).unwrap();

    assert_eq!(options, OptimizationOptions::default());
    assert_eq!(options.distance_model(), DistanceModel::GreatCircle);
    assert_eq!(options.average_speed(), DEFAULT_AVERAGE_SPEED);
    assert_eq!(options.service_time(), DEFAULT_SERVICE_TIME);
    assert_eq!(options.fuel_consumption_rate(), DEFAULT_FUEL_CONSUMPTION_RATE);
    assert_eq!(options.fuel_price(), DEFAULT_FUEL_PRICE);
}

#[test]
fn can_read_planar_model_with_default_multiplier() {
    let options = read_options(BufReader::new(r#"{ "distanceModel": { "type": "planar" } }"#.as_bytes())).unwrap();

    assert_eq!(options.distance_model(), DistanceModel::planar());
}

#[test]
fn can_read_great_circle_model() {
    let options =
        read_options(BufReader::new(r#"{ "distanceModel": { "type": "great-circle" } }"#.as_bytes())).unwrap();

    assert_eq!(options.distance_model(), DistanceModel::GreatCircle);
}

#[test]
fn can_reject_malformed_json() {
    let result = read_options(BufReader::new(r#"{ "averageSpeed": "fast" }"#.as_bytes()));

    match result {
        Err(OptimizationError::InvalidInput(message)) => assert!(message.starts_with("cannot deserialize options")),
        _ => unreachable!("expected invalid input"),
    }
}

parameterized_test! {can_validate_options, (options, expected_error), {
    let expected_error: Option<&str> = expected_error;
    let result = options.validate();

    match (result, expected_error) {
        (Ok(_), None) => {}
        (Err(OptimizationError::InvalidInput(message)), Some(expected)) => {
            assert!(message.contains(expected), "'{message}' does not contain '{expected}'")
        }
        (result, expected) => unreachable!("unexpected result: {result:?}, expected: {expected:?}"),
    }
}}

can_validate_options! {
    case01_defaults: (OptimizationOptions::default(), None),
    case02_zero_speed: (OptimizationOptions { average_speed: Some(0.), ..Default::default() }, Some("averageSpeed")),
    case03_negative_service_time: (
        OptimizationOptions { service_time: Some(-1.), ..Default::default() }, Some("serviceTime")
    ),
    case04_nan_fuel_price: (
        OptimizationOptions { fuel_price: Some(f64::NAN), ..Default::default() }, Some("fuelPrice")
    ),
    case05_zero_population: (
        OptimizationOptions {
            genetic: Some(GeneticConfig { population_size: Some(0), ..Default::default() }),
            ..Default::default()
        },
        Some("genetic.populationSize")
    ),
    case06_mutation_rate: (
        OptimizationOptions {
            genetic: Some(GeneticConfig { mutation_rate: Some(1.5), ..Default::default() }),
            ..Default::default()
        },
        Some("genetic.mutationRate")
    ),
    case07_evaporation: (
        OptimizationOptions {
            ant_colony: Some(AntColonyConfig { evaporation: Some(-0.1), ..Default::default() }),
            ..Default::default()
        },
        Some("antColony.evaporation")
    ),
    case08_cooling_rate: (
        OptimizationOptions {
            annealing: Some(AnnealingConfig { cooling_rate: Some(1.), ..Default::default() }),
            ..Default::default()
        },
        Some("annealing.coolingRate")
    ),
    case09_time_limit: (OptimizationOptions { time_limit: Some(0.), ..Default::default() }, Some("timeLimit")),
    case10_many_errors: (
        OptimizationOptions { average_speed: Some(-1.), fuel_price: Some(-1.), ..Default::default() },
        Some("averageSpeed must be positive, got -1, fuelPrice")
    ),
}
