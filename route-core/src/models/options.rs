//! Optimization options. Every field is optional: a default is applied when it is omitted.

#[cfg(test)]
#[path = "../../tests/unit/models/options_test.rs"]
mod options_test;

use crate::models::DistanceModel;
use crate::utils::{OptimizationError, RouteResult};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};

/// Default average vehicle speed, km/h.
pub const DEFAULT_AVERAGE_SPEED: f64 = 30.;
/// Default service time per stop, minutes.
pub const DEFAULT_SERVICE_TIME: f64 = 5.;
/// Default fuel consumption rate, liters per km.
pub const DEFAULT_FUEL_CONSUMPTION_RATE: f64 = 0.3;
/// Default fuel price per liter.
pub const DEFAULT_FUEL_PRICE: f64 = 1.5;

/// An optimization run configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationOptions {
    /// Distance model. Default is great-circle.
    pub distance_model: Option<DistanceModel>,
    /// Average vehicle speed in km/h.
    pub average_speed: Option<f64>,
    /// Default service time per stop in minutes.
    pub service_time: Option<f64>,
    /// Fuel consumption rate in liters per km.
    pub fuel_consumption_rate: Option<f64>,
    /// Fuel price per liter.
    pub fuel_price: Option<f64>,
    /// 2-opt local search settings.
    pub two_opt: Option<TwoOptConfig>,
    /// Genetic algorithm settings.
    pub genetic: Option<GeneticConfig>,
    /// Ant colony optimization settings.
    pub ant_colony: Option<AntColonyConfig>,
    /// Simulated annealing settings.
    pub annealing: Option<AnnealingConfig>,
    /// A random seed. When set, randomized algorithms produce repeatable results.
    pub seed: Option<u64>,
    /// A time limit of a single route optimization in seconds.
    pub time_limit: Option<f64>,
}

/// A 2-opt local search configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwoOptConfig {
    /// Max amount of full passes over all segment pairs. Default is unlimited.
    pub max_passes: Option<usize>,
}

/// A genetic algorithm configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneticConfig {
    /// Population size. Default is `min(100, max(20, 4N))`.
    pub population_size: Option<usize>,
    /// Amount of generations. Default is `min(500, 10N)`.
    pub generations: Option<usize>,
    /// Mutation probability. Default is 0.1.
    pub mutation_rate: Option<f64>,
    /// A share of the best individuals kept unchanged. Default is 0.2.
    pub elite_fraction: Option<f64>,
    /// Tournament size used by selection. Default is 3.
    pub tournament_size: Option<usize>,
}

/// An ant colony optimization configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AntColonyConfig {
    /// Amount of ants. Default is `min(50, 2N)`.
    pub ants: Option<usize>,
    /// Amount of iterations. Default is `min(200, 5N)`.
    pub iterations: Option<usize>,
    /// Pheromone importance. Default is 1.
    pub alpha: Option<f64>,
    /// Distance importance. Default is 2.
    pub beta: Option<f64>,
    /// Evaporation rate. Default is 0.1.
    pub evaporation: Option<f64>,
    /// Deposit constant. Default is 1.
    pub deposit: Option<f64>,
}

/// A simulated annealing configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnealingConfig {
    /// Initial temperature. Default is 1000.
    pub initial_temperature: Option<f64>,
    /// Multiplicative cooling rate applied on each step. Default is 0.995.
    pub cooling_rate: Option<f64>,
    /// Temperature at which annealing stops. Default is 1.
    pub min_temperature: Option<f64>,
}

impl OptimizationOptions {
    /// Returns distance model.
    pub fn distance_model(&self) -> DistanceModel {
        self.distance_model.unwrap_or_default()
    }

    /// Returns average speed in km/h.
    pub fn average_speed(&self) -> f64 {
        self.average_speed.unwrap_or(DEFAULT_AVERAGE_SPEED)
    }

    /// Returns default service time per stop in minutes.
    pub fn service_time(&self) -> f64 {
        self.service_time.unwrap_or(DEFAULT_SERVICE_TIME)
    }

    /// Returns fuel consumption rate in liters per km.
    pub fn fuel_consumption_rate(&self) -> f64 {
        self.fuel_consumption_rate.unwrap_or(DEFAULT_FUEL_CONSUMPTION_RATE)
    }

    /// Returns fuel price per liter.
    pub fn fuel_price(&self) -> f64 {
        self.fuel_price.unwrap_or(DEFAULT_FUEL_PRICE)
    }

    /// Checks that options can be used by optimization.
    pub fn validate(&self) -> RouteResult<()> {
        let errors = [
            check_positive("averageSpeed", self.average_speed),
            check_non_negative("serviceTime", self.service_time),
            check_non_negative("fuelConsumptionRate", self.fuel_consumption_rate),
            check_non_negative("fuelPrice", self.fuel_price),
            check_positive("timeLimit", self.time_limit),
            self.genetic.as_ref().map_or(Ok(()), validate_genetic),
            self.ant_colony.as_ref().map_or(Ok(()), validate_ant_colony),
            self.annealing.as_ref().map_or(Ok(()), validate_annealing),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect::<Vec<_>>();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(OptimizationError::invalid_input(errors.join(", ")))
        }
    }
}

/// Reads options from json.
pub fn read_options<R: Read>(reader: BufReader<R>) -> RouteResult<OptimizationOptions> {
    let options: OptimizationOptions = serde_json::from_reader(reader)?;
    options.validate()?;

    Ok(options)
}

type ValidationResult = Result<(), String>;

fn check_positive(name: &str, value: Option<f64>) -> ValidationResult {
    match value {
        Some(value) if !value.is_finite() || value <= 0. => Err(format!("{name} must be positive, got {value}")),
        _ => Ok(()),
    }
}

fn check_non_negative(name: &str, value: Option<f64>) -> ValidationResult {
    match value {
        Some(value) if !value.is_finite() || value < 0. => Err(format!("{name} must be non-negative, got {value}")),
        _ => Ok(()),
    }
}

fn check_probability(name: &str, value: Option<f64>) -> ValidationResult {
    match value {
        Some(value) if !(0. ..=1.).contains(&value) => Err(format!("{name} must be in [0, 1], got {value}")),
        _ => Ok(()),
    }
}

fn check_non_zero(name: &str, value: Option<usize>) -> ValidationResult {
    match value {
        Some(0) => Err(format!("{name} must be positive")),
        _ => Ok(()),
    }
}

fn validate_genetic(config: &GeneticConfig) -> ValidationResult {
    check_non_zero("genetic.populationSize", config.population_size)?;
    check_non_zero("genetic.tournamentSize", config.tournament_size)?;
    check_probability("genetic.mutationRate", config.mutation_rate)?;
    check_probability("genetic.eliteFraction", config.elite_fraction)
}

fn validate_ant_colony(config: &AntColonyConfig) -> ValidationResult {
    check_non_zero("antColony.ants", config.ants)?;
    check_non_negative("antColony.alpha", config.alpha)?;
    check_non_negative("antColony.beta", config.beta)?;
    check_probability("antColony.evaporation", config.evaporation)?;
    check_positive("antColony.deposit", config.deposit)
}

fn validate_annealing(config: &AnnealingConfig) -> ValidationResult {
    check_positive("annealing.initialTemperature", config.initial_temperature)?;
    check_positive("annealing.minTemperature", config.min_temperature)?;

    match config.cooling_rate {
        Some(rate) if !(rate > 0. && rate < 1.) => Err(format!("annealing.coolingRate must be in (0, 1), got {rate}")),
        _ => Ok(()),
    }
}
