#[cfg(test)]
#[path = "../../tests/unit/algorithms/annealing_test.rs"]
mod annealing_test;

use super::*;
use crate::models::{AnnealingConfig, identity_sequence};

/// Simulated annealing over swap moves starting from the input order. Worse tours are accepted
/// with probability `exp(-delta / temperature)`, the best tour seen is returned.
pub struct SimulatedAnnealing {
    config: AnnealingConfig,
}

/// Simulated annealing parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnealingParams {
    /// Initial temperature.
    pub initial_temperature: f64,
    /// Multiplicative cooling rate.
    pub cooling_rate: f64,
    /// Temperature at which annealing stops.
    pub min_temperature: f64,
}

impl From<&AnnealingConfig> for AnnealingParams {
    fn from(config: &AnnealingConfig) -> Self {
        Self {
            initial_temperature: config.initial_temperature.unwrap_or(1000.),
            cooling_rate: config.cooling_rate.unwrap_or(0.995),
            min_temperature: config.min_temperature.unwrap_or(1.),
        }
    }
}

impl SimulatedAnnealing {
    /// Creates a new instance of `SimulatedAnnealing`.
    pub fn new(config: AnnealingConfig) -> Self {
        Self { config }
    }
}

impl TourOptimizer for SimulatedAnnealing {
    fn name(&self) -> &'static str {
        AlgorithmKind::SimulatedAnnealing.name()
    }

    fn optimize(&self, matrix: &DistanceMatrix, environment: &Environment) -> TourOutcome {
        let size = matrix.size();
        let mut current = identity_sequence(size);
        if size <= 2 {
            return TourOutcome::new(current, false);
        }

        let params = AnnealingParams::from(&self.config);
        // NOTE cooling rate outside of (0, 1) never reaches min temperature
        if !(params.cooling_rate > 0. && params.cooling_rate < 1.) {
            return TourOutcome::new(current, false);
        }

        let random = environment.random.as_ref();

        let mut current_distance = matrix.tour_distance(&current);
        let mut best = current.clone();
        let mut best_distance = current_distance;
        let mut history = vec![];
        let mut is_partial = false;

        let mut temperature = params.initial_temperature;
        while temperature >= params.min_temperature {
            if environment.is_quota_reached() {
                is_partial = true;
                break;
            }

            let i = random.uniform_index(size);
            let j = random.uniform_index(size);
            current.swap(i, j);

            let neighbor_distance = matrix.tour_distance(&current);
            let delta = neighbor_distance - current_distance;

            if delta < 0. || random.uniform_real(0., 1.) < (-delta / temperature).exp() {
                current_distance = neighbor_distance;

                if current_distance < best_distance {
                    best_distance = current_distance;
                    best.clone_from(&current);
                }
            } else {
                current.swap(i, j);
            }

            history.push(best_distance);
            temperature *= params.cooling_rate;
        }

        TourOutcome { sequence: best, is_partial, history }
    }
}
