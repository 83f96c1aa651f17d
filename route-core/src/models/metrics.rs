#[cfg(test)]
#[path = "../../tests/unit/models/metrics_test.rs"]
mod metrics_test;

use crate::models::{DistanceMatrix, OptimizationOptions, Stop};
use serde::{Deserialize, Serialize};

/// Route metrics derived from a visiting order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMetrics {
    total_distance: f64,
    total_time: f64,
    fuel_cost: f64,
}

impl RouteMetrics {
    /// Evaluates metrics of the closed tour using default service time per stop.
    pub fn evaluate(sequence: &[usize], matrix: &DistanceMatrix, options: &OptimizationOptions) -> Self {
        let service_time = sequence.len() as f64 * options.service_time();

        Self::evaluate_with_service_time(sequence, matrix, options, service_time)
    }

    /// Evaluates metrics of the closed tour using service time of each stop, falling back to
    /// the default when a stop has none.
    pub fn evaluate_with_stops(
        sequence: &[usize],
        stops: &[Stop],
        matrix: &DistanceMatrix,
        options: &OptimizationOptions,
    ) -> Self {
        let default_service_time = options.service_time();
        let service_time =
            sequence.iter().map(|&index| stops[index].service_time.unwrap_or(default_service_time)).sum::<f64>();

        Self::evaluate_with_service_time(sequence, matrix, options, service_time)
    }

    fn evaluate_with_service_time(
        sequence: &[usize],
        matrix: &DistanceMatrix,
        options: &OptimizationOptions,
        service_time: f64,
    ) -> Self {
        if sequence.len() <= 1 {
            return Self::default();
        }

        let total_distance = matrix.tour_distance(sequence);
        let total_time = total_distance / options.average_speed() * 60. + service_time;
        let fuel_cost = total_distance * options.fuel_consumption_rate() * options.fuel_price();

        Self { total_distance, total_time, fuel_cost }
    }

    /// Total distance in km.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Total time in minutes: driving plus service.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Fuel cost in currency units.
    pub fn fuel_cost(&self) -> f64 {
        self.fuel_cost
    }
}
