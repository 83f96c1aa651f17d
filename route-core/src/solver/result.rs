use crate::models::{Coordinate, RouteMetrics, Sequence, Stop};
use serde::{Deserialize, Serialize};

/// A result of a single route optimization.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// A canonical name of the algorithm which was used.
    pub algorithm: String,
    /// A requested algorithm name when it was not recognized and the default was used instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_from: Option<String>,
    /// Stops in optimized visiting order.
    pub stops: Vec<Stop>,
    /// Optimized visiting order as indices of the input stop list.
    pub sequence: Sequence,
    /// Metrics of the input order.
    pub original_metrics: RouteMetrics,
    /// Metrics of the optimized order.
    pub optimized_metrics: RouteMetrics,
    /// Distance improvement in percents, negative when the optimized tour is longer.
    pub improvement_percentage: f64,
    /// Stop coordinates in visiting order including the return to the first stop.
    pub geometry: Vec<Coordinate>,
    /// True if the algorithm was interrupted by the time limit and returned the best tour found so far.
    pub is_partial: bool,
    /// Run duration in milliseconds.
    pub duration_ms: u64,
}

impl OptimizationResult {
    /// Returns saved distance in km.
    pub fn distance_saved(&self) -> f64 {
        self.original_metrics.total_distance() - self.optimized_metrics.total_distance()
    }

    /// Returns saved time in minutes.
    pub fn time_saved(&self) -> f64 {
        self.original_metrics.total_time() - self.optimized_metrics.total_time()
    }

    /// Returns saved fuel cost.
    pub fn cost_saved(&self) -> f64 {
        self.original_metrics.fuel_cost() - self.optimized_metrics.fuel_cost()
    }
}

/// Calculates relative improvement in percents. Returns zero when the original value is zero.
pub fn improvement_percentage(original: f64, optimized: f64) -> f64 {
    if original > 0. { (original - optimized) / original * 100. } else { 0. }
}

/// Creates a closed polyline from stops in visiting order.
pub fn create_geometry(stops: &[Stop]) -> Vec<Coordinate> {
    let closing = if stops.len() > 1 { stops.first() } else { None };

    stops.iter().chain(closing).map(|stop| stop.location).collect()
}
