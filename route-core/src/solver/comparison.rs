#[cfg(test)]
#[path = "../../tests/unit/solver/comparison_test.rs"]
mod comparison_test;

use super::*;
use crate::algorithms::AlgorithmKind;
use crate::models::{OptimizationOptions, Stop};
use crate::utils::{Environment, RouteResult, compare_floats};
use serde::{Deserialize, Serialize};

/// Results of all algorithms run on the same stops.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmComparison {
    /// Results sorted by optimized distance, the shortest first.
    pub results: Vec<OptimizationResult>,
}

impl AlgorithmComparison {
    /// Returns the result with the shortest tour.
    pub fn best(&self) -> Option<&OptimizationResult> {
        self.results.first()
    }

    /// Returns a result of specific algorithm.
    pub fn get(&self, kind: AlgorithmKind) -> Option<&OptimizationResult> {
        self.results.iter().find(|result| result.algorithm == kind.name())
    }
}

/// Runs every supported algorithm on the same stops and ranks results by optimized distance.
/// Algorithms with equal distance keep the order of [`AlgorithmKind::ALL`].
pub fn compare_algorithms(
    stops: &[Stop],
    options: &OptimizationOptions,
    environment: &Environment,
) -> RouteResult<AlgorithmComparison> {
    let mut results = AlgorithmKind::ALL
        .iter()
        .map(|kind| optimize(stops, kind.name(), options, environment))
        .collect::<RouteResult<Vec<_>>>()?;

    results.sort_by(|a, b| {
        compare_floats(a.optimized_metrics.total_distance(), b.optimized_metrics.total_distance())
    });

    if let Some(best) = results.first() {
        (environment.logger)(&format!(
            "best algorithm is '{}' with {:.3}km ({:.2}% improvement)",
            best.algorithm,
            best.optimized_metrics.total_distance(),
            best.improvement_percentage
        ));
    }

    Ok(AlgorithmComparison { results })
}
