#[cfg(test)]
#[path = "../../tests/unit/algorithms/nearest_neighbor_test.rs"]
mod nearest_neighbor_test;

use super::*;
use crate::models::{TwoOptConfig, identity_sequence};
use crate::utils::compare_floats;

/// Builds a tour starting from the first stop by repeatedly moving to the nearest unvisited one.
/// Ties are resolved in favor of the lowest index, so the result is deterministic.
pub fn nearest_neighbor(matrix: &DistanceMatrix) -> Sequence {
    let size = matrix.size();
    if size <= 1 {
        return identity_sequence(size);
    }

    let mut visited = vec![false; size];
    let mut sequence = Vec::with_capacity(size);

    let mut current = 0;
    visited[current] = true;
    sequence.push(current);

    while sequence.len() < size {
        let Some(next) = (0..size)
            .filter(|&index| !visited[index])
            .min_by(|&a, &b| compare_floats(matrix.distance(current, a), matrix.distance(current, b)))
        else {
            break;
        };

        visited[next] = true;
        sequence.push(next);
        current = next;
    }

    sequence
}

/// Nearest neighbor construction followed by 2-opt refinement.
pub struct NearestNeighborTwoOpt {
    config: TwoOptConfig,
}

impl NearestNeighborTwoOpt {
    /// Creates a new instance of `NearestNeighborTwoOpt`.
    pub fn new(config: TwoOptConfig) -> Self {
        Self { config }
    }
}

impl TourOptimizer for NearestNeighborTwoOpt {
    fn name(&self) -> &'static str {
        AlgorithmKind::NearestNeighbor.name()
    }

    fn optimize(&self, matrix: &DistanceMatrix, environment: &Environment) -> TourOutcome {
        two_opt(nearest_neighbor(matrix), matrix, self.config.max_passes, environment)
    }
}
