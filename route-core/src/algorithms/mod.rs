//! This module contains heuristics which build a visiting order of stops.
//!
//! Every algorithm receives a distance matrix and returns a permutation of stop indices which
//! represents a closed tour. Algorithms keep no state between calls and get randomness and a
//! deadline only from the [`Environment`].

#[cfg(test)]
#[path = "../../tests/unit/algorithms/algorithms_test.rs"]
mod algorithms_test;

use crate::models::{DistanceMatrix, OptimizationOptions, Sequence};
use crate::utils::Environment;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

mod annealing;
pub use self::annealing::*;

mod ant_colony;
pub use self::ant_colony::*;

mod genetic;
pub use self::genetic::*;

mod nearest_neighbor;
pub use self::nearest_neighbor::*;

mod two_opt;
pub use self::two_opt::*;

/// A result of a single algorithm run.
#[derive(Clone, Debug, Default)]
pub struct TourOutcome {
    /// The best visiting order found.
    pub sequence: Sequence,
    /// True if the algorithm was stopped by a quota before finishing its budget.
    pub is_partial: bool,
    /// The best tour length observed on each iteration (generation, ant colony iteration,
    /// annealing step or local search pass).
    pub history: Vec<f64>,
}

impl TourOutcome {
    /// Creates an outcome without history.
    pub fn new(sequence: Sequence, is_partial: bool) -> Self {
        Self { sequence, is_partial, history: vec![] }
    }
}

/// Builds a closed tour over all stops of the distance matrix.
pub trait TourOptimizer {
    /// Returns algorithm name.
    fn name(&self) -> &'static str;

    /// Returns a visiting order of all stops.
    fn optimize(&self, matrix: &DistanceMatrix, environment: &Environment) -> TourOutcome;
}

/// Lists supported algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    /// Nearest neighbor construction refined with 2-opt. Historically also known as "dijkstra"
    /// although no shortest path search is involved.
    NearestNeighbor,
    /// Genetic algorithm.
    Genetic,
    /// Ant colony optimization.
    AntColony,
    /// Simulated annealing.
    SimulatedAnnealing,
}

impl AlgorithmKind {
    /// All supported algorithms.
    pub const ALL: [AlgorithmKind; 4] = [
        AlgorithmKind::NearestNeighbor,
        AlgorithmKind::Genetic,
        AlgorithmKind::AntColony,
        AlgorithmKind::SimulatedAnnealing,
    ];

    /// Parses an algorithm name ignoring case and separators: `ant-colony`, `ant_colony` and
    /// `antColony` are the same. Returns `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect::<String>();

        match normalized.as_str() {
            "nearestneighbor" | "dijkstra" => Some(Self::NearestNeighbor),
            "genetic" => Some(Self::Genetic),
            "antcolony" => Some(Self::AntColony),
            "simulatedannealing" => Some(Self::SimulatedAnnealing),
            _ => None,
        }
    }

    /// Returns a canonical algorithm name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NearestNeighbor => "nearest-neighbor",
            Self::Genetic => "genetic",
            Self::AntColony => "ant-colony",
            Self::SimulatedAnnealing => "simulated-annealing",
        }
    }

    /// Creates an algorithm configured from options.
    pub fn create(&self, options: &OptimizationOptions) -> Box<dyn TourOptimizer + Send + Sync> {
        match self {
            Self::NearestNeighbor => {
                Box::new(NearestNeighborTwoOpt::new(options.two_opt.clone().unwrap_or_default()))
            }
            Self::Genetic => Box::new(GeneticAlgorithm::new(options.genetic.clone().unwrap_or_default())),
            Self::AntColony => Box::new(AntColony::new(options.ant_colony.clone().unwrap_or_default())),
            Self::SimulatedAnnealing => {
                Box::new(SimulatedAnnealing::new(options.annealing.clone().unwrap_or_default()))
            }
        }
    }
}

impl Display for AlgorithmKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
