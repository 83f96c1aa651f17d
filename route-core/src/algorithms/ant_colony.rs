#[cfg(test)]
#[path = "../../tests/unit/algorithms/ant_colony_test.rs"]
mod ant_colony_test;

use super::*;
use crate::models::{AntColonyConfig, identity_sequence};
use crate::utils::{Random, compare_floats};

/// Ant colony optimization: ants build tours guided by pheromone trails which are reinforced on
/// edges of short tours and evaporate over time. The globally best tour is returned.
pub struct AntColony {
    config: AntColonyConfig,
}

/// Ant colony parameters resolved for a specific problem size.
#[derive(Clone, Debug, PartialEq)]
pub struct AntColonyParams {
    /// Amount of ants which build a tour on each iteration.
    pub ants: usize,
    /// Amount of iterations.
    pub iterations: usize,
    /// Pheromone importance.
    pub alpha: f64,
    /// Distance importance.
    pub beta: f64,
    /// Evaporation rate.
    pub evaporation: f64,
    /// Deposit constant.
    pub deposit: f64,
}

impl AntColonyParams {
    /// Resolves parameters using configuration and amount of stops.
    pub fn new(config: &AntColonyConfig, size: usize) -> Self {
        Self {
            ants: config.ants.unwrap_or_else(|| (2 * size).min(50)).max(1),
            iterations: config.iterations.unwrap_or_else(|| (5 * size).min(200)),
            alpha: config.alpha.unwrap_or(1.),
            beta: config.beta.unwrap_or(2.),
            evaporation: config.evaporation.unwrap_or(0.1),
            deposit: config.deposit.unwrap_or(1.),
        }
    }
}

/// Keeps pheromone level of each directed edge.
struct PheromoneMatrix {
    size: usize,
    values: Vec<f64>,
}

impl PheromoneMatrix {
    fn new(size: usize, initial: f64) -> Self {
        Self { size, values: vec![initial; size * size] }
    }

    fn get(&self, from: usize, to: usize) -> f64 {
        self.values[from * self.size + to]
    }

    fn evaporate(&mut self, rate: f64) {
        self.values.iter_mut().for_each(|value| *value *= 1. - rate);
    }

    /// Adds given amount on every edge of the closed tour in both directions.
    fn deposit(&mut self, tour: &[usize], amount: f64) {
        let closing = tour.last().zip(tour.first()).map(|(&from, &to)| (from, to));

        tour.windows(2).map(|pair| (pair[0], pair[1])).chain(closing).for_each(|(from, to)| {
            self.values[from * self.size + to] += amount;
            self.values[to * self.size + from] += amount;
        });
    }
}

impl AntColony {
    /// Creates a new instance of `AntColony`.
    pub fn new(config: AntColonyConfig) -> Self {
        Self { config }
    }
}

impl TourOptimizer for AntColony {
    fn name(&self) -> &'static str {
        AlgorithmKind::AntColony.name()
    }

    fn optimize(&self, matrix: &DistanceMatrix, environment: &Environment) -> TourOutcome {
        let size = matrix.size();
        if size <= 1 {
            return TourOutcome::new(identity_sequence(size), false);
        }

        let params = AntColonyParams::new(&self.config, size);
        let random = environment.random.as_ref();

        let mut pheromones = PheromoneMatrix::new(size, 1.);
        let mut best: Option<(Sequence, f64)> = None;
        let mut history = Vec::with_capacity(params.iterations);
        let mut is_partial = false;

        for _ in 0..params.iterations {
            if environment.is_quota_reached() {
                is_partial = true;
                break;
            }

            let tours = (0..params.ants)
                .map(|_| {
                    let tour = build_tour(matrix, &pheromones, &params, random);
                    let distance = matrix.tour_distance(&tour);
                    (tour, distance)
                })
                .collect::<Vec<_>>();

            pheromones.evaporate(params.evaporation);
            tours.iter().filter(|(_, distance)| *distance > 0.).for_each(|(tour, distance)| {
                pheromones.deposit(tour, params.deposit / distance);
            });

            let Some((iteration_best, iteration_distance)) =
                tours.into_iter().min_by(|(_, a), (_, b)| compare_floats(*a, *b))
            else {
                continue;
            };

            history.push(iteration_distance);

            if best.as_ref().is_none_or(|(_, best_distance)| iteration_distance < *best_distance) {
                best = Some((iteration_best, iteration_distance));
            }
        }

        let sequence = best.map(|(sequence, _)| sequence).unwrap_or_else(|| identity_sequence(size));

        TourOutcome { sequence, is_partial, history }
    }
}

/// Builds a tour of a single ant starting from the first stop.
fn build_tour(
    matrix: &DistanceMatrix,
    pheromones: &PheromoneMatrix,
    params: &AntColonyParams,
    random: &dyn Random,
) -> Sequence {
    let size = matrix.size();
    let mut visited = vec![false; size];
    let mut tour = Vec::with_capacity(size);

    let mut current = 0;
    visited[current] = true;
    tour.push(current);

    while tour.len() < size {
        let candidates = (0..size).filter(|&index| !visited[index]).collect::<Vec<_>>();
        let Some(next) = select_next(current, &candidates, matrix, pheromones, params, random) else {
            break;
        };

        visited[next] = true;
        tour.push(next);
        current = next;
    }

    tour
}

/// Selects the next stop with roulette wheel over candidates. Probability of each candidate is
/// proportional to `pheromone^alpha * (1 / distance)^beta`. A candidate at zero distance is
/// taken immediately.
fn select_next(
    current: usize,
    candidates: &[usize],
    matrix: &DistanceMatrix,
    pheromones: &PheromoneMatrix,
    params: &AntColonyParams,
    random: &dyn Random,
) -> Option<usize> {
    if let Some(&same_place) = candidates.iter().find(|&&candidate| matrix.distance(current, candidate) <= 0.) {
        return Some(same_place);
    }

    let weights = candidates
        .iter()
        .map(|&candidate| {
            let pheromone = pheromones.get(current, candidate).powf(params.alpha);
            let visibility = (1. / matrix.distance(current, candidate)).powf(params.beta);

            pheromone * visibility
        })
        .collect::<Vec<_>>();

    let total = weights.iter().sum::<f64>();
    if !total.is_finite() || total <= 0. {
        // NOTE weights underflow: fallback to the closest candidate
        return candidates
            .iter()
            .copied()
            .min_by(|&a, &b| compare_floats(matrix.distance(current, a), matrix.distance(current, b)));
    }

    let threshold = random.uniform_real(0., 1.) * total;
    let mut cumulative = 0.;

    candidates
        .iter()
        .zip(weights.iter())
        .find(|&(_, weight)| {
            cumulative += weight;
            cumulative > threshold
        })
        .map(|(&candidate, _)| candidate)
        .or_else(|| candidates.last().copied())
}
