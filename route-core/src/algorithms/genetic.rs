#[cfg(test)]
#[path = "../../tests/unit/algorithms/genetic_test.rs"]
mod genetic_test;

use super::*;
use crate::models::{GeneticConfig, identity_sequence};
use crate::utils::{Random, compare_floats};
use rand::seq::SliceRandom;

/// A genetic algorithm where a chromosome is a visiting order. It uses tournament selection,
/// order crossover (OX), swap mutation and elitism, and runs a fixed amount of generations.
pub struct GeneticAlgorithm {
    config: GeneticConfig,
}

/// Genetic algorithm parameters resolved for a specific problem size.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneticParams {
    /// Population size.
    pub population_size: usize,
    /// Amount of generations.
    pub generations: usize,
    /// Mutation probability.
    pub mutation_rate: f64,
    /// Amount of the best individuals kept unchanged.
    pub elite_size: usize,
    /// Tournament size.
    pub tournament_size: usize,
}

impl GeneticParams {
    /// Resolves parameters using configuration and amount of stops.
    pub fn new(config: &GeneticConfig, size: usize) -> Self {
        let population_size = config.population_size.unwrap_or_else(|| (4 * size).clamp(20, 100)).max(1);
        let generations = config.generations.unwrap_or_else(|| (10 * size).min(500));
        let mutation_rate = config.mutation_rate.unwrap_or(0.1);
        let elite_fraction = config.elite_fraction.unwrap_or(0.2);
        let elite_size = ((population_size as f64 * elite_fraction).floor() as usize).min(population_size);
        let tournament_size = config.tournament_size.unwrap_or(3);

        Self { population_size, generations, mutation_rate, elite_size, tournament_size }
    }
}

#[derive(Clone)]
struct Individual {
    sequence: Sequence,
    distance: f64,
}

impl Individual {
    fn new(sequence: Sequence, matrix: &DistanceMatrix) -> Self {
        let distance = matrix.tour_distance(&sequence);
        Self { sequence, distance }
    }

    fn fitness(&self) -> f64 {
        fitness(self.distance)
    }
}

/// Returns a fitness of a tour: the shorter tour, the higher fitness.
pub fn fitness(distance: f64) -> f64 {
    if distance > 0. { 1. / distance } else { f64::MAX }
}

impl GeneticAlgorithm {
    /// Creates a new instance of `GeneticAlgorithm`.
    pub fn new(config: GeneticConfig) -> Self {
        Self { config }
    }
}

impl TourOptimizer for GeneticAlgorithm {
    fn name(&self) -> &'static str {
        AlgorithmKind::Genetic.name()
    }

    fn optimize(&self, matrix: &DistanceMatrix, environment: &Environment) -> TourOutcome {
        let size = matrix.size();
        if size <= 1 {
            return TourOutcome::new(identity_sequence(size), false);
        }

        let params = GeneticParams::new(&self.config, size);
        let random = environment.random.as_ref();

        let mut population = create_population(&params, matrix, random);
        let mut best = population[0].clone();
        let mut history = Vec::with_capacity(params.generations);
        let mut is_partial = false;

        for _ in 0..params.generations {
            if environment.is_quota_reached() {
                is_partial = true;
                break;
            }

            population = create_generation(&population, &params, matrix, random);

            let generation_best = &population[0];
            if generation_best.distance < best.distance {
                best = generation_best.clone();
            }
            history.push(generation_best.distance);
        }

        TourOutcome { sequence: best.sequence, is_partial, history }
    }
}

fn create_population(params: &GeneticParams, matrix: &DistanceMatrix, random: &dyn Random) -> Vec<Individual> {
    let mut rng = random.get_rng();

    let mut population = (0..params.population_size)
        .map(|_| {
            let mut sequence = identity_sequence(matrix.size());
            sequence.shuffle(&mut rng);

            Individual::new(sequence, matrix)
        })
        .collect::<Vec<_>>();

    sort_by_fitness(&mut population);

    population
}

/// Keeps elites and replaces the rest of the population with offspring. The population passed in
/// is expected to be sorted by fitness.
fn create_generation(
    population: &[Individual],
    params: &GeneticParams,
    matrix: &DistanceMatrix,
    random: &dyn Random,
) -> Vec<Individual> {
    let offspring_size = params.population_size - params.elite_size;
    let mut next = population.iter().take(params.elite_size).cloned().collect::<Vec<_>>();

    let mut offspring = Vec::with_capacity(offspring_size + 1);
    while offspring.len() < offspring_size {
        let first = select_tournament(population, params.tournament_size, random);
        let second = select_tournament(population, params.tournament_size, random);

        let (start, end) = select_segment(matrix.size(), random);
        let children = [
            order_crossover(&first.sequence, &second.sequence, start, end),
            order_crossover(&second.sequence, &first.sequence, start, end),
        ];

        offspring.extend(children.into_iter().map(|mut child| {
            if random.is_hit(params.mutation_rate) {
                swap_mutation(&mut child, random);
            }

            Individual::new(child, matrix)
        }));
    }

    offspring.truncate(offspring_size);
    next.extend(offspring);
    sort_by_fitness(&mut next);

    next
}

fn sort_by_fitness(population: &mut [Individual]) {
    population.sort_by(|a, b| compare_floats(b.fitness(), a.fitness()));
}

/// Picks the fittest of randomly chosen individuals (with repetitions).
fn select_tournament<'a>(population: &'a [Individual], tournament_size: usize, random: &dyn Random) -> &'a Individual {
    (0..tournament_size.max(1))
        .map(|_| &population[random.uniform_index(population.len())])
        .max_by(|a, b| compare_floats(a.fitness(), b.fitness()))
        .unwrap_or(&population[0])
}

fn select_segment(size: usize, random: &dyn Random) -> (usize, usize) {
    let a = random.uniform_index(size);
    let b = random.uniform_index(size);

    (a.min(b), a.max(b))
}

/// Order crossover (OX): the child gets the `[start..=end]` segment of the first parent at the same
/// positions, remaining positions are filled with the values of the second parent in their relative
/// order, skipping values already taken from the segment.
pub fn order_crossover(first: &[usize], second: &[usize], start: usize, end: usize) -> Sequence {
    let size = first.len();
    let segment = &first[start..=end];

    let mut used = vec![false; size];
    segment.iter().for_each(|&value| used[value] = true);

    let mut rest = second.iter().copied().filter(|&value| !used[value]);

    let mut child = Vec::with_capacity(size);
    child.extend(rest.by_ref().take(start));
    child.extend_from_slice(segment);
    child.extend(rest);

    child
}

/// Swaps two random positions.
pub fn swap_mutation(sequence: &mut [usize], random: &dyn Random) {
    let i = random.uniform_index(sequence.len());
    let j = random.uniform_index(sequence.len());

    sequence.swap(i, j);
}
