//! Route core crate contains building blocks to optimize a visiting order of waste collection stops.
//!
//! # Overview
//!
//! A single collection vehicle visits a set of stops (waste bins) and returns to the first one.
//! The crate treats this as a closed tour problem (TSP) and solves it approximately with one of
//! interchangeable heuristics:
//!
//! - nearest neighbor construction refined by 2-opt local search
//! - genetic algorithm with order crossover
//! - ant colony optimization
//! - simulated annealing
//!
//! The entry points are [`solver::optimize`] for a single route, [`solver::optimize_many`] for a
//! batch of routes and [`solver::compare_algorithms`] to run every algorithm on the same stops.
//!
//! Every run is stateless: a distance matrix, pheromone trails or populations are created at the
//! beginning of the call and dropped at its end.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
#[allow(missing_docs)]
pub mod helpers;

pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
