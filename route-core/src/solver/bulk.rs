#[cfg(test)]
#[path = "../../tests/unit/solver/bulk_test.rs"]
mod bulk_test;

use super::*;
use crate::models::{OptimizationOptions, Stop};
use crate::utils::*;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::hash::{Hash, Hasher};
use std::panic::{AssertUnwindSafe, catch_unwind};

/// A request to optimize a single route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    /// An opaque route id.
    pub route_id: String,
    /// Route stops in their current visiting order.
    pub stops: Vec<Stop>,
}

/// A successfully optimized route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSuccess {
    /// Route id.
    pub route_id: String,
    /// Optimization result.
    pub result: OptimizationResult,
}

/// A route which cannot be optimized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteFailure {
    /// Route id.
    pub route_id: String,
    /// A human-readable failure reason.
    pub reason: String,
}

/// A result of batch optimization. Both lists keep the order of requests.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkOptimizationResult {
    /// Optimized routes.
    pub succeeded: Vec<RouteSuccess>,
    /// Failed routes.
    pub failed: Vec<RouteFailure>,
    /// Total saved distance in km over all optimized routes.
    pub total_distance_saved: f64,
    /// Total saved time in minutes over all optimized routes.
    pub total_time_saved: f64,
    /// Total saved fuel cost over all optimized routes.
    pub total_cost_saved: f64,
}

impl BulkOptimizationResult {
    fn add(mut self, route_id: &str, outcome: RouteResult<OptimizationResult>) -> Self {
        match outcome {
            Ok(result) => {
                self.total_distance_saved += result.distance_saved();
                self.total_time_saved += result.time_saved();
                self.total_cost_saved += result.cost_saved();
                self.succeeded.push(RouteSuccess { route_id: route_id.to_string(), result });
            }
            Err(err) => self.failed.push(RouteFailure { route_id: route_id.to_string(), reason: err.to_string() }),
        }

        self
    }
}

/// Optimizes many routes in parallel using at most `max_concurrency` worker threads (amount of
/// CPUs by default). A failure of one route is reported in the `failed` list and does not affect
/// other routes. When options have a time limit, it is applied to each route independently.
///
/// With a seed in options, each route gets its own seed derived from the route id, so results
/// do not depend on the order of requests or on scheduling.
pub fn optimize_many(
    requests: &[RouteRequest],
    algorithm: &str,
    options: &OptimizationOptions,
    max_concurrency: Option<usize>,
    environment: &Environment,
) -> RouteResult<BulkOptimizationResult> {
    options.validate()?;
    let pool = ThreadPool::new(max_concurrency.unwrap_or_else(get_cpus))?;

    let outcomes = Timer::measure_duration_with_callback(
        || {
            pool.execute(|| {
                parallel_collect(requests, |request| optimize_route(request, algorithm, options, environment))
            })
        },
        |duration| (environment.logger)(&format!("{} routes processed in {}ms", requests.len(), duration.as_millis())),
    );

    let result = requests
        .iter()
        .zip(outcomes)
        .fold(BulkOptimizationResult::default(), |acc, (request, outcome)| acc.add(&request.route_id, outcome));

    result.failed.iter().for_each(|failure| {
        (environment.logger)(&format!("route '{}' cannot be optimized: {}", failure.route_id, failure.reason))
    });
    (environment.logger)(&format!(
        "routes optimized: {}, failed: {}, distance saved: {:.3}km, time saved: {:.1}min, cost saved: {:.2}",
        result.succeeded.len(),
        result.failed.len(),
        result.total_distance_saved,
        result.total_time_saved,
        result.total_cost_saved
    ));

    Ok(result)
}

fn optimize_route(
    request: &RouteRequest,
    algorithm: &str,
    options: &OptimizationOptions,
    environment: &Environment,
) -> RouteResult<OptimizationResult> {
    let options = OptimizationOptions {
        seed: options.seed.map(|seed| seed ^ hash_route_id(&request.route_id)),
        ..options.clone()
    };

    catch_unwind(AssertUnwindSafe(|| optimize(&request.stops, algorithm, &options, environment))).unwrap_or_else(
        |payload| {
            Err(OptimizationError::algorithm_failure(format!("panic: {}", get_panic_message(payload.as_ref()))))
        },
    )
}

fn hash_route_id(route_id: &str) -> u64 {
    let mut hasher = FxHasher::default();
    route_id.hash(&mut hasher);

    hasher.finish()
}

fn get_panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| message.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown reason".to_string())
}
