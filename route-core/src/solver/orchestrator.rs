#[cfg(test)]
#[path = "../../tests/unit/solver/orchestrator_test.rs"]
mod orchestrator_test;

use super::*;
use crate::algorithms::AlgorithmKind;
use crate::models::*;
use crate::utils::*;
use std::sync::Arc;

/// Optimizes a visiting order of stops with the algorithm specified by name.
///
/// Unknown algorithm names are not rejected: nearest neighbor with 2-opt is used instead and the
/// requested name is kept in [`OptimizationResult::fallback_from`]. The first stop of the input is
/// treated as a depot: the optimized tour always starts from it. Routes with zero or one stop get
/// a zero cost result without running any algorithm.
pub fn optimize(
    stops: &[Stop],
    algorithm: &str,
    options: &OptimizationOptions,
    environment: &Environment,
) -> RouteResult<OptimizationResult> {
    let timer = Timer::start();

    options.validate()?;
    validate_stops(stops)?;
    let matrix = DistanceMatrix::new(stops, &options.distance_model())?;
    let (kind, fallback_from) = resolve_algorithm(algorithm, environment);

    let original = identity_sequence(stops.len());
    let original_metrics = RouteMetrics::evaluate_with_stops(&original, stops, &matrix, options);

    if stops.len() <= 1 {
        return Ok(OptimizationResult {
            algorithm: kind.name().to_string(),
            fallback_from,
            stops: stops.to_vec(),
            sequence: original,
            original_metrics,
            optimized_metrics: original_metrics,
            improvement_percentage: 0.,
            geometry: create_geometry(stops),
            is_partial: false,
            duration_ms: timer.elapsed_millis() as u64,
        });
    }

    let run_environment = create_run_environment(options, environment);
    let outcome = Timer::measure_duration_with_callback(
        || kind.create(options).optimize(&matrix, &run_environment),
        |duration| {
            (environment.logger)(&format!(
                "{} stops optimized with '{}' in {}ms",
                stops.len(),
                kind,
                duration.as_millis()
            ))
        },
    );

    if !is_permutation(&outcome.sequence, stops.len()) {
        return Err(OptimizationError::algorithm_failure(format!(
            "'{kind}' returned an invalid visiting order: {:?}",
            outcome.sequence
        )));
    }

    if outcome.is_partial {
        (environment.logger)(&format!("'{kind}' was interrupted by quota, the best tour found so far is used"));
    }

    let sequence = rotate_to_start(outcome.sequence, 0);
    let optimized_metrics = RouteMetrics::evaluate_with_stops(&sequence, stops, &matrix, options);
    let optimized_stops = sequence.iter().map(|&index| stops[index].clone()).collect::<Vec<_>>();

    Ok(OptimizationResult {
        algorithm: kind.name().to_string(),
        fallback_from,
        geometry: create_geometry(&optimized_stops),
        stops: optimized_stops,
        sequence,
        original_metrics,
        optimized_metrics,
        improvement_percentage: improvement_percentage(
            original_metrics.total_distance(),
            optimized_metrics.total_distance(),
        ),
        is_partial: outcome.is_partial,
        duration_ms: timer.elapsed_millis() as u64,
    })
}

/// Checks stop attributes which are not covered by distance matrix construction.
fn validate_stops(stops: &[Stop]) -> RouteResult<()> {
    stops.iter().try_for_each(|stop| match stop.service_time {
        Some(service_time) if !service_time.is_finite() || service_time < 0. => Err(OptimizationError::invalid_input(
            format!("stop '{}' has invalid service time: {service_time}", stop.id),
        )),
        _ => Ok(()),
    })
}

/// Resolves algorithm kind by name. Returns the requested name as a second value when the
/// default algorithm is used instead.
fn resolve_algorithm(algorithm: &str, environment: &Environment) -> (AlgorithmKind, Option<String>) {
    match AlgorithmKind::from_name(algorithm) {
        Some(kind) => (kind, None),
        None => {
            let kind = AlgorithmKind::NearestNeighbor;
            (environment.logger)(&format!("unknown algorithm '{algorithm}', fallback to '{kind}'"));

            (kind, Some(algorithm.to_string()))
        }
    }
}

/// Creates an environment of a single run: a repeatable random when seed is set and a quota
/// which combines time limit with the outer one.
fn create_run_environment(options: &OptimizationOptions, environment: &Environment) -> Environment {
    Environment {
        random: match options.seed {
            Some(seed) => Arc::new(DefaultRandom::new_repeatable(seed)),
            None => environment.random.clone(),
        },
        quota: create_quota_with_time_limit(options.time_limit, environment.quota.clone()),
        logger: environment.logger.clone(),
    }
}
