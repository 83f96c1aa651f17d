#[cfg(test)]
#[path = "../../tests/unit/algorithms/two_opt_test.rs"]
mod two_opt_test;

use super::*;

/// A minimal tour length decrease which is considered as improvement, absorbs rounding noise.
const IMPROVEMENT_THRESHOLD: f64 = 1E-9;

/// Implements a classical TSP's 2-opt local search: for every pair of positions `1 <= i < j < N`,
/// the segment `[i..=j]` is reversed and the change is kept if it strictly shortens the closed tour.
/// Passes are repeated until no improvement is found, `max_passes` is reached or quota is over.
/// The first stop stays in place. The returned tour is never longer than the given one.
///
/// The tour length is recomputed from scratch for every candidate.
/// For algorithm details, see https://en.wikipedia.org/wiki/2-opt
pub fn two_opt(
    sequence: Sequence,
    matrix: &DistanceMatrix,
    max_passes: Option<usize>,
    environment: &Environment,
) -> TourOutcome {
    let size = sequence.len();
    let mut best = sequence;
    let mut best_distance = matrix.tour_distance(&best);
    let mut history = vec![best_distance];

    if size < 4 {
        return TourOutcome { sequence: best, is_partial: false, history };
    }

    let mut passes = 0;
    let mut has_improvement = true;
    let mut is_partial = false;

    while has_improvement && max_passes.is_none_or(|max_passes| passes < max_passes) {
        if environment.is_quota_reached() {
            is_partial = true;
            break;
        }

        has_improvement = false;
        passes += 1;

        for i in 1..size - 1 {
            for j in (i + 1)..size {
                best[i..=j].reverse();
                let distance = matrix.tour_distance(&best);

                if best_distance - distance > IMPROVEMENT_THRESHOLD {
                    best_distance = distance;
                    has_improvement = true;
                } else {
                    best[i..=j].reverse();
                }
            }
        }

        history.push(best_distance);
    }

    TourOutcome { sequence: best, is_partial, history }
}
