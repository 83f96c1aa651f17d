#[cfg(test)]
#[path = "../../tests/unit/models/sequence_test.rs"]
mod sequence_test;

use rustc_hash::FxHashSet;

/// A visiting order: a permutation of stop indices. The tour is closed: after the last stop,
/// a vehicle returns to the first one.
pub type Sequence = Vec<usize>;

/// Creates an identity sequence `[0, 1, .., size - 1]`.
pub fn identity_sequence(size: usize) -> Sequence {
    (0..size).collect()
}

/// Checks whether the sequence contains every index of `0..size` exactly once.
pub fn is_permutation(sequence: &[usize], size: usize) -> bool {
    if sequence.len() != size {
        return false;
    }

    let mut seen = FxHashSet::with_capacity_and_hasher(size, Default::default());

    sequence.iter().all(|&index| index < size && seen.insert(index))
}

/// Rotates the closed tour so that it starts from the given index. Tour length is not changed.
/// Returns the sequence as is when the index is not present.
pub fn rotate_to_start(mut sequence: Sequence, start: usize) -> Sequence {
    if let Some(position) = sequence.iter().position(|&index| index == start) {
        sequence.rotate_left(position);
    }

    sequence
}
