use super::*;

parameterized_test! {can_check_permutation, (sequence, size, expected), {
    assert_eq!(is_permutation(sequence.as_slice(), size), expected);
}}

can_check_permutation! {
    case01_empty: (Vec::<usize>::new(), 0, true),
    case02_identity: (vec![0, 1, 2], 3, true),
    case03_shuffled: (vec![2, 0, 1], 3, true),
    case04_duplicate: (vec![0, 0, 1], 3, false),
    case05_missing: (vec![0, 1], 3, false),
    case06_out_of_range: (vec![0, 1, 3], 3, false),
    case07_too_long: (vec![0, 1, 2, 3], 3, false),
}

parameterized_test! {can_rotate_to_start, (sequence, start, expected), {
    assert_eq!(rotate_to_start(sequence, start), expected);
}}

can_rotate_to_start! {
    case01_already_first: (vec![0, 2, 1], 0, vec![0, 2, 1]),
    case02_in_the_middle: (vec![2, 0, 1], 0, vec![0, 1, 2]),
    case03_last: (vec![3, 2, 1, 0], 0, vec![0, 3, 2, 1]),
    case04_missing: (vec![1, 2], 0, vec![1, 2]),
    case05_empty: (Vec::<usize>::new(), 0, Vec::<usize>::new()),
}

#[test]
fn can_create_identity_sequence() {
    assert_eq!(identity_sequence(0), Vec::<usize>::new());
    assert_eq!(identity_sequence(4), vec![0, 1, 2, 3]);
}
