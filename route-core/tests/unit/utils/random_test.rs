use super::*;

#[test]
fn can_produce_repeatable_values_with_the_same_seed() {
    let first = DefaultRandom::new_repeatable(7);
    let second = DefaultRandom::new_repeatable(7);

    let first_values = (0..10).map(|_| first.uniform_int(0, 100)).collect::<Vec<_>>();
    let second_values = (0..10).map(|_| second.uniform_int(0, 100)).collect::<Vec<_>>();

    assert_eq!(first_values, second_values);
}

#[test]
fn can_produce_different_values_for_consecutive_calls() {
    let random = DefaultRandom::new_repeatable(7);

    let values = (0..20).map(|_| random.uniform_real(0., 1.)).collect::<Vec<_>>();

    assert!(values.windows(2).any(|pair| pair[0] != pair[1]));
}

#[test]
fn can_keep_values_in_range() {
    let random = DefaultRandom::default();

    (0..1000).for_each(|_| {
        let int = random.uniform_int(-3, 3);
        let real = random.uniform_real(1., 2.);
        let index = random.uniform_index(5);

        assert!((-3..=3).contains(&int));
        assert!((1. ..2.).contains(&real));
        assert!(index < 5);
    });
}

#[test]
fn can_return_min_when_range_is_degenerate() {
    let random = DefaultRandom::default();

    assert_eq!(random.uniform_int(5, 5), 5);
    assert_eq!(random.uniform_real(0.5, 0.5), 0.5);
    assert_eq!(random.uniform_index(1), 0);
}

#[test]
fn can_handle_probability_bounds() {
    let random = DefaultRandom::default();

    assert!((0..100).all(|_| random.is_hit(1.)));
    assert!((0..100).all(|_| !random.is_hit(0.)));
    assert!((0..100).all(|_| random.is_hit(2.)));
}

#[test]
fn can_derive_repeatable_rng() {
    let first = DefaultRandom::new_repeatable(1).get_rng().next_u64();
    let second = DefaultRandom::new_repeatable(1).get_rng().next_u64();

    assert_eq!(first, second);
}
