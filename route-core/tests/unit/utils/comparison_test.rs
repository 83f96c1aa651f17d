use super::*;

parameterized_test! {can_compare_floats, (a, b, expected), {
    assert_eq!(compare_floats(a, b), expected);
}}

can_compare_floats! {
    case01_less: (1., 2., Ordering::Less),
    case02_greater: (2., 1., Ordering::Greater),
    case03_equal: (1., 1., Ordering::Equal),
    case04_nan_left: (f64::NAN, 1., Ordering::Greater),
    case05_nan_right: (1., f64::NAN, Ordering::Less),
    case06_nan_both: (f64::NAN, f64::NAN, Ordering::Equal),
    case07_infinity: (f64::INFINITY, f64::MAX, Ordering::Greater),
}

#[test]
fn can_sort_with_nan_at_the_end() {
    let mut values = vec![3., f64::NAN, 1., 2.];

    values.sort_by(|a, b| compare_floats(*a, *b));

    assert_eq!(&values[..3], &[1., 2., 3.]);
    assert!(values[3].is_nan());
}
