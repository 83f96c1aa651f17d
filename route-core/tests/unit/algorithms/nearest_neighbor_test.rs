use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::*;

parameterized_test! {can_build_nearest_neighbor_tour, (coordinates, expected), {
    let matrix = create_unit_planar_matrix(&create_stops(coordinates));

    assert_eq!(nearest_neighbor(&matrix), expected);
}}

can_build_nearest_neighbor_tour! {
    case01_empty: ([].as_slice(), Vec::<usize>::new()),
    case02_single: (&[(1., 1.)], vec![0]),
    case03_sorted_line: (&[(0., 0.), (10., 0.), (20., 0.), (30., 0.), (40., 0.)], vec![0, 1, 2, 3, 4]),
    case04_shuffled_line: (&[(0., 0.), (30., 0.), (10., 0.), (40., 0.), (20., 0.)], vec![0, 2, 4, 1, 3]),
    case05_ties_by_lowest_index: (&[(0., 0.), (0., 1.), (1., 1.), (1., 0.)], vec![0, 1, 2, 3]),
    case06_same_location: (&[(5., 5.), (5., 5.), (5., 5.)], vec![0, 1, 2]),
}

#[test]
fn can_start_from_first_stop_when_it_is_not_on_the_edge() {
    let matrix = create_unit_planar_matrix(&create_stops(&[(20., 0.), (0., 0.), (30., 0.), (10., 0.)]));

    let sequence = nearest_neighbor(&matrix);

    assert_eq!(sequence, vec![0, 2, 3, 1]);
}

#[test]
fn can_improve_nearest_neighbor_tour_with_two_opt() {
    // NOTE nearest neighbor leaves a long edge back to the start
    let stops = create_stops(&[(0., 0.), (1., 0.), (3., 0.), (2., 2.), (-1., 2.)]);
    let matrix = create_unit_planar_matrix(&stops);
    let environment = create_test_environment();
    let construction_distance = matrix.tour_distance(&nearest_neighbor(&matrix));

    let outcome = NearestNeighborTwoOpt::new(TwoOptConfig::default()).optimize(&matrix, &environment);

    assert!(!outcome.is_partial);
    assert_eq!(outcome.sequence[0], 0);
    assert!(matrix.tour_distance(&outcome.sequence) <= construction_distance);
}
