use super::*;

#[test]
fn can_collect_in_parallel_preserving_order() {
    let source = (0..100).collect::<Vec<usize>>();

    let result = parallel_collect(&source, |item| item * 2);

    assert_eq!(result, source.iter().map(|item| item * 2).collect::<Vec<_>>());
}

#[test]
fn can_execute_on_thread_pool() {
    let pool = ThreadPool::new(2).expect("cannot create pool");

    let threads = pool.execute(rayon::current_num_threads);

    assert_eq!(threads, 2);
}

#[test]
fn can_reject_empty_thread_pool() {
    let result = ThreadPool::new(0);

    assert!(matches!(result, Err(OptimizationError::InvalidInput(_))));
}
