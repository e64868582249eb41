use super::*;

#[test]
fn can_keep_source_order_in_parallel_collect() {
    let source = (0..1000).collect::<Vec<usize>>();

    let result = parallel_collect(&source, |item| item * 2);

    assert_eq!(result, source.iter().map(|item| item * 2).collect::<Vec<_>>());
}

#[test]
fn can_produce_same_result_with_and_without_parallelism() {
    let source = (0..100).map(|idx| idx as f64 * 0.1).collect::<Vec<_>>();

    let parallel = maybe_parallel_collect(&source, true, |value| value.sqrt());
    let sequential = maybe_parallel_collect(&source, false, |value| value.sqrt());

    assert_eq!(parallel, sequential);
}
