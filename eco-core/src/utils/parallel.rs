#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

use rayon::prelude::*;

/// Maps collection and collects results into vector in parallel. The order of results follows
/// the order of `source`, not the order in which workers complete.
pub fn parallel_collect<T, F, R>(source: &[T], map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(&T) -> R + Sync + Send,
    R: Send,
{
    source.par_iter().map(map_op).collect()
}

/// Maps collection either in parallel or sequentially depending on `is_parallel` flag.
pub fn maybe_parallel_collect<T, F, R>(source: &[T], is_parallel: bool, map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(&T) -> R + Sync + Send,
    R: Send,
{
    if is_parallel {
        parallel_collect(source, map_op)
    } else {
        source.iter().map(map_op).collect()
    }
}
