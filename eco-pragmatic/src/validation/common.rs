use rustc_hash::FxHashSet;

/// Returns sorted duplicates found in the collection.
pub fn get_duplicates<'a>(items: impl Iterator<Item = &'a String>) -> Option<Vec<String>> {
    let mut ids = FxHashSet::default();
    let duplicates =
        items.filter_map(move |id| if ids.insert(id) { None } else { Some(id.clone()) }).collect::<FxHashSet<_>>();

    if duplicates.is_empty() {
        None
    } else {
        let mut duplicates = duplicates.into_iter().collect::<Vec<_>>();
        duplicates.sort();
        Some(duplicates)
    }
}

/// Combines error results.
pub fn combine_error_results<T: Clone>(results: &[Result<(), T>]) -> Result<(), Vec<T>> {
    let errors = results.iter().cloned().flat_map(|result| result.err().into_iter()).collect::<Vec<T>>();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Formats indices as a comma separated list.
pub fn join_indices(indices: &[usize]) -> String {
    indices.iter().map(|idx| idx.to_string()).collect::<Vec<_>>().join(", ")
}
