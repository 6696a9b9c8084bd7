use std::collections::HashSet;
use std::hash::Hash;

/// Filters a vector down to the first occurrence per key while maintaining
/// the original order. Later occurrences of an already-seen key are dropped.
pub fn dedup_by_key<T, K, F>(items: Vec<T>, mut key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(key(item))).collect()
}
