//! Test fixtures and store helpers.

use stackkv_core::{Mapping, Store};

/// Returns the store `{A: 5, B: 4, C: 4}` used throughout the tests.
#[must_use]
pub fn sample_store() -> Store {
    store_with(&[("A", "5"), ("B", "4"), ("C", "4")])
}

/// Returns a store holding exactly `pairs`, with no open transaction.
#[must_use]
pub fn store_with(pairs: &[(&str, &str)]) -> Store {
    Store::from_entries(pairs.iter().copied())
}

/// Builds a mapping from `pairs`, for comparing against [`Store::mapping`].
#[must_use]
pub fn mapping(pairs: &[(&str, &str)]) -> Mapping {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Asserts that `store` holds exactly `pairs`.
///
/// # Panics
///
/// Panics with both mappings printed if they differ.
pub fn assert_mapping(store: &Store, pairs: &[(&str, &str)]) {
    assert_eq!(store.mapping(), &mapping(pairs), "store mapping mismatch");
}
