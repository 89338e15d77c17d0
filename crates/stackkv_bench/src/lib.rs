//! Benchmark utilities.

use rand::Rng;
use stackkv_core::Store;

/// Generate `count` distinct keys.
pub fn generate_keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("key{i}")).collect()
}

/// Generate a store of `size` keys with values drawn from `distinct_values` choices.
pub fn random_store(size: usize, distinct_values: u32) -> Store {
    let mut rng = rand::thread_rng();
    generate_keys(size)
        .into_iter()
        .map(|key| (key, rng.gen_range(0..distinct_values).to_string()))
        .collect()
}
