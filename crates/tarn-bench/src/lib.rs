//! Benchmark workloads and utilities for Tarn typed arrays.
//!
//! Provides deterministic value streams and pre-built arrays so benchmark
//! runs are comparable across machines and revisions.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tarn_array::TypedArray;

/// Generate `n` deterministic pseudo-random values from a seed.
///
/// Uses a splitmix-style mix so the stream is stable across platforms
/// without pulling in an RNG dependency.
pub fn seeded_values(n: usize, seed: u64) -> Vec<u64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state.wrapping_add(0x9e3779b97f4a7c15);
            let mut z = state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
            z ^ (z >> 31)
        })
        .collect()
}

/// Build an array pre-filled with `n` deterministic values.
pub fn filled_array(n: usize, seed: u64) -> TypedArray<u64> {
    let mut array = TypedArray::with_capacity(n);
    for value in seeded_values(n, seed) {
        array.push(value);
    }
    array
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_values_deterministic() {
        assert_eq!(seeded_values(16, 42), seeded_values(16, 42));
        assert_ne!(seeded_values(16, 42), seeded_values(16, 43));
    }

    #[test]
    fn filled_array_has_requested_count() {
        let array = filled_array(100, 7);
        assert_eq!(array.count(), 100);
        assert!(array.capacity() >= 100);
    }
}
