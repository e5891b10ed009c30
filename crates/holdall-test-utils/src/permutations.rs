// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Exhaustive index permutations for order-sensitive tests.

/// Returns every permutation of `0..n` (`n!` entries).
///
/// Uses Heap's algorithm. Intended for small `n`; `n = 0` yields a single
/// empty permutation.
///
/// # Example
///
/// ```rust
/// use holdall_test_utils::index_permutations;
///
/// let perms = index_permutations(3);
/// assert_eq!(perms.len(), 6);
/// assert!(perms.contains(&vec![2, 0, 1]));
/// ```
pub fn index_permutations(n: usize) -> Vec<Vec<usize>> {
    let mut current: Vec<usize> = (0..n).collect();
    let mut counters = vec![0usize; n];
    let mut out = vec![current.clone()];

    let mut i = 1;
    while i < n {
        if counters[i] < i {
            if i % 2 == 0 {
                current.swap(0, i);
            } else {
                current.swap(counters[i], i);
            }
            out.push(current.clone());
            counters[i] += 1;
            i = 1;
        } else {
            counters[i] = 0;
            i += 1;
        }
    }

    out
}

/// Reorders `items` so that position `i` of the result holds `items[perm[i]]`.
///
/// # Panics
///
/// Panics if `perm` addresses an index outside `items`.
///
/// # Example
///
/// ```rust
/// use holdall_test_utils::apply_permutation;
///
/// let items = ["a", "b", "c"];
/// assert_eq!(apply_permutation(&items, &[2, 0, 1]), vec!["c", "a", "b"]);
/// ```
pub fn apply_permutation<T: Clone>(items: &[T], perm: &[usize]) -> Vec<T> {
    perm.iter().map(|&i| items[i].clone()).collect()
}
