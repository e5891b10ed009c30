// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growth policies for the slot buffer.

/// Computes the next capacity of a full buffer.
///
/// Implementations must return a value strictly greater than `current`.
/// The array panics with `"capacity overflow"` otherwise, which can only
/// happen once `current` approaches `usize::MAX`.
pub trait GrowthPolicy {
    /// Returns the capacity to reallocate to when `current` slots are full.
    fn grow(&self, current: usize) -> usize;
}

/// Doubles the capacity on every overflow (`0 → 1 → 2 → 4 → ...`).
///
/// Appends cost amortized O(1).
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Doubling;

impl GrowthPolicy for Doubling {
    #[inline]
    fn grow(&self, current: usize) -> usize {
        current.saturating_mul(2).max(1)
    }
}

/// Adds a single slot on every overflow.
///
/// Every append past the initial capacity reallocates and moves all
/// elements, so appends cost O(n) amortized per element.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Linear;

impl GrowthPolicy for Linear {
    #[inline]
    fn grow(&self, current: usize) -> usize {
        current.saturating_add(1)
    }
}
