// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for holdall-array.

use thiserror::Error;

/// Error type for `DynamicArray` operations.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ArrayError {
    /// The index does not address a live element.
    ///
    /// Raised by `get()`, `get_mut()` and `remove()` whenever
    /// `index >= len`, including every index on an empty array.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The array length at the time of the call.
        len: usize,
    },
}
