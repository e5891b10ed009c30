// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Slot-buffer dynamic array with explicit growth policies.
//!
//! `DynamicArray<T, G>` owns a single contiguous buffer of slots and a length
//! counter. It does not delegate growth to `Vec`: the buffer is reallocated by
//! the array itself, following the [`GrowthPolicy`] chosen at the type level.
//!
//! # Core Guarantees
//!
//! - **Ordered storage**: slots `[0, len)` hold the live values in insertion
//!   order; removal shifts the tail left, preserving relative order.
//! - **Cleared tail**: slots `[len, capacity)` are always empty, so removed
//!   values are dropped immediately instead of lingering in the buffer.
//! - **Monotonic capacity**: capacity grows on demand and never shrinks.
//! - **Checked access**: `get()` and `remove()` return
//!   [`ArrayError::IndexOutOfRange`] instead of panicking.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use holdall_array::{ArrayError, DynamicArray};
//!
//! fn example() -> Result<(), ArrayError> {
//!     let mut array = DynamicArray::new();
//!     array.add("Start");
//!     array.add("Middle");
//!     array.add("End");
//!
//!     assert_eq!(array.remove(1)?, "Middle");
//!     assert_eq!(array.to_string(), "[Start, End]");
//!
//!     // Out-of-range access is reported, never clamped
//!     assert!(array.get(2).is_err());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Choosing a Growth Policy
//!
//! ```rust
//! use holdall_array::{DynamicArray, Linear};
//!
//! let mut array = DynamicArray::with_capacity_and_growth(2, Linear);
//! for i in 0..5 {
//!     array.add(i);
//! }
//!
//! // Linear growth adds exactly one slot per overflow
//! assert_eq!(array.capacity(), 5);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

extern crate alloc;

mod dynamic_array;
mod error;
mod growth;

#[cfg(test)]
mod tests;

pub use dynamic_array::{DEFAULT_CAPACITY, DynamicArray};
pub use error::ArrayError;
pub use growth::{Doubling, GrowthPolicy, Linear};
