// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Holdall is a dynamic array that manages its own slot buffer.
//!
//! # Crates
//!
//! - [`array`]: `DynamicArray<T, G>`, growth policies and `ArrayError`
//! - [`value`]: the `Value` tagged union and `ObjectContainer`
//!
//! # Quick Start
//!
//! ```rust
//! use holdall::array::ArrayError;
//! use holdall::value::{ObjectContainer, ObjectContainerExt};
//!
//! fn main() -> Result<(), ArrayError> {
//!     let mut container = ObjectContainer::new();
//!     container.add_value("A");
//!     container.add_value(None::<&str>);
//!     container.add_value("C");
//!
//!     assert_eq!(container.to_string(), "[A, null, C]");
//!
//!     container.remove(1)?;
//!     assert_eq!(container.to_string(), "[A, C]");
//!     Ok(())
//! }
//! ```
//!
//! # Growth policies
//!
//! The default policy doubles the capacity whenever the buffer is full,
//! giving amortized O(1) appends. [`array::Linear`] adds a single slot
//! instead; every append past the initial capacity then reallocates.
//!
//! ```rust
//! use holdall::array::{DynamicArray, Linear};
//!
//! let mut doubling = DynamicArray::new();
//! let mut linear = DynamicArray::with_growth(Linear);
//! for i in 0..11 {
//!     doubling.add(i);
//!     linear.add(i);
//! }
//!
//! assert_eq!(doubling.capacity(), 20);
//! assert_eq!(linear.capacity(), 11);
//! assert!(doubling == linear);
//! ```
//!
//! ## License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

/// Dynamic array, growth policies and errors.
pub mod array {
    pub use holdall_array::*;
}

/// Tagged-union values and the heterogeneous container.
pub mod value {
    pub use holdall_value::*;
}
