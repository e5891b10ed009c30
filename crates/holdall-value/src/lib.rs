// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tagged-union values and the heterogeneous object container.
//!
//! [`Value`] is a closed sum type covering the element kinds a mixed
//! container holds: strings, integers, floating point, booleans and an
//! explicitly stored null. [`ObjectContainer`] is a
//! [`DynamicArray`](holdall_array::DynamicArray) of values.
//!
//! A stored [`Value::Null`] is a live element: it counts towards `size()`,
//! is returned by `get()` and renders as `null`. It is unrelated to the
//! empty slots a `DynamicArray` keeps past its length.
//!
//! # Example
//!
//! ```rust
//! use holdall_array::ArrayError;
//! use holdall_value::{ObjectContainer, ObjectContainerExt, Value};
//!
//! fn example() -> Result<(), ArrayError> {
//!     let mut container = ObjectContainer::new();
//!     container.add_value("String");
//!     container.add_value(123);
//!     container.add_value(45.67);
//!     container.add_value(None::<&str>);
//!
//!     assert_eq!(container.size(), 4);
//!     assert_eq!(*container.get(1)?, 123);
//!     assert!(container.get(3)?.is_null());
//!     assert_eq!(container.to_string(), "[String, 123, 45.67, null]");
//!
//!     assert_eq!(container.remove(0)?, Value::from("String"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![deny(unsafe_code)]

extern crate alloc;

mod container;
mod value;

#[cfg(test)]
mod tests;

pub use container::{ObjectContainer, ObjectContainerExt};
pub use value::Value;
