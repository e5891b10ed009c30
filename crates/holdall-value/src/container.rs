// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use holdall_array::{DynamicArray, GrowthPolicy};

use crate::value::Value;

/// A dynamic array of heterogeneous [`Value`]s with doubling growth.
///
/// Other growth policies are available through
/// `DynamicArray::<Value, _>::with_growth()`.
pub type ObjectContainer = DynamicArray<Value>;

/// Appends raw values to a container of [`Value`]s.
pub trait ObjectContainerExt {
    /// Converts `value` into a [`Value`] and appends it.
    fn add_value<V: Into<Value>>(&mut self, value: V);
}

impl<G> ObjectContainerExt for DynamicArray<Value, G>
where
    G: GrowthPolicy,
{
    #[inline]
    fn add_value<V: Into<Value>>(&mut self, value: V) {
        self.add(value.into());
    }
}
