// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use core::fmt;
use core::iter;

use crate::error::ArrayError;
use crate::growth::{Doubling, GrowthPolicy};

/// Capacity of an array created with [`DynamicArray::new()`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A dynamic array backed by a slot buffer it reallocates itself.
///
/// Each slot holds either a value or the empty marker (`None`). The first
/// `len` slots are live and ordered; every slot after them is empty. When
/// an `add()` finds the buffer full, a new buffer is allocated with the
/// capacity computed by the growth policy `G` and the live values are moved
/// into it positionally.
///
/// # Example
///
/// ```rust
/// use holdall_array::{ArrayError, DynamicArray};
///
/// fn example() -> Result<(), ArrayError> {
///     let mut array = DynamicArray::new();
///     for i in 0..11 {
///         array.add(i);
///     }
///
///     // The 11th add overflowed the default capacity of 10
///     assert_eq!(array.capacity(), 20);
///     assert_eq!(*array.get(10)?, 10);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
#[derive(Clone)]
pub struct DynamicArray<T, G = Doubling> {
    slots: Box<[Option<T>]>,
    len: usize,
    growth: G,
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots and doubling growth.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with exactly `capacity` slots and doubling growth.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_growth(capacity, Doubling)
    }
}

impl<T, G> DynamicArray<T, G>
where
    G: GrowthPolicy,
{
    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots and the given growth policy.
    pub fn with_growth(growth: G) -> Self {
        Self::with_capacity_and_growth(DEFAULT_CAPACITY, growth)
    }

    /// Creates an empty array with exactly `capacity` slots and the given growth policy.
    ///
    /// A zero capacity is allowed; the first `add()` then grows the buffer.
    pub fn with_capacity_and_growth(capacity: usize, growth: G) -> Self {
        Self {
            slots: empty_slots(capacity),
            len: 0,
            growth,
        }
    }

    /// Appends `value` after the last live element.
    ///
    /// Grows the buffer first if it is full. Never fails; an allocation
    /// failure aborts through the global allocator.
    pub fn add(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }

        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    /// Reallocates the buffer to the capacity given by the growth policy.
    ///
    /// Live values are moved in order; the old buffer only holds empty
    /// slots by the time it is dropped.
    #[cold]
    #[inline(never)]
    fn grow(&mut self) {
        let current = self.capacity();
        let new_capacity = self.growth.grow(current);
        assert!(new_capacity > current, "capacity overflow");

        let mut slots = empty_slots(new_capacity);
        for (dst, src) in slots.iter_mut().zip(self.slots[..self.len].iter_mut()) {
            *dst = src.take();
        }

        self.slots = slots;
    }
}

impl<T, G> DynamicArray<T, G> {
    /// Returns the number of live elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the growth policy.
    #[inline]
    pub fn growth(&self) -> &G {
        &self.growth
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len;

        self.slots[..len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(ArrayError::IndexOutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len;

        self.slots[..len]
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(ArrayError::IndexOutOfRange { index, len })
    }

    /// Removes and returns the element at `index`.
    ///
    /// Elements after `index` shift one position to the left and the last
    /// live slot becomes empty. Capacity is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::IndexOutOfRange`] if `index >= len`. The array
    /// is left untouched in that case.
    pub fn remove(&mut self, index: usize) -> Result<T, ArrayError> {
        let len = self.len;

        let removed = self.slots[..len]
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(ArrayError::IndexOutOfRange { index, len })?;

        // The emptied slot travels to len - 1.
        self.slots[index..len].rotate_left(1);
        self.len -= 1;

        debug_assert!(self.slots[self.len].is_none());

        Ok(removed)
    }

    /// Returns the whole slot buffer, including the empty slots past `len`.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn as_capacity_slots(&self) -> &[Option<T>] {
        &self.slots
    }

    fn live(&self) -> impl Iterator<Item = &T> {
        self.slots[..self.len].iter().flatten()
    }
}

impl<T, G> Default for DynamicArray<T, G>
where
    G: GrowthPolicy + Default,
{
    fn default() -> Self {
        Self::with_growth(G::default())
    }
}

impl<T, G, H> PartialEq<DynamicArray<T, H>> for DynamicArray<T, G>
where
    T: PartialEq,
{
    fn eq(&self, other: &DynamicArray<T, H>) -> bool {
        // Capacity and policy are not part of the logical value.
        self.len == other.len && self.live().eq(other.live())
    }
}

impl<T: Eq, G> Eq for DynamicArray<T, G> {}

impl<T, G> fmt::Display for DynamicArray<T, G>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;

        for (i, value) in self.live().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }

        f.write_str("]")
    }
}

impl<T, G> fmt::Debug for DynamicArray<T, G>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Elements<'a, T, G>(&'a DynamicArray<T, G>);

        impl<T: fmt::Debug, G> fmt::Debug for Elements<'_, T, G> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_list().entries(self.0.live()).finish()
            }
        }

        f.debug_struct("DynamicArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &Elements(self))
            .finish()
    }
}
