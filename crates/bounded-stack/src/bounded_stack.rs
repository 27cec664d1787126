// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::fmt;

#[cfg(any(test, feature = "test_utils"))]
use crate::behaviour::StackBehaviour;
use crate::element::Element;
use crate::error::StackError;

/// Capacity of a freshly created stack, and the floor below which shrink
/// never goes.
pub const INITIAL_CAPACITY: usize = 16;

/// Hard ceiling on element count and on backing-storage capacity.
pub const MAX_CAPACITY: usize = 32768;

/// Bounded LIFO stack with doubling growth and quarter-full shrink.
///
/// The stack owns its backing storage exclusively. Elements enter by value
/// on [`push`](Self::push) and leave by value on [`pop`](Self::pop), so no
/// caller memory is ever aliased. Capacity moves only through the resize
/// policy:
///
/// - **Growth**: a push into a full allocation doubles capacity, capped at
///   [`MAX_CAPACITY`]. A failed growth allocation leaves the stack
///   untouched and surfaces [`StackError::OutOfMemory`].
/// - **Shrink**: a pop that leaves the stack at or below a quarter of its
///   capacity halves it, floored at [`INITIAL_CAPACITY`]. A failed shrink
///   allocation is silent - the stack keeps the larger allocation.
///
/// All reallocation goes through `try_reserve_exact`; the stack never
/// relies on `Vec`'s implicit growth.
///
/// # Example
///
/// ```rust
/// use bounded_stack::{BoundedStack, StackError};
///
/// fn example() -> Result<(), StackError> {
///     let mut stack = BoundedStack::<u32>::new()?;
///
///     stack.push(1)?;
///     stack.push(2)?;
///
///     assert_eq!(stack.size(), 2);
///     assert_eq!(stack.pop()?, 2);
///     assert_eq!(stack.pop()?, 1);
///     assert_eq!(stack.pop(), Err(StackError::Empty));
///     Ok(())
/// }
/// # example().unwrap();
/// ```
pub struct BoundedStack<T>
where
    T: Element,
{
    inner: Vec<T>,
    capacity: usize,
    destroyed: bool,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: StackBehaviour,
}

impl<T> BoundedStack<T>
where
    T: Element,
{
    /// Creates an empty stack with [`INITIAL_CAPACITY`] slots reserved.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::OutOfMemory`] if the initial reservation
    /// fails; no stack is produced in that case.
    pub fn new() -> Result<Self, StackError> {
        let mut inner = Vec::new();
        inner.try_reserve_exact(INITIAL_CAPACITY)?;

        Ok(Self {
            inner,
            capacity: INITIAL_CAPACITY,
            destroyed: false,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: StackBehaviour::default(),
        })
    }

    /// Returns the number of elements in the stack.
    ///
    /// Returns 0 once the stack has been destroyed.
    #[inline]
    pub fn size(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the stack contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if the stack holds [`MAX_CAPACITY`] elements.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.inner.len() == MAX_CAPACITY
    }

    /// Returns the current policy capacity.
    ///
    /// This is the slot count the resize policy has settled on, not the
    /// element count; `INITIAL_CAPACITY <= capacity() <= MAX_CAPACITY`
    /// while the stack is live. Returns 0 once the stack has been
    /// destroyed.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pushes a value onto the top of the stack.
    ///
    /// The value is checked, then the full bound, then capacity is grown
    /// if needed; nothing is mutated until every check has passed. On any
    /// error the stack's size, capacity and contents are exactly as
    /// before the call.
    ///
    /// # Errors
    ///
    /// - [`StackError::ElementTooLarge`] if [`Element::validate`] rejects
    ///   the value.
    /// - [`StackError::Full`] if the stack already holds [`MAX_CAPACITY`]
    ///   elements.
    /// - [`StackError::OutOfMemory`] if growth was needed and the
    ///   allocator refused it, or if the stack has been destroyed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_stack::{BoundedStack, StackError};
    ///
    /// fn example() -> Result<(), StackError> {
    ///     let mut stack = BoundedStack::<u8>::new()?;
    ///     stack.push(42)?;
    ///
    ///     assert_eq!(stack.size(), 1);
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn push(&mut self, value: T) -> Result<(), StackError> {
        if self.destroyed {
            return Err(StackError::OutOfMemory);
        }

        value.validate()?;

        if self.inner.len() == MAX_CAPACITY {
            return Err(StackError::Full);
        }

        self.maybe_grow()?;

        self.inner.push(value);
        debug_assert!(self.inner.len() <= self.capacity);

        Ok(())
    }

    /// Removes the top element and returns it.
    ///
    /// Ownership of the stored value transfers to the caller; the stack
    /// keeps no alias of it. After removal the shrink policy runs as a
    /// best effort - a failed shrink allocation keeps the current
    /// capacity and is not reported.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] if the stack is empty or destroyed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bounded_stack::{BoundedStack, StackError};
    ///
    /// fn example() -> Result<(), StackError> {
    ///     let mut stack = BoundedStack::<u8>::new()?;
    ///     stack.push(7)?;
    ///
    ///     assert_eq!(stack.pop()?, 7);
    ///     assert!(stack.is_empty());
    ///     Ok(())
    /// }
    /// # example().unwrap();
    /// ```
    pub fn pop(&mut self) -> Result<T, StackError> {
        let value = self.inner.pop().ok_or(StackError::Empty)?;

        self.maybe_shrink();

        Ok(value)
    }

    /// Releases every element and the backing storage.
    ///
    /// The handle stays usable afterwards but behaves as an empty stack:
    /// queries report size 0, `pop` fails with [`StackError::Empty`] and
    /// `push` fails with [`StackError::OutOfMemory`]. Idempotent - calling
    /// it again is a no-op. Dropping the stack releases storage the same
    /// way; `destroy` exists for callers that need the explicit-teardown
    /// surface.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }

        self.inner = Vec::new();
        self.capacity = 0;
        self.destroyed = true;
    }

    #[inline(always)]
    fn maybe_grow(&mut self) -> Result<(), StackError> {
        if self.inner.len() < self.capacity {
            return Ok(());
        }

        // Growth never exceeds MAX_CAPACITY. Unreachable while push
        // rejects Full first.
        if self.capacity >= MAX_CAPACITY {
            return Err(StackError::OutOfMemory);
        }

        let new_capacity = (self.capacity * 2).min(MAX_CAPACITY);
        self.grow_to(new_capacity)
    }

    /// Moves the elements into a fresh allocation of `new_capacity` slots.
    ///
    /// On reservation failure the stack is left entirely unchanged - the
    /// old storage, capacity and contents stay intact.
    #[cold]
    #[inline(never)]
    fn grow_to(&mut self, new_capacity: usize) -> Result<(), StackError> {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, StackBehaviour::FailAtGrow) {
            return Err(StackError::OutOfMemory);
        }

        let mut replacement: Vec<T> = Vec::new();
        replacement.try_reserve_exact(new_capacity)?;

        replacement.append(&mut self.inner);
        self.inner = replacement;
        self.capacity = new_capacity;

        Ok(())
    }

    #[inline(always)]
    fn maybe_shrink(&mut self) {
        if self.capacity <= INITIAL_CAPACITY {
            return;
        }

        if self.inner.len() > self.capacity / 4 {
            return;
        }

        let new_capacity = (self.capacity / 2).max(INITIAL_CAPACITY);
        if new_capacity == self.capacity {
            return;
        }

        self.shrink_to(new_capacity);
    }

    /// Moves the elements into a fresh allocation of `new_capacity` slots.
    ///
    /// Shrink failure is silent: if the reservation fails the stack keeps
    /// the current, larger allocation.
    #[cold]
    #[inline(never)]
    fn shrink_to(&mut self, new_capacity: usize) {
        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, StackBehaviour::FailAtShrink) {
            return;
        }

        let mut replacement: Vec<T> = Vec::new();
        if replacement.try_reserve_exact(new_capacity).is_err() {
            return;
        }

        replacement.append(&mut self.inner);
        self.inner = replacement;
        self.capacity = new_capacity;
    }

    /// Changes the test behaviour for this stack.
    ///
    /// Only available with the `test_utils` feature. Injects failures at
    /// the grow/shrink allocation sites so the error paths can be tested
    /// deterministically; see [`StackBehaviour`].
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: StackBehaviour) {
        self.behaviour = behaviour;
    }
}

impl<T> fmt::Debug for BoundedStack<T>
where
    T: Element,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedStack")
            .field("size", &self.size())
            .field("capacity", &self.capacity)
            .finish()
    }
}
