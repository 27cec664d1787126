// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Failure injection for the allocation paths.

/// Test behaviour for injecting allocation failures.
///
/// Only available with the `test_utils` feature. The stack has exactly two
/// allocation sites after construction (the grow step of push and the
/// shrink step of pop), and each can be forced to fail so the error paths
/// are reachable without a failing allocator.
///
/// The behaviour is sticky - once set, it remains active until changed.
///
/// # Example
///
/// ```rust
/// // test_utils feature required in dev-dependencies
/// #[cfg(test)]
/// mod tests {
///     use bounded_stack::{BoundedStack, StackBehaviour, StackError};
///
///     #[test]
///     fn test_handles_grow_failure() -> Result<(), StackError> {
///         let mut stack = BoundedStack::<u8>::new()?;
///         stack.change_behaviour(StackBehaviour::FailAtGrow);
///
///         for i in 0..16 {
///             stack.push(i)?; // within initial capacity, no growth
///         }
///
///         // The 17th push needs to grow and the "allocator" fails
///         assert_eq!(stack.push(16), Err(StackError::OutOfMemory));
///
///         stack.change_behaviour(StackBehaviour::None);
///         stack.push(16)?;
///         Ok(())
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Growth reallocations fail as if the allocator refused them.
    FailAtGrow,
    /// Shrink reallocations fail as if the allocator refused them.
    FailAtShrink,
}
