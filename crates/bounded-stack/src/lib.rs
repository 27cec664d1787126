// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bounded LIFO stack with doubling growth and quarter-full shrink.
//!
//! `BoundedStack<T>` is a last-in-first-out container with a hard ceiling
//! on element count and a resize policy that bounds memory in both
//! directions: storage doubles when a push finds it full and halves when a
//! pop leaves it a quarter full, never below the initial capacity and
//! never above the maximum.
//!
//! # Core Guarantees
//!
//! - **Bounded**: at most [`MAX_CAPACITY`] elements; a push beyond that
//!   fails with [`StackError::Full`] instead of growing.
//! - **No aliasing**: elements move in on push and move out on pop; the
//!   stack never holds a view into caller memory, and a popped value is
//!   independent of anything still stored.
//! - **Allocation failure is recoverable**: every capacity change goes
//!   through `try_reserve_exact`. A failed growth leaves the stack exactly
//!   as it was and surfaces [`StackError::OutOfMemory`]; a failed shrink
//!   is silent and only keeps the larger allocation alive.
//! - **Bounded elements**: the string element kind rejects values whose
//!   byte length is not strictly less than [`MAX_ELEMENT_BYTE_SIZE`] with
//!   [`StackError::ElementTooLarge`].
//!
//! # Example: Plain Values
//!
//! ```rust
//! use bounded_stack::{BoundedStack, StackError};
//!
//! fn example() -> Result<(), StackError> {
//!     let mut stack = BoundedStack::<u32>::new()?;
//!
//!     for i in 0..3 {
//!         stack.push(i)?;
//!     }
//!
//!     assert_eq!(stack.pop()?, 2);
//!     assert_eq!(stack.pop()?, 1);
//!     assert_eq!(stack.pop()?, 0);
//!     assert_eq!(stack.pop(), Err(StackError::Empty));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Bounded Strings
//!
//! ```rust
//! use bounded_stack::{StackError, StringStack, MAX_ELEMENT_BYTE_SIZE};
//!
//! fn example() -> Result<(), StackError> {
//!     let mut stack = StringStack::new()?;
//!
//!     stack.push(String::from("on top"))?;
//!
//!     let oversized = "x".repeat(MAX_ELEMENT_BYTE_SIZE);
//!     assert_eq!(stack.push(oversized), Err(StackError::ElementTooLarge));
//!
//!     assert_eq!(stack.pop()?, "on top");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures at the
//! grow/shrink sites for testing error handling paths:
//!
//! ```toml
//! [dev-dependencies]
//! bounded-stack = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`StackBehaviour`] to force the paths a healthy allocator
//! never takes.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(any(test, feature = "test_utils"))]
mod behaviour;
mod bounded_stack;
mod element;
mod error;

#[cfg(test)]
mod tests;

pub use bounded_stack::{BoundedStack, INITIAL_CAPACITY, MAX_CAPACITY};
pub use element::{Element, MAX_ELEMENT_BYTE_SIZE};
pub use error::StackError;

#[cfg(any(test, feature = "test_utils"))]
pub use behaviour::StackBehaviour;

use alloc::string::String;

/// The bounded-text variant: a stack of byte-bounded [`String`] elements.
pub type StringStack = BoundedStack<String>;
