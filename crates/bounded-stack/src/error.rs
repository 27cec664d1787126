// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for bounded-stack.

use alloc::collections::TryReserveError;
use thiserror::Error;

/// Error type for [`BoundedStack`](crate::BoundedStack) operations.
///
/// Every fallible operation returns one of these; success is the `Ok` arm
/// of the `Result`. Shrink-on-pop allocation failure is the one failure
/// that is never surfaced (it only keeps a larger allocation alive).
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum StackError {
    /// The allocator refused a request during construction or push growth.
    #[error("allocation failed")]
    OutOfMemory,

    /// Push attempted while the stack holds `MAX_CAPACITY` elements.
    #[error("stack has reached maximum capacity")]
    Full,

    /// A string element's byte length is not strictly less than
    /// `MAX_ELEMENT_BYTE_SIZE`.
    #[error("element exceeds maximum byte size")]
    ElementTooLarge,

    /// Pop attempted on an empty or destroyed stack.
    #[error("cannot pop from empty stack")]
    Empty,
}

impl From<TryReserveError> for StackError {
    fn from(_: TryReserveError) -> Self {
        Self::OutOfMemory
    }
}
