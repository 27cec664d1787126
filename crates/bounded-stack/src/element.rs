// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Element-kind capability.
//!
//! A [`BoundedStack`](crate::BoundedStack) is generic over any `Element`.
//! Plain-value kinds use the default no-op validation; `String` enforces
//! the strict byte-length bound of the bounded-text kind. Downstream types
//! opt in by implementing the trait themselves.

use alloc::string::String;

use crate::error::StackError;

/// Upper bound on the byte length of a stored string.
///
/// Admitted lengths are strictly less than this.
pub const MAX_ELEMENT_BYTE_SIZE: usize = 256;

/// Validation hook applied before a value is admitted on push.
pub trait Element {
    /// Checks whether the value may be stored.
    ///
    /// The default accepts everything; implementors with a size constraint
    /// return [`StackError::ElementTooLarge`] instead of mutating anything.
    fn validate(&self) -> Result<(), StackError> {
        Ok(())
    }
}

macro_rules! plain_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {}
        )*
    };
}

plain_element!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, f32, f64,
);

impl Element for String {
    /// Byte length must be strictly less than [`MAX_ELEMENT_BYTE_SIZE`].
    fn validate(&self) -> Result<(), StackError> {
        if self.len() >= MAX_ELEMENT_BYTE_SIZE {
            return Err(StackError::ElementTooLarge);
        }

        Ok(())
    }
}
