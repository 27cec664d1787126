// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{BoundedStack, Element, MAX_ELEMENT_BYTE_SIZE, StackError, StringStack};

// =============================================================================
// String: byte-size bound
// =============================================================================

#[test]
fn test_string_below_bound_is_admitted() {
    let mut stack = StringStack::new().expect("Failed to create stack");

    let value = "x".repeat(MAX_ELEMENT_BYTE_SIZE - 1);
    stack.push(value).expect("Failed to push");

    assert_eq!(stack.size(), 1);
}

#[test]
fn test_string_at_bound_is_rejected() {
    let mut stack = StringStack::new().expect("Failed to create stack");

    stack.push(String::from("resident")).expect("Failed to push");

    let oversized = "x".repeat(MAX_ELEMENT_BYTE_SIZE);
    assert_eq!(stack.push(oversized), Err(StackError::ElementTooLarge));

    // Rejected before any mutation
    assert_eq!(stack.size(), 1);
    assert_eq!(stack.pop().expect("Failed to pop"), "resident");
}

#[test]
fn test_string_bound_counts_bytes_not_chars() {
    let mut stack = StringStack::new().expect("Failed to create stack");

    // 'é' is 2 bytes in UTF-8: 128 of them hit the bound exactly
    let at_bound = "é".repeat(MAX_ELEMENT_BYTE_SIZE / 2);
    assert_eq!(at_bound.len(), MAX_ELEMENT_BYTE_SIZE);
    assert_eq!(stack.push(at_bound), Err(StackError::ElementTooLarge));

    let below_bound = "é".repeat(MAX_ELEMENT_BYTE_SIZE / 2 - 1);
    stack.push(below_bound).expect("Failed to push");

    assert_eq!(stack.size(), 1);
}

#[test]
fn test_empty_string_is_admitted() {
    let mut stack = StringStack::new().expect("Failed to create stack");

    stack.push(String::new()).expect("Failed to push");

    assert_eq!(stack.pop().expect("Failed to pop"), "");
}

// =============================================================================
// String: value independence
// =============================================================================

#[test]
fn test_popped_value_is_independent_of_the_stack() {
    let mut stack = StringStack::new().expect("Failed to create stack");

    stack.push(String::from("bottom")).expect("Failed to push");
    stack.push(String::from("top")).expect("Failed to push");

    let mut popped = stack.pop().expect("Failed to pop");
    assert_eq!(popped, "top");

    // Mutating the returned value must not affect anything still stored
    popped.push_str(" mutated");
    popped.clear();

    assert_eq!(stack.pop().expect("Failed to pop"), "bottom");
}

#[test]
fn test_string_lifo_contents() {
    let mut stack = StringStack::new().expect("Failed to create stack");

    for word in ["alpha", "beta", "gamma"] {
        stack.push(String::from(word)).expect("Failed to push");
    }

    assert_eq!(stack.pop().expect("Failed to pop"), "gamma");
    assert_eq!(stack.pop().expect("Failed to pop"), "beta");
    assert_eq!(stack.pop().expect("Failed to pop"), "alpha");
}

// =============================================================================
// Custom element kinds
// =============================================================================

#[test]
fn test_downstream_element_validation_runs_on_push() {
    #[derive(Debug, PartialEq)]
    struct EvenOnly(u32);

    impl Element for EvenOnly {
        fn validate(&self) -> Result<(), StackError> {
            if self.0 % 2 != 0 {
                return Err(StackError::ElementTooLarge);
            }

            Ok(())
        }
    }

    let mut stack = BoundedStack::<EvenOnly>::new().expect("Failed to create stack");

    stack.push(EvenOnly(2)).expect("Failed to push");
    assert_eq!(stack.push(EvenOnly(3)), Err(StackError::ElementTooLarge));

    assert_eq!(stack.size(), 1);
    assert_eq!(stack.pop().expect("Failed to pop"), EvenOnly(2));
}
