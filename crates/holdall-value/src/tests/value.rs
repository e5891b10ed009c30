// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::{String, ToString};

use crate::Value;

// =============================================================================
// From
// =============================================================================

#[test]
fn test_from_primitives() {
    assert_eq!(Value::from(true), Value::Bool(true));
    assert_eq!(Value::from(-3i8), Value::Int(-3));
    assert_eq!(Value::from(123i32), Value::Int(123));
    assert_eq!(Value::from(u32::MAX), Value::Int(i64::from(u32::MAX)));
    assert_eq!(Value::from(1.5f32), Value::Float(1.5));
    assert_eq!(Value::from(45.67f64), Value::Float(45.67));
    assert_eq!(Value::from('c'), Value::Str(String::from("c")));
}

#[test]
fn test_from_strings() {
    assert_eq!(Value::from("borrowed"), Value::Str(String::from("borrowed")));
    assert_eq!(
        Value::from(String::from("owned")),
        Value::Str(String::from("owned"))
    );
}

#[test]
fn test_from_option() {
    assert_eq!(Value::from(None::<&str>), Value::Null);
    assert_eq!(Value::from(Some("A")), Value::from("A"));
    assert_eq!(Value::from(Some(7i64)), Value::Int(7));
}

#[test]
fn test_default_is_null() {
    assert!(Value::default().is_null());
}

// =============================================================================
// Accessors
// =============================================================================

#[test]
fn test_accessors_match_variant_only() {
    let value = Value::from(10i64);

    assert_eq!(value.as_int(), Some(10));
    assert_eq!(value.as_float(), None);
    assert_eq!(value.as_str(), None);
    assert_eq!(value.as_bool(), None);
    assert!(!value.is_null());
}

#[test]
fn test_kind() {
    assert_eq!(Value::Null.kind(), "null");
    assert_eq!(Value::from(false).kind(), "bool");
    assert_eq!(Value::from(1i64).kind(), "int");
    assert_eq!(Value::from(1.0f64).kind(), "float");
    assert_eq!(Value::from("s").kind(), "str");
}

// =============================================================================
// PartialEq with primitives
// =============================================================================

#[test]
fn test_eq_with_primitives() {
    assert_eq!(Value::from("A"), "A");
    assert_eq!(Value::from(123i64), 123i64);
    assert_eq!(Value::from(123i32), 123i32);
    assert_eq!(Value::from(45.67f64), 45.67f64);
    assert_eq!(Value::from(true), true);
}

#[test]
fn test_eq_does_not_coerce_between_kinds() {
    assert_ne!(Value::from(1i64), 1.0f64);
    assert_ne!(Value::from("1"), 1i64);
    assert_ne!(Value::Null, "null");
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn test_display() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::from(true).to_string(), "true");
    assert_eq!(Value::from(-42i64).to_string(), "-42");
    assert_eq!(Value::from(45.67f64).to_string(), "45.67");
    assert_eq!(Value::from("text").to_string(), "text");
}

#[test]
fn test_display_float_keeps_fraction() {
    assert_eq!(Value::from(1.0f64).to_string(), "1.0");
    assert_eq!(Value::from(-0.5f64).to_string(), "-0.5");
}
