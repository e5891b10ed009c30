// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use proptest::prelude::*;

use crate::{ObjectContainer, Value};

fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e6..1.0e6f64).prop_map(Value::Float),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::Str),
    ]
}

proptest! {
    #[test]
    fn mixed_values_keep_order_and_render(
        values in prop::collection::vec(value_strategy(), 0..40)
    ) {
        let mut container = ObjectContainer::new();
        for value in &values {
            container.add(value.clone());
        }

        prop_assert_eq!(container.size(), values.len());
        for (i, value) in values.iter().enumerate() {
            prop_assert_eq!(container.get(i), Ok(value));
        }

        let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
        prop_assert_eq!(container.to_string(), alloc::format!("[{}]", rendered.join(", ")));
    }

    #[test]
    fn removing_nulls_keeps_the_rest(
        values in prop::collection::vec(value_strategy(), 0..40)
    ) {
        let mut container = ObjectContainer::new();
        for value in &values {
            container.add(value.clone());
        }

        let mut i = 0;
        while i < container.size() {
            if container.get(i).map(Value::is_null) == Ok(true) {
                prop_assert_eq!(container.remove(i), Ok(Value::Null));
            } else {
                i += 1;
            }
        }

        let expected: Vec<&Value> = values.iter().filter(|v| !v.is_null()).collect();
        prop_assert_eq!(container.size(), expected.len());
        for (i, value) in expected.into_iter().enumerate() {
            prop_assert_eq!(container.get(i), Ok(value));
        }
    }
}
