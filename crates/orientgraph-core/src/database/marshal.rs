/*
Copyright 2024, Zep Software, Inc.

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! Payload marshalling into backend literal and SET syntax

use crate::types::{FieldMap, FieldValue};

/// Quote a string as a backend string literal, escaping backslashes and
/// double quotes. Identity values always go through this path.
pub fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

/// Render a field value as a backend literal. Lists and sets share the
/// embedded collection syntax.
pub fn literal(value: &FieldValue) -> String {
    match value {
        FieldValue::String(s) => quote(s),
        FieldValue::Integer(i) => i.to_string(),
        FieldValue::Float(f) => {
            let mut rendered = f.to_string();
            if !rendered.contains('.') && !rendered.contains("inf") && !rendered.contains("NaN") {
                rendered.push_str(".0");
            }
            rendered
        }
        FieldValue::Boolean(b) => b.to_string(),
        FieldValue::List(items) | FieldValue::Set(items) => {
            let rendered: Vec<String> = items.iter().map(literal).collect();
            format!("[{}]", rendered.join(", "))
        }
    }
}

/// Render a payload as a `field = value` assignment list, dropping the
/// excluded keys (the identity field on update, nothing on create). An
/// empty result means the caller has nothing to write.
pub fn set_clause(data: &FieldMap, exclude: &[&str]) -> String {
    let assignments: Vec<String> = data
        .iter()
        .filter(|(key, _)| !exclude.contains(&key.as_str()))
        .map(|(key, value)| format!("{} = {}", key, literal(value)))
        .collect();
    assignments.join(", ")
}
