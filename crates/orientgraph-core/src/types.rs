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

//! Core value model and type-system plumbing
//!
//! Payloads and result rows are schema-less key/value mappings constrained
//! to a closed set of value kinds. `BTreeMap` keeps field order stable so
//! rendered statements are deterministic.

use std::collections::BTreeMap;

use serde_json::Value;

/// A field value permitted in node/edge payloads and result rows
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    List(Vec<FieldValue>),
    Set(Vec<FieldValue>),
}

/// An attribute mapping for payloads and result rows
pub type FieldMap = BTreeMap<String, FieldValue>;

/// A single result row returned by the backend
pub type Record = FieldMap;

impl FieldValue {
    /// Borrow the string content, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Convert a JSON value into a field value. JSON nulls have no
    /// counterpart in the closed kind set and yield `None`; objects are
    /// outside the permitted kinds and yield `None` as well.
    pub fn from_json(value: &Value) -> Option<FieldValue> {
        match value {
            Value::String(s) => Some(FieldValue::String(s.clone())),
            Value::Bool(b) => Some(FieldValue::Boolean(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(FieldValue::Integer(i))
                } else {
                    n.as_f64().map(FieldValue::Float)
                }
            }
            Value::Array(items) => Some(FieldValue::List(
                items.iter().filter_map(FieldValue::from_json).collect(),
            )),
            Value::Null | Value::Object(_) => None,
        }
    }

    /// Convert this field value to JSON. Sets serialize as arrays.
    pub fn to_json(&self) -> Value {
        match self {
            FieldValue::String(s) => Value::String(s.clone()),
            FieldValue::Integer(i) => Value::from(*i),
            FieldValue::Float(f) => Value::from(*f),
            FieldValue::Boolean(b) => Value::Bool(*b),
            FieldValue::List(items) | FieldValue::Set(items) => {
                Value::Array(items.iter().map(FieldValue::to_json).collect())
            }
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

/// Build a result row from a JSON object. Backend metadata attributes
/// (keys starting with `@`) and values outside the permitted kinds are
/// dropped.
pub fn record_from_json(object: &serde_json::Map<String, Value>) -> Record {
    let mut record = Record::new();
    for (key, value) in object {
        if key.starts_with('@') {
            continue;
        }
        if let Some(field) = FieldValue::from_json(value) {
            record.insert(key.clone(), field);
        }
    }
    record
}

/// Scalar kinds the backend supports for payload fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Integer,
    Float,
    Boolean,
    List,
    Set,
}

/// Registry of named scalar types exposed to the calling graph abstraction
#[derive(Debug, Default)]
pub struct TypeRegistry {
    kinds: BTreeMap<String, ScalarKind>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a named scalar type
    pub fn register(&mut self, name: impl Into<String>, kind: ScalarKind) {
        self.kinds.insert(name.into(), kind);
    }

    /// Look up a registered scalar type by name
    pub fn lookup(&self, name: &str) -> Option<ScalarKind> {
        self.kinds.get(name).copied()
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// A node or edge class definition handed in by the caller for activation.
/// `active` flips to true once the backend has confirmed (or already had)
/// the class; it is never reset by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
    pub name: String,
    pub active: bool,
}

impl TypeDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: false,
        }
    }
}

/// Parameters for a `find` lookup
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Identity value to look up
    pub id: Option<String>,
    /// Class to search under; when absent the base vertex class is probed
    /// first, then the base edge class
    pub class: Option<String>,
}

impl SearchQuery {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            class: None,
        }
    }

    pub fn by_id_and_class(id: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            class: Some(class.into()),
        }
    }
}
