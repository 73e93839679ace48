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

//! Edge records and endpoint references

use crate::types::{FieldMap, FieldValue};

/// Reference to an edge endpoint record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRef {
    pub id: String,
    pub class: String,
}

impl NodeRef {
    pub fn new(id: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            class: class.into(),
        }
    }
}

/// An ephemeral edge record for one save/find call. An edge is identified
/// by (class, source.id, target.id); `data` may still carry its own `id`
/// field, which addresses the stored record on update.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Backend class name; blank means the base edge class
    pub class: String,
    pub source: NodeRef,
    pub target: NodeRef,
    pub data: FieldMap,
}

impl Edge {
    pub fn new(class: impl Into<String>, source: NodeRef, target: NodeRef) -> Self {
        Self {
            class: class.into(),
            source,
            target,
            data: FieldMap::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// The payload `id` field, when present as a string
    pub fn id(&self) -> Option<&str> {
        self.data.get("id").and_then(FieldValue::as_str)
    }
}
