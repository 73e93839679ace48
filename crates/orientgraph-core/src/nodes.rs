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

//! Node records

use crate::types::{FieldMap, FieldValue};

/// An ephemeral node record for one save/find call. The `id` entry of
/// `data` is the caller-supplied identity, conventionally a UUID string.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Backend class name; blank means the base vertex class
    pub class: String,
    pub data: FieldMap,
}

impl Node {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            data: FieldMap::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_field("id", id.into())
    }

    /// The identity field, when present as a string
    pub fn id(&self) -> Option<&str> {
        self.data.get("id").and_then(FieldValue::as_str)
    }
}
