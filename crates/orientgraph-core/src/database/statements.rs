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

//! Statement builders
//!
//! Each builder renders one fixed statement shape as an escaped query
//! string. Identity values are always quoted as string literals; class
//! names pass through bare (callers are trusted collaborators, per the
//! connector contract).

use super::marshal::quote;
use crate::edges::NodeRef;

/// Fetch records of `class` whose identity field equals `id`
pub fn select_by_id(class: &str, id: &str) -> String {
    format!("SELECT FROM {} WHERE id = {}", class, quote(id))
}

/// Fetch edge records of `class` between the two endpoint ids
pub fn select_edge(class: &str, source_id: &str, target_id: &str) -> String {
    format!(
        "SELECT FROM {} WHERE in.id = {} AND out.id = {}",
        class,
        quote(source_id),
        quote(target_id)
    )
}

/// Mutate the record of `class` matching `id`. Callers must pass a
/// non-empty set clause; an empty clause means there is nothing to write
/// and no statement should be issued at all.
pub fn update(class: &str, id: &str, set_clause: &str) -> String {
    format!(
        "UPDATE {} SET {} WHERE id = {}",
        class,
        set_clause,
        quote(id)
    )
}

/// Create a vertex record of `class` with the given initial fields
pub fn vertex_create(class: &str, set_clause: &str) -> String {
    if set_clause.is_empty() {
        format!("CREATE VERTEX {}", class)
    } else {
        format!("CREATE VERTEX {} SET {}", class, set_clause)
    }
}

/// Create an edge record of `class` between the endpoint records, located
/// by sub-query on their identity fields
pub fn edge_create(class: &str, source: &NodeRef, target: &NodeRef, set_clause: &str) -> String {
    let mut statement = format!(
        "CREATE EDGE {} FROM (SELECT FROM {} WHERE id = {}) TO (SELECT FROM {} WHERE id = {})",
        class,
        source.class,
        quote(&source.id),
        target.class,
        quote(&target.id)
    );
    if !set_clause.is_empty() {
        statement.push_str(" SET ");
        statement.push_str(set_clause);
    }
    statement
}

/// Create `class` inheriting from the base vertex or edge class
pub fn class_create(class: &str, base_class: &str) -> String {
    format!("CREATE CLASS {} EXTENDS {}", class, base_class)
}

/// Declare the string identity property on `class`
pub fn id_property_create(class: &str) -> String {
    format!("CREATE PROPERTY {}.id STRING", class)
}

/// Put a unique index on the identity property of `class`
pub fn id_index_create(class: &str) -> String {
    format!("CREATE INDEX {}.id UNIQUE", class)
}
