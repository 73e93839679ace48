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

//! Connector contract
//!
//! The interface the calling graph abstraction programs against. A
//! connector adapts these operations to one backend's query language and
//! wire protocol.

use async_trait::async_trait;

use super::config::ConnectOptions;
use crate::edges::{Edge, NodeRef};
use crate::errors::ConnectorResult;
use crate::nodes::Node;
use crate::types::{Record, SearchQuery, TypeDefinition, TypeRegistry};

/// Graph-store connector operations
#[async_trait]
pub trait GraphConnector: Send + Sync {
    /// Establish the backend connection and open (or lazily create) the
    /// target database. Fails with a configuration error, before any I/O,
    /// when mandatory options are absent.
    async fn connect(&self, options: &ConnectOptions) -> ConnectorResult<()>;

    /// Tear the connection down. Succeeds as a no-op when not connected.
    async fn close(&self) -> ConnectorResult<()>;

    /// Register the backend's base scalar types with the calling type
    /// system.
    fn define_base_types(&self, registry: &mut TypeRegistry);

    /// Ensure a node class exists, with its identity property and unique
    /// index. Idempotent; marks the definition active.
    async fn activate_node_type(&self, definition: &mut TypeDefinition) -> ConnectorResult<()>;

    /// Ensure an edge class exists, with its identity property and unique
    /// index. Idempotent; marks the definition active.
    async fn activate_edge_type(&self, definition: &mut TypeDefinition) -> ConnectorResult<()>;

    /// Look up records by id, scoped to a class when given. With only an
    /// id, the base vertex class is probed first, then the base edge
    /// class; the first non-empty result wins. Without an id the result
    /// is empty.
    async fn find(&self, query: &SearchQuery) -> ConnectorResult<Vec<Record>>;

    /// Fetch one node record by identity, or `None` when absent
    async fn get_node(&self, id: &str, class: &str) -> ConnectorResult<Option<Record>>;

    /// Fetch one edge record by (class, source id, target id), or `None`
    /// when absent
    async fn get_edge(
        &self,
        source: &NodeRef,
        target: &NodeRef,
        class: &str,
    ) -> ConnectorResult<Option<Record>>;

    /// Create or update a node, deciding by an identity lookup. The
    /// lookup-then-write pair is not transactional; the unique identity
    /// index turns a lost race into a backend command error the caller
    /// may retry.
    async fn save_node(&self, node: &Node) -> ConnectorResult<Vec<Record>>;

    /// Create or update an edge, deciding by the (class, source id,
    /// target id) lookup, never by the payload contents.
    async fn save_edge(&self, edge: &Edge) -> ConnectorResult<Vec<Record>>;
}
