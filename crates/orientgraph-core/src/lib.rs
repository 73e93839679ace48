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

//! # OrientGraph Core
//!
//! Connector adapting a generic graph-store abstraction to an
//! OrientDB-compatible backend. It translates the contract's operations
//! (connect, close, type activation, node/edge save and lookup) into the
//! backend's SQL dialect and REST protocol, and returns results as plain
//! key/value records.
//!
//! ```no_run
//! use orientgraph_core::{
//!     ConnectOptions, DatabaseOptions, GraphConnector, Node, ServerOptions,
//! };
//!
//! # async fn demo() -> orientgraph_core::ConnectorResult<()> {
//! let options = ConnectOptions::new(
//!     ServerOptions::new("localhost", "root", "secret"),
//!     DatabaseOptions::new("graph", "admin", "admin"),
//! );
//! let connector = orientgraph_core::database::connect(&options).await?;
//!
//! let node = Node::new("Person").with_id("abc").with_field("name", "Ann");
//! connector.save_node(&node).await?;
//! connector.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod edges;
pub mod errors;
pub mod nodes;
pub mod types;

// Re-export commonly used types
pub use errors::{ConnectorError, ConnectorResult};
pub use types::{
    FieldMap, FieldValue, Record, ScalarKind, SearchQuery, TypeDefinition, TypeRegistry,
};

// Re-export the contract and the connector
pub use database::{
    ConnectOptions, ConnectionHandle, DatabaseOptions, GraphConnector, OrientClient,
    OrientConnector, RestClient, ServerOptions, BASE_EDGE_CLASS, BASE_VERTEX_CLASS,
};

// Re-export record types
pub use edges::{Edge, NodeRef};
pub use nodes::Node;
