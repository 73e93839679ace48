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

//! Backend connector layer
//!
//! Adapts the graph-store contract in [`traits`] to an OrientDB-compatible
//! backend: statement building, payload marshalling, schema activation,
//! command dispatch, and connection lifecycle. The wire protocol itself
//! lives behind the [`client::OrientClient`] seam.

pub mod activation;
pub mod client;
pub mod config;
pub mod dispatch;
pub mod marshal;
pub mod orientdb;
pub mod statements;
pub mod traits;

pub use client::{OrientClient, RestClient};
pub use config::{ConnectOptions, DatabaseOptions, ServerOptions};
pub use orientdb::{ConnectionHandle, OrientConnector};
pub use traits::GraphConnector;

/// Base class all vertex classes extend
pub const BASE_VERTEX_CLASS: &str = "V";

/// Base class all edge classes extend
pub const BASE_EDGE_CLASS: &str = "E";

/// Log target for adapter lifecycle and decision events
pub(crate) const ADAPTER_TARGET: &str = "orientgraph::adapter";

/// Log target for statements sent to the backend
pub(crate) const QUERY_TARGET: &str = "orientgraph::query";

/// Connect a REST-backed connector with the given options
pub async fn connect(
    options: &ConnectOptions,
) -> crate::errors::ConnectorResult<OrientConnector<RestClient>> {
    let connector = OrientConnector::new();
    GraphConnector::connect(&connector, options).await?;
    Ok(connector)
}
