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

//! OrientDB connector
//!
//! Lifecycle management plus the entity-operation façade. The connection
//! handle is the connector's only shared mutable state: written once at
//! connect time, read by every operation, and cleared by close.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::activation;
use super::client::{OrientClient, RestClient};
use super::config::ConnectOptions;
use super::dispatch;
use super::statements;
use super::{marshal, ADAPTER_TARGET, BASE_EDGE_CLASS, BASE_VERTEX_CLASS};
use crate::database::traits::GraphConnector;
use crate::edges::{Edge, NodeRef};
use crate::errors::{ConnectorError, ConnectorResult};
use crate::nodes::Node;
use crate::types::{
    FieldValue, Record, ScalarKind, SearchQuery, TypeDefinition, TypeRegistry,
};

/// Opaque marker for a live backend session
#[derive(Debug, Clone)]
pub struct ConnectionHandle {
    /// Name of the opened database
    pub database: String,
}

/// Connector adapting the graph-store contract to an OrientDB-compatible
/// backend, generic over the wire client so tests can substitute one.
#[derive(Debug)]
pub struct OrientConnector<C = RestClient> {
    client: C,
    handle: RwLock<Option<ConnectionHandle>>,
}

impl OrientConnector<RestClient> {
    /// Connector backed by the HTTP client
    pub fn new() -> Self {
        Self::with_client(RestClient::new())
    }
}

impl Default for OrientConnector<RestClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: OrientClient> OrientConnector<C> {
    pub fn with_client(client: C) -> Self {
        Self {
            client,
            handle: RwLock::new(None),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Whether a live connection handle exists
    pub async fn is_connected(&self) -> bool {
        self.handle.read().await.is_some()
    }

    async fn ensure_connected(&self) -> ConnectorResult<()> {
        if self.handle.read().await.is_some() {
            Ok(())
        } else {
            Err(ConnectorError::NotConnected)
        }
    }

    /// Execute statements strictly in order, stopping at the first error
    pub async fn run_series(&self, statements: &[String]) -> ConnectorResult<Vec<Vec<Record>>> {
        self.ensure_connected().await?;
        dispatch::run_series(&self.client, statements).await
    }

    /// Execute mutually-independent statements concurrently
    pub async fn run_parallel(&self, statements: &[String]) -> ConnectorResult<Vec<Vec<Record>>> {
        self.ensure_connected().await?;
        dispatch::run_parallel(&self.client, statements).await
    }

    async fn activate(
        &self,
        definition: &mut TypeDefinition,
        base_class: &str,
    ) -> ConnectorResult<()> {
        self.ensure_connected().await?;
        activation::activate(&self.client, definition, base_class).await
    }
}

#[async_trait]
impl<C: OrientClient> GraphConnector for OrientConnector<C> {
    async fn connect(&self, options: &ConnectOptions) -> ConnectorResult<()> {
        let (server, database) = options.validate()?;

        self.client.connect_server(server).await?;

        // Creation is keyed on a definite existence probe, so auth or
        // network failures while opening never trigger a spurious create.
        if !self.client.database_exists(&database.name).await? {
            tracing::info!(
                target: ADAPTER_TARGET,
                database = %database.name,
                "database missing, creating it"
            );
            self.client
                .create_database(&database.name, &database.storage)
                .await?;
        }
        self.client.open_database(database).await?;

        *self.handle.write().await = Some(ConnectionHandle {
            database: database.name.clone(),
        });
        tracing::info!(target: ADAPTER_TARGET, database = %database.name, "connected");
        Ok(())
    }

    async fn close(&self) -> ConnectorResult<()> {
        let mut handle = self.handle.write().await;
        if handle.is_none() {
            return Ok(());
        }
        self.client.close().await?;
        *handle = None;
        tracing::info!(target: ADAPTER_TARGET, "connection closed");
        Ok(())
    }

    fn define_base_types(&self, registry: &mut TypeRegistry) {
        registry.register("string", ScalarKind::String);
        registry.register("uuid", ScalarKind::String);
        registry.register("integer", ScalarKind::Integer);
        registry.register("float", ScalarKind::Float);
        registry.register("boolean", ScalarKind::Boolean);
        registry.register("list", ScalarKind::List);
        registry.register("set", ScalarKind::Set);
    }

    async fn activate_node_type(&self, definition: &mut TypeDefinition) -> ConnectorResult<()> {
        self.activate(definition, BASE_VERTEX_CLASS).await
    }

    async fn activate_edge_type(&self, definition: &mut TypeDefinition) -> ConnectorResult<()> {
        self.activate(definition, BASE_EDGE_CLASS).await
    }

    async fn find(&self, query: &SearchQuery) -> ConnectorResult<Vec<Record>> {
        self.ensure_connected().await?;

        match (&query.id, &query.class) {
            (Some(id), Some(class)) => {
                self.client
                    .command(&statements::select_by_id(class, id))
                    .await
            }
            (Some(id), None) => {
                let vertices = self
                    .client
                    .command(&statements::select_by_id(BASE_VERTEX_CLASS, id))
                    .await?;
                if !vertices.is_empty() {
                    return Ok(vertices);
                }
                self.client
                    .command(&statements::select_by_id(BASE_EDGE_CLASS, id))
                    .await
            }
            _ => Ok(Vec::new()),
        }
    }

    async fn get_node(&self, id: &str, class: &str) -> ConnectorResult<Option<Record>> {
        self.ensure_connected().await?;
        let mut rows = self
            .client
            .command(&statements::select_by_id(class, id))
            .await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.remove(0))
        })
    }

    async fn get_edge(
        &self,
        source: &NodeRef,
        target: &NodeRef,
        class: &str,
    ) -> ConnectorResult<Option<Record>> {
        self.ensure_connected().await?;
        let mut rows = self
            .client
            .command(&statements::select_edge(class, &source.id, &target.id))
            .await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.remove(0))
        })
    }

    async fn save_node(&self, node: &Node) -> ConnectorResult<Vec<Record>> {
        self.ensure_connected().await?;

        let id = node.id().ok_or_else(|| {
            ConnectorError::InvalidArgument(
                "node data must carry a string \"id\" field".to_string(),
            )
        })?;
        let class = if node.class.trim().is_empty() {
            BASE_VERTEX_CLASS
        } else {
            node.class.as_str()
        };

        let existing = self
            .client
            .command(&statements::select_by_id(class, id))
            .await?;

        if existing.is_empty() {
            let sets = marshal::set_clause(&node.data, &[]);
            self.client
                .command(&statements::vertex_create(class, &sets))
                .await
        } else {
            let sets = marshal::set_clause(&node.data, &["id"]);
            if sets.is_empty() {
                return Ok(existing);
            }
            self.client
                .command(&statements::update(class, id, &sets))
                .await
        }
    }

    async fn save_edge(&self, edge: &Edge) -> ConnectorResult<Vec<Record>> {
        self.ensure_connected().await?;

        let class = if edge.class.trim().is_empty() {
            BASE_EDGE_CLASS
        } else {
            edge.class.as_str()
        };

        let existing = self
            .client
            .command(&statements::select_edge(
                class,
                &edge.source.id,
                &edge.target.id,
            ))
            .await?;

        if existing.is_empty() {
            let sets = marshal::set_clause(&edge.data, &[]);
            self.client
                .command(&statements::edge_create(
                    class,
                    &edge.source,
                    &edge.target,
                    &sets,
                ))
                .await
        } else {
            // Updates address the stored record through its id field:
            // the payload's when present, otherwise the stored one.
            let id = edge
                .id()
                .or_else(|| existing[0].get("id").and_then(FieldValue::as_str))
                .map(str::to_string)
                .ok_or_else(|| {
                    ConnectorError::InvalidArgument(
                        "edge update requires an \"id\" field on the payload or the stored record"
                            .to_string(),
                    )
                })?;
            let sets = marshal::set_clause(&edge.data, &["id"]);
            if sets.is_empty() {
                return Ok(existing);
            }
            self.client
                .command(&statements::update(class, &id, &sets))
                .await
        }
    }
}
