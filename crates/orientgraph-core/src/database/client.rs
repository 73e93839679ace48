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

//! Backend client seam
//!
//! `OrientClient` is the wire-level collaborator the connector drives:
//! session connect, database open/create/close, existence probe, and raw
//! command execution. `RestClient` implements it over the backend HTTP
//! API. The connector logic never touches HTTP directly, so tests swap in
//! a mock client.

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::config::{DatabaseOptions, ServerOptions};
use super::QUERY_TARGET;
use crate::errors::{ConnectorError, ConnectorResult};
use crate::types::{record_from_json, Record};

/// Wire-level operations against the backend server
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrientClient: Send + Sync {
    /// Open a server-level session
    async fn connect_server(&self, server: &ServerOptions) -> ConnectorResult<()>;

    /// Whether the named database exists on the server
    async fn database_exists(&self, name: &str) -> ConnectorResult<bool>;

    /// Create the named database
    async fn create_database(&self, name: &str, storage: &str) -> ConnectorResult<()>;

    /// Open the named database with its own credentials
    async fn open_database(&self, database: &DatabaseOptions) -> ConnectorResult<()>;

    /// Execute one query/command string and return its result rows
    async fn command(&self, statement: &str) -> ConnectorResult<Vec<Record>>;

    /// Tear down the session
    async fn close(&self) -> ConnectorResult<()>;
}

#[derive(Debug, Clone)]
struct RestSession {
    base_url: String,
    server: ServerOptions,
    database: Option<DatabaseOptions>,
}

/// HTTP implementation of [`OrientClient`]
///
/// The backend REST API authenticates per request with basic auth, so the
/// "session" here is client-side state only: the server target recorded by
/// `connect_server` and the database credentials recorded by
/// `open_database`.
#[derive(Debug, Default)]
pub struct RestClient {
    http: reqwest::Client,
    session: RwLock<Option<RestSession>>,
}

impl RestClient {
    pub fn new() -> Self {
        Self::default()
    }

    async fn session(&self) -> ConnectorResult<RestSession> {
        self.session
            .read()
            .await
            .clone()
            .ok_or(ConnectorError::NotConnected)
    }

    async fn list_databases(&self, session: &RestSession) -> ConnectorResult<Vec<String>> {
        let response = self
            .http
            .get(format!("{}/listDatabases", session.base_url))
            .basic_auth(&session.server.username, Some(&session.server.password))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ConnectorError::backend("LIST DATABASES", body));
        }

        let value: Value = serde_json::from_str(&body)?;
        let names = value
            .get("databases")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Ok(names)
    }
}

/// Parse the `{"result": [...]}` body of a command response into rows.
/// Non-object entries carry no fields and are skipped.
fn parse_command_rows(body: &str) -> ConnectorResult<Vec<Record>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: Value = serde_json::from_str(body)?;
    let rows = value
        .get("result")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_object)
                .map(record_from_json)
                .collect()
        })
        .unwrap_or_default();
    Ok(rows)
}

#[async_trait]
impl OrientClient for RestClient {
    async fn connect_server(&self, server: &ServerOptions) -> ConnectorResult<()> {
        let session = RestSession {
            base_url: server.base_url(),
            server: server.clone(),
            database: None,
        };
        // listDatabases doubles as the reachability and auth check.
        self.list_databases(&session).await?;
        *self.session.write().await = Some(session);
        Ok(())
    }

    async fn database_exists(&self, name: &str) -> ConnectorResult<bool> {
        let session = self.session().await?;
        let names = self.list_databases(&session).await?;
        Ok(names.iter().any(|candidate| candidate == name))
    }

    async fn create_database(&self, name: &str, storage: &str) -> ConnectorResult<()> {
        let session = self.session().await?;
        let response = self
            .http
            .post(format!("{}/database/{}/{}", session.base_url, name, storage))
            .basic_auth(&session.server.username, Some(&session.server.password))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ConnectorError::backend(format!("CREATE DATABASE {name}"), body));
        }
        Ok(())
    }

    async fn open_database(&self, database: &DatabaseOptions) -> ConnectorResult<()> {
        let mut guard = self.session.write().await;
        let session = guard.as_mut().ok_or(ConnectorError::NotConnected)?;

        let response = self
            .http
            .get(format!("{}/connect/{}", session.base_url, database.name))
            .basic_auth(&database.username, Some(&database.password))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(ConnectorError::backend(
                format!("OPEN DATABASE {}", database.name),
                body,
            ));
        }

        session.database = Some(database.clone());
        Ok(())
    }

    async fn command(&self, statement: &str) -> ConnectorResult<Vec<Record>> {
        let session = self.session().await?;
        let database = session.database.as_ref().ok_or(ConnectorError::NotConnected)?;

        tracing::debug!(target: QUERY_TARGET, statement, "executing command");

        let response = self
            .http
            .post(format!(
                "{}/command/{}/sql",
                session.base_url, database.name
            ))
            .basic_auth(&database.username, Some(&database.password))
            .body(statement.to_string())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ConnectorError::backend(statement, body));
        }
        parse_command_rows(&body)
    }

    async fn close(&self) -> ConnectorResult<()> {
        // Nothing server-side to tear down with per-request auth.
        *self.session.write().await = None;
        Ok(())
    }
}
