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

//! Connection configuration types
//!
//! Both the server and database sections are mandatory; `validate` rejects
//! incomplete options before any network I/O happens.

use serde::{Deserialize, Serialize};

use crate::errors::{ConnectorError, ConnectorResult};

fn default_port() -> u16 {
    2480
}

fn default_storage() -> String {
    "plocal".to_string()
}

/// Server connection target
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerOptions {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl ServerOptions {
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: default_port(),
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Base URL for the backend HTTP endpoint. A host that already carries
    /// a scheme is used as-is.
    pub fn base_url(&self) -> String {
        if self.host.contains("://") {
            format!("{}:{}", self.host.trim_end_matches('/'), self.port)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }
}

/// Target database name and credentials
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatabaseOptions {
    pub name: String,
    pub username: String,
    pub password: String,
    /// Backend storage engine used when the database has to be created
    #[serde(default = "default_storage")]
    pub storage: String,
}

impl DatabaseOptions {
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            password: password.into(),
            storage: default_storage(),
        }
    }

    pub fn with_storage(mut self, storage: impl Into<String>) -> Self {
        self.storage = storage.into();
        self
    }
}

/// Options accepted by `connect`. The `server` section also deserializes
/// from the legacy `protocol` key, and `database` from `db`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectOptions {
    #[serde(alias = "protocol")]
    pub server: Option<ServerOptions>,
    #[serde(alias = "db")]
    pub database: Option<DatabaseOptions>,
}

impl ConnectOptions {
    pub fn new(server: ServerOptions, database: DatabaseOptions) -> Self {
        Self {
            server: Some(server),
            database: Some(database),
        }
    }

    /// Check that both mandatory sections are present and usable. Returns
    /// the borrowed sections so callers do not re-unwrap.
    pub fn validate(&self) -> ConnectorResult<(&ServerOptions, &DatabaseOptions)> {
        let server = self.server.as_ref().ok_or_else(|| {
            ConnectorError::Configuration("missing server connection target".to_string())
        })?;
        if server.host.trim().is_empty() {
            return Err(ConnectorError::Configuration(
                "server host must not be empty".to_string(),
            ));
        }

        let database = self.database.as_ref().ok_or_else(|| {
            ConnectorError::Configuration("missing database name and credentials".to_string())
        })?;
        if database.name.trim().is_empty() {
            return Err(ConnectorError::Configuration(
                "database name must not be empty".to_string(),
            ));
        }

        Ok((server, database))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_both_sections() {
        let options = ConnectOptions::default();
        assert!(matches!(
            options.validate(),
            Err(ConnectorError::Configuration(_))
        ));

        let options = ConnectOptions {
            server: Some(ServerOptions::new("localhost", "root", "secret")),
            database: None,
        };
        assert!(matches!(
            options.validate(),
            Err(ConnectorError::Configuration(_))
        ));

        let options = ConnectOptions {
            server: None,
            database: Some(DatabaseOptions::new("graph", "admin", "admin")),
        };
        assert!(matches!(
            options.validate(),
            Err(ConnectorError::Configuration(_))
        ));
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let options = ConnectOptions::new(
            ServerOptions::new("  ", "root", "secret"),
            DatabaseOptions::new("graph", "admin", "admin"),
        );
        assert!(options.validate().is_err());

        let options = ConnectOptions::new(
            ServerOptions::new("localhost", "root", "secret"),
            DatabaseOptions::new("", "admin", "admin"),
        );
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_complete_options() {
        let options = ConnectOptions::new(
            ServerOptions::new("localhost", "root", "secret"),
            DatabaseOptions::new("graph", "admin", "admin"),
        );
        let (server, database) = options.validate().unwrap();
        assert_eq!(server.host, "localhost");
        assert_eq!(database.name, "graph");
    }

    #[test]
    fn test_deserialize_legacy_keys() {
        let options: ConnectOptions = serde_json::from_str(
            r#"{
                "protocol": {"host": "localhost", "username": "root", "password": "secret"},
                "db": {"name": "graph", "username": "admin", "password": "admin"}
            }"#,
        )
        .unwrap();

        let (server, database) = options.validate().unwrap();
        assert_eq!(server.port, 2480);
        assert_eq!(database.storage, "plocal");
    }

    #[test]
    fn test_base_url() {
        let server = ServerOptions::new("localhost", "root", "secret");
        assert_eq!(server.base_url(), "http://localhost:2480");

        let server = ServerOptions::new("https://db.example.com", "root", "secret").with_port(443);
        assert_eq!(server.base_url(), "https://db.example.com:443");
    }
}
