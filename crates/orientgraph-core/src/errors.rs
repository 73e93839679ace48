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

//! Connector error types and result alias

use thiserror::Error;

/// Errors surfaced by the connector
#[derive(Error, Debug)]
pub enum ConnectorError {
    /// Required connection options are missing or blank. Raised before any
    /// network I/O is attempted.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A data operation was attempted without a live connection handle.
    #[error("Not connected to the backend")]
    NotConnected,

    /// A required piece of the payload is missing or malformed.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The backend rejected an operation. `operation` is the statement text
    /// for command failures, or the lifecycle step for connection failures.
    #[error("Backend error during {operation}: {message}")]
    Backend { operation: String, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConnectorError {
    /// Build a backend error from an operation and the backend's message.
    pub fn backend(operation: impl Into<String>, message: impl Into<String>) -> Self {
        ConnectorError::Backend {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Whether this error reports that a class or schema object is already
    /// present on the backend. Type activation absorbs these.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, ConnectorError::Backend { message, .. }
            if message.to_lowercase().contains("already exists"))
    }
}

/// Result type for connector operations
pub type ConnectorResult<T> = Result<T, ConnectorError>;
