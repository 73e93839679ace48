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

//! Command dispatch
//!
//! Two execution modes over the shared connection: strictly ordered with
//! first-error-wins, and concurrent for mutually-independent statements.

use futures::future::join_all;

use super::client::OrientClient;
use super::ADAPTER_TARGET;
use crate::errors::ConnectorResult;
use crate::types::Record;

/// Execute statements strictly in order, stopping at the first error.
/// Returns one row set per executed statement.
pub async fn run_series<C: OrientClient + ?Sized>(
    client: &C,
    statements: &[String],
) -> ConnectorResult<Vec<Vec<Record>>> {
    tracing::debug!(target: ADAPTER_TARGET, count = statements.len(), "running statement series");

    let mut results = Vec::with_capacity(statements.len());
    for statement in statements {
        results.push(client.command(statement).await?);
    }
    Ok(results)
}

/// Execute statements concurrently. No ordering or isolation between
/// members; never pass statements that depend on one another's effect.
/// On failure the first error in statement order is reported; effects of
/// statements that already completed persist. There is no rollback, and
/// whether the backend retains them is backend-dependent.
pub async fn run_parallel<C: OrientClient + ?Sized>(
    client: &C,
    statements: &[String],
) -> ConnectorResult<Vec<Vec<Record>>> {
    tracing::debug!(target: ADAPTER_TARGET, count = statements.len(), "running statements concurrently");

    let outcomes = join_all(statements.iter().map(|statement| client.command(statement))).await;

    let mut results = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        results.push(outcome?);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::client::MockOrientClient;
    use crate::errors::ConnectorError;

    #[tokio::test]
    async fn test_run_series_preserves_order() {
        let mut client = MockOrientClient::new();
        let mut sequence = mockall::Sequence::new();
        client
            .expect_command()
            .withf(|statement| statement == "A")
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(Vec::new()));
        client
            .expect_command()
            .withf(|statement| statement == "B")
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_| Ok(Vec::new()));

        let results = run_series(&client, &["A".to_string(), "B".to_string()])
            .await
            .unwrap();
        assert_eq!(results.len(), 2);
    }

    #[tokio::test]
    async fn test_run_series_stops_at_first_error() {
        let mut client = MockOrientClient::new();
        client
            .expect_command()
            .withf(|statement| statement == "A")
            .times(1)
            .returning(|statement| Err(ConnectorError::backend(statement, "boom")));
        // No expectation for "B": executing it would panic the mock.

        let result = run_series(&client, &["A".to_string(), "B".to_string()]).await;
        assert!(matches!(result, Err(ConnectorError::Backend { .. })));
    }

    #[tokio::test]
    async fn test_run_parallel_reports_error_and_keeps_completed_effects() {
        let mut client = MockOrientClient::new();
        client
            .expect_command()
            .withf(|statement| statement == "A")
            .times(1)
            .returning(|_| Ok(Vec::new()));
        client
            .expect_command()
            .withf(|statement| statement == "B")
            .times(1)
            .returning(|statement| Err(ConnectorError::backend(statement, "boom")));

        let result = run_parallel(&client, &["A".to_string(), "B".to_string()]).await;
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            ConnectorError::Backend { ref operation, .. } if operation == "B"
        ));
    }

    #[tokio::test]
    async fn test_run_parallel_collects_all_results() {
        let mut client = MockOrientClient::new();
        client
            .expect_command()
            .times(2)
            .returning(|_| Ok(vec![crate::types::Record::new()]));

        let results = run_parallel(&client, &["A".to_string(), "B".to_string()])
            .await
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].len(), 1);
    }
}
