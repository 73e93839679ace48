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

//! Type activation
//!
//! Idempotently provisions a backend class: create it under the base
//! vertex/edge class, declare the string identity property, and put a
//! unique index on it. Re-activation across process restarts is expected,
//! so an already-existing class counts as success. The unique index is
//! what keeps the non-transactional lookup-then-write in the save
//! operations from producing duplicate identities.

use super::client::OrientClient;
use super::{dispatch, statements, ADAPTER_TARGET};
use crate::errors::ConnectorResult;
use crate::types::TypeDefinition;

/// Ensure `definition` exists as a backend class extending `base_class`,
/// with its identity property and unique index. Marks the definition
/// active on success and never resets it.
///
/// The three schema commands are not atomic: a failure after class
/// creation leaves the class without its uniqueness guarantee. No rollback
/// is attempted; a later re-activation absorbs the existing class and the
/// definition stays usable.
pub async fn activate<C: OrientClient + ?Sized>(
    client: &C,
    definition: &mut TypeDefinition,
    base_class: &str,
) -> ConnectorResult<()> {
    if definition.active {
        return Ok(());
    }

    match client
        .command(&statements::class_create(&definition.name, base_class))
        .await
    {
        Ok(_) => {
            dispatch::run_series(
                client,
                &[
                    statements::id_property_create(&definition.name),
                    statements::id_index_create(&definition.name),
                ],
            )
            .await?;
            definition.active = true;
            Ok(())
        }
        Err(err) if err.is_already_exists() => {
            tracing::debug!(
                target: ADAPTER_TARGET,
                class = %definition.name,
                "class already present, skipping schema provisioning"
            );
            definition.active = true;
            Ok(())
        }
        Err(err) => Err(err),
    }
}
