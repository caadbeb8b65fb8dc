// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Retrieve the metadata for a secret.

use crate::connect::Connector;
use crate::error::{Error, Result};
use crate::target::Target;
use google_cloud_secretmanager_v1::model::Secret;

/// Gets the metadata for the secret identified by `target`.
///
/// The client is acquired from `connector` and released before this function
/// returns, whether or not the request succeeds. Failures are wrapped with the
/// resource name of the secret.
#[tracing::instrument(level = "debug", skip(connector))]
pub async fn describe_secret<C>(connector: &C, target: &Target) -> Result<Secret>
where
    C: Connector,
{
    let name = target.resource_name();
    let client = connector.connect(target).await?;
    tracing::debug!("acquired Secret Manager client for {name}");

    let response = client.get_secret().set_name(&name).send().await;
    drop(client);
    tracing::debug!("released Secret Manager client for {name}");

    response.map_err(|e| {
        tracing::warn!("GetSecret failed for {name}: {e}");
        Error::request(name, e)
    })
}
