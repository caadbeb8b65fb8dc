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

//! Acquire Secret Manager clients.

use crate::error::{Error, Result};
use crate::target::Target;
use google_cloud_secretmanager_v1::client::SecretManagerService;
use std::future::Future;

/// Produces the client used for a single lookup.
///
/// The lookup owns the returned client and drops it, releasing its
/// resources, when the request completes. Implementations decide whether each
/// call creates a new client or hands out a clone of a shared one.
pub trait Connector {
    /// Returns a client suitable for `target`.
    fn connect(&self, target: &Target) -> impl Future<Output = Result<SecretManagerService>> + Send;
}

/// Creates a new client for each lookup.
///
/// Regional targets use the regional endpoint. Credentials are the
/// Application Default Credentials.
#[derive(Clone, Debug, Default)]
pub struct ServiceConnector {
    tracing: bool,
}

impl ServiceConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables the client library tracing for new clients.
    pub fn with_tracing(mut self, v: bool) -> Self {
        self.tracing = v;
        self
    }
}

impl Connector for ServiceConnector {
    async fn connect(&self, target: &Target) -> Result<SecretManagerService> {
        let mut builder = SecretManagerService::builder();
        if let Some(endpoint) = target.endpoint() {
            builder = builder.with_endpoint(endpoint);
        }
        if self.tracing {
            builder = builder.with_tracing();
        }
        builder.build().await.map_err(Error::connect)
    }
}

/// Hands out clones of a caller-owned client.
///
/// Long-running applications can create one client and reuse it for many
/// lookups. The underlying connections are released when the last clone is
/// dropped. The endpoint is fixed when the client is created, so regional
/// targets need a client built for that region.
#[derive(Clone, Debug)]
pub struct SharedConnector {
    client: SecretManagerService,
}

impl SharedConnector {
    pub fn new(client: SecretManagerService) -> Self {
        Self { client }
    }
}

impl Connector for SharedConnector {
    fn connect(
        &self,
        _target: &Target,
    ) -> impl Future<Output = Result<SecretManagerService>> + Send {
        std::future::ready(Ok(self.client.clone()))
    }
}
