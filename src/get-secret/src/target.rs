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

//! The secret to look up, resolved from flags and the environment.

use crate::args::Flags;
use crate::error::{Error, Result};
use std::collections::HashMap;

/// The environment variable holding the default project id.
pub const PROJECT_ID_VAR: &str = "GCP_PROJECT_ID";

/// Identifies a secret in Secret Manager.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    project_id: String,
    secret_id: String,
    location: Option<String>,
}

impl Target {
    /// Creates a target for a global secret.
    pub fn new<P, S>(project_id: P, secret_id: S) -> Self
    where
        P: Into<String>,
        S: Into<String>,
    {
        Self {
            project_id: project_id.into(),
            secret_id: secret_id.into(),
            location: None,
        }
    }

    /// Changes the target to a regional secret.
    pub fn with_location<V: Into<String>>(mut self, v: V) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Resolves the target from the command-line flags and the environment.
    ///
    /// `--secret-id` is required, its absence is a usage error. The project
    /// comes from `--project-id`, or from `GCP_PROJECT_ID` in `env`. The
    /// optional `--location` selects a regional secret.
    pub fn from_flags(flags: &Flags, env: &HashMap<String, String>) -> Result<Self> {
        let secret_id = flags
            .value("secret-id")
            .ok_or_else(|| Error::usage("secret-id"))?;
        let project_id = flags
            .value("project-id")
            .or_else(|| {
                env.get(PROJECT_ID_VAR)
                    .map(String::as_str)
                    .filter(|v| !v.is_empty())
            })
            .ok_or_else(|| {
                Error::configuration(format!(
                    "{PROJECT_ID_VAR} environment variable is not set. \
                     Please set it to your Google Cloud Project ID, or use --project-id."
                ))
            })?;
        let target = Self::new(project_id, secret_id);
        Ok(match flags.value("location") {
            Some(location) => target.with_location(location),
            None => target,
        })
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn secret_id(&self) -> &str {
        &self.secret_id
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// The resource name used in the `GetSecret` request.
    ///
    /// Global secrets use `projects/{project}/secrets/{secret}`, regional
    /// secrets use `projects/{project}/locations/{location}/secrets/{secret}`.
    pub fn resource_name(&self) -> String {
        match &self.location {
            None => format!("projects/{}/secrets/{}", self.project_id, self.secret_id),
            Some(location) => format!(
                "projects/{}/locations/{location}/secrets/{}",
                self.project_id, self.secret_id
            ),
        }
    }

    /// The service endpoint for regional secrets.
    ///
    /// Returns `None` for global secrets, where the client library default
    /// applies.
    pub fn endpoint(&self) -> Option<String> {
        self.location
            .as_ref()
            .map(|location| format!("https://secretmanager.{location}.rep.googleapis.com"))
    }
}
