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

//! The error type for the `get-secret` sample.

use google_cloud_gax::error::rpc::Code;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A specialized [Result][std::result::Result] for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for the `get-secret` sample.
///
/// Only [is_usage][Error::is_usage] errors terminate the program immediately,
/// all the other kinds are reported by the top-level handler in
/// [run][crate::run].
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// A required command-line flag is missing.
    pub fn is_usage(&self) -> bool {
        matches!(self.0, ErrorKind::Usage(_))
    }

    /// A required configuration value is missing.
    pub fn is_configuration(&self) -> bool {
        matches!(self.0, ErrorKind::Configuration(_))
    }

    /// The Secret Manager client could not be created.
    pub fn is_connect(&self) -> bool {
        matches!(self.0, ErrorKind::Connect(_))
    }

    /// The secret does not exist, or the caller cannot see it.
    pub fn is_not_found(&self) -> bool {
        matches!(self.0, ErrorKind::NotFound { .. })
    }

    /// The service, or the transport, reported an error.
    ///
    /// This includes [is_not_found][Error::is_not_found] errors.
    pub fn is_remote(&self) -> bool {
        matches!(
            self.0,
            ErrorKind::NotFound { .. } | ErrorKind::Remote { .. }
        )
    }

    /// The secret metadata could not be written to the output.
    pub fn is_output(&self) -> bool {
        matches!(self.0, ErrorKind::Render(_) | ErrorKind::Output(_))
    }

    /// The resource name of the failed request, if any.
    pub fn resource_name(&self) -> Option<&str> {
        match &self.0 {
            ErrorKind::NotFound { name, .. } | ErrorKind::Remote { name, .. } => {
                Some(name.as_str())
            }
            _ => None,
        }
    }

    /// The underlying client library error, if any.
    pub fn remote(&self) -> Option<&google_cloud_gax::error::Error> {
        match &self.0 {
            ErrorKind::NotFound { source, .. } | ErrorKind::Remote { source, .. } => Some(source),
            _ => None,
        }
    }

    pub(crate) fn usage(flag: &'static str) -> Error {
        Error(ErrorKind::Usage(flag))
    }

    pub(crate) fn configuration<T: Into<String>>(message: T) -> Error {
        Error(ErrorKind::Configuration(message.into()))
    }

    /// Creates an error for a [Connector][crate::connect::Connector] that
    /// cannot produce a client.
    pub fn connect<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::Connect(source.into()))
    }

    /// Wraps an error returned by the client library with the resource name.
    pub(crate) fn request<N>(name: N, source: google_cloud_gax::error::Error) -> Error
    where
        N: Into<String>,
    {
        let name = name.into();
        match source.status().map(|s| s.code) {
            Some(Code::NotFound) => Error(ErrorKind::NotFound { name, source }),
            _ => Error(ErrorKind::Remote { name, source }),
        }
    }

    pub(crate) fn render(source: serde_json::Error) -> Error {
        Error(ErrorKind::Render(source))
    }

    pub(crate) fn output(source: std::io::Error) -> Error {
        Error(ErrorKind::Output(source))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("--{0} argument is required")]
    Usage(&'static str),
    #[error("{0}")]
    Configuration(String),
    #[error("cannot create Secret Manager client: {0}")]
    Connect(#[source] BoxError),
    #[error("secret '{name}' not found: {source}")]
    NotFound {
        name: String,
        #[source]
        source: google_cloud_gax::error::Error,
    },
    #[error("failed to get secret '{name}': {source}")]
    Remote {
        name: String,
        #[source]
        source: google_cloud_gax::error::Error,
    },
    #[error("cannot format the secret metadata as JSON: {0}")]
    Render(#[source] serde_json::Error),
    #[error("cannot write the secret metadata: {0}")]
    Output(#[source] std::io::Error),
}
