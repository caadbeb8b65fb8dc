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

//! Format the secret metadata.

use crate::error::{Error, Result};
use google_cloud_secretmanager_v1::model::Secret;
use std::io::Write;

/// Formats `secret` as indented JSON.
///
/// Field names use the JSON mapping of the Secret Manager API, for example
/// `createTime` and `versionAliases`. Fields with default values are omitted.
pub fn to_json(secret: &Secret) -> Result<String> {
    serde_json::to_string_pretty(secret).map_err(Error::render)
}

/// Writes `secret` as indented JSON, followed by a newline, to `out`.
pub fn write_json<W>(secret: &Secret, out: &mut W) -> Result<()>
where
    W: Write + ?Sized,
{
    let json = to_json(secret)?;
    writeln!(out, "{json}").map_err(Error::output)?;
    out.flush().map_err(Error::output)
}
