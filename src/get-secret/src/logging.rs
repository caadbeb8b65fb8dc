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

//! Opt-in diagnostics.

use std::collections::HashMap;

/// Set to `true` to enable diagnostics, including the client library tracing.
pub const LOGGING_VAR: &str = "GOOGLE_CLOUD_RUST_LOGGING";

// Returns true if the environment enables diagnostics.
pub fn enabled(env: &HashMap<String, String>) -> bool {
    env.get(LOGGING_VAR).is_some_and(|v| v == "true")
}

/// Installs a subscriber writing to stderr when diagnostics are enabled.
///
/// The subscriber remains installed on the current thread until the guard is
/// dropped.
pub fn enable_tracing(env: &HashMap<String, String>) -> Option<tracing::dispatcher::DefaultGuard> {
    if !enabled(env) {
        return None;
    }
    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    Some(tracing::subscriber::set_default(subscriber))
}
