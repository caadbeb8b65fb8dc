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

use get_secret::Termination;
use get_secret::connect::ServiceConnector;
use get_secret::logging;
use std::collections::HashMap;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let env = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect::<HashMap<_, _>>();
    let _guard = logging::enable_tracing(&env);
    let connector = ServiceConnector::new().with_tracing(logging::enabled(&env));

    let termination = get_secret::run(
        std::env::args().skip(1),
        &env,
        &connector,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await;
    if termination == Termination::Abort {
        std::process::exit(termination.code().into());
    }
    termination.into()
}
