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

//! Print the metadata of a [Secret Manager] secret as JSON.
//!
//! This crate implements the `get-secret` command-line sample. The binary is
//! a thin wrapper around [run], which parses the flags, resolves the project,
//! calls `GetSecret` and reports the outcome.
//!
//! ```sh
//! GCP_PROJECT_ID=my-project get-secret --secret-id=my-secret
//! ```
//!
//! [Secret Manager]: https://cloud.google.com/secret-manager

pub mod args;
pub mod connect;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod render;
pub mod target;

pub use error::{Error, Result};

use args::Flags;
use connect::Connector;
use std::collections::HashMap;
use std::io::Write;
use target::Target;

/// The usage message, printed when `--secret-id` is missing or with `--help`.
pub const USAGE: &str = concat!(
    "Usage: get-secret --secret-id=<your-secret-id>",
    " [--project-id=<project-id>] [--location=<region>]"
);

/// How the program should terminate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The metadata, or the usage with `--help`, was printed.
    Success,
    /// A required flag is missing. The program should exit immediately.
    Abort,
    /// An error was reported. The program should set the exit status and
    /// return normally.
    Failure,
}

impl Termination {
    /// The process exit status.
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Abort | Self::Failure => 1,
        }
    }
}

impl From<Termination> for std::process::ExitCode {
    fn from(value: Termination) -> Self {
        std::process::ExitCode::from(value.code())
    }
}

/// Runs the sample.
///
/// `args` excludes the program name and `env` is a snapshot of the process
/// environment. The metadata is written to `stdout`, diagnostics to `stderr`.
///
/// A missing `--secret-id` prints the usage and returns
/// [Abort][Termination::Abort] before any client is created. Every other
/// failure is reported as a single `Error: <message>` line and returns
/// [Failure][Termination::Failure].
pub async fn run<I, S, C, O, E>(
    args: I,
    env: &HashMap<String, String>,
    connector: &C,
    stdout: &mut O,
    stderr: &mut E,
) -> Termination
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    C: Connector,
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let flags = Flags::parse(args);
    if flags.is_set("help") {
        return match writeln!(stdout, "{USAGE}") {
            Ok(()) => Termination::Success,
            Err(_) => Termination::Failure,
        };
    }
    match execute(&flags, env, connector, stdout).await {
        Ok(()) => Termination::Success,
        Err(e) if e.is_usage() => {
            // Best effort, there is nowhere else to report the problem.
            let _ = writeln!(stderr, "Error: {e}.");
            let _ = writeln!(stderr, "{USAGE}");
            Termination::Abort
        }
        Err(e) => {
            let _ = writeln!(stderr, "Error: {e}");
            Termination::Failure
        }
    }
}

/// Resolves the target, gets its metadata and writes it to `stdout`.
pub async fn execute<C, O>(
    flags: &Flags,
    env: &HashMap<String, String>,
    connector: &C,
    stdout: &mut O,
) -> Result<()>
where
    C: Connector,
    O: Write + ?Sized,
{
    let target = Target::from_flags(flags, env)?;
    let secret = lookup::describe_secret(connector, &target).await?;
    render::write_json(&secret, stdout)
}
