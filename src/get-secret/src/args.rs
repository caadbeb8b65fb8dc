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

//! Permissive command-line flag parsing.
//!
//! Only arguments starting with `--` are considered. `--name=value` sets a
//! string value and `--name` sets a switch. Unknown flags are accepted and
//! positional arguments are ignored.

use std::collections::HashMap;

/// The value of a single flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlagValue {
    /// The flag appeared without a value, as in `--help`.
    Switch,
    /// The flag appeared with a value, as in `--secret-id=my-secret`.
    Value(String),
}

/// The flags parsed from a command line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Flags(HashMap<String, FlagValue>);

impl Flags {
    /// Parses the flags in `args`.
    ///
    /// `args` should not include the program name. If a flag appears more
    /// than once the last occurrence wins. The value is everything after the
    /// first `=`, so `--label=a=b` has the value `a=b`.
    ///
    /// # Example
    /// ```
    /// # use get_secret::args::{Flags, FlagValue};
    /// let flags = Flags::parse(["--secret-id=my-secret", "--verbose", "ignored"]);
    /// assert_eq!(flags.value("secret-id"), Some("my-secret"));
    /// assert_eq!(flags.get("verbose"), Some(&FlagValue::Switch));
    /// assert!(flags.get("ignored").is_none());
    /// ```
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let flags = args
            .into_iter()
            .filter_map(|arg| {
                let flag = arg.as_ref().strip_prefix("--")?;
                let entry = match flag.split_once('=') {
                    Some((name, value)) => (name.to_string(), FlagValue::Value(value.to_string())),
                    None => (flag.to_string(), FlagValue::Switch),
                };
                Some(entry)
            })
            .collect();
        Self(flags)
    }

    /// Returns the raw value of a flag, if it was present.
    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.0.get(name)
    }

    /// Returns the string value of a flag.
    ///
    /// Switches and empty values are treated as absent.
    pub fn value(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(FlagValue::Value(v)) if !v.is_empty() => Some(v.as_str()),
            _ => None,
        }
    }

    /// Returns true if the flag appeared in any form.
    pub fn is_set(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// The number of distinct flags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no flags were found.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
