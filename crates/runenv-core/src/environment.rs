use std::collections::HashMap;

use crate::EnvFile;

/// Resolved variable view used for substitution.
///
/// A snapshot of the inherited process environment with env file values
/// layered on top. File values win, as assignments in an included Makefile
/// override inherited variables.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Snapshot the current process environment. Non-UTF-8 entries are skipped.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.to_str()?.to_owned(), v.to_str()?.to_owned())))
                .collect(),
        }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Layer the env file's values over this environment.
    pub fn overlay(mut self, file: &EnvFile) -> Self {
        for (key, value) in file.vars() {
            self.vars.insert(key.clone(), value.clone());
        }
        self
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Value of `key`, or `""` when unset.
    pub fn value(&self, key: &str) -> &str {
        self.lookup(key)
            // arch-lint: allow(no-silent-result-drop) reason="unset variables interpolate as empty strings, callers warn separately"
            .unwrap_or("")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }
}
