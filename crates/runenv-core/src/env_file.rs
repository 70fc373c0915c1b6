//! `.env`-style file loading.
//!
//! Parsing is delegated to `dotenvy`, so comments, blank lines, `export`
//! prefixes, quoting, and `${VAR}` substitution behave the way they do for
//! any dotenv consumer. Unlike `dotenvy::dotenv()`, loading never touches
//! the process environment: the pairs are kept in an [`EnvFile`] and handed
//! to child processes explicitly.

use std::path::{Path, PathBuf};

/// Variables read from an env file, in first-assignment order.
///
/// Keys are unique. When a key is assigned more than once the later value
/// replaces the earlier one but keeps its original position.
///
/// # Examples
///
/// ```no_run
/// use runenv_core::EnvFile;
/// use std::path::Path;
///
/// let env = EnvFile::load(Path::new(".env")).unwrap();
/// println!("deploying {}", env.get("SERVICE_NAME").unwrap_or(""));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    path: PathBuf,
    vars: Vec<(String, String)>,
}

impl EnvFile {
    /// Read and parse the env file at `path`.
    ///
    /// # Errors
    ///
    /// - [`Error::EnvFileNotFound`](crate::Error::EnvFileNotFound) if the file does not exist
    /// - [`Error::EnvFileRead`](crate::Error::EnvFileRead) on any other I/O failure
    /// - [`Error::EnvFileParse`](crate::Error::EnvFileParse) on a malformed line
    pub fn load(path: &Path) -> crate::Result<Self> {
        tracing::debug!(path = %path.display(), "loading env file");

        let iter = dotenvy::from_path_iter(path).map_err(|e| load_error(path, e))?;

        let mut env = Self {
            path: path.to_path_buf(),
            vars: Vec::new(),
        };
        for item in iter {
            let (key, value) = item.map_err(|e| load_error(path, e))?;
            env.insert(key, value);
        }

        tracing::debug!(
            path = %path.display(),
            count = env.vars.len(),
            "env file loaded"
        );
        Ok(env)
    }

    /// Build from in-memory pairs. Duplicate keys follow the same
    /// last-value-wins rule as [`EnvFile::load`].
    pub fn from_pairs<I, K, V>(path: impl Into<PathBuf>, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut env = Self {
            path: path.into(),
            vars: Vec::new(),
        };
        for (key, value) in pairs {
            env.insert(key.into(), value.into());
        }
        env
    }

    fn insert(&mut self, key: String, value: String) {
        match self.vars.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.vars.push((key, value)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn vars(&self) -> &[(String, String)] {
        &self.vars
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.vars.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

fn load_error(path: &Path, err: dotenvy::Error) -> crate::Error {
    let path = path.to_path_buf();
    match err {
        dotenvy::Error::Io(source) if source.kind() == std::io::ErrorKind::NotFound => {
            crate::Error::EnvFileNotFound { path }
        }
        dotenvy::Error::Io(source) => crate::Error::EnvFileRead { path, source },
        dotenvy::Error::LineParse(_, position) => crate::Error::EnvFileParse { path, position },
        _ => crate::Error::EnvFileLoad { path },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_keeps_first_position_and_last_value() {
        let env = EnvFile::from_pairs(".env", [("A", "1"), ("B", "2"), ("A", "3")]);
        assert_eq!(
            env.vars(),
            &[
                ("A".to_owned(), "3".to_owned()),
                ("B".to_owned(), "2".to_owned()),
            ]
        );
    }

    #[test]
    fn get_missing_key_is_none() {
        let env = EnvFile::from_pairs(".env", [("A", "1")]);
        assert_eq!(env.get("A"), Some("1"));
        assert_eq!(env.get("B"), None);
    }

    #[test]
    fn empty_file_is_empty() {
        let env = EnvFile::from_pairs(".env", std::iter::empty::<(String, String)>());
        assert!(env.is_empty());
        assert_eq!(env.len(), 0);
    }

    #[test]
    fn parse_error_does_not_leak_line() {
        let err = load_error(
            Path::new(".env"),
            dotenvy::Error::LineParse("SECRET=hunter2 oops'".to_owned(), 7),
        );
        let msg = err.to_string();
        assert!(msg.contains("position 7"), "got: {msg}");
        assert!(!msg.contains("hunter2"), "got: {msg}");
    }

    #[test]
    fn missing_file_maps_to_not_found() {
        let err = load_error(
            Path::new("nope.env"),
            dotenvy::Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
        );
        assert!(matches!(err, crate::Error::EnvFileNotFound { .. }));
    }

    // ── Property-based tests ──

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn assignments() -> impl Strategy<Value = Vec<(String, String)>> {
            proptest::collection::vec(("[A-D]", "[a-z0-9]{0,6}"), 0..12)
        }

        proptest! {
            #[test]
            fn keys_are_unique(pairs in assignments()) {
                let env = EnvFile::from_pairs(".env", pairs);
                let mut keys: Vec<&str> = env.keys().collect();
                let before = keys.len();
                keys.sort_unstable();
                keys.dedup();
                prop_assert_eq!(keys.len(), before);
            }

            #[test]
            fn last_assignment_wins(pairs in assignments()) {
                let env = EnvFile::from_pairs(".env", pairs.clone());
                for (key, _) in &pairs {
                    let last = pairs
                        .iter()
                        .rev()
                        .find(|(k, _)| k == key)
                        .map(|(_, v)| v.as_str());
                    prop_assert_eq!(env.get(key), last);
                }
            }

            #[test]
            fn order_follows_first_assignment(pairs in assignments()) {
                let env = EnvFile::from_pairs(".env", pairs.clone());
                let mut expected: Vec<&str> = Vec::new();
                for (key, _) in &pairs {
                    if !expected.contains(&key.as_str()) {
                        expected.push(key);
                    }
                }
                prop_assert_eq!(env.keys().collect::<Vec<_>>(), expected);
            }
        }
    }
}
