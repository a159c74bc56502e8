// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Settings source resolution.
//!
//! A settings source maps a dotted source name to a namespace of top-level
//! `name -> value` bindings. [`Settings::load`](crate::Settings::load) makes
//! exactly one resolution call per process; it is the only external,
//! fallible collaborator call in the settings layer.
//!
//! [`TomlFileSource`] is the standard implementation: the source name
//! `"src.settings"` resolves to `<base>/src/settings.toml`.

use aozora_core::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// The top-level `name -> value` bindings of a resolved settings source.
pub type Namespace = BTreeMap<String, Value>;

/// A failure to resolve a settings source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// No source exists under the given name.
    NotFound {
        /// Where the source was expected.
        location: String,
    },
    /// The source exists but its contents could not be parsed.
    Malformed {
        /// Where the source was found.
        location: String,
        /// The parser's diagnostic.
        detail: String,
    },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::NotFound { location } => {
                write!(f, "no settings source at {location}")
            }
            SourceError::Malformed { location, detail } => {
                write!(f, "settings source at {location} is malformed: {detail}")
            }
        }
    }
}

impl std::error::Error for SourceError {}

/// A named, resolvable namespace of settings bindings.
///
/// Implementations may read the filesystem or serve fixtures from memory;
/// resolution is a synchronous, one-shot call.
pub trait SettingsSource {
    /// Resolves the source named `name` to its top-level bindings.
    fn resolve(&self, name: &str) -> Result<Namespace, SourceError>;
}

/// A settings source backed by TOML files under a base directory.
///
/// Dots in the source name are path separators: `"src.settings"` resolves to
/// `<base>/src/settings.toml`.
pub struct TomlFileSource {
    base_dir: PathBuf,
}

impl TomlFileSource {
    /// Creates a source rooted at `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn file_for(&self, name: &str) -> PathBuf {
        let mut path = self.base_dir.clone();
        for segment in name.split('.') {
            path.push(segment);
        }
        path.set_extension("toml");
        path
    }
}

impl SettingsSource for TomlFileSource {
    fn resolve(&self, name: &str) -> Result<Namespace, SourceError> {
        let path = self.file_for(name);
        log::debug!("Resolving settings source \"{name}\" from {}", path.display());

        let text = std::fs::read_to_string(&path).map_err(|_| SourceError::NotFound {
            location: path.display().to_string(),
        })?;
        toml::from_str(&text).map_err(|e| SourceError::Malformed {
            location: path.display().to_string(),
            detail: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn dotted_names_map_to_nested_files() {
        let source = TomlFileSource::new("/project");
        assert_eq!(
            source.file_for("src.settings"),
            PathBuf::from("/project/src/settings.toml")
        );
        assert_eq!(
            source.file_for("settings"),
            PathBuf::from("/project/settings.toml")
        );
    }

    #[test]
    fn resolves_bindings_with_kinds_preserved() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(
            dir.path().join("src/settings.toml"),
            "WINDOW_CAPTION = \"Hello\"\nWINDOW_SIZE = [800, 600]\nSCALE = 1.5\n",
        )
        .unwrap();

        let namespace = TomlFileSource::new(dir.path())
            .resolve("src.settings")
            .unwrap();

        assert_eq!(namespace.get("WINDOW_CAPTION"), Some(&Value::from("Hello")));
        assert_eq!(
            namespace.get("WINDOW_SIZE"),
            Some(&Value::List(vec![Value::Int(800), Value::Int(600)]))
        );
        // Floats and ints must stay distinct through parsing.
        assert_eq!(namespace.get("SCALE"), Some(&Value::Float(1.5)));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = TomlFileSource::new(dir.path())
            .resolve("src.settings")
            .unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }

    #[test]
    fn unparsable_file_is_malformed() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("settings.toml"), "WINDOW_CAPTION = [[[").unwrap();

        let err = TomlFileSource::new(dir.path())
            .resolve("settings")
            .unwrap_err();
        assert!(matches!(err, SourceError::Malformed { .. }));
    }
}
