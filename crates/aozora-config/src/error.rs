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

//! Defines the hierarchy of error types for the settings layer.

use aozora_core::ValidationError;
use std::collections::BTreeMap;
use std::fmt;

/// Why a single recognized setting failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingError {
    /// The settings source does not bind the recognized name at all.
    Missing,
    /// The binding exists but failed its validator.
    Invalid(ValidationError),
}

impl fmt::Display for SettingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingError::Missing => write!(f, "Setting is missing from the settings source."),
            SettingError::Invalid(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SettingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingError::Invalid(err) => Some(err),
            SettingError::Missing => None,
        }
    }
}

impl From<ValidationError> for SettingError {
    fn from(err: ValidationError) -> Self {
        SettingError::Invalid(err)
    }
}

/// A failure while loading or reading settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// The settings source itself could not be resolved. Fatal: there is
    /// nothing to validate.
    NotFound {
        /// The source name that was expected to resolve.
        source: String,
        /// The underlying resolution failure.
        detail: String,
    },
    /// One or more recognized settings failed validation.
    ///
    /// Carries every failure at once: validators never short-circuit, so a
    /// user sees all misconfigured keys in a single report.
    Validation {
        /// The per-name failures, in name order.
        errors: BTreeMap<String, SettingError>,
    },
    /// A setting was read by a name the loaded namespace does not bind.
    NotConfigured {
        /// The name that was looked up.
        name: String,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::NotFound { source, detail } => {
                write!(
                    f,
                    "Settings file not found at \"{source}\" ({detail}). \
                     Are you in the correct directory?"
                )
            }
            SettingsError::Validation { errors } => {
                write!(f, "Errors detected in the settings:")?;
                for (name, error) in errors {
                    write!(f, "\n  {name}: {error}")?;
                }
                Ok(())
            }
            SettingsError::NotConfigured { name } => {
                write!(f, "Setting \"{name}\" not set.")
            }
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_renders_one_line_per_failed_setting() {
        let mut errors = BTreeMap::new();
        errors.insert(
            "WINDOW_CAPTION".to_string(),
            SettingError::Invalid(ValidationError::TypeMismatch {
                expected: "str",
                actual: "int".to_string(),
            }),
        );
        errors.insert("WINDOW_SIZE".to_string(), SettingError::Missing);
        let err = SettingsError::Validation { errors };

        let rendered = format!("{err}");
        assert_eq!(
            rendered,
            "Errors detected in the settings:\n  \
             WINDOW_CAPTION: Value must be str, got int.\n  \
             WINDOW_SIZE: Setting is missing from the settings source."
        );
    }

    #[test]
    fn setting_error_chains_to_the_validation_error() {
        use std::error::Error;

        let err: SettingError = ValidationError::InvalidFormat {
            value: "1foo".to_string(),
            rule: "rule",
        }
        .into();
        assert!(err.source().is_some());
        assert!(SettingError::Missing.source().is_none());
    }

    #[test]
    fn not_configured_display() {
        let err = SettingsError::NotConfigured {
            name: "FRAME_RATE".to_string(),
        };
        assert_eq!(format!("{err}"), "Setting \"FRAME_RATE\" not set.");
    }
}
