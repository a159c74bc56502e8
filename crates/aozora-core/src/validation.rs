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

//! Validation primitives used throughout the framework.
//!
//! Every function here is total over any [`Value`] and partial over semantic
//! validity: a value of the wrong runtime kind fails with
//! [`ValidationError::TypeMismatch`], a value of the right kind that breaks a
//! format rule fails with [`ValidationError::InvalidFormat`], and a by-name
//! reference that cannot be located fails with
//! [`ValidationError::UnresolvedReference`].
//!
//! Reference resolution goes through the [`ReferenceResolver`] trait so that
//! configuration can name objects registered elsewhere without this crate
//! depending on whoever owns them.

use crate::value::{Value, ValueKind};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

// --- Error Taxonomy ---

/// An error produced by a validation primitive or a value-type coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The value's runtime representation does not satisfy the expected type
    /// or shape.
    TypeMismatch {
        /// The expected type or shape, as shown to the user.
        expected: &'static str,
        /// The name of the runtime kind that was actually supplied.
        actual: String,
    },
    /// The value has the right representation but violates a format rule.
    InvalidFormat {
        /// The offending value, rendered for the error message.
        value: String,
        /// The rule that was violated.
        rule: &'static str,
    },
    /// A named module or attribute could not be located.
    UnresolvedReference {
        /// The dotted path that failed to resolve.
        path: String,
        /// What exactly could not be found.
        detail: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::TypeMismatch { expected, actual } => {
                write!(f, "Value must be {expected}, got {actual}.")
            }
            ValidationError::InvalidFormat { value, rule } => {
                write!(f, "\"{value}\" is not valid: {rule}.")
            }
            ValidationError::UnresolvedReference { path, detail } => {
                write!(f, "Could not resolve \"{path}\": {detail}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

// --- Type Validators ---

/// Validates that `value` is of the expected runtime kind.
pub fn validate_kind(value: &Value, expected: ValueKind) -> Result<&Value, ValidationError> {
    if value.kind() == expected {
        Ok(value)
    } else {
        Err(ValidationError::TypeMismatch {
            expected: expected.name(),
            actual: value.type_name().to_string(),
        })
    }
}

// --- Integer Validators ---

/// Validates that `value` is an integer.
///
/// Floats are rejected, never truncated.
pub fn validate_int(value: &Value) -> Result<i64, ValidationError> {
    match value {
        Value::Int(n) => Ok(*n),
        other => Err(ValidationError::TypeMismatch {
            expected: ValueKind::Int.name(),
            actual: other.type_name().to_string(),
        }),
    }
}

/// Clamps `value` into the inclusive range `[min_value, max_value]`.
///
/// Total: never fails.
#[inline]
#[must_use]
pub fn clamp_int(value: i64, min_value: i64, max_value: i64) -> i64 {
    if value < min_value {
        min_value
    } else if value > max_value {
        max_value
    } else {
        value
    }
}

/// Validates that `value` is numeric, widening integers to float.
///
/// Accepts [`Value::Int`] or [`Value::Float`] and always returns a float.
pub fn validate_float(value: &Value) -> Result<f32, ValidationError> {
    match value {
        Value::Int(n) => Ok(*n as f32),
        Value::Float(x) => Ok(*x as f32),
        other => Err(ValidationError::TypeMismatch {
            expected: "int or float",
            actual: other.type_name().to_string(),
        }),
    }
}

// --- String Validators ---

/// The identifier format rule, as rendered in error messages.
const IDENTIFIER_RULE: &str =
    "identifiers are one ASCII letter followed by ASCII letters, digits and/or underscores";

/// The module-path format rule, as rendered in error messages.
const MODULE_PATH_RULE: &str = "a module path is at least two dot-separated segments";

/// Validates that `value` is a string.
pub fn validate_str(value: &Value) -> Result<&str, ValidationError> {
    match value {
        Value::Str(s) => Ok(s),
        other => Err(ValidationError::TypeMismatch {
            expected: ValueKind::Str.name(),
            actual: other.type_name().to_string(),
        }),
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Validates that `value` is a string in identifier format.
///
/// Identifiers are one ASCII letter followed by zero or more ASCII letters,
/// digits and/or underscores.
pub fn validate_identifier(value: &Value) -> Result<&str, ValidationError> {
    let s = validate_str(value)?;
    if is_identifier(s) {
        Ok(s)
    } else {
        Err(ValidationError::InvalidFormat {
            value: s.to_string(),
            rule: IDENTIFIER_RULE,
        })
    }
}

// --- Reference Resolution ---

/// An opaque, shared handle to an object registered with a resolver.
///
/// Consumers downcast to the concrete type they registered.
pub type Reference = Arc<dyn Any + Send + Sync>;

/// A failure reported by a [`ReferenceResolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No module is registered under the given name.
    UnknownModule {
        /// The module name that was looked up.
        module: String,
    },
    /// The module exists but does not define the requested attribute.
    UnknownAttribute {
        /// The module that was found.
        module: String,
        /// The attribute that was not.
        attribute: String,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnknownModule { module } => {
                write!(f, "Could not import \"{module}\".")
            }
            ResolveError::UnknownAttribute { module, attribute } => {
                write!(f, "Module \"{module}\" does not define \"{attribute}\".")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// The external module-resolution collaborator.
///
/// Implementations map a module name and an attribute within it to a
/// registered object. Resolution is deferred and by name so configuration can
/// refer to objects owned by code that itself consumes the configuration.
pub trait ReferenceResolver {
    /// Looks up `attribute` inside the module named `module`.
    fn resolve(&self, module: &str, attribute: &str) -> Result<Reference, ResolveError>;
}

/// Splits a dotted reference path into `(module, attribute)`.
///
/// The attribute is everything after the *last* dot; the module is everything
/// before it. Fails with [`ValidationError::InvalidFormat`] when the path
/// contains no dot.
pub fn parse_reference_path(value: &str) -> Result<(&str, &str), ValidationError> {
    value
        .rsplit_once('.')
        .ok_or_else(|| ValidationError::InvalidFormat {
            value: value.to_string(),
            rule: MODULE_PATH_RULE,
        })
}

/// Validates that `value` is a dotted reference path and resolves it.
///
/// The value must be a string of the form `"<module-path>.<attribute>"`. The
/// module and attribute are then located through `resolver`; a resolution
/// failure surfaces as [`ValidationError::UnresolvedReference`].
pub fn validate_reference(
    value: &Value,
    resolver: &dyn ReferenceResolver,
) -> Result<Reference, ValidationError> {
    let path = validate_str(value)?;
    let (module, attribute) = parse_reference_path(path)?;
    resolver
        .resolve(module, attribute)
        .map_err(|e| ValidationError::UnresolvedReference {
            path: path.to_string(),
            detail: e.to_string(),
        })
}
