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

//! The dynamic value model shared by every validator.
//!
//! Settings sources hand the framework loosely-typed data: a caption might be
//! a string, a window size a two-element list, a color a list of integers.
//! [`Value`] is the runtime representation of that data, and the single type
//! every validation primitive is total over. The untagged serde derive lets a
//! namespace in any self-describing format (TOML, JSON) deserialize straight
//! into it, with integers and floats kept distinct.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A loosely-typed runtime value, as read from a settings source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// A signed integer. Distinct from [`Value::Float`]: strict integer
    /// validators reject floats rather than truncating them.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    Str(String),
    /// An ordered sequence of values.
    List(Vec<Value>),
    /// A nested table of named values.
    Table(BTreeMap<String, Value>),
}

/// The runtime kind of a [`Value`], used for type checks and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A boolean.
    Bool,
    /// A signed integer.
    Int,
    /// A floating-point number.
    Float,
    /// A string.
    Str,
    /// An ordered sequence.
    List,
    /// A nested table.
    Table,
}

impl ValueKind {
    /// Returns the kind's name as it appears in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Str => "str",
            ValueKind::List => "list",
            ValueKind::Table => "table",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Returns the runtime kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::List(_) => ValueKind::List,
            Value::Table(_) => ValueKind::Table,
        }
    }

    /// Returns the name of this value's runtime kind.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.kind().name()
    }
}

// --- Construction Conveniences ---

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Value::Int(3).kind(), ValueKind::Int);
        assert_eq!(Value::Float(3.0).kind(), ValueKind::Float);
        assert_eq!(Value::from("hello").kind(), ValueKind::Str);
        assert_eq!(Value::List(vec![]).kind(), ValueKind::List);
    }

    #[test]
    fn type_name_is_stable() {
        assert_eq!(Value::Bool(true).type_name(), "bool");
        assert_eq!(Value::Table(BTreeMap::new()).type_name(), "table");
    }

    #[test]
    fn deserializes_untagged_from_json() {
        let v: Value = serde_json::from_str("[800, 600]").unwrap();
        assert_eq!(v, Value::List(vec![Value::Int(800), Value::Int(600)]));

        let v: Value = serde_json::from_str("2.5").unwrap();
        assert_eq!(v, Value::Float(2.5));

        // An integer literal stays an integer; it must not collapse to float.
        let v: Value = serde_json::from_str("2").unwrap();
        assert_eq!(v, Value::Int(2));
    }

    #[test]
    fn deserializes_nested_tables() {
        let v: Value = serde_json::from_str(r#"{"size": [10, 20], "name": "x"}"#).unwrap();
        let Value::Table(table) = v else {
            panic!("expected a table");
        };
        assert_eq!(
            table.get("size"),
            Some(&Value::List(vec![Value::Int(10), Value::Int(20)]))
        );
        assert_eq!(table.get("name"), Some(&Value::from("x")));
    }
}
