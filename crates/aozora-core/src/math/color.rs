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

//! Defines the `Color` value type and its coercion rules.
//!
//! Colors are 8-bit RGBA tuples. Unlike the vector types, construction never
//! rejects an out-of-range component: integers are clamped into `[0, 255]`.
//! A 3-element shape is accepted with the alpha channel defaulted to fully
//! opaque.

use crate::validation::{clamp_int, validate_int, ValidationError};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGBA color with 8-bit components.
///
/// Every component is guaranteed to lie in `[0, 255]` after construction;
/// the clamping constructors saturate instead of failing.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
)]
#[repr(C)]
pub struct Color {
    /// The red component.
    pub r: u8,
    /// The green component.
    pub g: u8,
    /// The blue component.
    pub b: u8,
    /// The alpha (opacity) component.
    pub a: u8,
}

impl Color {
    // --- Common Color Constants ---

    /// Opaque white (`rgba(255, 255, 255, 255)`).
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black (`rgba(0, 0, 0, 255)`).
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque red (`rgba(255, 0, 0, 255)`).
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Opaque green (`rgba(0, 255, 0, 255)`).
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    /// Opaque blue (`rgba(0, 0, 255, 255)`).
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Fully transparent black (`rgba(0, 0, 0, 0)`).
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Creates a new `Color`, clamping every component into `[0, 255]`.
    #[inline]
    pub const fn new(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self {
            r: clamp_component(r),
            g: clamp_component(g),
            b: clamp_component(b),
            a: clamp_component(a),
        }
    }

    /// Creates a new opaque `Color` (alpha = 255), clamping every component
    /// into `[0, 255]`.
    #[inline]
    pub const fn rgb(r: i32, g: i32, b: i32) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Returns the color as a plain tuple, in `(r, g, b, a)` order.
    #[inline]
    #[must_use]
    pub const fn as_tuple(self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }
}

#[inline]
const fn clamp_component(value: i32) -> u8 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value as u8
    }
}

// --- Conversions ---

impl From<(i32, i32, i32)> for Color {
    /// Converts an opaque 3-element shape; alpha defaults to 255.
    #[inline]
    fn from((r, g, b): (i32, i32, i32)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(i32, i32, i32, i32)> for Color {
    #[inline]
    fn from((r, g, b, a): (i32, i32, i32, i32)) -> Self {
        Self::new(r, g, b, a)
    }
}

impl IntoIterator for Color {
    type Item = u8;
    type IntoIter = std::array::IntoIter<u8, 4>;
    /// Iterates over the components in `(r, g, b, a)` order.
    fn into_iter(self) -> Self::IntoIter {
        [self.r, self.g, self.b, self.a].into_iter()
    }
}

impl PartialEq<(u8, u8, u8, u8)> for Color {
    #[inline]
    fn eq(&self, other: &(u8, u8, u8, u8)) -> bool {
        self.as_tuple() == *other
    }
}

impl PartialEq<Color> for (u8, u8, u8, u8) {
    #[inline]
    fn eq(&self, other: &Color) -> bool {
        *self == other.as_tuple()
    }
}

impl PartialEq<Value> for Color {
    /// Compares against a runtime value by coercion.
    ///
    /// A value that does not coerce to a `Color` is simply not equal;
    /// equality is total and never fails.
    fn eq(&self, other: &Value) -> bool {
        match validate_color(other) {
            Ok(c) => c == *self,
            Err(_) => false,
        }
    }
}

impl PartialEq<Color> for Value {
    fn eq(&self, other: &Color) -> bool {
        other == self
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Coerces a runtime value into a [`Color`].
///
/// Accepts a list of 3 or 4 integers; a 3-element shape gets an opaque alpha.
/// Components are clamped into `[0, 255]`, never rejected. Floats and other
/// kinds fail with [`ValidationError::TypeMismatch`].
pub fn validate_color(value: &Value) -> Result<Color, ValidationError> {
    if let Value::List(items) = value {
        let channels: Result<Vec<i64>, _> = items.iter().map(validate_int).collect();
        if let Ok(channels) = channels {
            let clamped: Vec<i32> = channels
                .into_iter()
                .map(|c| clamp_int(c, 0, 255) as i32)
                .collect();
            match clamped.as_slice() {
                [r, g, b] => return Ok(Color::rgb(*r, *g, *b)),
                [r, g, b, a] => return Ok(Color::new(*r, *g, *b, *a)),
                _ => {}
            }
        }
    }
    Err(ValidationError::TypeMismatch {
        expected: "Color or convertible to Color",
        actual: value.type_name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_clamps_out_of_range_components() {
        assert_eq!(Color::rgb(300, -10, 128), Color::new(255, 0, 128, 255));
    }

    #[test]
    fn rgb_defaults_alpha_to_opaque() {
        assert_eq!(Color::rgb(1, 2, 3), Color::new(1, 2, 3, 255));
    }

    #[test]
    fn as_tuple_orders_components() {
        assert_eq!(Color::new(1, 2, 3, 4).as_tuple(), (1, 2, 3, 4));
        assert_eq!(Color::new(1, 2, 3, 4), (1, 2, 3, 4));
    }

    #[test]
    fn iterates_in_component_order() {
        let components: Vec<u8> = Color::new(1, 2, 3, 4).into_iter().collect();
        assert_eq!(components, vec![1, 2, 3, 4]);
    }

    #[test]
    fn display_reads_as_rgba() {
        assert_eq!(format!("{}", Color::new(1, 2, 3, 4)), "rgba(1, 2, 3, 4)");
    }

    #[test]
    fn validate_color_accepts_three_and_four_element_lists() {
        let three = Value::List(vec![Value::Int(300), Value::Int(-10), Value::Int(128)]);
        assert_eq!(validate_color(&three), Ok(Color::new(255, 0, 128, 255)));

        let four = Value::List(vec![
            Value::Int(10),
            Value::Int(20),
            Value::Int(30),
            Value::Int(40),
        ]);
        assert_eq!(validate_color(&four), Ok(Color::new(10, 20, 30, 40)));
    }

    #[test]
    fn validate_color_rejects_floats_and_wrong_arity() {
        let floaty = Value::List(vec![Value::Float(1.0), Value::Int(2), Value::Int(3)]);
        assert!(validate_color(&floaty).is_err());

        let short = Value::List(vec![Value::Int(1), Value::Int(2)]);
        assert!(validate_color(&short).is_err());

        assert!(validate_color(&Value::from("red")).is_err());
    }

    #[test]
    fn eq_with_runtime_values_never_fails() {
        let c = Color::new(255, 0, 128, 255);
        assert!(c == Value::List(vec![Value::Int(300), Value::Int(-10), Value::Int(128)]));
        assert!(c != Value::from("red"));
    }

    #[test]
    fn equal_colors_hash_equal() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash = |c: Color| {
            let mut hasher = DefaultHasher::new();
            c.hash(&mut hasher);
            hasher.finish()
        };
        let a = Color::rgb(300, -10, 128);
        let b = Color::new(255, 0, 128, 255);
        assert_eq!(a, b);
        assert_eq!(hash(a), hash(b));
    }
}
