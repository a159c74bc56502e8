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

//! Provides the strict 2D vector types and their operator algebra.
//!
//! [`Vector2`] holds float components, [`IVector2`] integer components. Both
//! accept "vector-like" operands — two-element tuples or arrays of their
//! element type — wherever a vector is expected, converting them before the
//! operation proceeds. Operators that also accept a scalar (`*`, `/`) take
//! their operand through a closed coercion enum ([`Vec2Operand`],
//! [`IVec2Operand`]) and match on the result.
//!
//! The two vector types are deliberately not interoperable: no operator
//! accepts one where the other is expected, and the only bridge is the
//! explicit [`IVector2::to_vector2`]. Integer division floors toward negative
//! infinity; float division is true division.

use crate::validation::{validate_float, validate_int, ValidationError};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

/// The range rule for integer vector components, as rendered in errors.
const I32_RANGE_RULE: &str = "components must fit a 32-bit signed integer";

// --- Vector2 ---

/// A 2-dimensional vector with `f32` components.
///
/// Used for positions, displacements, and fractional anchors in 2D space.
/// Arithmetic never mutates an operand; every operator produces a new value.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
)]
#[repr(C)]
pub struct Vector2 {
    /// The x component of the vector.
    pub x: f32,
    /// The y component of the vector.
    pub y: f32,
}

impl Vector2 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    /// Creates a new `Vector2` with the specified components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the vector as a plain tuple, in `(x, y)` order.
    #[inline]
    #[must_use]
    pub const fn as_tuple(self) -> (f32, f32) {
        (self.x, self.y)
    }
}

impl From<(f32, f32)> for Vector2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

/// A coerced operand for [`Vector2`] scaling operators.
///
/// Multiplication and division accept either a scalar or anything
/// vector-shaped; the conversion into this enum decides which, and the
/// operator matches on the tag.
#[derive(Debug, Clone, Copy)]
pub enum Vec2Operand {
    /// A scalar applied to both components.
    Scalar(f32),
    /// A vector combined component-wise.
    Vector(Vector2),
}

impl From<f32> for Vec2Operand {
    #[inline]
    fn from(v: f32) -> Self {
        Vec2Operand::Scalar(v)
    }
}

impl From<Vector2> for Vec2Operand {
    #[inline]
    fn from(v: Vector2) -> Self {
        Vec2Operand::Vector(v)
    }
}

impl From<(f32, f32)> for Vec2Operand {
    #[inline]
    fn from(v: (f32, f32)) -> Self {
        Vec2Operand::Vector(Vector2::from(v))
    }
}

impl From<[f32; 2]> for Vec2Operand {
    #[inline]
    fn from(v: [f32; 2]) -> Self {
        Vec2Operand::Vector(Vector2::from(v))
    }
}

// --- Vector2 Operator Overloads ---

impl<T: Into<Vector2>> Add<T> for Vector2 {
    type Output = Self;
    /// Adds two vectors component-wise.
    #[inline]
    fn add(self, rhs: T) -> Self::Output {
        let rhs = rhs.into();
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Add<Vector2> for (f32, f32) {
    type Output = Vector2;
    /// Adds a vector-shaped tuple and a vector component-wise.
    #[inline]
    fn add(self, rhs: Vector2) -> Self::Output {
        Vector2::from(self) + rhs
    }
}

impl Add<Vector2> for [f32; 2] {
    type Output = Vector2;
    /// Adds a vector-shaped array and a vector component-wise.
    #[inline]
    fn add(self, rhs: Vector2) -> Self::Output {
        Vector2::from(self) + rhs
    }
}

impl<T: Into<Vector2>> Sub<T> for Vector2 {
    type Output = Self;
    /// Subtracts two vectors component-wise.
    #[inline]
    fn sub(self, rhs: T) -> Self::Output {
        let rhs = rhs.into();
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Sub<Vector2> for (f32, f32) {
    type Output = Vector2;
    /// Subtracts a vector from a vector-shaped tuple, component-wise.
    #[inline]
    fn sub(self, rhs: Vector2) -> Self::Output {
        Vector2::from(self) - rhs
    }
}

impl Sub<Vector2> for [f32; 2] {
    type Output = Vector2;
    /// Subtracts a vector from a vector-shaped array, component-wise.
    #[inline]
    fn sub(self, rhs: Vector2) -> Self::Output {
        Vector2::from(self) - rhs
    }
}

impl<T: Into<Vec2Operand>> Mul<T> for Vector2 {
    type Output = Self;
    /// Multiplies by a scalar (both components) or by a vector
    /// (component-wise). Both operand orders produce the same result.
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        match rhs.into() {
            Vec2Operand::Scalar(k) => Self {
                x: self.x * k,
                y: self.y * k,
            },
            Vec2Operand::Vector(v) => Self {
                x: self.x * v.x,
                y: self.y * v.y,
            },
        }
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;
    /// Multiplies a scalar by a vector.
    #[inline]
    fn mul(self, rhs: Vector2) -> Self::Output {
        rhs * self
    }
}

impl Mul<Vector2> for (f32, f32) {
    type Output = Vector2;
    /// Multiplies a vector-shaped tuple by a vector, component-wise.
    #[inline]
    fn mul(self, rhs: Vector2) -> Self::Output {
        rhs * Vector2::from(self)
    }
}

impl Mul<Vector2> for [f32; 2] {
    type Output = Vector2;
    /// Multiplies a vector-shaped array by a vector, component-wise.
    #[inline]
    fn mul(self, rhs: Vector2) -> Self::Output {
        rhs * Vector2::from(self)
    }
}

impl<T: Into<Vec2Operand>> Div<T> for Vector2 {
    type Output = Self;
    /// True division by a scalar (both components) or by a vector
    /// (component-wise).
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        match rhs.into() {
            Vec2Operand::Scalar(k) => Self {
                x: self.x / k,
                y: self.y / k,
            },
            Vec2Operand::Vector(v) => Self {
                x: self.x / v.x,
                y: self.y / v.y,
            },
        }
    }
}

impl Div<Vector2> for f32 {
    type Output = Vector2;
    /// Divides a scalar by a vector, component-wise (`self / rhs`, not the
    /// inverse of the forward division).
    #[inline]
    fn div(self, rhs: Vector2) -> Self::Output {
        Vector2 {
            x: self / rhs.x,
            y: self / rhs.y,
        }
    }
}

impl Div<Vector2> for (f32, f32) {
    type Output = Vector2;
    /// Divides a vector-shaped tuple by a vector, component-wise.
    #[inline]
    fn div(self, rhs: Vector2) -> Self::Output {
        Vector2::from(self) / rhs
    }
}

impl Div<Vector2> for [f32; 2] {
    type Output = Vector2;
    /// Divides a vector-shaped array by a vector, component-wise.
    #[inline]
    fn div(self, rhs: Vector2) -> Self::Output {
        Vector2::from(self) / rhs
    }
}

impl Neg for Vector2 {
    type Output = Self;
    /// Negates both components.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Index<usize> for Vector2 {
    type Output = f32;
    /// Allows accessing a vector component by index (`v[0]`, `v[1]`).
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Index {index} out of bounds for Vector2"),
        }
    }
}

impl IntoIterator for Vector2 {
    type Item = f32;
    type IntoIter = std::array::IntoIter<f32, 2>;
    /// Iterates over the components in `(x, y)` order, enabling
    /// destructuring and collection.
    fn into_iter(self) -> Self::IntoIter {
        [self.x, self.y].into_iter()
    }
}

// --- Vector2 Equality Against Shapes and Runtime Values ---

impl PartialEq<(f32, f32)> for Vector2 {
    #[inline]
    fn eq(&self, other: &(f32, f32)) -> bool {
        self.as_tuple() == *other
    }
}

impl PartialEq<Vector2> for (f32, f32) {
    #[inline]
    fn eq(&self, other: &Vector2) -> bool {
        *self == other.as_tuple()
    }
}

impl PartialEq<[f32; 2]> for Vector2 {
    #[inline]
    fn eq(&self, other: &[f32; 2]) -> bool {
        self.as_tuple() == (other[0], other[1])
    }
}

impl PartialEq<Vector2> for [f32; 2] {
    #[inline]
    fn eq(&self, other: &Vector2) -> bool {
        other == self
    }
}

impl PartialEq<Value> for Vector2 {
    /// Compares against a runtime value by coercion.
    ///
    /// A value that does not coerce to a `Vector2` is simply not equal;
    /// equality is total and never fails.
    fn eq(&self, other: &Value) -> bool {
        match validate_vector2(other) {
            Ok(v) => v == *self,
            Err(_) => false,
        }
    }
}

impl PartialEq<Vector2> for Value {
    fn eq(&self, other: &Vector2) -> bool {
        other == self
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Coerces a runtime value into a [`Vector2`].
///
/// Accepts a 2-element list whose elements are numeric (integers are widened
/// to float). Anything else fails with
/// [`ValidationError::TypeMismatch`].
pub fn validate_vector2(value: &Value) -> Result<Vector2, ValidationError> {
    if let Value::List(items) = value {
        if let [a, b] = items.as_slice() {
            if let (Ok(x), Ok(y)) = (validate_float(a), validate_float(b)) {
                return Ok(Vector2::new(x, y));
            }
        }
    }
    Err(ValidationError::TypeMismatch {
        expected: "Vector2 or convertible to Vector2",
        actual: value.type_name().to_string(),
    })
}

// --- IVector2 ---

/// A 2-dimensional vector with `i32` components.
///
/// Used for pixel coordinates and sizes. Construction and coercion are
/// strict: a float component is rejected, never truncated. Division floors
/// toward negative infinity in every form (by scalar, by vector, reflected).
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
pub struct IVector2 {
    /// The x component of the vector.
    pub x: i32,
    /// The y component of the vector.
    pub y: i32,
}

/// Floor division: rounds the quotient toward negative infinity, unlike
/// Rust's `/` which truncates toward zero.
#[inline]
const fn floor_div(a: i32, b: i32) -> i32 {
    let q = a / b;
    if a % b != 0 && (a < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

impl IVector2 {
    /// A vector with all components set to `0`.
    pub const ZERO: Self = Self { x: 0, y: 0 };
    /// A vector with all components set to `1`.
    pub const ONE: Self = Self { x: 1, y: 1 };

    /// Creates a new `IVector2` with the specified components.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the vector as a plain tuple, in `(x, y)` order.
    #[inline]
    #[must_use]
    pub const fn as_tuple(self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Converts into a float [`Vector2`].
    ///
    /// This is the only sanctioned bridge between the two vector types;
    /// no operator widens an `IVector2` implicitly.
    #[inline]
    #[must_use]
    pub const fn to_vector2(self) -> Vector2 {
        Vector2::new(self.x as f32, self.y as f32)
    }
}

impl From<(i32, i32)> for IVector2 {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<[i32; 2]> for IVector2 {
    #[inline]
    fn from([x, y]: [i32; 2]) -> Self {
        Self { x, y }
    }
}

/// A coerced operand for [`IVector2`] scaling operators.
#[derive(Debug, Clone, Copy)]
pub enum IVec2Operand {
    /// A scalar applied to both components.
    Scalar(i32),
    /// A vector combined component-wise.
    Vector(IVector2),
}

impl From<i32> for IVec2Operand {
    #[inline]
    fn from(v: i32) -> Self {
        IVec2Operand::Scalar(v)
    }
}

impl From<IVector2> for IVec2Operand {
    #[inline]
    fn from(v: IVector2) -> Self {
        IVec2Operand::Vector(v)
    }
}

impl From<(i32, i32)> for IVec2Operand {
    #[inline]
    fn from(v: (i32, i32)) -> Self {
        IVec2Operand::Vector(IVector2::from(v))
    }
}

impl From<[i32; 2]> for IVec2Operand {
    #[inline]
    fn from(v: [i32; 2]) -> Self {
        IVec2Operand::Vector(IVector2::from(v))
    }
}

// --- IVector2 Operator Overloads ---

impl<T: Into<IVector2>> Add<T> for IVector2 {
    type Output = Self;
    /// Adds two vectors component-wise.
    #[inline]
    fn add(self, rhs: T) -> Self::Output {
        let rhs = rhs.into();
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Add<IVector2> for (i32, i32) {
    type Output = IVector2;
    /// Adds a vector-shaped tuple and a vector component-wise.
    #[inline]
    fn add(self, rhs: IVector2) -> Self::Output {
        IVector2::from(self) + rhs
    }
}

impl Add<IVector2> for [i32; 2] {
    type Output = IVector2;
    /// Adds a vector-shaped array and a vector component-wise.
    #[inline]
    fn add(self, rhs: IVector2) -> Self::Output {
        IVector2::from(self) + rhs
    }
}

impl<T: Into<IVector2>> Sub<T> for IVector2 {
    type Output = Self;
    /// Subtracts two vectors component-wise.
    #[inline]
    fn sub(self, rhs: T) -> Self::Output {
        let rhs = rhs.into();
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Sub<IVector2> for (i32, i32) {
    type Output = IVector2;
    /// Subtracts a vector from a vector-shaped tuple, component-wise.
    #[inline]
    fn sub(self, rhs: IVector2) -> Self::Output {
        IVector2::from(self) - rhs
    }
}

impl Sub<IVector2> for [i32; 2] {
    type Output = IVector2;
    /// Subtracts a vector from a vector-shaped array, component-wise.
    #[inline]
    fn sub(self, rhs: IVector2) -> Self::Output {
        IVector2::from(self) - rhs
    }
}

impl<T: Into<IVec2Operand>> Mul<T> for IVector2 {
    type Output = Self;
    /// Multiplies by a scalar (both components) or by a vector
    /// (component-wise). Both operand orders produce the same result.
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        match rhs.into() {
            IVec2Operand::Scalar(k) => Self {
                x: self.x * k,
                y: self.y * k,
            },
            IVec2Operand::Vector(v) => Self {
                x: self.x * v.x,
                y: self.y * v.y,
            },
        }
    }
}

impl Mul<IVector2> for i32 {
    type Output = IVector2;
    /// Multiplies a scalar by a vector.
    #[inline]
    fn mul(self, rhs: IVector2) -> Self::Output {
        rhs * self
    }
}

impl Mul<IVector2> for (i32, i32) {
    type Output = IVector2;
    /// Multiplies a vector-shaped tuple by a vector, component-wise.
    #[inline]
    fn mul(self, rhs: IVector2) -> Self::Output {
        rhs * IVector2::from(self)
    }
}

impl Mul<IVector2> for [i32; 2] {
    type Output = IVector2;
    /// Multiplies a vector-shaped array by a vector, component-wise.
    #[inline]
    fn mul(self, rhs: IVector2) -> Self::Output {
        rhs * IVector2::from(self)
    }
}

impl<T: Into<IVec2Operand>> Div<T> for IVector2 {
    type Output = Self;
    /// Floor division by a scalar (both components) or by a vector
    /// (component-wise). The quotient rounds toward negative infinity.
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        match rhs.into() {
            IVec2Operand::Scalar(k) => Self {
                x: floor_div(self.x, k),
                y: floor_div(self.y, k),
            },
            IVec2Operand::Vector(v) => Self {
                x: floor_div(self.x, v.x),
                y: floor_div(self.y, v.y),
            },
        }
    }
}

impl Div<IVector2> for i32 {
    type Output = IVector2;
    /// Floor division of a scalar by a vector, component-wise
    /// (`self / rhs`, not the inverse of the forward division).
    #[inline]
    fn div(self, rhs: IVector2) -> Self::Output {
        IVector2 {
            x: floor_div(self, rhs.x),
            y: floor_div(self, rhs.y),
        }
    }
}

impl Div<IVector2> for (i32, i32) {
    type Output = IVector2;
    /// Floor division of a vector-shaped tuple by a vector, component-wise.
    #[inline]
    fn div(self, rhs: IVector2) -> Self::Output {
        IVector2::from(self) / rhs
    }
}

impl Div<IVector2> for [i32; 2] {
    type Output = IVector2;
    /// Floor division of a vector-shaped array by a vector, component-wise.
    #[inline]
    fn div(self, rhs: IVector2) -> Self::Output {
        IVector2::from(self) / rhs
    }
}

impl Neg for IVector2 {
    type Output = Self;
    /// Negates both components.
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Index<usize> for IVector2 {
    type Output = i32;
    /// Allows accessing a vector component by index (`v[0]`, `v[1]`).
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Index {index} out of bounds for IVector2"),
        }
    }
}

impl IntoIterator for IVector2 {
    type Item = i32;
    type IntoIter = std::array::IntoIter<i32, 2>;
    /// Iterates over the components in `(x, y)` order, enabling
    /// destructuring and collection.
    fn into_iter(self) -> Self::IntoIter {
        [self.x, self.y].into_iter()
    }
}

// --- IVector2 Equality Against Shapes and Runtime Values ---

impl PartialEq<(i32, i32)> for IVector2 {
    #[inline]
    fn eq(&self, other: &(i32, i32)) -> bool {
        self.as_tuple() == *other
    }
}

impl PartialEq<IVector2> for (i32, i32) {
    #[inline]
    fn eq(&self, other: &IVector2) -> bool {
        *self == other.as_tuple()
    }
}

impl PartialEq<[i32; 2]> for IVector2 {
    #[inline]
    fn eq(&self, other: &[i32; 2]) -> bool {
        self.as_tuple() == (other[0], other[1])
    }
}

impl PartialEq<IVector2> for [i32; 2] {
    #[inline]
    fn eq(&self, other: &IVector2) -> bool {
        other == self
    }
}

impl PartialEq<Value> for IVector2 {
    /// Compares against a runtime value by coercion.
    ///
    /// A value that does not coerce to an `IVector2` is simply not equal;
    /// equality is total and never fails.
    fn eq(&self, other: &Value) -> bool {
        match validate_ivector2(other) {
            Ok(v) => v == *self,
            Err(_) => false,
        }
    }
}

impl PartialEq<IVector2> for Value {
    fn eq(&self, other: &IVector2) -> bool {
        other == self
    }
}

impl fmt::Display for IVector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Coerces a runtime value into an [`IVector2`].
///
/// Accepts a 2-element list whose elements are integers; a float element is a
/// [`ValidationError::TypeMismatch`] (no implicit truncation). An integer
/// outside the `i32` component range is an
/// [`ValidationError::InvalidFormat`].
pub fn validate_ivector2(value: &Value) -> Result<IVector2, ValidationError> {
    if let Value::List(items) = value {
        if let [a, b] = items.as_slice() {
            if let (Ok(x), Ok(y)) = (validate_int(a), validate_int(b)) {
                let (x, y) = match (i32::try_from(x), i32::try_from(y)) {
                    (Ok(x), Ok(y)) => (x, y),
                    _ => {
                        return Err(ValidationError::InvalidFormat {
                            value: format!("({x}, {y})"),
                            rule: I32_RANGE_RULE,
                        })
                    }
                };
                return Ok(IVector2::new(x, y));
            }
        }
    }
    Err(ValidationError::TypeMismatch {
        expected: "IVector2 or convertible to IVector2",
        actual: value.type_name().to_string(),
    })
}
