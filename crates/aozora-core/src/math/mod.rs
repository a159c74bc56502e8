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

//! The strict, coercible 2D value types.
//!
//! This module contains the value types every other part of the framework
//! computes with: float and integer 2D vectors, 8-bit RGBA colors, and the
//! closed table of fractional anchor points. All of them are immutable plain
//! values; arithmetic produces new instances and never mutates an operand.

// --- Declare Sub-Modules ---

pub mod alignment;
pub mod color;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::alignment::Alignment;
pub use self::color::{validate_color, Color};
pub use self::vector::{
    validate_ivector2, validate_vector2, IVec2Operand, IVector2, Vec2Operand, Vector2,
};
