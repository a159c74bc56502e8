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

//! # Aozora Core
//!
//! Foundational crate of the Aozora framework: the runtime value model,
//! the validation primitives built on top of it, and the strict 2D value
//! types (vectors, colors, anchor alignments) that every collaborator
//! computes with.

#![warn(missing_docs)]

pub mod math;
pub mod validation;
pub mod value;

pub use math::{Alignment, Color, IVector2, Vector2};
pub use validation::{Reference, ReferenceResolver, ResolveError, ValidationError};
pub use value::{Value, ValueKind};
