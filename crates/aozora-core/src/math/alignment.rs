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

//! The closed set of named anchor points.
//!
//! An alignment describes which point of an image is treated as its logical
//! origin, as a fractional offset in `[0, 1]²`. The y axis grows upward, so
//! `BottomLeft` is `(0, 0)` and `TopRight` is `(1, 1)`.

use super::vector::Vector2;
use serde::{Deserialize, Serialize};

/// A named anchor point, bound to a fixed fractional [`Vector2`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    /// `(0.0, 0.0)`
    BottomLeft,
    /// `(0.5, 0.0)`
    BottomCenter,
    /// `(1.0, 0.0)`
    BottomRight,
    /// `(0.0, 0.5)`
    MiddleLeft,
    /// `(0.5, 0.5)` — the default anchor.
    #[default]
    Center,
    /// `(1.0, 0.5)`
    MiddleRight,
    /// `(0.0, 1.0)`
    TopLeft,
    /// `(0.5, 1.0)`
    TopCenter,
    /// `(1.0, 1.0)`
    TopRight,
}

impl Alignment {
    /// Every alignment, in reading order from bottom-left to top-right.
    pub const ALL: [Alignment; 9] = [
        Alignment::BottomLeft,
        Alignment::BottomCenter,
        Alignment::BottomRight,
        Alignment::MiddleLeft,
        Alignment::Center,
        Alignment::MiddleRight,
        Alignment::TopLeft,
        Alignment::TopCenter,
        Alignment::TopRight,
    ];

    /// Returns the fractional offset this alignment is bound to.
    #[inline]
    #[must_use]
    pub const fn fraction(self) -> Vector2 {
        match self {
            Alignment::BottomLeft => Vector2::new(0.0, 0.0),
            Alignment::BottomCenter => Vector2::new(0.5, 0.0),
            Alignment::BottomRight => Vector2::new(1.0, 0.0),
            Alignment::MiddleLeft => Vector2::new(0.0, 0.5),
            Alignment::Center => Vector2::new(0.5, 0.5),
            Alignment::MiddleRight => Vector2::new(1.0, 0.5),
            Alignment::TopLeft => Vector2::new(0.0, 1.0),
            Alignment::TopCenter => Vector2::new(0.5, 1.0),
            Alignment::TopRight => Vector2::new(1.0, 1.0),
        }
    }

    /// Computes the pixel anchor for an image of the given size, as
    /// `size * fraction`.
    #[inline]
    #[must_use]
    pub fn anchor(self, size: Vector2) -> Vector2 {
        size * self.fraction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_fractions_are_fixed() {
        assert_eq!(Alignment::BottomLeft.fraction(), Vector2::ZERO);
        assert_eq!(Alignment::Center.fraction(), Vector2::new(0.5, 0.5));
        assert_eq!(Alignment::TopRight.fraction(), Vector2::ONE);
    }

    #[test]
    fn all_fractions_lie_in_the_unit_square() {
        for alignment in Alignment::ALL {
            let f = alignment.fraction();
            assert!((0.0..=1.0).contains(&f.x), "{alignment:?} x out of range");
            assert!((0.0..=1.0).contains(&f.y), "{alignment:?} y out of range");
        }
    }

    #[test]
    fn anchor_scales_the_image_size() {
        let size = Vector2::new(640.0, 480.0);
        assert_eq!(Alignment::Center.anchor(size), Vector2::new(320.0, 240.0));
        assert_eq!(Alignment::BottomLeft.anchor(size), Vector2::ZERO);
        assert_eq!(Alignment::TopRight.anchor(size), size);
    }

    #[test]
    fn default_is_center() {
        assert_eq!(Alignment::default(), Alignment::Center);
    }
}
