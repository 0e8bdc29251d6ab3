// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Color;

/// A text shadow.
///
/// Offsets and the blur radius are in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Shadow {
    /// Blur radius; `0.0` is a hard shadow.
    pub blur_radius: f64,
    /// Horizontal offset.
    pub offset_x: f64,
    /// Vertical offset.
    pub offset_y: f64,
    /// Shadow color.
    pub color: Color,
}

impl Shadow {
    /// Creates a shadow.
    pub const fn new(blur_radius: f64, offset_x: f64, offset_y: f64, color: Color) -> Self {
        Self {
            blur_radius,
            offset_x,
            offset_y,
            color,
        }
    }

    /// Returns `true` if the shadow can have a visible effect.
    pub fn is_visible(&self) -> bool {
        self.color.alpha() != 0
    }
}
