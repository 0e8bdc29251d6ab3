// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{CalcLength, Dimension};

/// Corner radii of a rounded rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BorderRadius {
    /// Radius of the top-left corner.
    pub top_left: Dimension,
    /// Radius of the top-right corner.
    pub top_right: Dimension,
    /// Radius of the bottom-left corner.
    pub bottom_left: Dimension,
    /// Radius of the bottom-right corner.
    pub bottom_right: Dimension,
}

impl BorderRadius {
    /// Uses the same radius for every corner.
    pub const fn all(radius: Dimension) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_left: radius,
            bottom_right: radius,
        }
    }

    /// Returns `true` when every corner has the same radius.
    pub fn is_uniform(&self) -> bool {
        self.top_left == self.top_right
            && self.top_left == self.bottom_left
            && self.top_left == self.bottom_right
    }
}

/// Per-edge lengths of a box, used for both padding and margin.
///
/// Unset edges are left to the layout engine's default.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct EdgeLengths {
    /// The left edge.
    pub left: Option<CalcLength>,
    /// The right edge.
    pub right: Option<CalcLength>,
    /// The top edge.
    pub top: Option<CalcLength>,
    /// The bottom edge.
    pub bottom: Option<CalcLength>,
}

impl EdgeLengths {
    /// Sets every edge to `length`.
    pub fn all(length: impl Into<CalcLength>) -> Self {
        let length = length.into();
        Self {
            left: Some(length.clone()),
            right: Some(length.clone()),
            top: Some(length.clone()),
            bottom: Some(length),
        }
    }

    /// Returns `true` when no edge is set.
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none() && self.top.is_none() && self.bottom.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::{BorderRadius, EdgeLengths};
    use crate::{CalcLength, Dimension};

    #[test]
    fn uniform_radius() {
        let r = BorderRadius::all(Dimension::vp(2.0));
        assert!(r.is_uniform());
        let mut skewed = r;
        skewed.bottom_right = Dimension::vp(3.0);
        assert!(!skewed.is_uniform());
    }

    #[test]
    fn edges_all_and_empty() {
        assert!(EdgeLengths::default().is_empty());
        let edges = EdgeLengths::all(Dimension::px(5.0));
        assert!(!edges.is_empty());
        assert_eq!(edges.top, Some(CalcLength::from(Dimension::px(5.0))));
        assert_eq!(edges.left, edges.bottom);
    }
}
