// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Dimension, PixelMap};

/// Size of the leading margin reserved before the first line of a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LeadingMarginSize {
    /// Width of the reserved area.
    pub width: Dimension,
    /// Height of the reserved area.
    pub height: Dimension,
}

impl LeadingMarginSize {
    /// Creates a margin size.
    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }
}

/// A paragraph's leading margin, optionally filled with an image.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LeadingMargin {
    /// The reserved area.
    pub size: LeadingMarginSize,
    /// Image drawn in the reserved area.
    pub pixmap: Option<PixelMap>,
}

impl LeadingMargin {
    /// Creates a margin with no image.
    pub const fn new(size: LeadingMarginSize) -> Self {
        Self { size, pixmap: None }
    }
}
