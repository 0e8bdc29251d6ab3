// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use smallvec::SmallVec;
use text_primitives::{Color, TextDecoration, TextDecorationStyle};

use super::font::write_field;

/// Decoration lines drawn over a run of text.
///
/// A decoration span can carry several line types at once. When decoration spans overlap, the
/// overlap carries the types of both, newest first (see [`merged_over`](Self::merged_over)),
/// unless the newer span opted out with [`with_multi_type(false)`](Self::with_multi_type).
#[derive(Clone, Debug, PartialEq)]
pub struct DecorationStyle {
    types: SmallVec<[TextDecoration; 2]>,
    /// Line color.
    pub color: Option<Color>,
    /// Line style.
    pub style: Option<TextDecorationStyle>,
    /// Multiplier applied to the default line thickness.
    pub thickness_scale: Option<f64>,
    /// Whether this decoration combines with overlapping decorations.
    pub enable_multi_type: bool,
}

impl Default for DecorationStyle {
    fn default() -> Self {
        Self {
            types: SmallVec::new(),
            color: None,
            style: None,
            thickness_scale: None,
            enable_multi_type: true,
        }
    }
}

impl DecorationStyle {
    /// Creates a decoration drawing a single line type.
    pub fn new(decoration: TextDecoration) -> Self {
        let mut types = SmallVec::new();
        types.push(decoration);
        Self {
            types,
            ..Self::default()
        }
    }

    /// Adds a line type, keeping existing types first.
    pub fn with_type(mut self, decoration: TextDecoration) -> Self {
        if !self.types.contains(&decoration) {
            self.types.push(decoration);
        }
        self
    }

    /// Sets the line color.
    #[inline]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the line style.
    #[inline]
    pub fn with_style(mut self, style: TextDecorationStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the thickness multiplier.
    #[inline]
    pub fn with_thickness_scale(mut self, scale: f64) -> Self {
        self.thickness_scale = Some(scale);
        self
    }

    /// Sets whether this decoration combines with overlapping decorations.
    #[inline]
    pub fn with_multi_type(mut self, enable: bool) -> Self {
        self.enable_multi_type = enable;
        self
    }

    /// The line types, most recently applied first.
    #[inline]
    pub fn types(&self) -> &[TextDecoration] {
        &self.types
    }

    /// The most recently applied line type, or [`TextDecoration::None`] if there is none.
    #[inline]
    pub fn first(&self) -> TextDecoration {
        self.types.first().copied().unwrap_or_default()
    }

    /// Combines this (newer) decoration with an `older` one it overlaps.
    ///
    /// The result lists this decoration's types followed by the older types it does not
    /// already have. Color, style and thickness come from `self`.
    pub fn merged_over(&self, older: &Self) -> Self {
        let mut merged = self.clone();
        for &decoration in &older.types {
            if !merged.types.contains(&decoration) {
                merged.types.push(decoration);
            }
        }
        merged
    }
}

impl fmt::Display for DecorationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = &mut true;
        write_field(f, first, "types", format_args!("{:?}", self.types.as_slice()))?;
        if let Some(color) = self.color {
            write_field(f, first, "color", color)?;
        }
        if let Some(style) = self.style {
            write_field(f, first, "style", format_args!("{style:?}"))?;
        }
        if let Some(scale) = self.thickness_scale {
            write_field(f, first, "thickness", scale)?;
        }
        Ok(())
    }
}
