// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

use text_primitives::{Color, Dimension, FontFamilies, FontFeature, FontStyle, FontWeight};

/// Font properties carried by a font span.
///
/// Every property is optional; an unset property leaves whatever the text component would
/// otherwise use.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Font {
    /// Font weight.
    pub weight: Option<FontWeight>,
    /// Font size.
    pub size: Option<Dimension>,
    /// Upright or italic.
    pub style: Option<FontStyle>,
    /// Family names, in fallback order.
    pub families: Option<FontFamilies>,
    /// Text color.
    pub color: Option<Color>,
    /// OpenType feature settings.
    pub features: Option<Vec<FontFeature>>,
}

impl Font {
    /// Creates a font with no properties set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the weight.
    #[inline]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Sets the size.
    #[inline]
    pub fn with_size(mut self, size: Dimension) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the style.
    #[inline]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the family list.
    #[inline]
    pub fn with_families(mut self, families: FontFamilies) -> Self {
        self.families = Some(families);
        self
    }

    /// Sets the color.
    #[inline]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets the feature settings.
    #[inline]
    pub fn with_features(mut self, features: impl Into<Vec<FontFeature>>) -> Self {
        self.features = Some(features.into());
        self
    }

    /// Returns `true` if no property is set.
    pub fn is_empty(&self) -> bool {
        self.weight.is_none()
            && self.size.is_none()
            && self.style.is_none()
            && self.families.is_none()
            && self.color.is_none()
            && self.features.is_none()
    }

    /// Copies every property set on `other` into `self`.
    pub(crate) fn update_from(&mut self, other: &Self) {
        if other.weight.is_some() {
            self.weight = other.weight;
        }
        if other.size.is_some() {
            self.size = other.size;
        }
        if other.style.is_some() {
            self.style = other.style;
        }
        if other.families.is_some() {
            self.families.clone_from(&other.families);
        }
        if other.color.is_some() {
            self.color = other.color;
        }
        if other.features.is_some() {
            self.features.clone_from(&other.features);
        }
    }
}

/// Writes `name: value`, separated from any previous field by a space.
pub(crate) fn write_field(
    f: &mut fmt::Formatter<'_>,
    first: &mut bool,
    name: &str,
    value: impl fmt::Display,
) -> fmt::Result {
    if !core::mem::take(first) {
        f.write_str(" ")?;
    }
    write!(f, "{name}: {value}")
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = &mut true;
        if let Some(weight) = self.weight {
            write_field(f, first, "weight", weight)?;
        }
        if let Some(size) = self.size {
            write_field(f, first, "size", size)?;
        }
        if let Some(style) = self.style {
            write_field(f, first, "style", style)?;
        }
        if let Some(families) = &self.families {
            write_field(f, first, "families", families)?;
        }
        if let Some(color) = self.color {
            write_field(f, first, "color", color)?;
        }
        if let Some(features) = &self.features {
            write_field(f, first, "features", features.len())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Font;
    use alloc::string::ToString;
    use text_primitives::{Color, Dimension, FontStyle, FontWeight};

    #[test]
    fn update_from_only_copies_set_properties() {
        let mut base = Font::new()
            .with_size(Dimension::px(12.0))
            .with_color(Color::RED);
        base.update_from(&Font::new().with_weight(FontWeight::BOLD).with_color(Color::BLUE));
        assert_eq!(base.size, Some(Dimension::px(12.0)));
        assert_eq!(base.weight, Some(FontWeight::BOLD));
        assert_eq!(base.color, Some(Color::BLUE));
        assert!(!base.is_empty());
        assert!(Font::new().is_empty());
    }

    #[test]
    fn display_lists_set_properties() {
        let font = Font::new().with_style(FontStyle::Italic);
        assert_eq!(font.to_string(), "style: italic");
        assert_eq!(Font::new().to_string(), "");
    }
}
