// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Visual weight class of a font, typically on a scale from 1.0 to 1000.0.
///
/// This uses an `f32` so that it can represent the full range of values possible with variable
/// fonts. The named constants cover the `W100`..`W900` keyword scale.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100.0);

    /// Weight value of 200.
    pub const EXTRA_LIGHT: Self = Self(200.0);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300.0);

    /// Weight value of 400. This is the default value.
    pub const NORMAL: Self = Self(400.0);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500.0);

    /// Weight value of 600.
    pub const SEMI_BOLD: Self = Self(600.0);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);

    /// Weight value of 800.
    pub const EXTRA_BOLD: Self = Self(800.0);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900.0);

    /// Creates a new weight value.
    pub const fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Returns `true` for weights of 600 and above.
    pub fn is_bold(self) -> bool {
        self.0 >= 600.0
    }

    /// Parses a font weight keyword or number.
    ///
    /// Supported syntax (after trimming ASCII whitespace):
    /// - `normal`, `regular` → `FontWeight::NORMAL`
    /// - `medium` → `FontWeight::MEDIUM`
    /// - `bold` → `FontWeight::BOLD`
    /// - a number → `FontWeight::new(value)`
    ///
    /// This parser is case-sensitive and does not clamp the numeric range.
    ///
    /// ```
    /// use text_primitives::FontWeight;
    ///
    /// assert_eq!(FontWeight::parse("normal"), Some(FontWeight::NORMAL));
    /// assert_eq!(FontWeight::parse("bold"), Some(FontWeight::BOLD));
    /// assert_eq!(FontWeight::parse("850"), Some(FontWeight::new(850.0)));
    /// assert_eq!(FontWeight::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Some(match s {
            "normal" | "regular" => Self::NORMAL,
            "medium" => Self::MEDIUM,
            "bold" => Self::BOLD,
            _ => Self(s.parse::<f32>().ok()?),
        })
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "The integer keyword mapping is only used when the cast is lossless (checked)."
        )]
        let int_value = self.0 as i32;

        if self.0 == int_value as f32 && (100..=900).contains(&int_value) && int_value % 100 == 0 {
            write!(f, "W{int_value}")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

coded_enum! {
    /// Visual style or "slope" of a font.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub enum FontStyle {
        /// Upright glyphs.
        #[default]
        Normal = 0,
        /// Italic glyphs.
        Italic = 1,
    }
}

impl FontStyle {
    /// Parses `normal` or `italic`.
    ///
    /// ```
    /// use text_primitives::FontStyle;
    ///
    /// assert_eq!(FontStyle::parse("italic"), Some(FontStyle::Italic));
    /// assert_eq!(FontStyle::parse("oblique"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "normal" => Some(Self::Normal),
            "italic" => Some(Self::Italic),
            _ => None,
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        })
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use crate::{FontStyle, FontWeight};
    use alloc::string::ToString;

    #[test]
    fn fontweight_parse_keywords_and_numbers() {
        assert_eq!(FontWeight::parse("regular"), Some(FontWeight::NORMAL));
        assert_eq!(FontWeight::parse("medium"), Some(FontWeight::MEDIUM));
        assert_eq!(FontWeight::parse(" 850 "), Some(FontWeight::new(850.0)));
        assert_eq!(FontWeight::parse("Bold"), None);
    }

    #[test]
    fn fontweight_display_uses_scale_keywords() {
        assert_eq!(FontWeight::LIGHT.to_string(), "W300");
        assert_eq!(FontWeight::new(350.0).to_string(), "350");
        assert_eq!(FontWeight::new(1000.0).to_string(), "1000");
    }

    #[test]
    fn fontweight_is_bold() {
        assert!(FontWeight::BOLD.is_bold());
        assert!(FontWeight::SEMI_BOLD.is_bold());
        assert!(!FontWeight::MEDIUM.is_bold());
    }

    #[test]
    fn fontstyle_codes() {
        assert_eq!(FontStyle::Italic.to_i32(), 1);
        assert_eq!(FontStyle::from_i32(0), Some(FontStyle::Normal));
        assert_eq!(FontStyle::from_i32(2), None);
        assert_eq!(FontStyle::Italic.to_string(), "italic");
    }
}
