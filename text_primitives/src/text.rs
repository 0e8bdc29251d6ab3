// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

coded_enum! {
    /// Horizontal alignment of the lines of a paragraph.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub enum TextAlign {
        /// Aligned to the start edge for the paragraph direction.
        #[default]
        Start = 0,
        /// Centered.
        Center = 1,
        /// Aligned to the end edge for the paragraph direction.
        End = 2,
        /// Stretched to fill the line, except the last one.
        Justify = 3,
        /// Aligned to the left edge.
        Left = 4,
        /// Aligned to the right edge.
        Right = 5,
    }
}

coded_enum! {
    /// Control over word breaking, named for the CSS property.
    ///
    /// See: <https://www.w3.org/TR/css-text-3/#word-break-property>
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub enum WordBreak {
        /// Customary rules.
        #[default]
        Normal = 0,
        /// Breaking is allowed within "words".
        BreakAll = 1,
        /// Words may be broken at an arbitrary point when nothing else fits.
        BreakWord = 2,
        /// Words are broken at hyphenation points.
        Hyphenation = 3,
    }
}

coded_enum! {
    /// What to do with text that does not fit its box.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub enum TextOverflow {
        /// Let the text overflow.
        None = 0,
        /// Clip at the box edge.
        #[default]
        Clip = 1,
        /// Replace the cut-off text with an ellipsis.
        Ellipsis = 2,
        /// Scroll the text horizontally.
        Marquee = 3,
    }
}

coded_enum! {
    /// Line breaking strategy used by the paragraph engine.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub enum LineBreakStrategy {
        /// Fill each line as much as possible.
        #[default]
        Greedy = 0,
        /// Optimize line breaks over the whole paragraph.
        HighQuality = 1,
        /// Keep line lengths as even as possible.
        Balanced = 2,
    }
}

coded_enum! {
    /// A text decoration line.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub enum TextDecoration {
        /// No decoration.
        #[default]
        None = 0,
        /// A line below the text.
        Underline = 1,
        /// A line above the text.
        Overline = 2,
        /// A line through the middle of the text.
        LineThrough = 3,
    }
}

coded_enum! {
    /// How a decoration line is drawn.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub enum TextDecorationStyle {
        /// A single solid line.
        #[default]
        Solid = 0,
        /// Two parallel lines.
        Double = 1,
        /// A dotted line.
        Dotted = 2,
        /// A dashed line.
        Dashed = 3,
        /// A wavy line.
        Wavy = 4,
    }
}

#[cfg(test)]
mod tests {
    use super::{TextAlign, TextDecoration, TextOverflow, WordBreak};

    #[test]
    fn codes_round_trip() {
        for align in [
            TextAlign::Start,
            TextAlign::Center,
            TextAlign::End,
            TextAlign::Justify,
            TextAlign::Left,
            TextAlign::Right,
        ] {
            assert_eq!(TextAlign::from_i32(align.to_i32()), Some(align));
        }
        assert_eq!(WordBreak::BreakAll.to_i32(), 1);
        assert_eq!(TextOverflow::Ellipsis.to_i32(), 2);
        assert_eq!(TextDecoration::from_i32(3), Some(TextDecoration::LineThrough));
        assert_eq!(TextDecoration::from_i32(4), None);
    }
}
