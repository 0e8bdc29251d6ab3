// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use text_primitives::{
    BorderRadius, Color, Dimension, LeadingMargin, LineBreakStrategy, TextAlign, TextOverflow,
    WordBreak,
};

/// Paragraph-level layout properties carried by a paragraph style span.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpanParagraphStyle {
    /// Horizontal alignment.
    pub align: Option<TextAlign>,
    /// Maximum number of lines.
    pub max_lines: Option<u32>,
    /// Word breaking rule.
    pub word_break: Option<WordBreak>,
    /// Overflow handling.
    pub text_overflow: Option<TextOverflow>,
    /// Indent of the first line.
    pub text_indent: Option<Dimension>,
    /// Margin reserved at the leading edge, optionally with an image drawn in it.
    pub leading_margin: Option<LeadingMargin>,
    /// Line breaking strategy.
    pub line_break_strategy: Option<LineBreakStrategy>,
    /// Space after the paragraph.
    pub paragraph_spacing: Option<Dimension>,
}

impl SpanParagraphStyle {
    /// Creates a paragraph style with no properties set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alignment.
    #[inline]
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    /// Sets the maximum number of lines.
    #[inline]
    pub fn with_max_lines(mut self, max_lines: u32) -> Self {
        self.max_lines = Some(max_lines);
        self
    }

    /// Sets the word breaking rule.
    #[inline]
    pub fn with_word_break(mut self, word_break: WordBreak) -> Self {
        self.word_break = Some(word_break);
        self
    }

    /// Sets the overflow handling.
    #[inline]
    pub fn with_text_overflow(mut self, overflow: TextOverflow) -> Self {
        self.text_overflow = Some(overflow);
        self
    }

    /// Sets the first line indent.
    #[inline]
    pub fn with_text_indent(mut self, indent: Dimension) -> Self {
        self.text_indent = Some(indent);
        self
    }

    /// Sets the leading margin.
    #[inline]
    pub fn with_leading_margin(mut self, margin: LeadingMargin) -> Self {
        self.leading_margin = Some(margin);
        self
    }

    /// Sets the line breaking strategy.
    #[inline]
    pub fn with_line_break_strategy(mut self, strategy: LineBreakStrategy) -> Self {
        self.line_break_strategy = Some(strategy);
        self
    }

    /// Sets the space after the paragraph.
    #[inline]
    pub fn with_paragraph_spacing(mut self, spacing: Dimension) -> Self {
        self.paragraph_spacing = Some(spacing);
        self
    }
}

/// A background drawn behind a run of text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextBackgroundStyle {
    /// Fill color.
    pub color: Option<Color>,
    /// Corner radii of the background box.
    pub radius: Option<BorderRadius>,
}

impl TextBackgroundStyle {
    /// Creates a background filled with `color`.
    #[inline]
    pub fn new(color: Color) -> Self {
        Self {
            color: Some(color),
            radius: None,
        }
    }

    /// Sets the corner radii.
    #[inline]
    pub fn with_radius(mut self, radius: BorderRadius) -> Self {
        self.radius = Some(radius);
        self
    }
}
