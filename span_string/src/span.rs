// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use text_primitives::{Dimension, Shadow};

use crate::style::{
    write_field, CustomSpanOptions, DecorationStyle, Font, GestureStyle, ImageSpanOptions,
    SpanParagraphStyle, TextBackgroundStyle,
};
use crate::SpanItem;

/// The kind of a span, selecting its attribute payload and merge policy.
///
/// Kinds are ordered; queries returning spans of several kinds break ties by this order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpanType {
    /// Font properties.
    Font,
    /// Decoration lines.
    Decoration,
    /// Vertical offset from the baseline.
    BaselineOffset,
    /// Extra space between characters.
    LetterSpacing,
    /// Text shadows.
    TextShadow,
    /// Line height.
    LineHeight,
    /// Background behind the text.
    BackgroundColor,
    /// Click and long press handlers.
    Gesture,
    /// Paragraph layout.
    ParagraphStyle,
    /// An inline image occupying one placeholder code unit.
    Image,
    /// A custom-drawn placeholder occupying one placeholder code unit.
    Custom,
    /// An attribute-less span reserved for extensions.
    Ext,
}

impl SpanType {
    /// The number of kinds.
    pub const COUNT: usize = 12;

    /// Every kind, in order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Font,
        Self::Decoration,
        Self::BaselineOffset,
        Self::LetterSpacing,
        Self::TextShadow,
        Self::LineHeight,
        Self::BackgroundColor,
        Self::Gesture,
        Self::ParagraphStyle,
        Self::Image,
        Self::Custom,
        Self::Ext,
    ];

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Returns `true` for kinds that own their placeholder character.
    ///
    /// Placeholder spans never grow with inserted text, are never merged with their
    /// neighbors, and take their character with them when removed.
    #[inline]
    pub const fn is_placeholder(self) -> bool {
        matches!(self, Self::Image | Self::Custom)
    }

    /// The name of the kind, as used in debug text.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Font => "Font",
            Self::Decoration => "Decoration",
            Self::BaselineOffset => "BaselineOffset",
            Self::LetterSpacing => "LetterSpacing",
            Self::TextShadow => "TextShadow",
            Self::LineHeight => "LineHeight",
            Self::BackgroundColor => "BackgroundColor",
            Self::Gesture => "Gesture",
            Self::ParagraphStyle => "ParagraphStyle",
            Self::Image => "Image",
            Self::Custom => "Custom",
            Self::Ext => "Ext",
        }
    }
}

impl fmt::Display for SpanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The attribute payload of a span, one variant per [`SpanType`].
#[derive(Clone, Debug)]
pub enum SpanAttributes {
    /// See [`SpanType::Font`].
    Font(Font),
    /// See [`SpanType::Decoration`].
    Decoration(DecorationStyle),
    /// See [`SpanType::BaselineOffset`].
    BaselineOffset(Dimension),
    /// See [`SpanType::LetterSpacing`].
    LetterSpacing(Dimension),
    /// See [`SpanType::TextShadow`].
    TextShadow(Vec<Shadow>),
    /// See [`SpanType::LineHeight`].
    LineHeight(Dimension),
    /// See [`SpanType::BackgroundColor`].
    BackgroundColor(TextBackgroundStyle),
    /// See [`SpanType::Gesture`].
    Gesture(GestureStyle),
    /// See [`SpanType::ParagraphStyle`].
    ParagraphStyle(SpanParagraphStyle),
    /// See [`SpanType::Image`].
    Image(ImageSpanOptions),
    /// See [`SpanType::Custom`].
    Custom(CustomSpanOptions),
    /// See [`SpanType::Ext`].
    Ext,
}

impl SpanAttributes {
    /// The kind these attributes belong to.
    pub fn kind(&self) -> SpanType {
        match self {
            Self::Font(_) => SpanType::Font,
            Self::Decoration(_) => SpanType::Decoration,
            Self::BaselineOffset(_) => SpanType::BaselineOffset,
            Self::LetterSpacing(_) => SpanType::LetterSpacing,
            Self::TextShadow(_) => SpanType::TextShadow,
            Self::LineHeight(_) => SpanType::LineHeight,
            Self::BackgroundColor(_) => SpanType::BackgroundColor,
            Self::Gesture(_) => SpanType::Gesture,
            Self::ParagraphStyle(_) => SpanType::ParagraphStyle,
            Self::Image(_) => SpanType::Image,
            Self::Custom(_) => SpanType::Custom,
            Self::Ext => SpanType::Ext,
        }
    }

    /// Compares attributes of the same kind.
    ///
    /// Attributes holding callbacks, and extension spans, are never equal to anything.
    pub fn is_equal(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Font(a), Self::Font(b)) => a == b,
            (Self::Decoration(a), Self::Decoration(b)) => a == b,
            (Self::BaselineOffset(a), Self::BaselineOffset(b))
            | (Self::LetterSpacing(a), Self::LetterSpacing(b))
            | (Self::LineHeight(a), Self::LineHeight(b)) => a == b,
            (Self::TextShadow(a), Self::TextShadow(b)) => a == b,
            (Self::BackgroundColor(a), Self::BackgroundColor(b)) => a == b,
            (Self::ParagraphStyle(a), Self::ParagraphStyle(b)) => a == b,
            (Self::Image(a), Self::Image(b)) => a == b,
            _ => false,
        }
    }

    /// Combine decorations where a newer decoration span lands on an older one.
    pub(crate) fn merge_decoration(older: &Self, newer: &Self) -> Self {
        match (older, newer) {
            (Self::Decoration(old), Self::Decoration(new)) => Self::Decoration(new.merged_over(old)),
            _ => newer.clone(),
        }
    }
}

impl fmt::Display for SpanAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = &mut true;
        match self {
            Self::Font(font) => fmt::Display::fmt(font, f),
            Self::Decoration(decoration) => fmt::Display::fmt(decoration, f),
            Self::BaselineOffset(offset) => write_field(f, first, "offset", offset),
            Self::LetterSpacing(spacing) => write_field(f, first, "spacing", spacing),
            Self::LineHeight(height) => write_field(f, first, "height", height),
            Self::TextShadow(shadows) => write_field(f, first, "shadows", shadows.len()),
            Self::BackgroundColor(background) => {
                if let Some(color) = background.color {
                    write_field(f, first, "color", color)?;
                }
                if background.radius.is_some() {
                    write_field(f, first, "rounded", true)?;
                }
                Ok(())
            }
            Self::Gesture(gesture) => {
                write_field(f, first, "click", gesture.on_click.is_some())?;
                write_field(f, first, "long_press", gesture.on_long_press.is_some())
            }
            Self::ParagraphStyle(paragraph) => {
                if let Some(align) = paragraph.align {
                    write_field(f, first, "align", format_args!("{align:?}"))?;
                }
                if let Some(max_lines) = paragraph.max_lines {
                    write_field(f, first, "max_lines", max_lines)?;
                }
                if let Some(indent) = paragraph.text_indent {
                    write_field(f, first, "indent", indent)?;
                }
                Ok(())
            }
            Self::Image(image) => {
                if let Some(src) = &image.src {
                    write_field(f, first, "src", src)?;
                }
                if image.pixel_map.is_some() {
                    write_field(f, first, "pixel_map", true)?;
                }
                Ok(())
            }
            Self::Custom(_) | Self::Ext => Ok(()),
        }
    }
}

/// Whether [`Span::apply_to_span_item`] adds or removes a span's contribution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpanOperation {
    /// Add the span's attributes to the item.
    Add,
    /// Clear the span kind's attributes from the item.
    Remove,
}

/// A styled range of a span string.
///
/// Ranges are half-open code-unit ranges into the UTF-16 text.
#[derive(Clone, Debug)]
pub struct Span {
    range: Range<usize>,
    attributes: SpanAttributes,
}

impl Span {
    /// Creates a span with the given attributes over `range`.
    #[inline]
    pub fn new(attributes: SpanAttributes, range: Range<usize>) -> Self {
        Self { range, attributes }
    }

    /// A font span.
    pub fn font(font: Font, range: Range<usize>) -> Self {
        Self::new(SpanAttributes::Font(font), range)
    }

    /// A decoration span.
    pub fn decoration(decoration: DecorationStyle, range: Range<usize>) -> Self {
        Self::new(SpanAttributes::Decoration(decoration), range)
    }

    /// A baseline offset span.
    pub fn baseline_offset(offset: Dimension, range: Range<usize>) -> Self {
        Self::new(SpanAttributes::BaselineOffset(offset), range)
    }

    /// A letter spacing span.
    pub fn letter_spacing(spacing: Dimension, range: Range<usize>) -> Self {
        Self::new(SpanAttributes::LetterSpacing(spacing), range)
    }

    /// A text shadow span.
    pub fn text_shadow(shadows: impl Into<Vec<Shadow>>, range: Range<usize>) -> Self {
        Self::new(SpanAttributes::TextShadow(shadows.into()), range)
    }

    /// A line height span.
    pub fn line_height(height: Dimension, range: Range<usize>) -> Self {
        Self::new(SpanAttributes::LineHeight(height), range)
    }

    /// A background span.
    pub fn background(background: TextBackgroundStyle, range: Range<usize>) -> Self {
        Self::new(SpanAttributes::BackgroundColor(background), range)
    }

    /// A gesture span.
    pub fn gesture(gesture: GestureStyle, range: Range<usize>) -> Self {
        Self::new(SpanAttributes::Gesture(gesture), range)
    }

    /// A paragraph style span.
    pub fn paragraph(paragraph: SpanParagraphStyle, range: Range<usize>) -> Self {
        Self::new(SpanAttributes::ParagraphStyle(paragraph), range)
    }

    /// An image span.
    pub fn image(image: ImageSpanOptions, range: Range<usize>) -> Self {
        Self::new(SpanAttributes::Image(image), range)
    }

    /// A custom placeholder span.
    pub fn custom(custom: CustomSpanOptions, range: Range<usize>) -> Self {
        Self::new(SpanAttributes::Custom(custom), range)
    }

    /// An extension span.
    pub fn ext(range: Range<usize>) -> Self {
        Self::new(SpanAttributes::Ext, range)
    }

    /// The covered range.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The first covered index.
    #[inline]
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// One past the last covered index.
    #[inline]
    pub fn end(&self) -> usize {
        self.range.end
    }

    /// The kind of this span.
    #[inline]
    pub fn kind(&self) -> SpanType {
        self.attributes.kind()
    }

    /// The attribute payload.
    #[inline]
    pub fn attributes(&self) -> &SpanAttributes {
        &self.attributes
    }

    /// Consumes the span, returning its payload.
    #[inline]
    pub fn into_attributes(self) -> SpanAttributes {
        self.attributes
    }

    /// Compares attributes, ignoring the ranges. See [`SpanAttributes::is_equal`].
    pub fn is_attributes_equal(&self, other: &Self) -> bool {
        self.attributes.is_equal(&other.attributes)
    }

    /// Adds or removes this span's contribution to `item`.
    pub fn apply_to_span_item(&self, item: &mut SpanItem, operation: SpanOperation) {
        item.apply(&self.attributes, operation);
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}Span [{}, {})",
            self.kind().name(),
            self.range.start,
            self.range.end
        )?;
        let attributes = alloc::format!("{}", self.attributes);
        if !attributes.is_empty() {
            write!(f, " {attributes}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Span, SpanAttributes, SpanType};
    use crate::style::{CustomSpanOptions, DecorationStyle, Font, GestureStyle};
    use alloc::string::ToString;
    use alloc::vec;
    use text_primitives::{Color, Dimension, Shadow, TextDecoration};

    #[test]
    fn kinds_are_indexed_in_order() {
        for (ix, kind) in SpanType::ALL.into_iter().enumerate() {
            assert_eq!(kind.index(), ix);
        }
        assert!(SpanType::Image.is_placeholder());
        assert!(SpanType::Custom.is_placeholder());
        assert!(!SpanType::Ext.is_placeholder());
    }

    #[test]
    fn display_starts_with_kind_name() {
        let font = Span::font(Font::new().with_color(Color::RED), 0..3);
        assert!(font.to_string().starts_with("FontSpan [0, 3)"));
        let decoration = Span::decoration(DecorationStyle::new(TextDecoration::Underline), 1..2);
        assert!(decoration.to_string().starts_with("DecorationSpan"));
        let offset = Span::baseline_offset(Dimension::px(4.0), 0..1);
        assert!(offset.to_string().starts_with("BaselineOffsetSpan"));
        assert_eq!(Span::ext(2..4).to_string(), "ExtSpan [2, 4)");
    }

    #[test]
    fn shadow_lists_compare_by_value() {
        let shadow = Shadow::new(4.0, 1.0, 1.0, Color::BLACK);
        let a = Span::text_shadow(vec![shadow], 0..1);
        let b = Span::text_shadow(vec![shadow], 3..5);
        assert!(a.is_attributes_equal(&b));

        let empty = Span::text_shadow(vec![], 0..1);
        assert!(!a.is_attributes_equal(&empty));

        let recolored = Span::text_shadow(vec![Shadow { color: Color::RED, ..shadow }], 0..1);
        assert!(!a.is_attributes_equal(&recolored));
    }

    #[test]
    fn callbacks_are_never_equal() {
        let gesture = Span::gesture(GestureStyle::new(), 0..1);
        assert!(!gesture.is_attributes_equal(&gesture.clone()));
        let custom = Span::custom(CustomSpanOptions::new(), 0..1);
        assert!(!custom.is_attributes_equal(&custom.clone()));
        assert!(!SpanAttributes::Ext.is_equal(&SpanAttributes::Ext));
        let font = Span::font(Font::new(), 0..1);
        assert!(!font.is_attributes_equal(&gesture));
    }
}
