// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use text_primitives::{
    Dimension, LeadingMargin, LineBreakStrategy, Shadow, TextAlign, TextOverflow, WordBreak,
};

use crate::style::{
    CustomSpanOptions, DecorationStyle, Font, GestureStyle, ImageSpanOptions, SpanParagraphStyle,
    TextBackgroundStyle,
};
use crate::{SpanAttributes, SpanOperation};

/// Character-level styles resolved for a run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontStyleGroup {
    /// Font properties, merged from every font span covering the run.
    pub font: Font,
    /// Decoration lines.
    pub decoration: Option<DecorationStyle>,
    /// Extra space between characters.
    pub letter_spacing: Option<Dimension>,
    /// Text shadows.
    pub text_shadows: Option<Vec<Shadow>>,
}

impl FontStyleGroup {
    /// Returns `true` if nothing is set.
    pub fn is_empty(&self) -> bool {
        self.font.is_empty()
            && self.decoration.is_none()
            && self.letter_spacing.is_none()
            && self.text_shadows.is_none()
    }
}

/// Line-level styles resolved for a run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLineStyleGroup {
    /// Line height.
    pub line_height: Option<Dimension>,
    /// Vertical offset from the baseline.
    pub baseline_offset: Option<Dimension>,
    /// Paragraph layout.
    pub paragraph: Option<SpanParagraphStyle>,
}

impl TextLineStyleGroup {
    /// Returns `true` if nothing is set.
    pub fn is_empty(&self) -> bool {
        self.line_height.is_none() && self.baseline_offset.is_none() && self.paragraph.is_none()
    }

    /// Paragraph alignment.
    pub fn text_align(&self) -> Option<TextAlign> {
        self.paragraph.as_ref()?.align
    }

    /// Paragraph line limit.
    pub fn max_lines(&self) -> Option<u32> {
        self.paragraph.as_ref()?.max_lines
    }

    /// Paragraph word breaking rule.
    pub fn word_break(&self) -> Option<WordBreak> {
        self.paragraph.as_ref()?.word_break
    }

    /// Paragraph overflow handling.
    pub fn text_overflow(&self) -> Option<TextOverflow> {
        self.paragraph.as_ref()?.text_overflow
    }

    /// Paragraph first line indent.
    pub fn text_indent(&self) -> Option<Dimension> {
        self.paragraph.as_ref()?.text_indent
    }

    /// Paragraph leading margin.
    pub fn leading_margin(&self) -> Option<&LeadingMargin> {
        self.paragraph.as_ref()?.leading_margin.as_ref()
    }

    /// Paragraph line breaking strategy.
    pub fn line_break_strategy(&self) -> Option<LineBreakStrategy> {
        self.paragraph.as_ref()?.line_break_strategy
    }

    /// Space after the paragraph.
    pub fn paragraph_spacing(&self) -> Option<Dimension> {
        self.paragraph.as_ref()?.paragraph_spacing
    }
}

/// The placeholder drawn in place of a run's single character.
#[derive(Clone, Debug)]
pub enum Placeholder {
    /// An inline image.
    Image(ImageSpanOptions),
    /// A custom-drawn box.
    Custom(CustomSpanOptions),
}

/// What a [`SpanResult`] describes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpanResultKind {
    /// A run of text.
    Text,
    /// An inline image.
    Image,
    /// A custom placeholder.
    Custom,
}

/// A run reported to selection and copy handlers.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanResult {
    /// What the run is.
    pub kind: SpanResultKind,
    /// The run's range in the span string.
    pub span_range: Range<usize>,
    /// The run's text; empty for placeholders.
    pub value: String,
}

/// A contiguous run with every span covering it resolved into style groups.
///
/// Items are produced by [`SpanString::span_items`](crate::SpanString::span_items) and are
/// what a text component lays out.
#[derive(Clone, Debug, Default)]
pub struct SpanItem {
    /// The run's range, in UTF-16 code units.
    pub interval: Range<usize>,
    /// The run's text.
    pub content: String,
    /// Character-level styles.
    pub font_style: Option<FontStyleGroup>,
    /// Line-level styles.
    pub text_line_style: Option<TextLineStyleGroup>,
    /// Background behind the run.
    pub background_style: Option<TextBackgroundStyle>,
    /// Gesture handlers attached to the run.
    pub gesture: Option<GestureStyle>,
    /// Placeholder replacing the run's character.
    pub placeholder: Option<Placeholder>,
    /// Whether an extension span covers the run.
    pub ext: bool,
}

impl SpanItem {
    /// Creates an unstyled item.
    pub fn new(interval: Range<usize>, content: impl Into<String>) -> Self {
        Self {
            interval,
            content: content.into(),
            ..Self::default()
        }
    }

    fn font_style_mut(&mut self) -> &mut FontStyleGroup {
        self.font_style.get_or_insert_with(FontStyleGroup::default)
    }

    fn text_line_style_mut(&mut self) -> &mut TextLineStyleGroup {
        self.text_line_style
            .get_or_insert_with(TextLineStyleGroup::default)
    }

    pub(crate) fn apply(&mut self, attributes: &SpanAttributes, operation: SpanOperation) {
        match operation {
            SpanOperation::Add => self.add(attributes),
            SpanOperation::Remove => self.remove(attributes),
        }
    }

    fn add(&mut self, attributes: &SpanAttributes) {
        match attributes {
            SpanAttributes::Font(font) => self.font_style_mut().font.update_from(font),
            SpanAttributes::Decoration(decoration) => {
                self.font_style_mut().decoration = Some(decoration.clone());
            }
            SpanAttributes::LetterSpacing(spacing) => {
                self.font_style_mut().letter_spacing = Some(*spacing);
            }
            SpanAttributes::TextShadow(shadows) => {
                self.font_style_mut().text_shadows = Some(shadows.clone());
            }
            SpanAttributes::BaselineOffset(offset) => {
                self.text_line_style_mut().baseline_offset = Some(*offset);
            }
            SpanAttributes::LineHeight(height) => {
                self.text_line_style_mut().line_height = Some(*height);
            }
            SpanAttributes::ParagraphStyle(paragraph) => {
                self.text_line_style_mut().paragraph = Some(paragraph.clone());
            }
            SpanAttributes::BackgroundColor(background) => {
                self.background_style = Some(*background);
            }
            SpanAttributes::Gesture(gesture) => self.gesture = Some(gesture.clone()),
            SpanAttributes::Image(image) => {
                self.placeholder = Some(Placeholder::Image(image.clone()));
            }
            SpanAttributes::Custom(custom) => {
                self.placeholder = Some(Placeholder::Custom(custom.clone()));
            }
            SpanAttributes::Ext => self.ext = true,
        }
    }

    fn remove(&mut self, attributes: &SpanAttributes) {
        match attributes {
            SpanAttributes::Font(_)
            | SpanAttributes::Decoration(_)
            | SpanAttributes::LetterSpacing(_)
            | SpanAttributes::TextShadow(_) => {
                if let Some(group) = &mut self.font_style {
                    match attributes {
                        SpanAttributes::Font(_) => group.font = Font::default(),
                        SpanAttributes::Decoration(_) => group.decoration = None,
                        SpanAttributes::LetterSpacing(_) => group.letter_spacing = None,
                        _ => group.text_shadows = None,
                    }
                    if group.is_empty() {
                        self.font_style = None;
                    }
                }
            }
            SpanAttributes::BaselineOffset(_)
            | SpanAttributes::LineHeight(_)
            | SpanAttributes::ParagraphStyle(_) => {
                if let Some(group) = &mut self.text_line_style {
                    match attributes {
                        SpanAttributes::BaselineOffset(_) => group.baseline_offset = None,
                        SpanAttributes::LineHeight(_) => group.line_height = None,
                        _ => group.paragraph = None,
                    }
                    if group.is_empty() {
                        self.text_line_style = None;
                    }
                }
            }
            SpanAttributes::BackgroundColor(_) => self.background_style = None,
            SpanAttributes::Gesture(_) => self.gesture = None,
            SpanAttributes::Image(_) | SpanAttributes::Custom(_) => self.placeholder = None,
            SpanAttributes::Ext => self.ext = false,
        }
    }

    /// Describes this item for selection handlers, if it lies within `start..end`.
    pub fn span_result(&self, start: usize, end: usize) -> Option<SpanResult> {
        if self.interval.start < start || self.interval.end > end {
            return None;
        }
        let (kind, value) = match self.placeholder {
            Some(Placeholder::Image(_)) => (SpanResultKind::Image, String::new()),
            Some(Placeholder::Custom(_)) => (SpanResultKind::Custom, String::new()),
            None => (SpanResultKind::Text, self.content.clone()),
        };
        Some(SpanResult {
            kind,
            span_range: self.interval.clone(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Placeholder, SpanItem, SpanResultKind};
    use crate::style::{CustomSpanOptions, DecorationStyle, Font, SpanParagraphStyle};
    use crate::{Span, SpanOperation};
    use text_primitives::{Color, Dimension, FontWeight, TextAlign, TextDecoration};

    #[test]
    fn font_spans_merge_properties() {
        let mut item = SpanItem::new(0..3, "abc");
        Span::font(Font::new().with_weight(FontWeight::BOLD), 0..3)
            .apply_to_span_item(&mut item, SpanOperation::Add);
        Span::font(Font::new().with_color(Color::RED), 0..3)
            .apply_to_span_item(&mut item, SpanOperation::Add);
        let font = &item.font_style.as_ref().unwrap().font;
        assert_eq!(font.weight, Some(FontWeight::BOLD));
        assert_eq!(font.color, Some(Color::RED));
    }

    #[test]
    fn removing_the_last_property_resets_the_group() {
        let mut item = SpanItem::new(0..1, "a");
        let decoration = Span::decoration(DecorationStyle::new(TextDecoration::Underline), 0..1);
        let height = Span::line_height(Dimension::px(10.0), 0..1);
        let paragraph = Span::paragraph(SpanParagraphStyle::new().with_align(TextAlign::End), 0..1);
        decoration.apply_to_span_item(&mut item, SpanOperation::Add);
        height.apply_to_span_item(&mut item, SpanOperation::Add);
        paragraph.apply_to_span_item(&mut item, SpanOperation::Add);
        assert_eq!(
            item.text_line_style.as_ref().unwrap().text_align(),
            Some(TextAlign::End)
        );

        decoration.apply_to_span_item(&mut item, SpanOperation::Remove);
        assert!(item.font_style.is_none());

        height.apply_to_span_item(&mut item, SpanOperation::Remove);
        assert!(item.text_line_style.is_some());
        paragraph.apply_to_span_item(&mut item, SpanOperation::Remove);
        assert!(item.text_line_style.is_none());
    }

    #[test]
    fn removing_from_an_empty_item_is_harmless() {
        let mut item = SpanItem::new(0..1, "a");
        Span::font(Font::new(), 0..1).apply_to_span_item(&mut item, SpanOperation::Remove);
        Span::line_height(Dimension::px(1.0), 0..1)
            .apply_to_span_item(&mut item, SpanOperation::Remove);
        assert!(item.font_style.is_none());
        assert!(item.text_line_style.is_none());
    }

    #[test]
    fn span_result_requires_containment() {
        let mut item = SpanItem::new(1..2, " ");
        item.placeholder = Some(Placeholder::Custom(CustomSpanOptions::new()));
        let result = item.span_result(0, 3).unwrap();
        assert_eq!(result.kind, SpanResultKind::Custom);
        assert_eq!(result.span_range, 1..2);
        assert!(item.span_result(2, 3).is_none());

        let wide = SpanItem::new(1..4, "abc");
        assert!(wide.span_result(0, 3).is_none());
        assert_eq!(wide.span_result(0, 4).unwrap().value, "abc");
    }
}
