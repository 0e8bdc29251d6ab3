// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serialization of span strings as a sequence of resolved runs.
//!
//! Each [`SpanItem`] becomes one record holding its text and whichever attributes it carries.
//! Nested attribute records use one-byte local field tags closed by a `0x00` byte; the values
//! themselves are `text_tlv` records. Callbacks are not carried: gesture and custom spans
//! decode with no handlers, and pixel maps decode empty. Empty spans are not carried either.

use alloc::vec::Vec;

use log::warn;
use smallvec::SmallVec;
use text_primitives::{
    FontStyle, FontWeight, LineBreakStrategy, TextAlign, TextDecoration, TextDecorationStyle,
    TextOverflow, WordBreak,
};
use text_tlv::{
    write_border_radius, write_color, write_dimension, write_double, write_font_families,
    write_font_features, write_image_span_attribute, write_int32, write_leading_margin,
    write_pixel_map, write_shadows, write_string, write_tag, Reader,
};

use crate::style::{
    CustomSpanOptions, DecorationStyle, Font, GestureStyle, ImageSpanOptions, SpanParagraphStyle,
    TextBackgroundStyle,
};
use crate::{Placeholder, SpanAttributes, SpanItem, SpanString, SpanType};

const FIELD_END: u8 = 0x00;
const ITEM_START: u8 = 0x01;
const ITEM_END: u8 = 0x02;
const CONTENT: u8 = 0x03;
const FONT: u8 = 0x04;
const DECORATION: u8 = 0x05;
const LETTER_SPACING: u8 = 0x06;
const TEXT_SHADOWS: u8 = 0x07;
const BASELINE_OFFSET: u8 = 0x08;
const LINE_HEIGHT: u8 = 0x09;
const PARAGRAPH: u8 = 0x0a;
const BACKGROUND: u8 = 0x0b;
const IMAGE: u8 = 0x0c;
const CUSTOM: u8 = 0x0d;
const GESTURE: u8 = 0x0e;
const EXT: u8 = 0x0f;

impl SpanString {
    /// Appends the encoding of this string to `buf`.
    pub fn encode_tlv(&self, buf: &mut Vec<u8>) {
        let fonts = self.list(SpanType::Font);
        for item in self.span_items() {
            write_item(buf, &item, fonts.covers(item.interval.start));
        }
    }

    /// Encodes this string into a new buffer.
    pub fn to_tlv(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.encode_tlv(&mut buf);
        buf
    }

    /// Decodes a string written by [`encode_tlv`](Self::encode_tlv).
    ///
    /// Decoding stops at the first malformed record, keeping the runs read before it. Touching
    /// runs of equal style become one span; gesture and ext runs always do, since they decode
    /// without callbacks. An image or custom attribute on a run that is not a single placeholder
    /// is dropped.
    pub fn decode_tlv(data: &[u8]) -> Self {
        let mut reader = Reader::new(data);
        let mut string = Self::default();
        while !reader.is_at_end() {
            let pos = reader.pos();
            let Some((content, attributes)) = reader.read_record(ITEM_START, read_item) else {
                warn!("malformed span string record at byte {pos} of {}", data.len());
                break;
            };
            let start = string.text.len();
            string.text.extend(content);
            let range = start..string.text.len();
            for attributes in attributes {
                let kind = attributes.kind();
                match string.validate_span(kind, range.clone()) {
                    Ok(range) => string.list_mut(kind).push_sorted(range, attributes),
                    Err(err) => warn!("dropping decoded {err}"),
                }
            }
        }
        for kind in SpanType::ALL.into_iter().filter(|k| !k.is_placeholder()) {
            let always_merge = matches!(kind, SpanType::Gesture | SpanType::Ext);
            string
                .list_mut(kind)
                .coalesce(|a, b| always_merge || a.is_equal(b));
        }
        string
    }
}

/// `has_font` tells a run under a font span with no properties from an unstyled one.
fn write_item(buf: &mut Vec<u8>, item: &SpanItem, has_font: bool) {
    write_tag(buf, ITEM_START);
    write_tag(buf, CONTENT);
    write_string(buf, &item.content);

    if has_font {
        let unset = Font::new();
        let font = item.font_style.as_ref().map_or(&unset, |group| &group.font);
        write_tag(buf, FONT);
        write_font(buf, font);
    }
    if let Some(group) = &item.font_style {
        if let Some(decoration) = &group.decoration {
            write_tag(buf, DECORATION);
            write_decoration(buf, decoration);
        }
        if let Some(spacing) = group.letter_spacing {
            write_tag(buf, LETTER_SPACING);
            write_dimension(buf, spacing);
        }
        if let Some(shadows) = &group.text_shadows {
            write_tag(buf, TEXT_SHADOWS);
            write_shadows(buf, shadows);
        }
    }
    if let Some(group) = &item.text_line_style {
        if let Some(offset) = group.baseline_offset {
            write_tag(buf, BASELINE_OFFSET);
            write_dimension(buf, offset);
        }
        if let Some(height) = group.line_height {
            write_tag(buf, LINE_HEIGHT);
            write_dimension(buf, height);
        }
        if let Some(paragraph) = &group.paragraph {
            write_tag(buf, PARAGRAPH);
            write_paragraph(buf, paragraph);
        }
    }
    if let Some(background) = &item.background_style {
        write_tag(buf, BACKGROUND);
        write_background(buf, background);
    }
    match &item.placeholder {
        Some(Placeholder::Image(image)) => {
            write_tag(buf, IMAGE);
            write_image(buf, image);
        }
        Some(Placeholder::Custom(_)) => write_tag(buf, CUSTOM),
        None => {}
    }
    if item.gesture.is_some() {
        write_tag(buf, GESTURE);
    }
    if item.ext {
        write_tag(buf, EXT);
    }
    write_tag(buf, ITEM_END);
}

fn write_font(buf: &mut Vec<u8>, font: &Font) {
    if let Some(weight) = font.weight {
        write_tag(buf, 1);
        write_double(buf, f64::from(weight.value()));
    }
    if let Some(size) = font.size {
        write_tag(buf, 2);
        write_dimension(buf, size);
    }
    if let Some(style) = font.style {
        write_tag(buf, 3);
        write_int32(buf, style.to_i32());
    }
    if let Some(families) = &font.families {
        write_tag(buf, 4);
        write_font_families(buf, families);
    }
    if let Some(color) = font.color {
        write_tag(buf, 5);
        write_color(buf, color);
    }
    if let Some(features) = &font.features {
        write_tag(buf, 6);
        write_font_features(buf, features);
    }
    write_tag(buf, FIELD_END);
}

fn write_decoration(buf: &mut Vec<u8>, decoration: &DecorationStyle) {
    write_tag(buf, 1);
    write_count(buf, decoration.types().len());
    for ty in decoration.types() {
        write_int32(buf, ty.to_i32());
    }
    if let Some(color) = decoration.color {
        write_tag(buf, 2);
        write_color(buf, color);
    }
    if let Some(style) = decoration.style {
        write_tag(buf, 3);
        write_int32(buf, style.to_i32());
    }
    if let Some(scale) = decoration.thickness_scale {
        write_tag(buf, 4);
        write_double(buf, scale);
    }
    write_tag(buf, 5);
    write_int32(buf, i32::from(decoration.enable_multi_type));
    write_tag(buf, FIELD_END);
}

fn write_paragraph(buf: &mut Vec<u8>, paragraph: &SpanParagraphStyle) {
    if let Some(align) = paragraph.align {
        write_tag(buf, 1);
        write_int32(buf, align.to_i32());
    }
    if let Some(max_lines) = paragraph.max_lines {
        write_tag(buf, 2);
        write_int32(buf, max_lines.cast_signed());
    }
    if let Some(word_break) = paragraph.word_break {
        write_tag(buf, 3);
        write_int32(buf, word_break.to_i32());
    }
    if let Some(overflow) = paragraph.text_overflow {
        write_tag(buf, 4);
        write_int32(buf, overflow.to_i32());
    }
    if let Some(indent) = paragraph.text_indent {
        write_tag(buf, 5);
        write_dimension(buf, indent);
    }
    if let Some(margin) = &paragraph.leading_margin {
        write_tag(buf, 6);
        write_leading_margin(buf, margin);
    }
    if let Some(strategy) = paragraph.line_break_strategy {
        write_tag(buf, 7);
        write_int32(buf, strategy.to_i32());
    }
    if let Some(spacing) = paragraph.paragraph_spacing {
        write_tag(buf, 8);
        write_dimension(buf, spacing);
    }
    write_tag(buf, FIELD_END);
}

fn write_background(buf: &mut Vec<u8>, background: &TextBackgroundStyle) {
    if let Some(color) = background.color {
        write_tag(buf, 1);
        write_color(buf, color);
    }
    if let Some(radius) = &background.radius {
        write_tag(buf, 2);
        write_border_radius(buf, radius);
    }
    write_tag(buf, FIELD_END);
}

fn write_image(buf: &mut Vec<u8>, image: &ImageSpanOptions) {
    for (field, value) in [(1, &image.src), (2, &image.bundle_name), (3, &image.module_name)] {
        if let Some(value) = value {
            write_tag(buf, field);
            write_string(buf, value);
        }
    }
    if let Some(pixel_map) = &image.pixel_map {
        write_tag(buf, 4);
        write_pixel_map(buf, pixel_map);
    }
    if let Some(attribute) = &image.attribute {
        write_tag(buf, 5);
        write_image_span_attribute(buf, attribute);
    }
    write_tag(buf, FIELD_END);
}

fn write_count(buf: &mut Vec<u8>, count: usize) {
    write_int32(buf, i32::try_from(count).unwrap_or(i32::MAX));
}

/// Consume and return the tag at the cursor.
fn next_tag(reader: &mut Reader<'_>) -> Option<u8> {
    let tag = reader.peek_tag()?;
    reader.eat_tag(tag);
    Some(tag)
}

type Decoded = (Vec<u16>, SmallVec<[SpanAttributes; 4]>);

fn read_item(reader: &mut Reader<'_>) -> Option<Decoded> {
    let mut content = Vec::new();
    let mut attributes = SmallVec::new();
    loop {
        let attribute = match next_tag(reader)? {
            ITEM_END => return Some((content, attributes)),
            CONTENT => {
                content = reader.try_read_string()?.encode_utf16().collect();
                continue;
            }
            FONT => SpanAttributes::Font(read_font(reader)?),
            DECORATION => SpanAttributes::Decoration(read_decoration(reader)?),
            LETTER_SPACING => SpanAttributes::LetterSpacing(reader.try_read_dimension()?),
            TEXT_SHADOWS => SpanAttributes::TextShadow(reader.try_read_shadows()?),
            BASELINE_OFFSET => SpanAttributes::BaselineOffset(reader.try_read_dimension()?),
            LINE_HEIGHT => SpanAttributes::LineHeight(reader.try_read_dimension()?),
            PARAGRAPH => SpanAttributes::ParagraphStyle(read_paragraph(reader)?),
            BACKGROUND => SpanAttributes::BackgroundColor(read_background(reader)?),
            IMAGE => SpanAttributes::Image(read_image(reader)?),
            CUSTOM => SpanAttributes::Custom(CustomSpanOptions::default()),
            GESTURE => SpanAttributes::Gesture(GestureStyle::default()),
            EXT => SpanAttributes::Ext,
            _ => return None,
        };
        attributes.push(attribute);
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Weights are stored as f32; the wire carries them widened to f64."
)]
fn weight_from_wire(value: f64) -> FontWeight {
    FontWeight::new(value as f32)
}

fn read_font(reader: &mut Reader<'_>) -> Option<Font> {
    let mut font = Font::new();
    loop {
        match next_tag(reader)? {
            FIELD_END => return Some(font),
            1 => font.weight = Some(weight_from_wire(reader.try_read_double()?)),
            2 => font.size = Some(reader.try_read_dimension()?),
            3 => font.style = Some(FontStyle::from_i32(reader.try_read_int32()?)?),
            4 => font.families = Some(reader.try_read_font_families()?),
            5 => font.color = Some(reader.try_read_color()?),
            6 => font.features = Some(reader.try_read_font_features()?),
            _ => return None,
        }
    }
}

fn read_decoration(reader: &mut Reader<'_>) -> Option<DecorationStyle> {
    let mut decoration = DecorationStyle::default();
    loop {
        match next_tag(reader)? {
            FIELD_END => return Some(decoration),
            1 => {
                let count = usize::try_from(reader.try_read_int32()?).ok()?;
                for _ in 0..count {
                    let ty = TextDecoration::from_i32(reader.try_read_int32()?)?;
                    decoration = decoration.with_type(ty);
                }
            }
            2 => decoration.color = Some(reader.try_read_color()?),
            3 => {
                let code = reader.try_read_int32()?;
                decoration.style = Some(TextDecorationStyle::from_i32(code)?);
            }
            4 => decoration.thickness_scale = Some(reader.try_read_double()?),
            5 => decoration.enable_multi_type = reader.try_read_int32()? != 0,
            _ => return None,
        }
    }
}

fn read_paragraph(reader: &mut Reader<'_>) -> Option<SpanParagraphStyle> {
    let mut paragraph = SpanParagraphStyle::new();
    loop {
        match next_tag(reader)? {
            FIELD_END => return Some(paragraph),
            1 => paragraph.align = Some(TextAlign::from_i32(reader.try_read_int32()?)?),
            2 => paragraph.max_lines = Some(reader.try_read_int32()?.cast_unsigned()),
            3 => paragraph.word_break = Some(WordBreak::from_i32(reader.try_read_int32()?)?),
            4 => {
                let code = reader.try_read_int32()?;
                paragraph.text_overflow = Some(TextOverflow::from_i32(code)?);
            }
            5 => paragraph.text_indent = Some(reader.try_read_dimension()?),
            6 => paragraph.leading_margin = Some(reader.try_read_leading_margin()?),
            7 => {
                let code = reader.try_read_int32()?;
                paragraph.line_break_strategy = Some(LineBreakStrategy::from_i32(code)?);
            }
            8 => paragraph.paragraph_spacing = Some(reader.try_read_dimension()?),
            _ => return None,
        }
    }
}

fn read_background(reader: &mut Reader<'_>) -> Option<TextBackgroundStyle> {
    let mut background = TextBackgroundStyle::default();
    loop {
        match next_tag(reader)? {
            FIELD_END => return Some(background),
            1 => background.color = Some(reader.try_read_color()?),
            2 => background.radius = Some(reader.try_read_border_radius()?),
            _ => return None,
        }
    }
}

fn read_image(reader: &mut Reader<'_>) -> Option<ImageSpanOptions> {
    let mut image = ImageSpanOptions::default();
    loop {
        match next_tag(reader)? {
            FIELD_END => return Some(image),
            1 => image.src = Some(reader.try_read_string()?),
            2 => image.bundle_name = Some(reader.try_read_string()?),
            3 => image.module_name = Some(reader.try_read_string()?),
            4 => image.pixel_map = Some(reader.try_read_pixel_map()?),
            5 => image.attribute = Some(reader.try_read_image_span_attribute()?),
            _ => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CONTENT, FIELD_END, IMAGE, ITEM_END, ITEM_START};
    use crate::style::{DecorationStyle, Font, GestureStyle, ImageSpanOptions};
    use crate::{MutableSpanString, Span, SpanString, SpanType};
    use alloc::vec::Vec;
    use core::ops::Range;
    use text_primitives::{Color, Dimension, FontWeight, TextDecoration};

    fn ranges(string: &SpanString, kind: SpanType) -> Vec<Range<usize>> {
        string.spans_of_kind(kind).iter().map(Span::range).collect()
    }

    #[test]
    fn plain_text_is_one_record() {
        let bytes = SpanString::new("ab").to_tlv();
        assert_eq!(
            bytes,
            [ITEM_START, CONTENT, 0x20, 2, b'a', b'b', ITEM_END]
        );
        assert!(SpanString::new("").to_tlv().is_empty());
    }

    #[test]
    fn runs_split_by_styles_merge_back() {
        let mut string = MutableSpanString::new("0123456789");
        string.add_span(Span::font(Font::new().with_weight(FontWeight::BOLD), 0..6));
        string.add_span(Span::decoration(
            DecorationStyle::new(TextDecoration::Underline).with_color(Color::RED),
            3..9,
        ));
        string.add_span(Span::letter_spacing(Dimension::vp(2.0), 5..10));
        let decoded = SpanString::decode_tlv(&string.to_tlv());
        assert!(decoded.is_equal_to(&string));
        assert_eq!(decoded.spans_of_kind(SpanType::Font)[0].range(), 0..6);
    }

    #[test]
    fn callbacks_and_pixels_are_dropped() {
        let mut string = MutableSpanString::from(SpanString::from_image(
            ImageSpanOptions::from_src("a.png"),
        ));
        string.insert_string(0, "xy");
        string.add_span(Span::gesture(GestureStyle::new().with_on_click(|_| {}), 0..2));
        let decoded = SpanString::decode_tlv(&string.to_tlv());
        assert_eq!(decoded.text(), "xy ");
        let gesture = decoded.spans_of_kind(SpanType::Gesture);
        assert_eq!(gesture.len(), 1);
        assert_eq!(gesture[0].range(), 0..2);
        let crate::SpanAttributes::Gesture(style) = gesture[0].attributes() else {
            panic!("expected a gesture span");
        };
        assert!(style.is_empty());
        assert_eq!(decoded.spans_of_kind(SpanType::Image)[0].range(), 2..3);
    }

    #[test]
    fn malformed_input_keeps_complete_runs() {
        let mut bytes = SpanString::new("ab").to_tlv();
        bytes.extend_from_slice(&[ITEM_START, CONTENT, 0x20, 9, b'c']);
        let decoded = SpanString::decode_tlv(&bytes);
        assert_eq!(decoded.text(), "ab");
        assert!(SpanString::decode_tlv(&[0xff, 0x00]).is_empty());
        assert!(SpanString::decode_tlv(&[ITEM_START; 3]).is_empty());
    }

    #[test]
    fn fonts_without_properties_survive() {
        let mut string = MutableSpanString::new("0123456");
        string.add_span(Span::font(Font::new(), 1..4));
        string.add_span(Span::letter_spacing(Dimension::vp(1.0), 3..6));
        let decoded = SpanString::decode_tlv(&string.to_tlv());
        assert!(decoded.is_equal_to(&string));
        assert_eq!(ranges(&decoded, SpanType::Font), [1..4]);
        assert_eq!(ranges(&decoded, SpanType::LetterSpacing), [3..6]);
    }

    #[test]
    fn gesture_and_ext_runs_decode_whole() {
        let mut string = MutableSpanString::new("0123456789");
        string.add_span(Span::gesture(GestureStyle::new().with_on_click(|_| {}), 0..8));
        string.add_span(Span::font(Font::new().with_weight(FontWeight::BOLD), 2..4));
        string.add_span(Span::ext(5..9));
        assert_eq!(string.span_items().len(), 6);
        let decoded = SpanString::decode_tlv(&string.to_tlv());
        assert_eq!(ranges(&decoded, SpanType::Gesture), [0..8]);
        assert_eq!(ranges(&decoded, SpanType::Ext), [5..9]);
        assert_eq!(ranges(&decoded, SpanType::Font), [2..4]);
    }

    #[test]
    fn images_on_ordinary_text_are_dropped() {
        let bytes = [
            ITEM_START, CONTENT, 0x20, 2, b'a', b'b', IMAGE, FIELD_END, ITEM_END,
        ];
        let decoded = SpanString::decode_tlv(&bytes);
        assert_eq!(decoded.text(), "ab");
        assert!(decoded.spans_of_kind(SpanType::Image).is_empty());
    }
}
