// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for span strings.
//!
//! Random edit sequences are applied to a [`MutableSpanString`] and the structural invariants
//! are checked after every step.

use proptest::prelude::*;

use span_string::style::{DecorationStyle, Font, ImageSpanOptions, TextBackgroundStyle};
use span_string::{MutableSpanString, Span, SpanString, SpanType};
use text_primitives::{Color, Dimension, TextDecoration};

const COLORS: [Color; 3] = [Color::RED, Color::GREEN, Color::BLUE];
const DECORATIONS: [TextDecoration; 3] = [
    TextDecoration::Underline,
    TextDecoration::Overline,
    TextDecoration::LineThrough,
];
const REMOVABLE: [SpanType; 4] = [
    SpanType::Font,
    SpanType::BackgroundColor,
    SpanType::Decoration,
    SpanType::Image,
];

#[derive(Clone, Debug)]
enum Edit {
    Insert(usize, String),
    Remove(usize, usize),
    Replace(usize, usize, String),
    Font(usize, usize, usize),
    PlainFont(usize, usize),
    Background(usize, usize, usize),
    Decoration(usize, usize, usize, bool),
    LineHeight(usize, usize, u8),
    RemoveSpan(usize, usize, usize),
    RemoveSpans(usize, usize),
    InsertStyled(usize, String, usize),
    InsertImage(usize),
    ImageOverText(usize, usize),
}

fn text() -> impl Strategy<Value = String> {
    "[a-z0-9 ]{0,16}"
}

fn styling_edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0..20_usize, 1..8_usize, 0..3_usize).prop_map(|(s, n, c)| Edit::Font(s, n, c)),
        (0..20_usize, 1..8_usize).prop_map(|(s, n)| Edit::PlainFont(s, n)),
        (0..20_usize, 1..8_usize, 0..3_usize).prop_map(|(s, n, c)| Edit::Background(s, n, c)),
        (0..20_usize, 1..8_usize, 0..3_usize, any::<bool>())
            .prop_map(|(s, n, d, multi)| Edit::Decoration(s, n, d, multi)),
        (0..20_usize, 1..8_usize, 1..5_u8).prop_map(|(s, n, h)| Edit::LineHeight(s, n, h)),
    ]
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        3 => styling_edit(),
        2 => (0..24_usize, "[a-z]{0,4}").prop_map(|(p, s)| Edit::Insert(p, s)),
        2 => (0..24_usize, 0..6_usize).prop_map(|(p, n)| Edit::Remove(p, n)),
        1 => (0..24_usize, 0..6_usize, "[a-z]{0,4}").prop_map(|(p, n, s)| Edit::Replace(p, n, s)),
        1 => (0..24_usize, 0..8_usize, 0..4_usize).prop_map(|(s, n, k)| Edit::RemoveSpan(s, n, k)),
        1 => (0..24_usize, 0..4_usize).prop_map(|(s, n)| Edit::RemoveSpans(s, n)),
        1 => (0..24_usize, "[a-z]{1,4}", 0..3_usize)
            .prop_map(|(p, s, c)| Edit::InsertStyled(p, s, c)),
        1 => (0..24_usize).prop_map(Edit::InsertImage),
        1 => (0..24_usize, 0..4_usize).prop_map(|(s, n)| Edit::ImageOverText(s, n)),
    ]
}

fn apply(string: &mut MutableSpanString, edit: &Edit) {
    match edit {
        Edit::Insert(pos, text) => string.insert_string(*pos, text),
        Edit::Remove(pos, n) => string.remove_string(*pos, *n),
        Edit::Replace(pos, n, text) => string.replace_string(*pos, *n, text),
        Edit::Font(s, n, c) => {
            string.add_span(Span::font(Font::new().with_color(COLORS[*c]), *s..s + n));
        }
        Edit::PlainFont(s, n) => string.add_span(Span::font(Font::new(), *s..s + n)),
        Edit::Background(s, n, c) => {
            string.add_span(Span::background(TextBackgroundStyle::new(COLORS[*c]), *s..s + n));
        }
        Edit::Decoration(s, n, d, multi) => {
            let decoration = DecorationStyle::new(DECORATIONS[*d]).with_multi_type(*multi);
            string.add_span(Span::decoration(decoration, *s..s + n));
        }
        Edit::LineHeight(s, n, h) => {
            string.add_span(Span::line_height(Dimension::px(f64::from(*h)), *s..s + n));
        }
        Edit::RemoveSpan(s, n, k) => string.remove_span(*s, *n, REMOVABLE[*k]),
        Edit::RemoveSpans(s, n) => string.remove_spans(*s, *n),
        Edit::InsertStyled(pos, text, c) => {
            let mut styled = MutableSpanString::new(text);
            styled.add_span(Span::font(Font::new().with_color(COLORS[*c]), 0..styled.len()));
            string.insert_span_string(*pos, &styled);
        }
        Edit::InsertImage(pos) => {
            let image = SpanString::from_image(ImageSpanOptions::from_src("icon.png"));
            string.insert_span_string(*pos, &image);
        }
        Edit::ImageOverText(s, n) => {
            string.add_span(Span::image(ImageSpanOptions::from_src("icon.png"), *s..s + n));
        }
    }
}

fn check_invariants(string: &SpanString) -> Result<(), TestCaseError> {
    let len = string.len();
    for (kind, spans) in string.spans_map() {
        let mut end = 0;
        let mut start = 0;
        for span in &spans {
            let range = span.range();
            prop_assert!(range.end <= len, "{span} past len {len}");
            prop_assert!(range.start >= start, "{kind} spans out of order");
            start = range.start;
            if range.is_empty() {
                continue;
            }
            prop_assert!(range.start >= end, "{kind} spans overlap at {range:?}");
            end = range.end;
            if kind.is_placeholder() {
                prop_assert_eq!(range.len(), 1);
                prop_assert_eq!(string.as_utf16()[range.start], SpanString::PLACEHOLDER);
            }
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn edits_keep_spans_valid(initial in text(), edits in prop::collection::vec(edit(), 0..24)) {
        let mut string = MutableSpanString::new(&initial);
        for edit in &edits {
            apply(&mut string, edit);
            check_invariants(&string)?;
        }
    }

    #[test]
    fn items_tile_the_text(initial in text(), edits in prop::collection::vec(edit(), 0..16)) {
        let mut string = MutableSpanString::new(&initial);
        for edit in &edits {
            apply(&mut string, edit);
        }
        let items = string.span_items();
        let mut cursor = 0;
        let mut content = String::new();
        for item in &items {
            prop_assert_eq!(item.interval.start, cursor);
            prop_assert!(item.interval.end > item.interval.start);
            cursor = item.interval.end;
            content.push_str(&item.content);
        }
        prop_assert_eq!(cursor, string.len());
        prop_assert_eq!(content, string.text());
    }

    #[test]
    fn full_slice_is_equal(initial in text(), edits in prop::collection::vec(edit(), 0..16)) {
        let mut string = MutableSpanString::new(&initial);
        for edit in &edits {
            apply(&mut string, edit);
        }
        let whole = string.sub_span_string(0, string.len());
        prop_assert!(whole.is_equal_to(&string));
    }

    #[test]
    fn text_lengths_add_up(initial in text(), pos in 0..24_usize, inserted in "[a-z]{0,6}", removed in 0..8_usize) {
        let mut string = MutableSpanString::new(&initial);
        let len = string.len();
        string.insert_string(pos, &inserted);
        let grown = if pos <= len { len + inserted.len() } else { len };
        prop_assert_eq!(string.len(), grown);

        string.remove_string(pos, removed);
        let shrunk = if pos <= grown { grown - removed.min(grown - pos) } else { grown };
        prop_assert_eq!(string.len(), shrunk);
    }

    #[test]
    fn no_op_edits_change_nothing(initial in text(), edits in prop::collection::vec(styling_edit(), 0..8), pos in 0..24_usize) {
        let mut string = MutableSpanString::new(&initial);
        for edit in &edits {
            apply(&mut string, edit);
        }
        let before = string.clone();
        let len = string.len();
        string.insert_string(pos, "");
        string.remove_string(pos, 0);
        string.remove_string(len + 1, 3);
        string.insert_string(len + 1, "x");
        string.add_span(Span::font(Font::new(), 0..len + 1));
        string.insert_span_string(pos, &SpanString::new(""));
        prop_assert!(string.is_equal_to(&before));
        prop_assert_eq!(string.spans_map().len(), before.spans_map().len());
    }

    #[test]
    fn tlv_round_trip(initial in text(), edits in prop::collection::vec(styling_edit(), 0..12)) {
        let mut string = MutableSpanString::new(&initial);
        for edit in &edits {
            apply(&mut string, edit);
        }
        let decoded = SpanString::decode_tlv(&string.to_tlv());
        prop_assert!(decoded.is_equal_to(&string), "{decoded:?}");

        let ours = string.span_items();
        let theirs = decoded.span_items();
        prop_assert_eq!(ours.len(), theirs.len());
        for (a, b) in ours.iter().zip(&theirs) {
            prop_assert_eq!(&a.interval, &b.interval);
            prop_assert_eq!(&a.content, &b.content);
            prop_assert_eq!(&a.font_style, &b.font_style);
            prop_assert_eq!(&a.text_line_style, &b.text_line_style);
            prop_assert_eq!(a.background_style, b.background_style);
        }
    }
}
