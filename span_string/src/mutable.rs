// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::{Deref, Range};

use log::{debug, trace};
use span_index::Affinity;

use crate::{Error, Span, SpanAttributes, SpanString, SpanType};

/// A [`SpanString`] that can be edited in place.
///
/// Text edits keep every span aligned with the text it covers. Span edits resolve overlaps so
/// that spans of one kind never overlap. Invalid positions make an edit a no-op; nothing here
/// panics on bad input.
///
/// ## Inserted text
///
/// Text inserted with [`insert_string`](Self::insert_string) takes the style of the text
/// before it when there is any, and otherwise the style of the text after it. Image and
/// custom placeholders never extend over inserted text.
///
/// Text inserted with [`insert_span_string`](Self::insert_span_string) keeps exactly its own
/// spans, splitting any span it lands inside of.
#[derive(Clone, Debug, Default)]
pub struct MutableSpanString(SpanString);

impl MutableSpanString {
    /// Creates an unstyled mutable span string.
    pub fn new(text: &str) -> Self {
        Self(SpanString::new(text))
    }

    /// A read-only view.
    #[inline]
    pub fn as_span_string(&self) -> &SpanString {
        &self.0
    }

    /// Consumes the wrapper, returning the span string.
    #[inline]
    pub fn into_span_string(self) -> SpanString {
        self.0
    }

    /// Inserts `text` at `pos`.
    pub fn insert_string(&mut self, pos: usize, text: &str) {
        let units: Vec<u16> = text.encode_utf16().collect();
        self.insert_utf16(pos, &units);
    }

    /// Inserts UTF-16 `units` at `pos`.
    pub fn insert_utf16(&mut self, pos: usize, units: &[u16]) {
        let len = self.0.len();
        if units.is_empty() {
            debug!("ignoring empty insert at {pos}");
            return;
        }
        if pos > len {
            debug!("ignoring insert at {pos} past len {len}");
            return;
        }
        let n = units.len();
        let front = pos == len
            || SpanType::ALL
                .into_iter()
                .filter(|kind| !kind.is_placeholder())
                .any(|kind| pos > 0 && self.0.list(kind).covers(pos - 1));
        let grow = if front {
            Affinity::Upstream
        } else {
            Affinity::Downstream
        };
        for kind in SpanType::ALL {
            let grow = (!kind.is_placeholder()).then_some(grow);
            self.0.list_mut(kind).insert_gap(pos, n, grow);
        }
        self.0.text.splice(pos..pos, units.iter().copied());
        trace!("inserted {n} units at {pos}, len {}", self.0.len());
    }

    /// Removes `length` code units starting at `pos`.
    ///
    /// `length` is clamped to the end of the text.
    pub fn remove_string(&mut self, pos: usize, length: usize) {
        let len = self.0.len();
        if pos > len {
            debug!("ignoring removal at {pos} past len {len}");
            return;
        }
        let n = length.min(len - pos);
        if n == 0 {
            return;
        }
        let range = pos..pos + n;
        for list in &mut self.0.spans {
            list.excise(range.clone());
        }
        self.0.text.drain(range);
        trace!("removed {n} units at {pos}, len {}", self.0.len());
    }

    /// Replaces `length` code units starting at `pos` with `text`.
    pub fn replace_string(&mut self, pos: usize, length: usize, text: &str) {
        if pos > self.0.len() {
            debug!("ignoring replacement at {pos} past len {}", self.0.len());
            return;
        }
        self.remove_string(pos, length);
        self.insert_string(pos, text);
    }

    /// Adds a span, replacing same-kind spans where they overlap.
    ///
    /// Decoration spans that allow multiple types combine with the decorations they overlap
    /// instead. Afterwards, touching spans of the kind with equal attributes are merged.
    ///
    /// Image and custom spans only attach to an existing placeholder code unit; use
    /// [`insert_span_string`](Self::insert_span_string) with
    /// [`SpanString::from_image`] to add a new one.
    pub fn try_add_span(&mut self, span: Span) -> Result<(), Error> {
        let kind = span.kind();
        let range = self.0.validate_span(kind, span.range())?;
        let attributes = span.into_attributes();
        let combine = matches!(
            &attributes,
            SpanAttributes::Decoration(decoration) if decoration.enable_multi_type
        );
        let list = self.0.list_mut(kind);
        if combine {
            list.overlay_with(range.clone(), attributes, SpanAttributes::merge_decoration);
        } else {
            list.overlay(range.clone(), attributes);
        }
        if !kind.is_placeholder() {
            list.coalesce(SpanAttributes::is_equal);
        }
        trace!("added {kind} span {range:?}");
        Ok(())
    }

    /// Adds a span like [`try_add_span`](Self::try_add_span), ignoring invalid ranges.
    pub fn add_span(&mut self, span: Span) {
        if let Err(err) = self.try_add_span(span) {
            debug!("ignoring {err}");
        }
    }

    /// Removes spans of `kind` from `start..start + length`.
    ///
    /// Spans partly inside the range keep their parts outside it. Removing an image or custom
    /// span also removes its placeholder character.
    pub fn remove_span(&mut self, start: usize, length: usize, kind: SpanType) {
        let Some(range) = self.0.checked_range(start, length) else {
            debug!("ignoring {kind} span removal {start}+{length}");
            return;
        };
        if kind.is_placeholder() {
            let owned = overlapping(self.0.list(kind).ranges(), &range);
            for placeholder in owned.into_iter().rev() {
                self.remove_string(placeholder.start, placeholder.len());
            }
        } else {
            self.0.list_mut(kind).cut(range);
        }
    }

    /// Removes spans of every kind from `start..start + length`.
    pub fn remove_spans(&mut self, start: usize, length: usize) {
        let Some(range) = self.0.checked_range(start, length) else {
            debug!("ignoring span removal {start}+{length}");
            return;
        };
        for kind in SpanType::ALL.into_iter().filter(|k| !k.is_placeholder()) {
            self.0.list_mut(kind).cut(range.clone());
        }
        let mut owned = Vec::new();
        for kind in SpanType::ALL.into_iter().filter(|k| k.is_placeholder()) {
            owned.extend(overlapping(self.0.list(kind).ranges(), &range));
        }
        owned.sort_by_key(|r| r.start);
        for placeholder in owned.into_iter().rev() {
            self.remove_string(placeholder.start, placeholder.len());
        }
    }

    /// Removes every span, leaving the text.
    pub fn clear_all_spans(&mut self) {
        for list in &mut self.0.spans {
            list.clear();
        }
    }

    /// Replaces spans of `span`'s kind over `start..start + length` with `span`.
    ///
    /// The range of `span` itself is ignored. Placeholder characters are kept. Nothing changes
    /// if `span` could not be added over the range.
    pub fn replace_span(&mut self, start: usize, length: usize, span: Span) {
        let kind = span.kind();
        let Some(end) = start.checked_add(length) else {
            debug!("ignoring {kind} span replacement {start}+{length}");
            return;
        };
        let range = match self.0.validate_span(kind, start..end) {
            Ok(range) => range,
            Err(err) => {
                debug!("ignoring replacement: {err}");
                return;
            }
        };
        self.0.list_mut(kind).cut(range.clone());
        if let Err(err) = self.try_add_span(Span::new(span.into_attributes(), range)) {
            debug!("ignoring replacement: {err}");
        }
    }

    /// Inserts `other`, text and spans, at `pos`.
    ///
    /// A span of `self` containing `pos` is split around the inserted text; the inserted spans
    /// are not merged with their neighbors.
    pub fn insert_span_string(&mut self, pos: usize, other: &SpanString) {
        let len = self.0.len();
        if other.is_empty() {
            debug!("ignoring empty span string insert at {pos}");
            return;
        }
        if pos > len {
            debug!("ignoring span string insert at {pos} past len {len}");
            return;
        }
        let n = other.len();
        for (list, incoming) in self.0.spans.iter_mut().zip(&other.spans) {
            list.split_at(pos);
            list.insert_gap(pos, n, None);
            for (range, attributes) in incoming {
                list.push_sorted(range.start + pos..range.end + pos, attributes.clone());
            }
        }
        self.0.text.splice(pos..pos, other.text.iter().copied());
        trace!("inserted span string of {n} units at {pos}, len {}", self.0.len());
    }

    /// Replaces `length` code units starting at `pos` with `other`.
    pub fn replace_span_string(&mut self, pos: usize, length: usize, other: &SpanString) {
        if pos > self.0.len() {
            debug!("ignoring span string replacement at {pos} past len {}", self.0.len());
            return;
        }
        self.remove_string(pos, length);
        self.insert_span_string(pos, other);
    }

    /// Appends `other`. Spans ending at the old end do not grow.
    pub fn append_span_string(&mut self, other: &SpanString) {
        self.insert_span_string(self.0.len(), other);
    }

    /// Appends a copy of this string to itself.
    pub fn append_self(&mut self) {
        let copy = self.0.clone();
        self.append_span_string(&copy);
    }
}

fn overlapping(ranges: impl Iterator<Item = Range<usize>>, range: &Range<usize>) -> Vec<Range<usize>> {
    ranges
        .filter(|r| r.start < range.end && range.start < r.end)
        .collect()
}

impl Deref for MutableSpanString {
    type Target = SpanString;

    fn deref(&self) -> &SpanString {
        &self.0
    }
}

impl From<SpanString> for MutableSpanString {
    fn from(value: SpanString) -> Self {
        Self(value)
    }
}

impl From<MutableSpanString> for SpanString {
    fn from(value: MutableSpanString) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::MutableSpanString;
    use crate::style::{
        CustomSpanOptions, DecorationStyle, Font, ImageSpanOptions, TextBackgroundStyle,
    };
    use crate::{ErrorKind, Span, SpanString, SpanType};
    use alloc::vec::Vec;
    use core::ops::Range;
    use text_primitives::{Color, TextDecoration};

    fn ranges(string: &SpanString, kind: SpanType) -> Vec<Range<usize>> {
        string.spans_of_kind(kind).iter().map(Span::range).collect()
    }

    #[test]
    fn insert_inside_a_run_extends_it() {
        let mut string = MutableSpanString::new("0123456789");
        string.add_span(Span::font(Font::new().with_color(Color::RED), 2..5));
        string.insert_string(3, "ab");
        assert_eq!(ranges(&string, SpanType::Font), [2..7]);
        string.insert_string(7, "c");
        assert_eq!(ranges(&string, SpanType::Font), [2..8]);
        // Nothing styled before it, so the text joins the run after it.
        string.insert_string(2, "d");
        assert_eq!(ranges(&string, SpanType::Font), [2..9]);
    }

    #[test]
    fn insert_at_start_takes_following_style() {
        let mut string = MutableSpanString::new("abc");
        string.add_span(Span::font(Font::new().with_color(Color::RED), 0..2));
        string.insert_string(0, "xy");
        assert_eq!(ranges(&string, SpanType::Font), [0..4]);
    }

    #[test]
    fn remove_drops_consumed_spans() {
        let mut string = MutableSpanString::new("AABBCC");
        string.add_span(Span::font(Font::new().with_color(Color::RED), 0..2));
        string.add_span(Span::font(Font::new().with_color(Color::BLUE), 2..4));
        string.add_span(Span::font(Font::new().with_color(Color::GREEN), 4..6));
        string.remove_string(1, 4);
        assert_eq!(string.text(), "AC");
        assert_eq!(ranges(&string, SpanType::Font), [0..1, 1..2]);
        string.remove_string(1, 10);
        assert_eq!(string.text(), "A");
        string.remove_string(5, 1);
        assert_eq!(string.text(), "A");
    }

    #[test]
    fn equal_neighbors_merge() {
        let mut string = MutableSpanString::new("0123456789");
        let red = Font::new().with_color(Color::RED);
        string.add_span(Span::font(red.clone(), 0..3));
        string.add_span(Span::font(red, 3..6));
        assert_eq!(ranges(&string, SpanType::Font), [0..6]);
    }

    #[test]
    fn decorations_combine_where_they_overlap() {
        let mut string = MutableSpanString::new("0123456789");
        string.add_span(Span::decoration(DecorationStyle::new(TextDecoration::Underline), 0..6));
        string.add_span(Span::decoration(
            DecorationStyle::new(TextDecoration::LineThrough),
            4..8,
        ));
        assert_eq!(ranges(&string, SpanType::Decoration), [0..4, 4..6, 6..8]);
        let middle = string.span(4, 2, SpanType::Decoration).unwrap();
        let crate::SpanAttributes::Decoration(decoration) = middle.attributes() else {
            panic!("expected a decoration span");
        };
        assert_eq!(
            decoration.types(),
            [TextDecoration::LineThrough, TextDecoration::Underline]
        );

        string.add_span(Span::decoration(
            DecorationStyle::new(TextDecoration::Overline).with_multi_type(false),
            0..8,
        ));
        assert_eq!(ranges(&string, SpanType::Decoration), [0..8]);
    }

    #[test]
    #[expect(
        clippy::reversed_empty_ranges,
        reason = "We want an invalid range for testing."
    )]
    fn try_add_span_reports_bad_ranges() {
        let mut string = MutableSpanString::new("a😀");
        let background = TextBackgroundStyle::new(Color::GRAY);
        let err = string
            .try_add_span(Span::background(background, 0..2))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SplitsSurrogatePair);
        assert_eq!(err.span_type(), SpanType::BackgroundColor);
        let err = string
            .try_add_span(Span::background(background, 0..4))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        assert_eq!(err.text_len(), 3);
        let err = string
            .try_add_span(Span::background(background, 3..1))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Reversed);
        assert!(string.try_add_span(Span::background(background, 0..3)).is_ok());
    }

    #[test]
    fn images_only_attach_to_placeholders() {
        let icon = || ImageSpanOptions::from_src("icon.png");
        let mut string = MutableSpanString::new("abcdef");
        for range in [0..3, 0..1, 2..2] {
            let err = string.try_add_span(Span::image(icon(), range)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::NotOnPlaceholder);
        }
        string.add_span(Span::image(icon(), 0..3));
        assert!(string.spans_of_kind(SpanType::Image).is_empty());

        // Removing image spans never takes ordinary text with it.
        string.remove_span(0, 3, SpanType::Image);
        string.remove_spans(0, 6);
        assert_eq!(string.text(), "abcdef");

        // A plain space is a placeholder once an image span is attached to it.
        string.insert_string(3, " ");
        assert!(string.try_add_span(Span::image(icon(), 3..4)).is_ok());
        let err = string
            .try_add_span(Span::custom(CustomSpanOptions::new(), 3..4))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PlaceholderTaken);
        string.remove_spans(0, 7);
        assert_eq!(string.text(), "abcdef");
    }

    #[test]
    fn rejected_replacements_keep_the_old_span() {
        let mut string = MutableSpanString::from(SpanString::from_image(ImageSpanOptions::from_src(
            "a.png",
        )));
        string.insert_string(0, "xy");
        string.replace_span(0, 3, Span::image(ImageSpanOptions::from_src("b.png"), 0..0));
        assert_eq!(ranges(&string, SpanType::Image), [2..3]);
        string.replace_span(2, usize::MAX, Span::image(ImageSpanOptions::from_src("b.png"), 0..0));
        assert_eq!(ranges(&string, SpanType::Image), [2..3]);
        string.replace_span(2, 1, Span::image(ImageSpanOptions::from_src("b.png"), 0..0));
        let images = string.spans_of_kind(SpanType::Image);
        assert!(images[0].is_attributes_equal(&Span::image(
            ImageSpanOptions::from_src("b.png"),
            0..1
        )));
    }

    #[test]
    fn insert_span_string_splits_the_host_span() {
        let mut string = MutableSpanString::new("01234567");
        string.add_span(Span::background(TextBackgroundStyle::new(Color::RED), 0..8));
        string.insert_span_string(2, &SpanString::new("abc"));
        assert_eq!(string.text(), "01abc234567");
        assert_eq!(ranges(&string, SpanType::BackgroundColor), [0..2, 5..11]);
    }
}
