// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use log::debug;
use span_index::{SegmentsWorkspace, SpanList, TextStorage};

use crate::style::{CustomSpanOptions, ImageSpanOptions};
use crate::{Error, ErrorKind, Span, SpanAttributes, SpanItem, SpanOperation, SpanType};

/// UTF-16 text with a list of non-overlapping spans per [`SpanType`].
///
/// `SpanString` is the read side of the model: it answers queries and can be sliced and
/// compared. Edits go through [`MutableSpanString`](crate::MutableSpanString).
#[derive(Clone, Debug, Default)]
pub struct SpanString {
    pub(crate) text: Vec<u16>,
    pub(crate) spans: [SpanList<SpanAttributes>; SpanType::COUNT],
}

impl SpanString {
    /// The code unit occupied by an image or custom placeholder (U+0020).
    pub const PLACEHOLDER: u16 = 0x20;

    /// Creates an unstyled span string.
    pub fn new(text: &str) -> Self {
        Self::from_utf16(text.encode_utf16().collect::<Vec<_>>())
    }

    /// Creates an unstyled span string from UTF-16 code units.
    pub fn from_utf16(text: impl Into<Vec<u16>>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    fn from_placeholder(attributes: SpanAttributes) -> Self {
        let mut string = Self::from_utf16([Self::PLACEHOLDER]);
        string.spans[attributes.kind().index()].push_sorted(0..1, attributes);
        string
    }

    /// Creates a one-character string holding an inline image.
    pub fn from_image(options: ImageSpanOptions) -> Self {
        Self::from_placeholder(SpanAttributes::Image(options))
    }

    /// Creates a one-character string holding a custom-drawn placeholder.
    pub fn from_custom(options: CustomSpanOptions) -> Self {
        Self::from_placeholder(SpanAttributes::Custom(options))
    }

    /// The text, with unpaired surrogates replaced.
    pub fn text(&self) -> String {
        String::from_utf16_lossy(&self.text)
    }

    /// The text as UTF-16 code units.
    #[inline]
    pub fn as_utf16(&self) -> &[u16] {
        &self.text
    }

    /// The length in UTF-16 code units.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    #[inline]
    pub(crate) fn list(&self, kind: SpanType) -> &SpanList<SpanAttributes> {
        &self.spans[kind.index()]
    }

    #[inline]
    pub(crate) fn list_mut(&mut self, kind: SpanType) -> &mut SpanList<SpanAttributes> {
        &mut self.spans[kind.index()]
    }

    /// `start..start + length`, if it lies within the text.
    pub(crate) fn checked_range(&self, start: usize, length: usize) -> Option<Range<usize>> {
        let end = start.checked_add(length)?;
        (end <= self.len()).then_some(start..end)
    }

    /// Checks that a span of `kind` may cover `range`.
    ///
    /// Both ends must lie on character boundaries. An image or custom span must cover exactly
    /// one [`PLACEHOLDER`](Self::PLACEHOLDER) unit that the other placeholder kind does not
    /// already hold.
    pub(crate) fn validate_span(
        &self,
        kind: SpanType,
        range: Range<usize>,
    ) -> Result<Range<usize>, Error> {
        let len = self.len();
        let fail = |err| Err(Error::new(err, kind, range.clone(), len));
        if range.start > range.end {
            return fail(ErrorKind::Reversed);
        }
        if range.end > len {
            return fail(ErrorKind::OutOfBounds);
        }
        if !self.text.is_char_boundary(range.start) || !self.text.is_char_boundary(range.end) {
            return fail(ErrorKind::SplitsSurrogatePair);
        }
        if kind.is_placeholder() {
            if range.len() != 1 || self.text.get(range.start) != Some(&Self::PLACEHOLDER) {
                return fail(ErrorKind::NotOnPlaceholder);
            }
            let taken = SpanType::ALL
                .into_iter()
                .filter(|other| other.is_placeholder() && *other != kind)
                .any(|other| self.list(other).covers(range.start));
            if taken {
                return fail(ErrorKind::PlaceholderTaken);
            }
        }
        Ok(range)
    }

    /// The spans intersecting `start..start + length`, clipped to it.
    ///
    /// With `kind` set only spans of that kind are returned. Spans are ordered by start, then
    /// by kind. An empty or out of bounds query returns nothing.
    pub fn spans(&self, start: usize, length: usize, kind: Option<SpanType>) -> Vec<Span> {
        let Some(range) = self.checked_range(start, length) else {
            debug!("span query {start}+{length} out of bounds for len {}", self.len());
            return Vec::new();
        };
        let mut out = Vec::new();
        for k in SpanType::ALL {
            if kind.is_some_and(|kind| kind != k) {
                continue;
            }
            out.extend(
                self.list(k)
                    .intersecting(range.clone())
                    .map(|(r, a)| Span::new(a.clone(), r)),
            );
        }
        out.sort_by_key(Span::start);
        out
    }

    /// The span of `kind` covering all of `start..start + length`, clipped to it.
    pub fn span(&self, start: usize, length: usize, kind: SpanType) -> Option<Span> {
        let range = self.checked_range(start, length)?;
        if range.is_empty() {
            return None;
        }
        let (_, attributes) = self.list(kind).covering(range.clone())?;
        Some(Span::new(attributes.clone(), range))
    }

    /// Every stored span of `kind`, unclipped, in start order.
    pub fn spans_of_kind(&self, kind: SpanType) -> Vec<Span> {
        self.list(kind)
            .iter()
            .map(|(r, a)| Span::new(a.clone(), r.clone()))
            .collect()
    }

    /// Every stored span, grouped by kind. Kinds without spans are absent.
    pub fn spans_map(&self) -> BTreeMap<SpanType, Vec<Span>> {
        SpanType::ALL
            .into_iter()
            .filter(|kind| !self.list(*kind).is_empty())
            .map(|kind| (kind, self.spans_of_kind(kind)))
            .collect()
    }

    /// A copy of `start..start + length` with its spans clipped and rebased.
    ///
    /// Returns an empty string if the range is out of bounds.
    pub fn sub_span_string(&self, start: usize, length: usize) -> Self {
        let Some(range) = self.checked_range(start, length) else {
            debug!("sub span string {start}+{length} out of bounds for len {}", self.len());
            return Self::default();
        };
        Self {
            text: self.text[range.clone()].to_vec(),
            spans: core::array::from_fn(|ix| self.spans[ix].slice(range.clone())),
        }
    }

    /// Returns `true` if both strings have the same text and equal spans.
    ///
    /// Gesture spans are not compared. Custom and ext spans never compare equal, so a string
    /// holding one is not equal to any string, itself included.
    pub fn is_equal_to(&self, other: &Self) -> bool {
        if self.text != other.text {
            return false;
        }
        SpanType::ALL
            .into_iter()
            .filter(|kind| *kind != SpanType::Gesture)
            .all(|kind| {
                let (ours, theirs) = (self.list(kind), other.list(kind));
                ours.len() == theirs.len()
                    && ours
                        .iter()
                        .zip(theirs)
                        .all(|((ra, a), (rb, b))| ra == rb && a.is_equal(b))
            })
    }

    /// Attaches spans as given, without resolving overlaps or merging neighbors.
    ///
    /// Spans that [`MutableSpanString::try_add_span`](crate::MutableSpanString::try_add_span)
    /// would reject are skipped.
    pub fn bind_with_spans(&mut self, spans: impl IntoIterator<Item = Span>) {
        for span in spans {
            let kind = span.kind();
            match self.validate_span(kind, span.range()) {
                Ok(range) => self.list_mut(kind).push_sorted(range, span.into_attributes()),
                Err(err) => debug!("skipping {err}"),
            }
        }
    }

    /// Resolves the spans into contiguous runs.
    ///
    /// Every span boundary starts a new run. Each run carries the combined attributes of the
    /// spans covering it. An empty string has no runs.
    pub fn span_items(&self) -> Vec<SpanItem> {
        let mut ranges = Vec::new();
        let mut attributes = Vec::new();
        for list in &self.spans {
            for (range, attr) in list.iter().filter(|(r, _)| !r.is_empty()) {
                ranges.push(range.clone());
                attributes.push(attr);
            }
        }

        let mut workspace = SegmentsWorkspace::new();
        let mut segments = workspace.segments(self.len(), &ranges);
        let mut items = Vec::with_capacity(segments.len());
        while let Some(segment) = segments.next() {
            let content = String::from_utf16_lossy(&self.text[segment.clone()]);
            let mut item = SpanItem::new(segment, content);
            for (id, _) in segments.active().iter() {
                item.apply(attributes[id], SpanOperation::Add);
            }
            items.push(item);
        }
        items
    }
}

impl PartialEq for SpanString {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_to(other)
    }
}

#[cfg(test)]
mod tests {
    use super::SpanString;
    use crate::style::{Font, ImageSpanOptions};
    use crate::{Span, SpanType};
    use alloc::vec;
    use text_primitives::Color;

    fn red() -> Font {
        Font::new().with_color(Color::RED)
    }

    #[test]
    fn placeholders_occupy_one_space() {
        let image = SpanString::from_image(ImageSpanOptions::from_src("icon.png"));
        assert_eq!(image.as_utf16(), [0x20]);
        let spans = image.spans_of_kind(SpanType::Image);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].range(), 0..1);
    }

    #[test]
    fn span_requires_full_coverage() {
        let mut string = SpanString::new("0123456789");
        string.bind_with_spans([Span::font(red(), 2..6)]);
        assert_eq!(string.span(3, 2, SpanType::Font).unwrap().range(), 3..5);
        assert!(string.span(1, 2, SpanType::Font).is_none());
        assert!(string.span(3, 0, SpanType::Font).is_none());
        assert!(string.span(3, 2, SpanType::Decoration).is_none());
    }

    #[test]
    fn bind_skips_out_of_bounds_spans() {
        let mut string = SpanString::new("abc");
        string.bind_with_spans(vec![Span::font(red(), 0..4), Span::font(red(), 1..3)]);
        let spans = string.spans_of_kind(SpanType::Font);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].range(), 1..3);
    }

    #[test]
    fn unstyled_text_is_one_item() {
        let items = SpanString::new("hello").span_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].interval, 0..5);
        assert_eq!(items[0].content, "hello");
        assert!(SpanString::new("").span_items().is_empty());
    }

    #[test]
    fn bind_skips_spans_that_cannot_be_added() {
        let mut string = SpanString::new("ab cd");
        string.bind_with_spans(vec![
            Span::image(ImageSpanOptions::from_src("icon.png"), 0..2),
            Span::image(ImageSpanOptions::from_src("icon.png"), 2..3),
            Span::font(red(), 3..9),
        ]);
        let images = string.spans_of_kind(SpanType::Image);
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].range(), 2..3);
        assert!(string.spans_of_kind(SpanType::Font).is_empty());
    }
}
