// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

use crate::SpanType;

/// Why a span could not be added to a [`MutableSpanString`](crate::MutableSpanString).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    span_type: SpanType,
    range: Range<usize>,
    len: usize,
}

impl Error {
    pub(crate) fn new(
        kind: ErrorKind,
        span_type: SpanType,
        range: Range<usize>,
        len: usize,
    ) -> Self {
        Self {
            kind,
            span_type,
            range,
            len,
        }
    }

    /// What was wrong with the span.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The kind of the rejected span.
    pub fn span_type(&self) -> SpanType {
        self.span_type
    }

    /// The range the span asked for.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The text length in code units when the span was rejected.
    pub fn text_len(&self) -> usize {
        self.len
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Range { start, end } = self.range;
        write!(f, "{} span {start}..{end}: ", self.span_type)?;
        match self.kind {
            ErrorKind::Reversed => f.write_str("start is after end"),
            ErrorKind::OutOfBounds => write!(f, "out of bounds for len {}", self.len),
            ErrorKind::SplitsSurrogatePair => f.write_str("splits a surrogate pair"),
            ErrorKind::NotOnPlaceholder => write!(
                f,
                "must cover exactly one U+{:04X} placeholder",
                crate::SpanString::PLACEHOLDER
            ),
            ErrorKind::PlaceholderTaken => {
                f.write_str("placeholder already holds an image or custom span")
            }
        }
    }
}

impl core::error::Error for Error {}

/// The category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The range starts after it ends.
    Reversed,
    /// The range ends past the text.
    OutOfBounds,
    /// An end of the range falls between the halves of a surrogate pair.
    SplitsSurrogatePair,
    /// An image or custom span does not sit on a single placeholder code unit.
    NotOnPlaceholder,
    /// An image or custom span targets a placeholder owned by the other placeholder kind.
    PlaceholderTaken,
}
