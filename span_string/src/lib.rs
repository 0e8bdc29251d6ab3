// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rich text as UTF-16 text plus typed spans, built on [`span_index`].
//!
//! - [`SpanString`] holds the text and, per [`SpanType`], an ordered list of non-overlapping
//!   spans. It answers range queries, slices, and compares.
//! - [`MutableSpanString`] edits text and spans, keeping every span aligned with its text.
//! - [`SpanString::span_items`] resolves the spans into contiguous [`SpanItem`] runs, the form
//!   a text component lays out.
//! - [`SpanString::encode_tlv`] and [`SpanString::decode_tlv`] carry a span string across a
//!   process boundary using the [`text_tlv`] value codec.
//!
//! ## Indices
//!
//! All positions and lengths are **UTF-16 code units**. Adding a span validates that neither
//! end splits a surrogate pair, and that an image or custom span sits on exactly one
//! [`SpanString::PLACEHOLDER`] unit; text edits leave surrogate pairs to the caller.
//!
//! ## Invalid input
//!
//! Edits and queries never panic. An out of bounds edit is ignored and logged at `debug`
//! level through the [`log`] facade; [`MutableSpanString::try_add_span`] reports why a span
//! was rejected for callers that want to know.
//!
//! ## Example
//!
//! ```
//! use span_string::style::{Font, TextBackgroundStyle};
//! use span_string::{MutableSpanString, Span, SpanType};
//! use text_primitives::{Color, FontWeight};
//!
//! let mut text = MutableSpanString::new("Hello world!");
//! text.add_span(Span::font(Font::new().with_weight(FontWeight::BOLD), 6..11));
//! text.add_span(Span::background(TextBackgroundStyle::new(Color::GRAY), 0..5));
//!
//! // Typing inside a run extends it.
//! text.insert_string(8, "rrr");
//! let bold = text.spans(0, text.len(), Some(SpanType::Font));
//! assert_eq!(bold[0].range(), 6..14);
//!
//! let items = text.span_items();
//! assert_eq!(items.len(), 4);
//! assert_eq!(items[2].content, "worrrrld");
//! ```

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

pub mod style;

mod codec;
mod error;
mod mutable;
mod span;
mod span_item;
mod span_string;


pub use error::{Error, ErrorKind};
pub use mutable::MutableSpanString;
pub use span::{Span, SpanAttributes, SpanOperation, SpanType};
pub use span_item::{
    FontStyleGroup, Placeholder, SpanItem, SpanResult, SpanResultKind, TextLineStyleGroup,
};
pub use span_string::SpanString;
