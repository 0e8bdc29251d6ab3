// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute payloads carried by spans.

mod callbacks;
mod decoration;
mod font;
mod image;
mod paragraph;

pub use callbacks::{
    CustomSpanDrawInfo, CustomSpanMeasureInfo, CustomSpanMetrics, CustomSpanOptions, DrawCallback,
    GestureCallback, GestureEvent, GestureStyle, MeasureCallback,
};
pub use decoration::DecorationStyle;
pub use font::Font;
pub(crate) use font::write_field;
pub use image::ImageSpanOptions;
pub use paragraph::{SpanParagraphStyle, TextBackgroundStyle};
