// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use text_primitives::{
    BorderRadius, CalcDimension, CalcLength, Color, Dimension, DimensionUnit, EdgeLengths,
    FontFamilies, FontFeature, ImageFit, ImageSpanAttribute, ImageSpanSize, LeadingMargin,
    PixelMap, Shadow, VerticalAlign,
};

use crate::tags;

/// The only color space currently written (sRGB).
const COLOR_SPACE_SRGB: u8 = 0;

/// Append a bare tag byte.
pub fn write_tag(buf: &mut Vec<u8>, tag: u8) {
    buf.push(tag);
}

/// Append an untagged int32 as an unsigned LEB128 varint of its bits.
pub fn write_int32(buf: &mut Vec<u8>, value: i32) {
    write_varint(buf, value.cast_unsigned());
}

fn write_varint(buf: &mut Vec<u8>, mut value: u32) {
    loop {
        let low = value.to_le_bytes()[0] & 0x7f;
        value >>= 7;
        if value == 0 {
            buf.push(low);
            return;
        }
        buf.push(low | 0x80);
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Record lengths are capped at u32::MAX by the format."
)]
fn write_len(buf: &mut Vec<u8>, len: usize) {
    write_varint(buf, len as u32);
}

/// Append a string record.
pub fn write_string(buf: &mut Vec<u8>, value: &str) {
    buf.push(tags::STRING);
    write_len(buf, value.len());
    buf.extend_from_slice(value.as_bytes());
}

/// Append a double record.
pub fn write_double(buf: &mut Vec<u8>, value: f64) {
    buf.push(tags::DOUBLE);
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Append a color record.
pub fn write_color(buf: &mut Vec<u8>, color: Color) {
    buf.push(tags::COLOR);
    buf.extend_from_slice(&color.to_argb_bytes());
    buf.push(COLOR_SPACE_SRGB);
}

/// Append a dimension record.
pub fn write_dimension(buf: &mut Vec<u8>, dimension: Dimension) {
    buf.push(tags::DIMENSION);
    write_double(buf, dimension.value());
    write_int32(buf, dimension.unit().to_i32());
}

/// Append a shadow record.
pub fn write_shadow(buf: &mut Vec<u8>, shadow: &Shadow) {
    buf.push(tags::SHADOW);
    write_double(buf, shadow.blur_radius);
    write_color(buf, shadow.color);
    write_double(buf, shadow.offset_x);
    write_double(buf, shadow.offset_y);
}

/// Append a shadow list record.
pub fn write_shadows(buf: &mut Vec<u8>, shadows: &[Shadow]) {
    buf.push(tags::SHADOWS);
    write_len(buf, shadows.len());
    for shadow in shadows {
        write_shadow(buf, shadow);
    }
}

/// Append a font family list record.
pub fn write_font_families(buf: &mut Vec<u8>, families: &FontFamilies) {
    buf.push(tags::FONT_FAMILIES);
    write_len(buf, families.len());
    for name in families.names() {
        write_string(buf, name);
    }
}

/// Append a font feature list record.
///
/// Each feature is written as its tag name without padding, then its value.
pub fn write_font_features(buf: &mut Vec<u8>, features: &[FontFeature]) {
    buf.push(tags::FONT_FEATURES);
    write_len(buf, features.len());
    for feature in features {
        let (bytes, len) = feature.tag.as_trimmed_bytes();
        buf.push(tags::STRING);
        write_len(buf, len);
        buf.extend_from_slice(&bytes[..len]);
        write_int32(buf, feature.value);
    }
}

/// Append a border radius record.
pub fn write_border_radius(buf: &mut Vec<u8>, radius: &BorderRadius) {
    buf.push(tags::BORDER_RADIUS);
    write_dimension(buf, radius.top_left);
    write_dimension(buf, radius.top_right);
    write_dimension(buf, radius.bottom_left);
    write_dimension(buf, radius.bottom_right);
}

/// Append a pixel map record.
///
/// Only the handle is recorded; pixel data does not cross the wire.
pub fn write_pixel_map(buf: &mut Vec<u8>, _pixel_map: &PixelMap) {
    buf.push(tags::PIXEL_MAP);
    write_len(buf, 0);
}

/// Append a calc dimension record.
pub fn write_calc_dimension(buf: &mut Vec<u8>, value: &CalcDimension) {
    buf.push(tags::CALC_DIMENSION);
    match value {
        CalcDimension::Dimension(dimension) => write_dimension(buf, *dimension),
        CalcDimension::Calc(expression) => {
            write_dimension(buf, Dimension::new(0.0, DimensionUnit::Calc));
            write_string(buf, expression);
        }
    }
}

/// Append a calc length record.
pub fn write_calc_length(buf: &mut Vec<u8>, value: &CalcLength) {
    buf.push(tags::CALC_LENGTH);
    match value.as_calc_dimension() {
        CalcDimension::Dimension(dimension) => {
            write_string(buf, "");
            write_dimension(buf, *dimension);
        }
        CalcDimension::Calc(expression) => {
            write_string(buf, expression);
            write_dimension(buf, Dimension::new(0.0, DimensionUnit::Calc));
        }
    }
}

/// Append a vertical alignment record.
pub fn write_vertical_align(buf: &mut Vec<u8>, align: VerticalAlign) {
    buf.push(tags::VERTICAL_ALIGN);
    write_int32(buf, align.to_i32());
}

/// Append an image fit record.
pub fn write_image_fit(buf: &mut Vec<u8>, fit: ImageFit) {
    buf.push(tags::IMAGE_FIT);
    write_int32(buf, fit.to_i32());
}

/// Append an image size record. Unset sides are omitted.
pub fn write_image_span_size(buf: &mut Vec<u8>, size: &ImageSpanSize) {
    buf.push(tags::IMAGE_SIZE);
    if let Some(width) = &size.width {
        buf.push(tags::IMAGE_SIZE_WIDTH);
        write_calc_dimension(buf, width);
    }
    if let Some(height) = &size.height {
        buf.push(tags::IMAGE_SIZE_HEIGHT);
        write_calc_dimension(buf, height);
    }
    buf.push(tags::IMAGE_SIZE_END);
}

/// Append an edge lengths record. Unset edges are omitted.
pub fn write_edge_lengths(buf: &mut Vec<u8>, edges: &EdgeLengths) {
    buf.push(tags::EDGES);
    let fields = [
        (tags::EDGES_LEFT, &edges.left),
        (tags::EDGES_RIGHT, &edges.right),
        (tags::EDGES_TOP, &edges.top),
        (tags::EDGES_BOTTOM, &edges.bottom),
    ];
    for (tag, edge) in fields {
        if let Some(edge) = edge {
            buf.push(tag);
            write_calc_length(buf, edge);
        }
    }
    buf.push(tags::EDGES_END);
}

/// Append an image span attribute record. Unset fields are omitted.
pub fn write_image_span_attribute(buf: &mut Vec<u8>, attribute: &ImageSpanAttribute) {
    buf.push(tags::IMAGE_ATTRIBUTE);
    if let Some(size) = &attribute.size {
        buf.push(tags::IMAGE_ATTRIBUTE_SIZE);
        write_image_span_size(buf, size);
    }
    if let Some(align) = attribute.vertical_align {
        buf.push(tags::IMAGE_ATTRIBUTE_VERTICAL_ALIGN);
        write_vertical_align(buf, align);
    }
    if let Some(fit) = attribute.object_fit {
        buf.push(tags::IMAGE_ATTRIBUTE_OBJECT_FIT);
        write_image_fit(buf, fit);
    }
    if let Some(margin) = &attribute.margin {
        buf.push(tags::IMAGE_ATTRIBUTE_MARGIN);
        write_edge_lengths(buf, margin);
    }
    if let Some(radius) = &attribute.border_radius {
        buf.push(tags::IMAGE_ATTRIBUTE_BORDER_RADIUS);
        write_border_radius(buf, radius);
    }
    if let Some(padding) = &attribute.padding {
        buf.push(tags::IMAGE_ATTRIBUTE_PADDING);
        write_edge_lengths(buf, padding);
    }
    buf.push(tags::IMAGE_ATTRIBUTE_END);
}

/// Append a leading margin record.
pub fn write_leading_margin(buf: &mut Vec<u8>, margin: &LeadingMargin) {
    buf.push(tags::LEADING_MARGIN);
    write_dimension(buf, margin.size.width);
    write_dimension(buf, margin.size.height);
    if let Some(pixmap) = &margin.pixmap {
        buf.push(tags::LEADING_MARGIN_PIXMAP);
        write_pixel_map(buf, pixmap);
    }
    buf.push(tags::LEADING_MARGIN_END);
}
