// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Record tags.
//!
//! Values below `0x20` are left to callers for their own records.

/// A length-prefixed UTF-8 string.
pub const STRING: u8 = 0x20;
/// A little-endian IEEE-754 double.
pub const DOUBLE: u8 = 0x21;
/// An ARGB color followed by a color-space byte.
pub const COLOR: u8 = 0x22;
/// A text shadow.
pub const SHADOW: u8 = 0x23;
/// A dimension: double value and unit.
pub const DIMENSION: u8 = 0x24;
/// A list of font family names.
pub const FONT_FAMILIES: u8 = 0x25;
/// A list of text shadows.
pub const SHADOWS: u8 = 0x26;
/// Four corner radii.
pub const BORDER_RADIUS: u8 = 0x27;
/// A pixel map handle; bitmap bytes are not carried.
pub const PIXEL_MAP: u8 = 0x28;
/// A list of font feature settings.
pub const FONT_FEATURES: u8 = 0x29;
/// A dimension that may be a `calc()` expression.
pub const CALC_DIMENSION: u8 = 0x2a;
/// A box-edge length.
pub const CALC_LENGTH: u8 = 0x2b;
/// A vertical alignment code.
pub const VERTICAL_ALIGN: u8 = 0x2c;
/// An image fit code.
pub const IMAGE_FIT: u8 = 0x2d;

/// Start of an image span attribute record.
pub const IMAGE_ATTRIBUTE: u8 = 0x3a;
/// Image attribute field: size.
pub const IMAGE_ATTRIBUTE_SIZE: u8 = 0x3b;
/// Image attribute field: vertical alignment.
pub const IMAGE_ATTRIBUTE_VERTICAL_ALIGN: u8 = 0x3c;
/// Image attribute field: object fit.
pub const IMAGE_ATTRIBUTE_OBJECT_FIT: u8 = 0x3d;
/// Image attribute field: margin.
pub const IMAGE_ATTRIBUTE_MARGIN: u8 = 0x3e;
/// Image attribute field: border radius.
pub const IMAGE_ATTRIBUTE_BORDER_RADIUS: u8 = 0x3f;
/// Image attribute field: padding.
pub const IMAGE_ATTRIBUTE_PADDING: u8 = 0x40;
/// End of an image span attribute record.
pub const IMAGE_ATTRIBUTE_END: u8 = 0x41;

/// Start of an image size record.
pub const IMAGE_SIZE: u8 = 0x42;
/// Image size field: width.
pub const IMAGE_SIZE_WIDTH: u8 = 0x43;
/// Image size field: height.
pub const IMAGE_SIZE_HEIGHT: u8 = 0x44;
/// End of an image size record.
pub const IMAGE_SIZE_END: u8 = 0x45;

/// Start of an edge lengths record (padding or margin).
pub const EDGES: u8 = 0x46;
/// Edge field: top.
pub const EDGES_TOP: u8 = 0x47;
/// Edge field: bottom.
pub const EDGES_BOTTOM: u8 = 0x48;
/// Edge field: left.
pub const EDGES_LEFT: u8 = 0x49;
/// Edge field: right.
pub const EDGES_RIGHT: u8 = 0x4a;
/// End of an edge lengths record.
pub const EDGES_END: u8 = 0x4b;

/// Start of a leading margin record.
pub const LEADING_MARGIN: u8 = 0x4c;
/// Leading margin field: pixel map.
pub const LEADING_MARGIN_PIXMAP: u8 = 0x4d;
/// End of a leading margin record.
pub const LEADING_MARGIN_END: u8 = 0x4e;
