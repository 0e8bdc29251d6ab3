// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use text_primitives::{
    BorderRadius, CalcDimension, CalcLength, Color, Dimension, DimensionUnit, EdgeLengths,
    FontFamilies, FontFeature, ImageFit, ImageSpanAttribute, ImageSpanSize, LeadingMargin,
    LeadingMarginSize, PixelMap, Shadow, Tag, VerticalAlign,
};

use crate::tags;

/// A cursor over an encoded buffer.
///
/// See the [crate docs](crate) for how malformed input is handled.
#[derive(Clone, Debug)]
pub struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

macro_rules! defaulting_reads {
    ($($(#[$meta:meta])* $read:ident => $try_read:ident -> $ty:ty;)+) => {
        impl Reader<'_> {
            $(
                $(#[$meta])*
                pub fn $read(&mut self) -> $ty {
                    self.$try_read().unwrap_or_default()
                }
            )+
        }
    };
}

defaulting_reads! {
    /// Read an untagged int32, or `0`.
    read_int32 => try_read_int32 -> i32;
    /// Read a string record, or an empty string.
    read_string => try_read_string -> String;
    /// Read a double record, or `0.0`.
    read_double => try_read_double -> f64;
    /// Read a color record, or transparent.
    read_color => try_read_color -> Color;
    /// Read a dimension record, or `0px`.
    read_dimension => try_read_dimension -> Dimension;
    /// Read a shadow record, or the default shadow.
    read_shadow => try_read_shadow -> Shadow;
    /// Read a shadow list record, or an empty list.
    read_shadows => try_read_shadows -> Vec<Shadow>;
    /// Read a font family list record, or an empty list.
    read_font_families => try_read_font_families -> FontFamilies;
    /// Read a font feature list record, or an empty list.
    read_font_features => try_read_font_features -> Vec<FontFeature>;
    /// Read a border radius record, or all-zero radii.
    read_border_radius => try_read_border_radius -> BorderRadius;
    /// Read a pixel map record, or an empty map.
    read_pixel_map => try_read_pixel_map -> PixelMap;
    /// Read a calc dimension record, or `0px`.
    read_calc_dimension => try_read_calc_dimension -> CalcDimension;
    /// Read a calc length record, or `0px`.
    read_calc_length => try_read_calc_length -> CalcLength;
    /// Read a vertical alignment record, or the default alignment.
    read_vertical_align => try_read_vertical_align -> VerticalAlign;
    /// Read an image fit record, or the default fit.
    read_image_fit => try_read_image_fit -> ImageFit;
    /// Read an image size record, or an unset size.
    read_image_span_size => try_read_image_span_size -> ImageSpanSize;
    /// Read an edge lengths record, or unset edges.
    read_edge_lengths => try_read_edge_lengths -> EdgeLengths;
    /// Read an image span attribute record, or unset attributes.
    read_image_span_attribute => try_read_image_span_attribute -> ImageSpanAttribute;
    /// Read a leading margin record, or a zero margin.
    read_leading_margin => try_read_leading_margin -> LeadingMargin;
}

impl<'a> Reader<'a> {
    /// Start reading at the beginning of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// The cursor position.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Whether every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// The tag at the cursor, without consuming it.
    pub fn peek_tag(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Consume the tag at the cursor if it is `tag`.
    pub fn eat_tag(&mut self, tag: u8) -> bool {
        if self.peek_tag() == Some(tag) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Give up on the rest of the buffer.
    pub fn skip_to_end(&mut self) {
        self.pos = self.data.len();
    }

    /// Read a record whose body is parsed by `body`, following the mismatch and truncation
    /// rules.
    ///
    /// This is the building block for callers defining their own records.
    pub fn read_record<T>(
        &mut self,
        tag: u8,
        body: impl FnOnce(&mut Self) -> Option<T>,
    ) -> Option<T> {
        if !self.eat_tag(tag) {
            return None;
        }
        let value = body(self);
        if value.is_none() {
            self.skip_to_end();
        }
        value
    }

    fn take(&mut self, n: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(n)?;
        let bytes = self.data.get(self.pos..end)?;
        self.pos = end;
        Some(bytes)
    }

    fn take_array<const N: usize>(&mut self) -> Option<[u8; N]> {
        self.take(N)?.try_into().ok()
    }

    fn varint(&mut self) -> Option<u32> {
        let mut value = 0_u32;
        for shift in (0..35).step_by(7) {
            let [byte] = self.take_array::<1>()?;
            value |= u32::from(byte & 0x7f).checked_shl(shift)?;
            if byte & 0x80 == 0 {
                return Some(value);
            }
        }
        None
    }

    fn length(&mut self) -> Option<usize> {
        usize::try_from(self.varint()?).ok()
    }

    /// Read an untagged int32.
    ///
    /// On truncation the cursor moves to the end.
    pub fn try_read_int32(&mut self) -> Option<i32> {
        let value = self.varint().map(u32::cast_signed);
        if value.is_none() {
            self.skip_to_end();
        }
        value
    }

    /// Read a string record.
    pub fn try_read_string(&mut self) -> Option<String> {
        self.read_record(tags::STRING, |r| {
            let len = r.length()?;
            let bytes = r.take(len)?;
            String::from_utf8(bytes.to_vec()).ok()
        })
    }

    /// Read a double record.
    pub fn try_read_double(&mut self) -> Option<f64> {
        self.read_record(tags::DOUBLE, |r| Some(f64::from_le_bytes(r.take_array()?)))
    }

    /// Read a color record.
    pub fn try_read_color(&mut self) -> Option<Color> {
        self.read_record(tags::COLOR, |r| {
            let [a, red, green, blue, _color_space] = r.take_array()?;
            Some(Color::from_argb(a, red, green, blue))
        })
    }

    /// Read a dimension record.
    pub fn try_read_dimension(&mut self) -> Option<Dimension> {
        self.read_record(tags::DIMENSION, |r| {
            let value = r.try_read_double()?;
            let unit = DimensionUnit::from_i32(r.try_read_int32()?)?;
            Some(Dimension::new(value, unit))
        })
    }

    /// Read a shadow record.
    pub fn try_read_shadow(&mut self) -> Option<Shadow> {
        self.read_record(tags::SHADOW, |r| {
            let blur_radius = r.try_read_double()?;
            let color = r.try_read_color()?;
            let offset_x = r.try_read_double()?;
            let offset_y = r.try_read_double()?;
            Some(Shadow::new(blur_radius, offset_x, offset_y, color))
        })
    }

    /// Read a shadow list record.
    pub fn try_read_shadows(&mut self) -> Option<Vec<Shadow>> {
        self.read_record(tags::SHADOWS, |r| {
            let count = r.length()?;
            (0..count).map(|_| r.try_read_shadow()).collect()
        })
    }

    /// Read a font family list record.
    pub fn try_read_font_families(&mut self) -> Option<FontFamilies> {
        self.read_record(tags::FONT_FAMILIES, |r| {
            let count = r.length()?;
            (0..count).map(|_| r.try_read_string()).collect()
        })
    }

    /// Read a font feature list record.
    ///
    /// A feature whose name is not a valid tag makes the whole record malformed.
    pub fn try_read_font_features(&mut self) -> Option<Vec<FontFeature>> {
        self.read_record(tags::FONT_FEATURES, |r| {
            let count = r.length()?;
            (0..count)
                .map(|_| {
                    let tag = Tag::parse(&r.try_read_string()?)?;
                    let value = r.try_read_int32()?;
                    Some(FontFeature::new(tag, value))
                })
                .collect()
        })
    }

    /// Read a border radius record.
    pub fn try_read_border_radius(&mut self) -> Option<BorderRadius> {
        self.read_record(tags::BORDER_RADIUS, |r| {
            Some(BorderRadius {
                top_left: r.try_read_dimension()?,
                top_right: r.try_read_dimension()?,
                bottom_left: r.try_read_dimension()?,
                bottom_right: r.try_read_dimension()?,
            })
        })
    }

    /// Read a pixel map record.
    ///
    /// Any carried bytes are skipped; the result is always an empty placeholder.
    pub fn try_read_pixel_map(&mut self) -> Option<PixelMap> {
        self.read_record(tags::PIXEL_MAP, |r| {
            let len = r.length()?;
            r.take(len)?;
            Some(PixelMap::default())
        })
    }

    /// Read a calc dimension record.
    pub fn try_read_calc_dimension(&mut self) -> Option<CalcDimension> {
        self.read_record(tags::CALC_DIMENSION, |r| {
            let dimension = r.try_read_dimension()?;
            if dimension.unit() == DimensionUnit::Calc {
                Some(CalcDimension::Calc(r.try_read_string()?))
            } else {
                Some(CalcDimension::Dimension(dimension))
            }
        })
    }

    /// Read a calc length record.
    pub fn try_read_calc_length(&mut self) -> Option<CalcLength> {
        self.read_record(tags::CALC_LENGTH, |r| {
            let expression = r.try_read_string()?;
            let dimension = r.try_read_dimension()?;
            if expression.is_empty() && dimension.unit() != DimensionUnit::Calc {
                Some(CalcLength::new(dimension))
            } else {
                Some(CalcLength::calc(expression))
            }
        })
    }

    /// Read a vertical alignment record.
    pub fn try_read_vertical_align(&mut self) -> Option<VerticalAlign> {
        self.read_record(tags::VERTICAL_ALIGN, |r| {
            VerticalAlign::from_i32(r.try_read_int32()?)
        })
    }

    /// Read an image fit record.
    pub fn try_read_image_fit(&mut self) -> Option<ImageFit> {
        self.read_record(tags::IMAGE_FIT, |r| ImageFit::from_i32(r.try_read_int32()?))
    }

    /// Read an image size record.
    pub fn try_read_image_span_size(&mut self) -> Option<ImageSpanSize> {
        self.read_record(tags::IMAGE_SIZE, |r| {
            let mut size = ImageSpanSize::default();
            loop {
                match r.take_array::<1>()? {
                    [tags::IMAGE_SIZE_WIDTH] => size.width = Some(r.try_read_calc_dimension()?),
                    [tags::IMAGE_SIZE_HEIGHT] => size.height = Some(r.try_read_calc_dimension()?),
                    [tags::IMAGE_SIZE_END] => return Some(size),
                    _ => return None,
                }
            }
        })
    }

    /// Read an edge lengths record.
    pub fn try_read_edge_lengths(&mut self) -> Option<EdgeLengths> {
        self.read_record(tags::EDGES, |r| {
            let mut edges = EdgeLengths::default();
            loop {
                let [tag] = r.take_array::<1>()?;
                let edge = match tag {
                    tags::EDGES_LEFT => &mut edges.left,
                    tags::EDGES_RIGHT => &mut edges.right,
                    tags::EDGES_TOP => &mut edges.top,
                    tags::EDGES_BOTTOM => &mut edges.bottom,
                    tags::EDGES_END => return Some(edges),
                    _ => return None,
                };
                *edge = Some(r.try_read_calc_length()?);
            }
        })
    }

    /// Read an image span attribute record.
    pub fn try_read_image_span_attribute(&mut self) -> Option<ImageSpanAttribute> {
        self.read_record(tags::IMAGE_ATTRIBUTE, |r| {
            let mut attribute = ImageSpanAttribute::default();
            loop {
                let [tag] = r.take_array::<1>()?;
                match tag {
                    tags::IMAGE_ATTRIBUTE_SIZE => {
                        attribute.size = Some(r.try_read_image_span_size()?);
                    }
                    tags::IMAGE_ATTRIBUTE_VERTICAL_ALIGN => {
                        attribute.vertical_align = Some(r.try_read_vertical_align()?);
                    }
                    tags::IMAGE_ATTRIBUTE_OBJECT_FIT => {
                        attribute.object_fit = Some(r.try_read_image_fit()?);
                    }
                    tags::IMAGE_ATTRIBUTE_MARGIN => {
                        attribute.margin = Some(r.try_read_edge_lengths()?);
                    }
                    tags::IMAGE_ATTRIBUTE_BORDER_RADIUS => {
                        attribute.border_radius = Some(r.try_read_border_radius()?);
                    }
                    tags::IMAGE_ATTRIBUTE_PADDING => {
                        attribute.padding = Some(r.try_read_edge_lengths()?);
                    }
                    tags::IMAGE_ATTRIBUTE_END => return Some(attribute),
                    _ => return None,
                }
            }
        })
    }

    /// Read a leading margin record.
    pub fn try_read_leading_margin(&mut self) -> Option<LeadingMargin> {
        self.read_record(tags::LEADING_MARGIN, |r| {
            let width = r.try_read_dimension()?;
            let height = r.try_read_dimension()?;
            let mut margin = LeadingMargin::new(LeadingMarginSize::new(width, height));
            if r.eat_tag(tags::LEADING_MARGIN_PIXMAP) {
                margin.pixmap = Some(r.try_read_pixel_map()?);
            }
            r.eat_tag(tags::LEADING_MARGIN_END).then_some(margin)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Reader;
    use crate::{write_int32, write_string};
    use alloc::vec::Vec;

    #[test]
    fn int32_round_trips_extremes() {
        let mut buf = Vec::new();
        for value in [0, 1, -1, i32::MAX, i32::MIN] {
            write_int32(&mut buf, value);
        }
        let mut reader = Reader::new(&buf);
        for value in [0, 1, -1, i32::MAX, i32::MIN] {
            assert_eq!(reader.read_int32(), value);
        }
        assert!(reader.is_at_end());
    }

    #[test]
    fn tag_mismatch_leaves_cursor() {
        let mut buf = Vec::new();
        write_string(&mut buf, "abc");
        let mut reader = Reader::new(&buf);
        assert_eq!(reader.read_double(), 0.0);
        assert_eq!(reader.pos(), 0);
        assert_eq!(reader.read_string(), "abc");
    }

    #[test]
    fn truncation_moves_cursor_to_end() {
        let mut buf = Vec::new();
        write_string(&mut buf, "abcdef");
        buf.truncate(4);
        let mut reader = Reader::new(&buf);
        assert_eq!(reader.read_string(), "");
        assert!(reader.is_at_end());
        assert_eq!(reader.pos(), 4);
    }

    #[test]
    fn unterminated_varint_is_truncation() {
        let buf = [0x80, 0x80];
        let mut reader = Reader::new(&buf);
        assert_eq!(reader.try_read_int32(), None);
        assert!(reader.is_at_end());
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let buf = [0x20, 0x02, 0xff, 0xfe];
        let mut reader = Reader::new(&buf);
        assert_eq!(reader.try_read_string(), None);
        assert!(reader.is_at_end());
    }
}
