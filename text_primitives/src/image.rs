// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use crate::{BorderRadius, CalcDimension, EdgeLengths};

coded_enum! {
    /// Vertical placement of an inline image relative to the surrounding line.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub enum VerticalAlign {
        /// Top of the image at the top of the line.
        Top = 1,
        /// Image centered in the line.
        Center = 2,
        /// Bottom of the image at the bottom of the line.
        #[default]
        Bottom = 3,
        /// Bottom of the image on the text baseline.
        Baseline = 4,
    }
}

coded_enum! {
    /// How an image is fitted into its box.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub enum ImageFit {
        /// Stretch to fill the box, ignoring the aspect ratio.
        Fill = 0,
        /// Scale to fit entirely inside the box.
        Contain = 1,
        /// Scale to cover the whole box, cropping the overflow.
        #[default]
        Cover = 2,
        /// Scale to the box width.
        FitWidth = 3,
        /// Scale to the box height.
        FitHeight = 4,
        /// Keep the natural size.
        None = 5,
        /// Like `Contain`, but never enlarge.
        ScaleDown = 6,
    }
}

/// Explicit width and height for an inline image.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ImageSpanSize {
    /// The width; the natural width when unset.
    pub width: Option<CalcDimension>,
    /// The height; the natural height when unset.
    pub height: Option<CalcDimension>,
}

/// Layout attributes of an inline image.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ImageSpanAttribute {
    /// Explicit size.
    pub size: Option<ImageSpanSize>,
    /// Vertical placement in the line.
    pub vertical_align: Option<VerticalAlign>,
    /// How the image is fitted into its box.
    pub object_fit: Option<ImageFit>,
    /// Outer spacing.
    pub margin: Option<EdgeLengths>,
    /// Corner rounding.
    pub border_radius: Option<BorderRadius>,
    /// Inner spacing.
    pub padding: Option<EdgeLengths>,
}

/// A decoded bitmap.
///
/// Pixel data is shared between clones and compared by value.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PixelMap {
    width: u32,
    height: u32,
    pixels: Arc<[u8]>,
}

impl PixelMap {
    /// Wraps RGBA8 pixel data of the given size.
    ///
    /// Returns `None` when `pixels` is not exactly `width * height * 4` bytes long.
    pub fn from_rgba8(width: u32, height: u32, pixels: impl Into<Arc<[u8]>>) -> Option<Self> {
        let pixels = pixels.into();
        let expected = usize::try_from(u64::from(width) * u64::from(height) * 4).ok()?;
        (pixels.len() == expected).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The RGBA8 pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns `true` for a map without pixels, such as a serialized placeholder.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ImageFit, PixelMap, VerticalAlign};
    use alloc::vec;

    #[test]
    fn codes_match_wire_values() {
        assert_eq!(VerticalAlign::Bottom.to_i32(), 3);
        assert_eq!(VerticalAlign::from_i32(0), None);
        assert_eq!(ImageFit::Cover.to_i32(), 2);
        assert_eq!(ImageFit::from_i32(6), Some(ImageFit::ScaleDown));
    }

    #[test]
    fn pixel_map_checks_length() {
        assert!(PixelMap::from_rgba8(2, 2, vec![0_u8; 16]).is_some());
        assert!(PixelMap::from_rgba8(2, 2, vec![0_u8; 15]).is_none());
        assert!(PixelMap::default().is_empty());
    }
}
