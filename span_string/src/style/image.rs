// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use text_primitives::{ImageSpanAttribute, PixelMap};

/// Source and layout of an inline image placeholder.
///
/// The image is identified either by a resource path in [`src`](Self::src) or by decoded
/// pixels in [`pixel_map`](Self::pixel_map). Loading is left to the text component.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageSpanOptions {
    /// Resource path or URI.
    pub src: Option<String>,
    /// Bundle the resource belongs to.
    pub bundle_name: Option<String>,
    /// Module the resource belongs to.
    pub module_name: Option<String>,
    /// Decoded pixels.
    pub pixel_map: Option<PixelMap>,
    /// Size, alignment and box attributes.
    pub attribute: Option<ImageSpanAttribute>,
}

impl ImageSpanOptions {
    /// Creates options loading the image from `src`.
    pub fn from_src(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            ..Self::default()
        }
    }

    /// Creates options drawing already decoded pixels.
    pub fn from_pixel_map(pixel_map: PixelMap) -> Self {
        Self {
            pixel_map: Some(pixel_map),
            ..Self::default()
        }
    }

    /// Sets the bundle and module the resource belongs to.
    pub fn with_resource(mut self, bundle_name: impl Into<String>, module_name: impl Into<String>) -> Self {
        self.bundle_name = Some(bundle_name.into());
        self.module_name = Some(module_name.into());
        self
    }

    /// Sets the layout attributes.
    #[inline]
    pub fn with_attribute(mut self, attribute: ImageSpanAttribute) -> Self {
        self.attribute = Some(attribute);
        self
    }
}
