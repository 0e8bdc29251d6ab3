// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fundamental text property types.
//!
//! This crate is a lightweight, `no_std`-friendly vocabulary layer for span strings. It holds the
//! small, typed "leaf" values that span attributes are made of: lengths with units, colors, font
//! properties, decoration and paragraph enums, shadows, and the box properties of inline images.
//!
//! Every enum that crosses a serialization boundary has a stable integer code, available through
//! `to_i32` and `from_i32`.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
//! - `bytemuck`: Implement traits from `bytemuck` on [`Color`].
//!
//! ## Example
//!
//! ```
//! use text_primitives::{Color, Dimension, DimensionUnit, Tag};
//!
//! let tag = Tag::parse("liga").unwrap();
//! assert_eq!(tag.to_bytes(), *b"liga");
//!
//! let size = Dimension::vp(16.0);
//! assert_eq!(size.unit(), DimensionUnit::Vp);
//!
//! assert_eq!(Color::RED.red(), 0xff);
//! assert_eq!(Color::RED.alpha(), 0xff);
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

/// Declares a fieldless enum with explicit integer codes and the `to_i32`/`from_i32` pair.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $code:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $code,
            )+
        }

        impl $name {
            /// Returns the stable integer code of this value.
            pub const fn to_i32(self) -> i32 {
                self as i32
            }

            /// Returns the value with the given integer code, if there is one.
            pub const fn from_i32(code: i32) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

mod color;
mod dimension;
mod edges;
mod font;
mod font_family;
mod image;
#[cfg(feature = "bytemuck")]
mod impl_bytemuck;
mod paragraph;
mod shadow;
mod tag;
mod text;

pub use color::Color;
pub use dimension::{CalcDimension, CalcLength, Dimension, DimensionUnit};
pub use edges::{BorderRadius, EdgeLengths};
pub use font::{FontStyle, FontWeight};
pub use font_family::{FontFamilies, ParseFontFamilyError};
pub use image::{ImageFit, ImageSpanAttribute, ImageSpanSize, PixelMap, VerticalAlign};
pub use paragraph::{LeadingMargin, LeadingMarginSize};
pub use shadow::Shadow;
pub use tag::{FontFeature, Tag};
pub use text::{
    LineBreakStrategy, TextAlign, TextDecoration, TextDecorationStyle, TextOverflow, WordBreak,
};
