// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text TLV is a tag-length-value byte encoding for the style values in [`text_primitives`].
//!
//! Every record starts with a one-byte tag from [`tags`]. Scalars follow their tag directly;
//! composite records (image attributes, sizes, edges, leading margins) are a start tag, a
//! sequence of optional tagged fields, and an end tag. Integers are unsigned LEB128 varints of
//! their 32-bit two's-complement representation and are never tagged when nested.
//!
//! Writing appends to a `Vec<u8>`. Reading goes through a [`Reader`], which never fails:
//!
//! - on a tag mismatch, the type's default is returned and the cursor does not move;
//! - on truncated or malformed input, the default is returned and the cursor moves to the end.
//!
//! Each `read_*` method has a `try_read_*` twin returning `None` instead of the default, for
//! callers that want to notice bad input.
//!
//! ## Example
//!
//! ```
//! use text_primitives::{Color, Shadow};
//! use text_tlv::{Reader, write_shadow};
//!
//! let shadow = Shadow::new(2.0, 8.0, 8.0, Color::BLACK);
//! let mut buf = Vec::new();
//! write_shadow(&mut buf, &shadow);
//!
//! let mut reader = Reader::new(&buf);
//! assert_eq!(reader.read_shadow(), shadow);
//! assert!(reader.is_at_end());
//!
//! // Nothing left: the default comes back.
//! assert_eq!(reader.read_shadow(), Shadow::default());
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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

mod read;
pub mod tags;
mod write;


pub use crate::read::Reader;
pub use crate::write::{
    write_border_radius, write_calc_dimension, write_calc_length, write_color, write_dimension,
    write_double, write_edge_lengths, write_font_families, write_font_features,
    write_image_fit, write_image_span_attribute, write_image_span_size, write_int32,
    write_leading_margin, write_pixel_map, write_shadow, write_shadows, write_string,
    write_tag, write_vertical_align,
};
