// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Span Index keeps styled ranges consistent with a UTF-16 text buffer that is being edited.
//!
//! The building blocks are:
//!
//! - [`TextStorage`]: UTF-16 code-unit buffers and their surrogate-pair boundaries.
//! - [`SpanList`]: an ordered list of non-overlapping ranges, each carrying an attribute, with the
//!   re-indexing rules for inserted and removed text and last-writer-wins overlays.
//! - [`SpanSegments`]: a sweep over many ranges that yields the contiguous runs between all of
//!   their boundaries, together with the ranges active in each run.
//!
//! ## Example
//!
//! ```
//! use span_index::{Affinity, SpanList};
//!
//! let mut bold = SpanList::new();
//! bold.overlay(2..5, "bold");
//!
//! // Typing inside the run extends it.
//! bold.insert_gap(3, 2, Some(Affinity::Downstream));
//! assert_eq!(bold.ranges().collect::<Vec<_>>(), [2..7]);
//!
//! // Deleting across its start shortens it.
//! bold.excise(0..4);
//! assert_eq!(bold.ranges().collect::<Vec<_>>(), [0..3]);
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

mod segments;
mod span_list;
mod text_storage;

pub use crate::segments::{ActiveRanges, ActiveRangesIter, SegmentsWorkspace, SpanSegments};
pub use crate::span_list::{Affinity, SpanList};
pub use crate::text_storage::TextStorage;
