// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary segmentation over a set of possibly overlapping ranges.
//!
//! Given the ranges of every span on a piece of text, this module produces non-overlapping,
//! contiguous segments covering the text and reports which ranges are active over each one.

use alloc::vec::Vec;
use core::ops::Range;

fn build_segment_state(len: usize, ranges: &[Range<usize>], workspace: &mut SegmentsWorkspace) {
    workspace.boundaries.clear();
    workspace.boundaries.reserve(2 + ranges.len().saturating_mul(2));
    workspace.boundaries.push(0);
    workspace.boundaries.push(len);
    for range in ranges.iter().filter(|r| !r.is_empty()) {
        workspace.boundaries.push(range.start.min(len));
        workspace.boundaries.push(range.end.min(len));
    }
    workspace.boundaries.sort_unstable();
    workspace.boundaries.dedup();

    let boundary_count = workspace.boundaries.len();

    workspace.start_counts.clear();
    workspace.start_counts.resize(boundary_count, 0);
    workspace.end_counts.clear();
    workspace.end_counts.resize(boundary_count, 0);
    workspace.span_build.clear();
    workspace.span_build.reserve(ranges.len());

    for (id, range) in ranges.iter().enumerate() {
        let (Ok(start_boundary), Ok(end_boundary)) = (
            workspace.boundaries.binary_search(&range.start.min(len)),
            workspace.boundaries.binary_search(&range.end.min(len)),
        ) else {
            continue;
        };
        if start_boundary >= end_boundary {
            continue;
        }

        workspace.span_build.push((id, start_boundary, end_boundary));
        workspace.start_counts[start_boundary] += 1;
        workspace.end_counts[end_boundary] += 1;
    }

    prefix_offsets(&workspace.start_counts, &mut workspace.start_offsets);
    prefix_offsets(&workspace.end_counts, &mut workspace.end_offsets);

    workspace.start_events.clear();
    workspace
        .start_events
        .resize(workspace.start_offsets[boundary_count], 0);
    workspace.end_events.clear();
    workspace
        .end_events
        .resize(workspace.end_offsets[boundary_count], 0);

    // Reuse counts as per-boundary write cursors.
    workspace.start_counts.fill(0);
    workspace.end_counts.fill(0);
    for &(id, start_boundary, end_boundary) in &workspace.span_build {
        let start_ix = workspace.start_offsets[start_boundary] + workspace.start_counts[start_boundary];
        workspace.start_events[start_ix] = id;
        workspace.start_counts[start_boundary] += 1;

        let end_ix = workspace.end_offsets[end_boundary] + workspace.end_counts[end_boundary];
        workspace.end_events[end_ix] = id;
        workspace.end_counts[end_boundary] += 1;
    }

    workspace.active.clear();
}

fn prefix_offsets(counts: &[usize], offsets: &mut Vec<usize>) {
    offsets.clear();
    offsets.reserve(counts.len() + 1);
    offsets.push(0);
    let mut cursor = 0;
    for &count in counts {
        cursor += count;
        offsets.push(cursor);
    }
}

/// Reusable allocation workspace for segmentation.
#[derive(Clone, Debug, Default)]
pub struct SegmentsWorkspace {
    boundaries: Vec<usize>,
    start_counts: Vec<usize>,
    end_counts: Vec<usize>,
    start_offsets: Vec<usize>,
    start_events: Vec<usize>,
    end_offsets: Vec<usize>,
    end_events: Vec<usize>,
    span_build: Vec<(usize, usize, usize)>,
    active: Vec<usize>,
}

impl SegmentsWorkspace {
    /// Create an empty workspace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Segment `0..len` by the boundaries of `ranges`.
    ///
    /// Ranges are identified by their position in `ranges`.
    pub fn segments<'w, 'r>(
        &'w mut self,
        len: usize,
        ranges: &'r [Range<usize>],
    ) -> SpanSegments<'w, 'r> {
        build_segment_state(len, ranges, self);

        SpanSegments {
            ranges,
            workspace: self,
            index: 0,
        }
    }
}

/// Iterator over contiguous segments of a text.
///
/// Each yielded item is a non-empty, non-overlapping range. The ranges active over the
/// yielded segment are exposed through [`SpanSegments::active`].
///
/// # Examples
///
/// ```
/// use span_index::SegmentsWorkspace;
///
/// let ranges = [0..2, 1..5];
/// let mut workspace = SegmentsWorkspace::new();
/// let mut segments = workspace.segments(5, &ranges);
///
/// assert_eq!(segments.next(), Some(0..1));
/// let ids: Vec<_> = segments.active().iter().map(|(id, _)| id).collect();
/// assert_eq!(ids, [0]);
///
/// assert_eq!(segments.next(), Some(1..2));
/// let ids: Vec<_> = segments.active().iter().map(|(id, _)| id).collect();
/// assert_eq!(ids, [0, 1]);
///
/// assert_eq!(segments.next(), Some(2..5));
/// assert_eq!(segments.next(), None);
/// ```
///
/// # Implementation notes
///
/// Zero-length ranges neither split segments nor appear in the active set. An empty text
/// yields no segments.
#[derive(Debug)]
pub struct SpanSegments<'w, 'r> {
    ranges: &'r [Range<usize>],
    workspace: &'w mut SegmentsWorkspace,
    index: usize,
}

impl<'r> SpanSegments<'_, 'r> {
    fn update_active_for_boundary(&mut self, boundary_index: usize) {
        let end_range = self.workspace.end_offsets[boundary_index]
            ..self.workspace.end_offsets[boundary_index + 1];
        for &id in &self.workspace.end_events[end_range] {
            if let Ok(ix) = self.workspace.active.binary_search(&id) {
                self.workspace.active.remove(ix);
            }
        }

        let start_range = self.workspace.start_offsets[boundary_index]
            ..self.workspace.start_offsets[boundary_index + 1];
        for &id in &self.workspace.start_events[start_range] {
            if let Err(ix) = self.workspace.active.binary_search(&id) {
                self.workspace.active.insert(ix, id);
            }
        }
    }

    /// Returns the ranges active for the most recently yielded segment.
    ///
    /// Before the first [`Iterator::next`] call, and after exhaustion, this is empty.
    pub fn active(&self) -> ActiveRanges<'_, 'r> {
        ActiveRanges {
            active_ids: &self.workspace.active,
            ranges: self.ranges,
        }
    }
}

impl Iterator for SpanSegments<'_, '_> {
    type Item = Range<usize>;

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len();
        (remaining, Some(remaining))
    }

    fn next(&mut self) -> Option<Self::Item> {
        if self.index + 1 < self.workspace.boundaries.len() {
            self.update_active_for_boundary(self.index);
            let start = self.workspace.boundaries[self.index];
            let end = self.workspace.boundaries[self.index + 1];
            self.index += 1;
            debug_assert!(start < end, "boundaries are sorted + deduped");

            return Some(start..end);
        }
        self.workspace.active.clear();
        None
    }
}

impl ExactSizeIterator for SpanSegments<'_, '_> {
    fn len(&self) -> usize {
        // Remaining segments are remaining adjacent boundary pairs: [i, i + 1).
        self.workspace
            .boundaries
            .len()
            .saturating_sub(self.index + 1)
    }
}

/// The ranges active over a particular segment, in ascending id order.
#[derive(Clone, Debug)]
pub struct ActiveRanges<'s, 'r> {
    active_ids: &'s [usize],
    ranges: &'r [Range<usize>],
}

/// Iterator over active ranges, yielding `(id, &range)`.
#[derive(Clone, Debug)]
pub struct ActiveRangesIter<'s, 'r> {
    ids: core::slice::Iter<'s, usize>,
    ranges: &'r [Range<usize>],
}

impl<'r> Iterator for ActiveRangesIter<'_, 'r> {
    type Item = (usize, &'r Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        let &id = self.ids.next()?;
        Some((id, self.ranges.get(id)?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl ExactSizeIterator for ActiveRangesIter<'_, '_> {}

impl DoubleEndedIterator for ActiveRangesIter<'_, '_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let &id = self.ids.next_back()?;
        Some((id, self.ranges.get(id)?))
    }
}

impl<'r> ActiveRanges<'_, 'r> {
    /// Iterate over the active ranges in ascending id order.
    pub fn iter(&self) -> ActiveRangesIter<'_, 'r> {
        ActiveRangesIter {
            ids: self.active_ids.iter(),
            ranges: self.ranges,
        }
    }

    /// The ids of the active ranges.
    pub fn ids(&self) -> &[usize] {
        self.active_ids
    }

    /// Returns `true` if no ranges are active in this segment.
    pub fn is_empty(&self) -> bool {
        self.active_ids.is_empty()
    }

    /// Returns the number of active ranges.
    pub fn len(&self) -> usize {
        self.active_ids.len()
    }
}

impl<'active, 'r> IntoIterator for &'active ActiveRanges<'_, 'r> {
    type Item = (usize, &'r Range<usize>);
    type IntoIter = ActiveRangesIter<'active, 'r>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
