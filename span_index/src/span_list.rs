// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

/// Which side of an insertion point a growing span attaches to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Affinity {
    /// Text inserted at the end of a span joins that span.
    ///
    /// A span `[s, e)` grows when `s < at <= e`.
    Upstream,
    /// Text inserted at the start of a span joins that span.
    ///
    /// A span `[s, e)` grows when `s <= at < e`.
    Downstream,
}

/// An ordered list of non-overlapping spans, each carrying an attribute.
///
/// Entries are sorted by start index. Zero-length entries ("markers") are allowed and
/// never overlap anything, but they do keep a position in the text.
///
/// All indices are code-unit offsets; the list does not own the text it describes, and
/// callers keep it in sync by calling [`insert_gap`](Self::insert_gap) and
/// [`excise`](Self::excise) whenever the text changes.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanList<A> {
    entries: Vec<(Range<usize>, A)>,
}

impl<A> Default for SpanList<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> SpanList<A> {
    /// Create an empty list.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The entries in start order.
    pub fn entries(&self) -> &[(Range<usize>, A)] {
        &self.entries
    }

    /// Iterate over `(range, attribute)` pairs in start order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Range<usize>, &A)> + '_ {
        self.entries.iter().map(|(r, a)| (r, a))
    }

    /// Iterate over the ranges in start order.
    pub fn ranges(&self) -> impl ExactSizeIterator<Item = Range<usize>> + '_ {
        self.entries.iter().map(|(r, _)| r.clone())
    }

    /// Insert an entry without touching existing ones.
    ///
    /// The entry is placed after all entries that start at or before `range.start`. The
    /// caller is responsible for it not overlapping anything already present.
    pub fn push_sorted(&mut self, range: Range<usize>, attr: A) {
        let ix = self.entries.partition_point(|(r, _)| r.start <= range.start);
        self.entries.insert(ix, (range, attr));
    }

    /// Whether some non-empty entry contains `index`.
    pub fn covers(&self, index: usize) -> bool {
        self.entries
            .iter()
            .any(|(r, _)| !r.is_empty() && r.contains(&index))
    }

    /// The first non-empty entry that contains all of `range`.
    pub fn covering(&self, range: Range<usize>) -> Option<(&Range<usize>, &A)> {
        self.entries
            .iter()
            .find(|(r, _)| !r.is_empty() && r.start <= range.start && range.end <= r.end)
            .map(|(r, a)| (r, a))
    }

    /// Non-empty entries that share at least one index with `range`, clipped to it.
    ///
    /// An empty `range` intersects nothing.
    pub fn intersecting(&self, range: Range<usize>) -> impl Iterator<Item = (Range<usize>, &A)> + '_ {
        self.entries.iter().filter_map(move |(r, a)| {
            let start = r.start.max(range.start);
            let end = r.end.min(range.end);
            (start < end).then_some((start..end, a))
        })
    }

    /// Open a gap of `len` units at `at`, as if text had been inserted there.
    ///
    /// With `grow` set, the span adjoining `at` on the given side absorbs the new text;
    /// with `None`, no span grows. Every entry that does not grow and starts at or after
    /// `at` moves right by `len`, including markers sitting exactly at `at`.
    pub fn insert_gap(&mut self, at: usize, len: usize, grow: Option<Affinity>) {
        if len == 0 {
            return;
        }
        for (range, _) in &mut self.entries {
            let grows = match grow {
                Some(Affinity::Upstream) => range.start < at && at <= range.end,
                Some(Affinity::Downstream) => range.start <= at && at < range.end,
                None => false,
            };
            if grows {
                range.end += len;
            } else if range.start >= at {
                range.start += len;
                range.end += len;
            }
        }
    }

    /// Close the gap left by deleting the text in `range`.
    ///
    /// Entries ending at or before `range.start` are untouched, entries starting at or after
    /// `range.end` move left, and entries overlapping the deleted text shrink. An entry that
    /// shrinks to nothing is dropped.
    pub fn excise(&mut self, range: Range<usize>) {
        let n = range.len();
        if n == 0 {
            return;
        }
        self.entries.retain_mut(|(r, _)| {
            if r.end <= range.start {
                return true;
            }
            if r.start >= range.end {
                r.start -= n;
                r.end -= n;
                return true;
            }
            let start = r.start.min(range.start);
            let end = if r.end > range.end {
                r.end - n
            } else {
                range.start
            };
            *r = start..end;
            start < end
        });
    }

    /// Merge runs of touching, non-empty entries whose attributes satisfy `eq`.
    pub fn coalesce(&mut self, mut eq: impl FnMut(&A, &A) -> bool) {
        let mut out: Vec<(Range<usize>, A)> = Vec::with_capacity(self.entries.len());
        for (r, a) in self.entries.drain(..) {
            if let Some((last_r, last_a)) = out.last_mut() {
                if !r.is_empty() && !last_r.is_empty() && last_r.end == r.start && eq(last_a, &a)
                {
                    last_r.end = r.end;
                    continue;
                }
            }
            out.push((r, a));
        }
        self.entries = out;
    }
}

impl<A: Clone> SpanList<A> {
    /// Split every entry that strictly contains `at` into `[s, at)` and `[at, e)`.
    ///
    /// Followed by [`insert_gap`](Self::insert_gap) with no growth, this leaves the inserted
    /// text uncovered between the two halves.
    pub fn split_at(&mut self, at: usize) {
        let Some(ix) = self
            .entries
            .iter()
            .position(|(r, _)| r.start < at && at < r.end)
        else {
            return;
        };
        let (range, attr) = &mut self.entries[ix];
        let tail = (at..range.end, attr.clone());
        range.end = at;
        self.entries.insert(ix + 1, tail);
    }

    /// Remove attribute coverage from `range` without touching the text.
    ///
    /// Entries straddling an edge of `range` are split, keeping the parts outside it.
    /// Markers strictly inside `range` are dropped.
    pub fn cut(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let mut out = Vec::with_capacity(self.entries.len() + 1);
        for (r, a) in self.entries.drain(..) {
            if r.end <= range.start || r.start >= range.end {
                out.push((r, a));
                continue;
            }
            if r.start < range.start {
                out.push((r.start..range.start, a.clone()));
            }
            if r.end > range.end {
                out.push((range.end..r.end, a));
            }
        }
        self.entries = out;
    }

    /// Place `attr` over `range`, replacing whatever was there.
    pub fn overlay(&mut self, range: Range<usize>, attr: A) {
        self.cut(range.clone());
        self.push_sorted(range, attr);
    }

    /// Place `attr` over `range`, combining it with existing coverage.
    ///
    /// Where an existing entry overlaps `range`, the overlapping part becomes
    /// `merge(existing, attr)`; the rest of `range` gets `attr` as is. Parts of existing
    /// entries outside `range` keep their attribute.
    pub fn overlay_with(
        &mut self,
        range: Range<usize>,
        attr: A,
        mut merge: impl FnMut(&A, &A) -> A,
    ) {
        if range.is_empty() {
            self.push_sorted(range, attr);
            return;
        }
        let mut merged: Vec<(Range<usize>, A)> = Vec::new();
        let mut out = Vec::with_capacity(self.entries.len() + 2);
        for (r, a) in self.entries.drain(..) {
            if r.end <= range.start || r.start >= range.end {
                out.push((r, a));
                continue;
            }
            if r.is_empty() {
                continue;
            }
            let lo = r.start.max(range.start);
            let hi = r.end.min(range.end);
            merged.push((lo..hi, merge(&a, &attr)));
            if r.start < range.start {
                out.push((r.start..range.start, a.clone()));
            }
            if r.end > range.end {
                out.push((range.end..r.end, a));
            }
        }
        let mut cursor = range.start;
        for (r, _) in &merged {
            if cursor < r.start {
                out.push((cursor..r.start, attr.clone()));
            }
            cursor = r.end;
        }
        if cursor < range.end {
            out.push((cursor..range.end, attr));
        }
        out.extend(merged);
        out.sort_by_key(|(r, _)| r.start);
        self.entries = out;
    }

    /// The entries visible in `range`, clipped and rebased so that `range.start` becomes 0.
    ///
    /// Markers are kept when they sit anywhere in `range.start..=range.end`.
    pub fn slice(&self, range: Range<usize>) -> Self {
        let entries = self
            .entries
            .iter()
            .filter_map(|(r, a)| {
                if r.is_empty() {
                    return (range.start <= r.start && r.start <= range.end).then(|| {
                        let p = r.start - range.start;
                        (p..p, a.clone())
                    });
                }
                let start = r.start.max(range.start);
                let end = r.end.min(range.end);
                (start < end).then(|| (start - range.start..end - range.start, a.clone()))
            })
            .collect();
        Self { entries }
    }
}

impl<A> FromIterator<(Range<usize>, A)> for SpanList<A> {
    /// Collect entries, sorting them by start.
    ///
    /// Overlapping input is kept as given; use [`SpanList::overlay`] to resolve overlaps.
    fn from_iter<I: IntoIterator<Item = (Range<usize>, A)>>(iter: I) -> Self {
        let mut entries: Vec<_> = iter.into_iter().collect();
        entries.sort_by_key(|(r, _)| r.start);
        Self { entries }
    }
}

impl<'a, A> IntoIterator for &'a SpanList<A> {
    type Item = &'a (Range<usize>, A);
    type IntoIter = core::slice::Iter<'a, (Range<usize>, A)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Affinity, SpanList};
    use alloc::vec;
    use alloc::vec::Vec;
    use core::ops::Range;

    fn list(entries: &[(Range<usize>, char)]) -> SpanList<char> {
        entries.iter().cloned().collect()
    }

    fn dump(list: &SpanList<char>) -> Vec<(Range<usize>, char)> {
        list.entries().to_vec()
    }

    #[test]
    fn overlay_cuts_existing_coverage() {
        let mut l = list(&[(0..6, 'a')]);
        l.overlay(2..4, 'b');
        assert_eq!(dump(&l), vec![(0..2, 'a'), (2..4, 'b'), (4..6, 'a')]);

        l.overlay(1..5, 'c');
        assert_eq!(dump(&l), vec![(0..1, 'a'), (1..5, 'c'), (5..6, 'a')]);
    }

    #[test]
    fn overlay_with_merges_only_the_overlap() {
        let mut l = list(&[(0..3, 'a'), (5..8, 'b')]);
        l.overlay_with(2..6, 'x', |old, new| if *old == 'a' { 'A' } else { *new });
        assert_eq!(
            dump(&l),
            vec![(0..2, 'a'), (2..3, 'A'), (3..5, 'x'), (5..6, 'x'), (6..8, 'b')]
        );
    }

    #[test]
    fn cut_splits_straddling_entries() {
        let mut l = list(&[(0..4, 'a'), (4..4, 'm'), (5..9, 'b')]);
        l.cut(2..6);
        assert_eq!(dump(&l), vec![(0..2, 'a'), (6..9, 'b')]);
    }

    #[test]
    fn insert_gap_upstream_extends_the_span_before() {
        let mut l = list(&[(0..3, 'a'), (3..6, 'b')]);
        l.insert_gap(3, 2, Some(Affinity::Upstream));
        assert_eq!(dump(&l), vec![(0..5, 'a'), (5..8, 'b')]);
    }

    #[test]
    fn insert_gap_downstream_extends_the_span_after() {
        let mut l = list(&[(0..3, 'a'), (3..6, 'b')]);
        l.insert_gap(3, 2, Some(Affinity::Downstream));
        assert_eq!(dump(&l), vec![(0..3, 'a'), (3..8, 'b')]);

        l.insert_gap(0, 1, Some(Affinity::Downstream));
        assert_eq!(dump(&l), vec![(0..4, 'a'), (4..9, 'b')]);
    }

    #[test]
    fn split_then_gap_leaves_a_hole() {
        let mut l = list(&[(0..8, 'a'), (8..10, 'b')]);
        l.split_at(2);
        l.split_at(8);
        assert_eq!(dump(&l), vec![(0..2, 'a'), (2..8, 'a'), (8..10, 'b')]);

        l.insert_gap(2, 3, None);
        assert_eq!(dump(&l), vec![(0..2, 'a'), (5..11, 'a'), (11..13, 'b')]);
    }

    #[test]
    fn insert_gap_without_growth_only_shifts() {
        let mut l = list(&[(1..2, 'p'), (2..2, 'm'), (4..5, 'q')]);
        l.insert_gap(2, 3, None);
        assert_eq!(dump(&l), vec![(1..2, 'p'), (5..5, 'm'), (7..8, 'q')]);
    }

    #[test]
    fn excise_shrinks_shifts_and_drops() {
        let mut l = list(&[(0..3, 'a'), (3..5, 'b'), (5..5, 'm'), (5..9, 'c')]);
        l.excise(2..6);
        // The marker at 5 sat inside the deleted text.
        assert_eq!(dump(&l), vec![(0..2, 'a'), (2..5, 'c')]);
    }

    #[test]
    fn excise_keeps_entries_ending_at_start() {
        let mut l = list(&[(0..2, 'a'), (2..2, 'm'), (2..4, 'b')]);
        l.excise(2..3);
        assert_eq!(dump(&l), vec![(0..2, 'a'), (2..2, 'm'), (2..3, 'b')]);
    }

    #[test]
    fn coalesce_merges_touching_equal_entries() {
        let mut l = list(&[(0..2, 'a'), (2..4, 'a'), (4..6, 'b'), (7..8, 'b')]);
        l.coalesce(|a, b| a == b);
        assert_eq!(dump(&l), vec![(0..4, 'a'), (4..6, 'b'), (7..8, 'b')]);
    }

    #[test]
    fn intersecting_clips() {
        let l = list(&[(0..3, 'a'), (3..3, 'm'), (3..8, 'b')]);
        let hits: Vec<_> = l.intersecting(2..5).map(|(r, a)| (r, *a)).collect();
        assert_eq!(hits, vec![(2..3, 'a'), (3..5, 'b')]);
        assert_eq!(l.intersecting(4..4).count(), 0);
    }

    #[test]
    fn covering_and_covers() {
        let l = list(&[(1..5, 'a')]);
        assert_eq!(l.covering(2..4).map(|(_, a)| *a), Some('a'));
        assert!(l.covering(0..2).is_none());
        assert!(l.covers(1));
        assert!(!l.covers(5));
    }

    #[test]
    fn slice_rebases_and_keeps_markers_at_the_edges() {
        let l = list(&[(0..4, 'a'), (4..4, 'm'), (6..6, 'n'), (5..9, 'b')]);
        let s = l.slice(2..6);
        assert_eq!(dump(&s), vec![(0..2, 'a'), (2..2, 'm'), (3..4, 'b'), (4..4, 'n')]);
    }

    #[test]
    fn push_sorted_keeps_order() {
        let mut l = SpanList::new();
        l.push_sorted(4..6, 'b');
        l.push_sorted(0..2, 'a');
        l.push_sorted(2..2, 'm');
        assert_eq!(dump(&l), vec![(0..2, 'a'), (2..2, 'm'), (4..6, 'b')]);
    }
}
