// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;

/// A UTF-16 text buffer that knows where its characters start.
///
/// All lengths and indices are counted in UTF-16 code units.
pub trait TextStorage {
    /// The length of the underlying text in code units.
    fn len(&self) -> usize;

    /// Return `true` if the underlying text is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return whether `index` is a character boundary in the text.
    ///
    /// Every index in `0..=len` is a boundary except one that falls between
    /// the high and low halves of a surrogate pair.
    fn is_char_boundary(&self, index: usize) -> bool;
}

const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

fn utf16_boundary(units: &[u16], index: usize) -> bool {
    if index == 0 || index == units.len() {
        return true;
    }
    match (units.get(index - 1), units.get(index)) {
        (Some(&before), Some(&after)) => !(is_high_surrogate(before) && is_low_surrogate(after)),
        _ => false,
    }
}

impl TextStorage for [u16] {
    fn len(&self) -> usize {
        <[u16]>::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        utf16_boundary(self, index)
    }
}

impl TextStorage for Vec<u16> {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        utf16_boundary(self, index)
    }
}

impl TextStorage for Arc<[u16]> {
    fn len(&self) -> usize {
        <[u16]>::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        utf16_boundary(self, index)
    }
}

impl<T: TextStorage + ?Sized> TextStorage for &T {
    fn len(&self) -> usize {
        T::len(self)
    }

    fn is_char_boundary(&self, index: usize) -> bool {
        T::is_char_boundary(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::TextStorage;
    use alloc::sync::Arc;
    use alloc::vec::Vec;

    fn assert_boundaries<T: TextStorage + ?Sized>(t: &T, trues: &[usize], falses: &[usize]) {
        for &i in trues {
            assert!(t.is_char_boundary(i), "index {i} should be boundary");
        }
        for &i in falses {
            assert!(!t.is_char_boundary(i), "index {i} should not be boundary");
        }
    }

    #[test]
    fn is_char_boundary_bmp() {
        let units: Vec<u16> = "a当b".encode_utf16().collect();
        assert_boundaries(&units, &[0, 1, 2, 3], &[4]);
    }

    #[test]
    fn is_char_boundary_surrogate_pair() {
        let units: Vec<u16> = "x😀y".encode_utf16().collect();
        assert_eq!(units.len(), 4);
        assert_boundaries(&units, &[0, 1, 3, 4], &[2, 5]);

        let arc: Arc<[u16]> = Arc::from(units.as_slice());
        assert_boundaries(&arc, &[0, 1, 3, 4], &[2]);

        assert_boundaries(units.as_slice(), &[0, 1, 3, 4], &[2]);
    }

    #[test]
    fn lone_surrogates_are_boundaries() {
        // A low surrogate without its high half does not join anything.
        let units = [0x0061, 0xDC00, 0xD800, 0x0062];
        assert_boundaries(&units[..], &[0, 1, 2, 3, 4], &[]);
    }
}
