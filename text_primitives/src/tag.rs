// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A 4-byte OpenType tag (for example `wght`, `liga`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[repr(transparent)]
pub struct Tag(u32);

impl Tag {
    /// Creates a tag from 4 bytes.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(bytes))
    }

    /// Returns this tag as 4 bytes.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Parses a tag from an ASCII string of one to four characters.
    ///
    /// Shorter names are padded with spaces, as OpenType does for tags like `cv1 `.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.is_empty() || bytes.len() > 4 {
            return None;
        }
        if !bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            return None;
        }
        let mut padded = [b' '; 4];
        padded[..bytes.len()].copy_from_slice(bytes);
        Some(Self::from_bytes(padded))
    }

    /// Returns the tag bytes together with their length once trailing padding is dropped.
    pub fn as_trimmed_bytes(&self) -> ([u8; 4], usize) {
        let bytes = self.to_bytes();
        let len = bytes.iter().rposition(|b| *b != b' ').map_or(0, |i| i + 1);
        (bytes, len)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (bytes, len) = self.as_trimmed_bytes();
        let s = core::str::from_utf8(&bytes[..len]).unwrap_or("????");
        f.write_str(s)
    }
}

/// A single OpenType feature setting (tag + value), such as `liga` = 0 to turn ligatures off.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FontFeature {
    /// The OpenType tag for this setting.
    pub tag: Tag,
    /// The setting value; `0` disables the feature, `1` enables it, larger values pick
    /// an alternate.
    pub value: i32,
}

impl FontFeature {
    /// Creates a new setting.
    pub const fn new(tag: Tag, value: i32) -> Self {
        Self { tag, value }
    }
}

#[cfg(test)]
mod tests {
    use super::{FontFeature, Tag};
    use alloc::string::ToString;

    #[test]
    fn short_tags_are_space_padded() {
        let tag = Tag::parse("f1").unwrap();
        assert_eq!(tag.to_bytes(), *b"f1  ");
        assert_eq!(tag.to_string(), "f1");
        assert_eq!(Tag::parse("kern").unwrap().to_string(), "kern");
    }

    #[test]
    fn rejects_invalid_tags() {
        assert_eq!(Tag::parse(""), None);
        assert_eq!(Tag::parse("abcde"), None);
        assert_eq!(Tag::parse("a\tb"), None);
    }

    #[test]
    fn feature_holds_value() {
        let f = FontFeature::new(Tag::from_bytes(*b"liga"), 0);
        assert_eq!(f.value, 0);
        assert_eq!(f.tag.to_bytes(), *b"liga");
    }
}
