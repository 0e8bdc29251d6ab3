// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font family lists.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Error returned when parsing a comma separated font family list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseFontFamilyError {
    at: usize,
    unterminated: bool,
}

impl ParseFontFamilyError {
    /// Returns the byte offset into the source where the error was detected.
    pub const fn byte_offset(self) -> usize {
        self.at
    }

    /// Returns `true` when a quoted name was missing its closing quote.
    pub const fn is_unterminated_string(self) -> bool {
        self.unterminated
    }
}

impl fmt::Display for ParseFontFamilyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = if self.unterminated {
            "unterminated string in font family list"
        } else {
            "empty entry in font family list"
        };
        write!(f, "{msg} at byte {}", self.at)
    }
}

impl core::error::Error for ParseFontFamilyError {}

/// An ordered list of font family names, most preferred first.
///
/// Names are stored verbatim; resolving them against installed fonts is the
/// job of the text engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct FontFamilies(Vec<String>);

impl FontFamilies {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// The family names in preference order.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Number of names in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the list has no names.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends a family name.
    pub fn push(&mut self, name: impl Into<String>) {
        self.0.push(name.into());
    }

    /// Parses a comma separated list of family names.
    ///
    /// Names may be quoted with `'` or `"`. Whitespace around entries is ignored and a
    /// trailing comma is permitted, but empty entries (such as `,,`) are rejected.
    ///
    /// ```
    /// use text_primitives::FontFamilies;
    ///
    /// let families = FontFamilies::parse("HarmonyOS Sans, 'Noto Sans CJK', serif").unwrap();
    /// assert_eq!(families.names(), &["HarmonyOS Sans", "Noto Sans CJK", "serif"]);
    /// assert!(FontFamilies::parse("a,,b").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ParseFontFamilyError> {
        let bytes = s.as_bytes();
        let mut names = Vec::new();
        let mut pos = 0;
        loop {
            while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }
            if pos >= bytes.len() {
                break;
            }
            let name = match bytes[pos] {
                quote @ (b'"' | b'\'') => {
                    let open = pos;
                    let close = s[open + 1..].find(char::from(quote)).ok_or(
                        ParseFontFamilyError {
                            at: open,
                            unterminated: true,
                        },
                    )? + open
                        + 1;
                    pos = close + 1;
                    &s[open + 1..close]
                }
                b',' => {
                    return Err(ParseFontFamilyError {
                        at: pos,
                        unterminated: false,
                    });
                }
                _ => {
                    let start = pos;
                    let end = s[start..].find(',').map_or(s.len(), |i| i + start);
                    pos = end;
                    s[start..end].trim_end()
                }
            };
            names.push(String::from(name));
            while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }
            if pos < bytes.len() {
                if bytes[pos] != b',' {
                    return Err(ParseFontFamilyError {
                        at: pos,
                        unterminated: false,
                    });
                }
                pos += 1;
            }
        }
        Ok(Self(names))
    }
}

impl<S: Into<String>> FromIterator<S> for FontFamilies {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for FontFamilies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if name.contains(',') || name.contains(' ') {
                write!(f, "'{name}'")?;
            } else {
                f.write_str(name)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::FontFamilies;
    use alloc::string::ToString;

    #[test]
    fn parse_trailing_comma_and_quotes() {
        let families = FontFamilies::parse(" \"Times New Roman\" , Arial, ").unwrap();
        assert_eq!(families.names(), &["Times New Roman", "Arial"]);
    }

    #[test]
    fn parse_errors() {
        let err = FontFamilies::parse("Arial, 'Roboto").unwrap_err();
        assert!(err.is_unterminated_string());
        assert_eq!(err.byte_offset(), 7);

        let err = FontFamilies::parse(", Arial").unwrap_err();
        assert!(!err.is_unterminated_string());
        assert_eq!(err.byte_offset(), 0);

        let err = FontFamilies::parse("'A' B").unwrap_err();
        assert_eq!(err.byte_offset(), 4);
    }

    #[test]
    fn display_requotes_names_with_spaces() {
        let families: FontFamilies = ["Noto Sans", "serif"].into_iter().collect();
        assert_eq!(families.to_string(), "'Noto Sans', serif");
        assert_eq!(FontFamilies::parse(&families.to_string()).unwrap(), families);
    }

    #[test]
    fn empty_source_is_empty_list() {
        assert!(FontFamilies::parse("   ").unwrap().is_empty());
    }
}
