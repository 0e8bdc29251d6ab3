// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A non-premultiplied sRGB color packed as `0xAARRGGBB`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Color(u32);

impl Color {
    /// Fully transparent black. This is the default value.
    pub const TRANSPARENT: Self = Self(0x0000_0000);

    /// Opaque black.
    pub const BLACK: Self = Self(0xff00_0000);

    /// Opaque white.
    pub const WHITE: Self = Self(0xffff_ffff);

    /// Opaque red.
    pub const RED: Self = Self(0xffff_0000);

    /// Opaque green.
    pub const GREEN: Self = Self(0xff00_ff00);

    /// Opaque blue.
    pub const BLUE: Self = Self(0xff00_00ff);

    /// Opaque mid gray.
    pub const GRAY: Self = Self(0xffc0_c0c0);

    /// Creates a color from a packed `0xAARRGGBB` value.
    pub const fn from_argb_u32(value: u32) -> Self {
        Self(value)
    }

    /// Creates a color from its four channels.
    pub const fn from_argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self(u32::from_be_bytes([alpha, red, green, blue]))
    }

    /// Creates an opaque color from its three color channels.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_argb(0xff, red, green, blue)
    }

    /// Returns the packed `0xAARRGGBB` value.
    pub const fn to_argb_u32(self) -> u32 {
        self.0
    }

    /// Returns the channels in `[alpha, red, green, blue]` order.
    pub const fn to_argb_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// The alpha channel.
    pub const fn alpha(self) -> u8 {
        self.to_argb_bytes()[0]
    }

    /// The red channel.
    pub const fn red(self) -> u8 {
        self.to_argb_bytes()[1]
    }

    /// The green channel.
    pub const fn green(self) -> u8 {
        self.to_argb_bytes()[2]
    }

    /// The blue channel.
    pub const fn blue(self) -> u8 {
        self.to_argb_bytes()[3]
    }

    /// Returns this color with the alpha channel replaced.
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self::from_argb(alpha, self.red(), self.green(), self.blue())
    }

    /// Parses `#RRGGBB` or `#AARRGGBB` hex notation.
    ///
    /// ```
    /// use text_primitives::Color;
    ///
    /// assert_eq!(Color::parse("#ff0000"), Some(Color::RED));
    /// assert_eq!(Color::parse("#80ff0000"), Some(Color::RED.with_alpha(0x80)));
    /// assert_eq!(Color::parse("red"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        match hex.len() {
            6 => Some(Self(0xff00_0000 | value)),
            8 => Some(Self(value)),
            _ => None,
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({:#010x})", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}
