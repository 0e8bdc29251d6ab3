// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional `bytemuck` trait impls.

#![allow(
    unsafe_code,
    reason = "The `bytemuck` marker traits are `unsafe` and require `unsafe impl`."
)]

use crate::Color;
use bytemuck::{Pod, Zeroable};

// Safety: `Color` is `repr(transparent)` over `u32`, so every bit pattern is valid.
unsafe impl Zeroable for Color {}

// Safety: `Color` is `repr(transparent)` over `u32`, has no padding and is `Copy + 'static`.
unsafe impl Pod for Color {}

#[cfg(test)]
mod tests {
    use crate::Color;
    use bytemuck::Zeroable;

    #[test]
    fn zeroable_is_transparent() {
        assert_eq!(Color::zeroed(), Color::TRANSPARENT);
    }

    #[test]
    fn cast_slice_reads_packed_argb() {
        let raw: [u32; 2] = [0xff00_0000, 0xffff_0000];
        let colors: &[Color] = bytemuck::cast_slice(&raw);
        assert_eq!(colors, &[Color::BLACK, Color::RED]);
        assert_eq!(bytemuck::bytes_of(&Color::BLUE).len(), 4);
    }
}
