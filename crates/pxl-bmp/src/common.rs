/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pxl_core::format::PixelFormat;

/// BMP compression schemes this library understands.
///
/// 24-bit images use [`Rgb`](BmpCompression::Rgb), 32-bit images use
/// [`Bitfields`](BmpCompression::Bitfields) with fixed BGRA channel
/// masks.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BmpCompression {
    Rgb,
    Bitfields
}

impl BmpCompression {
    pub fn from_u32(value: u32) -> Option<BmpCompression> {
        match value {
            0 => Some(BmpCompression::Rgb),
            3 => Some(BmpCompression::Bitfields),
            _ => None
        }
    }

    pub fn to_u32(self) -> u32 {
        match self {
            BmpCompression::Rgb => 0,
            BmpCompression::Bitfields => 3
        }
    }
}

/// 72 DPI expressed in pixels per meter, written to the resolution
/// fields of every encoded header
pub const PIXELS_PER_METER: u32 = 2835;

/// Channel masks for 32-bit BITFIELDS images, in file order B,G,R,A
pub const RED_MASK: u32 = 0x00ff_0000;
pub const GREEN_MASK: u32 = 0x0000_ff00;
pub const BLUE_MASK: u32 = 0x0000_00ff;
pub const ALPHA_MASK: u32 = 0xff00_0000;

/// The `LCS_WINDOWS_COLOR_SPACE` tag, the bytes ` niW` once written
/// little endian
pub const LCS_WINDOWS: u32 = 0x5769_6E20;

/// Information header size for the given layout, 40 for the v3 header
/// carried by 24-bit images and 108 for the v4 header carried by 32-bit
/// images
pub fn dib_header_size(format: PixelFormat) -> u32 {
    match format {
        PixelFormat::Bgr => 40,
        PixelFormat::Bgra => 108
    }
}

/// Offset from the start of the file to the pixel data, the 14-byte
/// file header plus the information header
pub fn data_offset(format: PixelFormat) -> u32 {
    14 + dib_header_size(format)
}

/// Number of padding bytes after each row of a 24-bit image.
///
/// Rows are aligned to four bytes, 32-bit images never need padding.
pub fn row_padding(width: usize) -> usize {
    (4 - (width * 3) % 4) % 4
}

#[cfg(test)]
mod tests {
    use super::row_padding;

    #[test]
    fn padding_cycle() {
        assert_eq!(row_padding(1), 1);
        assert_eq!(row_padding(2), 2);
        assert_eq!(row_padding(3), 3);
        assert_eq!(row_padding(4), 0);
        assert_eq!(row_padding(5), 1);
    }
}
