/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Pixel layouts supported by the library

/// The in-memory and on-disk layout of a single pixel.
///
/// Both layouts are stored in blue-green-red channel order, matching the
/// byte order inside BMP pixel data.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PixelFormat {
    /// Three bytes per pixel, no alpha
    Bgr,
    /// Four bytes per pixel with an alpha channel
    Bgra,
}

impl PixelFormat {
    /// Number of bytes a single pixel occupies
    pub const fn num_components(self) -> usize {
        match self {
            PixelFormat::Bgr => 3,
            PixelFormat::Bgra => 4,
        }
    }

    /// Bits per pixel as stored in a BMP information header
    pub const fn bits_per_pixel(self) -> u16 {
        match self {
            PixelFormat::Bgr => 24,
            PixelFormat::Bgra => 32,
        }
    }

    /// Whether the layout carries an alpha channel
    pub const fn has_alpha(self) -> bool {
        matches!(self, PixelFormat::Bgra)
    }
}
