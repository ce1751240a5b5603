/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! The packed color value type
//!
//! A [`Color`] packs four 8-bit channels into one `u32` as
//! `blue << 24 | green << 16 | red << 8 | alpha`. The packing is part of
//! the public contract: the named constants below keep their numeric
//! values (`BLACK` is `0x0000_00ff`, `WHITE` is `0xffff_ffff`) and any
//! round trip through [`from_rgba`](Color::from_rgba) and the channel
//! getters is lossless.

/// A 32-bit packed RGBA color.
///
/// Colors are plain values, they are never owned by a canvas.
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug)]
pub struct Color(u32);

impl Color {
    /// Fully transparent black, also the sentinel for invalid reads
    pub const CLEAR: Color = Color(0x0000_0000);
    pub const BLACK: Color = Color(0x0000_00ff);
    pub const WHITE: Color = Color(0xffff_ffff);
    pub const RED: Color = Color(0x0000_ffff);
    pub const DARK_RED: Color = Color(0x0000_80ff);
    pub const GREEN: Color = Color(0x00ff_00ff);
    pub const DARK_GREEN: Color = Color(0x0080_00ff);
    pub const BLUE: Color = Color(0xff00_00ff);
    pub const DARK_BLUE: Color = Color(0x8000_00ff);
    pub const PURPLE: Color = Color(0xff00_ffff);
    pub const DARK_PURPLE: Color = Color(0x8000_80ff);
    pub const YELLOW: Color = Color(0x00ff_ffff);
    pub const ORANGE: Color = Color(0x00a5_ffff);
    pub const CYAN: Color = Color(0xffff_00ff);

    /// Create a color from its packed `u32` representation
    pub const fn from_u32(bits: u32) -> Color {
        Color(bits)
    }

    /// Return the packed `u32` representation
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Pack four channel values into a color
    pub const fn from_rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Color {
        Color((blue as u32) << 24 | (green as u32) << 16 | (red as u32) << 8 | alpha as u32)
    }

    /// Pack three channel values into a fully opaque color
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Color {
        Color::from_rgba(red, green, blue, u8::MAX)
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn blue(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn alpha(self) -> u8 {
        self.0 as u8
    }

    /// Return this color with the red channel replaced
    pub const fn with_red(self, red: u8) -> Color {
        Color(self.0 & !0x0000_ff00 | (red as u32) << 8)
    }

    /// Return this color with the green channel replaced
    pub const fn with_green(self, green: u8) -> Color {
        Color(self.0 & !0x00ff_0000 | (green as u32) << 16)
    }

    /// Return this color with the blue channel replaced
    pub const fn with_blue(self, blue: u8) -> Color {
        Color(self.0 & !0xff00_0000 | (blue as u32) << 24)
    }

    /// Return this color with the alpha channel replaced
    pub const fn with_alpha(self, alpha: u8) -> Color {
        Color(self.0 & !0x0000_00ff | alpha as u32)
    }

    /// Reduce the color to its channel mean, keeping alpha
    pub const fn grayscale(self) -> Color {
        let mean = ((self.red() as u16 + self.green() as u16 + self.blue() as u16) / 3) as u8;
        Color::from_rgba(mean, mean, mean, self.alpha())
    }

    /// Invert the red, green and blue channels, keeping alpha
    pub const fn invert(self) -> Color {
        Color::from_rgba(
            u8::MAX - self.red(),
            u8::MAX - self.green(),
            u8::MAX - self.blue(),
            self.alpha(),
        )
    }

    /// Channel-wise average of two colors
    pub const fn average(self, other: Color) -> Color {
        Color::from_rgba(
            ((self.red() as u16 + other.red() as u16) / 2) as u8,
            ((self.green() as u16 + other.green() as u16) / 2) as u8,
            ((self.blue() as u16 + other.blue() as u16) / 2) as u8,
            ((self.alpha() as u16 + other.alpha() as u16) / 2) as u8,
        )
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Color(value)
    }
}

impl From<Color> for u32 {
    fn from(value: Color) -> Self {
        value.0
    }
}
