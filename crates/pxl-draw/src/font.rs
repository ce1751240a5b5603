/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! The built-in 8x5 bitmap font
//!
//! Each glyph is eight row bytes with the five low bits used, bit 4 is
//! the leftmost column. Covers ASCII letters, digits and punctuation,
//! anything else renders as a question mark.

/// Eight row bytes of a glyph, only the low five bits of each are drawn
pub type Glyph = [u8; 8];

/// The fallback glyph for characters outside the font
pub const UNKNOWN: &Glyph = &[0x0E, 0x01, 0x0E, 0x10, 0x10, 0x0E, 0x00, 0x04];

/// Look up the glyph for a character
pub fn glyph(ch: char) -> &'static Glyph {
    match ch {
        'A' => &[0x04, 0x0A, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => &[0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x11, 0x1E],
        'C' => &[0x0E, 0x11, 0x10, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => &[0x1C, 0x12, 0x11, 0x11, 0x11, 0x11, 0x12, 0x1C],
        'E' => &[0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10, 0x1F],
        'F' => &[0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10, 0x10],
        'G' => &[0x0E, 0x11, 0x11, 0x10, 0x12, 0x11, 0x11, 0x0E],
        'H' => &[0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11, 0x11],
        'I' => &[0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => &[0x1F, 0x01, 0x01, 0x01, 0x01, 0x11, 0x11, 0x0E],
        'K' => &[0x11, 0x12, 0x14, 0x1C, 0x14, 0x12, 0x12, 0x11],
        'L' => &[0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => &[0x11, 0x1B, 0x15, 0x11, 0x11, 0x11, 0x11, 0x11],
        'N' => &[0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11, 0x11],
        'O' => &[0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => &[0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10, 0x10],
        'Q' => &[0x0E, 0x11, 0x11, 0x11, 0x11, 0x15, 0x13, 0x0F],
        'R' => &[0x1E, 0x11, 0x11, 0x1E, 0x18, 0x14, 0x12, 0x11],
        'S' => &[0x0E, 0x11, 0x10, 0x0E, 0x01, 0x01, 0x11, 0x0E],
        'T' => &[0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => &[0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => &[0x11, 0x11, 0x11, 0x0A, 0x0A, 0x0A, 0x04, 0x04],
        'W' => &[0x11, 0x11, 0x11, 0x11, 0x11, 0x15, 0x1B, 0x11],
        'X' => &[0x11, 0x0A, 0x0A, 0x04, 0x04, 0x0A, 0x0A, 0x11],
        'Y' => &[0x11, 0x0A, 0x0A, 0x04, 0x04, 0x04, 0x04, 0x04],
        'Z' => &[0x1F, 0x01, 0x02, 0x04, 0x04, 0x08, 0x10, 0x1F],

        'a' => &[0x00, 0x00, 0x00, 0x0F, 0x11, 0x11, 0x13, 0x0F],
        'b' => &[0x10, 0x10, 0x10, 0x1E, 0x11, 0x11, 0x11, 0x0E],
        'c' => &[0x00, 0x00, 0x00, 0x0F, 0x10, 0x10, 0x10, 0x0F],
        'd' => &[0x01, 0x01, 0x01, 0x0F, 0x11, 0x11, 0x11, 0x0F],
        'e' => &[0x00, 0x00, 0x00, 0x0E, 0x11, 0x1E, 0x10, 0x0E],
        'f' => &[0x03, 0x04, 0x04, 0x0E, 0x04, 0x04, 0x04, 0x04],
        'g' => &[0x00, 0x00, 0x00, 0x0E, 0x11, 0x0F, 0x01, 0x0E],
        'h' => &[0x10, 0x10, 0x10, 0x1E, 0x11, 0x11, 0x11, 0x11],
        'i' => &[0x00, 0x00, 0x04, 0x00, 0x04, 0x04, 0x04, 0x04],
        'j' => &[0x00, 0x00, 0x02, 0x00, 0x02, 0x02, 0x0A, 0x04],
        'k' => &[0x10, 0x10, 0x10, 0x11, 0x16, 0x18, 0x16, 0x11],
        'l' => &[0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x02],
        'm' => &[0x00, 0x00, 0x00, 0x0A, 0x15, 0x15, 0x11, 0x11],
        'n' => &[0x00, 0x00, 0x00, 0x1F, 0x09, 0x09, 0x09, 0x09],
        'o' => &[0x00, 0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E],
        'p' => &[0x00, 0x00, 0x00, 0x0E, 0x11, 0x1E, 0x10, 0x10],
        'q' => &[0x00, 0x00, 0x00, 0x0E, 0x11, 0x0F, 0x01, 0x01],
        'r' => &[0x00, 0x00, 0x00, 0x0A, 0x0C, 0x08, 0x08, 0x08],
        's' => &[0x00, 0x00, 0x00, 0x0E, 0x10, 0x0E, 0x01, 0x0E],
        't' => &[0x04, 0x04, 0x04, 0x0E, 0x04, 0x04, 0x04, 0x02],
        'u' => &[0x00, 0x00, 0x00, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'v' => &[0x00, 0x00, 0x00, 0x11, 0x11, 0x0A, 0x0A, 0x04],
        'w' => &[0x00, 0x00, 0x00, 0x11, 0x11, 0x15, 0x15, 0x0A],
        'x' => &[0x00, 0x00, 0x00, 0x11, 0x0A, 0x04, 0x0A, 0x11],
        'y' => &[0x00, 0x00, 0x00, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'z' => &[0x00, 0x00, 0x00, 0x1F, 0x02, 0x04, 0x08, 0x1F],

        '1' => &[0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => &[0x0E, 0x11, 0x01, 0x03, 0x0C, 0x10, 0x10, 0x1F],
        '3' => &[0x0E, 0x11, 0x01, 0x0E, 0x01, 0x01, 0x11, 0x0E],
        '4' => &[0x08, 0x08, 0x12, 0x12, 0x1F, 0x02, 0x02, 0x02],
        '5' => &[0x1F, 0x10, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => &[0x0E, 0x11, 0x10, 0x1E, 0x11, 0x11, 0x11, 0x0E],
        '7' => &[0x1F, 0x01, 0x02, 0x02, 0x04, 0x04, 0x08, 0x08],
        '8' => &[0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x11, 0x0E],
        '9' => &[0x0E, 0x11, 0x11, 0x0F, 0x01, 0x01, 0x11, 0x0E],
        '0' => &[0x0E, 0x13, 0x13, 0x15, 0x15, 0x19, 0x19, 0x0E],

        '!' => &[0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '"' => &[0x0A, 0x0A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        '#' => &[0x0A, 0x0A, 0x1F, 0x0A, 0x0A, 0x1F, 0x0A, 0x0A],
        '$' => &[0x00, 0x04, 0x0F, 0x14, 0x0E, 0x05, 0x1E, 0x04],
        '%' => &[0x19, 0x1A, 0x02, 0x04, 0x04, 0x08, 0x0B, 0x13],
        '&' => &[0x0E, 0x11, 0x11, 0x12, 0x0C, 0x15, 0x12, 0x0D],
        '\'' => &[0x04, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        '(' => &[0x02, 0x04, 0x08, 0x08, 0x08, 0x08, 0x04, 0x02],
        ')' => &[0x08, 0x04, 0x02, 0x02, 0x02, 0x02, 0x04, 0x08],
        '*' => &[0x00, 0x00, 0x00, 0x15, 0x0E, 0x1F, 0x0E, 0x15],
        '+' => &[0x00, 0x00, 0x00, 0x04, 0x04, 0x1F, 0x04, 0x04],
        ',' => &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x08],
        '-' => &[0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00],
        '.' => &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04],
        '/' => &[0x01, 0x02, 0x02, 0x04, 0x04, 0x08, 0x08, 0x10],
        ':' => &[0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x04],
        ';' => &[0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x04, 0x08],
        '<' => &[0x01, 0x02, 0x04, 0x08, 0x08, 0x04, 0x02, 0x01],
        '=' => &[0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00],
        '>' => &[0x10, 0x08, 0x04, 0x02, 0x02, 0x04, 0x08, 0x10],
        '?' => UNKNOWN,
        '@' => &[0x0E, 0x15, 0x1B, 0x1B, 0x1D, 0x16, 0x10, 0x0E],
        '[' => &[0x0E, 0x08, 0x08, 0x08, 0x08, 0x08, 0x08, 0x0E],
        '\\' => &[0x10, 0x08, 0x08, 0x04, 0x04, 0x02, 0x02, 0x01],
        ']' => &[0x0E, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x0E],
        '^' => &[0x04, 0x0A, 0x11, 0x00, 0x00, 0x00, 0x00, 0x00],
        '_' => &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F],
        '`' => &[0x04, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        '{' => &[0x02, 0x04, 0x04, 0x18, 0x18, 0x04, 0x04, 0x02],
        '|' => &[0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        '}' => &[0x08, 0x04, 0x04, 0x03, 0x03, 0x04, 0x04, 0x08],
        '~' => &[0x00, 0x00, 0x00, 0x00, 0x08, 0x15, 0x02, 0x00],

        _ => UNKNOWN
    }
}

#[cfg(test)]
mod tests {
    use super::{glyph, UNKNOWN};

    #[test]
    fn unknown_characters_fall_back() {
        assert_eq!(glyph('?'), UNKNOWN);
        assert_eq!(glyph('\u{263A}'), UNKNOWN);
        assert_ne!(glyph('A'), UNKNOWN);
    }

    #[test]
    fn glyphs_use_only_five_columns() {
        for ch in ' '..='~' {
            for row in glyph(ch) {
                assert_eq!(row & 0xE0, 0, "glyph for {ch:?}");
            }
        }
    }
}
