/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Text rendering with the built-in bitmap font

use pxl_canvas::Canvas;
use pxl_core::color::Color;

use crate::font::{glyph, Glyph};
use crate::rect::rectangle;

/// Draw a single glyph with its top left corner at `(x_pos, y_pos)`,
/// every set bit becomes a `size x size` block of pixels
pub fn draw_char(
    canvas: &mut Canvas, x_pos: i32, y_pos: i32, size: i32, glyph: &Glyph, color: Color
) {
    if !canvas.is_initialized() || size < 1 {
        return;
    }

    for (i, row) in glyph.iter().enumerate() {
        let i = i as i32;
        let row = u32::from(*row);

        for j in 0..5 {
            // the five used bits sit at the low end of the row byte
            if (row << (j + 3)) & 0x80 != 0 {
                rectangle(
                    canvas,
                    x_pos + j * size,
                    y_pos + i * size,
                    x_pos + (j + 1) * size - 1,
                    y_pos + (i + 1) * size - 1,
                    color
                );
            }
        }
    }
}

/// Draw a string left to right with a fixed advance of six cells per
/// character.
///
/// `'\n'` breaks the line, moving down `9 * size` pixels and resetting
/// to the starting x. Spaces advance without drawing, characters the
/// font lacks render as a question mark.
pub fn draw_string(
    canvas: &mut Canvas, x_pos: i32, y_pos: i32, size: i32, text: &str, color: Color
) {
    if !canvas.is_initialized() || size < 1 {
        return;
    }

    let mut column = 0;
    let mut y = y_pos;

    for ch in text.chars() {
        if ch == '\n' {
            column = 0;
            y += 9 * size;
            continue;
        }
        if ch == ' ' {
            column += 1;
            continue;
        }

        draw_char(canvas, x_pos + column * size * 6, y, size, glyph(ch), color);
        column += 1;
    }
}

#[cfg(test)]
mod tests {
    use pxl_canvas::Canvas;
    use pxl_core::color::Color;
    use pxl_core::format::PixelFormat;

    use super::{draw_char, draw_string};
    use crate::font::glyph;

    fn canvas(width: usize, height: usize) -> Canvas {
        let mut canvas = Canvas::new(PixelFormat::Bgra);
        canvas.create(width, height);
        canvas
    }

    #[test]
    fn pipe_glyph_is_a_single_column() {
        // '|' has only bit 2 set in every row
        let mut canvas = canvas(5, 8);
        draw_char(&mut canvas, 0, 0, 1, glyph('|'), Color::WHITE);

        for y in 0..8 {
            for x in 0..5 {
                let expected = if x == 2 { Color::WHITE } else { Color::CLEAR };

                assert_eq!(canvas.get_pixel(x, y), expected, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn size_scales_cells_to_blocks() {
        let mut canvas = canvas(15, 24);
        draw_char(&mut canvas, 0, 0, 3, glyph('|'), Color::RED);

        // the single column becomes a three pixel wide band
        assert_eq!(canvas.get_pixel(5, 0), Color::CLEAR);
        assert_eq!(canvas.get_pixel(6, 0), Color::RED);
        assert_eq!(canvas.get_pixel(8, 23), Color::RED);
        assert_eq!(canvas.get_pixel(9, 0), Color::CLEAR);
    }

    #[test]
    fn string_layout_advances_and_breaks_lines() {
        let mut canvas = canvas(32, 32);
        draw_string(&mut canvas, 0, 0, 1, "| |\n|", Color::WHITE);

        // first and third cell on the first line, space leaves a gap
        assert_eq!(canvas.get_pixel(2, 0), Color::WHITE);
        assert_eq!(canvas.get_pixel(8, 0), Color::CLEAR);
        assert_eq!(canvas.get_pixel(14, 0), Color::WHITE);
        // second line starts back at the left margin, 9 rows down
        assert_eq!(canvas.get_pixel(2, 9), Color::WHITE);
    }

    #[test]
    fn zero_size_draws_nothing() {
        let mut canvas = canvas(8, 8);
        draw_string(&mut canvas, 0, 0, 0, "X", Color::WHITE);

        assert!(canvas.data().iter().all(|b| *b == 0));
    }
}
