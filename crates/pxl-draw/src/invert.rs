/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Color inversion over a rectangular sub-region

use pxl_canvas::Canvas;

/// Invert the red, green and blue channels of every pixel in
/// `[x1, x2) x [y1, y2)`, alpha untouched.
///
/// A no-op when `x1 > x2` or `y1 > y2`, parts of the region outside the
/// canvas are clipped.
pub fn invert(canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32) {
    if !canvas.is_initialized() || x1 > x2 || y1 > y2 {
        return;
    }

    for x in x1..x2 {
        for y in y1..y2 {
            if let Some(pixel) = canvas.try_get_pixel(x, y) {
                canvas.set_pixel(x, y, pixel.invert());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pxl_canvas::Canvas;
    use pxl_core::color::Color;
    use pxl_core::format::PixelFormat;

    use super::invert;

    #[test]
    fn double_inversion_is_identity() {
        let mut canvas = Canvas::new(PixelFormat::Bgra);
        canvas.create(3, 3);
        canvas.set_pixel(1, 1, Color::from_rgba(10, 20, 30, 40));

        invert(&mut canvas, 0, 0, 3, 3);
        assert_eq!(canvas.get_pixel(1, 1), Color::from_rgba(245, 235, 225, 40));

        invert(&mut canvas, 0, 0, 3, 3);
        assert_eq!(canvas.get_pixel(1, 1), Color::from_rgba(10, 20, 30, 40));
    }

    #[test]
    fn oversized_region_is_clipped() {
        let mut canvas = Canvas::new(PixelFormat::Bgra);
        canvas.create(2, 2);

        invert(&mut canvas, -5, -5, 50, 50);

        assert_eq!(canvas.get_pixel(0, 0), Color::from_rgba(255, 255, 255, 0));
    }
}
