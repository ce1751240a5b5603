/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Grayscale filter over a rectangular sub-region

use pxl_canvas::Canvas;

/// Replace every pixel in `[x1, x2) x [y1, y2)` with its channel mean,
/// alpha untouched.
///
/// Pass `(0, 0, width, height)` for the whole canvas. A no-op when
/// `x1 > x2` or `y1 > y2`, parts of the region outside the canvas are
/// clipped.
pub fn grayscale(canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32) {
    if !canvas.is_initialized() || x1 > x2 || y1 > y2 {
        return;
    }

    for x in x1..x2 {
        for y in y1..y2 {
            if let Some(pixel) = canvas.try_get_pixel(x, y) {
                canvas.set_pixel(x, y, pixel.grayscale());
            }
        }
    }
}
