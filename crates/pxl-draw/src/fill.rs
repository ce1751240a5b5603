/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Whole-canvas fill and 4-connected flood fill

use log::warn;

use pxl_canvas::Canvas;
use pxl_core::color::Color;

/// Pending coordinate pairs the flood fill stack may hold before the
/// fill halts with a partial result
const FLOOD_STACK_LIMIT: usize = 100_000_000;

/// Set every pixel of the canvas to one color
pub fn fill(canvas: &mut Canvas, color: Color) {
    if !canvas.is_initialized() {
        return;
    }

    for y in 0..canvas.height() as i32 {
        for x in 0..canvas.width() as i32 {
            canvas.set_pixel(x, y, color);
        }
    }
}

/// Recolor the 4-connected region of same-colored pixels around the
/// seed point, like the paint bucket tool.
///
/// Iterative with an explicit stack, recursion depth would otherwise be
/// unbounded by image size. The stack is capped at
/// [`FLOOD_STACK_LIMIT`] entries, hitting the cap halts the fill with a
/// partial result.
pub fn flood_fill(canvas: &mut Canvas, x: i32, y: i32, color: Color) {
    if !canvas.is_initialized()
        || x < 0
        || y < 0
        || x as usize >= canvas.width()
        || y as usize >= canvas.height()
    {
        return;
    }

    let old_color = canvas.get_pixel(x, y);

    if old_color == color {
        // the region already has the target color, pushing neighbors
        // would revisit it forever
        return;
    }

    let width = canvas.width() as i32;
    let height = canvas.height() as i32;

    let mut pixels_to_fill = vec![(x, y)];

    while let Some((x_buf, y_buf)) = pixels_to_fill.pop() {
        if canvas.get_pixel(x_buf, y_buf) != old_color {
            continue;
        }
        canvas.set_pixel(x_buf, y_buf, color);

        if x_buf > 0 {
            pixels_to_fill.push((x_buf - 1, y_buf));
        }
        if x_buf < width - 1 {
            pixels_to_fill.push((x_buf + 1, y_buf));
        }
        if y_buf > 0 {
            pixels_to_fill.push((x_buf, y_buf - 1));
        }
        if y_buf < height - 1 {
            pixels_to_fill.push((x_buf, y_buf + 1));
        }

        if pixels_to_fill.len() >= FLOOD_STACK_LIMIT {
            warn!("Flood fill stack cap reached, leaving a partial fill");
            return;
        }
    }
}
