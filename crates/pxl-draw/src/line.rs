/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Line drawing via the integer Bresenham algorithm

use pxl_canvas::Canvas;
use pxl_core::color::Color;

/// Draw a line between two points, endpoints inclusive.
///
/// Works in every octant, coordinates outside the canvas are clipped
/// per pixel.
pub fn line(canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
    if !canvas.is_initialized() {
        return;
    }

    let (mut x, mut y) = (x1, y1);

    let dx = (x2 - x1).abs();
    let dy = -(y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        canvas.set_pixel(x, y, color);

        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;

        if e2 > dy {
            err += dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}
