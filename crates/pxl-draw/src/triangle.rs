/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Filled and outlined triangles

use pxl_canvas::Canvas;
use pxl_core::color::Color;

use crate::line::line;

/// Fill a triangle by sweeping a Bresenham walk from the first vertex
/// toward the second and drawing a line to the third vertex at every
/// step.
///
/// Cheap and simple, but thin gaps can appear for some aspect ratios
/// since consecutive sweep lines are not guaranteed to be adjacent
/// everywhere.
pub fn triangle(
    canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, color: Color
) {
    if !canvas.is_initialized() {
        return;
    }

    let (mut x, mut y) = (x1, y1);

    let dx = (x2 - x1).abs();
    let dy = -(y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };
    let mut err = dx + dy;

    line(canvas, x, y, x3, y3, color);

    loop {
        if x == x2 && y == y2 {
            break;
        }
        let e2 = 2 * err;

        if e2 > dy {
            err += dy;
            x += sx;
            line(canvas, x, y, x3, y3, color);
        }
        if e2 < dx {
            err += dx;
            y += sy;
            line(canvas, x, y, x3, y3, color);
        }
    }
}

/// Draw a triangle's outline, the three vertices connected pairwise
pub fn triangle_border(
    canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32, color: Color
) {
    if !canvas.is_initialized() {
        return;
    }

    line(canvas, x1, y1, x2, y2, color);
    line(canvas, x2, y2, x3, y3, color);
    line(canvas, x3, y3, x1, y1, color);
}
