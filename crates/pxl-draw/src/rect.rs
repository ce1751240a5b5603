/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Axis-aligned rectangles, borders and their rounded variants

use pxl_canvas::Canvas;
use pxl_core::color::Color;

use crate::sector::{circle_sector, ring_sector};

/// Fill the closed interval `[x1, x2] x [y1, y2]`.
///
/// A no-op when `x1 > x2` or `y1 > y2`.
pub fn rectangle(canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
    if !canvas.is_initialized() || x1 > x2 || y1 > y2 {
        return;
    }

    for y in y1..=y2 {
        for x in x1..=x2 {
            canvas.set_pixel(x, y, color);
        }
    }
}

/// Draw a rectangle's edge with the given thickness.
///
/// The edge bands overlap at the corners, which is fine since writing a
/// color twice is idempotent.
pub fn border(canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32, thickness: i32, color: Color) {
    if !canvas.is_initialized() || x1 > x2 || y1 > y2 || thickness < 0 {
        return;
    }

    // vertical bands
    for y in y1..=y2 {
        for x in x1..=x1 + thickness {
            canvas.set_pixel(x, y, color);
        }
        for x in x2 - thickness..=x2 {
            canvas.set_pixel(x, y, color);
        }
    }
    // horizontal bands between them
    for x in x1 + thickness..=x2 - thickness {
        for y in y1..=y1 + thickness {
            canvas.set_pixel(x, y, color);
        }
        for y in y2 - thickness..=y2 {
            canvas.set_pixel(x, y, color);
        }
    }
}

/// Radius usable for the corner arcs of `[x1, x2] x [y1, y2]`
fn clamp_radius(radius: i32, x1: i32, y1: i32, x2: i32, y2: i32) -> i32 {
    radius.min(((x2 - x1) / 2).min((y2 - y1) / 2))
}

/// Fill a rectangle with rounded corners.
///
/// The radius is clamped to half the shorter side. Each corner is a 90
/// degree circle sector, the remainder is three rectangles.
pub fn round_rectangle(
    canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32, radius: i32, color: Color
) {
    if !canvas.is_initialized() || x1 > x2 || y1 > y2 || radius < 0 {
        return;
    }

    let r = clamp_radius(radius, x1, y1, x2, y2);

    circle_sector(canvas, x1 + r, y1 + r, r, 270.0, 360.0, color);
    circle_sector(canvas, x2 - r, y1 + r, r, 0.0, 90.0, color);
    circle_sector(canvas, x1 + r, y2 - r, r, 180.0, 270.0, color);
    circle_sector(canvas, x2 - r, y2 - r, r, 90.0, 180.0, color);

    rectangle(canvas, x1, y1 + r, x2, y2 - r, color);
    rectangle(canvas, x1 + r, y1, x2 - r, y1 + r, color);
    rectangle(canvas, x1 + r, y2 - r, x2 - r, y2, color);
}

/// Draw a rounded rectangle's edge.
///
/// The radius is clamped between `thickness + 1` and half the shorter
/// side; when the rectangle is too small for even a one pixel arc the
/// thickness shrinks with it, and a rectangle with no room for any
/// corner falls back to the square [`border`].
pub fn round_border(
    canvas: &mut Canvas, x1: i32, y1: i32, x2: i32, y2: i32, thickness: i32, radius: i32,
    color: Color
) {
    if !canvas.is_initialized() || x1 > x2 || y1 > y2 || thickness < 0 {
        return;
    }

    let r = clamp_radius(radius.max(thickness + 1), x1, y1, x2, y2);

    if r < 1 {
        border(canvas, x1, y1, x2, y2, thickness, color);
        return;
    }
    // half the shorter side can undercut thickness + 1, keep the arc's
    // inner radius at one or more
    let t = thickness.min(r - 1);

    ring_sector(canvas, x1 + r, y1 + r, r, r - t, 270.0, 360.0, color);
    ring_sector(canvas, x2 - r, y1 + r, r, r - t, 0.0, 90.0, color);
    ring_sector(canvas, x1 + r, y2 - r, r, r - t, 180.0, 270.0, color);
    ring_sector(canvas, x2 - r, y2 - r, r, r - t, 90.0, 180.0, color);

    rectangle(canvas, x1, y1 + r, x1 + t, y2 - r, color);
    rectangle(canvas, x2 - t, y1 + r, x2, y2 - r, color);
    rectangle(canvas, x1 + r, y1, x2 - r, y1 + t, color);
    rectangle(canvas, x1 + r, y2 - t, x2 - r, y2, color);
}

#[cfg(test)]
mod tests {
    use pxl_canvas::Canvas;
    use pxl_core::color::Color;
    use pxl_core::format::PixelFormat;

    use super::{border, rectangle, round_border, round_rectangle};

    fn canvas(size: usize) -> Canvas {
        let mut canvas = Canvas::new(PixelFormat::Bgra);
        canvas.create(size, size);
        canvas
    }

    #[test]
    fn exact_closed_interval() {
        let mut canvas = canvas(8);
        rectangle(&mut canvas, 2, 1, 4, 3, Color::WHITE);

        for y in 0..8 {
            for x in 0..8 {
                let inside = (2..=4).contains(&x) && (1..=3).contains(&y);
                let expected = if inside { Color::WHITE } else { Color::CLEAR };

                assert_eq!(canvas.get_pixel(x, y), expected, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn degenerate_corners_are_rejected() {
        let mut canvas = canvas(8);
        rectangle(&mut canvas, 5, 1, 2, 3, Color::WHITE);
        rectangle(&mut canvas, 1, 5, 3, 2, Color::WHITE);

        assert!(canvas.data().iter().all(|b| *b == 0));
    }

    #[test]
    fn border_leaves_interior_untouched() {
        let mut canvas = canvas(10);
        border(&mut canvas, 0, 0, 9, 9, 1, Color::RED);

        assert_eq!(canvas.get_pixel(0, 0), Color::RED);
        assert_eq!(canvas.get_pixel(1, 5), Color::RED);
        assert_eq!(canvas.get_pixel(5, 5), Color::CLEAR);
        assert_eq!(canvas.get_pixel(9, 9), Color::RED);
    }

    #[test]
    fn small_round_border_keeps_its_corners() {
        // half the side undercuts thickness + 1, the arcs must still draw
        let mut canvas = canvas(8);
        round_border(&mut canvas, 0, 0, 7, 7, 5, 0, Color::RED);

        assert_eq!(canvas.get_pixel(1, 1), Color::RED);
        assert_eq!(canvas.get_pixel(6, 1), Color::RED);
        assert_eq!(canvas.get_pixel(1, 6), Color::RED);
        assert_eq!(canvas.get_pixel(6, 6), Color::RED);
        // straight edges still present, interior stays open
        assert_eq!(canvas.get_pixel(0, 4), Color::RED);
        assert_eq!(canvas.get_pixel(4, 0), Color::RED);
        assert_eq!(canvas.get_pixel(4, 4), Color::CLEAR);
    }

    #[test]
    fn round_rectangle_cuts_corners() {
        let mut canvas = canvas(12);
        round_rectangle(&mut canvas, 0, 0, 11, 11, 4, Color::WHITE);

        // the extreme corner pixel is outside the arc
        assert_eq!(canvas.get_pixel(0, 0), Color::CLEAR);
        assert_eq!(canvas.get_pixel(11, 11), Color::CLEAR);
        // edge midpoints and center are filled
        assert_eq!(canvas.get_pixel(6, 0), Color::WHITE);
        assert_eq!(canvas.get_pixel(0, 6), Color::WHITE);
        assert_eq!(canvas.get_pixel(6, 6), Color::WHITE);
    }
}
