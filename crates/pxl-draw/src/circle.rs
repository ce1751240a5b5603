/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Filled circles, ellipses and rings
//!
//! All three run an implicit-equation membership test over the shape's
//! bounding box rather than a parametric sweep, which guarantees exact,
//! gap-free coverage.

use pxl_canvas::Canvas;
use pxl_core::color::Color;

/// Inclusive offset range around `center` covered by both `-bound..=bound`
/// and the canvas extent `0..size`.
///
/// Offsets are widened to `i64` so squaring them in the membership tests
/// cannot overflow for any `i32` center or radius.
fn canvas_span(center: i32, bound: i64, size: usize) -> std::ops::RangeInclusive<i64> {
    let center = i64::from(center);
    let lo = (-bound).max(-center);
    let hi = bound.min(size as i64 - 1 - center);

    lo..=hi
}

/// Fill the disc of pixels with `dx^2 + dy^2 <= radius^2` around the
/// center.
///
/// A no-op when `radius < 1`. Only the part of the bounding box that
/// intersects the canvas is visited.
pub fn circle(canvas: &mut Canvas, x_pos: i32, y_pos: i32, radius: i32, color: Color) {
    if !canvas.is_initialized() || radius < 1 {
        return;
    }

    let r = i64::from(radius);
    let x_span = canvas_span(x_pos, r, canvas.width());
    let y_span = canvas_span(y_pos, r, canvas.height());

    for i in x_span {
        for j in y_span.clone() {
            if i * i + j * j <= r * r {
                // in canvas range by construction of the spans
                let x = (i64::from(x_pos) + i) as i32;
                let y = (i64::from(y_pos) + j) as i32;

                canvas.set_pixel(x, y, color);
            }
        }
    }
}

/// Fill an ellipse, a circle of `radius` stretched by `x_mult` and
/// `y_mult` along each axis.
///
/// Membership uses the scaled form `dx^2 / x_mult + dy^2 / y_mult <=
/// radius^2`. A no-op when `radius < 1` or a multiplier is not positive.
pub fn ellipse(
    canvas: &mut Canvas, x_pos: i32, y_pos: i32, radius: i32, x_mult: f64, y_mult: f64,
    color: Color
) {
    if !canvas.is_initialized() || radius < 1 || x_mult <= 0.0 || y_mult <= 0.0 {
        return;
    }

    let x_mult_inv = 1.0 / x_mult;
    let y_mult_inv = 1.0 / y_mult;
    let r = f64::from(radius);
    let r_squared = r * r;

    // float to int casts saturate, oversized bounds collapse onto the
    // canvas window anyway
    let x_bound = (r * x_mult.max(1.0)).ceil() as i64;
    let y_bound = (r * y_mult.max(1.0)).ceil() as i64;

    let x_span = canvas_span(x_pos, x_bound, canvas.width());
    let y_span = canvas_span(y_pos, y_bound, canvas.height());

    for i in x_span {
        for j in y_span.clone() {
            let i_f = i as f64;
            let j_f = j as f64;

            if x_mult_inv * i_f * i_f + y_mult_inv * j_f * j_f <= r_squared {
                let x = (i64::from(x_pos) + i) as i32;
                let y = (i64::from(y_pos) + j) as i32;

                canvas.set_pixel(x, y, color);
            }
        }
    }
}

/// Fill the annulus between `in_radius` and `out_radius`.
///
/// A no-op unless `out_radius >= 1`, `in_radius >= 0` and
/// `out_radius >= in_radius`.
pub fn ring(
    canvas: &mut Canvas, x_pos: i32, y_pos: i32, out_radius: i32, in_radius: i32, color: Color
) {
    if !canvas.is_initialized() || out_radius < 1 || in_radius < 0 || out_radius < in_radius {
        return;
    }

    let out = i64::from(out_radius);
    let inner = i64::from(in_radius);
    let x_span = canvas_span(x_pos, out, canvas.width());
    let y_span = canvas_span(y_pos, out, canvas.height());

    for i in x_span {
        for j in y_span.clone() {
            let d_squared = i * i + j * j;

            if d_squared <= out * out && d_squared >= inner * inner {
                let x = (i64::from(x_pos) + i) as i32;
                let y = (i64::from(y_pos) + j) as i32;

                canvas.set_pixel(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pxl_canvas::Canvas;
    use pxl_core::color::Color;
    use pxl_core::format::PixelFormat;

    use super::{circle, ellipse, ring};

    fn canvas(size: usize) -> Canvas {
        let mut canvas = Canvas::new(PixelFormat::Bgra);
        canvas.create(size, size);
        canvas
    }

    #[test]
    fn exact_membership() {
        let mut canvas = canvas(11);
        circle(&mut canvas, 5, 5, 3, Color::WHITE);

        for y in 0..11_i32 {
            for x in 0..11_i32 {
                let inside = (x - 5).pow(2) + (y - 5).pow(2) <= 9;
                let expected = if inside { Color::WHITE } else { Color::CLEAR };

                assert_eq!(canvas.get_pixel(x, y), expected, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn zero_radius_is_rejected() {
        let mut canvas = canvas(5);
        circle(&mut canvas, 2, 2, 0, Color::WHITE);
        ring(&mut canvas, 2, 2, 0, 0, Color::WHITE);

        assert!(canvas.data().iter().all(|b| *b == 0));
    }

    #[test]
    fn extreme_radii_cover_the_canvas_without_overflow() {
        // radii whose squares exceed i32, the disc swallows the canvas
        let mut with_circle = canvas(5);
        circle(&mut with_circle, 2, 2, 1_000_000_000, Color::WHITE);
        assert!(with_circle.data().iter().all(|b| *b == 255));

        let mut with_ellipse = canvas(5);
        ellipse(&mut with_ellipse, 2, 2, 1_000_000_000, 1.0, 1.0, Color::WHITE);
        assert!(with_ellipse.data().iter().all(|b| *b == 255));

        let mut with_ring = canvas(5);
        ring(&mut with_ring, 2, 2, 1_000_000_000, 0, Color::WHITE);
        assert!(with_ring.data().iter().all(|b| *b == 255));

        // a far off-canvas center touches nothing
        let mut empty = canvas(5);
        circle(&mut empty, i32::MIN, i32::MAX, 100_000, Color::WHITE);
        assert!(empty.data().iter().all(|b| *b == 0));
    }

    #[test]
    fn unit_multipliers_match_circle() {
        let mut with_circle = canvas(11);
        let mut with_ellipse = canvas(11);

        circle(&mut with_circle, 5, 5, 4, Color::RED);
        ellipse(&mut with_ellipse, 5, 5, 4, 1.0, 1.0, Color::RED);

        assert_eq!(with_circle.data(), with_ellipse.data());
    }

    #[test]
    fn wide_ellipse_extends_past_radius() {
        let mut canvas = canvas(21);
        ellipse(&mut canvas, 10, 10, 3, 4.0, 1.0, Color::GREEN);

        // stretched to sqrt(4) * 3 = 6 pixels horizontally
        assert_eq!(canvas.get_pixel(16, 10), Color::GREEN);
        assert_eq!(canvas.get_pixel(17, 10), Color::CLEAR);
        // vertical extent stays at the radius
        assert_eq!(canvas.get_pixel(10, 13), Color::GREEN);
        assert_eq!(canvas.get_pixel(10, 14), Color::CLEAR);
    }

    #[test]
    fn ring_keeps_the_hole() {
        let mut canvas = canvas(11);
        ring(&mut canvas, 5, 5, 4, 2, Color::BLUE);

        assert_eq!(canvas.get_pixel(5, 5), Color::CLEAR);
        assert_eq!(canvas.get_pixel(5, 1), Color::BLUE);
        // inner boundary at distance exactly in_radius is painted
        assert_eq!(canvas.get_pixel(5, 3), Color::BLUE);
        assert_eq!(canvas.get_pixel(5, 4), Color::CLEAR);
    }
}
