/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Angular sectors of circles, ellipses and rings
//!
//! Angles are degrees, 0 points up and values grow clockwise. A sector
//! sweeps every radius up to the target and walks the angle in adaptive
//! steps small enough that consecutive points on the outer arc are at
//! most a pixel apart. The swept point is
//! `(sin(a) * r + cx, -cos(a) * r + cy)`, cosine negated because image
//! y grows downward.

use pxl_canvas::Canvas;
use pxl_core::color::Color;

const PI: f64 = core::f64::consts::PI;

/// Angle step that keeps consecutive plotted points within one pixel at
/// the given radius. `None` when the span is degenerate.
fn angle_step(start_angle: f64, end_angle: f64, radius: i32) -> Option<f64> {
    let angle_diff = (start_angle - end_angle).abs();

    if angle_diff == 0.0 {
        return None;
    }

    let r = f64::from(radius);
    let pixel_arc_len = PI * r * r * (360.0 / angle_diff);

    Some(angle_diff / pixel_arc_len)
}

/// Fill a wedge of the disc around `(x_pos, y_pos)` between the two
/// angles.
///
/// A no-op when `radius < 1` or the angle span is zero, and nothing
/// beyond the center pixel is drawn when `start_angle > end_angle`.
pub fn circle_sector(
    canvas: &mut Canvas, x_pos: i32, y_pos: i32, radius: i32, start_angle: f64, end_angle: f64,
    color: Color
) {
    ellipse_sector(
        canvas,
        x_pos,
        y_pos,
        radius,
        start_angle,
        end_angle,
        1.0,
        1.0,
        color
    );
}

/// Fill a wedge of an ellipse, the circle sector's swept points
/// stretched by `x_mult` and `y_mult`.
#[allow(clippy::too_many_arguments)]
pub fn ellipse_sector(
    canvas: &mut Canvas, x_pos: i32, y_pos: i32, radius: i32, start_angle: f64, end_angle: f64,
    x_mult: f64, y_mult: f64, color: Color
) {
    if !canvas.is_initialized() || radius < 1 {
        return;
    }

    canvas.set_pixel(x_pos, y_pos, color);

    for radius_iter in 1..=radius {
        let Some(step) = angle_step(start_angle, end_angle, radius_iter) else {
            return;
        };
        let r = f64::from(radius_iter);

        let mut angle = start_angle;
        while angle <= end_angle {
            let (sin, cos) = angle.to_radians().sin_cos();

            canvas.set_pixel(
                (sin * r * x_mult) as i32 + x_pos,
                (-cos * r * y_mult) as i32 + y_pos,
                color
            );

            angle += step;
        }
    }
}

/// Fill a wedge of the annulus between `in_radius` and `out_radius`.
///
/// A no-op unless `in_radius >= 1` and `out_radius > in_radius`, the
/// center pixel is never drawn.
#[allow(clippy::too_many_arguments)]
pub fn ring_sector(
    canvas: &mut Canvas, x_pos: i32, y_pos: i32, out_radius: i32, in_radius: i32,
    start_angle: f64, end_angle: f64, color: Color
) {
    if !canvas.is_initialized() || in_radius < 1 || out_radius <= in_radius {
        return;
    }

    for radius_iter in in_radius..=out_radius {
        let Some(step) = angle_step(start_angle, end_angle, radius_iter) else {
            return;
        };
        let r = f64::from(radius_iter);

        let mut angle = start_angle;
        while angle <= end_angle {
            let (sin, cos) = angle.to_radians().sin_cos();

            canvas.set_pixel(
                (sin * r) as i32 + x_pos,
                (-cos * r) as i32 + y_pos,
                color
            );

            angle += step;
        }
    }
}
