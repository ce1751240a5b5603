/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A single-pass box blur

use pxl_canvas::Canvas;
use pxl_core::color::Color;

/// Blur the canvas by averaging each interior pixel's 3x3 neighborhood,
/// the sum divided by eight and saturated at 255 per channel.
///
/// The one pixel border is left unmodified. All sampling happens
/// against a snapshot of the canvas taken before the pass, so already
/// blurred pixels never feed into their neighbors.
pub fn box_blur(canvas: &mut Canvas) {
    if !canvas.is_initialized() || canvas.width() < 3 || canvas.height() < 3 {
        return;
    }

    let source = canvas.clone();

    for y in 1..canvas.height() as i32 - 1 {
        for x in 1..canvas.width() as i32 - 1 {
            let (mut red, mut green, mut blue, mut alpha) = (0_u32, 0_u32, 0_u32, 0_u32);

            for dy in -1..=1 {
                for dx in -1..=1 {
                    let pixel = source.get_pixel(x + dx, y + dy);

                    red += u32::from(pixel.red());
                    green += u32::from(pixel.green());
                    blue += u32::from(pixel.blue());
                    alpha += u32::from(pixel.alpha());
                }
            }

            canvas.set_pixel(
                x,
                y,
                Color::from_rgba(
                    (red / 8).min(255) as u8,
                    (green / 8).min(255) as u8,
                    (blue / 8).min(255) as u8,
                    (alpha / 8).min(255) as u8
                )
            );
        }
    }
}
