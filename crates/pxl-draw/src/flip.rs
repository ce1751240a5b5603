/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Whole-canvas mirror flips

use pxl_canvas::Canvas;

/// Mirror the canvas around its horizontal center line, swapping rows
///
///```text
///old image     new image
///┌─────────┐   ┌──────────┐
///│a b c d e│   │f g h i j │
///│f g h i j│   │a b c d e │
///└─────────┘   └──────────┘
///```
pub fn flip_horizontal(canvas: &mut Canvas) {
    if !canvas.is_initialized() {
        return;
    }

    let height = canvas.height() as i32;

    for x in 0..canvas.width() as i32 {
        for y in 0..height / 2 {
            let mirrored = height - y - 1;

            let top = canvas.get_pixel(x, y);
            let bottom = canvas.get_pixel(x, mirrored);

            canvas.set_pixel(x, mirrored, top);
            canvas.set_pixel(x, y, bottom);
        }
    }
}

/// Mirror the canvas around its vertical center line, swapping columns
///
///```text
///old image     new image
///┌─────────┐   ┌──────────┐
///│a b c d e│   │e d c b a │
///│f g h i j│   │j i h g f │
///└─────────┘   └──────────┘
///```
pub fn flip_vertical(canvas: &mut Canvas) {
    if !canvas.is_initialized() {
        return;
    }

    let width = canvas.width() as i32;

    for x in 0..width / 2 {
        for y in 0..canvas.height() as i32 {
            let mirrored = width - x - 1;

            let left = canvas.get_pixel(x, y);
            let right = canvas.get_pixel(mirrored, y);

            canvas.set_pixel(mirrored, y, left);
            canvas.set_pixel(x, y, right);
        }
    }
}
