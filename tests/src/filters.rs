/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Filter behavior over whole canvases

use pxl_canvas::Canvas;
use pxl_core::color::Color;
use pxl_core::format::PixelFormat;
use pxl_draw::{box_blur, fill, flip_horizontal, flip_vertical, grayscale, invert};

use crate::random_canvas;

#[test]
fn blur_spreads_a_single_white_pixel() {
    let mut canvas = Canvas::new(PixelFormat::Bgra);
    assert!(canvas.create(5, 5));
    fill(&mut canvas, Color::BLACK);
    canvas.set_pixel(2, 2, Color::WHITE);

    box_blur(&mut canvas);

    let faint = 255 / 8;

    // the center and its eight neighbors all see the white pixel
    assert_eq!(canvas.get_pixel(2, 2).red(), faint);
    for (x, y) in [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)] {
        let pixel = canvas.get_pixel(x, y);

        assert_eq!(pixel.red(), faint, "at ({x}, {y})");
        assert_eq!(pixel.green(), faint, "at ({x}, {y})");
        assert_eq!(pixel.blue(), faint, "at ({x}, {y})");
    }

    // two pixels from the white dot nothing changes
    assert_eq!(canvas.get_pixel(0, 0), Color::BLACK);
    assert_eq!(canvas.get_pixel(4, 0), Color::BLACK);
    assert_eq!(canvas.get_pixel(0, 4), Color::BLACK);
    assert_eq!(canvas.get_pixel(4, 4), Color::BLACK);
}

#[test]
fn grayscale_then_invert_region() {
    let mut canvas = Canvas::new(PixelFormat::Bgra);
    assert!(canvas.create(4, 4));
    fill(&mut canvas, Color::from_rgba(30, 60, 90, 255));

    grayscale(&mut canvas, 0, 0, 4, 4);
    assert_eq!(canvas.get_pixel(3, 3), Color::from_rgba(60, 60, 60, 255));

    invert(&mut canvas, 0, 0, 4, 4);
    assert_eq!(canvas.get_pixel(0, 0), Color::from_rgba(195, 195, 195, 255));
}

#[test]
fn flips_relocate_without_losing_bytes() {
    let mut canvas = random_canvas(9, 7, PixelFormat::Bgra, 0xabcd);
    let original = canvas.clone();

    flip_horizontal(&mut canvas);

    for y in 0..7 {
        for x in 0..9 {
            assert_eq!(canvas.get_pixel(x, y), original.get_pixel(x, 6 - y));
        }
    }

    flip_horizontal(&mut canvas);
    flip_vertical(&mut canvas);

    for y in 0..7 {
        for x in 0..9 {
            assert_eq!(canvas.get_pixel(x, y), original.get_pixel(8 - x, y));
        }
    }
}
