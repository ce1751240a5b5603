/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Drawing primitives exercised against full canvases

use pxl_canvas::Canvas;
use pxl_core::color::Color;
use pxl_core::format::PixelFormat;
use pxl_draw::{
    border, circle, draw_string, fill, flood_fill, line, rectangle, ring, round_rectangle,
    triangle_border
};

use crate::random_canvas;

fn black_canvas(size: usize) -> Canvas {
    let mut canvas = Canvas::new(PixelFormat::Bgra);
    assert!(canvas.create(size, size));
    fill(&mut canvas, Color::BLACK);
    canvas
}

#[test]
fn white_circle_survives_a_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("circle.bmp");

    let mut canvas = black_canvas(10);
    circle(&mut canvas, 5, 5, 3, Color::WHITE);
    assert!(canvas.save(&path));

    let mut reloaded = Canvas::new(PixelFormat::Bgra);
    assert!(reloaded.load(&path));

    assert_eq!(reloaded.get_pixel(5, 5), Color::WHITE);
    assert_eq!(reloaded.get_pixel(0, 0), Color::BLACK);
}

#[test]
fn primitives_never_write_outside_the_canvas() {
    // every primitive aimed far out of bounds on a small canvas
    let mut canvas = random_canvas(8, 8, PixelFormat::Bgra, 99);
    let before = canvas.data().to_vec();

    line(&mut canvas, -100, -100, -50, -200, Color::WHITE);
    rectangle(&mut canvas, 100, 100, 200, 200, Color::WHITE);
    border(&mut canvas, -300, -300, -200, -200, 5, Color::WHITE);
    circle(&mut canvas, -50, -50, 10, Color::WHITE);
    ring(&mut canvas, 500, 500, 20, 10, Color::WHITE);
    round_rectangle(&mut canvas, 100, 100, 300, 300, 20, Color::WHITE);
    triangle_border(&mut canvas, -10, -10, -20, -90, -90, -20, Color::WHITE);
    draw_string(&mut canvas, 1000, 1000, 3, "clipped", Color::WHITE);
    flood_fill(&mut canvas, 80, 80, Color::WHITE);

    assert_eq!(canvas.data(), &before[..]);
}

#[test]
fn uninitialized_canvas_ignores_every_primitive() {
    let mut canvas = Canvas::new(PixelFormat::Bgra);

    line(&mut canvas, 0, 0, 5, 5, Color::WHITE);
    circle(&mut canvas, 2, 2, 2, Color::WHITE);
    fill(&mut canvas, Color::WHITE);
    draw_string(&mut canvas, 0, 0, 1, "hi", Color::WHITE);

    assert!(!canvas.is_initialized());
    assert_eq!(canvas.raw_size(), 0);
}

#[test]
fn flood_fill_replaces_a_bounded_region() {
    let mut canvas = black_canvas(16);
    border(&mut canvas, 2, 2, 13, 13, 0, Color::WHITE);

    flood_fill(&mut canvas, 8, 8, Color::RED);

    // inside the border is red, the border and outside stay put
    assert_eq!(canvas.get_pixel(8, 8), Color::RED);
    assert_eq!(canvas.get_pixel(3, 3), Color::RED);
    assert_eq!(canvas.get_pixel(2, 8), Color::WHITE);
    assert_eq!(canvas.get_pixel(0, 0), Color::BLACK);
}

#[test]
fn flood_fill_is_idempotent_on_uniform_regions() {
    let mut canvas = black_canvas(12);
    let before = canvas.data().to_vec();

    flood_fill(&mut canvas, 6, 6, Color::BLACK);

    assert_eq!(canvas.data(), &before[..]);
}

#[test]
fn drawing_works_on_24_bit_canvases_too() {
    let mut canvas = Canvas::new(PixelFormat::Bgr);
    assert!(canvas.create(10, 10));

    circle(&mut canvas, 5, 5, 3, Color::WHITE);

    assert_eq!(canvas.get_pixel(5, 5), Color::WHITE);
    assert_eq!(canvas.get_pixel(0, 0), Color::from_rgba(0, 0, 0, 255));
}
