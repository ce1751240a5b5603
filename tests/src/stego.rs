/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Steganography round trips over real canvas content

use pxl_canvas::stego::{capacity, decode_str, encode_str};
use pxl_canvas::Canvas;
use pxl_core::format::PixelFormat;

use crate::random_canvas;

#[test]
fn short_message_in_a_fresh_canvas() {
    // 8x8 32-bit, 256 raw bytes, enough for 32 characters
    let mut canvas = Canvas::new(PixelFormat::Bgra);
    assert!(canvas.create(8, 8));

    assert!(encode_str(&mut canvas, "hi"));
    assert_eq!(decode_str(&canvas).unwrap(), "hi");
}

#[test]
fn message_survives_noisy_pixel_data() {
    let mut canvas = random_canvas(16, 16, PixelFormat::Bgra, 0xdead);
    let message = "hidden in plain sight!";

    assert!(encode_str(&mut canvas, message));
    assert_eq!(decode_str(&canvas).unwrap(), message);
}

#[test]
fn message_survives_a_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("secret.bmp");

    let mut canvas = random_canvas(12, 12, PixelFormat::Bgra, 0xfeed);
    assert!(encode_str(&mut canvas, "carried through the codec"));
    assert!(canvas.save(&path));

    let mut reloaded = Canvas::new(PixelFormat::Bgra);
    assert!(reloaded.load(&path));

    assert_eq!(
        decode_str(&reloaded).unwrap(),
        "carried through the codec"
    );
}

#[test]
fn capacity_boundary() {
    let mut canvas = Canvas::new(PixelFormat::Bgra);
    assert!(canvas.create(4, 2));
    // 32 raw bytes, four characters including the terminator
    assert_eq!(capacity(&canvas), 4);

    assert!(encode_str(&mut canvas, "abc"));
    assert_eq!(decode_str(&canvas).unwrap(), "abc");

    // one character over capacity, the encode reports the cut but the
    // part that fit decodes back
    assert!(!encode_str(&mut canvas, "abcd"));
    assert_eq!(decode_str(&canvas).unwrap(), "abcd");
}
