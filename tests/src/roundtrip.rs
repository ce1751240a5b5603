/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Save and reload round trips through the BMP codec

use std::io::Cursor;

use pxl_bmp::{probe_bmp, BmpDecoder, BmpDecoderErrors, BmpEncoder};
use pxl_canvas::Canvas;
use pxl_core::format::PixelFormat;
use pxl_core::options::{DecoderOptions, EncoderOptions};

use crate::random_canvas;

fn encode_to_vec(canvas: &Canvas) -> Vec<u8> {
    let options = EncoderOptions::new(canvas.width(), canvas.height(), canvas.pixel_format());

    let mut sink = vec![];
    BmpEncoder::new(canvas.data(), options)
        .encode(&mut sink)
        .unwrap();
    sink
}

#[test]
fn thirty_two_bit_random_round_trip() {
    let canvas = random_canvas(23, 17, PixelFormat::Bgra, 0xbeef);
    let file = encode_to_vec(&canvas);

    assert!(probe_bmp(&file));

    let mut decoder = BmpDecoder::new(Cursor::new(file));
    let pixels = decoder.decode().unwrap();

    assert_eq!(decoder.dimensions(), Some((23, 17)));
    assert_eq!(decoder.pixel_format(), Some(PixelFormat::Bgra));
    assert_eq!(pixels, canvas.data());
}

#[test]
fn twenty_four_bit_round_trip_strips_padding() {
    // widths exercising every padding length, 0 through 3 bytes
    for width in [4_usize, 5, 6, 7] {
        let canvas = random_canvas(width, 9, PixelFormat::Bgr, width as u64);
        let file = encode_to_vec(&canvas);

        let mut decoder = BmpDecoder::new(Cursor::new(file));
        let pixels = decoder.decode().unwrap();

        assert_eq!(decoder.dimensions(), Some((width, 9)));
        assert_eq!(pixels, canvas.data(), "width {width}");
    }
}

#[test]
fn file_level_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("random.bmp");

    let canvas = random_canvas(31, 13, PixelFormat::Bgra, 42);
    assert!(canvas.save(&path));

    let mut reloaded = Canvas::new(PixelFormat::Bgra);
    assert!(reloaded.load(&path));

    assert_eq!(reloaded.width(), canvas.width());
    assert_eq!(reloaded.height(), canvas.height());
    assert_eq!(reloaded.data(), canvas.data());
}

#[test]
fn truncated_file_is_rejected() {
    let canvas = random_canvas(8, 8, PixelFormat::Bgra, 7);
    let mut file = encode_to_vec(&canvas);
    file.truncate(file.len() - 10);

    let mut decoder = BmpDecoder::new(Cursor::new(file));

    assert!(matches!(
        decoder.decode_headers(),
        Err(BmpDecoderErrors::SizeMismatch(_, _))
    ));
}

#[test]
fn wrong_bit_depth_is_rejected() {
    let canvas = random_canvas(4, 4, PixelFormat::Bgra, 3);
    let mut file = encode_to_vec(&canvas);
    // patch bits per pixel from 32 to 16
    file[28] = 16;

    let mut decoder = BmpDecoder::new(Cursor::new(file));

    assert!(matches!(
        decoder.decode_headers(),
        Err(BmpDecoderErrors::WrongBitDepth(16))
    ));
}

#[test]
fn corrupt_raw_size_is_corrected() {
    let canvas = random_canvas(6, 6, PixelFormat::Bgra, 11);
    let mut file = encode_to_vec(&canvas);
    // clobber the raw data size field
    file[34..38].copy_from_slice(&1_u32.to_le_bytes());

    let mut decoder = BmpDecoder::new(Cursor::new(file.clone()));
    let pixels = decoder.decode().unwrap();
    assert_eq!(pixels, canvas.data());

    // strict mode turns the recovery into a hard error
    let options = DecoderOptions::default().set_strict_mode(true);
    let mut strict = BmpDecoder::new_with_options(Cursor::new(file), options);
    assert!(strict.decode_headers().is_err());
}

#[test]
fn dimension_limits_are_enforced() {
    let canvas = random_canvas(16, 4, PixelFormat::Bgra, 5);
    let file = encode_to_vec(&canvas);

    let options = DecoderOptions::default().set_max_width(8);
    let mut decoder = BmpDecoder::new_with_options(Cursor::new(file), options);

    assert!(matches!(
        decoder.decode_headers(),
        Err(BmpDecoderErrors::TooLargeDimensions("width", 8, 16))
    ));
}
