/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use nanorand::Rng;
use pxl_canvas::Canvas;
use pxl_core::format::PixelFormat;

mod drawing;
mod filters;
mod roundtrip;
mod stego;

/// Create an initialized canvas filled with reproducible pseudo-random
/// pixel bytes
pub fn random_canvas(width: usize, height: usize, format: PixelFormat, seed: u64) -> Canvas {
    let mut canvas = Canvas::new(format);
    assert!(canvas.create(width, height));

    let mut rng = nanorand::WyRand::new_seed(seed);
    rng.fill(canvas.data_mut());

    canvas
}
