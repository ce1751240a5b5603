/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! An in-memory pixel canvas with BMP persistence
//!
//! [`Canvas`] owns a contiguous BGR(A) buffer, checks bounds at a single
//! choke point, and loads and saves itself through the `pxl-bmp` codec.
//! The [`stego`] module hides text messages in the buffer's low bits.
//!
//! Drawing primitives live in the `pxl-draw` crate and only ever touch a
//! canvas through [`Canvas::set_pixel`] and [`Canvas::get_pixel`].

pub use crate::canvas::{Canvas, CanvasState};

mod canvas;
pub mod stego;
