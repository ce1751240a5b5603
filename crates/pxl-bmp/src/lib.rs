/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A BMP decoder and encoder
//!
//! This crate reads and writes the two BMP layouts used by the rest of
//! the library
//!
//! # Supported formats
//! - 24-bit uncompressed images with a 40 byte information header
//! - 32-bit BITFIELDS images with a 108 byte information header and a
//!   fixed BGRA channel layout
//!
//! # Unsupported formats
//! - Paletted, RLE compressed, 16-bit and top-down images
//!
//! Pixel data moves through both directions verbatim, bottom-up rows of
//! BGR(A) bytes, so a decode immediately followed by an encode
//! reproduces the file byte for byte.

pub use crate::common::BmpCompression;
pub use crate::decoder::{probe_bmp, BmpDecoder};
pub use crate::encoder::BmpEncoder;
pub use crate::errors::{BmpDecoderErrors, BmpEncoderErrors};

mod common;
mod decoder;
mod encoder;
mod errors;
