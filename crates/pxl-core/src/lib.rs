/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the pxl family of crates
//!
//! This crate provides the plumbing used by the codec, canvas and drawing
//! crates under the `pxl` umbrella.
//!
//! It currently contains
//!
//! - A bytestream reader and writer with endian aware reads and writes
//! - The packed [`Color`](crate::color::Color) value type
//! - Pixel format information shared by images
//! - Image decoder and encoder options

pub mod bytestream;
pub mod color;
pub mod format;
pub mod options;
