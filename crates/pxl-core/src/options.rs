/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoder and encoder configuration
//!
//! Options use a consuming builder pattern, e.g.
//!
//! ```
//! use pxl_core::options::DecoderOptions;
//!
//! let options = DecoderOptions::default().set_strict_mode(true);
//! assert!(options.strict_mode());
//! ```
use crate::format::PixelFormat;

/// Decoder options
///
/// The dimension limits protect against malicious files whose headers
/// declare gigantic images; decoding fails before any pixel allocation
/// when a limit is exceeded.
#[derive(Copy, Clone, Debug)]
pub struct DecoderOptions {
    max_width: usize,
    max_height: usize,
    strict_mode: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        DecoderOptions {
            max_width: 1 << 14,
            max_height: 1 << 14,
            strict_mode: false,
        }
    }
}

impl DecoderOptions {
    /// Maximum width the decoder will accept, inclusive
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Maximum height the decoder will accept, inclusive
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Whether recoverable header inconsistencies become hard errors
    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    pub fn set_strict_mode(mut self, strict: bool) -> Self {
        self.strict_mode = strict;
        self
    }
}

/// Encoder options
///
/// An encoder cannot infer dimensions from a flat byte slice, so the
/// caller states them here together with the pixel layout.
#[derive(Copy, Clone, Debug)]
pub struct EncoderOptions {
    width: usize,
    height: usize,
    format: PixelFormat,
}

impl EncoderOptions {
    pub const fn new(width: usize, height: usize, format: PixelFormat) -> Self {
        EncoderOptions {
            width,
            height,
            format,
        }
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn set_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }
}
