/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::error;

use pxl_bmp::{BmpDecoder, BmpEncoder};
use pxl_core::color::Color;
use pxl_core::format::PixelFormat;
use pxl_core::options::{DecoderOptions, EncoderOptions};

/// Lifecycle state of a [`Canvas`].
///
/// The transitions are one way per allocation, `create`/`load` move
/// `Uninitialized -> Ready` and `del` moves `Ready -> Uninitialized`.
/// Every pixel operation on an uninitialized canvas is a no-op.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CanvasState {
    Uninitialized,
    Ready
}

/// An in-memory pixel buffer with BMP persistence.
///
/// The buffer is stored in BMP file order, bottom-up rows of BGR or
/// BGRA bytes, so saving and loading move pixel data verbatim. Drawing
/// coordinates are the usual image convention, `(0, 0)` is the top left
/// corner and y grows downward; [`Canvas::set_pixel`] and
/// [`Canvas::get_pixel`] do the vertical flip, nothing else in the
/// library computes buffer offsets.
///
/// Fallible operations return `bool` rather than a `Result`, out of
/// bounds writes are silently dropped and out of bounds reads return
/// the zero color. This makes every primitive clip for free at the
/// pixel level.
///
/// ```
/// use pxl_canvas::Canvas;
/// use pxl_core::color::Color;
/// use pxl_core::format::PixelFormat;
///
/// let mut canvas = Canvas::new(PixelFormat::Bgra);
/// assert!(canvas.create(32, 32));
/// canvas.set_pixel(3, 4, Color::RED);
/// assert_eq!(canvas.get_pixel(3, 4), Color::RED);
/// // out of bounds reads yield the sentinel
/// assert_eq!(canvas.get_pixel(-1, 0), Color::CLEAR);
/// ```
#[derive(Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    format: PixelFormat,
    state: CanvasState,
    pixel_data: Vec<u8>
}

impl Canvas {
    /// Create a new uninitialized canvas with the given pixel layout.
    ///
    /// The layout is fixed for the life of the canvas, `load` will
    /// reject files of the other bit depth.
    pub fn new(format: PixelFormat) -> Canvas {
        Canvas {
            width: 0,
            height: 0,
            format,
            state: CanvasState::Uninitialized,
            pixel_data: vec![]
        }
    }

    /// Allocate a zero-filled buffer of `width * height` pixels.
    ///
    /// Returns `false` without touching the canvas if it is already
    /// initialized or either dimension is zero.
    pub fn create(&mut self, width: usize, height: usize) -> bool {
        if self.state == CanvasState::Ready || width == 0 || height == 0 {
            return false;
        }

        self.width = width;
        self.height = height;
        self.pixel_data = vec![0_u8; width * height * self.format.num_components()];
        self.state = CanvasState::Ready;

        true
    }

    /// Populate the canvas from a BMP file.
    ///
    /// Returns `false`, leaving the canvas uninitialized, if the canvas
    /// is already initialized, the file cannot be opened, or the file is
    /// not a valid BMP of this canvas' bit depth. Failures are logged.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> bool {
        if self.state == CanvasState::Ready {
            return false;
        }

        let file = match File::open(path.as_ref()) {
            Ok(file) => file,
            Err(err) => {
                error!("Cannot open {:?}: {}", path.as_ref(), err);
                return false;
            }
        };

        let mut decoder =
            BmpDecoder::new_with_options(BufReader::new(file), DecoderOptions::default());

        if let Err(err) = decoder.decode_headers() {
            error!("Cannot decode {:?}: {:?}", path.as_ref(), err);
            return false;
        }
        // both are Some after header decode
        let (width, height) = decoder.dimensions().unwrap();
        let format = decoder.pixel_format().unwrap();

        if format != self.format {
            error!(
                "Bit depth mismatch in {:?}, expected {} got {}",
                path.as_ref(),
                self.format.bits_per_pixel(),
                format.bits_per_pixel()
            );
            return false;
        }

        let pixels = match decoder.decode() {
            Ok(pixels) => pixels,
            Err(err) => {
                error!("Cannot decode {:?}: {:?}", path.as_ref(), err);
                return false;
            }
        };

        self.width = width;
        self.height = height;
        self.pixel_data = pixels;
        self.state = CanvasState::Ready;

        true
    }

    /// Write the canvas to a BMP file.
    ///
    /// Returns `false` if the canvas is uninitialized or the file cannot
    /// be written. Failures are logged.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> bool {
        if self.state != CanvasState::Ready {
            return false;
        }

        let file = match File::create(path.as_ref()) {
            Ok(file) => file,
            Err(err) => {
                error!("Cannot create {:?}: {}", path.as_ref(), err);
                return false;
            }
        };

        let options = EncoderOptions::new(self.width, self.height, self.format);
        let encoder = BmpEncoder::new(&self.pixel_data, options);

        match encoder.encode(BufWriter::new(file)) {
            Ok(_) => true,
            Err(err) => {
                error!("Cannot encode {:?}: {:?}", path.as_ref(), err);
                false
            }
        }
    }

    /// Resize the buffer, keeping existing content anchored at the top
    /// left corner. Newly exposed pixels are zero.
    ///
    /// Returns `false` if the canvas is uninitialized, a dimension is
    /// zero, or the dimensions are unchanged.
    pub fn resize(&mut self, new_width: usize, new_height: usize) -> bool {
        if self.state != CanvasState::Ready || new_width == 0 || new_height == 0 {
            return false;
        }
        if new_width == self.width && new_height == self.height {
            return false;
        }

        let ncomp = self.format.num_components();
        let mut new_data = vec![0_u8; new_width * new_height * ncomp];

        let keep_w = self.width.min(new_width);
        let keep_h = self.height.min(new_height);

        for y in 0..keep_h {
            for x in 0..keep_w {
                let src = ((self.height - y - 1) * self.width + x) * ncomp;
                let dst = ((new_height - y - 1) * new_width + x) * ncomp;

                new_data[dst..dst + ncomp].copy_from_slice(&self.pixel_data[src..src + ncomp]);
            }
        }

        self.width = new_width;
        self.height = new_height;
        self.pixel_data = new_data;

        true
    }

    /// Zero-fill the buffer, every pixel becomes transparent black
    pub fn clear(&mut self) {
        self.pixel_data.fill(0);
    }

    /// Free the buffer and return to the uninitialized state.
    ///
    /// Returns `false` if the canvas was not initialized.
    pub fn del(&mut self) -> bool {
        if self.state != CanvasState::Ready {
            return false;
        }

        self.width = 0;
        self.height = 0;
        self.pixel_data = vec![];
        self.state = CanvasState::Uninitialized;

        true
    }

    pub fn is_initialized(&self) -> bool {
        self.state == CanvasState::Ready
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn pixel_format(&self) -> PixelFormat {
        self.format
    }

    /// Size of the pixel buffer in bytes
    pub fn raw_size(&self) -> usize {
        self.pixel_data.len()
    }

    /// The raw buffer in file order, bottom-up BGR(A) rows
    pub fn data(&self) -> &[u8] {
        &self.pixel_data
    }

    /// Mutable access to the raw buffer in file order
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.pixel_data
    }

    /// Byte offset of the pixel at image coordinates `(x, y)`.
    ///
    /// Rows are stored bottom-up, this is the only place the flip
    /// happens.
    fn offset(&self, x: usize, y: usize) -> usize {
        ((self.height - y - 1) * self.width + x) * self.format.num_components()
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.state == CanvasState::Ready
            && x >= 0
            && y >= 0
            && (x as usize) < self.width
            && (y as usize) < self.height
    }

    /// Write a pixel, a no-op when out of bounds or uninitialized.
    ///
    /// On a 24-bit canvas the color's alpha is dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if !self.in_bounds(x, y) {
            return;
        }

        let offset = self.offset(x as usize, y as usize);
        let pixel = &mut self.pixel_data[offset..];

        pixel[0] = color.blue();
        pixel[1] = color.green();
        pixel[2] = color.red();

        if self.format.has_alpha() {
            pixel[3] = color.alpha();
        }
    }

    /// Write a fully opaque pixel from individual channel values
    pub fn set_pixel_rgb(&mut self, x: i32, y: i32, red: u8, green: u8, blue: u8) {
        self.set_pixel(x, y, Color::from_rgb(red, green, blue));
    }

    /// Read a pixel, returning [`Color::CLEAR`] when out of bounds or
    /// uninitialized.
    ///
    /// The sentinel is also a valid color, callers that need to tell the
    /// two apart use [`Canvas::try_get_pixel`].
    pub fn get_pixel(&self, x: i32, y: i32) -> Color {
        self.try_get_pixel(x, y).unwrap_or(Color::CLEAR)
    }

    /// Read a pixel, `None` when out of bounds or uninitialized.
    ///
    /// A 24-bit canvas reports every in-bounds pixel as fully opaque.
    pub fn try_get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if !self.in_bounds(x, y) {
            return None;
        }

        let offset = self.offset(x as usize, y as usize);
        let pixel = &self.pixel_data[offset..];

        let alpha = if self.format.has_alpha() {
            pixel[3]
        } else {
            u8::MAX
        };

        Some(Color::from_rgba(pixel[2], pixel[1], pixel[0], alpha))
    }
}
