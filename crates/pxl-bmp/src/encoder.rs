/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding support for the BMP image format

use pxl_core::bytestream::{ByteWriter, ByteWriterTrait};
use pxl_core::format::PixelFormat;
use pxl_core::options::EncoderOptions;

use crate::common::{
    data_offset, dib_header_size, row_padding, BmpCompression, ALPHA_MASK, BLUE_MASK, GREEN_MASK,
    LCS_WINDOWS, PIXELS_PER_METER, RED_MASK
};
use crate::BmpEncoderErrors;

/// A BMP encoder
///
/// The encoder's entry point is `new` which initializes the encoder
///
/// # NOTE.
///
/// Data is expected to be in file order already, bottom-up rows of
/// BGR or BGRA bytes matching the pixel format in the options. The
/// encoder adds headers and the 24-bit row padding, it never reorders
/// channels or rows.
///
/// # Example
/// - Encodes a 2 by 2 BGRA image
/// ```
/// use pxl_core::format::PixelFormat;
/// use pxl_core::options::EncoderOptions;
/// use pxl_bmp::BmpEncoder;
///
/// let image: [u8; 16] = std::array::from_fn(|c| c as u8);
///
/// let options = EncoderOptions::new(2, 2, PixelFormat::Bgra);
///
/// let mut write_to = vec![];
/// BmpEncoder::new(&image, options).encode(&mut write_to).unwrap();
/// ```
pub struct BmpEncoder<'a> {
    data:    &'a [u8],
    options: EncoderOptions
}

impl<'a> BmpEncoder<'a> {
    /// Create a new encoder which will encode the specified data
    /// whose layout is contained in options
    ///
    /// # Arguments
    /// - data: The pixel data to encode
    /// - options: Image width, height and pixel format
    pub fn new(data: &'a [u8], options: EncoderOptions) -> BmpEncoder<'a> {
        BmpEncoder { data, options }
    }

    fn encode_headers<T: ByteWriterTrait>(
        &self, stream: &mut ByteWriter<T>, raw_size: u32
    ) -> Result<(), BmpEncoderErrors> {
        let format = self.options.format();
        let offset = data_offset(format);
        let file_size = offset + raw_size;

        // 14-byte file header
        stream.write_all(b"BM")?;
        stream.write_u32_le(file_size)?;
        stream.write_u16_le(0)?;
        stream.write_u16_le(0)?;
        stream.write_u32_le(offset)?;

        // information header, v3 fields first
        stream.write_u32_le(dib_header_size(format))?;
        stream.write_u32_le(self.options.width() as u32)?;
        stream.write_u32_le(self.options.height() as u32)?;
        stream.write_u16_le(1)?;
        stream.write_u16_le(format.bits_per_pixel())?;
        stream.write_u32_le(match format {
            PixelFormat::Bgr => BmpCompression::Rgb.to_u32(),
            PixelFormat::Bgra => BmpCompression::Bitfields.to_u32()
        })?;
        stream.write_u32_le(raw_size)?;
        stream.write_u32_le(PIXELS_PER_METER)?;
        stream.write_u32_le(PIXELS_PER_METER)?;
        stream.write_u32_le(0)?;
        stream.write_u32_le(0)?;

        if format == PixelFormat::Bgra {
            // v4 extension, channel masks and colorspace
            stream.write_u32_le(RED_MASK)?;
            stream.write_u32_le(GREEN_MASK)?;
            stream.write_u32_le(BLUE_MASK)?;
            stream.write_u32_le(ALPHA_MASK)?;
            stream.write_u32_le(LCS_WINDOWS)?;
            // CIEXYZTRIPLE endpoints, unused for this colorspace
            stream.write_const_bytes(&[0_u8; 36])?;
            // red, green and blue gamma
            stream.write_u32_le(0)?;
            stream.write_u32_le(0)?;
            stream.write_u32_le(0)?;
        }

        Ok(())
    }

    /// Encode the contents, writing the file to `sink` and returning the
    /// number of bytes written, or an error if anything occurs
    pub fn encode<T: ByteWriterTrait>(&self, sink: T) -> Result<usize, BmpEncoderErrors> {
        let width = self.options.width();
        let height = self.options.height();
        let format = self.options.format();

        if width > i32::MAX as usize {
            return Err(BmpEncoderErrors::TooLargeDimensions(width));
        }
        if height > i32::MAX as usize {
            return Err(BmpEncoderErrors::TooLargeDimensions(height));
        }

        let expected = width * height * format.num_components();
        let found = self.data.len();

        if expected != found {
            return Err(BmpEncoderErrors::TooShortInput(expected, found));
        }

        let pad = match format {
            PixelFormat::Bgr => row_padding(width),
            PixelFormat::Bgra => 0
        };
        let raw_size = ((width * format.num_components() + pad) * height) as u32;

        let mut stream = ByteWriter::new(sink);

        stream.reserve(data_offset(format) as usize + raw_size as usize)?;

        self.encode_headers(&mut stream, raw_size)?;

        match format {
            PixelFormat::Bgra => stream.write_all(self.data)?,
            PixelFormat::Bgr => {
                let padding = [0_u8; 3];
                let row_len = width * 3;

                for row in self.data.chunks_exact(row_len) {
                    stream.write_all(row)?;
                    stream.write_all(&padding[..pad])?;
                }
            }
        }

        stream.flush()?;

        Ok(stream.bytes_written())
    }
}
