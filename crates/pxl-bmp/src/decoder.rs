/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

// A note on the subset of BMP this decoder accepts.
//
// BMP has accumulated many variants over the years, this library reads
// back exactly the two layouts its encoder produces.
//
// - 24-bit: 40 byte info header (WinBMPv3), no compression, rows padded
//   to four bytes.
// - 32-bit: 108 byte info header (WinBMPv4), BITFIELDS compression with
//   the fixed masks B=0x000000ff G=0x0000ff00 R=0x00ff0000 A=0xff000000.
//
// Both store rows bottom-up. Paletted, RLE and 16-bit files are rejected
// at the bit depth check.

use log::{trace, warn};

use pxl_core::bytestream::{ByteReader, ByteReaderTrait};
use pxl_core::format::PixelFormat;
use pxl_core::options::DecoderOptions;

use crate::common::{
    row_padding, BmpCompression, ALPHA_MASK, BLUE_MASK, GREEN_MASK, RED_MASK
};
use crate::BmpDecoderErrors;

/// Probe some bytes to see
/// if they consist of a BMP image this library can decode
pub fn probe_bmp(bytes: &[u8]) -> bool {
    if let Some(magic_bytes) = bytes.get(0..2) {
        if magic_bytes == b"BM" {
            // skip file_size   -> 4
            // skip reserved    -> 4
            // skip data offset -> 4
            // read info header size
            if let Some(sz) = bytes.get(14) {
                return *sz == 40 || *sz == 108;
            }
        }
    }
    false
}

/// A BMP decoder for 24-bit and 32-bit images.
///
/// # Usage
/// Decoding happens in two phases, [`decode_headers`](BmpDecoder::decode_headers)
/// parses and validates the headers after which the image metadata
/// accessors return `Some`, then [`decode`](BmpDecoder::decode) or
/// [`decode_into`](BmpDecoder::decode_into) reads the pixel data.
///
/// ```no_run
/// use std::io::Cursor;
/// use pxl_bmp::BmpDecoder;
///
/// fn main() -> Result<(), pxl_bmp::BmpDecoderErrors> {
///     let source = Cursor::new(std::fs::read("image.bmp").unwrap());
///     let mut decoder = BmpDecoder::new(source);
///     decoder.decode_headers()?;
///     // after decoding headers, we can safely access the image metadata
///     let (w, h) = decoder.dimensions().unwrap();
///     println!("Image width: {}\t Image height: {}", w, h);
///
///     let pixels = decoder.decode()?;
///     println!("Pixels length: {}", pixels.len());
///     Ok(())
/// }
/// ```
///
/// Pixels come out in the file's own order, bottom-up rows of BGR or
/// BGRA bytes.
pub struct BmpDecoder<T>
where
    T: ByteReaderTrait
{
    bytes: ByteReader<T>,
    options: DecoderOptions,
    width: usize,
    height: usize,
    pix_fmt: Option<PixelFormat>,
    data_offset: u32,
    raw_data_size: u32,
    decoded_headers: bool
}

impl<T> BmpDecoder<T>
where
    T: ByteReaderTrait
{
    /// Create a new bmp decoder that reads data from
    /// `data`
    pub fn new(data: T) -> BmpDecoder<T> {
        BmpDecoder::new_with_options(data, DecoderOptions::default())
    }

    /// Create a new decoder instance with specified options
    ///
    /// # Arguments
    ///
    /// * `data`: The buffer from which we will read data from
    /// * `options`: Specialized options for this decoder
    pub fn new_with_options(data: T, options: DecoderOptions) -> BmpDecoder<T> {
        BmpDecoder {
            bytes: ByteReader::new(data),
            options,
            width: 0,
            height: 0,
            pix_fmt: None,
            data_offset: 0,
            raw_data_size: 0,
            decoded_headers: false
        }
    }

    /// Decode headers stored in the bmp file and store
    /// information in the decode context
    ///
    /// After calling this, the metadata accessors return `Some` but no
    /// pixel data has been read yet
    pub fn decode_headers(&mut self) -> Result<(), BmpDecoderErrors> {
        if self.decoded_headers {
            return Ok(());
        }

        if self.bytes.get_u8_err()? != b'B' || self.bytes.get_u8_err()? != b'M' {
            return Err(BmpDecoderErrors::InvalidMagicBytes);
        }

        let file_size = self.bytes.get_u32_le_err()?;
        let actual_size = self.bytes.size()?;

        if u64::from(file_size) != actual_size {
            return Err(BmpDecoderErrors::SizeMismatch(
                u64::from(file_size),
                actual_size
            ));
        }
        // reserved fields
        self.bytes.skip(4)?;

        let data_offset = self.bytes.get_u32_le_err()?;
        let ihsize = self.bytes.get_u32_le_err()?;

        if ihsize != 40 && ihsize != 108 {
            return Err(BmpDecoderErrors::GenericStatic(
                "Unknown information header size"
            ));
        }
        if data_offset < 14 + ihsize || data_offset > file_size {
            return Err(BmpDecoderErrors::GenericStatic("Invalid data offset"));
        }

        let width = self.bytes.get_u32_le_err()? as i32;
        let height = self.bytes.get_u32_le_err()? as i32;

        if width <= 0 {
            return Err(BmpDecoderErrors::GenericStatic(
                "Width is not positive, invalid image"
            ));
        }
        if height <= 0 {
            // negative height marks a top-down image, never produced by
            // this library's encoder
            return Err(BmpDecoderErrors::GenericStatic(
                "Height is not positive, top-down images are unsupported"
            ));
        }

        self.width = width as usize;
        self.height = height as usize;

        if self.height > self.options.max_height() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "height",
                self.options.max_height(),
                self.height
            ));
        }
        if self.width > self.options.max_width() {
            return Err(BmpDecoderErrors::TooLargeDimensions(
                "width",
                self.options.max_width(),
                self.width
            ));
        }

        trace!("Width: {}", self.width);
        trace!("Height: {}", self.height);

        // planes
        if self.bytes.get_u16_le_err()? != 1 {
            return Err(BmpDecoderErrors::GenericStatic("Invalid BMP header"));
        }

        let depth = self.bytes.get_u16_le_err()?;

        let pix_fmt = match depth {
            24 => PixelFormat::Bgr,
            32 => PixelFormat::Bgra,
            _ => return Err(BmpDecoderErrors::WrongBitDepth(depth))
        };

        let compression = match BmpCompression::from_u32(self.bytes.get_u32_le_err()?) {
            Some(c) => c,
            None => {
                return Err(BmpDecoderErrors::GenericStatic(
                    "Unsupported BMP compression scheme"
                ));
            }
        };

        match (pix_fmt, compression) {
            (PixelFormat::Bgr, BmpCompression::Rgb) => {}
            // plain RGB 32-bit files from other writers are still BGRA
            // in file order, accept them
            (PixelFormat::Bgra, _) => {}
            _ => {
                return Err(BmpDecoderErrors::GenericStatic(
                    "Compression scheme does not match bit depth"
                ));
            }
        }

        let raw_data_size = self.bytes.get_u32_le_err()?;
        let expected_raw_size = file_size - data_offset;

        self.raw_data_size = if raw_data_size != expected_raw_size {
            let msg = format!(
                "Raw data size {} does not match file size minus data offset {}, correcting",
                raw_data_size, expected_raw_size
            );
            if self.options.strict_mode() {
                return Err(BmpDecoderErrors::Generic(msg));
            }
            warn!("{}", msg);
            expected_raw_size
        } else {
            raw_data_size
        };

        if compression == BmpCompression::Bitfields && ihsize == 108 {
            // remaining v3 fields, resolution and color counts
            self.bytes.skip(16)?;

            let masks = [
                self.bytes.get_u32_le_err()?,
                self.bytes.get_u32_le_err()?,
                self.bytes.get_u32_le_err()?,
                self.bytes.get_u32_le_err()?
            ];

            if masks != [RED_MASK, GREEN_MASK, BLUE_MASK, ALPHA_MASK] {
                let msg = format!("Unexpected channel masks {:08x?}", masks);
                if self.options.strict_mode() {
                    return Err(BmpDecoderErrors::Generic(msg));
                }
                warn!("{}", msg);
            }
        }

        trace!("Pixel format : {:?}", pix_fmt);
        trace!("Compression  : {:?}", compression);

        self.pix_fmt = Some(pix_fmt);
        self.data_offset = data_offset;
        self.decoded_headers = true;

        Ok(())
    }

    /// Image width and height
    ///
    /// Returns `None` if headers have not been decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            return Some((self.width, self.height));
        }
        None
    }

    /// Layout the decoded pixels will have
    ///
    /// Returns `None` if headers have not been decoded
    pub const fn pixel_format(&self) -> Option<PixelFormat> {
        self.pix_fmt
    }

    /// Return the expected size of the output buffer for which
    /// a contiguous slice of `&[u8]` can store it without needing reallocation
    ///
    /// Returns `None` if headers haven't been decoded or if calculation overflows
    pub fn output_buf_size(&self) -> Option<usize> {
        let pix_fmt = self.pix_fmt?;

        self.width
            .checked_mul(self.height)?
            .checked_mul(pix_fmt.num_components())
    }

    /// Decode the pixel data into `buf`
    ///
    /// `buf` must be at least [`output_buf_size`](BmpDecoder::output_buf_size)
    /// bytes, the pixels land in file order, bottom-up BGR(A) rows with
    /// the 24-bit row padding stripped
    pub fn decode_into(&mut self, buf: &mut [u8]) -> Result<(), BmpDecoderErrors> {
        self.decode_headers()?;

        let expected = self
            .output_buf_size()
            .ok_or(BmpDecoderErrors::OverflowOccurred)?;

        let found = buf.len();
        if found < expected {
            return Err(BmpDecoderErrors::TooSmallBuffer(expected, found));
        }

        let on_disk_size = match self.pix_fmt {
            Some(PixelFormat::Bgra) => expected,
            Some(PixelFormat::Bgr) => (self.width * 3 + row_padding(self.width)) * self.height,
            None => unreachable!()
        };
        if (self.raw_data_size as usize) < on_disk_size {
            return Err(BmpDecoderErrors::GenericStatic(
                "Raw data size cannot hold the pixel data"
            ));
        }

        self.bytes.set_position(self.data_offset as usize)?;

        match self.pix_fmt {
            Some(PixelFormat::Bgra) => {
                self.bytes.read_exact_bytes(&mut buf[..expected])?;
            }
            Some(PixelFormat::Bgr) => {
                let row_len = self.width * 3;
                let pad = row_padding(self.width);

                for row in buf[..expected].chunks_exact_mut(row_len) {
                    self.bytes.read_exact_bytes(row)?;

                    if pad > 0 {
                        self.bytes.skip(pad)?;
                    }
                }
            }
            None => unreachable!()
        }

        Ok(())
    }

    /// Decode the file returning the pixel data or an error if it occurs
    pub fn decode(&mut self) -> Result<Vec<u8>, BmpDecoderErrors> {
        self.decode_headers()?;

        let size = self
            .output_buf_size()
            .ok_or(BmpDecoderErrors::OverflowOccurred)?;

        let mut buf = vec![0_u8; size];
        self.decode_into(&mut buf)?;

        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{probe_bmp, BmpDecoder};
    use crate::BmpDecoderErrors;

    #[test]
    fn rejects_bad_magic() {
        let mut decoder = BmpDecoder::new(Cursor::new(b"PM\0\0".to_vec()));

        assert!(matches!(
            decoder.decode_headers(),
            Err(BmpDecoderErrors::InvalidMagicBytes)
        ));
    }

    #[test]
    fn rejects_declared_size_mismatch() {
        // valid magic, file size field claims 200 bytes
        let mut data = b"BM".to_vec();
        data.extend_from_slice(&200_u32.to_le_bytes());
        data.extend_from_slice(&[0_u8; 60]);

        let mut decoder = BmpDecoder::new(Cursor::new(data));

        assert!(matches!(
            decoder.decode_headers(),
            Err(BmpDecoderErrors::SizeMismatch(200, _))
        ));
    }

    #[test]
    fn probe_checks_info_header() {
        let mut data = b"BM".to_vec();
        data.extend_from_slice(&[0_u8; 12]);
        data.push(40);

        assert!(probe_bmp(&data));

        *data.last_mut().unwrap() = 124;
        assert!(!probe_bmp(&data));

        assert!(!probe_bmp(b"BM"));
        assert!(!probe_bmp(b"ff"));
    }
}
