/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Formatter};

use pxl_core::bytestream::ByteIoError;

/// BMP errors that can occur during decoding
#[non_exhaustive]
pub enum BmpDecoderErrors {
    /// The file/bytes do not start with `BM`
    InvalidMagicBytes,
    /// The file size declared in the header does not match the
    /// actual number of bytes in the source
    SizeMismatch(u64, u64),
    /// Bits per pixel other than 24 or 32
    WrongBitDepth(u16),
    /// The output buffer is too small, expected at least
    /// a size but got another size
    TooSmallBuffer(usize, usize),
    /// Generic message
    GenericStatic(&'static str),
    /// Generic allocated message
    Generic(String),
    /// Too large dimensions for a given width or
    /// height
    TooLargeDimensions(&'static str, usize, usize),
    /// A calculation overflowed
    OverflowOccurred,
    IoErrors(ByteIoError)
}

impl Debug for BmpDecoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidMagicBytes => {
                writeln!(f, "Invalid magic bytes, file does not start with BM")
            }
            Self::SizeMismatch(declared, actual) => {
                writeln!(
                    f,
                    "File size mismatch, header declares {} bytes but source holds {}",
                    declared, actual
                )
            }
            Self::WrongBitDepth(depth) => {
                writeln!(f, "Unsupported bit depth {}, expected 24 or 32", depth)
            }
            Self::TooSmallBuffer(expected, found) => {
                writeln!(
                    f,
                    "Too small of buffer, expected {} but found {}",
                    expected, found
                )
            }
            Self::GenericStatic(message) => {
                writeln!(f, "{}", message)
            }
            Self::Generic(message) => {
                writeln!(f, "{}", message)
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension} , {found} exceeds {expected}"
                )
            }
            Self::OverflowOccurred => {
                writeln!(f, "Overflow occurred")
            }
            Self::IoErrors(err) => {
                writeln!(f, "{:?}", err)
            }
        }
    }
}

impl From<ByteIoError> for BmpDecoderErrors {
    fn from(value: ByteIoError) -> Self {
        BmpDecoderErrors::IoErrors(value)
    }
}

/// BMP errors that can occur during encoding
#[non_exhaustive]
pub enum BmpEncoderErrors {
    /// Too short of an input buffer, the buffer size is not the same as
    /// the expected buffer size
    TooShortInput(usize, usize),
    /// Width or height does not fit the 32-bit header fields
    TooLargeDimensions(usize),
    IoErrors(ByteIoError)
}

impl Debug for BmpEncoderErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TooShortInput(expected, found) => {
                writeln!(
                    f,
                    "Too short of input, expected {expected} bytes, found {found}"
                )
            }
            Self::TooLargeDimensions(dims) => {
                writeln!(f, "Too large dimensions {dims}")
            }
            Self::IoErrors(err) => {
                writeln!(f, "I/O error {:?}", err)
            }
        }
    }
}

impl From<ByteIoError> for BmpEncoderErrors {
    fn from(value: ByteIoError) -> Self {
        BmpEncoderErrors::IoErrors(value)
    }
}
