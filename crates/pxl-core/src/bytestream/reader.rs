/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use std::fmt::Formatter;
use std::io::SeekFrom;

use crate::bytestream::ByteReaderTrait;

/// Errors that can occur when reading from or writing to a byte stream
pub enum ByteIoError {
    /// An error from the underlying std I/O object
    StdIoError(std::io::Error),
    /// A length did not fit the integer type a conversion needed
    TryFromIntError(std::num::TryFromIntError),
    /// Not enough bytes, expected and found
    NotEnoughBytes(usize, usize),
    /// Generic message
    Generic(&'static str),
}

impl std::fmt::Debug for ByteIoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ByteIoError::StdIoError(err) => {
                writeln!(f, "Underlying I/O error {err}")
            }
            ByteIoError::TryFromIntError(err) => {
                writeln!(f, "Cannot convert to int {err}")
            }
            ByteIoError::NotEnoughBytes(expected, found) => {
                writeln!(f, "Not enough bytes, expected {expected} but found {found}")
            }
            ByteIoError::Generic(err) => {
                writeln!(f, "Generic I/O error: {err}")
            }
        }
    }
}

impl From<std::io::Error> for ByteIoError {
    fn from(value: std::io::Error) -> Self {
        ByteIoError::StdIoError(value)
    }
}

impl From<std::num::TryFromIntError> for ByteIoError {
    fn from(value: std::num::TryFromIntError) -> Self {
        ByteIoError::TryFromIntError(value)
    }
}

impl From<&'static str> for ByteIoError {
    fn from(value: &'static str) -> Self {
        ByteIoError::Generic(value)
    }
}

/// A wrapper around a byte source adding endian-aware integer reads
pub struct ByteReader<T: ByteReaderTrait> {
    inner: T,
}

impl<T: ByteReaderTrait> ByteReader<T> {
    pub fn new(source: T) -> ByteReader<T> {
        ByteReader { inner: source }
    }

    /// Destroy this reader returning the underlying source of the bytes
    /// from which we were decoding
    #[inline(always)]
    pub fn consume(self) -> T {
        self.inner
    }

    /// Skip `num` bytes ahead in the stream
    #[inline(always)]
    pub fn skip(&mut self, num: usize) -> Result<u64, ByteIoError> {
        self.inner.seek_bytes(SeekFrom::Current(num as i64))
    }

    /// Move the cursor to an absolute position from the stream start
    #[inline]
    pub fn set_position(&mut self, position: usize) -> Result<(), ByteIoError> {
        self.inner.seek_bytes(SeekFrom::Start(position as u64))?;
        Ok(())
    }

    #[inline(always)]
    pub fn eof(&mut self) -> Result<bool, ByteIoError> {
        self.inner.at_eof()
    }

    #[inline(always)]
    pub fn position(&mut self) -> Result<u64, ByteIoError> {
        self.inner.byte_position()
    }

    /// Total size of the underlying stream in bytes
    #[inline(always)]
    pub fn size(&mut self) -> Result<u64, ByteIoError> {
        self.inner.total_size()
    }

    /// Read a single byte, erroring out when the stream is exhausted
    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, ByteIoError> {
        let mut buf = [0];
        self.inner.read_const_bytes(&mut buf)?;
        Ok(buf[0])
    }

    /// Read a single byte, returning `0` when the stream is exhausted
    #[inline(always)]
    pub fn get_u8(&mut self) -> u8 {
        let mut buf = [0];
        let _ = self.inner.read_bytes(&mut buf);
        buf[0]
    }

    #[inline(always)]
    pub fn read_fixed_bytes_or_error<const N: usize>(&mut self) -> Result<[u8; N], ByteIoError> {
        let mut byte_store: [u8; N] = [0; N];
        match self.inner.read_const_bytes(&mut byte_store) {
            Ok(_) => Ok(byte_store),
            Err(e) => Err(e),
        }
    }

    pub fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.inner.read_exact_bytes(buf)
    }

    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        self.inner.read_bytes(buf)
    }
}

enum Mode {
    // Big endian
    BE,
    // Little Endian
    LE,
}

macro_rules! get_single_type {
    ($name:tt,$name2:tt,$name3:tt,$int_type:tt) => {
        impl<T: ByteReaderTrait> ByteReader<T> {
            #[inline(always)]
            fn $name(&mut self, mode: Mode) -> Result<$int_type, ByteIoError> {
                const SIZE_OF_VAL: usize = core::mem::size_of::<$int_type>();

                let mut space = [0; SIZE_OF_VAL];

                match self.inner.read_const_bytes(&mut space) {
                    Ok(_) => match mode {
                        Mode::BE => Ok($int_type::from_be_bytes(space)),
                        Mode::LE => Ok($int_type::from_le_bytes(space)),
                    },
                    Err(e) => Err(e),
                }
            }

            #[doc = concat!("Read ", stringify!($int_type), " as a big endian integer")]
            #[doc = concat!(
                "Returning an error if the underlying buffer cannot support a ",
                stringify!($int_type),
                " read."
            )]
            #[inline]
            pub fn $name2(&mut self) -> Result<$int_type, ByteIoError> {
                self.$name(Mode::BE)
            }

            #[doc = concat!("Read ", stringify!($int_type), " as a little endian integer")]
            #[doc = concat!(
                "Returning an error if the underlying buffer cannot support a ",
                stringify!($int_type),
                " read."
            )]
            #[inline]
            pub fn $name3(&mut self) -> Result<$int_type, ByteIoError> {
                self.$name(Mode::LE)
            }
        }
    };
}

get_single_type!(get_u16_inner_or_die, get_u16_be_err, get_u16_le_err, u16);
get_single_type!(get_u32_inner_or_die, get_u32_be_err, get_u32_le_err, u32);
