/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use crate::bytestream::reader::ByteIoError;
use crate::bytestream::ByteWriterTrait;

enum Mode {
    // Big endian
    BE,
    // Little Endian
    LE,
}

/// A wrapper around a byte sink adding endian-aware integer writes
/// and a running count of bytes written
pub struct ByteWriter<T: ByteWriterTrait> {
    inner:         T,
    bytes_written: usize,
}

impl<T: ByteWriterTrait> ByteWriter<T> {
    pub fn new(sink: T) -> ByteWriter<T> {
        ByteWriter {
            inner:         sink,
            bytes_written: 0,
        }
    }

    /// Destroy this writer returning the underlying sink
    pub fn consume(self) -> T {
        self.inner
    }

    /// Number of bytes written so far
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    /// Hint how many bytes the encoder expects to produce
    pub fn reserve(&mut self, size: usize) -> Result<(), ByteIoError> {
        self.inner.reserve_capacity(size)
    }

    /// Write all bytes in `buf` or error out
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.inner.write_all_bytes(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }

    /// Write a compile-time known number of bytes or error out
    pub fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        self.inner.write_const_bytes(buf)?;
        self.bytes_written += N;
        Ok(())
    }

    /// Write a single byte or error out
    pub fn write_u8(&mut self, byte: u8) -> Result<(), ByteIoError> {
        self.write_const_bytes(&[byte])
    }

    /// Ensure all bytes reached the sink
    pub fn flush(&mut self) -> Result<(), ByteIoError> {
        self.inner.flush_bytes()
    }
}

macro_rules! write_single_type {
    ($name:tt,$name2:tt,$name3:tt,$int_type:tt) => {
        impl<T: ByteWriterTrait> ByteWriter<T> {
            #[inline(always)]
            fn $name(&mut self, value: $int_type, mode: Mode) -> Result<(), ByteIoError> {
                // get bits, depending on mode.
                // This should be inlined and not visible in the generated
                // binary since mode is a compile time constant.
                let bytes = match mode {
                    Mode::BE => value.to_be_bytes(),
                    Mode::LE => value.to_le_bytes(),
                };
                self.write_const_bytes(&bytes)
            }

            #[doc = concat!("Write ", stringify!($int_type), " as a big endian integer")]
            #[doc = concat!(
                "Returning an error if the underlying sink cannot support a ",
                stringify!($int_type),
                " write."
            )]
            #[inline]
            pub fn $name2(&mut self, value: $int_type) -> Result<(), ByteIoError> {
                self.$name(value, Mode::BE)
            }

            #[doc = concat!("Write ", stringify!($int_type), " as a little endian integer")]
            #[doc = concat!(
                "Returning an error if the underlying sink cannot support a ",
                stringify!($int_type),
                " write."
            )]
            #[inline]
            pub fn $name3(&mut self, value: $int_type) -> Result<(), ByteIoError> {
                self.$name(value, Mode::LE)
            }
        }
    };
}

write_single_type!(write_u16_inner, write_u16_be, write_u16_le, u16);
write_single_type!(write_u32_inner, write_u32_be, write_u32_le, u32);
