/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Traits for byte sources and byte sinks
//!
//! Implementations are provided for the types the library reads from and
//! writes to in practice: in-memory cursors and vectors plus buffered
//! files.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Cursor, Read, Seek, SeekFrom, Write};

use crate::bytestream::reader::ByteIoError;

/// The input trait implemented for byte sources.
///
/// This provides the basic functions needed by the pxl decoders with
/// easy support for extending it to multiple implementations.
pub trait ByteReaderTrait {
    /// Read exact bytes required to fill `buf` or return an error if that
    /// isn't possible
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError>;

    /// Read exact bytes required to fill `buf` or return an error if that
    /// isn't possible
    ///
    /// Same as [`read_exact_bytes`](Self::read_exact_bytes) but a
    /// separate method so implementations can optimize it to fewer
    /// instructions when the length is a compile time constant
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError>;

    /// Read bytes into `buf` returning how many bytes were read or an
    /// error if one occurred
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError>;

    /// Seek to a new position in the source
    fn seek_bytes(&mut self, from: SeekFrom) -> Result<u64, ByteIoError>;

    /// Report whether we are at the end of the stream
    fn at_eof(&mut self) -> Result<bool, ByteIoError>;

    /// Return the total size of the underlying source in bytes
    ///
    /// The BMP loader cross-checks the declared file size against this to
    /// detect truncated or corrupt files
    fn total_size(&mut self) -> Result<u64, ByteIoError>;

    /// Return the current position of the inner cursor
    fn byte_position(&mut self) -> Result<u64, ByteIoError>;
}

/// The writer trait implemented for byte sinks.
///
/// Anything that implements this trait can be used as a sink for the pxl
/// encoders.
pub trait ByteWriterTrait {
    /// Write all bytes in `buf` to the sink or error out if that is not
    /// possible
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError>;

    /// Write a fixed number of bytes, provided to allow for optimized
    /// writes when the compiler can const fold them
    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError>;

    /// Ensure bytes are written to the sink, like `fsync` for files,
    /// a no-op for in-memory sinks
    fn flush_bytes(&mut self) -> Result<(), ByteIoError>;

    /// A hint for how many bytes the encoder expects to produce,
    /// in-memory sinks can use it to reserve capacity upfront
    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError>;
}

impl<T> ByteReaderTrait for Cursor<T>
where
    T: AsRef<[u8]>,
{
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.read_exact(buf).map_err(ByteIoError::from)
    }

    #[inline(always)]
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError> {
        self.read_exact(buf).map_err(ByteIoError::from)
    }

    #[inline(always)]
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        self.read(buf).map_err(ByteIoError::from)
    }

    #[inline(always)]
    fn seek_bytes(&mut self, from: SeekFrom) -> Result<u64, ByteIoError> {
        self.seek(from).map_err(ByteIoError::from)
    }

    #[inline(always)]
    fn at_eof(&mut self) -> Result<bool, ByteIoError> {
        Ok(self.position() as usize >= self.get_ref().as_ref().len())
    }

    #[inline(always)]
    fn total_size(&mut self) -> Result<u64, ByteIoError> {
        Ok(self.get_ref().as_ref().len() as u64)
    }

    fn byte_position(&mut self) -> Result<u64, ByteIoError> {
        Ok(self.position())
    }
}

impl<T: Read + Seek> ByteReaderTrait for BufReader<T> {
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        self.read_exact(buf).map_err(ByteIoError::from)
    }

    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError> {
        self.read_exact(buf).map_err(ByteIoError::from)
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize, ByteIoError> {
        self.read(buf).map_err(ByteIoError::from)
    }

    fn seek_bytes(&mut self, from: SeekFrom) -> Result<u64, ByteIoError> {
        self.seek(from).map_err(ByteIoError::from)
    }

    fn at_eof(&mut self) -> Result<bool, ByteIoError> {
        self.fill_buf()
            .map(|b| b.is_empty())
            .map_err(ByteIoError::from)
    }

    fn total_size(&mut self) -> Result<u64, ByteIoError> {
        let old_pos = self.stream_position()?;
        let len = self.seek(SeekFrom::End(0))?;

        // Avoid seeking a third time when we were already at the end of
        // the stream. The branch is usually way cheaper than a seek
        // operation.
        if old_pos != len {
            self.seek(SeekFrom::Start(old_pos))?;
        }

        Ok(len)
    }

    fn byte_position(&mut self) -> Result<u64, ByteIoError> {
        self.stream_position().map_err(ByteIoError::from)
    }
}

impl ByteWriterTrait for Vec<u8> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        Ok(())
    }

    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError> {
        self.reserve(size);
        Ok(())
    }
}

impl ByteWriterTrait for &mut Vec<u8> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        Ok(())
    }

    fn reserve_capacity(&mut self, size: usize) -> Result<(), ByteIoError> {
        self.reserve(size);
        Ok(())
    }
}

impl<W: Write> ByteWriterTrait for &mut BufWriter<W> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.write_all(buf).map_err(ByteIoError::StdIoError)
    }

    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        self.write_all(buf).map_err(ByteIoError::StdIoError)
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        self.flush().map_err(ByteIoError::StdIoError)
    }

    fn reserve_capacity(&mut self, _: usize) -> Result<(), ByteIoError> {
        Ok(())
    }
}

impl ByteWriterTrait for BufWriter<File> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ByteIoError> {
        self.write_all(buf).map_err(ByteIoError::StdIoError)
    }

    fn write_const_bytes<const N: usize>(&mut self, buf: &[u8; N]) -> Result<(), ByteIoError> {
        self.write_all(buf).map_err(ByteIoError::StdIoError)
    }

    fn flush_bytes(&mut self) -> Result<(), ByteIoError> {
        self.flush().map_err(ByteIoError::StdIoError)
    }

    fn reserve_capacity(&mut self, _: usize) -> Result<(), ByteIoError> {
        Ok(())
    }
}
