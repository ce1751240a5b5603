/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Bytestream reading and writing
//!
//! This exposes the traits and wrappers used for I/O by the pxl
//! encoders and decoders.
//!
//! The traits are the seams: anything that can hand out bytes with
//! seeking implements [`ByteReaderTrait`], anything that can swallow
//! bytes implements [`ByteWriterTrait`]. The [`ByteReader`] and
//! [`ByteWriter`] wrappers add the endian-aware integer accessors the
//! codecs actually call.
//!
//! All multi-byte BMP header fields are little-endian, so decoders and
//! encoders go through the `_le` calls exclusively; the big-endian
//! variants exist because the macro generates both and other formats
//! may want them.

pub use crate::bytestream::reader::{ByteIoError, ByteReader};
pub use crate::bytestream::traits::{ByteReaderTrait, ByteWriterTrait};
pub use crate::bytestream::writer::ByteWriter;

mod reader;
mod traits;
mod writer;
