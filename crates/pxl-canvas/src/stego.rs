/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Least-significant-bit steganography
//!
//! A message hides one bit per raw buffer byte, each character spread
//! most-significant-bit-first over eight successive bytes, terminated by
//! an embedded NUL. Capacity is therefore `raw_size / 8` characters
//! including the terminator.
//!
//! Decoding a canvas that never had a message embedded produces
//! meaningless bytes, that is by contract not an error.

use log::warn;

use crate::Canvas;

/// Number of characters a canvas can hold, including the NUL terminator
pub fn capacity(canvas: &Canvas) -> usize {
    canvas.raw_size() / 8
}

/// Embed `message` and its NUL terminator into the low bits of the
/// canvas buffer.
///
/// Writing stops when the buffer or the message (terminator included)
/// runs out, whichever comes first, so an oversized message embeds the
/// prefix that fits. Returns `false` if the canvas is uninitialized or
/// the message had to be cut short.
pub fn encode_str(canvas: &mut Canvas, message: &str) -> bool {
    if !canvas.is_initialized() {
        return false;
    }

    let fits = message.len() + 1 <= capacity(canvas);

    if !fits {
        warn!(
            "Message of {} characters exceeds canvas capacity of {}, embedding a prefix",
            message.len() + 1,
            capacity(canvas)
        );
    }

    let data = canvas.data_mut();
    let mut position = 0;

    'message: for ch in message.bytes().chain(core::iter::once(0)) {
        for bit in (0..8).rev() {
            if position == data.len() {
                break 'message;
            }
            data[position] = (data[position] & !1) | ((ch >> bit) & 1);
            position += 1;
        }
    }

    fits
}

/// Recover a message embedded by [`encode_str`].
///
/// Reads eight buffer bytes per character until a NUL or buffer
/// exhaustion. Returns `None` only for an uninitialized canvas, a
/// canvas without a message decodes to garbage.
pub fn decode_str(canvas: &Canvas) -> Option<String> {
    if !canvas.is_initialized() {
        return None;
    }

    let mut message = Vec::new();

    for chunk in canvas.data().chunks_exact(8) {
        let mut ch = 0_u8;

        for byte in chunk {
            ch = (ch << 1) | (byte & 1);
        }

        if ch == 0 {
            break;
        }
        message.push(ch);
    }

    Some(String::from_utf8_lossy(&message).into_owned())
}
