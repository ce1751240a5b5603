/*
 * Copyright (c) 2024.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Drawing primitives, text rendering and filters for `pxl-canvas`
//!
//! Every function in this crate is a free function taking the target
//! [`Canvas`](pxl_canvas::Canvas) first and reaching pixels only through
//! its checked accessors, so coordinates may be negative or exceed the
//! canvas and simply clip. All primitives are silent no-ops on an
//! uninitialized canvas or degenerate geometry, matching the canvas
//! error policy.
//!
//! ```
//! use pxl_canvas::Canvas;
//! use pxl_core::color::Color;
//! use pxl_core::format::PixelFormat;
//! use pxl_draw::{circle, draw_string, line};
//!
//! let mut canvas = Canvas::new(PixelFormat::Bgra);
//! canvas.create(64, 64);
//!
//! circle(&mut canvas, 32, 32, 20, Color::DARK_BLUE);
//! line(&mut canvas, 0, 0, 63, 63, Color::YELLOW);
//! draw_string(&mut canvas, 2, 2, 1, "hi", Color::WHITE);
//! ```

pub use crate::box_blur::box_blur;
pub use crate::circle::{circle, ellipse, ring};
pub use crate::fill::{fill, flood_fill};
pub use crate::flip::{flip_horizontal, flip_vertical};
pub use crate::grayscale::grayscale;
pub use crate::invert::invert;
pub use crate::line::line;
pub use crate::rect::{border, rectangle, round_border, round_rectangle};
pub use crate::sector::{circle_sector, ellipse_sector, ring_sector};
pub use crate::text::{draw_char, draw_string};
pub use crate::triangle::{triangle, triangle_border};

mod box_blur;
mod circle;
mod fill;
mod flip;
pub mod font;
mod grayscale;
mod invert;
mod line;
mod rect;
mod sector;
mod text;
mod triangle;
