//! Pixel-level raster image transformations.
//!
//! The core is [`Pixmap`], an owned RGB pixel grid, plus a small library
//! of transforms over it: in-place [`invert`] and [`grayscale`], and
//! allocating [`rotate`], [`flip`], [`blend`], and [`box_blur`]. The
//! [`codec`] module and the `picfx` binary are the thin shell that moves
//! pixmaps in and out of image files.

#![forbid(unsafe_code)]

pub mod adjust;
pub mod blend;
pub mod blur;
pub mod codec;
pub mod error;
pub mod orient;
pub mod pixmap;

pub use adjust::{grayscale, invert};
pub use blend::blend;
pub use blur::box_blur;
pub use error::{PicfxError, PicfxResult};
pub use orient::{FlipAxis, Rotation, flip, rotate};
pub use pixmap::{Pixmap, Rgb};
