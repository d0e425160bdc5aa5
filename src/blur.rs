//! 3x3 box blur with pass-through borders.

use crate::pixmap::{CHANNELS, Pixmap};

/// Blur with a 3x3 box kernel, leaving the outermost row and column on
/// every side untouched.
///
/// Border pixels are copied from the source verbatim; there is no clamp,
/// reflect, or wrap sampling at the edges. Interior pixels become the
/// truncated mean of their 9-sample neighborhood per channel. Inputs with
/// width <= 2 or height <= 2 have no interior and copy through whole.
pub fn box_blur(src: &Pixmap) -> Pixmap {
    let (w, h) = (src.width(), src.height());
    let bytes = src.bytes();

    // Start from a copy so every border pixel is already correct.
    let mut out = src.clone();
    if w <= 2 || h <= 2 {
        return out;
    }

    let dst = out.bytes_mut();
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let mut acc = [0u32; CHANNELS];
            for dy in -1i32..=1 {
                for dx in -1i32..=1 {
                    let sx = (x as i32 + dx) as u32;
                    let sy = (y as i32 + dy) as u32;
                    let s = src.offset(sx, sy);
                    for (c, a) in acc.iter_mut().enumerate() {
                        *a += bytes[s + c] as u32;
                    }
                }
            }
            let d = src.offset(x, y);
            for (c, a) in acc.iter().enumerate() {
                dst[d + c] = (a / 9) as u8;
            }
        }
    }
    out
}
