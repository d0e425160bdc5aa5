//! In-place per-pixel channel adjustments.

use crate::pixmap::{CHANNELS, Pixmap};

/// Replace every channel `c` with `255 - c`.
pub fn invert(px: &mut Pixmap) {
    for b in px.bytes_mut() {
        *b = 255 - *b;
    }
}

/// Set every pixel to the truncated mean of its three channels.
///
/// Uses integer division, so `(254, 255, 255)` maps to `254` rather than
/// rounding up. This matches the reference output byte for byte.
pub fn grayscale(px: &mut Pixmap) {
    for p in px.bytes_mut().chunks_exact_mut(CHANNELS) {
        let avg = ((p[0] as u16 + p[1] as u16 + p[2] as u16) / 3) as u8;
        p[0] = avg;
        p[1] = avg;
        p[2] = avg;
    }
}
