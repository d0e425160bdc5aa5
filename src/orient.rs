//! Orientation transforms: quarter-turn rotation and axis flips.
//!
//! These never mutate their input; each call allocates a fresh output
//! pixmap and copies pixels into their remapped positions.

use crate::{
    error::{PicfxError, PicfxResult},
    pixmap::{CHANNELS, Pixmap},
};

/// A clockwise rotation restricted to quarter turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    Quarter,
    Half,
    ThreeQuarter,
}

impl Rotation {
    /// Parse a degree count. Anything outside {90, 180, 270} is rejected
    /// here rather than silently passed through.
    pub fn from_degrees(degrees: u16) -> PicfxResult<Self> {
        match degrees {
            90 => Ok(Self::Quarter),
            180 => Ok(Self::Half),
            270 => Ok(Self::ThreeQuarter),
            other => Err(PicfxError::UnknownRotation(other)),
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Self::Quarter => 90,
            Self::Half => 180,
            Self::ThreeQuarter => 270,
        }
    }

    fn quarter_turns(self) -> u32 {
        match self {
            Self::Quarter => 1,
            Self::Half => 2,
            Self::ThreeQuarter => 3,
        }
    }
}

/// The mirror axis of a flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipAxis {
    /// Mirror left-right.
    Horizontal,
    /// Mirror top-bottom.
    Vertical,
}

impl FlipAxis {
    /// Parse the command-line tag, `H` or `V` (case-insensitive).
    pub fn from_tag(tag: &str) -> PicfxResult<Self> {
        match tag {
            "H" | "h" => Ok(Self::Horizontal),
            "V" | "v" => Ok(Self::Vertical),
            other => Err(PicfxError::UnknownFlipAxis(other.to_string())),
        }
    }
}

/// Rotate clockwise by the given quarter-turn count, composing the 90
/// degree primitive. Always returns a new pixmap.
pub fn rotate(src: &Pixmap, rotation: Rotation) -> Pixmap {
    let mut out = rotate90(src);
    for _ in 1..rotation.quarter_turns() {
        out = rotate90(&out);
    }
    out
}

/// Mirror across the given axis into a new same-size pixmap.
pub fn flip(src: &Pixmap, axis: FlipAxis) -> Pixmap {
    let (w, h) = (src.width(), src.height());
    let mut out = Pixmap::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let (dx, dy) = match axis {
                FlipAxis::Horizontal => (w - 1 - x, y),
                FlipAxis::Vertical => (x, h - 1 - y),
            };
            copy_pixel(src, x, y, &mut out, dx, dy);
        }
    }
    out
}

/// One clockwise quarter turn: source `(x, y)` lands at
/// `(height - 1 - y, x)` in an output with swapped dimensions.
fn rotate90(src: &Pixmap) -> Pixmap {
    let (w, h) = (src.width(), src.height());
    let mut out = Pixmap::new(h, w);
    for y in 0..h {
        for x in 0..w {
            copy_pixel(src, x, y, &mut out, h - 1 - y, x);
        }
    }
    out
}

fn copy_pixel(src: &Pixmap, sx: u32, sy: u32, dst: &mut Pixmap, dx: u32, dy: u32) {
    let s = src.offset(sx, sy);
    let d = dst.offset(dx, dy);
    dst.bytes_mut()[d..d + CHANNELS].copy_from_slice(&src.bytes()[s..s + CHANNELS]);
}
