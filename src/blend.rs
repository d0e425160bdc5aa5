//! N-ary average blend.

use crate::{
    error::{PicfxError, PicfxResult},
    pixmap::{CHANNELS, Pixmap},
};

/// Average an ordered, non-empty set of pixmaps pixel by pixel.
///
/// The output is as wide as the narrowest input and as tall as the
/// shortest, each axis taken independently; larger inputs are implicitly
/// cropped at the bottom/right. Each output channel is the truncated
/// integer mean of that channel across every input at that coordinate.
#[tracing::instrument(skip(sources), fields(count = sources.len()))]
pub fn blend(sources: &[Pixmap]) -> PicfxResult<Pixmap> {
    if sources.is_empty() {
        return Err(PicfxError::EmptyInput);
    }

    let width = sources.iter().map(Pixmap::width).min().unwrap_or(0);
    let height = sources.iter().map(Pixmap::height).min().unwrap_or(0);
    let count = sources.len() as u32;

    let mut out = Pixmap::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let mut acc = [0u32; CHANNELS];
            for src in sources {
                let s = src.offset(x, y);
                let bytes = src.bytes();
                for (c, a) in acc.iter_mut().enumerate() {
                    *a += bytes[s + c] as u32;
                }
            }
            let d = out.offset(x, y);
            let dst = out.bytes_mut();
            for (c, a) in acc.iter().enumerate() {
                dst[d + c] = (a / count) as u8;
            }
        }
    }
    Ok(out)
}
