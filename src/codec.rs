//! File decode/encode boundary around the transform core.
//!
//! The transforms themselves never touch the filesystem; everything that
//! reads or writes image files lives here.

use std::path::Path;

use anyhow::Context as _;

use crate::{error::PicfxResult, pixmap::Pixmap};

/// Decode an image file into an opaque RGB pixmap.
///
/// Any format the `image` crate recognizes is accepted; alpha, if present,
/// is dropped by the RGB8 conversion.
pub fn load_pixmap(path: &Path) -> PicfxResult<Pixmap> {
    let dyn_img = image::open(path).with_context(|| format!("decode '{}'", path.display()))?;
    let rgb = dyn_img.to_rgb8();
    let (width, height) = rgb.dimensions();
    tracing::debug!(width, height, path = %path.display(), "decoded image");
    Pixmap::from_raw(width, height, rgb.into_raw())
}

/// Encode a pixmap as a PNG file, creating parent directories as needed.
pub fn save_pixmap(px: &Pixmap, path: &Path) -> PicfxResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        px.bytes(),
        px.width(),
        px.height(),
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
