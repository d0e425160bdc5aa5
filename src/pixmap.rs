use std::fmt;

use crate::error::{PicfxError, PicfxResult};

/// Bytes per pixel: opaque RGB, no alpha channel.
pub const CHANNELS: usize = 3;

/// An opaque RGB color with 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels packed as `0x00RRGGBB`.
    pub const fn packed(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// An owned 2-D grid of RGB pixels with fixed dimensions.
///
/// Storage is a flat interleaved byte buffer of exactly
/// `width * height * 3` bytes in raster order: origin at the top-left,
/// x increasing rightward, y increasing downward.
///
/// `Pixmap` is not safe for concurrent mutation; callers that share one
/// across threads must synchronize externally.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pixmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Pixmap {
    /// A blank (all-black) pixmap of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * CHANNELS],
        }
    }

    /// Wrap an interleaved RGB byte buffer, validating its length.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> PicfxResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(CHANNELS))
            .ok_or(PicfxError::InvalidDimensions {
                width,
                height,
                expected: usize::MAX,
                actual: data.len(),
            })?;
        if data.len() != expected {
            return Err(PicfxError::InvalidDimensions {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True if `(x, y)` lies within the pixmap's bounds.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: u32, y: u32) -> PicfxResult<Rgb> {
        if !self.contains(x, y) {
            return Err(PicfxError::out_of_bounds(x, y, self.width, self.height));
        }
        let i = self.offset(x, y);
        Ok(Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    pub fn set(&mut self, x: u32, y: u32, rgb: Rgb) -> PicfxResult<()> {
        if !self.contains(x, y) {
            return Err(PicfxError::out_of_bounds(x, y, self.width, self.height));
        }
        let i = self.offset(x, y);
        self.data[i] = rgb.r;
        self.data[i + 1] = rgb.g;
        self.data[i + 2] = rgb.b;
        Ok(())
    }

    /// Raw interleaved RGB bytes in raster order.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Deterministic content fingerprint: a rolling `31 * h + packed_rgb`
    /// over every pixel in raster order. Equal pixmaps always hash equal,
    /// and the value is stable across runs and platforms.
    pub fn content_hash(&self) -> u32 {
        let mut h = 0u32;
        for px in self.data.chunks_exact(CHANNELS) {
            let packed = Rgb::new(px[0], px[1], px[2]).packed();
            h = h.wrapping_mul(31).wrapping_add(packed);
        }
        h
    }

    /// Byte offset of `(x, y)`. Callers must already be in bounds.
    pub(crate) fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

impl fmt::Display for Pixmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks_exact(self.width as usize * CHANNELS) {
            for px in row.chunks_exact(CHANNELS) {
                write!(f, "({},{},{})", px[0], px[1], px[2])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pixmap_is_black() {
        let px = Pixmap::new(3, 2);
        assert_eq!(px.width(), 3);
        assert_eq!(px.height(), 2);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(px.get(x, y).unwrap(), Rgb::BLACK);
            }
        }
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut px = Pixmap::new(4, 4);
        px.set(2, 3, Rgb::new(10, 20, 30)).unwrap();
        assert_eq!(px.get(2, 3).unwrap(), Rgb::new(10, 20, 30));
        assert_eq!(px.get(3, 2).unwrap(), Rgb::BLACK);
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let mut px = Pixmap::new(2, 2);
        assert!(matches!(
            px.get(2, 0),
            Err(PicfxError::OutOfBounds { x: 2, y: 0, .. })
        ));
        assert!(matches!(
            px.set(0, 5, Rgb::BLACK),
            Err(PicfxError::OutOfBounds { x: 0, y: 5, .. })
        ));
        assert!(!px.contains(2, 1));
        assert!(px.contains(1, 1));
    }

    #[test]
    fn from_raw_validates_length() {
        assert!(Pixmap::from_raw(2, 2, vec![0u8; 12]).is_ok());
        assert!(matches!(
            Pixmap::from_raw(2, 2, vec![0u8; 11]),
            Err(PicfxError::InvalidDimensions {
                expected: 12,
                actual: 11,
                ..
            })
        ));
    }

    #[test]
    fn equality_is_structural() {
        let mut a = Pixmap::new(2, 2);
        let mut b = Pixmap::new(2, 2);
        assert_eq!(a, b);

        a.set(1, 1, Rgb::new(1, 2, 3)).unwrap();
        assert_ne!(a, b);
        b.set(1, 1, Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(a, b);

        // Same pixel count, different shape.
        assert_ne!(Pixmap::new(1, 4), Pixmap::new(4, 1));
    }

    #[test]
    fn content_hash_tracks_equality() {
        let mut a = Pixmap::new(2, 2);
        let mut b = Pixmap::new(2, 2);
        assert_eq!(a.content_hash(), b.content_hash());

        a.set(0, 0, Rgb::new(255, 0, 0)).unwrap();
        assert_ne!(a.content_hash(), b.content_hash());
        b.set(0, 0, Rgb::new(255, 0, 0)).unwrap();
        assert_eq!(a.content_hash(), b.content_hash());

        // Single red pixel: h = 31*0 + 0xff0000.
        assert_eq!(
            Pixmap::from_raw(1, 1, vec![255, 0, 0]).unwrap().content_hash(),
            0x00ff_0000
        );
    }

    #[test]
    fn display_dumps_rgb_grid() {
        let mut px = Pixmap::new(2, 1);
        px.set(1, 0, Rgb::new(9, 8, 7)).unwrap();
        assert_eq!(px.to_string(), "(0,0,0)(9,8,7)\n");
    }
}
