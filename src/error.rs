pub type PicfxResult<T> = Result<T, PicfxError>;

#[derive(thiserror::Error, Debug)]
pub enum PicfxError {
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} buffer")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("blend requires at least one source image")]
    EmptyInput,

    #[error("unsupported rotation: {0} degrees (expected 90, 180 or 270)")]
    UnknownRotation(u16),

    #[error("unsupported flip axis: '{0}' (expected H or V)")]
    UnknownFlipAxis(String),

    #[error("{width}x{height} buffer needs {expected} bytes, got {actual}")]
    InvalidDimensions {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PicfxError {
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }
}
