//! The owned pixel buffer rendered into.

use std::error::Error;
use std::fmt;

/// Failure modes for [`Image::new`].
///
/// The original reference returned a null handle on allocation failure and
/// left zero/negative dimensions as the caller's problem; here both are
/// rejected up front as typed errors instead of a panic or a null pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// `width` or `height` was zero.
    ZeroSize,
    /// The stride-padded, aligned-height word count does not fit in a `usize`.
    DimensionOverflow,
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::ZeroSize => write!(f, "image width and height must both be non-zero"),
            ImageError::DimensionOverflow => {
                write!(f, "image dimensions overflow the platform's address space")
            }
        }
    }
}

impl Error for ImageError {}

/// An owned, row-major `0xRRGGBBAA` pixel buffer, stride-addressed like the
/// reference's `struct urast_image`: each row occupies `stride` bytes, not
/// just `width * 4`, and the buffer has `align_up(height, 2)` rows, not just
/// `height`. The extra columns and rows are padding the core never reads
/// through [`Image::row`]/[`Image::get`], but [`Image::clear`] still fills
/// them, matching the reference's `urast_clear`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    stride: u32,
    data: Vec<u32>,
}

impl Image {
    /// Allocates a new image, cleared to `0x00000000`.
    pub fn new(width: u32, height: u32) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::ZeroSize);
        }
        // Widen to u64 before aligning: `width` or `height` near `u32::MAX`
        // would overflow a u32 add-then-mask `align_up`.
        let stride_words = (width as u64 + 3) & !3;
        let rows = (height as u64 + 1) & !1;
        let stride = u32::try_from(stride_words * 4).map_err(|_| ImageError::DimensionOverflow)?;
        let len = stride_words
            .checked_mul(rows)
            .and_then(|words| usize::try_from(words).ok())
            .ok_or(ImageError::DimensionOverflow)?;
        Ok(Self {
            width,
            height,
            stride,
            data: vec![0; len],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row length in bytes; always a multiple of 16 (4 words), per
    /// `align_up(width, 4) * 4`.
    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Clears every word of the buffer to `color`, including stride padding
    /// and the aligned-height padding rows.
    pub fn clear(&mut self, color: u32) {
        self.data.fill(color);
    }

    /// Borrows the raw, stride-addressed buffer: `stride/4 * align_up(height, 2)`
    /// words, including any column and row padding. Logical per-row access
    /// goes through [`Image::row`]/[`Image::row_mut`].
    pub fn pixels(&self) -> &[u32] {
        &self.data
    }

    /// Borrows the `y`-th row's `width` logical pixels, skipping stride padding.
    pub fn row(&self, y: u32) -> &[u32] {
        let stride_words = self.stride as usize / 4;
        let start = y as usize * stride_words;
        &self.data[start..start + self.width as usize]
    }

    /// Mutably borrows the `y`-th row's `width` logical pixels, skipping
    /// stride padding.
    pub fn row_mut(&mut self, y: u32) -> &mut [u32] {
        let stride_words = self.stride as usize / 4;
        let start = y as usize * stride_words;
        let w = self.width as usize;
        &mut self.data[start..start + w]
    }

    /// Reads a single pixel. Panics if out of bounds, matching the
    /// unconditional in-bounds assumption of [`crate::raster`]'s callers.
    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.row(y)[x as usize]
    }

    /// Writes a single pixel.
    pub fn set(&mut self, x: u32, y: u32, color: u32) {
        self.row_mut(y)[x as usize] = color;
    }
}
