use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ChunkConfigError {
    InvalidImageRect(PixelRectError),
    InvalidComplexRect(ComplexRectError),
}

impl fmt::Display for ChunkConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidImageRect(error) => write!(f, "invalid image rect: {}", error),
            Self::InvalidComplexRect(error) => write!(f, "invalid complex rect: {}", error),
        }
    }
}

impl Error for ChunkConfigError {}

impl From<PixelRectError> for ChunkConfigError {
    fn from(error: PixelRectError) -> Self {
        Self::InvalidImageRect(error)
    }
}

impl From<ComplexRectError> for ChunkConfigError {
    fn from(error: ComplexRectError) -> Self {
        Self::InvalidComplexRect(error)
    }
}

/// One chunk of the output image: the pixel sub-rectangle to fill and the
/// complex-plane window it corresponds to. The complex rect must be sliced
/// with the same scale as the full image, the chunk does not re-derive it.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkConfig {
    image: PixelRect,
    complex: ComplexRect,
}

impl ChunkConfig {
    #[must_use]
    pub fn new(image: PixelRect, complex: ComplexRect) -> Self {
        Self { image, complex }
    }

    /// Re-checks both rect invariants, for chunks that arrived over the wire.
    pub fn validate(&self) -> Result<(), ChunkConfigError> {
        self.image.validate()?;
        self.complex.validate()?;

        Ok(())
    }

    #[must_use]
    pub fn image(&self) -> PixelRect {
        self.image
    }

    #[must_use]
    pub fn complex(&self) -> ComplexRect {
        self.complex
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.image.pixel_count()
    }
}
