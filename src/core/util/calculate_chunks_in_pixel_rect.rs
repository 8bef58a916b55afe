use crate::core::data::chunk_config::ChunkConfig;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::number_range::{NumberRange, NumberRangeError};
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CalculateChunksError {
    DegenerateRange(NumberRangeError),
    InvalidChunkRect(PixelRectError),
    InvalidChunkRegion(ComplexRectError),
}

impl fmt::Display for CalculateChunksError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateRange(error) => write!(f, "invalid image mapping: {}", error),
            Self::InvalidChunkRect(error) => write!(f, "invalid chunk rect: {}", error),
            Self::InvalidChunkRegion(error) => write!(f, "invalid chunk region: {}", error),
        }
    }
}

impl Error for CalculateChunksError {}

impl From<NumberRangeError> for CalculateChunksError {
    fn from(error: NumberRangeError) -> Self {
        Self::DegenerateRange(error)
    }
}

impl From<PixelRectError> for CalculateChunksError {
    fn from(error: PixelRectError) -> Self {
        Self::InvalidChunkRect(error)
    }
}

impl From<ComplexRectError> for CalculateChunksError {
    fn from(error: ComplexRectError) -> Self {
        Self::InvalidChunkRegion(error)
    }
}

/// Splits a full image rectangle and its complex window into a grid of
/// chunks of at most `chunk_size` pixels per side. Chunk corners are mapped
/// through the full-image ranges, so every chunk slices the same scale.
pub fn calculate_chunks_in_pixel_rect(
    full_rect: PixelRect,
    region: ComplexRect,
    chunk_size: NonZeroU32,
) -> Result<Vec<ChunkConfig>, CalculateChunksError> {
    let width_range = NumberRange::new(full_rect.start().x as f64, full_rect.end().x as f64)?;
    let height_range = NumberRange::new(full_rect.start().y as f64, full_rect.end().y as f64)?;
    let real_range = NumberRange::new(region.start().real, region.end().real)?;
    let imaginary_range = NumberRange::new(region.start().imag, region.end().imag)?;

    let chunk_size = chunk_size.get();
    let mut chunks = Vec::new();
    let mut x = full_rect.start().x;
    while x < full_rect.end().x {
        let chunk_width = chunk_size.min(full_rect.end().x - x);
        let mut y = full_rect.start().y;
        while y < full_rect.end().y {
            let chunk_height = chunk_size.min(full_rect.end().y - y);

            let image = PixelRect::new(
                Point { x, y },
                Point { x: x + chunk_width, y: y + chunk_height },
            )?;
            let complex = ComplexRect::new(
                Complex {
                    real: NumberRange::scale(width_range, x as f64, real_range),
                    imag: NumberRange::scale(height_range, y as f64, imaginary_range),
                },
                Complex {
                    real: NumberRange::scale(width_range, (x + chunk_width) as f64, real_range),
                    imag: NumberRange::scale(height_range, (y + chunk_height) as f64, imaginary_range),
                },
            )?;
            chunks.push(ChunkConfig::new(image, complex));

            y += chunk_height;
        }
        x += chunk_width;
    }

    Ok(chunks)
}
