use crate::core::data::chunk_config::{ChunkConfig, ChunkConfigError};
use crate::core::data::colour::Colour;
use crate::core::data::escape_buffers::EscapeBuffers;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::render_config::{RenderConfig, RenderConfigError};
use crate::core::fractals::mandelbrot::gradient::WeightedGradient;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ResolveError {
    InvalidConfig(RenderConfigError),
    InvalidChunk(ChunkConfigError),
    PixelBufferSizeMismatch { expected: usize, actual: usize },
    HistogramSizeMismatch { expected: usize, actual: usize },
    Buffer(PixelBufferError),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(error) => write!(f, "invalid render config: {}", error),
            Self::InvalidChunk(error) => write!(f, "invalid chunk config: {}", error),
            Self::PixelBufferSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "escape buffers hold {} pixels but the chunk has {}",
                    actual, expected
                )
            }
            Self::HistogramSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "histogram length {} does not match the iteration budget {}",
                    actual, expected
                )
            }
            Self::Buffer(error) => write!(f, "pixel buffer construction failed: {}", error),
        }
    }
}

impl Error for ResolveError {}

impl From<RenderConfigError> for ResolveError {
    fn from(error: RenderConfigError) -> Self {
        Self::InvalidConfig(error)
    }
}

impl From<ChunkConfigError> for ResolveError {
    fn from(error: ChunkConfigError) -> Self {
        Self::InvalidChunk(error)
    }
}

impl From<PixelBufferError> for ResolveError {
    fn from(error: PixelBufferError) -> Self {
        Self::Buffer(error)
    }
}

/// Turns one chunk's escape buffers into packed pixel colours.
///
/// Colour bands are allocated by histogram share: a pixel's base hue is the
/// fraction of all escaped pixels that escaped before its iteration, and the
/// fractional buffer interpolates towards the next band. Interior pixels are
/// black. `total` is the escaped-pixel count matching the histogram, which
/// may span more than this chunk when the caller normalizes a whole image.
pub fn resolve_colours(
    config: &RenderConfig,
    chunk: &ChunkConfig,
    buffers: &EscapeBuffers,
    total: u32,
) -> Result<PixelBuffer, ResolveError> {
    config.validate()?;
    chunk.validate()?;

    if buffers.pixel_count() != chunk.pixel_count() {
        return Err(ResolveError::PixelBufferSizeMismatch {
            expected: chunk.pixel_count(),
            actual: buffers.pixel_count(),
        });
    }
    if buffers.histogram().len() != config.iterations as usize {
        return Err(ResolveError::HistogramSizeMismatch {
            expected: config.iterations as usize,
            actual: buffers.histogram().len(),
        });
    }

    // Every pixel is interior: all black, and no division by the total.
    if total == 0 {
        return Ok(PixelBuffer::new(chunk.image()));
    }

    let gradient = WeightedGradient::from_config(config)?;
    let max_iterations = config.iterations;

    // hues[k] is the share of escaped pixels with iteration < k, accumulated
    // term by term so the result is identical to summing per pixel.
    let mut hues = vec![0.0f64; max_iterations as usize];
    let mut hue = 0.0f64;
    for (k, slot) in hues.iter_mut().enumerate() {
        *slot = hue;
        hue += buffers.histogram()[k] as f64 / total as f64;
    }

    let mut pixels = vec![Colour::BLACK.abgr(); buffers.pixel_count()];
    for (index, pixel) in pixels.iter_mut().enumerate() {
        let iteration = buffers.iterations()[index];
        if iteration < max_iterations {
            let hue = hues[iteration as usize];
            let colour1 = gradient.colour_at(hue);
            let colour2 =
                gradient.colour_at(hue + buffers.histogram()[iteration as usize] as f64 / total as f64);
            *pixel = Colour::lerp(colour1, colour2, buffers.fractionals()[index]).abgr();
        }
    }

    let pixel_buffer = PixelBuffer::from_data(chunk.image(), pixels)?;
    Ok(pixel_buffer)
}
