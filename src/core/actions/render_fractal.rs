use rayon::prelude::*;

use crate::core::data::chunk_config::ChunkConfig;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::escape_buffers::{EscapeBuffers, EscapeBuffersError};
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::render_config::RenderConfig;
use crate::core::fractals::mandelbrot::evaluator::{evaluate_escape, EvaluateError};
use crate::core::fractals::mandelbrot::resolver::{resolve_colours, ResolveError};
use crate::core::util::calculate_chunks_in_pixel_rect::{
    calculate_chunks_in_pixel_rect, CalculateChunksError,
};
use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;

#[derive(Debug)]
pub enum RenderFractalError {
    Chunking(CalculateChunksError),
    Evaluate(EvaluateError),
    Resolve(ResolveError),
    Buffers(EscapeBuffersError),
    Composite(PixelBufferError),
}

impl fmt::Display for RenderFractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chunking(error) => write!(f, "chunking failed: {}", error),
            Self::Evaluate(error) => write!(f, "escape pass failed: {}", error),
            Self::Resolve(error) => write!(f, "colour pass failed: {}", error),
            Self::Buffers(error) => write!(f, "buffer merge failed: {}", error),
            Self::Composite(error) => write!(f, "compositing failed: {}", error),
        }
    }
}

impl Error for RenderFractalError {}

impl From<CalculateChunksError> for RenderFractalError {
    fn from(error: CalculateChunksError) -> Self {
        Self::Chunking(error)
    }
}

impl From<EvaluateError> for RenderFractalError {
    fn from(error: EvaluateError) -> Self {
        Self::Evaluate(error)
    }
}

impl From<ResolveError> for RenderFractalError {
    fn from(error: ResolveError) -> Self {
        Self::Resolve(error)
    }
}

impl From<EscapeBuffersError> for RenderFractalError {
    fn from(error: EscapeBuffersError) -> Self {
        Self::Buffers(error)
    }
}

impl From<PixelBufferError> for RenderFractalError {
    fn from(error: PixelBufferError) -> Self {
        Self::Composite(error)
    }
}

/// Renders a full image by chunks: parallel escape pass over every chunk,
/// histogram merge so colour bands are normalized across the whole image,
/// then a parallel colour pass and compositing into one buffer.
///
/// Chunks share no state, so both passes use rayon's work-stealing pool; the
/// escape pass completes for all chunks before any colouring starts.
pub fn render_fractal(
    config: &RenderConfig,
    full_rect: PixelRect,
    region: ComplexRect,
    chunk_size: NonZeroU32,
) -> Result<PixelBuffer, RenderFractalError> {
    let chunks = calculate_chunks_in_pixel_rect(full_rect, region, chunk_size)?;

    let evaluated: Vec<(ChunkConfig, EscapeBuffers, u32)> = chunks
        .into_par_iter()
        .map(|chunk| {
            let (buffers, total) = evaluate_escape(config, &chunk)?;
            Ok((chunk, buffers, total))
        })
        .collect::<Result<_, EvaluateError>>()?;

    let mut merged_histogram = vec![0u32; config.iterations as usize];
    let mut merged_total = 0u32;
    for (_, buffers, total) in &evaluated {
        for (slot, count) in merged_histogram.iter_mut().zip(buffers.histogram()) {
            *slot += count;
        }
        merged_total += total;
    }

    let coloured: Vec<PixelBuffer> = evaluated
        .into_par_iter()
        .map(|(chunk, buffers, _)| {
            let buffers = buffers.with_histogram(merged_histogram.clone())?;
            let pixels = resolve_colours(config, &chunk, &buffers, merged_total)?;
            Ok(pixels)
        })
        .collect::<Result<_, RenderFractalError>>()?;

    let mut image = PixelBuffer::new(full_rect);
    for chunk_pixels in &coloured {
        image.blit(chunk_pixels)?;
    }

    Ok(image)
}
