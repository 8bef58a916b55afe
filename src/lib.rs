mod core;
mod storage;

pub use crate::core::actions::render_fractal::{render_fractal, RenderFractalError};
pub use crate::core::data::chunk_config::{ChunkConfig, ChunkConfigError};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::escape_buffers::{EscapeBuffers, EscapeBuffersError};
pub use crate::core::data::number_range::{NumberRange, NumberRangeError};
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::render_config::{RenderConfig, RenderConfigError};
pub use crate::core::fractals::mandelbrot::evaluator::{evaluate_escape, EvaluateError};
pub use crate::core::fractals::mandelbrot::resolver::{resolve_colours, ResolveError};
pub use crate::core::util::calculate_chunks_in_pixel_rect::{
    calculate_chunks_in_pixel_rect, CalculateChunksError,
};
pub use crate::storage::write_ppm::write_ppm;
