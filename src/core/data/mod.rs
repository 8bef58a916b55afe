pub mod chunk_config;
pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod escape_buffers;
pub mod number_range;
pub mod pixel_buffer;
pub mod pixel_rect;
pub mod point;
pub mod render_config;
