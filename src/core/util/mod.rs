pub mod calculate_chunks_in_pixel_rect;
