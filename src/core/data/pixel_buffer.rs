use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
    RectOutsideBounds {
        rect: PixelRect,
        pixel_rect: PixelRect,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch { pixel_rect_size, buffer_size } => {
                write!(
                    f,
                    "pixel rect size {} does not match buffer size {}",
                    pixel_rect_size, buffer_size
                )
            }
            Self::RectOutsideBounds { rect, pixel_rect } => {
                write!(
                    f,
                    "rect start ({}, {}) end ({}, {}) outside of buffer rect start ({}, {}) end ({}, {})",
                    rect.start().x,
                    rect.start().y,
                    rect.end().x,
                    rect.end().y,
                    pixel_rect.start().x,
                    pixel_rect.start().y,
                    pixel_rect.end().x,
                    pixel_rect.end().y
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// A rectangle of packed RGBA colours, row-major, one `u32` per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: Vec<u32>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![Colour::BLACK.abgr(); pixel_rect.pixel_count()],
        }
    }

    pub fn from_data(pixel_rect: PixelRect, buffer: Vec<u32>) -> Result<Self, PixelBufferError> {
        if pixel_rect.pixel_count() != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: pixel_rect.pixel_count(),
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &[u32] {
        &self.buffer
    }

    #[must_use]
    pub fn colour_at(&self, index: usize) -> Colour {
        Colour::from_abgr(self.buffer[index])
    }

    /// Copies another buffer into this one; the source rect must lie inside
    /// this buffer's rect. Used to composite chunk buffers into a full image.
    pub fn blit(&mut self, source: &PixelBuffer) -> Result<(), PixelBufferError> {
        let dest = self.pixel_rect;
        let src = source.pixel_rect;

        let inside = src.start().x >= dest.start().x
            && src.start().y >= dest.start().y
            && src.end().x <= dest.end().x
            && src.end().y <= dest.end().y;
        if !inside {
            return Err(PixelBufferError::RectOutsideBounds { rect: src, pixel_rect: dest });
        }

        let dest_width = dest.width() as usize;
        let src_width = src.width() as usize;
        for row in 0..src.height() as usize {
            let src_offset = row * src_width;
            let dest_offset = (src.start().y as usize - dest.start().y as usize + row) * dest_width
                + (src.start().x as usize - dest.start().x as usize);
            self.buffer[dest_offset..dest_offset + src_width]
                .copy_from_slice(&source.buffer[src_offset..src_offset + src_width]);
        }

        Ok(())
    }
}
