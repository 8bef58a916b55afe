use crate::core::data::point::Point;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: i64, height: i64 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// A pixel rectangle with an exclusive `end` corner.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelRect {
    start: Point,
    end: Point,
}

impl PixelRect {
    pub fn new(start: Point, end: Point) -> Result<Self, PixelRectError> {
        let width = (end.x as i64) - (start.x as i64);
        let height = (end.y as i64) - (start.y as i64);

        if width < 1 || height < 1 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self { start, end })
    }

    /// Re-checks the size invariant, for rects that arrived over the wire.
    pub fn validate(&self) -> Result<(), PixelRectError> {
        Self::new(self.start, self.end).map(|_| ())
    }

    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Point {
        self.end
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.end.x - self.start.x
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.end.y - self.start.y
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }
}
