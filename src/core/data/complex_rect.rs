use crate::core::data::complex::Complex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "complex rect size must be positive: {}x{}",
                    width, height
                )
            }
        }
    }
}

impl Error for ComplexRectError {}

/// The complex-plane window matching a pixel rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexRect {
    start: Complex,
    end: Complex,
}

impl ComplexRect {
    pub fn new(start: Complex, end: Complex) -> Result<Self, ComplexRectError> {
        let width = end.real - start.real;
        let height = end.imag - start.imag;

        if !(width > 0.0) || !(height > 0.0) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self { start, end })
    }

    /// Re-checks the size invariant, for rects that arrived over the wire.
    pub fn validate(&self) -> Result<(), ComplexRectError> {
        Self::new(self.start, self.end).map(|_| ())
    }

    #[must_use]
    pub fn start(&self) -> Complex {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Complex {
        self.end
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.end.real - self.start.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.end.imag - self.start.imag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complex_rect_new_valid() {
        let start = Complex { real: -2.5, imag: -1.0 };
        let end = Complex { real: 1.0, imag: 1.0 };

        let rect = ComplexRect::new(start, end).unwrap();

        assert_eq!(rect.start(), start);
        assert_eq!(rect.end(), end);
        assert_eq!(rect.width(), 3.5);
        assert_eq!(rect.height(), 2.0);
    }

    #[test]
    fn test_complex_rect_dimensions_must_be_positive() {
        let zero_width = ComplexRect::new(
            Complex { real: 0.0, imag: 0.0 },
            Complex { real: 0.0, imag: 1.0 },
        );
        let negative_height = ComplexRect::new(
            Complex { real: 0.0, imag: 0.0 },
            Complex { real: 1.0, imag: -1.0 },
        );

        assert_eq!(
            zero_width,
            Err(ComplexRectError::InvalidSize { width: 0.0, height: 1.0 })
        );
        assert_eq!(
            negative_height,
            Err(ComplexRectError::InvalidSize { width: 1.0, height: -1.0 })
        );
    }

    #[test]
    fn test_complex_rect_rejects_nan_corners() {
        let rect = ComplexRect::new(
            Complex { real: f64::NAN, imag: 0.0 },
            Complex { real: 1.0, imag: 1.0 },
        );

        assert!(rect.is_err());
    }
}
