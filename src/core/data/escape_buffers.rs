use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EscapeBuffersError {
    LengthMismatch {
        iterations_len: usize,
        fractionals_len: usize,
    },
    HistogramLengthMismatch {
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for EscapeBuffersError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { iterations_len, fractionals_len } => {
                write!(
                    f,
                    "iteration buffer length {} does not match fractional buffer length {}",
                    iterations_len, fractionals_len
                )
            }
            Self::HistogramLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "histogram length {} does not match expected length {}",
                    actual, expected
                )
            }
        }
    }
}

impl Error for EscapeBuffersError {}

/// The escape pass output for one chunk: per-pixel iteration counts and
/// smoothing fractions (row-major, chunk-local) plus the histogram of
/// completed escape iterations, indexed by iteration count.
///
/// The total escaped-pixel count travels beside these buffers rather than
/// inside them, so callers can merge histograms and totals across chunks
/// before colouring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EscapeBuffers {
    iterations: Vec<u32>,
    histogram: Vec<u32>,
    fractionals: Vec<f64>,
}

impl EscapeBuffers {
    pub fn from_parts(
        iterations: Vec<u32>,
        histogram: Vec<u32>,
        fractionals: Vec<f64>,
    ) -> Result<Self, EscapeBuffersError> {
        if iterations.len() != fractionals.len() {
            return Err(EscapeBuffersError::LengthMismatch {
                iterations_len: iterations.len(),
                fractionals_len: fractionals.len(),
            });
        }

        Ok(Self { iterations, histogram, fractionals })
    }

    /// Replaces the histogram, keeping the per-pixel buffers. Used to colour
    /// a chunk against a histogram merged over the whole image.
    pub fn with_histogram(self, histogram: Vec<u32>) -> Result<Self, EscapeBuffersError> {
        if histogram.len() != self.histogram.len() {
            return Err(EscapeBuffersError::HistogramLengthMismatch {
                expected: self.histogram.len(),
                actual: histogram.len(),
            });
        }

        Ok(Self { histogram, ..self })
    }

    #[must_use]
    pub fn iterations(&self) -> &[u32] {
        &self.iterations
    }

    #[must_use]
    pub fn histogram(&self) -> &[u32] {
        &self.histogram
    }

    #[must_use]
    pub fn fractionals(&self) -> &[f64] {
        &self.fractionals
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.iterations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_valid() {
        let buffers =
            EscapeBuffers::from_parts(vec![1, 2, 3, 4], vec![0, 1, 1, 0], vec![0.5; 4]).unwrap();

        assert_eq!(buffers.pixel_count(), 4);
        assert_eq!(buffers.iterations(), &[1, 2, 3, 4]);
        assert_eq!(buffers.histogram(), &[0, 1, 1, 0]);
    }

    #[test]
    fn test_from_parts_rejects_mismatched_pixel_buffers() {
        let buffers = EscapeBuffers::from_parts(vec![1, 2, 3], vec![0, 1], vec![0.5; 2]);

        assert_eq!(
            buffers,
            Err(EscapeBuffersError::LengthMismatch {
                iterations_len: 3,
                fractionals_len: 2
            })
        );
    }

    #[test]
    fn test_with_histogram_swaps_histogram() {
        let buffers =
            EscapeBuffers::from_parts(vec![1, 2], vec![0, 1, 1, 0], vec![0.0; 2]).unwrap();

        let merged = buffers.with_histogram(vec![4, 5, 6, 7]).unwrap();

        assert_eq!(merged.histogram(), &[4, 5, 6, 7]);
        assert_eq!(merged.iterations(), &[1, 2]);
    }

    #[test]
    fn test_with_histogram_rejects_wrong_length() {
        let buffers =
            EscapeBuffers::from_parts(vec![1, 2], vec![0, 1, 1, 0], vec![0.0; 2]).unwrap();

        let merged = buffers.with_histogram(vec![1, 2]);

        assert_eq!(
            merged,
            Err(EscapeBuffersError::HistogramLengthMismatch { expected: 4, actual: 2 })
        );
    }
}
