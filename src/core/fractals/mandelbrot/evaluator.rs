use crate::core::data::chunk_config::{ChunkConfig, ChunkConfigError};
use crate::core::data::escape_buffers::{EscapeBuffers, EscapeBuffersError};
use crate::core::data::number_range::{NumberRange, NumberRangeError};
use crate::core::data::render_config::{RenderConfig, RenderConfigError};
use std::error::Error;
use std::f64::consts::LN_2;
use std::fmt;

/// 2^16. Much larger than the minimal escape radius of 4 so that the
/// logarithmic smoothing in the fractional computation stays well-behaved.
/// Kept exactly for output compatibility.
const ESCAPE_RADIUS_SQUARED: f64 = 65536.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EvaluateError {
    InvalidConfig(RenderConfigError),
    InvalidChunk(ChunkConfigError),
    DegenerateRange(NumberRangeError),
    Buffers(EscapeBuffersError),
}

impl fmt::Display for EvaluateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(error) => write!(f, "invalid render config: {}", error),
            Self::InvalidChunk(error) => write!(f, "invalid chunk config: {}", error),
            Self::DegenerateRange(error) => write!(f, "invalid chunk config: {}", error),
            Self::Buffers(error) => write!(f, "escape buffer construction failed: {}", error),
        }
    }
}

impl Error for EvaluateError {}

impl From<RenderConfigError> for EvaluateError {
    fn from(error: RenderConfigError) -> Self {
        Self::InvalidConfig(error)
    }
}

impl From<ChunkConfigError> for EvaluateError {
    fn from(error: ChunkConfigError) -> Self {
        Self::InvalidChunk(error)
    }
}

impl From<NumberRangeError> for EvaluateError {
    fn from(error: NumberRangeError) -> Self {
        Self::DegenerateRange(error)
    }
}

impl From<EscapeBuffersError> for EvaluateError {
    fn from(error: EscapeBuffersError) -> Self {
        Self::Buffers(error)
    }
}

/// Runs the escape-time pass over one chunk.
///
/// Returns the per-pixel buffers together with the number of pixels that
/// escaped. Pixels that never escape within the iteration budget hold
/// `config.iterations` in the iteration buffer and `0.0` in the fractional
/// buffer, and are not counted in the histogram.
///
/// The colouring pass needs the completed histogram, so it cannot be fused
/// into this loop; run it separately once this returns.
pub fn evaluate_escape(
    config: &RenderConfig,
    chunk: &ChunkConfig,
) -> Result<(EscapeBuffers, u32), EvaluateError> {
    config.validate()?;
    chunk.validate()?;

    let image = chunk.image();
    let complex = chunk.complex();

    let width_range = NumberRange::new(image.start().x as f64, image.end().x as f64)?;
    let height_range = NumberRange::new(image.start().y as f64, image.end().y as f64)?;
    let real_range = NumberRange::new(complex.start().real, complex.end().real)?;
    let imaginary_range = NumberRange::new(complex.start().imag, complex.end().imag)?;

    let max_iterations = config.iterations;
    let mut iterations = vec![0u32; chunk.pixel_count()];
    let mut histogram = vec![0u32; max_iterations as usize];
    let mut fractionals = vec![0.0f64; chunk.pixel_count()];
    let mut total = 0u32;

    let mut index = 0usize;
    for y in image.start().y..image.end().y {
        for x in image.start().x..image.end().x {
            let i0 = NumberRange::scale(width_range, x as f64, real_range);
            let j0 = NumberRange::scale(height_range, y as f64, imaginary_range);

            // Points inside the main cardioid or the period-2 bulb never
            // escape; skip iterating them. The inverse condition is only a
            // divergence-region gate, not a containment test.
            let jj0 = j0 * j0;
            let mut q = i0 - 0.25;
            q *= q;
            q += jj0;

            if q * (q + (i0 - 0.25)) < 0.25 * jj0 {
                iterations[index] = max_iterations;
            } else {
                let mut iteration = 0u32;
                let mut i = 0.0f64;
                let mut j = 0.0f64;
                let mut ii = 0.0f64;
                let mut jj = 0.0f64;
                while ii + jj < ESCAPE_RADIUS_SQUARED && iteration < max_iterations {
                    let itemp = ii - jj + i0;
                    let jtemp = 2.0 * i * j + j0;
                    // Exact float equality: the orbit has entered a cycle
                    // and will never escape.
                    if i == itemp && j == jtemp {
                        iteration = max_iterations;
                        break;
                    }
                    i = itemp;
                    j = jtemp;
                    ii = i * i;
                    jj = j * j;
                    iteration += 1;
                }

                iterations[index] = iteration;
                if iteration < max_iterations {
                    histogram[iteration as usize] += 1;
                    total += 1;
                    fractionals[index] =
                        (iteration as f64 + 1.0 - ((ii + jj).ln() / 2.0 / LN_2).ln() / LN_2) % 1.0;
                }
            }
            index += 1;
        }
    }

    let buffers = EscapeBuffers::from_parts(iterations, histogram, fractionals)?;
    Ok((buffers, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;

    fn chunk(
        width: u32,
        height: u32,
        start: (f64, f64),
        end: (f64, f64),
    ) -> ChunkConfig {
        ChunkConfig::new(
            PixelRect::new(Point { x: 0, y: 0 }, Point { x: width, y: height }).unwrap(),
            ComplexRect::new(
                Complex { real: start.0, imag: start.1 },
                Complex { real: end.0, imag: end.1 },
            )
            .unwrap(),
        )
    }

    fn classic_view(width: u32, height: u32) -> ChunkConfig {
        chunk(width, height, (-2.5, -1.0), (1.0, 1.0))
    }

    #[test]
    fn test_invalid_config_is_rejected_before_allocation() {
        let config = RenderConfig { iterations: 0, red: 1.0, green: 1.0, blue: 1.0 };

        let result = evaluate_escape(&config, &classic_view(4, 4));

        assert!(matches!(result, Err(EvaluateError::InvalidConfig(_))));
    }

    #[test]
    fn test_known_escape_case_far_exterior_point() {
        // A 1x1 chunk whose only pixel maps to c = 2+2i. With the 2^16
        // escape bound the orbit crosses it after the fourth update.
        let config = RenderConfig::new(50, 1.0, 1.0, 1.0).unwrap();
        let chunk = chunk(1, 1, (2.0, 2.0), (3.0, 3.0));

        let (buffers, total) = evaluate_escape(&config, &chunk).unwrap();

        assert_eq!(total, 1);
        assert_eq!(buffers.iterations(), &[4]);
        assert_eq!(buffers.histogram()[4], 1);
        assert!(buffers.fractionals()[0] > 0.0 && buffers.fractionals()[0] < 1.0);
    }

    #[test]
    fn test_exactly_periodic_orbit_short_circuits_to_interior() {
        // c = -2 lies outside the cardioid/bulb gate but its orbit reaches
        // the exact fixed point 2, so the cycle check must stop it long
        // before an iteration budget this large could run out.
        let budget = 100_000_000u32;
        let config = RenderConfig::new(budget, 1.0, 1.0, 1.0).unwrap();
        let chunk = chunk(1, 1, (-2.0, 0.0), (-1.0, 1.0));

        let (buffers, total) = evaluate_escape(&config, &chunk).unwrap();

        assert_eq!(total, 0);
        assert_eq!(buffers.iterations(), &[budget]);
        assert_eq!(buffers.fractionals(), &[0.0]);
    }

    #[test]
    fn test_fully_interior_chunk_never_escapes() {
        let config = RenderConfig::new(100, 1.0, 1.0, 1.0).unwrap();
        let chunk = chunk(4, 4, (-0.1, -0.1), (0.1, 0.1));

        let (buffers, total) = evaluate_escape(&config, &chunk).unwrap();

        assert_eq!(total, 0);
        assert!(buffers.iterations().iter().all(|&i| i == 100));
        assert!(buffers.fractionals().iter().all(|&f| f == 0.0));
        assert!(buffers.histogram().iter().all(|&h| h == 0));
    }

    #[test]
    fn test_histogram_is_consistent_with_iteration_counts() {
        let config = RenderConfig::new(100, 1.0, 1.0, 1.0).unwrap();
        let chunk = classic_view(32, 32);

        let (buffers, total) = evaluate_escape(&config, &chunk).unwrap();

        let histogram_sum: u32 = buffers.histogram().iter().sum();
        let escaped = buffers.iterations().iter().filter(|&&i| i < 100).count() as u32;
        let interior = buffers.iterations().iter().filter(|&&i| i == 100).count() as u32;

        assert_eq!(histogram_sum, total);
        assert_eq!(escaped, total);
        assert_eq!(total + interior, 32 * 32);
        for (index, &iteration) in buffers.iterations().iter().enumerate() {
            assert!(iteration <= 100);
            if iteration < 100 {
                let fractional = buffers.fractionals()[index];
                assert!((0.0..1.0).contains(&fractional));
            } else {
                assert_eq!(buffers.fractionals()[index], 0.0);
            }
        }
        // The classic view contains both kinds of pixel.
        assert!(total > 0);
        assert!(interior > 0);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let config = RenderConfig::new(200, 1.0, 1.0, 1.0).unwrap();
        let chunk = classic_view(16, 16);

        let first = evaluate_escape(&config, &chunk).unwrap();
        let second = evaluate_escape(&config, &chunk).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_conjugate_rows_have_equal_escape_times() {
        // Rows y and H - y sample conjugate points when the imaginary range
        // is symmetric about zero, and the map commutes with conjugation.
        let height = 8u32;
        let config = RenderConfig::new(150, 1.0, 1.0, 1.0).unwrap();
        let chunk = chunk(8, height, (-2.0, -1.0), (1.0, 1.0));

        let (buffers, _) = evaluate_escape(&config, &chunk).unwrap();

        for y in 1..height {
            let mirror = height - y;
            for x in 0..8usize {
                let a = buffers.iterations()[y as usize * 8 + x];
                let b = buffers.iterations()[mirror as usize * 8 + x];
                assert_eq!(a, b, "rows {} and {} differ at column {}", y, mirror, x);
            }
        }
    }
}
