use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NumberRangeError {
    DegenerateRange { min: f64, max: f64 },
}

impl fmt::Display for NumberRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateRange { min, max } => {
                write!(f, "number range must have a positive size: [{}, {}]", min, max)
            }
        }
    }
}

impl Error for NumberRangeError {}

/// A closed interval used to map pixel coordinates onto the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NumberRange {
    min: f64,
    max: f64,
    size: f64,
}

impl NumberRange {
    pub fn new(min: f64, max: f64) -> Result<Self, NumberRangeError> {
        let size = (max - min).abs();

        // !(size > 0) also rejects NaN endpoints
        if !(size > 0.0) {
            return Err(NumberRangeError::DegenerateRange { min, max });
        }

        Ok(Self { min, max, size })
    }

    /// Linearly maps `value` from `input` onto `output`.
    pub fn scale(input: NumberRange, value: f64, output: NumberRange) -> f64 {
        (input.max * output.min - input.min * output.max + value * output.size) / input.size
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn size(&self) -> f64 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_range_keeps_endpoints_and_size() {
        let range = NumberRange::new(-2.5, 1.0).unwrap();

        assert_eq!(range.min(), -2.5);
        assert_eq!(range.max(), 1.0);
        assert_eq!(range.size(), 3.5);
    }

    #[test]
    fn test_degenerate_range_is_rejected() {
        let equal = NumberRange::new(4.0, 4.0);
        let nan = NumberRange::new(f64::NAN, 1.0);

        assert_eq!(equal, Err(NumberRangeError::DegenerateRange { min: 4.0, max: 4.0 }));
        assert!(nan.is_err());
    }

    #[test]
    fn test_scale_maps_endpoints_to_endpoints() {
        let pixels = NumberRange::new(0.0, 800.0).unwrap();
        let reals = NumberRange::new(-2.5, 1.0).unwrap();

        assert_eq!(NumberRange::scale(pixels, 0.0, reals), -2.5);
        assert_eq!(NumberRange::scale(pixels, 800.0, reals), 1.0);
    }

    #[test]
    fn test_scale_with_equal_ranges_is_identity() {
        let range = NumberRange::new(-1.0, 1.0).unwrap();

        for value in [-1.0, -0.25, 0.0, 0.5, 1.0] {
            assert_eq!(NumberRange::scale(range, value, range), value);
        }
    }

    #[test]
    fn test_scale_round_trips_through_inverse_mapping() {
        let pixels = NumberRange::new(0.0, 600.0).unwrap();
        let imaginaries = NumberRange::new(-1.0, 1.0).unwrap();

        for value in [0.0, 13.0, 299.0, 600.0] {
            let mapped = NumberRange::scale(pixels, value, imaginaries);
            let back = NumberRange::scale(imaginaries, mapped, pixels);

            assert!((back - value).abs() < 1e-9);
        }
    }
}
