use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderConfigError {
    ZeroMaxIterations,
    InvalidGradientWeight { channel: &'static str, weight: f64 },
}

impl fmt::Display for RenderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::InvalidGradientWeight { channel, weight } => {
                write!(
                    f,
                    "gradient weight for {} must be finite and non-negative, got {}",
                    channel, weight
                )
            }
        }
    }
}

impl Error for RenderConfigError {}

/// Immutable per-computation configuration: the iteration budget and the
/// per-channel gradient gains.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub iterations: u32,
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl RenderConfig {
    pub fn new(iterations: u32, red: f64, green: f64, blue: f64) -> Result<Self, RenderConfigError> {
        let config = Self { iterations, red, green, blue };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RenderConfigError> {
        if self.iterations == 0 {
            return Err(RenderConfigError::ZeroMaxIterations);
        }

        for (channel, weight) in [("red", self.red), ("green", self.green), ("blue", self.blue)] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(RenderConfigError::InvalidGradientWeight { channel, weight });
            }
        }

        Ok(())
    }
}
