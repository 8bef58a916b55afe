use crate::core::data::colour::Colour;
use crate::core::data::render_config::{RenderConfig, RenderConfigError};

/// The per-channel weighted gradient used for histogram colouring: each
/// channel is `floor(255 * t * weight)`. Weights are expected to keep the
/// product within channel range for `t` in [0, 1].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WeightedGradient {
    red: f64,
    green: f64,
    blue: f64,
}

impl WeightedGradient {
    pub fn from_config(config: &RenderConfig) -> Result<Self, RenderConfigError> {
        config.validate()?;

        Ok(Self { red: config.red, green: config.green, blue: config.blue })
    }

    #[must_use]
    pub fn colour_at(&self, value: f64) -> Colour {
        Colour::new(
            (255.0 * value * self.red).floor() as u8,
            (255.0 * value * self.green).floor() as u8,
            (255.0 * value * self.blue).floor() as u8,
        )
    }
}
