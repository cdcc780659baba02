use serde::{Deserialize, Serialize};

/// Value distribution along a scale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "type")]
pub enum Distribution {
    /// Linear scale: position is proportional to the raw data value.
    #[default]
    Linear,

    /// Logarithmic scale: position is proportional to `log_{base}(raw)`.
    ///
    /// Only positive values are representable on this scale.
    Log {
        /// The base of the logarithm.
        base: f64,
    },
}

impl Distribution {
    /// Transform raw data value into plot-space value.
    pub(crate) fn data_to_plot(self, value: f64) -> Option<f64> {
        match self {
            Self::Linear => value.is_finite().then_some(value),
            Self::Log { base } => (value.is_finite() && value > 0.0)
                .then(|| value.log(base))
                .filter(|v| v.is_finite()),
        }
    }

    /// Transform plot-space value into raw data value.
    pub(crate) fn plot_to_data(self, value: f64) -> Option<f64> {
        match self {
            Self::Linear => value.is_finite().then_some(value),
            Self::Log { base } => {
                if !value.is_finite() {
                    return None;
                }
                let out = base.powf(value);
                (out.is_finite() && out > 0.0).then_some(out)
            }
        }
    }
}

/// Direction a scale runs across the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Left to right; position 0 is the minimum.
    #[default]
    Horizontal,
    /// Bottom to top; position 0 (the canvas top) is the maximum.
    Vertical,
}

/// A named mapping between data values and canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub min: f64,
    pub max: f64,
    #[serde(default)]
    pub distribution: Distribution,
    #[serde(default)]
    pub orientation: Orientation,
}

impl Scale {
    pub fn horizontal(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            distribution: Distribution::Linear,
            orientation: Orientation::Horizontal,
        }
    }

    pub fn vertical(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            distribution: Distribution::Linear,
            orientation: Orientation::Vertical,
        }
    }

    pub fn with_distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }

    fn plot_range(&self) -> Option<(f64, f64)> {
        let lo = self.distribution.data_to_plot(self.min)?;
        let hi = self.distribution.data_to_plot(self.max)?;
        ((hi - lo).abs() > f64::EPSILON).then_some((lo, hi))
    }

    /// Convert a data value to a pixel offset along a canvas dimension of `dim` pixels.
    ///
    /// Values outside the scale range map outside `[0, dim]`.
    pub fn val_to_pos(&self, value: f64, dim: f32) -> Option<f32> {
        let (lo, hi) = self.plot_range()?;
        let frac = (self.distribution.data_to_plot(value)? - lo) / (hi - lo);
        let frac = match self.orientation {
            Orientation::Horizontal => frac,
            Orientation::Vertical => 1.0 - frac,
        };
        Some((frac * dim as f64) as f32)
    }

    /// Inverse of [`Scale::val_to_pos`].
    pub fn pos_to_val(&self, pos: f32, dim: f32) -> Option<f64> {
        if dim <= 0.0 {
            return None;
        }
        let (lo, hi) = self.plot_range()?;
        let frac = pos as f64 / dim as f64;
        let frac = match self.orientation {
            Orientation::Horizontal => frac,
            Orientation::Vertical => 1.0 - frac,
        };
        self.distribution.plot_to_data(lo + frac * (hi - lo))
    }
}

#[cfg(test)]
#[path = "scale_test.rs"]
mod tests;
