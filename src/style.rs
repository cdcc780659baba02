//! Marker style configuration edited next to the tooltip options.
//!
//! Every `with_*` editor returns a new config. Passing `None` restores the
//! default for that dimension.
use serde::{Deserialize, Serialize};

use crate::options::OptionsError;

/// Bounds accepted by the size editor.
pub const SIZE_LIMITS: (f64, f64) = (1.0, 100.0);
/// Step the fill opacity slider snaps to.
pub const OPACITY_STEP: f32 = 0.1;

pub const DEFAULT_SYMBOL: &str = "img/icons/marker/circle.svg";
pub const DEFAULT_COLOR: &str = "dark-green";
pub const DEFAULT_OPACITY: f32 = 0.4;

/// Marker size, either fixed or scaled from a field between `min` and `max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleDimensionConfig {
    pub fixed: f64,
    pub min: f64,
    pub max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl Default for ScaleDimensionConfig {
    fn default() -> Self {
        Self {
            fixed: 5.0,
            min: 2.0,
            max: 15.0,
            field: None,
        }
    }
}

impl ScaleDimensionConfig {
    fn validate(&self) -> Result<(), OptionsError> {
        let (lo, hi) = SIZE_LIMITS;
        for (name, value) in [("size", self.fixed), ("size.min", self.min), ("size.max", self.max)] {
            if !(lo..=hi).contains(&value) {
                return Err(OptionsError::OutOfRange {
                    name,
                    min: lo,
                    max: hi,
                    value,
                });
            }
        }
        if self.min > self.max {
            return Err(OptionsError::OutOfRange {
                name: "size.min",
                min: lo,
                max: self.max,
                value: self.min,
            });
        }
        Ok(())
    }
}

/// Where a dimension takes its value from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceDimensionMode {
    #[default]
    Fixed,
    Field,
    Mapping,
}

/// Marker icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDimensionConfig {
    pub mode: ResourceDimensionMode,
    pub fixed: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl Default for ResourceDimensionConfig {
    fn default() -> Self {
        Self {
            mode: ResourceDimensionMode::Fixed,
            fixed: DEFAULT_SYMBOL.to_string(),
            field: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDimensionMode {
    Fixed,
    #[default]
    Field,
    Template,
}

/// Text label drawn next to a marker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextDimensionConfig {
    pub mode: TextDimensionMode,
    #[serde(default)]
    pub fixed: String,
    #[serde(default)]
    pub field: String,
}

/// Marker fill color; a named palette color or a field to map from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorDimensionConfig {
    pub fixed: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl Default for ColorDimensionConfig {
    fn default() -> Self {
        Self {
            fixed: DEFAULT_COLOR.to_string(),
            field: None,
        }
    }
}

/// Marker style of a data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub size: ScaleDimensionConfig,
    pub symbol: ResourceDimensionConfig,
    pub text: TextDimensionConfig,
    pub color: ColorDimensionConfig,
    pub opacity: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            size: ScaleDimensionConfig::default(),
            symbol: ResourceDimensionConfig::default(),
            text: TextDimensionConfig::default(),
            color: ColorDimensionConfig::default(),
            opacity: DEFAULT_OPACITY,
        }
    }
}

impl StyleConfig {
    pub fn with_size(self, size: Option<ScaleDimensionConfig>) -> Result<Self, OptionsError> {
        let size = size.unwrap_or_default();
        size.validate()?;
        Ok(Self { size, ..self })
    }

    pub fn with_symbol(self, symbol: Option<ResourceDimensionConfig>) -> Self {
        Self {
            symbol: symbol.unwrap_or_default(),
            ..self
        }
    }

    pub fn with_text(self, text: Option<TextDimensionConfig>) -> Self {
        Self {
            text: text.unwrap_or_default(),
            ..self
        }
    }

    pub fn with_color(self, color: Option<ColorDimensionConfig>) -> Self {
        Self {
            color: color.unwrap_or_default(),
            ..self
        }
    }

    /// Set the fill opacity, snapped to the slider step.
    pub fn with_opacity(self, opacity: Option<f32>) -> Result<Self, OptionsError> {
        let Some(opacity) = opacity else {
            return Ok(Self {
                opacity: DEFAULT_OPACITY,
                ..self
            });
        };
        if !(0.0..=1.0).contains(&opacity) {
            return Err(OptionsError::OutOfRange {
                name: "opacity",
                min: 0.0,
                max: 1.0,
                value: f64::from(opacity),
            });
        }
        let steps = (opacity / OPACITY_STEP).round();
        Ok(Self {
            opacity: (steps * OPACITY_STEP).min(1.0),
            ..self
        })
    }
}

#[cfg(test)]
#[path = "style_test.rs"]
mod tests;
