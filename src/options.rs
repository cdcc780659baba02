//! Tooltip panel options.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// How the tooltip presents the focused data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipMode {
    /// The focused series only.
    #[default]
    Single,
    /// Every visible numeric series.
    Multi,
    /// No tooltip.
    None,
    /// Cumulative distribution over histogram buckets.
    Detailed,
    /// Like [`TooltipMode::Detailed`] with a logarithmic overlay.
    Detailed2,
    /// Offered in the mode picker; renders nothing.
    Detailed3,
}

impl TooltipMode {
    pub const ALL: [TooltipMode; 6] = [
        Self::Single,
        Self::Multi,
        Self::None,
        Self::Detailed,
        Self::Detailed2,
        Self::Detailed3,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multi => "multi",
            Self::None => "none",
            Self::Detailed => "detailed",
            Self::Detailed2 => "detailed2",
            Self::Detailed3 => "detailed3",
        }
    }

    /// Label shown in the mode picker.
    pub fn label(self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::Multi => "All",
            Self::None => "Hidden",
            Self::Detailed => "Detailed",
            Self::Detailed2 => "Detailed2",
            Self::Detailed3 => "Detailed3",
        }
    }
}

impl fmt::Display for TooltipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TooltipMode {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| OptionsError::UnknownMode(s.to_string()))
    }
}

/// Errors raised while configuring the tooltip.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptionsError {
    #[error("unknown tooltip mode `{0}`")]
    UnknownMode(String),
    #[error("tooltip mode `{0}` is not available for single-series panels")]
    UnsupportedMode(TooltipMode),
    #[error("{name} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        name: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
}

/// Persisted tooltip options of a panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipOptions {
    pub mode: TooltipMode,
}

impl TooltipOptions {
    pub fn new(mode: TooltipMode) -> Self {
        Self { mode }
    }
}

/// One entry of the tooltip mode picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChoice {
    pub value: TooltipMode,
    pub label: &'static str,
}

impl From<TooltipMode> for ModeChoice {
    fn from(value: TooltipMode) -> Self {
        Self {
            value,
            label: value.label(),
        }
    }
}

/// Modes offered by the panel editor. Panels that only ever show one series
/// get Single and Hidden.
pub fn tooltip_mode_choices(single_only: bool) -> Vec<ModeChoice> {
    let modes: &[TooltipMode] = if single_only {
        &[TooltipMode::Single, TooltipMode::None]
    } else {
        &TooltipMode::ALL
    };
    modes.iter().copied().map(ModeChoice::from).collect()
}

#[cfg(test)]
#[path = "options_test.rs"]
mod tests;
