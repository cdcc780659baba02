//! Aligned columnar data consumed by the tooltip.
//!
//! Field 0 is the shared x domain (usually time). Every other field holds one
//! series whose values line up index-for-index with field 0.
use std::{fmt, sync::Arc};

use iced::Color;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Color used for rows whose display processor did not assign one.
pub const FALLBACK_COLOR: Color = Color {
    r: 0.5,
    g: 0.5,
    b: 0.5,
    a: 1.0,
};

/// Kind of data a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Time,
    Number,
    String,
    Boolean,
    Other,
}

/// A single cell of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Number(f64),
    /// Milliseconds since the Unix epoch.
    Time(i64),
    Text(String),
    Bool(bool),
}

impl Value {
    /// Numeric view of the cell. Time cells are returned as epoch milliseconds.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(v) if v.is_finite() => Some(*v),
            Self::Time(t) => Some(*t as f64),
            _ => None,
        }
    }

    fn fits(&self, field_type: FieldType) -> bool {
        matches!(
            (self, field_type),
            (Self::Null, _)
                | (_, FieldType::Other)
                | (Self::Number(_), FieldType::Number)
                | (Self::Time(_), FieldType::Time)
                | (Self::Text(_), FieldType::String)
                | (Self::Bool(_), FieldType::Boolean)
        )
    }
}

/// Where a field should not be shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HideFrom {
    pub tooltip: bool,
    pub viz: bool,
    pub legend: bool,
}

/// Per-field presentation settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldConfig {
    /// Overrides the name shown in tooltips.
    pub display_name: Option<String>,
    /// Series color. Rows fall back to [`FALLBACK_COLOR`] when unset.
    pub color: Option<Color>,
    /// Unit appended to formatted values.
    pub unit: Option<String>,
    /// Fixed number of decimals for numeric values.
    pub decimals: Option<usize>,
    pub hide_from: HideFrom,
}

/// A value after it went through a display processor.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayValue {
    pub text: String,
    pub suffix: Option<String>,
    pub color: Option<Color>,
}

impl DisplayValue {
    /// The text shown to the user, including the unit suffix.
    pub fn formatted(&self) -> String {
        match &self.suffix {
            Some(suffix) => format!("{}{suffix}", self.text),
            None => self.text.clone(),
        }
    }
}

/// Turns a raw cell into display text and color.
pub type DisplayProcessor = Arc<dyn Fn(&Value) -> DisplayValue + Send + Sync>;

/// Errors raised while assembling an [`AlignedFrame`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameError {
    #[error("field `{field}` has {actual} values, expected {expected}")]
    LengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },
    #[error("field `{field}` holds a value at index {index} that is not of type {field_type:?}")]
    TypeMismatch {
        field: String,
        index: usize,
        field_type: FieldType,
    },
}

/// One column of an [`AlignedFrame`].
#[derive(Clone)]
pub struct Field {
    pub name: String,
    pub field_type: FieldType,
    pub values: Vec<Value>,
    pub labels: IndexMap<String, String>,
    pub config: FieldConfig,
    /// Custom display processor. The default formatter is used when unset.
    pub display: Option<DisplayProcessor>,
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("field_type", &self.field_type)
            .field("len", &self.values.len())
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            field_type,
            values,
            labels: IndexMap::new(),
            config: FieldConfig::default(),
            display: None,
        }
    }

    /// A time field from epoch milliseconds.
    pub fn time(name: impl Into<String>, millis: impl IntoIterator<Item = i64>) -> Self {
        let values = millis.into_iter().map(Value::Time).collect();
        Self::new(name, FieldType::Time, values)
    }

    /// A numeric field. `None` entries become nulls.
    pub fn number(name: impl Into<String>, values: impl IntoIterator<Item = Option<f64>>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.map_or(Value::Null, Value::Number))
            .collect();
        Self::new(name, FieldType::Number, values)
    }

    pub fn text<S: Into<String>>(name: impl Into<String>, values: impl IntoIterator<Item = S>) -> Self {
        let values = values.into_iter().map(|s| Value::Text(s.into())).collect();
        Self::new(name, FieldType::String, values)
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.config.color = Some(color);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.config.unit = Some(unit.into());
        self
    }

    pub fn hidden_from(mut self, hide_from: HideFrom) -> Self {
        self.config.hide_from = hide_from;
        self
    }

    pub fn with_display<F>(mut self, processor: F) -> Self
    where
        F: Fn(&Value) -> DisplayValue + Send + Sync + 'static,
    {
        self.display = Some(Arc::new(processor));
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Numeric value at `index`, if any.
    pub fn number_at(&self, index: usize) -> Option<f64> {
        self.value(index).and_then(Value::as_f64)
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// Name shown to users: the configured override, otherwise the field
    /// name followed by its labels.
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.config.display_name {
            return name.clone();
        }
        if self.labels.is_empty() {
            return self.name.clone();
        }
        let labels: Vec<String> = self
            .labels
            .iter()
            .map(|(k, v)| format!("{k}=\"{v}\""))
            .collect();
        format!("{} {{{}}}", self.name, labels.join(", "))
    }

    /// Run the cell at `index` through this field's display processor.
    pub fn display_value(&self, index: usize) -> Option<DisplayValue> {
        let value = self.value(index)?;
        Some(match &self.display {
            Some(processor) => processor(value),
            None => self.default_display(value),
        })
    }

    fn default_display(&self, value: &Value) -> DisplayValue {
        let text = match value {
            Value::Null => String::new(),
            Value::Number(v) => format_number(*v, self.config.decimals),
            Value::Time(t) => t.to_string(),
            Value::Text(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
        };
        DisplayValue {
            text,
            suffix: self.config.unit.as_ref().map(|u| format!(" {u}")),
            color: self.config.color,
        }
    }
}

fn format_number(value: f64, decimals: Option<usize>) -> String {
    match decimals {
        Some(places) => format!("{value:.places$}"),
        None if value.fract() == 0.0 && value.abs() < 1e15 => format!("{value:.0}"),
        None => {
            let s = format!("{value:.4}");
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

/// A table of equal-length fields sharing an index domain.
#[derive(Debug, Clone, Default)]
pub struct AlignedFrame {
    fields: Vec<Field>,
}

impl AlignedFrame {
    /// Assemble a frame, checking that every field matches the length of field 0
    /// and holds values of its declared type.
    pub fn new(fields: Vec<Field>) -> Result<Self, FrameError> {
        let expected = fields.first().map_or(0, Field::len);
        for field in &fields {
            if field.len() != expected {
                return Err(FrameError::LengthMismatch {
                    field: field.name.clone(),
                    expected,
                    actual: field.len(),
                });
            }
            if let Some(index) = field.values.iter().position(|v| !v.fits(field.field_type)) {
                return Err(FrameError::TypeMismatch {
                    field: field.name.clone(),
                    index,
                    field_type: field.field_type,
                });
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// The shared x domain (field 0).
    pub fn x_field(&self) -> Option<&Field> {
        self.fields.first()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.x_field().map_or(0, Field::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
#[path = "frame_test.rs"]
mod tests;
