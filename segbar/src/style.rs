//! Style configuration.
//!
//! `SegmentedStyle` is a bag of plain values handed to the rendering layer.
//! The selection model only reads `indicator_width_proportion`; everything
//! else is applied by whoever draws the control.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;
use crate::primitives::Color;

/// Which of the two label states a segment is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    Focused,
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Medium,
    Bold,
}

/// Resolved text attributes for one label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub font_size: f32,
    pub weight: FontWeight,
    pub color: Color,
}

/// Style parameters for a segmented control.
///
/// Every field is optional in JSON; missing fields take the defaults below.
///
/// ```json
/// { "spacing": 4, "indicator_width_proportion": 0.7, "focused_text_color": "#1C1C1E" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SegmentedStyle {
    /// Horizontal gap between adjacent segments.
    pub spacing: f32,
    /// Fraction of the focused segment's width covered by the indicator, in (0, 1].
    pub indicator_width_proportion: f32,
    /// Height of the indicator bar. Corners are rounded to half of this.
    pub indicator_height: f32,
    /// Gap between the bottom of the label row and the indicator bar.
    pub indicator_spacing: f32,
    pub focused_font_size: f32,
    pub focused_text_color: Color,
    pub default_font_size: f32,
    pub default_text_color: Color,
    pub indicator_color: Color,
    /// Length of the indicator slide, in seconds.
    pub animation_secs: f32,
}

impl Default for SegmentedStyle {
    fn default() -> Self {
        Self {
            spacing: 0.0,
            indicator_width_proportion: 1.0,
            indicator_height: 4.0,
            indicator_spacing: 0.0,
            focused_font_size: 17.0,
            focused_text_color: Color::BLACK,
            default_font_size: 17.0,
            default_text_color: Color::GRAY,
            indicator_color: Color::SYSTEM_BLUE,
            animation_secs: 0.3,
        }
    }
}

impl SegmentedStyle {
    /// Parse and validate a JSON style document.
    pub fn from_json_str(json: &str) -> Result<Self, StyleError> {
        let style: Self = serde_json::from_str(json)?;
        style.validate()?;
        Ok(style)
    }

    /// Read, parse and validate a JSON style file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject non-finite or negative sizes and out-of-range proportions.
    pub fn validate(&self) -> Result<(), StyleError> {
        validate_proportion(self.indicator_width_proportion)?;
        non_negative("spacing", self.spacing)?;
        non_negative("indicator_height", self.indicator_height)?;
        non_negative("indicator_spacing", self.indicator_spacing)?;
        non_negative("animation_secs", self.animation_secs)?;
        positive("focused_font_size", self.focused_font_size)?;
        positive("default_font_size", self.default_font_size)?;
        Ok(())
    }

    /// Text attributes for a label in the given state.
    pub fn label_style(&self, emphasis: Emphasis) -> LabelStyle {
        match emphasis {
            Emphasis::Focused => LabelStyle {
                font_size: self.focused_font_size,
                weight: FontWeight::Bold,
                color: self.focused_text_color,
            },
            Emphasis::Default => LabelStyle {
                font_size: self.default_font_size,
                weight: FontWeight::Medium,
                color: self.default_text_color,
            },
        }
    }

    pub fn indicator_corner_radius(&self) -> f32 {
        self.indicator_height / 2.0
    }

    /// Slide duration; zero when `animation_secs` is negative or not finite.
    pub fn animation_duration(&self) -> Duration {
        Duration::try_from_secs_f32(self.animation_secs).unwrap_or_default()
    }
}

/// Accept a width proportion in (0, 1].
pub(crate) fn validate_proportion(value: f32) -> Result<f32, StyleError> {
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(StyleError::Invalid {
            field: "indicator_width_proportion",
            value,
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), StyleError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(StyleError::Invalid { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), StyleError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(StyleError::Invalid { field, value })
    }
}
