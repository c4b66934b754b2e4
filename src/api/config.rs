use serde::{Deserialize, Serialize};

use crate::core::{DomainPadding, Margins, PlotArea, TransitionConfig, Viewport};
use crate::error::{ScatterError, ScatterResult};
use crate::render::Color;

/// Visual styling for data marks (circle plus state abbreviation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkStyle {
    pub radius_px: f64,
    pub fill: Color,
    pub label_color: Color,
    pub label_font_size_px: f64,
    /// Data-space amount subtracted from the y value before scaling so the
    /// abbreviation sits visually centered on its circle.
    pub label_y_nudge: f64,
}

impl Default for MarkStyle {
    fn default() -> Self {
        Self {
            radius_px: 16.0,
            fill: Color::rgba(0.537, 0.741, 0.827, 0.9),
            label_color: Color::rgb(1.0, 1.0, 1.0),
            label_font_size_px: 10.0,
            label_y_nudge: 0.4,
        }
    }
}

impl MarkStyle {
    fn validate(self) -> ScatterResult<Self> {
        if !self.radius_px.is_finite() || self.radius_px <= 0.0 {
            return Err(ScatterError::InvalidData(
                "mark radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_font_size_px.is_finite() || self.label_font_size_px <= 0.0 {
            return Err(ScatterError::InvalidData(
                "mark label font size must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_y_nudge.is_finite() {
            return Err(ScatterError::InvalidData(
                "mark label nudge must be finite".to_owned(),
            ));
        }
        self.fill.validate()?;
        self.label_color.validate()?;
        Ok(self)
    }
}

/// Styling shared by both axes and their clickable choice labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisStyle {
    pub tick_count: usize,
    pub tick_length_px: f64,
    pub stroke_width: f64,
    pub color: Color,
    pub tick_label_font_size_px: f64,
    pub choice_label_font_size_px: f64,
    pub active_label_color: Color,
    pub inactive_label_color: Color,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            tick_count: 10,
            tick_length_px: 6.0,
            stroke_width: 1.0,
            color: Color::rgb(0.2, 0.2, 0.2),
            tick_label_font_size_px: 11.0,
            choice_label_font_size_px: 16.0,
            active_label_color: Color::rgb(0.1, 0.1, 0.1),
            inactive_label_color: Color::rgb(0.6, 0.6, 0.6),
        }
    }
}

impl AxisStyle {
    fn validate(self) -> ScatterResult<Self> {
        if self.tick_count < 2 {
            return Err(ScatterError::InvalidData(
                "axis tick count must be >= 2".to_owned(),
            ));
        }
        for (name, value) in [
            ("tick_length_px", self.tick_length_px),
            ("stroke_width", self.stroke_width),
            ("tick_label_font_size_px", self.tick_label_font_size_px),
            ("choice_label_font_size_px", self.choice_label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScatterError::InvalidData(format!(
                    "axis style `{name}` must be finite and > 0"
                )));
            }
        }
        self.color.validate()?;
        self.active_label_color.validate()?;
        self.inactive_label_color.validate()?;
        Ok(self)
    }
}

/// Full engine configuration.
///
/// Defaults reproduce the reference chart surface: a 1000×500 viewport with
/// 10/60/100/100 margins (840×390 interior), 0.75/1.1 domain padding and a
/// 1000 ms animated redraw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterEngineConfig {
    pub viewport: Viewport,
    pub margins: Margins,
    pub domain_padding: DomainPadding,
    pub transition: TransitionConfig,
    pub mark_style: MarkStyle,
    pub axis_style: AxisStyle,
}

impl Default for ScatterEngineConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(1000, 500),
            margins: Margins::new(10.0, 60.0, 100.0, 100.0),
            domain_padding: DomainPadding::default(),
            transition: TransitionConfig::default(),
            mark_style: MarkStyle::default(),
            axis_style: AxisStyle::default(),
        }
    }
}

impl ScatterEngineConfig {
    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_domain_padding(mut self, padding: DomainPadding) -> Self {
        self.domain_padding = padding;
        self
    }

    #[must_use]
    pub fn with_transition(mut self, transition: TransitionConfig) -> Self {
        self.transition = transition;
        self
    }

    pub fn validate(self) -> ScatterResult<Self> {
        // Carving also validates viewport and margins.
        PlotArea::carve(self.viewport, self.margins)?;
        self.domain_padding.validate()?;
        self.transition.validate()?;
        self.mark_style.validate()?;
        self.axis_style.validate()?;
        Ok(self)
    }
}
