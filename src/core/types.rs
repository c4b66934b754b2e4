use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Pixel margins carved out of the viewport for axes and label rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn validate(self) -> ScatterResult<()> {
        for (name, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScatterError::InvalidData(format!(
                    "margin `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Interior plotting rectangle, in viewport pixel coordinates.
///
/// `left`/`top` locate the plot origin; scales map into plot-local
/// `[0, width]` / `[height, 0]` ranges and scene builders add the origin
/// back when emitting primitives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    /// Carves the interior plot rectangle out of a viewport.
    pub fn carve(viewport: Viewport, margins: Margins) -> ScatterResult<Self> {
        if !viewport.is_valid() {
            return Err(ScatterError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        margins.validate()?;

        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ScatterError::InvalidData(format!(
                "margins leave no interior plot area: width={width}, height={height}"
            )));
        }

        Ok(Self {
            left: margins.left,
            top: margins.top,
            width,
            height,
        })
    }

    /// Plot-local horizontal pixel range, low value toward low pixel.
    #[must_use]
    pub fn x_pixel_range(self) -> (f64, f64) {
        (0.0, self.width)
    }

    /// Plot-local vertical pixel range, inverted because screen Y grows downward.
    #[must_use]
    pub fn y_pixel_range(self) -> (f64, f64) {
        (self.height, 0.0)
    }
}
