use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};

/// Multiplicative padding applied to a field's raw min/max when deriving a
/// scale domain.
///
/// The asymmetry (more headroom above than below) is a preserved visual
/// choice of the chart this engine reproduces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainPadding {
    pub low_factor: f64,
    pub high_factor: f64,
}

impl Default for DomainPadding {
    fn default() -> Self {
        Self {
            low_factor: 0.75,
            high_factor: 1.1,
        }
    }
}

impl DomainPadding {
    pub fn validate(self) -> ScatterResult<Self> {
        if !self.low_factor.is_finite()
            || !self.high_factor.is_finite()
            || self.low_factor <= 0.0
            || self.high_factor <= 0.0
        {
            return Err(ScatterError::InvalidData(
                "domain padding factors must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Linear value-to-pixel mapping with a signed pixel range.
///
/// The range carries orientation: a horizontal axis uses `(0, width)` while a
/// vertical axis uses `(height, 0)` so that low values land near the bottom
/// of the plot. Scales are rebuilt, never mutated, when the axis selection
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ScatterResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() || domain.0 == domain.1 {
            return Err(ScatterError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() || range.0 == range.1 {
            return Err(ScatterError::InvalidData(
                "scale pixel range must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    /// Builds a scale whose domain is the padded extent of raw data values.
    ///
    /// Domain = `[min * low_factor, max * high_factor]`, exactly.
    pub fn from_padded_extent(
        min: f64,
        max: f64,
        padding: DomainPadding,
        range: (f64, f64),
    ) -> ScatterResult<Self> {
        let padding = padding.validate()?;
        if !min.is_finite() || !max.is_finite() {
            return Err(ScatterError::InvalidData(
                "scale extent must be finite".to_owned(),
            ));
        }

        Self::new(
            (min * padding.low_factor, max * padding.high_factor),
            range,
        )
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Returns a copy of this scale with the domain replaced.
    ///
    /// Used by animated redraws, which interpolate domain endpoints while the
    /// pixel range stays fixed.
    pub fn with_domain(self, domain: (f64, f64)) -> ScatterResult<Self> {
        Self::new(domain, (self.range_start, self.range_end))
    }

    /// Maps a domain value to a pixel coordinate.
    ///
    /// Pure linear interpolation; non-finite input propagates as a
    /// non-finite pixel rather than an error, matching the lenient
    /// number handling of the survey loader.
    #[must_use]
    pub fn value_to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Inverse mapping from pixel coordinate to domain value.
    #[must_use]
    pub fn pixel_to_value(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}
