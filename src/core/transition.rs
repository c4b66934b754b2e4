use serde::{Deserialize, Serialize};

use crate::error::{ScatterError, ScatterResult};

/// Tuning for animated redraws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Total animation duration in milliseconds.
    pub duration_ms: f64,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self { duration_ms: 1000.0 }
    }
}

impl TransitionConfig {
    pub fn validate(self) -> ScatterResult<Self> {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(ScatterError::InvalidData(
                "transition duration must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Deterministic animation clock for one redraw transition.
///
/// The engine steps this from its host loop (`advance(delta_ms)`); there is
/// no wall clock inside the core, so tests can drive animations exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitionProgress {
    elapsed_ms: f64,
    duration_ms: f64,
}

impl TransitionProgress {
    #[must_use]
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            elapsed_ms: 0.0,
            duration_ms: config.duration_ms,
        }
    }

    /// Advances the clock and returns the new eased progress in `[0, 1]`.
    ///
    /// Negative or non-finite deltas are ignored.
    pub fn step(&mut self, delta_ms: f64) -> f64 {
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.elapsed_ms = (self.elapsed_ms + delta_ms).min(self.duration_ms);
        }
        self.eased()
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn linear(self) -> f64 {
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Smoothed progress in `[0, 1]` (cubic in-out).
    #[must_use]
    pub fn eased(self) -> f64 {
        ease_cubic_in_out(self.linear())
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

/// Cubic in-out easing, the default curve of the transition primitive the
/// source chart animated with.
#[must_use]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Linear interpolation between two values.
///
/// Non-finite endpoints propagate, so a mark with a `NaN` position stays
/// `NaN` throughout an animation instead of producing a phantom position.
#[must_use]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
