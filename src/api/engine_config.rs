use serde::{Deserialize, Serialize};

use crate::core::CalendarUnit;
use crate::error::{AxisError, AxisResult};

/// Clock style used for minute-granularity tick labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimeRepresentation {
    #[default]
    H24,
    AmPm,
}

/// Default animation timing.
///
/// Without an explicit duration, a transition lasts
/// `base_seconds + log_ratio_weight * ln(larger_span / smaller_span)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationTuning {
    pub base_seconds: f64,
    pub log_ratio_weight: f64,
}

impl Default for AnimationTuning {
    fn default() -> Self {
        Self {
            base_seconds: 0.3,
            log_ratio_weight: 0.1,
        }
    }
}

/// Tick density and safety bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickTuning {
    /// Reference pixel distance; the minimum tick distance grows with
    /// `pixel_ref * sqrt(pixels / pixel_ref)`.
    pub pixel_ref: f64,
    /// Borrow the next level's minor step when the selected threshold is
    /// within this ratio of the minimum interval.
    pub hysteresis_ratio: f64,
    pub max_minor_per_major: usize,
    pub max_major_iterations: usize,
    /// Fraction of the span the walk starts before the visible start.
    pub walk_lead_ratio: f64,
}

impl Default for TickTuning {
    fn default() -> Self {
        Self {
            pixel_ref: 4.0,
            hysteresis_ratio: 0.125,
            max_minor_per_major: 20,
            max_major_iterations: 99,
            walk_lead_ratio: 0.1,
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist their axis setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct RangeEngineConfig {
    #[serde(default)]
    pub time_repr: TimeRepresentation,
    /// Shift applied to local midnight when computing "today".
    #[serde(default)]
    pub today_snap_offset: Option<CalendarUnit>,
    /// Extra length appended to the end of "today".
    #[serde(default)]
    pub today_end_offset: Option<CalendarUnit>,
    #[serde(default)]
    pub animation: AnimationTuning,
    #[serde(default)]
    pub ticks: TickTuning,
}

impl RangeEngineConfig {
    #[must_use]
    pub fn with_time_repr(mut self, time_repr: TimeRepresentation) -> Self {
        self.time_repr = time_repr;
        self
    }

    /// Sets the start-of-day shift and end extension used by "today".
    #[must_use]
    pub fn with_today_offsets(
        mut self,
        snap_offset: Option<CalendarUnit>,
        end_offset: Option<CalendarUnit>,
    ) -> Self {
        self.today_snap_offset = snap_offset;
        self.today_end_offset = end_offset;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationTuning) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: TickTuning) -> Self {
        self.ticks = ticks;
        self
    }

    pub fn from_json_str(raw: &str) -> AxisResult<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|err| AxisError::InvalidData(format!("config json: {err}")))?;
        config.validate()
    }

    pub fn to_json_string(&self) -> AxisResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| AxisError::InvalidData(format!("config json: {err}")))
    }

    pub(super) fn validate(self) -> AxisResult<Self> {
        let animation = self.animation;
        if !animation.base_seconds.is_finite() || animation.base_seconds < 0.0 {
            return Err(AxisError::InvalidData(
                "animation base duration must be finite and >= 0".to_owned(),
            ));
        }
        if !animation.log_ratio_weight.is_finite() || animation.log_ratio_weight < 0.0 {
            return Err(AxisError::InvalidData(
                "animation log-ratio weight must be finite and >= 0".to_owned(),
            ));
        }

        let ticks = self.ticks;
        if !ticks.pixel_ref.is_finite() || ticks.pixel_ref <= 0.0 {
            return Err(AxisError::InvalidData(
                "tick pixel reference must be finite and > 0".to_owned(),
            ));
        }
        if !(0.0..1.0).contains(&ticks.hysteresis_ratio) {
            return Err(AxisError::InvalidData(
                "tick hysteresis ratio must be in [0, 1)".to_owned(),
            ));
        }
        if ticks.max_minor_per_major == 0 || ticks.max_major_iterations == 0 {
            return Err(AxisError::InvalidData(
                "tick iteration bounds must be > 0".to_owned(),
            ));
        }
        if !ticks.walk_lead_ratio.is_finite() || ticks.walk_lead_ratio < 0.0 {
            return Err(AxisError::InvalidData(
                "tick walk lead ratio must be finite and >= 0".to_owned(),
            ));
        }

        Ok(self)
    }
}
