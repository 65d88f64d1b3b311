use serde::{Deserialize, Serialize};

use crate::core::CalendarUnit;
use crate::error::{AxisError, AxisResult};

/// Ordered time interval in epoch seconds with `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: f64,
    pub end: f64,
}

impl TimeRange {
    pub fn new(start: f64, end: f64) -> AxisResult<Self> {
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(AxisError::InvalidRange { t1: start, t2: end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    #[must_use]
    pub fn center(self) -> f64 {
        0.5 * (self.start + self.end)
    }

    /// Inclusive on both ends.
    #[must_use]
    pub fn contains(self, time: f64) -> bool {
        self.start <= time && time <= self.end
    }

    #[must_use]
    pub fn as_tuple(self) -> (f64, f64) {
        (self.start, self.end)
    }

    /// Pixel offset of `time` along an axis of `pixel_count` pixels.
    #[must_use]
    pub fn time_to_pixel(self, time: f64, pixel_count: f64) -> f64 {
        (time - self.start) * pixel_count / self.span()
    }

    /// Linear blend where `weight == 1.0` yields `self` and `0.0` yields `other`.
    #[must_use]
    pub(crate) fn blend(self, other: Self, weight: f64) -> Self {
        Self {
            start: weight * self.start + (1.0 - weight) * other.start,
            end: weight * self.end + (1.0 - weight) * other.end,
        }
    }
}

/// Tick-label format class selected alongside the tick interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickGranularity {
    Minutes,
    Hours,
    Days,
    DayMonth,
    Months,
    Years,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub pixel_offset: f64,
    pub time: f64,
}

impl Tick {
    #[must_use]
    pub fn new(pixel_offset: f64, time: f64) -> Self {
        Self { pixel_offset, time }
    }
}

/// Major and minor ticks for one range/pixel-count combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickSet {
    pub ticks: Vec<Tick>,
    pub minor_ticks: Vec<Tick>,
    pub granularity: TickGranularity,
    /// Step between consecutive major ticks.
    pub major: CalendarUnit,
}
