use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::Calendar;
use crate::core::{CalendarUnit, IntervalTable, ScaleTable, TickSet, TimeRange};
use crate::error::AxisResult;

use super::tick_generator::TickCacheKey;
use super::{InvalidationLevel, RangeEngineConfig, TickCacheStats};

/// In-flight transition between two ranges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeAnimation {
    pub from: TimeRange,
    pub to: TimeRange,
    pub started_at: f64,
    pub duration_seconds: f64,
    pub snap_after: bool,
}

impl RangeAnimation {
    #[must_use]
    pub fn end_time(&self) -> f64 {
        self.started_at + self.duration_seconds
    }
}

#[derive(Debug, Clone)]
pub(super) struct TickCacheEntry {
    pub(super) key: TickCacheKey,
    pub(super) result: Arc<TickSet>,
}

/// Owner of the visible time interval of one timeline view.
///
/// The host frame loop samples "now" once per frame and passes it to
/// [`RangeEngine::animation_update`]; every query made during that frame then
/// observes the same state. Input handlers mutate the engine between frames.
pub struct RangeEngine<C: Calendar> {
    pub(super) calendar: C,
    pub(super) config: RangeEngineConfig,
    pub(super) scales: ScaleTable,
    pub(super) intervals: IntervalTable,
    pub(super) current: TimeRange,
    pub(super) animation: Option<RangeAnimation>,
    pub(super) frame_now: f64,
    pub(super) invalidation: InvalidationLevel,
    pub(super) tick_cache: Option<TickCacheEntry>,
    pub(super) tick_cache_stats: TickCacheStats,
}

impl<C: Calendar> RangeEngine<C> {
    /// Creates an engine showing `initial` with the built-in tables.
    pub fn new(calendar: C, config: RangeEngineConfig, initial: TimeRange) -> AxisResult<Self> {
        Self::with_tables(
            calendar,
            config,
            ScaleTable::default(),
            IntervalTable::default(),
            initial,
        )
    }

    /// Creates an engine with custom, already validated tables.
    pub fn with_tables(
        calendar: C,
        config: RangeEngineConfig,
        scales: ScaleTable,
        intervals: IntervalTable,
        initial: TimeRange,
    ) -> AxisResult<Self> {
        let config = config.validate()?;
        debug!(
            start = initial.start,
            end = initial.end,
            scales = scales.len(),
            intervals = intervals.len(),
            "create range engine"
        );
        Ok(Self {
            calendar,
            config,
            scales,
            intervals,
            current: initial,
            animation: None,
            frame_now: 0.0,
            invalidation: InvalidationLevel::Range,
            tick_cache: None,
            tick_cache_stats: TickCacheStats::default(),
        })
    }

    /// Creates an engine showing the local day containing `now`, snapped
    /// without animation.
    pub fn for_today(calendar: C, config: RangeEngineConfig, now: f64) -> AxisResult<Self> {
        let start = calendar.floor(now, CalendarUnit::days(1));
        let end = calendar.add(start, CalendarUnit::days(1));
        let mut engine = Self::new(calendar, config, TimeRange::new(start, end)?)?;
        engine.frame_now = now;
        let snapped = engine.resolve_snap(0).range;
        engine.current = snapped;
        Ok(engine)
    }

    #[must_use]
    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    #[must_use]
    pub fn config(&self) -> RangeEngineConfig {
        self.config
    }

    #[must_use]
    pub fn scales(&self) -> &ScaleTable {
        &self.scales
    }

    #[must_use]
    pub fn intervals(&self) -> &IntervalTable {
        &self.intervals
    }

    /// Frame time last supplied through [`RangeEngine::begin_frame`] or
    /// [`RangeEngine::animation_update`].
    #[must_use]
    pub fn frame_now(&self) -> f64 {
        self.frame_now
    }

    /// Records the frame's "now" without advancing any animation.
    ///
    /// Call this before [`RangeEngine::animate_range`] when the host drives
    /// animations from its own input handlers. Non-finite `now` is ignored.
    pub fn begin_frame(&mut self, now: f64) {
        if now.is_finite() {
            self.frame_now = now;
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[must_use]
    pub fn animation(&self) -> Option<RangeAnimation> {
        self.animation
    }

    pub(super) fn target(&self) -> TimeRange {
        self.animation.map_or(self.current, |animation| animation.to)
    }
}
