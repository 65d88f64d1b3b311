use std::sync::Arc;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use tracing::{trace, warn};

use crate::calendar::Calendar;
use crate::core::{CalendarUnit, Tick, TickGranularity, TickSet, TimeRange};
use crate::error::{AxisError, AxisResult};

use super::RangeEngine;
use super::engine::TickCacheEntry;

const HOUR: f64 = 3_600.0;
const DUPLICATE_HOUR_PROBES: usize = 5;
const DST_STEP_TOLERANCE: f64 = 1.1;

/// Hit/miss counters of the single-entry tick cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickCacheStats {
    pub hits: u64,
    pub misses: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(super) struct TickCacheKey {
    start: OrderedFloat<f64>,
    end: OrderedFloat<f64>,
    pixel_count: OrderedFloat<f64>,
}

impl TickCacheKey {
    fn new(range: TimeRange, pixel_count: f64) -> Self {
        Self {
            start: OrderedFloat(range.start),
            end: OrderedFloat(range.end),
            pixel_count: OrderedFloat(pixel_count),
        }
    }
}

/// Major/minor steps resolved for one tick computation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TickPlan {
    major: CalendarUnit,
    minor: CalendarUnit,
    granularity: TickGranularity,
    check_dst: bool,
    min_pixel_distance: f64,
}

/// Extra ticks covering a repeated wall-clock hour.
#[derive(Debug, Clone, PartialEq, Default)]
pub(super) struct DuplicateHourTicks {
    pub(super) ticks: SmallVec<[f64; 2]>,
    pub(super) minor_ticks: Vec<f64>,
}

impl<C: Calendar> RangeEngine<C> {
    /// Major and minor ticks for the displayed range on an axis of
    /// `pixel_count` pixels.
    ///
    /// The last result is cached by `(start, end, pixel_count)`; repeated calls
    /// with an unchanged range return the same shared [`TickSet`].
    pub fn get_ticks(&mut self, pixel_count: f64) -> AxisResult<Arc<TickSet>> {
        if !pixel_count.is_finite() || pixel_count <= 0.0 {
            return Err(AxisError::InvalidData(
                "tick pixel count must be finite and > 0".to_owned(),
            ));
        }

        let key = TickCacheKey::new(self.current, pixel_count);
        if let Some(entry) = self.tick_cache.as_ref().filter(|entry| entry.key == key) {
            self.tick_cache_stats.hits += 1;
            trace!(pixel_count, "tick cache hit");
            return Ok(Arc::clone(&entry.result));
        }

        self.tick_cache_stats.misses += 1;
        trace!(
            start = self.current.start,
            end = self.current.end,
            pixel_count,
            "tick cache miss"
        );
        let result = Arc::new(self.compute_ticks(pixel_count));
        self.tick_cache = Some(TickCacheEntry {
            key,
            result: Arc::clone(&result),
        });
        Ok(result)
    }

    #[must_use]
    pub fn tick_cache_stats(&self) -> TickCacheStats {
        self.tick_cache_stats
    }

    fn compute_ticks(&self, pixel_count: f64) -> TickSet {
        let range = self.current;
        let span = range.span();
        let tuning = self.config.ticks;
        let plan = self.plan_ticks(span, pixel_count);

        let mut ticks = Vec::new();
        let mut minor_ticks = Vec::new();
        let max_iterations = max_walk_iterations(
            pixel_count,
            plan.min_pixel_distance,
            tuning.max_major_iterations,
        );

        let mut t = self
            .calendar
            .floor(range.start - tuning.walk_lead_ratio * span, plan.major);
        let mut reached_end = false;
        for _ in 0..=max_iterations {
            ticks.push(Tick::new(range.time_to_pixel(t, pixel_count), t));

            // Stepping from t + 1s and flooring absorbs spring-forward gaps.
            let mut t_next = self
                .calendar
                .floor(self.calendar.add(t + 1.0, plan.major), plan.major);
            if t_next <= t {
                t_next = self.calendar.add(t, plan.major);
            }
            if t_next <= t {
                warn!(time = t, major = %plan.major, "tick walk failed to advance");
                reached_end = true;
                break;
            }

            self.push_minor_ticks(range, pixel_count, t, t_next, plan.minor, &mut minor_ticks);

            let stretched = (t_next - t) > plan.major.nominal_seconds() * DST_STEP_TOLERANCE;
            if plan.check_dst && stretched {
                if let Some(extra) = self.duplicate_hour_ticks(t_next, plan.minor) {
                    trace!(count = extra.ticks.len(), "ticks added for repeated hour");
                    ticks.extend(
                        extra
                            .ticks
                            .iter()
                            .map(|&time| Tick::new(range.time_to_pixel(time, pixel_count), time)),
                    );
                    minor_ticks.extend(
                        extra
                            .minor_ticks
                            .iter()
                            .map(|&time| Tick::new(range.time_to_pixel(time, pixel_count), time)),
                    );
                }
            }

            if t > range.end {
                reached_end = true;
                break;
            }
            t = t_next;
        }

        if !reached_end {
            warn!(
                max_iterations,
                ticks = ticks.len(),
                "tick walk truncated by iteration bound"
            );
        }

        TickSet {
            ticks,
            minor_ticks,
            granularity: plan.granularity,
            major: plan.major,
        }
    }

    fn plan_ticks(&self, span: f64, pixel_count: f64) -> TickPlan {
        let tuning = self.config.ticks;
        let min_pixel_distance = tuning.pixel_ref * (pixel_count / tuning.pixel_ref).sqrt();
        let min_interval = span * min_pixel_distance / pixel_count;

        let choice = self.intervals.select(min_interval);
        let threshold = choice.entry.threshold_seconds;
        let mut major = choice.entry.major;
        let mut minor = choice.entry.minor;

        // Close to the next level: preview its minor step so minor and major
        // density change on different zoom steps.
        if let Some(next) = self.intervals.get(choice.index + 1) {
            if (threshold - min_interval) / threshold < tuning.hysteresis_ratio {
                minor = next.minor;
            }
        }

        // Day-of-month alignment looks wrong on week-aligned zoom levels.
        if self.scales.natural(span).is_week_aligned() {
            major = CalendarUnit::weeks(1);
            minor = CalendarUnit::weeks(1);
        }

        TickPlan {
            major,
            minor,
            granularity: choice.entry.granularity,
            check_dst: major.kind.is_intraday(),
            min_pixel_distance,
        }
    }

    fn push_minor_ticks(
        &self,
        range: TimeRange,
        pixel_count: f64,
        major_time: f64,
        next_major_time: f64,
        minor: CalendarUnit,
        out: &mut Vec<Tick>,
    ) {
        let limit = self.config.ticks.max_minor_per_major;
        let mut t_minor = self.calendar.add(major_time, minor);
        let mut emitted = 0;
        while emitted < limit && t_minor < next_major_time {
            out.push(Tick::new(range.time_to_pixel(t_minor, pixel_count), t_minor));
            emitted += 1;
            let t_next = self.calendar.add(t_minor, minor);
            if t_next <= t_minor {
                break;
            }
            t_minor = t_next;
        }
        if emitted == limit && t_minor < next_major_time {
            trace!(major_time, limit, "minor ticks capped");
        }
    }

    /// Probes the first hours of the day containing `major_time` for a wall
    /// clock hour that occurs twice, returning ticks for its second run.
    ///
    /// Stepping one wall-clock hour from the first occurrence of a repeated
    /// hour jumps two real hours; the skipped instant gets its own tick.
    pub(super) fn duplicate_hour_ticks(
        &self,
        major_time: f64,
        minor: CalendarUnit,
    ) -> Option<DuplicateHourTicks> {
        let mut probe = self.calendar.floor(major_time, CalendarUnit::days(1));
        for _ in 0..DUPLICATE_HOUR_PROBES {
            let expected = probe + HOUR;
            probe = self.calendar.add(probe, CalendarUnit::hours(1));
            if probe == expected {
                continue;
            }

            let ticks: SmallVec<[f64; 2]> = if major_time == probe {
                smallvec![expected]
            } else {
                smallvec![expected, probe]
            };

            let mut minor_ticks = Vec::new();
            let minor_step = self.calendar.add(major_time, minor) - major_time;
            if minor_step > 0.0 {
                let limit = self.config.ticks.max_minor_per_major;
                let mut t_minor = expected + minor_step;
                while minor_ticks.len() < limit && t_minor < probe {
                    minor_ticks.push(t_minor);
                    t_minor += minor_step;
                }
            }
            return Some(DuplicateHourTicks { ticks, minor_ticks });
        }
        None
    }
}

/// Iteration bound of the major tick walk, which makes one more pass than this.
fn max_walk_iterations(pixel_count: f64, min_pixel_distance: f64, cap: usize) -> usize {
    ((2.0 * pixel_count / min_pixel_distance).ceil() as usize).min(cap)
}
