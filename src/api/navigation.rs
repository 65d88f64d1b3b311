use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::Calendar;
use crate::core::{CalendarUnit, TimeRange};
use crate::error::AxisResult;

use super::{AnimateOptions, RangeEngine};

const DAY: f64 = 86_400.0;
/// Beyond this span the "now" button jumps by whole years.
const YEAR_NAVIGATION_SPAN: f64 = 180.0 * DAY;
/// Shorter spans page by their own width instead of by calendar units.
const CALENDAR_STEP_MIN_SPAN: f64 = 80_000.0;
/// Wheel delta of one mouse wheel notch.
const WHEEL_NOTCH: f64 = 48.0;
const WHEEL_PAN_RATIO: f64 = 0.15;

/// Scales offered by the navigation controls for the displayed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleNavigation {
    pub now_scale: CalendarUnit,
    pub zoom_in: CalendarUnit,
    pub zoom_out: CalendarUnit,
    /// The displayed range already is the `now_scale` range containing now.
    pub on_now_scale: bool,
}

/// Input helpers that take `now` record it as the frame time first, so the
/// animation they start is timed from the input event rather than from the
/// last drawn frame.
impl<C: Calendar> RangeEngine<C> {
    /// Range covering "today" for the local day containing `now`.
    ///
    /// Honours the configured today offsets. When the target already equals
    /// the offset day, returns the plain midnight-to-midnight day instead so a
    /// second press toggles between the two.
    #[must_use]
    pub fn today_range(&self, now: f64) -> (f64, f64) {
        let calendar = &self.calendar;
        let midnight = calendar.floor(now, CalendarUnit::days(1));
        let mut start = match self.config.today_snap_offset {
            Some(offset) => calendar.add(midnight, offset),
            None => midnight,
        };
        if start > now {
            start = calendar.add(start, CalendarUnit::days(-1));
        }
        let mut end = calendar.add(start, CalendarUnit::days(1));
        if let Some(offset) = self.config.today_end_offset {
            end = calendar.add(end, offset);
        }

        if (start, end) == self.target().as_tuple() {
            return (midnight, calendar.add(midnight, CalendarUnit::days(1)));
        }
        (start, end)
    }

    /// Scale matching the displayed range, as used by the "now" control.
    #[must_use]
    pub fn now_scale(&self) -> CalendarUnit {
        let span = self.current.span();
        if span > YEAR_NAVIGATION_SPAN {
            CalendarUnit::years(1)
        } else {
            self.scales.natural(span).span
        }
    }

    #[must_use]
    pub fn scale_navigation(&self, now: f64) -> ScaleNavigation {
        let index = self.scales.natural_index(self.current.span());
        let now_scale = self.now_scale();
        let (start, end) = self.snap_now_bounds(now, now_scale);
        ScaleNavigation {
            now_scale,
            zoom_in: self.scales.clamped(index as isize - 1).span,
            zoom_out: self.scales.clamped(index as isize + 1).span,
            on_now_scale: self.current.as_tuple() == (start, end),
        }
    }

    /// Range of one `scale` unit containing `now`.
    pub fn snap_now_range(&self, now: f64, scale: CalendarUnit) -> AxisResult<(f64, f64)> {
        let (start, end) = self.snap_now_bounds(now, scale);
        Ok(TimeRange::new(start, end)?.as_tuple())
    }

    /// Animates to [`RangeEngine::today_range`].
    pub fn snap_today(&mut self, now: f64) -> AxisResult<()> {
        self.begin_frame(now);
        let (start, end) = self.today_range(now);
        debug!(start, end, "navigate to today");
        self.animate_range(start, end)
    }

    /// Animates to the `scale` range containing `now`.
    pub fn snap_now(&mut self, now: f64, scale: CalendarUnit) -> AxisResult<()> {
        self.begin_frame(now);
        let (start, end) = self.snap_now_range(now, scale)?;
        self.animate_range(start, end)
    }

    /// Keeps the target span and centres it on `now`.
    pub fn center_on(&mut self, now: f64) -> AxisResult<()> {
        self.begin_frame(now);
        let half = 0.5 * self.target().span();
        self.animate_range(now - half, now + half)
    }

    /// Animates to the `scale` range containing `now`, or containing the
    /// target's centre when `now` is outside the target.
    pub fn zoom_to_scale(&mut self, now: f64, scale: CalendarUnit) -> AxisResult<()> {
        self.begin_frame(now);
        let target = self.target();
        let reference = if target.contains(now) {
            now
        } else {
            target.center()
        };
        let (start, end) = self.snap_now_range(reference, scale)?;
        self.animate_range(start, end)
    }

    /// Zooms `scale_step` levels in (negative) or out (positive), keeping
    /// `now` centred when it is inside the target.
    pub fn zoom_step(&mut self, now: f64, scale_step: isize) -> AxisResult<()> {
        self.begin_frame(now);
        let target = self.target();
        let (mut start, mut end) = self.get_snap_range(scale_step);
        if target.contains(now) {
            let half = 0.5 * (end - start);
            (start, end) = (now - half, now + half);
        }
        self.animate_range(start, end)
    }

    /// Pages one range width forward or backward.
    ///
    /// Short spans move by their own width; longer ones move by one
    /// [`RangeEngine::now_scale`] unit so months and years stay aligned.
    pub fn step_range(&mut self, now: f64, forward: bool) -> AxisResult<()> {
        self.begin_frame(now);
        let target = self.target();
        let span = target.span();
        let (start, end) = if span < CALENDAR_STEP_MIN_SPAN {
            if forward {
                (target.end, target.end + span)
            } else {
                (target.start - span, target.start)
            }
        } else {
            let step = if forward {
                self.now_scale()
            } else {
                self.now_scale().negated()
            };
            (
                self.calendar.add(target.start, step),
                self.calendar.add(target.end, step),
            )
        };
        debug!(forward, start, end, "step range");
        self.animate_range_with(start, end, AnimateOptions::without_snap())
    }

    /// Pans by a wheel delta; one notch (48) moves 15% of the snapped span.
    ///
    /// The displayed range first jumps halfway to the target so that fast
    /// consecutive wheel events accumulate instead of lagging behind.
    pub fn scroll_translate(&mut self, now: f64, direction: f64) -> AxisResult<()> {
        self.begin_frame(now);
        let target = self.target();
        let (_, full) = self.get_snap_seconds(0);
        let step = WHEEL_PAN_RATIO * full * direction / WHEEL_NOTCH;
        let halfway = self.current.blend(target, 0.5);
        self.set_range(halfway.start, halfway.end)?;
        self.animate_range(target.start + step, target.end + step)
    }

    /// Zooms one scale level around the time at `anchor_fraction` of the
    /// displayed range (0 = start, 1 = end); negative `direction` zooms in.
    pub fn scroll_scale(
        &mut self,
        now: f64,
        anchor_fraction: f64,
        direction: f64,
    ) -> AxisResult<()> {
        self.begin_frame(now);
        let (start, end) = self.current.as_tuple();
        let span_before = end - start;
        let rel_scale = if direction < 0.0 { -1 } else { 1 };
        let (_, span_after) = self.get_snap_seconds(rel_scale);
        let new_start = start + anchor_fraction * (span_before - span_after);
        self.animate_range(new_start, new_start + span_after)
    }

    fn snap_now_bounds(&self, now: f64, scale: CalendarUnit) -> (f64, f64) {
        let start = self.calendar.floor(now, scale);
        (start, self.calendar.add(start, scale))
    }
}
