use tracing::trace;

use crate::calendar::Calendar;
use crate::core::{CalendarUnit, TimeRange};

use super::{AnimateOptions, RangeEngine};

/// Aligned range for one scale plus the unit its start is aligned to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResolution {
    pub range: TimeRange,
    pub resolution: CalendarUnit,
    pub scale_index: usize,
}

impl<C: Calendar> RangeEngine<C> {
    /// Scale-aligned range closest to the target range, `scale_step` levels
    /// away from its natural scale.
    #[must_use]
    pub fn get_snap_range(&self, scale_step: isize) -> (f64, f64) {
        self.resolve_snap(scale_step).range.as_tuple()
    }

    /// `(seconds of one resolution step, seconds of the whole snapped range)`
    /// for the scale `rel_scale` levels away from the current one.
    #[must_use]
    pub fn get_snap_seconds(&self, rel_scale: isize) -> (f64, f64) {
        let snap = self.resolve_snap(rel_scale);
        let full = snap.range.span();
        let step = self.calendar.add(snap.range.start, snap.resolution) - snap.range.start;
        (step, full)
    }

    /// Animates to the aligned range when the target is not aligned yet.
    ///
    /// Returns `true` when a corrective animation was started.
    pub fn snap(&mut self) -> bool {
        let target = self.target();
        let snapped = self.resolve_snap(0).range;
        if snapped == target {
            return false;
        }
        trace!(
            start = snapped.start,
            end = snapped.end,
            "snap to aligned range"
        );
        self.animate_range_with(snapped.start, snapped.end, AnimateOptions::without_snap())
            .is_ok()
    }

    /// Full snap computation behind `get_snap_range` and `get_snap_seconds`.
    #[must_use]
    pub fn resolve_snap(&self, scale_step: isize) -> SnapResolution {
        let target = self.target();
        let natural = self.scales.natural_index(target.span());
        let last = self.scales.len() - 1;
        let scale_index = natural.saturating_add_signed(scale_step).min(last);
        let scale = &self.scales[scale_index];
        let resolution = scale.resolution;

        // Re-deriving an aligned range through calendar arithmetic could move
        // it across a DST boundary, so aligned ranges are returned as-is.
        if self.calendar.floor(target.start, resolution) == target.start
            && self.calendar.add(target.start, scale.span) == target.end
        {
            return SnapResolution {
                range: target,
                resolution,
                scale_index,
            };
        }

        let center = target.center();
        let unrounded = 0.5 * (center + self.calendar.add(center, scale.span.negated()));
        let start = self.calendar.round(unrounded, resolution);
        let end = self.calendar.add(start, scale.span);
        let range = TimeRange::new(start, end).unwrap_or(target);

        SnapResolution {
            range,
            resolution,
            scale_index,
        }
    }
}
