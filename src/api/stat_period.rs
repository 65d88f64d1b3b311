use crate::calendar::Calendar;
use crate::core::CalendarUnit;

use super::RangeEngine;

const MIN_AGGREGATION_SPAN: f64 = 2.0 * 86_400.0;

impl<C: Calendar> RangeEngine<C> {
    /// Bucket width for aggregating records over the displayed range.
    ///
    /// Spans shorter than two days return `(None, "")`: records are shown
    /// individually. The month level buckets by week since no sub-month unit
    /// aligns with months.
    #[must_use]
    pub fn get_stat_period(&self) -> (Option<CalendarUnit>, &str) {
        let span = self.current.span();
        if span < MIN_AGGREGATION_SPAN {
            return (None, "");
        }

        let scale = self
            .scales
            .natural_labelled(span)
            .unwrap_or_else(|| self.scales.clamped(isize::MAX));
        let period = if scale.span == CalendarUnit::months(1) {
            CalendarUnit::weeks(1)
        } else {
            scale.resolution
        };
        (Some(period), scale.label.as_str())
    }
}
