//! Calendar arithmetic consumed by the range engine.
//!
//! All operations work on epoch seconds and resolve calendar meaning in a
//! single local time zone. Implementations must be DST-aware: wall-clock
//! units (minutes and up) step in local time, seconds step in absolute time.

mod chrono_calendar;

use serde::{Deserialize, Serialize};

use crate::core::CalendarUnit;

pub use chrono_calendar::ChronoCalendar;

/// First day of the calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

pub trait Calendar {
    /// Largest aligned timestamp `<= time` for `unit`.
    fn floor(&self, time: f64, unit: CalendarUnit) -> f64;

    /// Calendar-correct signed step.
    fn add(&self, time: f64, unit: CalendarUnit) -> f64;

    /// Nearest aligned timestamp; ties round up.
    fn round(&self, time: f64, unit: CalendarUnit) -> f64 {
        let positive = CalendarUnit::new(unit.count.abs().max(1), unit.kind);
        let below = self.floor(time, positive);
        let above = self.add(below, positive);
        if time - below < above - time {
            below
        } else {
            above
        }
    }

    fn weekday_short_name(&self, time: f64) -> &'static str;

    fn month_short_name(&self, time: f64) -> &'static str;

    /// Local `(year, month, day_of_month)`, month and day 1-based.
    fn year_month_day(&self, time: f64) -> (i32, u32, u32);

    /// Local `(hour, minute)` on the wall clock.
    fn hour_minute(&self, time: f64) -> (u32, u32);

    fn week_number(&self, time: f64) -> u32;

    fn is_first_day_of_week(&self, time: f64) -> bool;

    /// Hours of `[t1, t2)` that fall on the last `free_days` days of the week.
    fn free_hours_in_range(&self, t1: f64, t2: f64, free_days: u8) -> f64;

    /// Hours of `[t1, t2)` outside the weekly free days.
    fn working_hours_in_range(&self, t1: f64, t2: f64, free_days: u8) -> f64 {
        let total = ((t2 - t1) / 3_600.0).max(0.0);
        total - self.free_hours_in_range(t1, t2, free_days)
    }
}
