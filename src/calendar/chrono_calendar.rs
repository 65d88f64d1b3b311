use chrono::{
    DateTime, Datelike, LocalResult, Months, NaiveDate, NaiveDateTime, Offset, TimeDelta,
    TimeZone, Timelike, Utc,
};
use tracing::trace;

use crate::core::{CalendarUnit, UnitKind};

use super::{Calendar, WeekStart};

const WEEKDAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MAX_FREE_HOURS_DAYS: usize = 200_000;

/// [`Calendar`] backed by a `chrono` time zone.
///
/// Ambiguous local times resolve to the earliest instant. Local times inside a
/// spring-forward gap use the offset in effect before the gap, which moves
/// them forward by the gap length.
#[derive(Debug, Clone)]
pub struct ChronoCalendar<Tz: TimeZone> {
    tz: Tz,
    week_start: WeekStart,
}

impl ChronoCalendar<Utc> {
    #[must_use]
    pub fn utc() -> Self {
        Self::new(Utc, WeekStart::Monday)
    }
}

impl<Tz: TimeZone> ChronoCalendar<Tz> {
    #[must_use]
    pub fn new(tz: Tz, week_start: WeekStart) -> Self {
        Self { tz, week_start }
    }

    #[must_use]
    pub fn time_zone(&self) -> &Tz {
        &self.tz
    }

    #[must_use]
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    #[must_use]
    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    fn to_local(&self, time: f64) -> Option<DateTime<Tz>> {
        if !time.is_finite() {
            return None;
        }
        let seconds = time.floor();
        let nanos = (((time - seconds) * 1.0e9).round() as u32).min(999_999_999);
        let utc = DateTime::<Utc>::from_timestamp(seconds as i64, nanos)?;
        Some(utc.with_timezone(&self.tz))
    }

    fn local_naive(&self, time: f64) -> Option<NaiveDateTime> {
        self.to_local(time).map(|local| local.naive_local())
    }

    fn resolve(&self, naive: NaiveDateTime) -> Option<f64> {
        let resolved = match self.tz.from_local_datetime(&naive) {
            LocalResult::Single(local) => local,
            LocalResult::Ambiguous(earliest, _) => earliest,
            LocalResult::None => {
                let before_gap = naive.checked_sub_signed(TimeDelta::hours(3))?;
                let offset = self.tz.offset_from_local_datetime(&before_gap).earliest()?;
                let shift = TimeDelta::seconds(i64::from(offset.fix().local_minus_utc()));
                let utc = naive.checked_sub_signed(shift)?;
                trace!(naive = %naive, "local time falls in a DST gap");
                self.tz.from_utc_datetime(&utc)
            }
        };
        Some(unix_seconds(&resolved))
    }

    fn days_since_week_start(&self, date: NaiveDate) -> u32 {
        match self.week_start {
            WeekStart::Monday => date.weekday().num_days_from_monday(),
            WeekStart::Sunday => date.weekday().num_days_from_sunday(),
        }
    }

    fn floor_naive(&self, naive: NaiveDateTime, unit: CalendarUnit) -> Option<NaiveDateTime> {
        let step = unit.magnitude().max(1);
        let date = naive.date();
        match unit.kind {
            UnitKind::Second => None,
            UnitKind::Minute => date.and_hms_opt(naive.hour(), (naive.minute() / step) * step, 0),
            UnitKind::Hour => date.and_hms_opt((naive.hour() / step) * step, 0, 0),
            UnitKind::Day => {
                let day = ((date.day() - 1) / step) * step + 1;
                date.with_day(day)?.and_hms_opt(0, 0, 0)
            }
            UnitKind::Week => {
                let back = i64::from(self.days_since_week_start(date));
                date.checked_sub_signed(TimeDelta::days(back))?
                    .and_hms_opt(0, 0, 0)
            }
            UnitKind::Month => {
                let month0 = (date.month0() / step) * step;
                NaiveDate::from_ymd_opt(date.year(), month0 + 1, 1)?.and_hms_opt(0, 0, 0)
            }
            UnitKind::Year => {
                let year = date.year().div_euclid(step as i32) * step as i32;
                NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)
            }
        }
    }

    fn add_naive(naive: NaiveDateTime, unit: CalendarUnit) -> Option<NaiveDateTime> {
        let count = i64::from(unit.count);
        match unit.kind {
            UnitKind::Second => naive.checked_add_signed(TimeDelta::try_seconds(count)?),
            UnitKind::Minute => naive.checked_add_signed(TimeDelta::try_minutes(count)?),
            UnitKind::Hour => naive.checked_add_signed(TimeDelta::try_hours(count)?),
            UnitKind::Day => naive.checked_add_signed(TimeDelta::try_days(count)?),
            UnitKind::Week => naive.checked_add_signed(TimeDelta::try_weeks(count)?),
            UnitKind::Month => add_months(naive, unit.count),
            UnitKind::Year => add_months(naive, unit.count.checked_mul(12)?),
        }
    }
}

impl<Tz: TimeZone> Calendar for ChronoCalendar<Tz> {
    fn floor(&self, time: f64, unit: CalendarUnit) -> f64 {
        if unit.kind == UnitKind::Second {
            let step = f64::from(unit.magnitude().max(1));
            return (time / step).floor() * step;
        }
        self.local_naive(time)
            .and_then(|naive| self.floor_naive(naive, unit))
            .and_then(|floored| self.resolve(floored))
            .unwrap_or(time)
    }

    fn add(&self, time: f64, unit: CalendarUnit) -> f64 {
        if unit.kind == UnitKind::Second {
            return time + f64::from(unit.count);
        }
        self.local_naive(time)
            .and_then(|naive| Self::add_naive(naive, unit))
            .and_then(|stepped| self.resolve(stepped))
            .unwrap_or(time)
    }

    fn weekday_short_name(&self, time: f64) -> &'static str {
        self.local_naive(time)
            .map(|naive| WEEKDAY_NAMES[naive.weekday().num_days_from_monday() as usize])
            .unwrap_or("")
    }

    fn month_short_name(&self, time: f64) -> &'static str {
        self.local_naive(time)
            .map(|naive| MONTH_NAMES[naive.month0() as usize])
            .unwrap_or("")
    }

    fn year_month_day(&self, time: f64) -> (i32, u32, u32) {
        self.local_naive(time)
            .map(|naive| (naive.year(), naive.month(), naive.day()))
            .unwrap_or((1970, 1, 1))
    }

    fn hour_minute(&self, time: f64) -> (u32, u32) {
        self.local_naive(time)
            .map(|naive| (naive.hour(), naive.minute()))
            .unwrap_or((0, 0))
    }

    fn week_number(&self, time: f64) -> u32 {
        let Some(date) = self.local_naive(time).map(|naive| naive.date()) else {
            return 0;
        };
        let reference = match self.week_start {
            WeekStart::Monday => Some(date),
            // A Sunday-started week is numbered after the Monday that follows.
            WeekStart::Sunday => date.succ_opt(),
        };
        reference.map_or(0, |day| day.iso_week().week())
    }

    fn is_first_day_of_week(&self, time: f64) -> bool {
        self.local_naive(time)
            .is_some_and(|naive| self.days_since_week_start(naive.date()) == 0)
    }

    fn free_hours_in_range(&self, t1: f64, t2: f64, free_days: u8) -> f64 {
        let free_days = u32::from(free_days.min(7));
        if free_days == 0 || t2 <= t1 {
            return 0.0;
        }

        let mut hours = 0.0;
        let mut day_start = self.floor(t1, CalendarUnit::days(1));
        for _ in 0..MAX_FREE_HOURS_DAYS {
            if day_start >= t2 {
                break;
            }
            let day_end = self.add(day_start, CalendarUnit::days(1));
            if day_end <= day_start {
                break;
            }
            let is_free = self
                .local_naive(day_start)
                .is_some_and(|naive| self.days_since_week_start(naive.date()) >= 7 - free_days);
            if is_free {
                let overlap = day_end.min(t2) - day_start.max(t1);
                hours += overlap.max(0.0) / 3_600.0;
            }
            day_start = day_end;
        }
        hours
    }
}

fn add_months(naive: NaiveDateTime, count: i32) -> Option<NaiveDateTime> {
    let months = Months::new(count.unsigned_abs());
    if count >= 0 {
        naive.checked_add_months(months)
    } else {
        naive.checked_sub_months(months)
    }
}

fn unix_seconds<Tz: TimeZone>(time: &DateTime<Tz>) -> f64 {
    time.timestamp() as f64 + f64::from(time.timestamp_subsec_nanos()) / 1.0e9
}
