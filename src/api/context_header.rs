use crate::calendar::Calendar;

use super::RangeEngine;

const DAY: f64 = 86_400.0;
/// A week range may be off by one DST hour plus slack.
const WEEK_TOLERANCE_SECONDS: f64 = 4_000.0;

/// Calendar fields of one range endpoint.
struct Endpoint {
    year: i32,
    month: u32,
    day: u32,
    weekday: &'static str,
    month_name: &'static str,
}

impl Endpoint {
    fn new<C: Calendar>(calendar: &C, time: f64) -> Self {
        let (year, month, day) = calendar.year_month_day(time);
        Self {
            year,
            month,
            day,
            weekday: calendar.weekday_short_name(time),
            month_name: calendar.month_short_name(time),
        }
    }

    fn month_day(&self) -> (u32, u32) {
        (self.month, self.day)
    }
}

impl<C: Calendar> RangeEngine<C> {
    /// Caption describing the displayed range, e.g. `Mon 11  Mar 2024`,
    /// `Week 11  11-17  Mar 2024`, `Q1  2024` or `2020 - 2024`.
    #[must_use]
    pub fn get_context_header(&self) -> String {
        let (t1, t2) = self.current.as_tuple();
        let span = t2 - t1;
        let first = Endpoint::new(&self.calendar, t1);
        // The end is exclusive; describe the last second inside the range.
        let last = Endpoint::new(&self.calendar, t2 - 1.0);

        let is_calendar_week = (span - 7.0 * DAY).abs() <= WEEK_TOLERANCE_SECONDS
            && self.calendar.is_first_day_of_week(t1);
        let week = || self.calendar.week_number(t1);

        if (first.year, first.month, first.day) == (last.year, last.month, last.day) {
            format!(
                "{} {}  {} {}",
                first.weekday, first.day, first.month_name, first.year
            )
        } else if (first.year, first.month) == (last.year, last.month) {
            if span <= 3.0 * DAY {
                format!(
                    "{} {} - {} {}  {} {}",
                    first.weekday, first.day, last.weekday, last.day, first.month_name, first.year
                )
            } else if is_calendar_week {
                format!(
                    "Week {}  {}-{}  {} {}",
                    week(),
                    first.day,
                    last.day,
                    first.month_name,
                    first.year
                )
            } else if span <= 14.0 * DAY {
                format!(
                    "{} - {}  {} {}",
                    first.day, last.day, first.month_name, first.year
                )
            } else {
                format!("{}  {}", first.month_name, first.year)
            }
        } else if first.year == last.year {
            if is_calendar_week {
                format!(
                    "Week {}  {} / {} {}",
                    week(),
                    first.month_name,
                    last.month_name,
                    first.year
                )
            } else if span < 30.0 * DAY {
                format!(
                    "{} / {}  {}",
                    first.month_name, last.month_name, first.year
                )
            } else {
                multi_month_header(&first, &last)
            }
        } else if is_calendar_week {
            format!(
                "Week {}  {} {} / {} {}",
                week(),
                first.month_name,
                first.year,
                last.month_name,
                last.year
            )
        } else if span < 30.0 * DAY {
            format!(
                "{} {} / {} {}",
                first.month_name, first.year, last.month_name, last.year
            )
        } else if span < 367.0 * DAY {
            format!(
                "{} {} - {} {}",
                first.month_name, first.year, last.month_name, last.year
            )
        } else {
            format!("{} - {}", first.year, last.year)
        }
    }
}

fn multi_month_header(first: &Endpoint, last: &Endpoint) -> String {
    let quarter = match (first.month_day(), last.month_day()) {
        ((1, 1), (12, 31)) => return first.year.to_string(),
        ((1, 1), (3, 31)) => Some(1),
        ((4, 1), (6, 30)) => Some(2),
        ((7, 1), (9, 30)) => Some(3),
        ((10, 1), (12, 31)) => Some(4),
        _ => None,
    };
    match quarter {
        Some(quarter) => format!("Q{quarter}  {}", first.year),
        None => format!(
            "{} - {}  {}",
            first.month_name, last.month_name, first.year
        ),
    }
}
