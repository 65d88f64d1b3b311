use crate::calendar::Calendar;
use crate::core::{TickGranularity, TickSet};

use super::{RangeEngine, TimeRepresentation};

impl<C: Calendar> RangeEngine<C> {
    /// Label text for a major tick at `time`.
    ///
    /// Midnight ticks at minute/hour granularity name the day instead of the
    /// clock time, and the first day of a month adds the month name.
    #[must_use]
    pub fn format_tick_label(&self, time: f64, granularity: TickGranularity) -> String {
        let calendar = &self.calendar;
        let (year, month, day) = calendar.year_month_day(time);
        let (hour, minute) = calendar.hour_minute(time);
        let day_label = || {
            let mut text = format!("{} {}", calendar.weekday_short_name(time), day);
            if day == 1 {
                text.push(' ');
                text.push_str(calendar.month_short_name(time));
            }
            text
        };

        match granularity {
            TickGranularity::Minutes => {
                if hour == 0 && minute == 0 {
                    let midnight = match self.config.time_repr {
                        TimeRepresentation::H24 => "0h",
                        TimeRepresentation::AmPm => "12h",
                    };
                    format!("{}  {midnight}", day_label())
                } else {
                    clock_label(hour, minute, self.config.time_repr)
                }
            }
            TickGranularity::Hours => {
                if hour == 0 {
                    format!("{}  0h", day_label())
                } else {
                    format!("{hour}h")
                }
            }
            TickGranularity::Days => day_label(),
            TickGranularity::DayMonth => {
                let mut text = format!("{day} {}", calendar.month_short_name(time));
                if day == 1 && month == 1 {
                    text.push_str(&format!(" {year}"));
                }
                text
            }
            TickGranularity::Months => {
                let name = calendar.month_short_name(time);
                if month == 1 {
                    format!("{name} {year}")
                } else {
                    name.to_owned()
                }
            }
            TickGranularity::Years => year.to_string(),
        }
    }

    /// Labels for every major tick of `tick_set`, in order.
    #[must_use]
    pub fn tick_labels(&self, tick_set: &TickSet) -> Vec<String> {
        tick_set
            .ticks
            .iter()
            .map(|tick| self.format_tick_label(tick.time, tick_set.granularity))
            .collect()
    }
}

fn clock_label(hour: u32, minute: u32, repr: TimeRepresentation) -> String {
    match repr {
        TimeRepresentation::H24 => format!("{hour:02}:{minute:02}"),
        TimeRepresentation::AmPm => {
            let (display_hour, suffix) = match hour {
                0 => (12, "am"),
                1..=11 => (hour, "am"),
                12 => (12, "pm"),
                _ => (hour - 12, "pm"),
            };
            format!("{display_hour}:{minute:02} {suffix}")
        }
    }
}
