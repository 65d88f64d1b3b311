use timeline_axis::api::{RangeEngine, RangeEngineConfig};
use timeline_axis::core::TimeRange;
use timeline_axis::{ChronoCalendar, WeekStart};

const DAY: f64 = 86_400.0;
// 2024-03-11, a Monday.
const MONDAY: f64 = 1_710_115_200.0;
const JAN_2024: f64 = 1_704_067_200.0;
const MAR_2024: f64 = 1_709_251_200.0;
const APR_2024: f64 = 1_711_929_600.0;
const JAN_2025: f64 = 1_735_689_600.0;

fn header(start: f64, end: f64) -> String {
    header_with(ChronoCalendar::utc(), start, end)
}

fn header_with(calendar: ChronoCalendar<chrono::Utc>, start: f64, end: f64) -> String {
    RangeEngine::new(
        calendar,
        RangeEngineConfig::default(),
        TimeRange::new(start, end).expect("valid range"),
    )
    .expect("engine init")
    .get_context_header()
}

#[test]
fn single_day_uses_weekday_day_month_year() {
    assert_eq!(header(0.0, DAY), "Thu 1  Jan 1970");
    assert_eq!(header(MONDAY + 3_600.0, MONDAY + 7_200.0), "Mon 11  Mar 2024");
}

#[test]
fn calendar_week_uses_week_number() {
    assert_eq!(header(MONDAY, MONDAY + 7.0 * DAY), "Week 11  11-17  Mar 2024");
}

#[test]
fn week_must_start_on_configured_week_start() {
    assert_eq!(
        header(MONDAY + DAY, MONDAY + 8.0 * DAY),
        "12 - 18  Mar 2024"
    );
    let sunday_calendar = ChronoCalendar::utc().with_week_start(WeekStart::Sunday);
    assert_eq!(
        header_with(sunday_calendar, MONDAY - DAY, MONDAY + 6.0 * DAY),
        "Week 11  10-16  Mar 2024"
    );
}

#[test]
fn short_ranges_name_both_weekdays() {
    assert_eq!(
        header(MONDAY, MONDAY + 2.0 * DAY),
        "Mon 11 - Tue 12  Mar 2024"
    );
}

#[test]
fn whole_month_and_partial_months() {
    assert_eq!(header(MAR_2024, APR_2024), "Mar  2024");
    assert_eq!(header(MAR_2024 + 20.0 * DAY, APR_2024 + 5.0 * DAY), "Mar / Apr  2024");
    assert_eq!(header(MAR_2024, APR_2024 + 40.0 * DAY), "Mar - May  2024");
}

#[test]
fn quarters_and_years_are_detected() {
    assert_eq!(header(JAN_2024, APR_2024), "Q1  2024");
    assert_eq!(header(JAN_2024, JAN_2025), "2024");
}

#[test]
fn week_across_month_boundary() {
    // 2024-04-29 (Mon) .. 2024-05-06
    let start = APR_2024 + 28.0 * DAY;
    assert_eq!(header(start, start + 7.0 * DAY), "Week 18  Apr / May 2024");
}

#[test]
fn ranges_across_years() {
    assert_eq!(
        header(JAN_2024 - 2.0 * DAY, JAN_2024 + DAY),
        "Dec 2023 / Jan 2024"
    );
    assert_eq!(
        header(JAN_2024 - 60.0 * DAY, JAN_2024 + 60.0 * DAY),
        "Nov 2023 - Feb 2024"
    );
    // 2020-01-01 .. 2025-01-01
    assert_eq!(header(1_577_836_800.0, JAN_2025), "2020 - 2024");
}
