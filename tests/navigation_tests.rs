use timeline_axis::api::{RangeEngine, RangeEngineConfig, ScaleNavigation};
use timeline_axis::core::{CalendarUnit, TimeRange};
use timeline_axis::ChronoCalendar;

const MONDAY: f64 = 1_710_115_200.0;
const MAR_2024: f64 = 1_709_251_200.0;
const APR_2024: f64 = 1_711_929_600.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;

fn engine_with(
    config: RangeEngineConfig,
    start: f64,
    end: f64,
) -> RangeEngine<ChronoCalendar<chrono::Utc>> {
    RangeEngine::new(
        ChronoCalendar::utc(),
        config,
        TimeRange::new(start, end).expect("valid range"),
    )
    .expect("engine init")
}

fn engine(start: f64, end: f64) -> RangeEngine<ChronoCalendar<chrono::Utc>> {
    engine_with(RangeEngineConfig::default(), start, end)
}

#[test]
fn today_range_is_local_day_without_offsets() {
    let engine = engine(MONDAY - 5.0 * DAY, MONDAY - 4.0 * DAY);
    assert_eq!(engine.today_range(MONDAY + 15.0 * HOUR), (MONDAY, MONDAY + DAY));
}

#[test]
fn today_offset_before_start_steps_back_one_day() {
    let config = RangeEngineConfig::default()
        .with_today_offsets(Some(CalendarUnit::hours(6)), None);
    let engine = engine_with(config, MONDAY, MONDAY + DAY);
    assert_eq!(
        engine.today_range(MONDAY + 3.0 * HOUR),
        (MONDAY - 18.0 * HOUR, MONDAY + 6.0 * HOUR)
    );
}

#[test]
fn today_offsets_shift_start_and_extend_end() {
    let config = RangeEngineConfig::default().with_today_offsets(
        Some(CalendarUnit::hours(6)),
        Some(CalendarUnit::hours(2)),
    );
    let engine = engine_with(config, MONDAY - 7.0 * DAY, MONDAY);
    assert_eq!(
        engine.today_range(MONDAY + 8.0 * HOUR),
        (MONDAY + 6.0 * HOUR, MONDAY + 32.0 * HOUR)
    );
}

#[test]
fn today_toggles_to_plain_day_when_already_shown() {
    let config = RangeEngineConfig::default()
        .with_today_offsets(Some(CalendarUnit::hours(6)), None);
    let mut engine = engine_with(config, MONDAY, MONDAY + DAY);
    let offset_day = engine.today_range(MONDAY + 8.0 * HOUR);
    engine.set_range(offset_day.0, offset_day.1).expect("set range");
    assert_eq!(engine.today_range(MONDAY + 8.0 * HOUR), (MONDAY, MONDAY + DAY));
}

#[test]
fn snap_today_animates_to_today() {
    let mut engine = engine(MONDAY - 5.0 * DAY, MONDAY - 4.0 * DAY);
    engine.snap_today(MONDAY + 15.0 * HOUR).expect("snap today");
    assert!(engine.is_animating());
    assert_eq!(engine.get_target_range(), (MONDAY, MONDAY + DAY));
}

#[test]
fn now_scale_follows_displayed_range() {
    assert_eq!(engine(MONDAY, MONDAY + DAY).now_scale(), CalendarUnit::days(1));
    assert_eq!(
        engine(MONDAY, MONDAY + 100.0 * DAY).now_scale(),
        CalendarUnit::months(3)
    );
    assert_eq!(
        engine(MONDAY, MONDAY + 200.0 * DAY).now_scale(),
        CalendarUnit::years(1)
    );
}

#[test]
fn scale_navigation_reports_neighbours_and_now_state() {
    let engine = engine(MONDAY, MONDAY + DAY);
    assert_eq!(
        engine.scale_navigation(MONDAY + 5.0 * HOUR),
        ScaleNavigation {
            now_scale: CalendarUnit::days(1),
            zoom_in: CalendarUnit::hours(12),
            zoom_out: CalendarUnit::weeks(1),
            on_now_scale: true,
        }
    );
    assert!(!engine.scale_navigation(MONDAY + 2.0 * DAY).on_now_scale);

    let smallest = self::engine(MONDAY, MONDAY + 60.0);
    assert_eq!(smallest.scale_navigation(MONDAY).zoom_in, CalendarUnit::minutes(5));
}

#[test]
fn snap_now_range_covers_now() {
    let engine = engine(MONDAY, MONDAY + DAY);
    assert_eq!(
        engine
            .snap_now_range(MONDAY + 2.0 * DAY, CalendarUnit::weeks(1))
            .expect("range"),
        (MONDAY, MONDAY + 7.0 * DAY)
    );
    assert_eq!(
        engine
            .snap_now_range(MONDAY, CalendarUnit::months(1))
            .expect("range"),
        (MAR_2024, APR_2024)
    );
}

#[test]
fn zoom_to_scale_uses_center_when_now_is_outside() {
    let mut engine = engine(MONDAY, MONDAY + DAY);
    engine
        .zoom_to_scale(MONDAY + 100.0 * DAY, CalendarUnit::months(1))
        .expect("zoom");
    assert_eq!(engine.get_target_range(), (MAR_2024, APR_2024));

    let mut engine = self::engine(MONDAY, MONDAY + DAY);
    engine
        .zoom_to_scale(MONDAY + 5.0 * HOUR, CalendarUnit::weeks(1))
        .expect("zoom");
    assert_eq!(engine.get_target_range(), (MONDAY, MONDAY + 7.0 * DAY));
}

#[test]
fn zoom_step_centres_on_now_inside_target() {
    let now = MONDAY + 5.0 * HOUR;
    let mut engine = engine(MONDAY, MONDAY + DAY);
    engine.zoom_step(now, 1).expect("zoom out");
    assert_eq!(
        engine.get_target_range(),
        (now - 3.5 * DAY, now + 3.5 * DAY)
    );

    let mut engine = self::engine(MONDAY, MONDAY + DAY);
    engine.zoom_step(MONDAY + 10.0 * DAY, 1).expect("zoom out");
    assert_eq!(
        engine.get_target_range(),
        (MONDAY - 3.0 * DAY, MONDAY + 4.0 * DAY)
    );
}

#[test]
fn center_on_keeps_target_span() {
    let mut engine = engine(MONDAY, MONDAY + DAY);
    engine.center_on(MONDAY + 3.0 * DAY).expect("center");
    assert_eq!(
        engine.get_target_range(),
        (MONDAY + 2.5 * DAY, MONDAY + 3.5 * DAY)
    );
}

#[test]
fn step_range_pages_by_calendar_unit_for_long_spans() {
    let mut engine = engine(MONDAY, MONDAY + DAY);
    engine.step_range(MONDAY, true).expect("forward");
    assert_eq!(engine.get_target_range(), (MONDAY + DAY, MONDAY + 2.0 * DAY));
    assert!(!engine.animation().expect("animation").snap_after);

    let mut engine = self::engine(MAR_2024, APR_2024);
    engine.step_range(MONDAY, false).expect("backward");
    // 2024-02-01 .. 2024-03-01
    assert_eq!(engine.get_target_range(), (1_706_745_600.0, MAR_2024));
}

#[test]
fn step_range_pages_by_own_width_for_short_spans() {
    let mut engine = engine(MONDAY, MONDAY + HOUR);
    engine.step_range(MONDAY, false).expect("backward");
    assert_eq!(engine.get_target_range(), (MONDAY - HOUR, MONDAY));
    engine.step_range(MONDAY, true).expect("forward");
    assert_eq!(engine.get_target_range(), (MONDAY, MONDAY + HOUR));
}

#[test]
fn wheel_notch_pans_fifteen_percent_of_snapped_span() {
    let mut engine = engine(MONDAY, MONDAY + DAY);
    engine.scroll_translate(MONDAY, 48.0).expect("scroll");
    let step = 0.15 * DAY;
    assert_eq!(
        engine.get_target_range(),
        (MONDAY + step, MONDAY + DAY + step)
    );
}

#[test]
fn wheel_pan_during_animation_jumps_halfway_first() {
    let mut engine = engine(MONDAY, MONDAY + DAY);
    engine
        .animate_range_with(
            MONDAY + DAY,
            MONDAY + 2.0 * DAY,
            timeline_axis::api::AnimateOptions::without_snap(),
        )
        .expect("animate");
    engine.scroll_translate(MONDAY, -48.0).expect("scroll");

    assert_eq!(engine.get_range(), (MONDAY + 0.5 * DAY, MONDAY + 1.5 * DAY));
    let step = 0.15 * DAY;
    assert_eq!(
        engine.get_target_range(),
        (MONDAY + DAY - step, MONDAY + 2.0 * DAY - step)
    );
}

#[test]
fn wheel_zoom_keeps_anchor_fraction() {
    let mut engine = engine(MONDAY, MONDAY + DAY);
    engine.scroll_scale(MONDAY, 0.5, -1.0).expect("zoom in");
    assert_eq!(
        engine.get_target_range(),
        (MONDAY + 6.0 * HOUR, MONDAY + 18.0 * HOUR)
    );

    let mut engine = self::engine(MONDAY, MONDAY + DAY);
    engine.scroll_scale(MONDAY, 0.0, 120.0).expect("zoom out");
    assert_eq!(engine.get_target_range(), (MONDAY, MONDAY + 7.0 * DAY));
}

#[test]
fn input_helpers_time_animation_from_event_not_last_frame() {
    let mut engine = engine(MONDAY, MONDAY + DAY);
    let last_frame = MONDAY + 5.0 * HOUR;
    engine.animation_update(last_frame);
    let before = engine.get_range();

    let pressed_at = last_frame + 10.0;
    engine.center_on(pressed_at).expect("center");
    let animation = engine.animation().expect("animation");
    assert_eq!(animation.started_at, pressed_at);
    let target = engine.get_target_range();

    assert!(engine.animation_update(pressed_at + 0.016));
    assert!(engine.is_animating());
    let range = engine.get_range();
    assert_ne!(range, before);
    assert_ne!(range, target);
}

#[test]
fn wheel_helpers_record_event_time() {
    let mut engine = engine(MONDAY, MONDAY + DAY);
    let now = MONDAY + 2.0 * HOUR;
    engine.scroll_translate(now, 48.0).expect("scroll");
    assert_eq!(engine.animation().expect("animation").started_at, now);

    engine.scroll_scale(now + 1.0, 0.5, -1.0).expect("zoom");
    assert_eq!(engine.animation().expect("animation").started_at, now + 1.0);

    engine.step_range(now + 2.0, true).expect("step");
    assert_eq!(engine.animation().expect("animation").started_at, now + 2.0);
}
