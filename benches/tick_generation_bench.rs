use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use timeline_axis::api::{AnimateOptions, RangeEngine, RangeEngineConfig};
use timeline_axis::core::TimeRange;
use timeline_axis::ChronoCalendar;

const MONDAY: f64 = 1_710_115_200.0;
const DAY: f64 = 86_400.0;

fn engine(span: f64) -> RangeEngine<ChronoCalendar<chrono::Utc>> {
    RangeEngine::new(
        ChronoCalendar::utc(),
        RangeEngineConfig::default(),
        TimeRange::new(MONDAY, MONDAY + span).expect("valid range"),
    )
    .expect("engine init")
}

fn bench_tick_generation_uncached(c: &mut Criterion) {
    let mut engine = engine(DAY);
    let mut shift = 0.0;

    c.bench_function("tick_generation_day_uncached", |b| {
        b.iter(|| {
            shift += 1.0;
            engine
                .set_range(MONDAY + shift, MONDAY + DAY + shift)
                .expect("set range");
            black_box(engine.get_ticks(1_920.0).expect("ticks"));
        })
    });
}

fn bench_tick_generation_cached(c: &mut Criterion) {
    let mut engine = engine(365.0 * DAY);
    engine.get_ticks(1_920.0).expect("warm cache");

    c.bench_function("tick_generation_year_cached", |b| {
        b.iter(|| black_box(engine.get_ticks(1_920.0).expect("ticks")))
    });
}

fn bench_animation_frames(c: &mut Criterion) {
    c.bench_function("animation_60_frames", |b| {
        b.iter(|| {
            let mut engine = engine(DAY);
            engine
                .animate_range_with(
                    MONDAY,
                    MONDAY + 365.0 * DAY,
                    AnimateOptions {
                        duration_seconds: Some(1.0),
                        snap_after: true,
                    },
                )
                .expect("animate");
            for frame in 0..=60 {
                engine.animation_update(f64::from(frame) / 60.0);
                black_box(engine.get_range());
            }
        })
    });
}

criterion_group!(
    benches,
    bench_tick_generation_uncached,
    bench_tick_generation_cached,
    bench_animation_frames
);
criterion_main!(benches);
