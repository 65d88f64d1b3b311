mod context_header;
mod engine;
mod engine_config;
mod engine_snapshot;
mod invalidation;
mod navigation;
mod range_controller;
mod snap_resolver;
mod snapshot_controller;
mod stat_period;
mod tick_generator;
mod tick_labels;

pub use engine::{RangeAnimation, RangeEngine};
pub use engine_config::{AnimationTuning, RangeEngineConfig, TickTuning, TimeRepresentation};
pub use engine_snapshot::EngineSnapshot;
pub use invalidation::InvalidationLevel;
pub use navigation::ScaleNavigation;
pub use range_controller::AnimateOptions;
pub use snap_resolver::SnapResolution;
pub use tick_generator::TickCacheStats;
