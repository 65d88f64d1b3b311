use serde::{Deserialize, Serialize};

use crate::core::TimeRange;

use super::{InvalidationLevel, RangeAnimation, TickCacheStats};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub current: TimeRange,
    pub target: TimeRange,
    pub frame_now: f64,
    pub animation: Option<RangeAnimation>,
    pub pending_invalidation: InvalidationLevel,
    pub tick_cache: TickCacheStats,
    pub context_header: String,
}
