use crate::calendar::Calendar;
use crate::error::{AxisError, AxisResult};

use super::{EngineSnapshot, RangeEngine};

impl<C: Calendar> RangeEngine<C> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            current: self.current,
            target: self.target(),
            frame_now: self.frame_now,
            animation: self.animation,
            pending_invalidation: self.invalidation,
            tick_cache: self.tick_cache_stats,
            context_header: self.get_context_header(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> AxisResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| AxisError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
