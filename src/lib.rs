//! timeline-axis: temporal range and tick engine for zoomable time axes.
//!
//! The engine owns the visible interval of a timeline view, snaps it to
//! calendar-aligned zoom levels, animates between intervals and produces
//! DST-aware major/minor ticks, aggregation periods and header captions.
//! It draws nothing; callers get timestamps, pixel offsets and strings.

pub mod api;
pub mod calendar;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{RangeEngine, RangeEngineConfig};
pub use calendar::{Calendar, ChronoCalendar, WeekStart};
pub use error::{AxisError, AxisResult};
