pub mod interval_table;
pub mod scale_table;
pub mod types;
pub mod unit;

pub use interval_table::{IntervalChoice, IntervalTable, TickIntervalEntry};
pub use scale_table::{ScaleEntry, ScaleTable};
pub use types::{Tick, TickGranularity, TickSet, TimeRange};
pub use unit::{CalendarUnit, UnitKind};
