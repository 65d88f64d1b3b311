use serde::{Deserialize, Serialize};

use crate::core::{CalendarUnit, TickGranularity};
use crate::error::{AxisError, AxisResult};

/// Tick spacing candidate.
///
/// `threshold_seconds` approximates the major step and is compared against the
/// minimum seconds-per-tick the available pixels allow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickIntervalEntry {
    pub major: CalendarUnit,
    pub minor: CalendarUnit,
    pub granularity: TickGranularity,
    pub threshold_seconds: f64,
}

impl TickIntervalEntry {
    #[must_use]
    pub const fn new(
        major: CalendarUnit,
        minor: CalendarUnit,
        granularity: TickGranularity,
        threshold_seconds: f64,
    ) -> Self {
        Self {
            major,
            minor,
            granularity,
            threshold_seconds,
        }
    }
}

/// Selected interval plus the index it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalChoice {
    pub index: usize,
    pub entry: TickIntervalEntry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTable {
    entries: Vec<TickIntervalEntry>,
}

impl IntervalTable {
    pub fn new(entries: Vec<TickIntervalEntry>) -> AxisResult<Self> {
        if entries.is_empty() {
            return Err(AxisError::InvalidTable(
                "interval table must not be empty".to_owned(),
            ));
        }

        let mut previous = 0.0;
        for entry in &entries {
            if entry.major.count <= 0 || entry.minor.count <= 0 {
                return Err(AxisError::InvalidTable(format!(
                    "interval `{}` must have positive major and minor steps",
                    entry.major
                )));
            }
            if !entry.threshold_seconds.is_finite() || entry.threshold_seconds <= previous {
                return Err(AxisError::InvalidTable(format!(
                    "interval thresholds must be finite and strictly ascending at `{}`",
                    entry.major
                )));
            }
            previous = entry.threshold_seconds;
        }

        Ok(Self { entries })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TickIntervalEntry> {
        self.entries.get(index)
    }

    /// First entry whose threshold exceeds `min_interval_seconds`, or the
    /// coarsest entry when none does.
    #[must_use]
    pub fn select(&self, min_interval_seconds: f64) -> IntervalChoice {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.threshold_seconds > min_interval_seconds)
            .unwrap_or(self.entries.len() - 1);
        IntervalChoice {
            index,
            entry: self.entries[index],
        }
    }
}

impl Default for IntervalTable {
    fn default() -> Self {
        use CalendarUnit as U;
        use TickGranularity as G;

        // Month and year thresholds are estimates; they only gauge spacing.
        let entries = vec![
            TickIntervalEntry::new(U::minutes(1), U::seconds(10), G::Minutes, 60.0),
            TickIntervalEntry::new(U::minutes(2), U::seconds(10), G::Minutes, 120.0),
            TickIntervalEntry::new(U::minutes(5), U::minutes(1), G::Minutes, 300.0),
            TickIntervalEntry::new(U::minutes(10), U::minutes(1), G::Minutes, 600.0),
            TickIntervalEntry::new(U::minutes(30), U::minutes(5), G::Minutes, 1_800.0),
            TickIntervalEntry::new(U::hours(1), U::minutes(10), G::Minutes, 3_600.0),
            TickIntervalEntry::new(U::hours(2), U::minutes(15), G::Minutes, 7_200.0),
            TickIntervalEntry::new(U::hours(6), U::hours(1), G::Hours, 21_600.0),
            TickIntervalEntry::new(U::hours(12), U::hours(1), G::Hours, 43_200.0),
            TickIntervalEntry::new(U::days(1), U::hours(3), G::Days, 86_400.0),
            TickIntervalEntry::new(U::days(2), U::hours(6), G::Days, 172_800.0),
            TickIntervalEntry::new(U::days(4), U::days(1), G::DayMonth, 345_600.0),
            TickIntervalEntry::new(U::days(8), U::days(1), G::DayMonth, 691_200.0),
            TickIntervalEntry::new(U::months(1), U::days(5), G::Months, 2_592_000.0),
            TickIntervalEntry::new(U::months(3), U::months(1), G::Months, 7_776_000.0),
            TickIntervalEntry::new(U::years(1), U::months(1), G::Years, 31_536_000.0),
            TickIntervalEntry::new(U::years(1), U::months(3), G::Years, 63_072_000.0),
            TickIntervalEntry::new(U::years(5), U::years(1), G::Years, 157_680_000.0),
            TickIntervalEntry::new(U::years(10), U::years(1), G::Years, 315_360_000.0),
        ];
        match Self::new(entries) {
            Ok(table) => table,
            Err(err) => unreachable!("built-in interval table is valid: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{IntervalTable, TickIntervalEntry};
    use crate::core::{CalendarUnit, TickGranularity};

    #[test]
    fn select_picks_first_threshold_above_minimum() {
        let table = IntervalTable::default();
        let choice = table.select(3_000.0);
        assert_eq!(choice.entry.major, CalendarUnit::hours(1));
        assert_eq!(choice.entry.granularity, TickGranularity::Minutes);

        let choice = table.select(3_600.0);
        assert_eq!(choice.entry.major, CalendarUnit::hours(2));
    }

    #[test]
    fn select_falls_back_to_coarsest_entry() {
        let table = IntervalTable::default();
        let choice = table.select(1.0e12);
        assert_eq!(choice.index, table.len() - 1);
        assert_eq!(choice.entry.major, CalendarUnit::years(10));
    }

    #[test]
    fn rejects_unsorted_thresholds() {
        let entry = |seconds| {
            TickIntervalEntry::new(
                CalendarUnit::hours(1),
                CalendarUnit::minutes(10),
                TickGranularity::Minutes,
                seconds,
            )
        };
        assert!(IntervalTable::new(vec![entry(60.0), entry(60.0)]).is_err());
        assert!(IntervalTable::new(Vec::new()).is_err());
    }
}
