use std::ops::Index;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{CalendarUnit, UnitKind};
use crate::error::{AxisError, AxisResult};

/// One named zoom level.
///
/// `span` is the canonical width of an aligned range at this level and
/// `resolution` the unit its start is rounded to. A range belongs to the first
/// scale whose `max_span_seconds` exceeds its span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleEntry {
    pub name: String,
    pub span: CalendarUnit,
    pub resolution: CalendarUnit,
    pub max_span_seconds: f64,
    /// Aggregation label; empty for levels that never aggregate.
    pub label: String,
}

impl ScaleEntry {
    #[must_use]
    pub fn new(
        span: CalendarUnit,
        resolution: CalendarUnit,
        max_span_seconds: f64,
        label: &str,
    ) -> Self {
        Self {
            name: span.to_string(),
            span,
            resolution,
            max_span_seconds,
            label: label.to_owned(),
        }
    }

    /// Week-denominated level whose start is also week-aligned.
    #[must_use]
    pub fn is_week_aligned(&self) -> bool {
        self.span.kind == UnitKind::Week && self.resolution.kind == UnitKind::Week
    }
}

/// Ordered, validated list of zoom levels keyed by name.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleTable {
    entries: IndexMap<String, ScaleEntry>,
}

impl ScaleTable {
    pub fn new(entries: Vec<ScaleEntry>) -> AxisResult<Self> {
        if entries.is_empty() {
            return Err(AxisError::InvalidTable(
                "scale table must not be empty".to_owned(),
            ));
        }

        let mut map = IndexMap::with_capacity(entries.len());
        let mut previous = f64::NEG_INFINITY;
        for entry in entries {
            if entry.span.count <= 0 || entry.resolution.count <= 0 {
                return Err(AxisError::InvalidTable(format!(
                    "scale `{}` must have positive span and resolution",
                    entry.name
                )));
            }
            if entry.max_span_seconds.is_nan() || entry.max_span_seconds <= previous {
                return Err(AxisError::InvalidTable(format!(
                    "scale thresholds must be strictly ascending at `{}`",
                    entry.name
                )));
            }
            previous = entry.max_span_seconds;
            if map.insert(entry.name.clone(), entry).is_some() {
                return Err(AxisError::InvalidTable(
                    "scale names must be unique".to_owned(),
                ));
            }
        }

        if previous < CATCH_ALL_SECONDS {
            return Err(AxisError::InvalidTable(format!(
                "last scale threshold must be a catch-all (>= {CATCH_ALL_SECONDS} seconds)"
            )));
        }

        Ok(Self { entries: map })
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
    pub fn get(&self, index: usize) -> Option<&ScaleEntry> {
        self.entries.get_index(index).map(|(_, entry)| entry)
    }

    /// Entry at `index`, clamped into the table bounds.
    #[must_use]
    pub fn clamped(&self, index: isize) -> &ScaleEntry {
        let last = self.entries.len().saturating_sub(1);
        let index = usize::try_from(index.max(0)).unwrap_or(0).min(last);
        &self.entries[index]
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&ScaleEntry> {
        self.entries.get(name)
    }

    /// Index of the first scale whose threshold exceeds `span_seconds`.
    ///
    /// Spans beyond every threshold map to the last entry.
    #[must_use]
    pub fn natural_index(&self, span_seconds: f64) -> usize {
        self.entries
            .values()
            .position(|entry| span_seconds < entry.max_span_seconds)
            .unwrap_or(self.entries.len() - 1)
    }

    #[must_use]
    pub fn natural(&self, span_seconds: f64) -> &ScaleEntry {
        &self.entries[self.natural_index(span_seconds)]
    }

    /// First labelled scale whose threshold exceeds `span_seconds`.
    #[must_use]
    pub fn natural_labelled(&self, span_seconds: f64) -> Option<&ScaleEntry> {
        self.entries
            .values()
            .find(|entry| !entry.label.is_empty() && span_seconds < entry.max_span_seconds)
    }
}

impl Index<usize> for ScaleTable {
    type Output = ScaleEntry;

    fn index(&self, index: usize) -> &ScaleEntry {
        &self.entries[index]
    }
}

const CATCH_ALL_SECONDS: f64 = 1.0e11;
const DAY: f64 = 86_400.0;

impl Default for ScaleTable {
    fn default() -> Self {
        let entries = vec![
            ScaleEntry::new(CalendarUnit::minutes(5), CalendarUnit::minutes(1), 8.0 * 60.0, ""),
            ScaleEntry::new(CalendarUnit::minutes(20), CalendarUnit::minutes(1), 35.0 * 60.0, ""),
            ScaleEntry::new(CalendarUnit::hours(1), CalendarUnit::minutes(5), 1.8 * 3_600.0, ""),
            ScaleEntry::new(CalendarUnit::hours(3), CalendarUnit::minutes(5), 3.6 * 3_600.0, ""),
            ScaleEntry::new(CalendarUnit::hours(6), CalendarUnit::minutes(5), 8.5 * 3_600.0, ""),
            ScaleEntry::new(CalendarUnit::hours(12), CalendarUnit::hours(1), 15.0 * 3_600.0, ""),
            ScaleEntry::new(CalendarUnit::days(1), CalendarUnit::hours(1), 2.0 * DAY, "Day"),
            ScaleEntry::new(CalendarUnit::weeks(1), CalendarUnit::days(1), 1.7 * 7.0 * DAY, "Week"),
            ScaleEntry::new(CalendarUnit::months(1), CalendarUnit::months(1), 5.0 * 7.0 * DAY, "Month"),
            ScaleEntry::new(CalendarUnit::weeks(7), CalendarUnit::weeks(1), 9.0 * 7.0 * DAY, "7x7"),
            ScaleEntry::new(CalendarUnit::months(3), CalendarUnit::months(1), 200.0 * DAY, "Quarter"),
            ScaleEntry::new(CalendarUnit::years(1), CalendarUnit::months(1), 550.0 * DAY, "Year"),
            ScaleEntry::new(CalendarUnit::years(2), CalendarUnit::months(1), 1_280.0 * DAY, ""),
            ScaleEntry::new(CalendarUnit::years(5), CalendarUnit::years(1), 2_737.0 * DAY, ""),
            ScaleEntry::new(CalendarUnit::years(10), CalendarUnit::years(1), 5_475.0 * DAY, ""),
            ScaleEntry::new(CalendarUnit::years(20), CalendarUnit::years(1), 999_999_999_999.0, ""),
        ];
        match Self::new(entries) {
            Ok(table) => table,
            Err(err) => unreachable!("built-in scale table is valid: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ScaleEntry, ScaleTable};
    use crate::core::CalendarUnit;

    #[test]
    fn default_table_picks_natural_scales() {
        let table = ScaleTable::default();
        assert_eq!(table.natural(86_400.0).name, "1D");
        assert_eq!(table.natural(7.0 * 86_400.0).name, "1W");
        assert_eq!(table.natural(6.0 * 3_600.0).name, "6h");
        assert_eq!(table.natural(1.0e15).name, "20Y");
    }

    #[test]
    fn natural_labelled_skips_unlabelled_levels() {
        let table = ScaleTable::default();
        assert_eq!(table.natural_labelled(3.0 * 86_400.0).unwrap().name, "1W");
        assert_eq!(table.natural_labelled(600.0).unwrap().name, "1D");
        assert!(table.natural_labelled(1.0e10).is_none());
    }

    #[test]
    fn clamped_stays_within_bounds() {
        let table = ScaleTable::default();
        assert_eq!(table.clamped(-4).name, "5m");
        assert_eq!(table.clamped(100).name, "20Y");
    }

    #[test]
    fn rejects_non_monotonic_thresholds() {
        let err = ScaleTable::new(vec![
            ScaleEntry::new(CalendarUnit::days(1), CalendarUnit::hours(1), 100.0, ""),
            ScaleEntry::new(CalendarUnit::weeks(1), CalendarUnit::days(1), 50.0, ""),
        ]);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_table_without_catch_all() {
        let err = ScaleTable::new(vec![ScaleEntry::new(
            CalendarUnit::days(1),
            CalendarUnit::hours(1),
            172_800.0,
            "Day",
        )]);
        assert!(err.is_err());
    }

    #[test]
    fn week_alignment_requires_week_span_and_resolution() {
        let table = ScaleTable::default();
        assert!(!table.by_name("1W").unwrap().is_week_aligned());
        assert!(table.by_name("7W").unwrap().is_week_aligned());
    }
}
