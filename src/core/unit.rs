use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AxisError, AxisResult};

/// Calendar field a [`CalendarUnit`] counts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnitKind {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl UnitKind {
    const fn suffix(self) -> char {
        match self {
            Self::Second => 's',
            Self::Minute => 'm',
            Self::Hour => 'h',
            Self::Day => 'D',
            Self::Week => 'W',
            Self::Month => 'M',
            Self::Year => 'Y',
        }
    }

    const fn from_suffix(suffix: char) -> Option<Self> {
        match suffix {
            's' => Some(Self::Second),
            'm' => Some(Self::Minute),
            'h' => Some(Self::Hour),
            'D' => Some(Self::Day),
            'W' => Some(Self::Week),
            'M' => Some(Self::Month),
            'Y' => Some(Self::Year),
            _ => None,
        }
    }

    /// Nominal length in seconds; months and years use 30 and 365 days.
    #[must_use]
    pub const fn nominal_seconds(self) -> f64 {
        match self {
            Self::Second => 1.0,
            Self::Minute => 60.0,
            Self::Hour => 3_600.0,
            Self::Day => 86_400.0,
            Self::Week => 604_800.0,
            Self::Month => 2_592_000.0,
            Self::Year => 31_536_000.0,
        }
    }

    /// Sub-day units whose steps can hit a DST discontinuity mid-walk.
    #[must_use]
    pub const fn is_intraday(self) -> bool {
        matches!(self, Self::Second | Self::Minute | Self::Hour)
    }
}

/// Signed calendar step such as `1D`, `5m` or `-3M`.
///
/// Parses from and displays as the compact unit-string notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarUnit {
    pub count: i32,
    pub kind: UnitKind,
}

impl CalendarUnit {
    #[must_use]
    pub const fn new(count: i32, kind: UnitKind) -> Self {
        Self { count, kind }
    }

    #[must_use]
    pub const fn seconds(count: i32) -> Self {
        Self::new(count, UnitKind::Second)
    }

    #[must_use]
    pub const fn minutes(count: i32) -> Self {
        Self::new(count, UnitKind::Minute)
    }

    #[must_use]
    pub const fn hours(count: i32) -> Self {
        Self::new(count, UnitKind::Hour)
    }

    #[must_use]
    pub const fn days(count: i32) -> Self {
        Self::new(count, UnitKind::Day)
    }

    #[must_use]
    pub const fn weeks(count: i32) -> Self {
        Self::new(count, UnitKind::Week)
    }

    #[must_use]
    pub const fn months(count: i32) -> Self {
        Self::new(count, UnitKind::Month)
    }

    #[must_use]
    pub const fn years(count: i32) -> Self {
        Self::new(count, UnitKind::Year)
    }

    #[must_use]
    pub const fn negated(self) -> Self {
        Self::new(-self.count, self.kind)
    }

    /// Magnitude of the step, used where alignment needs a positive multiple.
    #[must_use]
    pub const fn magnitude(self) -> u32 {
        self.count.unsigned_abs()
    }

    #[must_use]
    pub fn nominal_seconds(self) -> f64 {
        f64::from(self.count) * self.kind.nominal_seconds()
    }
}

impl fmt::Display for CalendarUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.kind.suffix())
    }
}

impl FromStr for CalendarUnit {
    type Err = AxisError;

    fn from_str(raw: &str) -> AxisResult<Self> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let Some(suffix) = chars.next_back() else {
            return Err(AxisError::InvalidUnit("empty unit string".to_owned()));
        };
        let kind = UnitKind::from_suffix(suffix)
            .ok_or_else(|| AxisError::InvalidUnit(format!("unknown unit suffix in `{raw}`")))?;

        let digits = chars.as_str();
        let count = match digits {
            "" => 1,
            "-" => -1,
            "+" => 1,
            other => other
                .parse::<i32>()
                .map_err(|_| AxisError::InvalidUnit(format!("invalid unit count in `{raw}`")))?,
        };

        Ok(Self::new(count, kind))
    }
}

impl Serialize for CalendarUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
