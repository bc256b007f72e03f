use crate::error::PickerError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A time granularity shown as one picker column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[serde(alias = "second", alias = "s")]
    Seconds,
    #[serde(alias = "minute", alias = "m")]
    Minutes,
    #[serde(alias = "hour", alias = "h")]
    Hours,
    #[serde(alias = "day", alias = "d")]
    Days,
    #[serde(alias = "week", alias = "w")]
    Weeks,
    #[serde(alias = "month", alias = "mo")]
    Months,
    #[serde(alias = "year", alias = "y")]
    Years,
}

/// Static facts about a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitInfo {
    pub unit: Unit,
    pub seconds: u64,
    pub default_rows: usize,
    pub key: &'static str,
}

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * 60;
const SECONDS_PER_DAY: u64 = 24 * 60 * 60;
const SECONDS_PER_WEEK: u64 = 7 * 24 * 60 * 60;
const SECONDS_PER_MONTH: u64 = 30 * 24 * 60 * 60;
const SECONDS_PER_YEAR: u64 = 365 * 24 * 60 * 60;

/// Indexed by `Unit as usize`.
static UNIT_TABLE: [UnitInfo; 7] = [
    UnitInfo { unit: Unit::Seconds, seconds: 1, default_rows: 60, key: "seconds" },
    UnitInfo { unit: Unit::Minutes, seconds: SECONDS_PER_MINUTE, default_rows: 60, key: "minutes" },
    UnitInfo { unit: Unit::Hours, seconds: SECONDS_PER_HOUR, default_rows: 24, key: "hours" },
    UnitInfo { unit: Unit::Days, seconds: SECONDS_PER_DAY, default_rows: 365, key: "days" },
    UnitInfo { unit: Unit::Weeks, seconds: SECONDS_PER_WEEK, default_rows: 52, key: "weeks" },
    UnitInfo { unit: Unit::Months, seconds: SECONDS_PER_MONTH, default_rows: 12, key: "months" },
    UnitInfo { unit: Unit::Years, seconds: SECONDS_PER_YEAR, default_rows: 100, key: "years" },
];

impl Unit {
    pub const ALL: [Unit; 7] = [
        Unit::Seconds,
        Unit::Minutes,
        Unit::Hours,
        Unit::Days,
        Unit::Weeks,
        Unit::Months,
        Unit::Years,
    ];

    pub fn info(self) -> &'static UnitInfo {
        &UNIT_TABLE[self as usize]
    }

    pub fn as_seconds(self) -> u64 {
        self.info().seconds
    }

    pub fn default_rows(self) -> usize {
        self.info().default_rows
    }

    pub fn key(self) -> &'static str {
        self.info().key
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Unit {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "seconds" | "second" | "secs" | "sec" | "s" => Unit::Seconds,
            "minutes" | "minute" | "mins" | "min" | "m" => Unit::Minutes,
            "hours" | "hour" | "hrs" | "hr" | "h" => Unit::Hours,
            "days" | "day" | "d" => Unit::Days,
            "weeks" | "week" | "wks" | "wk" | "w" => Unit::Weeks,
            "months" | "month" | "mos" | "mo" => Unit::Months,
            "years" | "year" | "yrs" | "yr" | "y" => Unit::Years,
            _ => return Err(PickerError::UnknownUnit(s.to_string())),
        };
        Ok(unit)
    }
}

/// Row count per unit. Every unit always has an entry, seeded from the
/// unit table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowCounts([usize; 7]);

impl Default for RowCounts {
    fn default() -> Self {
        let mut rows = [0; 7];
        for unit in Unit::ALL {
            rows[unit as usize] = unit.default_rows();
        }
        Self(rows)
    }
}

impl RowCounts {
    pub fn get(&self, unit: Unit) -> usize {
        self.0[unit as usize]
    }

    /// Validated update; rows must be positive.
    pub fn set(&mut self, unit: Unit, count: i64) -> Result<usize, PickerError> {
        let rows = validate_row_count(unit, count)?;
        self.0[unit as usize] = rows;
        Ok(rows)
    }
}

pub fn validate_row_count(unit: Unit, count: i64) -> Result<usize, PickerError> {
    match usize::try_from(count) {
        Ok(rows) if rows > 0 => Ok(rows),
        _ => Err(PickerError::InvalidRowCount { unit, count }),
    }
}

/// How column names are spelled out.
///
/// - full: days / hours / minutes / seconds
/// - short: days / hrs / mins / secs
/// - abbreviated: d / h / m / s
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnitsStyle {
    #[default]
    Full,
    Short,
    Abbreviated,
}

impl UnitsStyle {
    pub fn key(self) -> &'static str {
        match self {
            UnitsStyle::Full => "full",
            UnitsStyle::Short => "short",
            UnitsStyle::Abbreviated => "abbreviated",
        }
    }
}

impl fmt::Display for UnitsStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
