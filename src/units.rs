//! The six time units and their fixed lengths in seconds.
//!
//! Month and year are calendar-unaware approximations (30 and 365 days).
//! They are part of the output contract and must not change.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::TimeconvError;
use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl Unit {
    /// Canonical display and iteration order.
    pub const ALL: [Unit; 6] = [
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Month,
        Unit::Year,
    ];

    pub const fn seconds(self) -> u64 {
        match self {
            Unit::Second => 1,
            Unit::Minute => 60,
            Unit::Hour => 3_600,
            Unit::Day => 86_400,
            Unit::Month => 2_592_000,
            Unit::Year => 31_536_000,
        }
    }

    /// Length of this unit in seconds as an exact decimal.
    pub fn factor(self) -> Decimal {
        Decimal::from(self.seconds())
    }

    /// Largest factor in the table, used to bound accepted input.
    pub fn max_factor() -> Decimal {
        Unit::Year.factor()
    }

    pub const fn id(self) -> &'static str {
        match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }

    /// Position in canonical order (0-based). Declaration order is the
    /// canonical order.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Unit> {
        Unit::ALL.get(index).copied()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Unit {
    type Err = TimeconvError;

    /// Accepts the identifier (`"hour"`), its plural (`"hours"`) or the
    /// display name in either language, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        for unit in Unit::ALL {
            if needle == unit.id() || needle == format!("{}s", unit.id()) {
                return Ok(unit);
            }
            for lang in Language::ALL {
                if needle == lang.strings().unit_name(unit).to_lowercase() {
                    return Ok(unit);
                }
            }
        }
        Err(TimeconvError::UnknownUnit(s.to_string()))
    }
}
