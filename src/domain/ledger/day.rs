//! Day and slot value objects for the weekly ledger.
//!
//! The ledger tracks the six selling days, Monday through Saturday. Sunday is
//! the buying day: submissions stamped with it pass the legacy day gate but
//! have no slot to land in (see [`SubmitDay`]).

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;

use super::errors::LedgerError;

/// One of the six selling days tracked by a weekly record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl MarketDay {
    /// All selling days in ledger order.
    pub const ALL: [MarketDay; 6] = [
        MarketDay::Monday,
        MarketDay::Tuesday,
        MarketDay::Wednesday,
        MarketDay::Thursday,
        MarketDay::Friday,
        MarketDay::Saturday,
    ];

    /// Slot index of this day within a record (0..=5).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day from a slot index, `None` outside 0..=5.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// English day name.
    pub fn name(self) -> &'static str {
        match self {
            MarketDay::Monday => "Monday",
            MarketDay::Tuesday => "Tuesday",
            MarketDay::Wednesday => "Wednesday",
            MarketDay::Thursday => "Thursday",
            MarketDay::Friday => "Friday",
            MarketDay::Saturday => "Saturday",
        }
    }
}

impl fmt::Display for MarketDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A day index accepted by the submission gate.
///
/// The gate accepts 0..=6 (Monday..Sunday, matching the stored documents'
/// `expected_day` range). Sunday carries no price slot; a Sunday submission
/// is accepted and dropped by the record manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDay {
    /// A selling day with a slot in the record.
    Market(MarketDay),
    /// The buying day; no slot.
    Sunday,
}

impl SubmitDay {
    /// Validates a caller-supplied day index against the 0..=6 gate.
    pub fn from_index(day: i64) -> Result<Self, LedgerError> {
        match day {
            0..=5 => Ok(SubmitDay::Market(MarketDay::ALL[day as usize])),
            6 => Ok(SubmitDay::Sunday),
            _ => Err(LedgerError::invalid_day(day)),
        }
    }

    /// Today's weekday, Monday = 0.
    pub fn today() -> Self {
        let index = chrono::Local::now().weekday().num_days_from_monday();
        Self::from_index(i64::from(index)).expect("chrono weekday is always 0..=6")
    }

    /// Day index 0..=6, as stamped into `expected_day`.
    pub fn index(self) -> u8 {
        match self {
            SubmitDay::Market(day) => day.index() as u8,
            SubmitDay::Sunday => 6,
        }
    }
}

/// One of the two daily observation points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Am,
    Pm,
}

impl Slot {
    /// Position of this slot within a price pair (0 = am, 1 = pm).
    pub fn index(self) -> usize {
        match self {
            Slot::Am => 0,
            Slot::Pm => 1,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Am => write!(f, "am"),
            Slot::Pm => write!(f, "pm"),
        }
    }
}

impl FromStr for Slot {
    type Err = LedgerError;

    /// Strict two-token parse. Anything other than exactly "am" or "pm" is
    /// rejected rather than defaulting to PM.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "am" => Ok(Slot::Am),
            "pm" => Ok(Slot::Pm),
            other => Err(LedgerError::invalid_slot(other)),
        }
    }
}
