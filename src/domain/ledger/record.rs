//! The weekly price record and its stored document shape.
//!
//! A record is six Monday..Saturday price pairs plus the weekday the user is
//! expected to reset on. The persisted document keeps the legacy shape that
//! existing stores already hold: string day keys `"0"`..`"5"` each mapping to
//! a two-integer `[am, pm]` array.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::day::{MarketDay, Slot, SubmitDay};
use super::errors::LedgerError;

/// Opaque chat-platform user identifier. Unique key for a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId, returning an error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, LedgerError> {
        let id = id.into();
        if id.is_empty() {
            return Err(LedgerError::EmptyUser);
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two observations of one selling day. Zero means "not yet observed".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePair {
    pub am: u32,
    pub pm: u32,
}

impl PricePair {
    /// Price in the given slot.
    pub fn get(self, slot: Slot) -> u32 {
        match slot {
            Slot::Am => self.am,
            Slot::Pm => self.pm,
        }
    }

    /// Overwrites the given slot.
    pub fn set(&mut self, slot: Slot, price: u32) {
        match slot {
            Slot::Am => self.am = price,
            Slot::Pm => self.pm = price,
        }
    }
}

impl From<PricePair> for [u32; 2] {
    fn from(pair: PricePair) -> Self {
        [pair.am, pair.pm]
    }
}

impl From<[u32; 2]> for PricePair {
    fn from([am, pm]: [u32; 2]) -> Self {
        PricePair { am, pm }
    }
}

/// One user's week of price observations.
///
/// Invariant: exactly six day slots always exist, each holding exactly two
/// non-negative integers. Absent observations are zero, never omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordDoc", into = "RecordDoc")]
pub struct PriceRecord {
    user: UserId,
    expected_reset_day: u8,
    slots: [PricePair; 6],
}

impl PriceRecord {
    /// Creates a fresh zeroed record stamped with the given reset day.
    pub fn new(user: UserId, reset_day: SubmitDay) -> Self {
        Self {
            user,
            expected_reset_day: reset_day.index(),
            slots: [PricePair::default(); 6],
        }
    }

    /// The owning user.
    pub fn user(&self) -> &UserId {
        &self.user
    }

    /// Day-of-week index (0..=6) recorded at creation or reset time.
    pub fn expected_reset_day(&self) -> u8 {
        self.expected_reset_day
    }

    /// The price pair for one selling day.
    pub fn pair(&self, day: MarketDay) -> PricePair {
        self.slots[day.index()]
    }

    /// Price in one cell.
    pub fn price(&self, day: MarketDay, slot: Slot) -> u32 {
        self.pair(day).get(slot)
    }

    /// Overwrites one cell (last-write-wins, no accumulation).
    pub fn set_price(&mut self, day: MarketDay, slot: Slot, price: u32) {
        self.slots[day.index()].set(slot, price);
    }

    /// All twelve cells in day-major AM/PM order, Monday AM first.
    pub fn cells(&self) -> [u32; 12] {
        let mut cells = [0u32; 12];
        for day in MarketDay::ALL {
            let pair = self.pair(day);
            cells[day.index() * 2] = pair.am;
            cells[day.index() * 2 + 1] = pair.pm;
        }
        cells
    }

    /// True when no observation has been recorded yet.
    pub fn is_unobserved(&self) -> bool {
        self.cells().iter().all(|&price| price == 0)
    }
}

/// The legacy document shape, kept byte-compatible with existing stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecordDoc {
    user: UserId,
    expected_day: u8,
    #[serde(rename = "0")]
    day0: [u32; 2],
    #[serde(rename = "1")]
    day1: [u32; 2],
    #[serde(rename = "2")]
    day2: [u32; 2],
    #[serde(rename = "3")]
    day3: [u32; 2],
    #[serde(rename = "4")]
    day4: [u32; 2],
    #[serde(rename = "5")]
    day5: [u32; 2],
}

impl From<PriceRecord> for RecordDoc {
    fn from(record: PriceRecord) -> Self {
        let [day0, day1, day2, day3, day4, day5] = record.slots.map(<[u32; 2]>::from);
        RecordDoc {
            user: record.user,
            expected_day: record.expected_reset_day,
            day0,
            day1,
            day2,
            day3,
            day4,
            day5,
        }
    }
}

impl TryFrom<RecordDoc> for PriceRecord {
    type Error = LedgerError;

    fn try_from(doc: RecordDoc) -> Result<Self, Self::Error> {
        if doc.user.as_str().is_empty() {
            return Err(LedgerError::EmptyUser);
        }
        if doc.expected_day > 6 {
            return Err(LedgerError::invalid_day(i64::from(doc.expected_day)));
        }
        Ok(PriceRecord {
            user: doc.user,
            expected_reset_day: doc.expected_day,
            slots: [doc.day0, doc.day1, doc.day2, doc.day3, doc.day4, doc.day5]
                .map(PricePair::from),
        })
    }
}
