//! The weekly price ledger data model.
//!
//! Pure domain types: days and slots, the per-user price record with its
//! legacy document shape, the transient prediction pattern, and the ledger
//! error vocabulary. No I/O happens here.

mod day;
mod errors;
mod pattern;
mod record;

pub use day::{MarketDay, Slot, SubmitDay};
pub use errors::{LedgerError, StoreError};
pub use pattern::PredictionPattern;
pub use record::{PricePair, PriceRecord, UserId};
