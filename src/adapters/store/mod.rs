//! Ledger store adapters.

mod in_memory;
mod json_file;

pub use in_memory::InMemoryLedgerStore;
pub use json_file::JsonFileLedgerStore;
