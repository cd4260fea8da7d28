//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports.
//!
//! - `LedgerStore` - document-store persistence for weekly price records
//! - `Forecaster` - the external price prediction service
//! - `ChartRenderer` - per-call isolated chart rendering

mod chart_renderer;
mod forecaster;
mod ledger_store;

pub use chart_renderer::{ChartError, ChartImage, ChartRenderer};
pub use forecaster::{ForecastError, ForecastQuery, Forecaster};
pub use ledger_store::LedgerStore;
