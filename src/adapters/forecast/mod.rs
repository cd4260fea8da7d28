//! Forecast upstream adapters.

mod mock;
mod turnip_api;

pub use mock::MockForecaster;
pub use turnip_api::{TurnipApiConfig, TurnipApiForecaster};
