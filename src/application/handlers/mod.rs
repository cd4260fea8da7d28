//! Command handlers wiring the domain to the ports.

mod predict;
mod reset_week;
mod submit_price;
mod week_report;

pub use predict::{PredictError, PredictHandler, Prediction};
pub use reset_week::ResetWeekHandler;
pub use submit_price::{SubmitPriceCommand, SubmitPriceHandler};
pub use week_report::WeekReportHandler;
