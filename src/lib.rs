//! Stalk Ledger - weekly commodity price tracking with forecast orchestration.
//!
//! This crate keeps one rolling week of per-user sale prices submitted
//! through chat commands and turns them into predicted price patterns by
//! delegating to an external forecasting service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
