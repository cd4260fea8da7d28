//! Chat command grammar.
//!
//! The transport hands over the text after its own trigger word; this module
//! turns it into a typed command. Anything unrecognized maps to the fixed
//! usage-error strings the bot posts back.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::ledger::Slot;

/// Fixed usage message for unrecognized commands.
pub const USAGE: &str = "Invalid command!\nAvailable commands:\n\tprice <stalk price> <am/pm>\n\tpredict\n\treset";

/// Fixed usage message for malformed price commands.
pub const PRICE_USAGE: &str =
    "Invalid price command;\nExample use: price <cost as integer> <string am or pm>";

/// A parsed chat command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatCommand {
    /// Submit one observation for the current day.
    Price { price: u32, slot: Slot },
    /// Ask for a forecast of the current week.
    Predict,
    /// Discard the week and start over.
    Reset,
}

/// Command parse failures, displayed as the user-facing usage text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{}", USAGE)]
    Unknown,

    #[error("{}", PRICE_USAGE)]
    BadPrice,
}

/// Parses one command line. Extra trailing tokens are ignored.
pub fn parse(input: &str) -> Result<ChatCommand, CommandError> {
    let mut parts = input.split_whitespace();
    match parts.next() {
        Some("price") => {
            let price = parts.next().ok_or(CommandError::BadPrice)?;
            let slot = parts.next().ok_or(CommandError::BadPrice)?;

            let price: u32 = price.parse().map_err(|_| CommandError::BadPrice)?;
            let slot = Slot::from_str(slot).map_err(|_| CommandError::BadPrice)?;
            Ok(ChatCommand::Price { price, slot })
        }
        Some("predict") => Ok(ChatCommand::Predict),
        Some("reset") => Ok(ChatCommand::Reset),
        _ => Err(CommandError::Unknown),
    }
}
