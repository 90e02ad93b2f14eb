//! Screen regions.

pub mod bets;
pub mod header;
pub mod history;
pub mod status;
pub mod wheel;
