//! CLI command implementations.

pub mod breakdown;
pub mod listing;
pub mod locate;
pub mod unsupported;
