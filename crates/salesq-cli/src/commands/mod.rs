//! Command implementations for the salesq CLI.

pub mod batch;
pub mod parse;
