//! wastenot - household food-inventory and meal-planning CLI.
//!
//! The domain logic lives in the workspace crates; this package holds the
//! presentation adapter: configuration, tracing setup and the command
//! handlers that turn plans and ledgers into text.

pub mod cli;
pub mod config;
pub mod observability;
