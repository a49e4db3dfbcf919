//! Command implementations for the social CLI
//!
//! Each command module provides a `run` function that executes the command logic.

pub mod exec;
pub mod run;
pub mod session;
pub mod shell;
