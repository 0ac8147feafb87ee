//! Subcommand implementations.

pub mod health;
pub mod projects;
pub mod serve;
