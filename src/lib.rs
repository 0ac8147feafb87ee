//! devdock - Local development dashboard API
//!
//! This crate provides functionality for:
//! - Probing companion service ports for reachability
//! - Detecting the framework of each project directory under a root
//! - Serving both as JSON over HTTP for the dashboard front-end

pub mod cli;
pub mod commands;
pub mod config;
pub mod detector;
pub mod error;
pub mod http;
pub mod prober;
pub mod state;

// Re-export commonly used types
pub use config::Config;
pub use error::{DashboardError, Result};
