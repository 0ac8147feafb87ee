//! Project detection.
//!
//! This module provides:
//! - The ordered table of known project types and their marker files
//! - Classification of a directory against that table
//! - Slug, display name and URL derivation for the dashboard

pub mod naming;
mod rule;
pub mod rules;
mod scanner;

pub use naming::{display_name, slugify};
pub use rule::{classify, ProjectTypeRule, MATCH_THRESHOLD};
pub use rules::{GENERIC, PROJECT_TYPES};
pub use scanner::{ProjectInfo, ProjectScanner};
