//! HTTP API layer.
//!
//! Axum-based JSON API under `/api/` with permissive CORS for the
//! dashboard front-end.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;

pub use router::build_router;
