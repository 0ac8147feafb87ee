//! Companion service health probing.

pub mod probe;
pub mod services;
pub mod types;

pub use probe::{check_health, health_report, probe_port};
pub use services::SERVICES;
pub use types::{HealthReport, HealthStatus, ProbeOptions, ServiceDescriptor, ServiceStatus};
