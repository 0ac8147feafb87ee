use std::time::Duration;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::config::HealthConfig;

/// A companion service whose port the dashboard checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDescriptor {
    /// Key the service is reported under (e.g., "mailhog")
    pub key: &'static str,
    pub name: &'static str,
    pub port: u16,
    pub description: &'static str,
    /// Where the front-end links to
    pub url: &'static str,
}

/// Reachability of a service port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Running,
    Down,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Running)
    }
}

/// Probe result for one service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    pub descriptor: ServiceDescriptor,
    pub status: HealthStatus,
}

impl ServiceStatus {
    pub fn key(&self) -> &'static str {
        self.descriptor.key
    }

    pub fn healthy(&self) -> bool {
        self.status.is_healthy()
    }
}

impl Serialize for ServiceStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(6))?;
        map.serialize_entry("name", self.descriptor.name)?;
        map.serialize_entry("description", self.descriptor.description)?;
        map.serialize_entry("url", self.descriptor.url)?;
        map.serialize_entry("port", &self.descriptor.port)?;
        map.serialize_entry("status", &self.status)?;
        map.serialize_entry("healthy", &self.healthy())?;
        map.end()
    }
}

/// Health of every configured service at one point in time
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    /// ISO-8601 timestamp with UTC offset
    pub timestamp: String,
    /// Keyed by service key, in table order
    #[serde(serialize_with = "serialize_services")]
    pub services: Vec<ServiceStatus>,
}

fn serialize_services<S: Serializer>(
    services: &[ServiceStatus],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(services.iter().map(|s| (s.key(), s)))
}

/// Runtime options for probing
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    /// Host the ports are probed on
    pub host: String,
    /// Connect timeout per probe
    pub timeout: Duration,
}

impl From<&HealthConfig> for ProbeOptions {
    fn from(config: &HealthConfig) -> Self {
        Self {
            host: config.host.clone(),
            timeout: config.timeout(),
        }
    }
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self::from(&HealthConfig::default())
    }
}
