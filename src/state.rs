//! Shared, read-only state handed to every HTTP handler.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::detector::ProjectScanner;
use crate::prober::{ProbeOptions, ServiceDescriptor, SERVICES};

#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<StateInner>,
}

#[derive(Debug)]
struct StateInner {
    projects_root: PathBuf,
    scanner: ProjectScanner,
    services: Vec<ServiceDescriptor>,
    probe: ProbeOptions,
}

impl AppState {
    pub fn new(
        projects_root: PathBuf,
        scanner: ProjectScanner,
        services: Vec<ServiceDescriptor>,
        probe: ProbeOptions,
    ) -> Self {
        Self {
            inner: Arc::new(StateInner {
                projects_root,
                scanner,
                services,
                probe,
            }),
        }
    }

    /// State for the built-in service and rule tables.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.projects.root.clone(),
            ProjectScanner::default(),
            SERVICES.to_vec(),
            ProbeOptions::from(&config.health),
        )
    }

    pub fn projects_root(&self) -> &Path {
        &self.inner.projects_root
    }

    pub fn scanner(&self) -> ProjectScanner {
        self.inner.scanner
    }

    pub fn services(&self) -> &[ServiceDescriptor] {
        &self.inner.services
    }

    pub fn probe_options(&self) -> &ProbeOptions {
        &self.inner.probe
    }
}
