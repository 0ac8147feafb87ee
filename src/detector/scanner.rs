//! Project scanner for listing and classifying project directories.

use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::detector::naming::{display_name, slugify};
use crate::detector::rules::{GENERIC, PROJECT_TYPES};
use crate::detector::{classify, ProjectTypeRule};
use crate::error::{DashboardError, Result};

/// A project directory and the metadata the dashboard renders for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    /// Raw directory name.
    pub name: String,
    pub display_name: String,
    /// Detected type identifier (e.g., "laravel", "generic").
    #[serde(rename = "type")]
    pub project_type: String,
    /// Framework display name (e.g., "Laravel").
    pub framework: String,
    pub description: String,
    pub url: String,
    pub domain: String,
    pub icon: String,
    pub color: String,
    /// Filesystem path of the project directory.
    pub path: String,
}

impl ProjectInfo {
    /// Build the record for directory `name` at `path` classified as `rule`.
    pub fn new(name: &str, path: &Path, rule: &ProjectTypeRule) -> Self {
        let domain = format!("{}{}", slugify(name), rule.subdomain);

        Self {
            name: name.to_string(),
            display_name: display_name(name),
            project_type: rule.id.to_string(),
            framework: rule.name.to_string(),
            description: rule.description.to_string(),
            url: format!("http://{}{}", domain, rule.path),
            domain,
            icon: rule.icon.to_string(),
            color: rule.color.to_string(),
            path: path.to_string_lossy().into_owned(),
        }
    }
}

/// Scanner over the immediate subdirectories of a projects root.
#[derive(Debug, Clone, Copy)]
pub struct ProjectScanner {
    rules: &'static [ProjectTypeRule],
    fallback: &'static ProjectTypeRule,
}

impl ProjectScanner {
    /// Create a scanner with a custom rule table.
    pub fn new(rules: &'static [ProjectTypeRule], fallback: &'static ProjectTypeRule) -> Self {
        Self { rules, fallback }
    }

    /// Classify a single directory.
    pub fn classify(&self, path: &Path) -> &'static ProjectTypeRule {
        classify(path, self.rules, self.fallback)
    }

    /// Scan `root` for projects.
    ///
    /// Hidden entries and non-directories are skipped. Entries come back in
    /// file name order.
    pub fn scan(&self, root: &Path) -> Result<Vec<ProjectInfo>> {
        if !root.is_dir() {
            return Err(DashboardError::DirectoryNotFound(root.to_path_buf()));
        }

        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        let mut projects = Vec::new();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(root = %root.display(), error = %err, "Skipping unreadable entry");
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy();
            if name.starts_with('.') {
                continue;
            }

            // Follows symlinks, so a link to a project directory counts.
            let path: PathBuf = entry.path().to_path_buf();
            if !path.is_dir() {
                continue;
            }

            let rule = self.classify(&path);
            tracing::debug!(project = %name, project_type = rule.id, "Detected project");
            projects.push(ProjectInfo::new(&name, &path, rule));
        }

        Ok(projects)
    }
}

impl Default for ProjectScanner {
    fn default() -> Self {
        Self::new(PROJECT_TYPES, &GENERIC)
    }
}
