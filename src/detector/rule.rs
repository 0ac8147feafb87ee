//! Rule type and classification for project detection.

use std::path::Path;

/// Number of markers that must exist before a rule claims a directory.
///
/// Fixed for every rule, so a rule listing a single marker never matches.
pub const MATCH_THRESHOLD: usize = 2;

/// A detectable project type and the metadata the dashboard shows for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectTypeRule {
    /// Type identifier (e.g., "laravel").
    pub id: &'static str,
    /// Framework display name (e.g., "Laravel").
    pub name: &'static str,
    /// Icon tag understood by the front-end.
    pub icon: &'static str,
    /// Color tag (Tailwind gradient classes).
    pub color: &'static str,
    pub description: &'static str,
    /// Relative paths whose presence is evidence of this project type.
    pub markers: &'static [&'static str],
    /// Appended to the slug to form the domain (e.g., ".localhost").
    pub subdomain: &'static str,
    /// Appended to the domain to form the URL (e.g., "/api").
    pub path: &'static str,
}

impl ProjectTypeRule {
    /// Count how many of this rule's markers exist under `path`.
    ///
    /// Markers may be files or directories.
    pub fn count_markers(&self, path: &Path) -> usize {
        self.markers
            .iter()
            .filter(|marker| path.join(marker).exists())
            .count()
    }

    /// Check whether this rule claims the directory at `path`.
    pub fn matches(&self, path: &Path) -> bool {
        self.count_markers(path) >= MATCH_THRESHOLD
    }
}

/// Classify a directory against `rules`, falling back to `fallback`.
///
/// Rules are tried in order and the first match wins.
pub fn classify<'a>(
    path: &Path,
    rules: &'a [ProjectTypeRule],
    fallback: &'a ProjectTypeRule,
) -> &'a ProjectTypeRule {
    rules
        .iter()
        .find(|rule| rule.matches(path))
        .unwrap_or(fallback)
}
