//! Projects command implementation

use crate::cli::ProjectsArgs;
use crate::config::Config;
use crate::detector::ProjectScanner;
use crate::error::Result;
use crate::http::response::ProjectsResponse;

/// Run the projects command
pub fn run(args: ProjectsArgs, mut config: Config) -> Result<()> {
    if let Some(root) = args.root {
        config.projects.root = root;
    }
    config.validate()?;

    tracing::info!(root = %config.projects.root.display(), "Scanning for projects");

    let projects = ProjectScanner::default().scan(&config.projects.root)?;
    let output = serde_json::to_string_pretty(&ProjectsResponse::new(projects))?;

    println!("{}", output);

    Ok(())
}
