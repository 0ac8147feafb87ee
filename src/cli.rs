use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// devdock - Local development dashboard API
#[derive(Parser, Debug)]
#[command(name = "devdock")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the dashboard HTTP API
    Serve(ServeArgs),

    /// Detect projects and print them as JSON
    Projects(ProjectsArgs),

    /// Check companion services and print their health as JSON
    Health(HealthArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, value_name = "ADDR")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "DEVDOCK_PORT", value_name = "PORT")]
    pub port: Option<u16>,

    /// Directory containing the projects
    #[arg(short, long, env = "DEVDOCK_PROJECTS_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// Directory containing the projects
    #[arg(short, long, env = "DEVDOCK_PROJECTS_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Host to probe the service ports on
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Connect timeout per service in milliseconds
    #[arg(short, long, value_name = "MS")]
    pub timeout_ms: Option<u64>,
}
