use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::path::Path;

use devdock_dashboard::cli::{Cli, Command};
use devdock_dashboard::commands;
use devdock_dashboard::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Dispatch to subcommand
    match cli.command {
        Command::Serve(args) => {
            let config = load_config(cli.config.as_deref())?;
            tracing::info!(?args, "Starting server");
            commands::serve::run(args, config).await?;
        }
        Command::Projects(args) => {
            let config = load_config(cli.config.as_deref())?;
            tracing::info!(?args, "Listing projects");
            commands::projects::run(args, config)?;
        }
        Command::Health(args) => {
            let config = load_config(cli.config.as_deref())?;
            tracing::info!(?args, "Checking services");
            commands::health::run(args, config).await?;
        }
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "devdock", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = Config::load(path)?;
    tracing::debug!(?config, "Loaded configuration");
    Ok(config)
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("devdock_dashboard={level},devdock={level},tower_http={level}"))
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
