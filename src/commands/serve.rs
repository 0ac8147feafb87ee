//! Serve command implementation

use anyhow::Result;
use tokio::net::TcpListener;

use crate::cli::ServeArgs;
use crate::config::{Config, ServerConfig};
use crate::http::build_router;
use crate::state::AppState;

/// Run the HTTP API until Ctrl+C or SIGTERM
pub async fn run(args: ServeArgs, mut config: Config) -> Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(root) = args.root {
        config.projects.root = root;
    }
    config.validate()?;

    if !config.projects.root.is_dir() {
        tracing::warn!(
            root = %config.projects.root.display(),
            "Projects directory does not exist yet; /api/projects will report an error"
        );
    }

    let listener = bind(&config.server).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, root = %config.projects.root.display(), "Dashboard API listening");

    let router = build_router(AppState::from_config(&config));

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Bind the listener. Host and port stay separate so IPv6 literals work.
async fn bind(server: &ServerConfig) -> std::io::Result<TcpListener> {
    TcpListener::bind((server.host.as_str(), server.port)).await
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
