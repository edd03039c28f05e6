//! HTTP delivery of the rendered site.

use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::SiteConfig;
use crate::error::SiteError;

pub mod routes;
pub mod state;

pub use state::AppState;

/// Builds the app before binding, so a bad catalog or host page never opens a port.
pub async fn run_server(config: &SiteConfig) -> Result<(), SiteError> {
    let app = config.build_app()?;
    let router = routes::create_router(AppState::new(app), &config.public_dir);

    let listener = TcpListener::bind(config.bind).await?;
    info!("dara server listening on http://{}", config.bind);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to install Ctrl-C handler: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
