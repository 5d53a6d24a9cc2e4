mod config;
mod routes;

use std::process::ExitCode;

use config::ServerConfig;

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is the normal case in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    if !config.pkg_dir.is_dir() {
        tracing::warn!(pkg_dir = %config.pkg_dir.display(), "client bundle missing; page will load without scripts");
    }

    let listener = match tokio::net::TcpListener::bind(config.bind_addr()).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, addr = %config.bind_addr(), "failed to bind");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(port = config.port, site_dir = %config.site_dir.display(), "estate-site listening");
    if let Err(e) = axum::serve(listener, routes::app(&config)).await {
        tracing::error!(error = %e, "server failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
