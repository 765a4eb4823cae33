//! Site host: Leptos SSR pages plus static assets behind one Axum router.

mod config;
mod error;
mod routes;

use config::ServerConfig;
use error::StartupError;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        port = config.port,
        api_base = %config.api_base,
        static_dir = %config.static_dir.display(),
        "configuration loaded"
    );

    let app = routes::leptos_app(&config)?;
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "despacho listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
