//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host owns no API of its own. It serves the Leptos SSR pages, the WASM
//! bundle under `/pkg`, site assets under `/static`, and a health check. The
//! projects API and the contact endpoint live on the backend named by
//! `API_BASE` and are called from the browser.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::StartupError;

/// Health check and site assets, independent of Leptos.
pub fn base_routes(config: &ServerConfig) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/static", ServeDir::new(&config.static_dir))
}

/// Full site: SSR pages, `/pkg` bundle and `base_routes`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(config: &ServerConfig) -> Result<Router, StartupError> {
    let conf = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(despacho_web::app::App);
    let site = config.site();

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || despacho_web::app::shell(opts.clone(), site.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(base_routes(config)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
