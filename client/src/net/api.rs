//! REST calls to the site's backend collaborators.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors, since the gallery and contact
//! form only talk to the backend from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Both calls return typed errors and never retry. Callers turn them into the
//! fixed user-facing messages; details go to the console log.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ContactError, ContactReply, ContactRequest, LoadError};
use crate::state::projects::ProjectRecord;
use crate::util::site_config::SiteConfig;

/// Cookie Django stores its CSRF token in.
pub const CSRF_COOKIE: &str = "csrftoken";
/// Header the contact endpoint expects the token in.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Longest slice of a non-JSON body kept for diagnostics.
#[cfg(any(test, feature = "hydrate"))]
const SNIPPET_CHARS: usize = 200;

/// Extract the CSRF token from a `document.cookie` string.
pub fn csrf_token_from_cookies(cookies: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().strip_prefix(CSRF_COOKIE)?.strip_prefix('='))
        .find(|value| !value.is_empty())
        .map(str::to_owned)
}

#[cfg(any(test, feature = "hydrate"))]
fn body_snippet(text: &str) -> String {
    text.chars().take(SNIPPET_CHARS).collect()
}

/// Fetch and normalize the full project list.
///
/// # Errors
///
/// Returns a [`LoadError`] on transport failure, non-2xx status, a non-JSON
/// content type, or undecodable JSON. An unrecognized envelope is not an
/// error; it yields an empty list.
pub async fn fetch_projects(config: &SiteConfig) -> Result<Vec<ProjectRecord>, LoadError> {
    #[cfg(feature = "hydrate")]
    {
        use super::projects_parse::{PayloadShape, extract_items, parse_projects};
        use super::types::is_json_content_type;

        let url = config.projects_url();
        log::info!("loading projects from {url}");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(LoadError::Status(resp.status()));
        }
        let content_type = resp.headers().get("content-type").unwrap_or_default();
        if !is_json_content_type(&content_type) {
            return Err(LoadError::NotJson(content_type));
        }
        let data = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| LoadError::Decode(e.to_string()))?;

        let (shape, items) = extract_items(&data);
        if shape == PayloadShape::Unknown {
            log::warn!("unrecognized projects payload; treating as empty");
        }
        log::info!("projects payload: {shape:?}, {} items", items.len());

        let origin = config.api_origin(&crate::util::site_config::page_origin());
        Ok(parse_projects(&data, &origin))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(LoadError::Network("not available on server".to_owned()))
    }
}

/// Submit the contact form.
///
/// # Errors
///
/// Returns a [`ContactError`] when the request cannot be sent, the reply is
/// not JSON, or the JSON does not decode. A decoded rejection (`ok: false`)
/// is a successful call; inspect [`ContactReply::accepted`].
pub async fn submit_contact(config: &SiteConfig, request: &ContactRequest) -> Result<ContactReply, ContactError> {
    #[cfg(feature = "hydrate")]
    {
        use super::types::{ContactResponse, is_json_content_type};

        let mut builder = gloo_net::http::Request::post(&config.contact_url())
            .credentials(web_sys::RequestCredentials::SameOrigin)
            .header("Accept", "application/json");
        if let Some(token) = read_csrf_cookie() {
            builder = builder.header(CSRF_HEADER, &token);
        }
        let resp = builder
            .json(request)
            .map_err(|e| ContactError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ContactError::Network(e.to_string()))?;

        let content_type = resp.headers().get("content-type").unwrap_or_default();
        if !is_json_content_type(&content_type) {
            let text = resp.text().await.unwrap_or_default();
            return Err(ContactError::NotJson { status: resp.status(), snippet: body_snippet(&text) });
        }
        let body = resp
            .json::<ContactResponse>()
            .await
            .map_err(|e| ContactError::Decode(e.to_string()))?;
        Ok(ContactReply { status_ok: resp.ok(), body })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(ContactError::Network("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
fn read_csrf_cookie() -> Option<String> {
    use wasm_bindgen::JsCast as _;

    let document = web_sys::window()?.document()?;
    let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html.cookie().ok()?;
    csrf_token_from_cookies(&cookies)
}
