//! Wire types for the REST collaborators and the client's typed errors.
//!
//! The projects listing is parsed from raw JSON (see `projects_parse`) since
//! its shape varies; the contact endpoint has a fixed schema and is typed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why the one-shot project load failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("projects request failed: {0}")]
    Network(String),
    #[error("projects request returned status {0}")]
    Status(u16),
    #[error("projects response is not JSON (content-type {0:?})")]
    NotJson(String),
    #[error("projects response could not be decoded: {0}")]
    Decode(String),
}

/// Why a contact submission produced no usable reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("contact request failed: {0}")]
    Network(String),
    #[error("contact endpoint answered non-JSON (HTTP {status}): {snippet}")]
    NotJson { status: u16, snippet: String },
    #[error("contact response could not be decoded: {0}")]
    Decode(String),
}

/// Body of `POST /contact/`. `hp` is the honeypot field and is normally empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactRequest {
    pub nombre: String,
    pub correo: String,
    pub mensaje: String,
    pub hp: String,
}

/// JSON reply of the contact endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ContactResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A decoded contact reply together with whether the HTTP status was 2xx.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactReply {
    pub status_ok: bool,
    pub body: ContactResponse,
}

impl ContactReply {
    pub fn accepted(&self) -> bool {
        self.status_ok && self.body.ok
    }

    /// Server-provided explanation for a rejection, if any.
    pub fn reason(&self) -> Option<&str> {
        self.body
            .error
            .as_deref()
            .or(self.body.message.as_deref())
    }
}

/// Whether a `Content-Type` header value denotes JSON.
///
/// Accepts `application/json` and any `+json` structured suffix
/// (`application/problem+json`, `application/vnd.api+json`), ignoring
/// parameters and case.
pub fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    let Some((kind, subtype)) = essence.split_once('/') else {
        return false;
    };
    if kind.is_empty() || subtype.is_empty() {
        return false;
    }
    (kind == "application" && subtype == "json") || subtype.ends_with("+json")
}
