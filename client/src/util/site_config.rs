//! Client-side site configuration.
//!
//! The server publishes its `API_BASE` setting in the SSR shell as
//! `<meta name="api-base">`; the hydrated client reads it back here so both
//! render paths agree on where the REST backend lives.

#[cfg(test)]
#[path = "site_config_test.rs"]
mod site_config_test;

/// Name of the `<meta>` tag carrying the API base URL.
pub const API_BASE_META: &str = "api-base";

const PROJECTS_PATH: &str = "/api/proyectos/?page_size=1000";
const CONTACT_PATH: &str = "/contact/";

/// Where the REST backend lives. An empty base means same-origin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteConfig {
    api_base: String,
}

impl SiteConfig {
    /// Build from a raw base URL, trimming one trailing `/`.
    pub fn new(api_base: &str) -> Self {
        let trimmed = api_base.trim();
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        Self { api_base: trimmed.to_owned() }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Projects listing URL with the large page-size hint.
    pub fn projects_url(&self) -> String {
        format!("{}{PROJECTS_PATH}", self.api_base)
    }

    pub fn contact_url(&self) -> String {
        format!("{}{CONTACT_PATH}", self.api_base)
    }

    /// Origin used to resolve root-relative image paths.
    ///
    /// Falls back to the page origin when the backend is same-origin.
    pub fn api_origin(&self, page_origin: &str) -> String {
        if self.api_base.is_empty() {
            page_origin.to_owned()
        } else {
            self.api_base.clone()
        }
    }
}

/// Read the config published in the SSR shell.
pub fn read_from_document() -> SiteConfig {
    #[cfg(feature = "hydrate")]
    {
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| {
                doc.query_selector(&format!("meta[name=\"{API_BASE_META}\"]"))
                    .ok()
                    .flatten()
            })
            .and_then(|meta| meta.get_attribute("content"))
            .unwrap_or_default();
        SiteConfig::new(&content)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SiteConfig::default()
    }
}

/// Origin of the current page (`window.location.origin`).
pub fn page_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
