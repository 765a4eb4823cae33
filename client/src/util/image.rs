//! Image URL resolution and the inline placeholder graphic.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

/// Inline "Sin imagen" SVG used whenever a project has no usable image.
pub const PLACEHOLDER_IMAGE: &str = concat!(
    "data:image/svg+xml;utf8,",
    "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"800\" height=\"600\">",
    "<rect width=\"100%\" height=\"100%\" fill=\"%23e5e7eb\"/>",
    "<text x=\"50%\" y=\"50%\" dominant-baseline=\"middle\" text-anchor=\"middle\" ",
    "fill=\"%239ca3af\" font-family=\"Arial, Helvetica, sans-serif\" font-size=\"24\">",
    "Sin imagen</text></svg>",
);

/// Resolve an image URL returned by the API against `api_origin`.
///
/// Absolute `http(s)://` URLs pass through, root-relative paths get the
/// origin prepended, anything else (page-relative, `data:`) is left alone.
pub fn resolve_image_url(raw: &str, api_origin: &str) -> String {
    if has_http_scheme(raw) {
        return raw.to_owned();
    }
    if raw.starts_with('/') {
        return format!("{api_origin}{raw}");
    }
    raw.to_owned()
}

fn has_http_scheme(raw: &str) -> bool {
    let lower = raw
        .get(..8)
        .unwrap_or(raw)
        .to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Source to swap in after an `<img>` failed to load, if any.
///
/// Returns `None` once the placeholder itself is showing so a broken
/// placeholder can't loop on the error handler.
pub fn fallback_src(current: &str) -> Option<&'static str> {
    (current != PLACEHOLDER_IMAGE).then_some(PLACEHOLDER_IMAGE)
}
