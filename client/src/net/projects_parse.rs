//! Normalization of the projects listing payload.
//!
//! The backend has shipped three envelope shapes over time and two spellings
//! for some fields. Everything is funneled into [`ProjectRecord`] here so the
//! rest of the client only sees one shape.

#[cfg(test)]
#[path = "projects_parse_test.rs"]
mod projects_parse_test;

use serde_json::Value;

use crate::state::projects::ProjectRecord;
use crate::util::image::{PLACEHOLDER_IMAGE, resolve_image_url};

/// Which envelope a payload arrived in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadShape {
    /// `[ ... ]`
    List,
    /// `{ "count": n, "results": [ ... ] }`
    Paginated,
    /// `{ "proyectos": [ ... ] }`
    Wrapped,
    /// Anything else. Treated as an empty list.
    Unknown,
}

/// Locate the item array inside a payload.
pub fn extract_items(data: &Value) -> (PayloadShape, &[Value]) {
    if let Some(items) = data.as_array() {
        return (PayloadShape::List, items);
    }
    if let Some(items) = data.get("results").and_then(Value::as_array) {
        return (PayloadShape::Paginated, items);
    }
    if let Some(items) = data.get("proyectos").and_then(Value::as_array) {
        return (PayloadShape::Wrapped, items);
    }
    (PayloadShape::Unknown, &[])
}

/// Normalize every item of a payload.
pub fn parse_projects(data: &Value, api_origin: &str) -> Vec<ProjectRecord> {
    let (_, items) = extract_items(data);
    items
        .iter()
        .map(|item| normalize_project(item, api_origin))
        .collect()
}

/// Normalize a single raw project.
pub fn normalize_project(item: &Value, api_origin: &str) -> ProjectRecord {
    let images = item
        .get("imagenes")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get("imagen").and_then(Value::as_str))
                .filter(|raw| !raw.is_empty())
                .map(|raw| resolve_image_url(raw, api_origin))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    let preview_image = images
        .first()
        .cloned()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned());

    ProjectRecord {
        id: item.get("id").and_then(Value::as_i64),
        name: first_text(item, &["nombre", "titulo"]),
        description: first_text(item, &["descripcion"]),
        category: first_text(item, &["categoria"]),
        subcategory: first_text(item, &["subcategoria", "sub"]),
        images,
        preview_image,
    }
}

/// Text of the first non-null field among `keys`, or `""`.
fn first_text(item: &Value, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| item.get(*key))
        .find(|value| !value.is_null())
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_default()
}
