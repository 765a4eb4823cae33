use super::*;

fn record(category: &str, subcategory: &str) -> ProjectRecord {
    ProjectRecord {
        id: Some(1),
        name: "Casa Norte".to_owned(),
        description: String::new(),
        category: category.to_owned(),
        subcategory: subcategory.to_owned(),
        images: Vec::new(),
        preview_image: crate::util::image::PLACEHOLDER_IMAGE.to_owned(),
    }
}

#[test]
fn session_default_is_loading_and_empty() {
    let session = ProjectSession::default();
    assert_eq!(session.status, LoadStatus::Loading);
    assert!(session.projects.is_empty());
    assert!(!session.is_loaded());
}

#[test]
fn loaded_stores_projects() {
    let mut session = ProjectSession::default();
    session.loaded(vec![record("Arquitectura", "Residencial")]);
    assert!(session.is_loaded());
    assert_eq!(session.projects.len(), 1);
}

#[test]
fn failed_clears_projects() {
    let mut session = ProjectSession::default();
    session.projects.push(record("Arquitectura", ""));
    session.failed();
    assert_eq!(session.status, LoadStatus::Failed);
    assert!(session.projects.is_empty());
}

#[test]
fn record_slugs_normalize_raw_text() {
    let p = record("  Diseño Web ", "Tiendas  En Línea");
    assert_eq!(p.category_slug(), "diseno-web");
    assert_eq!(p.subcategory_slug(), "tiendas-en-linea");
}
