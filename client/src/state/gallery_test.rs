use super::*;
use crate::state::projects::LoadStatus;
use crate::util::filter::{LOAD_ERROR_MESSAGE, NO_PROJECTS_IN_CATEGORY, NO_PROJECTS_IN_SUBCATEGORY, NO_PROJECTS_LOADED};
use crate::util::image::PLACEHOLDER_IMAGE;

fn project(name: &str, category: &str, subcategory: &str) -> ProjectRecord {
    ProjectRecord {
        id: None,
        name: name.to_owned(),
        description: String::new(),
        category: category.to_owned(),
        subcategory: subcategory.to_owned(),
        images: Vec::new(),
        preview_image: PLACEHOLDER_IMAGE.to_owned(),
    }
}

fn catalog() -> Vec<ProjectRecord> {
    vec![
        project("Casa Norte", "Arquitectura", "Residencial"),
        project("Torre Sur", "Arquitectura", "Comercial"),
        project("Loft", "Interiorismo", "Residencial"),
    ]
}

fn category(slug: &str) -> Selection {
    Selection::Category(slug.to_owned())
}

fn subcategory(category: &str, sub: &str) -> Selection {
    Selection::Subcategory { category: category.to_owned(), subcategory: sub.to_owned() }
}

/// Run a selection start to finish, as the page driver does.
fn select(state: &mut GalleryState, selection: &Selection, projects: &[ProjectRecord]) -> bool {
    let plan = state.plan(selection);
    let reset = state.begin_reset();
    state.complete(reset.ticket, &plan, projects)
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn gallery_default_is_empty_and_collapsed() {
    let state = GalleryState::default();
    assert!(state.expanded.is_none());
    assert_eq!(state.filter, Filter::All);
    assert!(state.cards.is_empty());
    assert!(state.notice.is_none());
    assert_eq!(state.render_seq(), 0);
}

// =============================================================
// Category toggling
// =============================================================

#[test]
fn category_click_expands_and_renders_its_projects() {
    let mut state = GalleryState::default();
    assert!(select(&mut state, &category("arquitectura"), &catalog()));
    assert!(state.is_expanded("arquitectura"));
    assert_eq!(state.cards.len(), 2);
    assert_eq!(state.filter, Filter::Category("arquitectura".to_owned()));
}

#[test]
fn second_click_on_open_category_collapses_everything() {
    let mut state = GalleryState::default();
    select(&mut state, &category("arquitectura"), &catalog());
    select(&mut state, &category("arquitectura"), &catalog());
    assert!(state.expanded.is_none());
    assert!(state.cards.is_empty());
    assert!(state.notice.is_none());
}

#[test]
fn only_one_category_is_expanded_at_a_time() {
    let mut state = GalleryState::default();
    select(&mut state, &category("arquitectura"), &catalog());
    select(&mut state, &category("interiorismo"), &catalog());
    assert!(state.is_expanded("interiorismo"));
    assert!(!state.is_expanded("arquitectura"));
}

#[test]
fn subcategory_click_expands_owner_and_filters_by_slug() {
    let mut state = GalleryState::default();
    select(&mut state, &category("interiorismo"), &catalog());
    select(&mut state, &subcategory("arquitectura", "residencial"), &catalog());
    assert!(state.is_expanded("arquitectura"));
    let names = state.cards.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Casa Norte", "Loft"]);
}

// =============================================================
// Empty results
// =============================================================

#[test]
fn empty_category_shows_message_and_no_cards() {
    let mut state = GalleryState::default();
    select(&mut state, &category("paisajismo"), &catalog());
    assert!(state.cards.is_empty());
    assert_eq!(state.notice, Some(NO_PROJECTS_IN_CATEGORY));
}

#[test]
fn empty_subcategory_shows_message_and_no_cards() {
    let mut state = GalleryState::default();
    select(&mut state, &subcategory("arquitectura", "industrial"), &catalog());
    assert!(state.cards.is_empty());
    assert_eq!(state.notice, Some(NO_PROJECTS_IN_SUBCATEGORY));
}

#[test]
fn message_is_cleared_by_next_render() {
    let mut state = GalleryState::default();
    select(&mut state, &category("paisajismo"), &catalog());
    select(&mut state, &category("arquitectura"), &catalog());
    assert!(state.notice.is_none());
    assert_eq!(state.cards.len(), 2);
}

// =============================================================
// Reset ordering
// =============================================================

#[test]
fn begin_reset_fades_only_when_cards_are_shown() {
    let mut state = GalleryState::default();
    let first = state.begin_reset();
    assert!(!first.fade);
    assert!(!state.leaving);

    state.show(Filter::All, &catalog());
    let second = state.begin_reset();
    assert!(second.fade);
    assert!(state.leaving);
    assert!(second.ticket > first.ticket);
}

#[test]
fn overlapping_selections_apply_only_the_latest() {
    let mut state = GalleryState::default();
    state.show(Filter::All, &catalog());

    // Second click lands while the first is still fading out.
    let plan_a = state.plan(&category("arquitectura"));
    let reset_a = state.begin_reset();
    let plan_b = state.plan(&category("interiorismo"));
    let reset_b = state.begin_reset();

    assert!(!state.complete(reset_a.ticket, &plan_a, &catalog()));
    assert!(state.complete(reset_b.ticket, &plan_b, &catalog()));

    assert!(state.is_expanded("interiorismo"));
    let names = state.cards.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Loft"]);
    assert!(!state.leaving);
}

#[test]
fn repeated_renders_never_duplicate_cards() {
    let mut state = GalleryState::default();
    for _ in 0..3 {
        select(&mut state, &subcategory("arquitectura", "residencial"), &catalog());
    }
    assert_eq!(state.cards.len(), 2);
}

#[test]
fn render_seq_bumps_on_every_render() {
    let mut state = GalleryState::default();
    state.show(Filter::All, &catalog());
    let seq = state.render_seq();
    state.show(Filter::All, &catalog());
    assert_eq!(state.render_seq(), seq + 1);
    state.show_message("x");
    assert_eq!(state.render_seq(), seq + 2);
}

#[test]
fn first_click_clears_url_pin() {
    let mut state = GalleryState {
        pin: Some(UrlPin { categories: vec!["arquitectura".to_owned()], subcategory: None }),
        ..GalleryState::default()
    };
    select(&mut state, &category("interiorismo"), &catalog());
    assert!(state.pin.is_none());
}

// =============================================================
// Initial render
// =============================================================

#[test]
fn start_without_query_renders_everything() {
    let projects = catalog();
    let mut state = GalleryState::default();
    state.start(&projects, &Taxonomy::build(&projects), Filter::All);
    assert_eq!(state.cards.len(), 3);
    assert!(state.expanded.is_none());
    assert!(state.pin.is_none());
}

#[test]
fn start_with_category_query_expands_and_pins() {
    let projects = catalog();
    let mut state = GalleryState::default();
    state.start(&projects, &Taxonomy::build(&projects), Filter::from_query(Some("Interiorismo"), None));
    assert!(state.is_expanded("interiorismo"));
    assert_eq!(state.pin.as_ref().map(|p| p.categories.clone()), Some(vec!["interiorismo".to_owned()]));
    assert_eq!(state.cards.len(), 1);
}

#[test]
fn start_with_sub_query_filters_by_subcategory() {
    let projects = catalog();
    let mut state = GalleryState::default();
    state.start(&projects, &Taxonomy::build(&projects), Filter::from_query(None, Some("comercial")));
    assert!(state.is_expanded("arquitectura"));
    let names = state.cards.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Torre Sur"]);
}

#[test]
fn start_with_unknown_query_shows_empty_message() {
    let projects = catalog();
    let mut state = GalleryState::default();
    state.start(&projects, &Taxonomy::build(&projects), Filter::from_query(Some("paisajismo"), None));
    assert!(state.cards.is_empty());
    assert_eq!(state.notice, Some(NO_PROJECTS_IN_CATEGORY));
    assert!(state.pin.is_none());
}

#[test]
fn start_with_no_projects_shows_not_loaded_message() {
    let mut state = GalleryState::default();
    state.start(&[], &Taxonomy::default(), Filter::All);
    assert_eq!(state.notice, Some(NO_PROJECTS_LOADED));
}

#[test]
fn start_with_shared_sub_query_expands_every_owner() {
    let projects = catalog();
    let mut state = GalleryState::default();
    state.start(&projects, &Taxonomy::build(&projects), Filter::from_query(None, Some("residencial")));
    assert!(state.is_expanded("arquitectura"));
    assert!(state.is_expanded("interiorismo"));
    let names = state.cards.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Casa Norte", "Loft"]);
}

#[test]
fn click_after_shared_sub_pin_restores_accordion() {
    let projects = catalog();
    let mut state = GalleryState::default();
    state.start(&projects, &Taxonomy::build(&projects), Filter::from_query(None, Some("residencial")));
    select(&mut state, &subcategory("arquitectura", "comercial"), &projects);
    assert!(state.is_expanded("arquitectura"));
    assert!(!state.is_expanded("interiorismo"));
}

// =============================================================
// Load outcome
// =============================================================

#[test]
fn apply_load_success_records_projects_and_renders() {
    let mut session = ProjectSession::default();
    let mut state = GalleryState::default();
    apply_load(&mut session, &mut state, Ok(catalog()), Filter::All);
    assert!(session.is_loaded());
    assert_eq!(session.projects.len(), 3);
    assert_eq!(state.cards.len(), 3);
    assert!(state.notice.is_none());
}

#[test]
fn apply_load_empty_success_shows_not_loaded_message() {
    let mut session = ProjectSession::default();
    let mut state = GalleryState::default();
    apply_load(&mut session, &mut state, Ok(Vec::new()), Filter::All);
    assert!(session.is_loaded());
    assert_eq!(state.notice, Some(NO_PROJECTS_LOADED));
}

#[test]
fn apply_load_failure_shows_error_and_keeps_list_empty() {
    let errors = [
        LoadError::Network("offline".to_owned()),
        LoadError::Status(503),
        LoadError::NotJson("text/html".to_owned()),
        LoadError::Decode("eof".to_owned()),
    ];
    for error in errors {
        let mut session = ProjectSession::default();
        let mut state = GalleryState::default();
        apply_load(&mut session, &mut state, Err(error), Filter::from_query(Some("Arquitectura"), None));
        assert_eq!(session.status, LoadStatus::Failed);
        assert!(session.projects.is_empty());
        assert!(state.cards.is_empty());
        assert_eq!(state.notice, Some(LOAD_ERROR_MESSAGE));
        assert!(state.pin.is_none());
    }
}
