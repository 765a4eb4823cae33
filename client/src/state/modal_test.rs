use super::*;

fn project_with_images(count: usize) -> ProjectRecord {
    let images = (1..=count)
        .map(|i| format!("https://cdn.example.com/{i}.jpg"))
        .collect::<Vec<_>>();
    ProjectRecord {
        id: Some(1),
        name: "Casa Norte".to_owned(),
        description: "Vivienda".to_owned(),
        category: "Arquitectura".to_owned(),
        subcategory: "Residencial".to_owned(),
        preview_image: images.first().cloned().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned()),
        images,
    }
}

// =============================================================
// Carousel
// =============================================================

#[test]
fn next_three_times_wraps_back_to_first() {
    let mut open = OpenModal::new(project_with_images(3));
    let first = open.carousel.current().to_owned();
    for _ in 0..3 {
        open.carousel.next();
    }
    assert_eq!(open.carousel.index(), 0);
    assert_eq!(open.carousel.current(), first);
}

#[test]
fn prev_from_first_goes_to_last() {
    let mut carousel = Carousel::new(project_with_images(3).images);
    carousel.prev();
    assert_eq!(carousel.index(), 2);
    assert_eq!(carousel.current(), "https://cdn.example.com/3.jpg");
}

#[test]
fn single_image_hides_navigation_and_ignores_steps() {
    let mut carousel = Carousel::new(project_with_images(1).images);
    assert!(!carousel.has_navigation());
    carousel.next();
    carousel.prev();
    assert_eq!(carousel.index(), 0);
    assert_eq!(carousel.current(), "https://cdn.example.com/1.jpg");
}

#[test]
fn empty_carousel_shows_placeholder() {
    let mut carousel = Carousel::new(Vec::new());
    assert!(carousel.is_empty());
    assert!(!carousel.has_navigation());
    carousel.next();
    assert_eq!(carousel.current(), PLACEHOLDER_IMAGE);
}

// =============================================================
// Keys
// =============================================================

#[test]
fn key_mapping_covers_escape_and_arrows() {
    assert_eq!(ModalKey::from_key("Escape"), Some(ModalKey::Close));
    assert_eq!(ModalKey::from_key("ArrowLeft"), Some(ModalKey::Prev));
    assert_eq!(ModalKey::from_key("ArrowRight"), Some(ModalKey::Next));
    assert_eq!(ModalKey::from_key("Enter"), None);
}

#[test]
fn arrow_keys_leave_single_image_unchanged() {
    let mut modal = Some(OpenModal::new(project_with_images(1)));
    apply_key(&mut modal, ModalKey::Next);
    apply_key(&mut modal, ModalKey::Prev);
    assert_eq!(modal.as_ref().map(|m| m.carousel.index()), Some(0));
}

#[test]
fn escape_closes_modal() {
    let mut modal = Some(OpenModal::new(project_with_images(2)));
    apply_key(&mut modal, ModalKey::Close);
    assert!(modal.is_none());
}

#[test]
fn keys_on_closed_modal_are_noops() {
    let mut modal: Option<OpenModal> = None;
    apply_key(&mut modal, ModalKey::Next);
    assert!(modal.is_none());
}

#[test]
fn opening_replaces_previous_modal() {
    let mut modal = Some(OpenModal::new(project_with_images(3)));
    if let Some(open) = modal.as_mut() {
        open.carousel.next();
    }
    modal = Some(OpenModal::new(project_with_images(2)));
    assert_eq!(modal.as_ref().map(|m| (m.carousel.len(), m.carousel.index())), Some((2, 0)));
}

#[test]
fn subcategory_caption_is_empty_without_subcategory() {
    let mut project = project_with_images(0);
    assert_eq!(OpenModal::new(project.clone()).subcategory_caption(), "Categoría: Residencial");
    project.subcategory.clear();
    assert_eq!(OpenModal::new(project).subcategory_caption(), "");
}
