//! Lightbox state: which project is open and which image is showing.
//!
//! The modal is an `Option<OpenModal>` held in one signal, so opening a
//! project replaces whatever was open and at most one overlay exists.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::state::projects::ProjectRecord;
use crate::util::image::PLACEHOLDER_IMAGE;

/// Circular image carousel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    images: Vec<String>,
}

impl Carousel {
    pub fn new(images: Vec<String>) -> Self {
        Self { index: 0, images }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Prev/next controls are only shown with two or more images.
    pub fn has_navigation(&self) -> bool {
        self.images.len() > 1
    }

    /// Step forward, wrapping from the last image to the first.
    pub fn next(&mut self) {
        if self.has_navigation() {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    /// Step back, wrapping from the first image to the last.
    pub fn prev(&mut self) {
        if self.has_navigation() {
            self.index = (self.index + self.images.len() - 1) % self.images.len();
        }
    }

    /// Image to display; the placeholder when there are none.
    pub fn current(&self) -> &str {
        self.images
            .get(self.index)
            .map_or(PLACEHOLDER_IMAGE, String::as_str)
    }
}

/// An open lightbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenModal {
    pub project: ProjectRecord,
    pub carousel: Carousel,
}

impl OpenModal {
    pub fn new(project: ProjectRecord) -> Self {
        let carousel = Carousel::new(project.images.clone());
        Self { project, carousel }
    }

    /// Caption line above the description, empty without a subcategory.
    pub fn subcategory_caption(&self) -> String {
        if self.project.subcategory.is_empty() {
            String::new()
        } else {
            format!("Categoría: {}", self.project.subcategory)
        }
    }
}

/// Action bound to a key while the modal is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKey {
    Close,
    Prev,
    Next,
}

impl ModalKey {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Apply a key to the modal signal's value.
pub fn apply_key(modal: &mut Option<OpenModal>, key: ModalKey) {
    match key {
        ModalKey::Close => *modal = None,
        ModalKey::Prev => {
            if let Some(open) = modal.as_mut() {
                open.carousel.prev();
            }
        }
        ModalKey::Next => {
            if let Some(open) = modal.as_mut() {
                open.carousel.next();
            }
        }
    }
}
