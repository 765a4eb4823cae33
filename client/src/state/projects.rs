//! Loaded project records and the per-page load session.
//!
//! DESIGN
//! ======
//! `ProjectSession` is created in `Loading` when the gallery page mounts,
//! moves to `Loaded` or `Failed` exactly once, and is provided to the page's
//! components through context. Nothing writes back to it afterwards.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::util::slug::slugify;

/// A project normalized from the API payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    /// Raw category text as entered in the admin.
    pub category: String,
    /// Raw subcategory text as entered in the admin.
    pub subcategory: String,
    /// Resolved image URLs, in API order. May be empty.
    pub images: Vec<String>,
    /// First image, or the placeholder. Never empty.
    pub preview_image: String,
}

impl ProjectRecord {
    pub fn category_slug(&self) -> String {
        slugify(&self.category)
    }

    pub fn subcategory_slug(&self) -> String {
        slugify(&self.subcategory)
    }
}

/// Where the one-shot project load stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}

/// Page-local snapshot of the project list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectSession {
    pub status: LoadStatus,
    pub projects: Vec<ProjectRecord>,
}

impl ProjectSession {
    /// Record a successful load.
    pub fn loaded(&mut self, projects: Vec<ProjectRecord>) {
        self.status = LoadStatus::Loaded;
        self.projects = projects;
    }

    /// Record a failed load. The list is left empty; there is no partial result.
    pub fn failed(&mut self) {
        self.status = LoadStatus::Failed;
        self.projects.clear();
    }

    pub fn is_loaded(&self) -> bool {
        self.status == LoadStatus::Loaded
    }
}
