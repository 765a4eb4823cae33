//! Gallery filter selection and the fixed user-facing gallery messages.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::state::projects::ProjectRecord;
use crate::util::slug::slugify;
use crate::util::taxonomy::Taxonomy;

pub const LOAD_ERROR_MESSAGE: &str =
    "Error al cargar la información de proyectos. Por favor, intente más tarde.";
pub const NO_PROJECTS_LOADED: &str = "Aún no hay proyectos cargados.";
pub const NO_PROJECTS_IN_CATEGORY: &str = "No hay proyectos en esta categoría.";
pub const NO_PROJECTS_IN_SUBCATEGORY: &str = "No hay proyectos en esta subcategoría.";

/// Which projects the gallery shows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    /// Category slug.
    Category(String),
    /// Subcategory slug, matched across every category.
    Subcategory(String),
}

impl Filter {
    /// Initial filter from the `categoria` / `sub` query parameters.
    ///
    /// `sub` wins when both are present. Empty parameters count as absent.
    pub fn from_query(categoria: Option<&str>, sub: Option<&str>) -> Self {
        fn present(value: Option<&str>) -> Option<&str> {
            value.filter(|v| !v.is_empty())
        }
        if let Some(sub) = present(sub) {
            return Self::Subcategory(slugify(sub));
        }
        if let Some(categoria) = present(categoria) {
            return Self::Category(slugify(categoria));
        }
        Self::All
    }

    pub fn matches(&self, project: &ProjectRecord) -> bool {
        match self {
            Self::All => true,
            Self::Category(slug) => project.category_slug() == *slug,
            Self::Subcategory(slug) => project.subcategory_slug() == *slug,
        }
    }

    pub fn apply(&self, projects: &[ProjectRecord]) -> Vec<ProjectRecord> {
        projects
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }

    /// Message shown instead of an empty grid.
    pub fn empty_message(&self) -> &'static str {
        match self {
            Self::All => NO_PROJECTS_LOADED,
            Self::Category(_) => NO_PROJECTS_IN_CATEGORY,
            Self::Subcategory(_) => NO_PROJECTS_IN_SUBCATEGORY,
        }
    }

    /// Category panel to expand alongside this filter.
    pub fn expanded_category(&self, taxonomy: &Taxonomy) -> Option<String> {
        match self {
            Self::All => None,
            Self::Category(slug) => taxonomy.get(slug).map(|n| n.slug.clone()),
            Self::Subcategory(slug) => taxonomy
                .categories_of_subcategory(slug)
                .next()
                .map(|n| n.slug.clone()),
        }
    }
}

/// Panel narrowing applied when the page was opened with a filter in the URL.
///
/// Only the matched categories stay visible, expanded. A `categoria` link
/// matches one category; a `sub` link matches every category listing that
/// subcategory, and only the matched subcategory button stays visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlPin {
    /// Category slugs in panel order.
    pub categories: Vec<String>,
    pub subcategory: Option<String>,
}

impl UrlPin {
    /// Pin for an initial filter, if it names something in the taxonomy.
    pub fn for_filter(filter: &Filter, taxonomy: &Taxonomy) -> Option<Self> {
        let (categories, subcategory) = match filter {
            Filter::All => return None,
            Filter::Category(slug) => (taxonomy.get(slug).map(|n| n.slug.clone()).into_iter().collect(), None),
            Filter::Subcategory(slug) => (
                taxonomy
                    .categories_of_subcategory(slug)
                    .map(|n| n.slug.clone())
                    .collect::<Vec<_>>(),
                Some(slug.clone()),
            ),
        };
        if categories.is_empty() {
            return None;
        }
        Some(Self { categories, subcategory })
    }

    /// Visible, and expanded, while the pin holds.
    pub fn shows_category(&self, slug: &str) -> bool {
        self.categories.iter().any(|c| c == slug)
    }

    pub fn shows_subcategory(&self, slug: &str) -> bool {
        self.subcategory.as_deref().map_or(true, |s| s == slug)
    }
}
