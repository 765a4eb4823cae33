//! Category/subcategory tree derived from the loaded projects.
//!
//! Built once per page load. Order is first-seen order over the project list,
//! so the panel mirrors how the admin sorted projects rather than the alphabet.

#[cfg(test)]
#[path = "taxonomy_test.rs"]
mod taxonomy_test;

use crate::state::projects::ProjectRecord;
use crate::util::slug::{slugify, title_case};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubcategoryEntry {
    pub slug: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaxonomyNode {
    pub slug: String,
    pub label: String,
    pub subcategories: Vec<SubcategoryEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Taxonomy {
    nodes: Vec<TaxonomyNode>,
}

impl Taxonomy {
    /// Derive the tree from a project list.
    ///
    /// Projects with a blank category are skipped. Labels are last-write-wins
    /// per slug; positions are first-seen.
    pub fn build(projects: &[ProjectRecord]) -> Self {
        let mut tree = Self::default();
        for project in projects {
            let cat_slug = slugify(&project.category);
            if cat_slug.is_empty() {
                continue;
            }
            let node = tree.entry(cat_slug);
            node.label = title_case(&project.category);

            let sub_slug = slugify(&project.subcategory);
            if sub_slug.is_empty() {
                continue;
            }
            let label = title_case(&project.subcategory);
            match node.subcategories.iter_mut().find(|s| s.slug == sub_slug) {
                Some(existing) => existing.label = label,
                None => node.subcategories.push(SubcategoryEntry { slug: sub_slug, label }),
            }
        }
        tree
    }

    fn entry(&mut self, slug: String) -> &mut TaxonomyNode {
        let idx = match self.nodes.iter().position(|n| n.slug == slug) {
            Some(idx) => idx,
            None => {
                self.nodes.push(TaxonomyNode { slug, label: String::new(), subcategories: Vec::new() });
                self.nodes.len() - 1
            }
        };
        &mut self.nodes[idx]
    }

    pub fn nodes(&self) -> &[TaxonomyNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, slug: &str) -> Option<&TaxonomyNode> {
        self.nodes.iter().find(|n| n.slug == slug)
    }

    /// Every category listing `sub_slug`, in panel order.
    pub fn categories_of_subcategory<'a>(&'a self, sub_slug: &'a str) -> impl Iterator<Item = &'a TaxonomyNode> + 'a {
        self.nodes
            .iter()
            .filter(move |n| n.subcategories.iter().any(|s| s.slug == sub_slug))
    }
}
