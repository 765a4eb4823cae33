//! Filter and render state for the projects gallery.
//!
//! DESIGN
//! ======
//! Every category/subcategory click becomes a `Selection`. The page driver
//! claims a ticket with `begin_reset`, waits out the fade when cards are on
//! screen, then hands the ticket back to `complete`. Only the latest ticket
//! is applied, and applying replaces the card list wholesale, so overlapping
//! clicks can neither interleave nor duplicate cards.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::net::types::LoadError;
use crate::state::projects::{ProjectRecord, ProjectSession};
use crate::util::filter::{Filter, LOAD_ERROR_MESSAGE, NO_PROJECTS_LOADED, UrlPin};
use crate::util::taxonomy::Taxonomy;

/// Duration of the card fade/slide-out played before clearing the grid.
pub const FADE_OUT_MS: u32 = 400;

/// A user click in the category panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    Category(String),
    Subcategory { category: String, subcategory: String },
}

/// What a selection does once the reset has finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionPlan {
    /// Category left expanded by the reset.
    pub except: Option<String>,
    /// Category to expand and filter to render. `None` collapses everything.
    pub then: Option<(String, Filter)>,
}

/// Outcome of `begin_reset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetTicket {
    pub ticket: u64,
    /// Whether cards are on screen and the fade must be awaited.
    pub fade: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    /// Slug of the single expanded category.
    pub expanded: Option<String>,
    pub filter: Filter,
    /// Cards currently rendered.
    pub cards: Vec<ProjectRecord>,
    /// Cards are playing the fade-out.
    pub leaving: bool,
    /// Message rendered instead of cards.
    pub notice: Option<&'static str>,
    /// Panel narrowing from the page URL, cleared by the first click.
    pub pin: Option<UrlPin>,
    ticket: u64,
    render_seq: u64,
}

impl GalleryState {
    /// First render after the load, honoring the filter taken from the URL.
    ///
    /// A filter naming a known category also expands and pins it.
    pub fn start(&mut self, projects: &[ProjectRecord], taxonomy: &Taxonomy, initial: Filter) {
        if projects.is_empty() {
            self.show_message(NO_PROJECTS_LOADED);
            return;
        }
        self.expanded = initial.expanded_category(taxonomy);
        self.pin = UrlPin::for_filter(&initial, taxonomy);
        self.show(initial, projects);
    }

    /// Resolve a click against the current expansion.
    pub fn plan(&self, selection: &Selection) -> SelectionPlan {
        match selection {
            Selection::Category(slug) if self.is_expanded(slug) => SelectionPlan { except: None, then: None },
            Selection::Category(slug) => SelectionPlan {
                except: Some(slug.clone()),
                then: Some((slug.clone(), Filter::Category(slug.clone()))),
            },
            Selection::Subcategory { category, subcategory } => SelectionPlan {
                except: Some(category.clone()),
                then: Some((category.clone(), Filter::Subcategory(subcategory.clone()))),
            },
        }
    }

    /// Claim a ticket and start the fade if anything is rendered.
    pub fn begin_reset(&mut self) -> ResetTicket {
        self.ticket += 1;
        self.pin = None;
        let fade = !self.cards.is_empty();
        if fade {
            self.leaving = true;
        }
        ResetTicket { ticket: self.ticket, fade }
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.ticket == ticket
    }

    /// Clear the grid and collapse every category except `except`.
    pub fn finish_reset(&mut self, except: Option<&str>) {
        self.cards.clear();
        self.notice = None;
        self.leaving = false;
        if self.expanded.as_deref() != except {
            self.expanded = None;
        }
    }

    /// Apply a planned selection if `ticket` is still the latest.
    ///
    /// Returns `false` when a newer selection superseded this one.
    pub fn complete(&mut self, ticket: u64, plan: &SelectionPlan, projects: &[ProjectRecord]) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.finish_reset(plan.except.as_deref());
        if let Some((category, filter)) = &plan.then {
            self.expanded = Some(category.clone());
            self.show(filter.clone(), projects);
        }
        true
    }

    /// Render `filter` over `projects`, or its empty message.
    pub fn show(&mut self, filter: Filter, projects: &[ProjectRecord]) {
        let list = filter.apply(projects);
        self.notice = list.is_empty().then(|| filter.empty_message());
        self.cards = list;
        self.filter = filter;
        self.render_seq += 1;
    }

    /// Replace the grid with a fixed message.
    pub fn show_message(&mut self, message: &'static str) {
        self.cards.clear();
        self.notice = Some(message);
        self.render_seq += 1;
    }

    /// Open in the panel: the clicked category, or any category the URL pin holds.
    pub fn is_expanded(&self, slug: &str) -> bool {
        self.expanded.as_deref() == Some(slug) || self.pin.as_ref().is_some_and(|pin| pin.shows_category(slug))
    }

    /// Bumped on every render so card keys change and reveal animations replay.
    pub fn render_seq(&self) -> u64 {
        self.render_seq
    }
}

/// Apply the outcome of the one-shot project load to the page state.
///
/// A failure leaves the session empty and shows the fixed load error; there
/// is no partial result.
pub fn apply_load(
    session: &mut ProjectSession,
    gallery: &mut GalleryState,
    result: Result<Vec<ProjectRecord>, LoadError>,
    initial: Filter,
) {
    match result {
        Ok(projects) => {
            gallery.start(&projects, &Taxonomy::build(&projects), initial);
            session.loaded(projects);
        }
        Err(_) => {
            session.failed();
            gallery.show_message(LOAD_ERROR_MESSAGE);
        }
    }
}
