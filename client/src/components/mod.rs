//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the gallery chrome and page decorations while reading
//! and writing shared state from Leptos context providers.

pub mod category_panel;
pub mod preloader;
pub mod project_card;
pub mod project_modal;
pub mod reveal;
pub mod site_header;
