//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold the pure rules of the site (slugs, filters, taxonomy,
//! animation timing) and isolate the few browser concerns (observers, timers,
//! document metadata) behind small functions pages can call.

pub mod filter;
pub mod image;
pub mod preloader;
pub mod reveal;
pub mod site_config;
pub mod slug;
pub mod taxonomy;
pub mod timers;
