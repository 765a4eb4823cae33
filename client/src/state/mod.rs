//! Reactive state models shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages wrap these plain structs in `RwSignal`s. All transitions are methods
//! on the structs so they can be tested without a browser.

pub mod gallery;
pub mod hover_preview;
pub mod modal;
pub mod projects;
