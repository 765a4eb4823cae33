//! Networking modules for the projects API and the contact endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `projects_parse` turns loosely shaped JSON
//! into `ProjectRecord`s, and `types` defines request/response/error types.

pub mod api;
pub mod projects_parse;
pub mod types;
