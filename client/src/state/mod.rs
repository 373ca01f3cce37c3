//! Client state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` holds the verified session, `ui` holds persisted presentation
//! preferences. The query cache lives in `net::cache`.

pub mod auth;
pub mod ui;
