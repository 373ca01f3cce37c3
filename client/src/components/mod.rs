//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome, tables and dialogs while reading
//! shared state (auth, UI preferences, query cache) from Leptos context.

pub mod confirm_dialog;
pub mod console_layout;
pub mod data_table;
pub mod form_dialog;
pub mod query_status;
pub mod resource_section;
pub mod role_gate;
pub mod status_badge;
