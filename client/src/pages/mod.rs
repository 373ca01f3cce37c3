//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped orchestration (columns, form fields,
//! draft conversion, row actions) and delegates rendering to `components`.
//! Conversion functions are plain `fn`s so they can be unit tested without
//! a reactive runtime.

pub mod admins;
pub mod assignments;
pub mod audit_logs;
pub mod dashboard;
pub mod drivers;
pub mod login;
pub mod notifications;
pub mod parents;
pub mod payments;
pub mod plans;
pub mod ratings;
pub mod roles;
pub mod schools;
pub mod students;
pub mod subscriptions;
pub mod trips;
