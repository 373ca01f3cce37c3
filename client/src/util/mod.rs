//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, session tokens) and
//! pure helpers (validation, formatting) from page and component logic.

pub mod auth;
pub mod form;
pub mod format;
pub mod session;
pub mod storage;
