//! Networking: JSON transport, tag cache, reactive queries, and API calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` talks to the `/api` proxy, `cache` and `query` give pages cached
//! reads with tag invalidation, and `api`/`resources` name every call the
//! console makes.

pub mod api;
pub mod cache;
pub mod http;
pub mod query;
pub mod resources;
