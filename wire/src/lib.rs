//! Shared REST wire schema for the transit admin console.
//!
//! This crate owns the representation of everything that crosses the HTTP
//! boundary: the `{success, data, message}` envelope, the error taxonomy,
//! entity DTOs, session roles, cache tags, and the endpoint catalog for each
//! backend resource. Both `client` and `server` depend on it; it performs no
//! I/O itself.

pub mod auth;
pub mod envelope;
pub mod error;
pub mod models;
pub mod payments;
pub mod resources;
pub mod tags;

pub use auth::{GuardDecision, Role, TokenVerification};
pub use envelope::Envelope;
pub use error::ApiError;
pub use models::Entity;
pub use resources::{Deletable, Mutable, Resource};
pub use tags::Tag;
