//! Generic CRUD calls plus the resource-specific actions.
//!
//! Every function takes owned arguments so the returned future can be handed
//! straight to [`super::query::Mutation::run`]. Paths come from the
//! `wire::resources` catalog; nothing here builds a URL by hand.

#![allow(clippy::needless_pass_by_value)]

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use wire::models::{ActiveToggle, DriverVerification, GenerateCodes, VerificationStatus};
use wire::resources::{
    Admins, Assignments, Drivers, Notifications, ParentSubscriptions, SchoolSubscriptions, Trips,
};
use wire::{ApiError, Deletable, Envelope, Mutable};

use super::http::{self, Method};

/// Method and path for saving a draft: create when `id` is `None`.
pub(crate) fn save_target<R: Mutable>(id: Option<&str>) -> (Method, String) {
    match id {
        Some(id) => (Method::Put, R::update_path(id)),
        None => (Method::Post, R::create_path()),
    }
}

/// Create or update depending on whether the record already exists.
///
/// # Errors
///
/// See [`http::send`].
pub async fn save<R: Mutable>(id: Option<String>, draft: R::Draft) -> Result<Envelope, ApiError> {
    let (method, path) = save_target::<R>(id.as_deref());
    http::send_json(method, &path, &draft).await
}

/// `DELETE BASE_PATH/{id}`.
///
/// # Errors
///
/// See [`http::send`].
pub async fn delete<R: Deletable>(id: String) -> Result<Envelope, ApiError> {
    http::send(Method::Delete, &R::delete_path(&id), None).await
}

/// Enable or disable an admin account.
///
/// # Errors
///
/// See [`http::send`].
pub async fn set_admin_active(id: String, is_active: bool) -> Result<Envelope, ApiError> {
    http::send_json(Method::Patch, &Admins::status_path(&id), &ActiveToggle { is_active }).await
}

/// Record the outcome of a driver's document review.
///
/// # Errors
///
/// See [`http::send`].
pub async fn verify_driver(id: String, status: VerificationStatus) -> Result<Envelope, ApiError> {
    http::send_json(Method::Patch, &Drivers::verify_path(&id), &DriverVerification { status }).await
}

/// # Errors
///
/// See [`http::send`].
pub async fn cancel_trip(id: String) -> Result<Envelope, ApiError> {
    http::send(Method::Patch, &Trips::cancel_path(&id), None).await
}

/// # Errors
///
/// See [`http::send`].
pub async fn approve_assignment(id: String) -> Result<Envelope, ApiError> {
    http::send(Method::Patch, &Assignments::approve_path(&id), None).await
}

/// # Errors
///
/// See [`http::send`].
pub async fn reject_assignment(id: String) -> Result<Envelope, ApiError> {
    http::send(Method::Patch, &Assignments::reject_path(&id), None).await
}

/// # Errors
///
/// See [`http::send`].
pub async fn cancel_parent_subscription(id: String) -> Result<Envelope, ApiError> {
    http::send(Method::Patch, &ParentSubscriptions::cancel_path(&id), None).await
}

/// Issue `count` redemption codes under a school subscription.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for a zero count, otherwise see [`http::send`].
pub async fn generate_codes(id: String, count: u32) -> Result<Envelope, ApiError> {
    if count == 0 {
        return Err(ApiError::Validation("Code count must be at least 1".to_owned()));
    }
    http::send_json(Method::Post, &SchoolSubscriptions::generate_codes_path(&id), &GenerateCodes { count }).await
}

/// # Errors
///
/// See [`http::send`].
pub async fn mark_notification_read(id: String) -> Result<Envelope, ApiError> {
    http::send(Method::Patch, &Notifications::read_path(&id), None).await
}
