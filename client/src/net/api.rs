//! Session and payment-gateway calls that are not resource CRUD.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; the login page and the session
//! check decide what a failure means for the UI. Nothing here retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use wire::auth::{LoginRequest, LoginResponse, TokenVerification};
use wire::envelope::decode_data;
use wire::payments::{CreateOrder, Order, Refund, RefundRequest, VerifyPayment};
use wire::resources::paths;
use wire::{ApiError, Envelope};

use super::http::{self, Method};

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn login_rejected_message(err: &ApiError) -> String {
    match err {
        ApiError::Api { status: 401, .. } => "Invalid email or password".to_owned(),
        ApiError::Transport(_) => "Could not reach the server, try again".to_owned(),
        other => other.to_string(),
    }
}

pub(crate) fn login_payload(email: &str, password: &str) -> Result<LoginRequest, ApiError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::Validation("Email and password are required".to_owned()));
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Exchange credentials for session tokens via `POST /admin/login`.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for blank credentials, otherwise any
/// transport, envelope or decode error.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let payload = login_payload(email, password)?;
    let envelope = http::send_json(Method::Post, paths::LOGIN, &payload).await?;
    decode_data(envelope.data)
}

/// Ask the API which role the stored token carries.
///
/// # Errors
///
/// Unauthorized responses surface as [`ApiError::Api`] with status 401/403.
pub async fn verify_token() -> Result<TokenVerification, ApiError> {
    let envelope = http::get(paths::VERIFY_TOKEN).await?;
    decode_data(envelope.data)
}

/// Open a gateway order for an amount in paise. The order itself is read
/// back with [`order_record`].
///
/// # Errors
///
/// See [`http::send`].
pub async fn create_order(order: CreateOrder) -> Result<Envelope, ApiError> {
    http::send_json(Method::Post, paths::RAZORPAY_CREATE_ORDER, &order).await
}

/// Decode the order returned by [`create_order`].
#[must_use]
pub fn order_record(envelope: &Envelope) -> Option<Order> {
    decode_data(envelope.data.clone()).ok()
}

/// Confirm a completed checkout with the gateway signature.
///
/// # Errors
///
/// See [`http::send`].
pub async fn verify_payment(payment: VerifyPayment) -> Result<Envelope, ApiError> {
    http::send_json(Method::Post, paths::RAZORPAY_VERIFY_PAYMENT, &payment).await
}

/// Refund a settled payment, fully or partially.
///
/// # Errors
///
/// See [`http::send`].
pub async fn refund(request: RefundRequest) -> Result<Envelope, ApiError> {
    http::send_json(Method::Post, paths::RAZORPAY_REFUND, &request).await
}

/// Decode the refund record returned by [`refund`], if the API sent one.
#[must_use]
pub fn refund_record(envelope: &Envelope) -> Option<Refund> {
    decode_data(envelope.data.clone()).ok()
}
